//! 병합 결과 통합문서 (전체 / 매칭 / 요약 시트)

use super::summary::{Summary, SUMMARY_HEADER};
use crate::error::Result;
use market_merge_common::export::excel_core::{write_workbook, CellValue, SheetData};
use market_merge_common::{output_header, MergedRow};
use std::path::Path;

pub const SHEET_ALL: &str = "전체";
pub const SHEET_MATCHED: &str = "매칭";
pub const SHEET_SUMMARY: &str = "요약";

pub fn generate_excel(rows: &[MergedRow], summary: &Summary, output_path: &Path) -> Result<()> {
    write_workbook(output_path, &build_sheets(rows, summary))?;
    Ok(())
}

fn build_sheets(rows: &[MergedRow], summary: &Summary) -> Vec<SheetData> {
    let header: Vec<String> = output_header().into_iter().map(String::from).collect();

    let mut all = SheetData::new(SHEET_ALL, header.clone());
    let mut matched = SheetData::new(SHEET_MATCHED, header);
    for row in rows {
        if row.is_matched() {
            matched.push_text_row(row.to_record());
        }
        all.push_text_row(row.to_record());
    }

    let mut totals = SheetData::new(
        SHEET_SUMMARY,
        SUMMARY_HEADER.iter().map(|s| s.to_string()).collect(),
    );
    for line in summary.rows() {
        totals.rows.push(vec![
            CellValue::from(line.label),
            CellValue::Number(line.count as f64),
            CellValue::Number(line.percent),
        ]);
    }

    vec![all, matched, totals]
}
