//! 병합 요약 (건수와 비율)

use super::csv_writer::write_records;
use crate::error::Result;
use market_merge_common::{MatchOrigin, MergedRow};
use serde::Serialize;
use std::path::Path;

pub const SUMMARY_HEADER: [&str; 3] = ["구분", "개수", "비율(%)"];

/// 요약 표의 한 줄
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow {
    pub label: &'static str,
    pub count: usize,
    pub percent: f64,
}

/// 출처별 건수
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total: usize,
    pub matched: usize,
    pub file_a_only: usize,
    pub file_b_only: usize,
}

impl Summary {
    pub fn from_rows(rows: &[MergedRow]) -> Self {
        let mut summary = Summary { total: rows.len(), ..Default::default() };
        for row in rows {
            match row.origin {
                MatchOrigin::Both => summary.matched += 1,
                MatchOrigin::FileAOnly => summary.file_a_only += 1,
                MatchOrigin::FileBOnly => summary.file_b_only += 1,
            }
        }
        summary
    }

    /// 소수 첫째 자리 반올림, 전체가 0이면 0
    pub fn percent(&self, count: usize) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (count as f64 / self.total as f64 * 1000.0).round() / 10.0
    }

    pub fn rows(&self) -> Vec<SummaryRow> {
        [
            ("전체 합병 데이터", self.total),
            ("두 파일 모두 매칭", self.matched),
            ("첫 번째 파일만", self.file_a_only),
            ("두 번째 파일만", self.file_b_only),
        ]
        .into_iter()
        .map(|(label, count)| SummaryRow { label, count, percent: self.percent(count) })
        .collect()
    }
}

/// 요약 CSV 저장
pub fn write_summary(path: &Path, summary: &Summary) -> Result<()> {
    let records = summary.rows().into_iter().map(|row| {
        vec![row.label.to_string(), row.count.to_string(), format!("{:.1}", row.percent)]
    });
    write_records(path, &SUMMARY_HEADER, records)?;
    Ok(())
}
