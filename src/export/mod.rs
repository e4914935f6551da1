pub mod csv_writer;
pub mod excel;
pub mod report;
pub mod summary;

pub use summary::Summary;

use crate::config::OutputNames;
use crate::error::Result;
use market_merge_common::MergedRow;
use std::path::{Path, PathBuf};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExportFormat {
    #[default]
    Csv,
    Excel,
    Both,
}

impl ExportFormat {
    fn writes_csv(&self) -> bool {
        matches!(self, ExportFormat::Csv | ExportFormat::Both)
    }

    fn writes_excel(&self) -> bool {
        matches!(self, ExportFormat::Excel | ExportFormat::Both)
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "excel" | "xlsx" => Ok(ExportFormat::Excel),
            "both" => Ok(ExportFormat::Both),
            _ => Err(format!("Unknown format: {}. Use csv, excel, or both", s)),
        }
    }
}

/// 병합 결과 저장
///
/// 요약 CSV는 형식과 관계없이 항상 쓴다. 저장한 파일 경로를 순서대로 돌려준다.
pub fn export_results(
    rows: &[MergedRow],
    summary: &Summary,
    format: ExportFormat,
    output_dir: &Path,
    names: &OutputNames,
) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(output_dir)?;
    let mut written = Vec::new();

    if format.writes_csv() {
        let merged_path = output_dir.join(&names.merged);
        let count = csv_writer::write_merged(&merged_path, rows)?;
        println!("✔ 전체 합병 결과: {} ({}개 시장)", merged_path.display(), count);
        written.push(merged_path);

        let matched_path = output_dir.join(&names.matched);
        let count = csv_writer::write_matched(&matched_path, rows)?;
        println!("✔ 매칭 데이터: {} ({}개 시장)", matched_path.display(), count);
        written.push(matched_path);
    }

    let summary_path = output_dir.join(&names.summary);
    summary::write_summary(&summary_path, summary)?;
    println!("✔ 요약 정보: {}", summary_path.display());
    written.push(summary_path);

    if format.writes_excel() {
        let workbook_path = output_dir.join(&names.workbook);
        println!("- Excel을 생성 중...");
        excel::generate_excel(rows, summary, &workbook_path)?;
        println!("✔ Excel 출력: {}", workbook_path.display());
        written.push(workbook_path);
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_format_from_str() {
        assert_eq!("CSV".parse::<ExportFormat>(), Ok(ExportFormat::Csv));
        assert_eq!("xlsx".parse::<ExportFormat>(), Ok(ExportFormat::Excel));
        assert_eq!("both".parse::<ExportFormat>(), Ok(ExportFormat::Both));
        assert!("pdf".parse::<ExportFormat>().is_err());
    }
}
