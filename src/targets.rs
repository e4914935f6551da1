//! 리뷰 수집용 검색 대상 목록
//!
//! 병합 결과(보통 매칭 데이터)에서 시군구와 시장명이 모두 있는 행만 골라
//! "시군구 시장명" 검색어를 만든다.

use crate::error::Result;
use crate::export::csv_writer::write_records;
use crate::loader::Table;
use market_merge_common::schema::{COL_NAME, COL_SIGUNGU};
use serde::Serialize;
use std::path::Path;

pub const TARGET_HEADER: [&str; 3] = [COL_SIGUNGU, COL_NAME, "검색어"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchTarget {
    pub sigungu: String,
    pub name: String,
    pub query: String,
}

pub fn build_targets(table: &Table) -> Vec<SearchTarget> {
    table
        .records()
        .filter_map(|record| {
            let sigungu = record.get(COL_SIGUNGU).trim();
            let name = record.get(COL_NAME).trim();
            if sigungu.is_empty() || name.is_empty() {
                return None;
            }
            Some(SearchTarget {
                sigungu: sigungu.to_string(),
                name: name.to_string(),
                query: format!("{} {}", sigungu, name),
            })
        })
        .collect()
}

pub fn write_targets(path: &Path, targets: &[SearchTarget]) -> Result<usize> {
    write_records(
        path,
        &TARGET_HEADER,
        targets.iter().map(|t| [t.sigungu.as_str(), t.name.as_str(), t.query.as_str()]),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::{parse_rows, SourceEncoding};
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn table(csv: &str) -> Table {
        let (header, rows) = parse_rows(csv).unwrap();
        Table::new(PathBuf::from("matched.csv"), SourceEncoding::Utf8, header, rows)
    }

    #[test]
    fn test_build_targets_skips_incomplete_rows() {
        let t = table("시장코드,시장명,시군구\n1,망월시장,춘천시\n2,서문시장,\n3,,중구\n");
        let targets = build_targets(&t);

        assert_eq!(targets.len(), 1);
        assert_eq!(targets[0].query, "춘천시 망월시장");
    }

    #[test]
    fn test_write_targets() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("targets.csv");
        let t = table("시장명,시군구\n망월시장,춘천시\n");

        let count = write_targets(&path, &build_targets(&t)).unwrap();
        assert_eq!(count, 1);

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            text.trim_start_matches('\u{FEFF}'),
            "시군구,시장명,검색어\n춘천시,망월시장,춘천시 망월시장\n"
        );
    }
}
