//! 매칭 키 생성 (Key Builder)
//!
//! 원천 레코드마다 정제 시장명, 주소 정규화값, 지역 키를 계산해 매칭 후보로 만든다.
//! - 첫 번째 파일: 시장코드 중복은 첫 번째만 남기고 나머지는 DuplicateKey로 기록
//! - 두 파일 공통: 정제 시장명이 비면 UnresolvedName으로 기록하고 후보에서 제외
//! - 같은 파일 안의 시장명 충돌은 그대로 둔다 (매처가 주소로 가른다)

use crate::config::{ColumnRef, Config};
use crate::loader::{SourceRecord, Table};
use crate::normalizer::{
    address_key, clean_market_name, extract_region, is_blank_address, normalize_address,
};
use market_merge_common::{QualityIssue, QualityLog, SourceSide};
use serde::Serialize;
use std::collections::HashSet;

/// 파생 키 (저장하지 않음)
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct NormalizedKey {
    pub cleaned_name: String,
    pub sido: String,
    pub sigungu: String,
}

/// 매칭 후보
#[derive(Debug, Clone)]
pub struct Candidate<'a> {
    pub side: SourceSide,
    pub record: SourceRecord<'a>,
    /// 시장코드 (두 번째 파일은 항상 빈 문자열)
    pub code: String,
    pub key: NormalizedKey,
    pub road_address: &'a str,
    pub lot_address: &'a str,
    pub road_norm: String,
    pub lot_norm: String,
    /// 시군구 + 동/읍/면
    pub address_key: String,
}

impl<'a> Candidate<'a> {
    pub fn name(&self) -> &str {
        &self.key.cleaned_name
    }

    pub fn line(&self) -> usize {
        self.record.line()
    }
}

/// 키 생성 집계
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyReport {
    pub total_rows: usize,
    pub candidates: usize,
    pub empty_names: usize,
    pub duplicate_codes: usize,
}

/// 한 원천 파일의 후보 목록
#[derive(Debug, Clone)]
pub struct KeyedSource<'a> {
    pub side: SourceSide,
    pub candidates: Vec<Candidate<'a>>,
    pub report: KeyReport,
    pub issues: QualityLog,
}

/// 첫 번째 파일(시장 현황)의 후보 생성
pub fn build_file_a<'a>(table: &'a Table, config: &Config) -> KeyedSource<'a> {
    let layout = &config.source_a;
    let placeholder = config.address_placeholder.as_str();
    let mut issues = QualityLog::new();
    let mut report = KeyReport { total_rows: table.len(), ..Default::default() };
    let mut seen_codes: HashSet<&str> = HashSet::new();
    let mut candidates = Vec::new();

    for record in table.records() {
        let code = record.column(&layout.code).trim();
        if !code.is_empty() && !seen_codes.insert(code) {
            log::debug!("시장코드 {} 중복 (행 {}), 첫 번째만 사용", code, record.line());
            report.duplicate_codes += 1;
            issues.push(QualityIssue::DuplicateKey { code: code.to_string(), line: record.line() });
            continue;
        }

        let raw_name = record.column(&layout.name);
        let cleaned_name = clean_market_name(raw_name);
        if cleaned_name.is_empty() {
            report.empty_names += 1;
            issues.push(unresolved(SourceSide::A, &record, raw_name));
            continue;
        }

        let road = record.column(&layout.road_address);
        let lot = record.column(&layout.lot_address);
        // 도로명 우선, 자리표시자는 빈 값 취급
        let key_source = if !is_blank_address(road, placeholder) {
            road
        } else if !is_blank_address(lot, placeholder) {
            lot
        } else {
            ""
        };

        candidates.push(candidate(SourceSide::A, record, code, cleaned_name, road, lot, key_source));
    }

    report.candidates = candidates.len();
    log_report(SourceSide::A, &report);
    KeyedSource { side: SourceSide::A, candidates, report, issues }
}

/// 두 번째 파일(표준데이터)의 후보 생성
pub fn build_file_b<'a>(table: &'a Table, config: &Config) -> KeyedSource<'a> {
    let layout = &config.source_b;
    let mut issues = QualityLog::new();
    let mut report = KeyReport { total_rows: table.len(), ..Default::default() };
    let mut candidates = Vec::new();

    for record in table.records() {
        let raw_name = record.column(&layout.name);
        let cleaned_name = clean_market_name(raw_name);
        if cleaned_name.is_empty() {
            report.empty_names += 1;
            issues.push(unresolved(SourceSide::B, &record, raw_name));
            continue;
        }

        let road = record.column(&layout.road_address);
        let lot = record.column(&layout.lot_address);
        let key_source = if road.is_empty() { lot } else { road };

        candidates.push(candidate(SourceSide::B, record, "", cleaned_name, road, lot, key_source));
    }

    report.candidates = candidates.len();
    log_report(SourceSide::B, &report);
    KeyedSource { side: SourceSide::B, candidates, report, issues }
}

/// 헤더에 없고 고정 위치도 없는 컬럼을 MissingColumn으로 기록
pub fn audit_columns<'c>(
    table: &Table,
    side: SourceSide,
    columns: impl IntoIterator<Item = &'c ColumnRef>,
) -> QualityLog {
    let mut issues = QualityLog::new();
    for column in columns {
        if table.header().contains(&column.name) {
            continue;
        }
        match column.fallback_offset {
            Some(offset) => {
                log::debug!("{}: 컬럼 '{}' 대신 위치 {} 사용", side, column.name, offset);
            }
            None => {
                log::warn!("{}: 컬럼 '{}' 없음, 빈 값으로 처리", side, column.name);
                issues.push(QualityIssue::MissingColumn { side, column: column.name.clone() });
            }
        }
    }
    issues
}

fn candidate<'a>(
    side: SourceSide,
    record: SourceRecord<'a>,
    code: &str,
    cleaned_name: String,
    road: &'a str,
    lot: &'a str,
    key_source: &str,
) -> Candidate<'a> {
    let region = extract_region(key_source);
    Candidate {
        side,
        record,
        code: code.to_string(),
        key: NormalizedKey { cleaned_name, sido: region.sido, sigungu: region.sigungu },
        road_address: road,
        lot_address: lot,
        road_norm: normalize_address(road),
        lot_norm: normalize_address(lot),
        address_key: address_key(key_source),
    }
}

fn unresolved(side: SourceSide, record: &SourceRecord<'_>, raw: &str) -> QualityIssue {
    log::debug!("{} 행 {}: 빈 시장명 (원본: '{}')", side, record.line(), raw);
    QualityIssue::UnresolvedName { side, line: record.line(), raw: raw.to_string() }
}

fn log_report(side: SourceSide, report: &KeyReport) {
    log::info!(
        "{}: {}행 중 후보 {}개 (빈 시장명 {}, 중복 코드 {})",
        side,
        report.total_rows,
        report.candidates,
        report.empty_names,
        report.duplicate_codes
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::parse_rows;
    use market_merge_common::IssueKind;
    use std::path::PathBuf;

    fn table(csv: &str) -> Table {
        let (header, rows) = parse_rows(csv).unwrap();
        Table::new(PathBuf::from("t.csv"), crate::loader::SourceEncoding::Utf8, header, rows)
    }

    #[test]
    fn test_file_a_duplicate_code_discarded() {
        let t = table(
            "시장코드,시장명,도로명주소,지번주소\n\
             12345,중앙시장,강원도 춘천시 중앙로 1,\n\
             12345,중앙시장(2),강원도 춘천시 중앙로 2,\n\
             67890,남부시장,,강원도 춘천시 요선동 3\n",
        );
        let keyed = build_file_a(&t, &Config::default());

        assert_eq!(keyed.candidates.len(), 2);
        assert_eq!(keyed.report.duplicate_codes, 1);
        assert_eq!(keyed.issues.count(IssueKind::DuplicateKey), 1);
        assert_eq!(keyed.candidates[0].road_address, "강원도 춘천시 중앙로 1");
        assert!(keyed.candidates.iter().all(|c| c.line() != 3));
    }

    #[test]
    fn test_file_a_empty_name_excluded_and_counted() {
        let t = table("시장코드,시장명\n1,(폐업)\n2,  \n3,서문시장\n");
        let keyed = build_file_a(&t, &Config::default());

        assert_eq!(keyed.candidates.len(), 1);
        assert_eq!(keyed.report.empty_names, 2);
        assert_eq!(keyed.issues.count(IssueKind::UnresolvedName), 2);
    }

    #[test]
    fn test_file_a_placeholder_road_uses_lot_for_key() {
        let t = table(
            "시장코드,시장명,도로명주소,지번주소\n1,망월(전통)시장,0,강원도 춘천시 중앙동 12\n",
        );
        let keyed = build_file_a(&t, &Config::default());
        let c = &keyed.candidates[0];

        assert_eq!(c.name(), "망월시장");
        assert_eq!(c.address_key, "춘천시 중앙동");
        assert_eq!(c.key.sido, "강원도");
        assert_eq!(c.key.sigungu, "춘천시");
    }

    #[test]
    fn test_file_a_both_addresses_empty() {
        let t = table("시장코드,시장명,도로명주소,지번주소\n1,망월시장,,\n");
        let keyed = build_file_a(&t, &Config::default());
        let c = &keyed.candidates[0];
        assert_eq!(c.address_key, "");
        assert_eq!(c.key.sido, "");
    }

    #[test]
    fn test_file_b_name_collision_retained() {
        let t = table(
            "시장명,소재지도로명주소,소재지지번주소\n\
             중앙시장,강원도 춘천시 중앙로 1,\n\
             중앙시장(상설),강원도 강릉시 중앙로 2,\n",
        );
        let keyed = build_file_b(&t, &Config::default());

        assert_eq!(keyed.candidates.len(), 2);
        assert!(keyed.candidates.iter().all(|c| c.name() == "중앙시장"));
        assert!(keyed.candidates.iter().all(|c| c.code.is_empty()));
        assert_eq!(keyed.candidates[1].key.sigungu, "강릉시");
    }

    #[test]
    fn test_file_a_name_by_offset_when_header_differs() {
        let t = table("코드,이름\n777,서문시장\n");
        let keyed = build_file_a(&t, &Config::default());
        assert_eq!(keyed.candidates[0].code, "777");
        assert_eq!(keyed.candidates[0].name(), "서문시장");
    }

    #[test]
    fn test_audit_columns() {
        let t = table("코드,이름,도로명주소\n");
        let layout = crate::config::SourceALayout::default();
        let issues = audit_columns(
            &t,
            SourceSide::A,
            [&layout.code, &layout.name, &layout.road_address, &layout.sido],
        );
        // 코드/이름은 고정 위치가 있어 누락으로 보지 않는다
        assert_eq!(issues.len(), 1);
        assert_eq!(issues.count(IssueKind::MissingColumn), 1);
    }
}
