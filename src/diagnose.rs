//! 데이터 손실 진단
//!
//! 병합 전에 두 원천 파일을 훑어, 매칭에서 빠지거나 뭉개질 레코드를 센다.

use crate::config::Config;
use crate::loader::{SourceRecord, Table};
use crate::normalizer::{clean_market_name, extract_region, standardize_region, Region};
use market_merge_common::SourceSide;
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// 화면에 보여줄 중복 시장명 예시 수
pub const DUPLICATE_EXAMPLES: usize = 5;

/// 여러 번 나오는 시장명
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DuplicateName {
    pub name: String,
    pub lines: Vec<usize>,
}

/// 파일 하나의 진단 결과
#[derive(Debug, Clone, Default, Serialize)]
pub struct SideDiagnosis {
    pub rows: usize,
    pub empty_names: usize,
    pub unique_names: usize,
    /// 처음 나온 순서
    pub duplicate_names: Vec<DuplicateName>,
    pub empty_regions: usize,
    /// 첫 번째 파일만 의미 있음
    pub duplicate_codes: usize,
}

impl SideDiagnosis {
    /// 이름 충돌로 뭉개질 수 있는 레코드 수 (이름당 첫 건 제외)
    pub fn collapsed_rows(&self) -> usize {
        self.duplicate_names.iter().map(|d| d.lines.len() - 1).sum()
    }
}

/// 두 파일의 키 겹침
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct KeyOverlap {
    pub only_a: usize,
    pub only_b: usize,
    pub both: usize,
    pub total: usize,
}

impl KeyOverlap {
    fn between(a: &HashSet<String>, b: &HashSet<String>) -> Self {
        let both = a.intersection(b).count();
        Self {
            only_a: a.len() - both,
            only_b: b.len() - both,
            both,
            total: a.union(b).count(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Diagnosis {
    pub file_a: SideDiagnosis,
    pub file_b: SideDiagnosis,
    pub names: KeyOverlap,
    /// 시장명|시도|시군구
    pub composite: KeyOverlap,
}

/// 두 원천 파일 진단
pub fn diagnose(a: &Table, b: &Table, config: &Config) -> Diagnosis {
    let layout_a = &config.source_a;
    let layout_b = &config.source_b;

    let (mut file_a, names_a, composite_a) = scan(a, |record| {
        let raw_name = record.column(&layout_a.name);
        let region = Region {
            sido: standardize_region(record.column(&layout_a.sido).trim()),
            sigungu: record.column(&layout_a.sigungu).trim().to_string(),
        };
        (raw_name, region)
    });
    file_a.duplicate_codes = count_duplicate_codes(a, config);

    let (file_b, names_b, composite_b) = scan(b, |record| {
        let road = record.column(&layout_b.road_address);
        let address = if road.is_empty() { record.column(&layout_b.lot_address) } else { road };
        (record.column(&layout_b.name), extract_region(address))
    });

    Diagnosis {
        names: KeyOverlap::between(&names_a, &names_b),
        composite: KeyOverlap::between(&composite_a, &composite_b),
        file_a,
        file_b,
    }
}

// 파일 하나를 훑어 통계와 (시장명 집합, 복합 키 집합)을 만든다
fn scan<'t, F>(table: &'t Table, extract: F) -> (SideDiagnosis, HashSet<String>, HashSet<String>)
where
    F: Fn(&SourceRecord<'t>) -> (&'t str, Region),
{
    let mut diagnosis = SideDiagnosis { rows: table.len(), ..Default::default() };
    let mut order: Vec<String> = Vec::new();
    let mut lines_by_name: HashMap<String, Vec<usize>> = HashMap::new();
    let mut composite = HashSet::new();

    for record in table.records() {
        let (raw_name, region) = extract(&record);
        let name = clean_market_name(raw_name);
        if name.is_empty() {
            diagnosis.empty_names += 1;
            continue;
        }
        if region.is_empty() {
            diagnosis.empty_regions += 1;
        }

        composite.insert(format!("{}|{}|{}", name, region.sido, region.sigungu));
        lines_by_name
            .entry(name.clone())
            .or_insert_with(|| {
                order.push(name);
                Vec::new()
            })
            .push(record.line());
    }

    diagnosis.unique_names = order.len();
    diagnosis.duplicate_names = order
        .iter()
        .filter_map(|name| {
            let lines = &lines_by_name[name];
            (lines.len() > 1).then(|| DuplicateName { name: name.clone(), lines: lines.clone() })
        })
        .collect();

    let names = order.into_iter().collect();
    (diagnosis, names, composite)
}

fn count_duplicate_codes(table: &Table, config: &Config) -> usize {
    let mut seen = HashSet::new();
    table
        .records()
        .map(|record| record.column(&config.source_a.code).trim())
        .filter(|code| !code.is_empty() && !seen.insert(*code))
        .count()
}

/// 진단 결과 출력
pub fn print_diagnosis(diagnosis: &Diagnosis) {
    for (side, d) in [(SourceSide::A, &diagnosis.file_a), (SourceSide::B, &diagnosis.file_b)] {
        println!("📄 {}", side);
        println!("  - 데이터 행: {}개", d.rows);
        println!("  - 빈 시장명: {}개", d.empty_names);
        println!("  - 고유 시장명: {}개", d.unique_names);
        println!(
            "  - 중복 시장명: {}종 (이름 기준 병합 시 {}행 손실 가능)",
            d.duplicate_names.len(),
            d.collapsed_rows()
        );
        for dup in d.duplicate_names.iter().take(DUPLICATE_EXAMPLES) {
            let lines: Vec<String> = dup.lines.iter().map(|l| l.to_string()).collect();
            println!("      · {} ×{} (행 {})", dup.name, dup.lines.len(), lines.join(", "));
        }
        println!("  - 지역 정보 없음: {}개", d.empty_regions);
        if side == SourceSide::A {
            println!("  - 중복 시장코드: {}개", d.duplicate_codes);
        }
        println!();
    }

    for (label, overlap) in [("시장명", &diagnosis.names), ("시장명+시도+시군구", &diagnosis.composite)] {
        println!("🔗 {} 기준 겹침", label);
        println!("  - 첫 번째 파일에만: {}개", overlap.only_a);
        println!("  - 두 번째 파일에만: {}개", overlap.only_b);
        println!("  - 양쪽 모두: {}개", overlap.both);
        println!("  - 전체 고유: {}개", overlap.total);
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::{parse_rows, SourceEncoding};
    use std::path::PathBuf;

    fn table(csv: &str) -> Table {
        let (header, rows) = parse_rows(csv).unwrap();
        Table::new(PathBuf::from("t.csv"), SourceEncoding::Utf8, header, rows)
    }

    fn sample() -> Diagnosis {
        let a = table(
            "시장코드,시장명,도로명주소,지번주소,시도,시군구\n\
             1,중앙시장,,,강원특별자치도,춘천시\n\
             2,중앙시장,,,강원도,강릉시\n\
             2,서문시장,,,대구광역시,중구\n\
             3,(폐업),,,,\n\
             4,망원시장,,,,\n",
        );
        let b = table(
            "시장명,소재지도로명주소,소재지지번주소\n\
             중앙시장,강원특별자치도 춘천시 중앙로 1,\n\
             서문시장,대구광역시 중구 큰장로26길 45,\n\
             통인시장,서울특별시 종로구 자하문로15길 18,\n",
        );
        diagnose(&a, &b, &Config::default())
    }

    #[test]
    fn test_side_statistics() {
        let d = sample();
        assert_eq!(d.file_a.rows, 5);
        assert_eq!(d.file_a.empty_names, 1);
        assert_eq!(d.file_a.unique_names, 3);
        assert_eq!(d.file_a.duplicate_codes, 1);
        assert_eq!(d.file_a.empty_regions, 1);
        assert_eq!(
            d.file_a.duplicate_names,
            vec![DuplicateName { name: "중앙시장".into(), lines: vec![2, 3] }]
        );
        assert_eq!(d.file_a.collapsed_rows(), 1);
        assert_eq!(d.file_b.duplicate_codes, 0);
    }

    #[test]
    fn test_name_overlap() {
        let d = sample();
        assert_eq!(d.names, KeyOverlap { only_a: 1, only_b: 1, both: 2, total: 4 });
    }

    #[test]
    fn test_composite_overlap() {
        let d = sample();
        // 중앙시장|강원도|춘천시, 서문시장|대구광역시|중구 가 양쪽에 있다
        assert_eq!(d.composite.both, 2);
        assert_eq!(d.composite.only_a, 2);
        assert_eq!(d.composite.only_b, 1);
        assert_eq!(d.composite.total, 5);
    }
}
