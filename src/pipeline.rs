//! merge 명령의 전체 흐름
//!
//! 읽기 → 키 생성 → 매칭 → 병합 → 저장. 구조적 오류만 중단시키고
//! 품질 이상은 QualityLog에 모아 건수로 보고한다.

use crate::config::{ColumnRef, Config};
use crate::error::Result;
use crate::export::report::{InputInfo, RunReport};
use crate::export::{export_results, ExportFormat, Summary};
use crate::keys::{audit_columns, build_file_a, build_file_b, KeyReport};
use crate::loader::{read_table, Table};
use crate::matcher::match_candidates;
use crate::merger::merge_all;
use market_merge_common::schema::{FILE_B_OPERATIONAL, LOCATION_COLUMNS};
use market_merge_common::{MergedRow, QualityLog, SourceSide, FILE_A_FACILITIES, FILE_B_FACILITIES};
use std::path::{Path, PathBuf};

/// merge 실행 결과
#[derive(Debug, Clone)]
pub struct MergeRun {
    pub rows: Vec<MergedRow>,
    pub summary: Summary,
    pub issues: QualityLog,
    pub report: RunReport,
    pub written: Vec<PathBuf>,
}

pub fn run_merge(
    file_a: &Path,
    file_b: &Path,
    output_dir: &Path,
    format: ExportFormat,
    config: &Config,
) -> Result<MergeRun> {
    let encodings = config.source_encodings()?;

    println!("[1/5] 원천 파일 읽는 중...");
    let table_a = read_table(file_a, &encodings)?;
    let table_b = read_table(file_b, &encodings)?;
    println!("✔ {}: {}행 ({})", SourceSide::A, table_a.len(), table_a.encoding);
    println!("✔ {}: {}행 ({})\n", SourceSide::B, table_b.len(), table_b.encoding);

    println!("[2/5] 매칭 키 생성 중...");
    let mut issues = QualityLog::new();
    issues.extend(audit_columns(&table_a, SourceSide::A, &file_a_columns(config)));
    issues.extend(audit_columns(&table_b, SourceSide::B, &file_b_columns(config)));

    let keyed_a = build_file_a(&table_a, config);
    let keyed_b = build_file_b(&table_b, config);
    println!(
        "✔ 후보: {} {}개, {} {}개 (빈 시장명 {}개, 중복 코드 {}개 제외)\n",
        SourceSide::A,
        keyed_a.report.candidates,
        SourceSide::B,
        keyed_b.report.candidates,
        keyed_a.report.empty_names + keyed_b.report.empty_names,
        keyed_a.report.duplicate_codes
    );
    let (report_a, report_b) = (keyed_a.report.clone(), keyed_b.report.clone());
    issues.extend(keyed_a.issues);
    issues.extend(keyed_b.issues);

    println!("[3/5] 매칭 중...");
    let outcome = match_candidates(keyed_a.candidates, keyed_b.candidates, config.min_address_score);
    let counts = outcome.counts.clone();
    println!("✔ 고유 시장명 매칭: {}개", counts.unique_name);
    println!("✔ 주소 기반 매칭: {}개", counts.address);
    println!(
        "✔ 미매칭: {} {}개, {} {}개\n",
        SourceSide::A,
        counts.file_a_only,
        SourceSide::B,
        counts.file_b_only
    );

    println!("[4/5] 병합 중...");
    let rows = merge_all(&outcome, config);
    issues.extend(outcome.issues);
    let summary = Summary::from_rows(&rows);
    println!("✔ {}개 시장 (매칭 {}개)\n", summary.total, summary.matched);

    for (kind, count) in issues.counts() {
        if count > 0 {
            log::warn!("{}: {}건", kind, count);
        }
    }

    println!("[5/5] 저장 중...");
    let mut written = export_results(&rows, &summary, format, output_dir, &config.outputs)?;

    let mut report = RunReport::new(
        input_info(&table_a, report_a),
        input_info(&table_b, report_b),
        counts,
        &issues,
        &summary,
    );
    let report_path = output_dir.join(&config.outputs.report);
    written.push(report_path.clone());
    report.outputs = written.iter().map(|p| p.display().to_string()).collect();
    report.write(&report_path)?;
    println!("✔ 실행 보고서: {}", report_path.display());

    Ok(MergeRun { rows, summary, issues, report, written })
}

fn input_info(table: &Table, keys: KeyReport) -> InputInfo {
    InputInfo {
        path: table.path.display().to_string(),
        encoding: table.encoding.to_string(),
        rows: table.len(),
        keys,
    }
}

// 병합에 쓰이는 첫 번째 파일 컬럼 전체
fn file_a_columns(config: &Config) -> Vec<ColumnRef> {
    let layout = &config.source_a;
    let mut columns = vec![
        layout.code.clone(),
        layout.name.clone(),
        layout.road_address.clone(),
        layout.lot_address.clone(),
        layout.sido.clone(),
        layout.sigungu.clone(),
    ];
    columns.extend(FILE_A_FACILITIES.iter().map(|f| ColumnRef::named(f.source)));
    columns
}

fn file_b_columns(config: &Config) -> Vec<ColumnRef> {
    let layout = &config.source_b;
    let mut columns = vec![
        layout.name.clone(),
        layout.road_address.clone(),
        layout.lot_address.clone(),
    ];
    columns.extend(FILE_B_OPERATIONAL.iter().map(|c| ColumnRef::named(c)));
    columns.extend(FILE_B_FACILITIES.iter().map(|f| ColumnRef::named(f.source)));
    columns.extend(LOCATION_COLUMNS.iter().map(|c| ColumnRef::named(c)));
    columns
}
