//! merge 전체 흐름 통합 테스트

use market_merge::config::Config;
use market_merge::export::ExportFormat;
use market_merge::loader::{read_table, SourceEncoding};
use market_merge::pipeline::run_merge;
use market_merge_common::{IssueKind, MatchOrigin};
use std::path::Path;
use tempfile::tempdir;

const FILE_A: &str = "시장코드,시장명,도로명주소,지번주소,시도,시군구,아케이드 보유 여부,화재감지기 보유여부\n\
12345,중앙시장,강원도 춘천시 중앙로 1,강원도 춘천시 중앙동 1,강원도,춘천시,Y,Y\n\
12346,중앙시장,강원도 강릉시 중앙로 2,강원도 강릉시 중앙동 2,강원도,강릉시,N,Y\n\
12345,중앙시장(중복),강원도 춘천시 중앙로 1,,강원도,춘천시,Y,Y\n\
22222,망월(전통)시장,0,광주광역시 북구 망월동 10,광주광역시,북구,N,N\n\
33333,(폐업),,,,,,\n\
44444,남부시장,전라북도 전주시 풍남문3길 1,,전라북도,전주시,Y,N\n";

const FILE_B: &str = "시장명,소재지도로명주소,소재지지번주소,시장개설주기,점포수,개설연도,취급품목,공중화장실보유여부,주차장보유여부,위도,경도,전화번호\n\
중앙시장,강원특별자치도 강릉시 중앙로 2,,상설,300,1950,잡화,Y,Y,37.75,128.89,033-111-1111\n\
중앙시장,강원특별자치도 춘천시 중앙로 1,,상설,200,1955,농산물,Y,N,37.88,127.72,033-222-2222\n\
망월시장,광주광역시 북구 망월로 5,광주광역시 북구 망월동 10,5일장,40,1970,수산물,N,N,35.2,126.9,\n\
통인시장,서울특별시 종로구 자하문로15길 18,,상설,70,1941,먹거리,Y,N,37.58,126.97,02-722-0911\n";

fn write_inputs(dir: &Path) -> (std::path::PathBuf, std::path::PathBuf) {
    let a = dir.join("시장현황.csv");
    let b = dir.join("표준데이터.csv");
    // 첫 번째 파일은 cp949, 두 번째 파일은 BOM 붙은 UTF-8
    let (encoded, _, had_errors) = encoding_rs::EUC_KR.encode(FILE_A);
    assert!(!had_errors);
    std::fs::write(&a, encoded).unwrap();
    std::fs::write(&b, format!("\u{FEFF}{}", FILE_B)).unwrap();
    (a, b)
}

fn read_output(path: &Path) -> Vec<Vec<String>> {
    let text = std::fs::read_to_string(path).expect("출력 파일 읽기 실패");
    assert!(text.starts_with('\u{FEFF}'), "BOM 없음: {}", path.display());
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(text.trim_start_matches('\u{FEFF}').as_bytes());
    reader
        .records()
        .map(|r| r.unwrap().iter().map(String::from).collect())
        .collect()
}

#[test]
fn test_merge_end_to_end() {
    let dir = tempdir().expect("Failed to create temp dir");
    let (a, b) = write_inputs(dir.path());
    let out = dir.path().join("out");
    let config = Config::default();

    let run = run_merge(&a, &b, &out, ExportFormat::Both, &config).expect("병합 실패");

    // 중앙시장 2쌍(주소), 망월시장(고유명) 매칭, 남부시장 A 단독, 통인시장 B 단독
    assert_eq!(run.summary.matched, 3);
    assert_eq!(run.summary.file_a_only, 1);
    assert_eq!(run.summary.file_b_only, 1);
    assert_eq!(
        run.summary.matched + run.summary.file_a_only + run.summary.file_b_only,
        run.summary.total
    );
    assert_eq!(run.report.tiers.unique_name, 1);
    assert_eq!(run.report.tiers.address, 2);

    assert_eq!(run.issues.count(IssueKind::DuplicateKey), 1);
    assert_eq!(run.issues.count(IssueKind::UnresolvedName), 1);
    assert_eq!(run.report.file_a.encoding, "cp949");
    assert_eq!(run.report.file_b.encoding, "utf-8-sig");

    // 동명 시장은 주소로 갈라져 뒤바뀌지 않는다
    let chuncheon = run
        .rows
        .iter()
        .find(|r| r.code == "12345")
        .expect("춘천 중앙시장 없음");
    assert_eq!(chuncheon.origin, MatchOrigin::Both);
    assert_eq!(chuncheon.stalls, "200");
    assert_eq!(chuncheon.phone, "033-222-2222");
    let gangneung = run.rows.iter().find(|r| r.code == "12346").unwrap();
    assert_eq!(gangneung.stalls, "300");

    // 자리표시자 도로명주소는 두 번째 파일 값으로
    let mangwol = run.rows.iter().find(|r| r.code == "22222").unwrap();
    assert_eq!(mangwol.name, "망월시장");
    assert_eq!(mangwol.road_address, "광주광역시 북구 망월로 5");
    assert_eq!(mangwol.period, "5일장");

    // 두 번째 파일 단독 행은 주소에서 시도/시군구를 얻는다
    let tongin = run.rows.iter().find(|r| r.name == "통인시장").unwrap();
    assert_eq!(tongin.origin, MatchOrigin::FileBOnly);
    assert_eq!(tongin.sido, "서울특별시");
    assert_eq!(tongin.sigungu, "종로구");
}

#[test]
fn test_merge_output_files() {
    let dir = tempdir().expect("Failed to create temp dir");
    let (a, b) = write_inputs(dir.path());
    let out = dir.path().join("out");
    let config = Config::default();

    let run = run_merge(&a, &b, &out, ExportFormat::Both, &config).expect("병합 실패");
    assert_eq!(run.written.len(), 5);
    for path in &run.written {
        assert!(path.exists(), "출력 파일 없음: {}", path.display());
    }

    let merged = read_output(&out.join(&config.outputs.merged));
    assert_eq!(merged.len(), 1 + 5);
    assert_eq!(merged[0].len(), 38);
    assert_eq!(merged[0][0], "시장코드");
    assert!(merged.iter().all(|r| r.len() == 38));
    // 순서: 1단계 → 2단계 → A 단독 → B 단독
    assert_eq!(merged[1][1], "망월시장");
    assert_eq!(merged[4][1], "남부시장");
    assert_eq!(merged[5][1], "통인시장");

    let matched = read_output(&out.join(&config.outputs.matched));
    assert_eq!(matched.len(), 1 + 3);

    let summary = read_output(&out.join(&config.outputs.summary));
    assert_eq!(summary[0], vec!["구분", "개수", "비율(%)"]);
    assert_eq!(summary[1], vec!["전체 합병 데이터", "5", "100.0"]);
    assert_eq!(summary[2], vec!["두 파일 모두 매칭", "3", "60.0"]);
    assert_eq!(summary[3], vec!["첫 번째 파일만", "1", "20.0"]);
    assert_eq!(summary[4], vec!["두 번째 파일만", "1", "20.0"]);

    let report: serde_json::Value = serde_json::from_str(
        &std::fs::read_to_string(out.join(&config.outputs.report)).unwrap(),
    )
    .unwrap();
    assert_eq!(report["tiers"]["address"], 2);
    assert_eq!(report["fileA"]["keys"]["duplicateCodes"], 1);
    assert_eq!(report["fileA"]["keys"]["totalRows"], 6);
    assert_eq!(report["tiers"]["uniqueName"], 1);
    assert_eq!(report["tiers"]["fileBOnly"], 1);

    let workbook = std::fs::read(out.join(&config.outputs.workbook)).unwrap();
    assert!(workbook.starts_with(b"PK"));
}

#[test]
fn test_merged_output_is_readable_again() {
    let dir = tempdir().expect("Failed to create temp dir");
    let (a, b) = write_inputs(dir.path());
    let out = dir.path().join("out");
    let config = Config::default();
    run_merge(&a, &b, &out, ExportFormat::Csv, &config).expect("병합 실패");

    let encodings = config.source_encodings().unwrap();
    let table = read_table(&out.join(&config.outputs.merged), &encodings).unwrap();
    assert_eq!(table.encoding, SourceEncoding::Utf8Sig);
    assert_eq!(table.len(), 5);
    assert!(!out.join(&config.outputs.workbook).exists());
}
