//! 매칭 결과를 고정 스키마의 병합 행으로 만든다
//!
//! 컬럼마다 우선순위가 정해져 있다.
//! - 시장코드, 시장명, 주소: 첫 번째 파일 우선 (주소 자리표시자는 빈 값 취급)
//! - 시도, 시군구: 첫 번째 파일 컬럼, 비어 있으면 두 번째 파일 주소에서 추출
//! - 운영 정보, 좌표, 전화번호, 공중화장실/주차장: 두 번째 파일
//! - 그 밖의 시설 보유여부: 첫 번째 파일

use crate::config::Config;
use crate::keys::Candidate;
use crate::matcher::MatchOutcome;
use crate::normalizer::{extract_region, is_blank_address, standardize_region};
use market_merge_common::schema::{
    COL_FOUNDED, COL_GOODS, COL_LATITUDE, COL_LONGITUDE, COL_PERIOD, COL_PHONE, COL_STALLS,
    FILE_A_FACILITIES, FILE_B_FACILITIES,
};
use market_merge_common::{MatchOrigin, MergedRow};

/// 매칭 한 건을 병합 행으로
pub fn merge(a: Option<&Candidate<'_>>, b: Option<&Candidate<'_>>, config: &Config) -> MergedRow {
    let placeholder = config.address_placeholder.as_str();
    let origin = match (a, b) {
        (Some(_), Some(_)) => MatchOrigin::Both,
        (Some(_), None) => MatchOrigin::FileAOnly,
        _ => MatchOrigin::FileBOnly,
    };

    let name = a.or(b).map(|c| c.name().to_string()).unwrap_or_default();
    let road_address = pick_address(
        a.map(|c| c.road_address),
        b.map(|c| c.road_address),
        placeholder,
    );
    let lot_address = pick_address(
        a.map(|c| c.lot_address),
        b.map(|c| c.lot_address),
        placeholder,
    );

    let a_sido = a
        .map(|c| c.record.column(&config.source_a.sido).trim())
        .unwrap_or("");
    let a_sigungu = a
        .map(|c| c.record.column(&config.source_a.sigungu).trim())
        .unwrap_or("");
    // 두 번째 파일 주소는 필요할 때만 추출
    let b_region = || {
        b.map(|c| {
            let address = if c.road_address.is_empty() { c.lot_address } else { c.road_address };
            extract_region(address)
        })
        .unwrap_or_default()
    };
    let sido = if a_sido.is_empty() { b_region().sido } else { standardize_region(a_sido) };
    let sigungu = if a_sigungu.is_empty() { b_region().sigungu } else { a_sigungu.to_string() };

    let from_b = |column: &str| b.map(|c| c.record.get(column).to_string()).unwrap_or_default();

    MergedRow {
        code: a.map(|c| c.code.clone()).unwrap_or_default(),
        name,
        lot_address,
        road_address,
        sido,
        sigungu,
        period: from_b(COL_PERIOD),
        stalls: from_b(COL_STALLS),
        founded: from_b(COL_FOUNDED),
        goods: from_b(COL_GOODS),
        facilities_a: FILE_A_FACILITIES
            .iter()
            .map(|f| a.map(|c| c.record.get(f.source).to_string()).unwrap_or_default())
            .collect(),
        facilities_b: FILE_B_FACILITIES.iter().map(|f| from_b(f.source)).collect(),
        latitude: from_b(COL_LATITUDE),
        longitude: from_b(COL_LONGITUDE),
        phone: from_b(COL_PHONE),
        origin,
    }
}

/// 매칭 결과 전체를 순서대로 병합
pub fn merge_all(outcome: &MatchOutcome<'_>, config: &Config) -> Vec<MergedRow> {
    outcome
        .matches
        .iter()
        .map(|m| merge(m.a.as_ref(), m.b.as_ref(), config))
        .collect()
}

// 첫 번째 파일 값이 비었거나 자리표시자면 두 번째 파일 값
fn pick_address(a: Option<&str>, b: Option<&str>, placeholder: &str) -> String {
    match (a, b) {
        (Some(value), _) if !is_blank_address(value, placeholder) => standardize_region(value.trim()),
        (_, Some(value)) if !value.trim().is_empty() => standardize_region(value.trim()),
        _ => String::new(),
    }
}
