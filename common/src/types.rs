//! 병합 결과의 타입 정의
//!
//! - SourceSide: 어느 원천 파일에서 온 레코드인지
//! - MatchOrigin: 병합 행이 양쪽 매칭인지, 한쪽 단독인지
//! - MergedRow: 고정 스키마의 병합 결과 한 행

use crate::schema::{self, OUTPUT_WIDTH};
use serde::{Deserialize, Serialize};

/// 원천 파일 구분
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SourceSide {
    /// 시장 현황 (시설 보유여부, 시장코드)
    A,
    /// 전국 표준데이터 (운영 정보, 좌표)
    B,
}

impl std::fmt::Display for SourceSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceSide::A => write!(f, "첫 번째 파일"),
            SourceSide::B => write!(f, "두 번째 파일"),
        }
    }
}

/// 병합 행의 출처
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchOrigin {
    Both,
    FileAOnly,
    FileBOnly,
}

impl MatchOrigin {
    pub fn is_matched(&self) -> bool {
        matches!(self, MatchOrigin::Both)
    }
}

/// 병합 결과 한 행
///
/// Row Merger가 매칭 1건당 한 번 만들고, 이후에는 읽기만 한다.
/// 한쪽 원천이 없으면 그쪽 전용 컬럼은 빈 문자열로 채운다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergedRow {
    pub code: String,
    pub name: String,
    pub lot_address: String,
    pub road_address: String,
    pub sido: String,
    pub sigungu: String,
    pub period: String,
    pub stalls: String,
    pub founded: String,
    pub goods: String,
    /// 첫 번째 파일 시설 보유여부 (Y/N 원문, FILE_A_FACILITIES 순서)
    pub facilities_a: Vec<String>,
    /// 두 번째 파일 시설 보유여부 (Y/N 원문, FILE_B_FACILITIES 순서)
    pub facilities_b: Vec<String>,
    pub latitude: String,
    pub longitude: String,
    pub phone: String,
    pub origin: MatchOrigin,
}

impl MergedRow {
    /// 출력 헤더 순서의 값 목록
    pub fn to_record(&self) -> Vec<String> {
        let mut record = Vec::with_capacity(OUTPUT_WIDTH);
        record.extend([
            self.code.clone(),
            self.name.clone(),
            self.lot_address.clone(),
            self.road_address.clone(),
            self.sido.clone(),
            self.sigungu.clone(),
            self.period.clone(),
            self.stalls.clone(),
            self.founded.clone(),
            self.goods.clone(),
        ]);
        record.extend(padded(&self.facilities_a, schema::FILE_A_FACILITIES.len()));
        record.extend(padded(&self.facilities_b, schema::FILE_B_FACILITIES.len()));
        record.extend([
            self.latitude.clone(),
            self.longitude.clone(),
            self.phone.clone(),
        ]);
        record
    }

    /// 출력 컬럼명으로 값 조회
    pub fn get(&self, column: &str) -> Option<String> {
        schema::output_position(column).map(|idx| self.to_record().swap_remove(idx))
    }

    pub fn is_matched(&self) -> bool {
        self.origin.is_matched()
    }
}

// 고정 폭 보장: 모자라면 빈 문자열, 넘치면 잘라낸다
fn padded(values: &[String], width: usize) -> impl Iterator<Item = String> + '_ {
    values
        .iter()
        .cloned()
        .chain(std::iter::repeat(String::new()))
        .take(width)
}
