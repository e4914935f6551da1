//! 지역명 표준화와 주소에서의 시도/시군구 추출

use regex::Regex;

/// 개편 전 명칭으로 되돌리는 치환표 (원천 두 파일의 표기를 맞춘다)
pub const REGION_RENAMES: [(&str, &str); 2] = [
    ("강원특별자치도", "강원도"),
    ("전북특별자치도", "전라북도"),
];

/// 시도 목록. 주소에 먼저 포함된 것이 아니라 이 순서로 먼저 찾은 것을 쓴다.
pub const SIDO_NAMES: [&str; 17] = [
    "서울특별시",
    "부산광역시",
    "대구광역시",
    "인천광역시",
    "광주광역시",
    "대전광역시",
    "울산광역시",
    "세종특별자치시",
    "경기도",
    "강원도",
    "충청북도",
    "충청남도",
    "전라북도",
    "전라남도",
    "경상북도",
    "경상남도",
    "제주특별자치도",
];

/// 시군구 후보에서 빼야 하는 광역시 이름
pub const METROPOLITAN_NAMES: [&str; 8] = [
    "서울특별시",
    "부산광역시",
    "대구광역시",
    "인천광역시",
    "광주광역시",
    "대전광역시",
    "울산광역시",
    "세종특별자치시",
];

/// 주소에서 뽑은 (시도, 시군구)
///
/// 추출 실패는 빈 문자열이며 에러가 아니다.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Region {
    pub sido: String,
    pub sigungu: String,
}

impl Region {
    pub fn is_empty(&self) -> bool {
        self.sido.is_empty() && self.sigungu.is_empty()
    }
}

/// 폐지된 도 명칭을 표준 명칭으로 치환
pub fn standardize_region(text: &str) -> String {
    REGION_RENAMES
        .iter()
        .fold(text.to_string(), |acc, (from, to)| acc.replace(from, to))
}

/// 주소에서 시도와 시군구를 추출
pub fn extract_region(address: &str) -> Region {
    if address.trim().is_empty() {
        return Region::default();
    }

    let address = standardize_region(address);
    let sido = extract_sido(&address);
    let sigungu = extract_sigungu(&address, &sido);
    Region { sido, sigungu }
}

/// SIDO_NAMES 순서로 처음 포함된 시도
pub fn extract_sido(address: &str) -> String {
    SIDO_NAMES
        .iter()
        .find(|sido| address.contains(*sido))
        .map(|s| s.to_string())
        .unwrap_or_default()
}

/// 시/군/구로 끝나는 첫 토막 (시도명 자신이거나 시도명에 포함된 것은 제외)
pub fn extract_sigungu(address: &str, sido: &str) -> String {
    lazy_static::lazy_static! {
        static ref SIGUNGU_RE: Regex = Regex::new(r"\w+시|\w+군|\w+구").unwrap();
    }

    SIGUNGU_RE
        .find_iter(address)
        .map(|m| m.as_str())
        .find(|candidate| {
            let inside_sido = !sido.is_empty() && sido.contains(candidate);
            !inside_sido && !METROPOLITAN_NAMES.contains(candidate)
        })
        .map(|s| s.to_string())
        .unwrap_or_default()
}
