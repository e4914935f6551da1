//! 비교용 주소 정규화

use super::region::standardize_region;
use regex::Regex;

/// 주소 비교용 정규화
///
/// - 지역명 표준화
/// - 공백 정리
/// - 문자/숫자/공백 이외의 기호 제거
pub fn normalize_address(address: &str) -> String {
    if address.is_empty() {
        return String::new();
    }

    lazy_static::lazy_static! {
        static ref SYMBOL_RE: Regex = Regex::new(r"[^\w\s]").unwrap();
    }

    let standardized = standardize_region(address);
    let collapsed = standardized.split_whitespace().collect::<Vec<_>>().join(" ");
    SYMBOL_RE.replace_all(&collapsed, "").to_string()
}

/// 주소 핵심부 (시군구 + 동/읍/면)
///
/// 동/읍/면이 없으면 시군구만, 둘 다 없으면 빈 문자열.
pub fn address_key(address: &str) -> String {
    if address.is_empty() {
        return String::new();
    }

    lazy_static::lazy_static! {
        static ref KEY_RE: Regex =
            Regex::new(r"(\w+시|\w+군|\w+구)\s*(\w+동|\w+읍|\w+면)").unwrap();
        static ref SIGUNGU_RE: Regex = Regex::new(r"\w+시|\w+군|\w+구").unwrap();
    }

    if let Some(caps) = KEY_RE.captures(address) {
        return format!("{} {}", &caps[1], &caps[2]);
    }

    SIGUNGU_RE
        .find(address)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// 비어 있거나 자리표시자("0" 등)인 주소
pub fn is_blank_address(address: &str, placeholder: &str) -> bool {
    let trimmed = address.trim();
    trimmed.is_empty() || (!placeholder.is_empty() && trimmed == placeholder)
}
