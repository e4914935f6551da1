//! 시장명 정제
//!
//! - 알려진 예외 표기 치환 (괄호 제거보다 먼저)
//! - 괄호와 그 안의 내용 제거 (여러 개, 최단 일치)
//! - 연속 공백을 한 칸으로, 앞뒤 공백 제거

use regex::Regex;

/// 구두점이 이름의 일부인 시장명 예외
struct NameException {
    /// 이 문자열도 함께 포함할 때만 적용
    requires: &'static str,
    from: &'static str,
    to: &'static str,
}

const NAME_EXCEPTIONS: &[NameException] = &[NameException {
    requires: "생거진천전통시장",
    from: "운수대통!",
    to: "운수대통",
}];

/// 시장명을 정제한다
///
/// 결과는 다시 정제해도 바뀌지 않는다.
pub fn clean_market_name(raw: &str) -> String {
    let mut current = clean_once(raw);
    // 괄호 제거로 예외 표기가 새로 생길 수 있어 고정점까지 반복
    loop {
        let next = clean_once(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

fn clean_once(raw: &str) -> String {
    if raw.trim().is_empty() {
        return String::new();
    }

    let mut name = raw.to_string();
    for exception in NAME_EXCEPTIONS {
        if name.contains(exception.from) && name.contains(exception.requires) {
            name = name.replace(exception.from, exception.to);
        }
    }

    lazy_static::lazy_static! {
        static ref PAREN_RE: Regex = Regex::new(r"\([^)]*\)").unwrap();
    }
    let name = PAREN_RE.replace_all(&name, "");

    name.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_parenthesized() {
        assert_eq!(clean_market_name("망월(전통)시장"), "망월시장");
        assert_eq!(clean_market_name("중앙시장(상설)(구 중앙)"), "중앙시장");
        assert_eq!(clean_market_name("남부(A) 시장 (B)"), "남부 시장");
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(clean_market_name("  서문   시장  "), "서문 시장");
        assert_eq!(clean_market_name("서문\t시장"), "서문 시장");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(clean_market_name(""), "");
        assert_eq!(clean_market_name("   "), "");
        assert_eq!(clean_market_name("(폐업)"), "");
    }

    #[test]
    fn test_known_exception() {
        assert_eq!(
            clean_market_name("운수대통! 생거진천전통시장"),
            "운수대통 생거진천전통시장"
        );
        // 다른 시장명의 느낌표는 그대로
        assert_eq!(clean_market_name("운수대통! 시장"), "운수대통! 시장");
    }

    #[test]
    fn test_unbalanced_parenthesis_kept() {
        assert_eq!(clean_market_name("신(시장"), "신(시장");
        assert_eq!(clean_market_name("신)시장"), "신)시장");
    }

    #[test]
    fn test_idempotent() {
        let samples = [
            "망월(전통)시장",
            "운수대통!! 생거진천전통시장",
            "운수대통(x)! 생거진천전통시장",
            "((a)b)시장",
            "  a  (b)  c ",
            "(()",
            "",
        ];
        for sample in samples {
            let once = clean_market_name(sample);
            assert_eq!(clean_market_name(&once), once, "입력: {:?}", sample);
        }
    }
}
