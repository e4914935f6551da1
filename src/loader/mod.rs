//! 원천 CSV 로더
//!
//! 설정된 인코딩을 순서대로 시도해 처음 성공한 것으로 읽는다.
//! 모두 실패하면 시도한 인코딩 목록과 함께 Decode 에러.

mod table;

pub use table::{Header, Row, SourceRecord, Table};

use crate::error::{MarketMergeError, Result};
use std::path::Path;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// 지원 인코딩
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceEncoding {
    /// UTF-8 (BOM 있으면 제거)
    Utf8Sig,
    Utf8,
    /// 한국어 레거시 코드페이지
    Cp949,
    EucKr,
}

impl SourceEncoding {
    /// 바이트열을 디코딩. 대체 문자 없이 디코딩할 수 없으면 None
    pub fn decode(&self, bytes: &[u8]) -> Option<String> {
        match self {
            SourceEncoding::Utf8Sig => {
                let body = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
                std::str::from_utf8(body).ok().map(str::to_string)
            }
            SourceEncoding::Utf8 => std::str::from_utf8(bytes).ok().map(str::to_string),
            // encoding_rs의 EUC-KR은 cp949 확장 문자까지 포함한다
            SourceEncoding::Cp949 | SourceEncoding::EucKr => encoding_rs::EUC_KR
                .decode_without_bom_handling_and_without_replacement(bytes)
                .map(|text| text.into_owned()),
        }
    }
}

impl std::str::FromStr for SourceEncoding {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "utf-8-sig" | "utf8-sig" => Ok(SourceEncoding::Utf8Sig),
            "utf-8" | "utf8" => Ok(SourceEncoding::Utf8),
            "cp949" | "ms949" | "windows-949" => Ok(SourceEncoding::Cp949),
            "euc-kr" | "euckr" => Ok(SourceEncoding::EucKr),
            _ => Err(format!(
                "알 수 없는 인코딩: {}. utf-8-sig, utf-8, cp949, euc-kr 중 하나를 사용하세요",
                s
            )),
        }
    }
}

impl std::fmt::Display for SourceEncoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceEncoding::Utf8Sig => write!(f, "utf-8-sig"),
            SourceEncoding::Utf8 => write!(f, "utf-8"),
            SourceEncoding::Cp949 => write!(f, "cp949"),
            SourceEncoding::EucKr => write!(f, "euc-kr"),
        }
    }
}

/// 인코딩 목록을 순서대로 시도
pub fn decode_with_fallback(
    bytes: &[u8],
    encodings: &[SourceEncoding],
    path: &Path,
) -> Result<(String, SourceEncoding)> {
    for encoding in encodings {
        if let Some(text) = encoding.decode(bytes) {
            return Ok((text, *encoding));
        }
        log::debug!("{} 디코딩 실패: {}", encoding, path.display());
    }

    Err(MarketMergeError::Decode {
        path: path.display().to_string(),
        attempted: encodings.iter().map(|e| e.to_string()).collect(),
    })
}

/// CSV 파일을 읽어 헤더와 데이터 행으로 분리
pub fn read_table(path: &Path, encodings: &[SourceEncoding]) -> Result<Table> {
    if !path.exists() {
        return Err(MarketMergeError::FileNotFound(path.display().to_string()));
    }

    let bytes = std::fs::read(path)?;
    let (text, encoding) = decode_with_fallback(&bytes, encodings, path)?;
    log::info!("{} 파일을 {} 인코딩으로 읽었습니다", path.display(), encoding);

    let (header, rows) = parse_rows(&text)?;
    if header.is_empty() {
        return Err(MarketMergeError::EmptyInput(path.display().to_string()));
    }

    Ok(Table::new(path.to_path_buf(), encoding, header, rows))
}

/// CSV 텍스트 파싱 (행 길이 검사 없음)
pub fn parse_rows(text: &str) -> Result<(Header, Vec<Row>)> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut header = Header::default();
    let mut rows = Vec::new();

    for (i, record) in reader.records().enumerate() {
        let record = record?;
        let line = record
            .position()
            .map(|p| p.line() as usize)
            .unwrap_or(i + 1);
        let fields: Vec<String> = record.iter().map(str::to_string).collect();

        if i == 0 {
            header = Header::new(strip_bom_from_first(fields));
        } else {
            rows.push(Row { line, fields });
        }
    }

    Ok((header, rows))
}

// utf-8로 읽은 경우 BOM이 첫 헤더 셀에 남는다
fn strip_bom_from_first(mut fields: Vec<String>) -> Vec<String> {
    if let Some(first) = fields.first_mut() {
        if let Some(rest) = first.strip_prefix('\u{FEFF}') {
            *first = rest.to_string();
        }
    }
    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [SourceEncoding; 4] = [
        SourceEncoding::Utf8Sig,
        SourceEncoding::Utf8,
        SourceEncoding::Cp949,
        SourceEncoding::EucKr,
    ];

    #[test]
    fn test_encoding_from_str() {
        assert_eq!("UTF-8-SIG".parse::<SourceEncoding>(), Ok(SourceEncoding::Utf8Sig));
        assert_eq!("utf8".parse::<SourceEncoding>(), Ok(SourceEncoding::Utf8));
        assert_eq!("cp949".parse::<SourceEncoding>(), Ok(SourceEncoding::Cp949));
        assert_eq!("euc_kr".parse::<SourceEncoding>(), Ok(SourceEncoding::EucKr));
        assert!("shift-jis".parse::<SourceEncoding>().is_err());
    }

    #[test]
    fn test_utf8_sig_strips_bom() {
        let bytes = [UTF8_BOM, "시장명".as_bytes()].concat();
        assert_eq!(SourceEncoding::Utf8Sig.decode(&bytes).as_deref(), Some("시장명"));
        // BOM 없는 UTF-8도 허용
        assert_eq!(SourceEncoding::Utf8Sig.decode("시장".as_bytes()).as_deref(), Some("시장"));
    }

    #[test]
    fn test_cp949_fallback() {
        let (bytes, _, _) = encoding_rs::EUC_KR.encode("시장명,주소\n망월시장,춘천시\n");
        let (text, used) = decode_with_fallback(&bytes, &ALL, Path::new("a.csv")).unwrap();
        assert_eq!(used, SourceEncoding::Cp949);
        assert!(text.starts_with("시장명"));
    }

    #[test]
    fn test_decode_error_lists_attempts() {
        // 0xFF는 UTF-8에서도 EUC-KR에서도 유효하지 않다
        let bytes = [0xFFu8, 0xFF, 0xFF];
        let err = decode_with_fallback(&bytes, &ALL, Path::new("bad.csv")).unwrap_err();
        match err {
            MarketMergeError::Decode { path, attempted } => {
                assert_eq!(path, "bad.csv");
                assert_eq!(attempted, vec!["utf-8-sig", "utf-8", "cp949", "euc-kr"]);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_parse_rows_ragged() {
        let (header, rows) = parse_rows("a,b,c\n1,2\n3,4,5,6\n").unwrap();
        assert_eq!(header.names(), &["a", "b", "c"]);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].fields, vec!["1", "2"]);
        assert_eq!(rows[1].fields.len(), 4);
        assert_eq!(rows[0].line, 2);
    }

    #[test]
    fn test_parse_rows_strips_bom_in_header() {
        let (header, _) = parse_rows("\u{FEFF}시장명,주소\n").unwrap();
        assert_eq!(header.position("시장명"), Some(0));
    }

    #[test]
    fn test_parse_rows_quoted_field() {
        let (_, rows) = parse_rows("이름,주소\n\"중앙시장\",\"서울특별시 중구, 1층\"\n").unwrap();
        assert_eq!(rows[0].fields[1], "서울특별시 중구, 1층");
    }
}
