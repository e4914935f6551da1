//! 헤더 인덱스 기반 행 접근
//!
//! 행 길이는 헤더와 다를 수 있다. 범위 밖 접근은 에러가 아니라 빈 문자열이다.

use crate::config::ColumnRef;
use std::collections::HashMap;
use std::path::PathBuf;

use super::SourceEncoding;

/// 헤더 행
#[derive(Debug, Clone, Default)]
pub struct Header {
    names: Vec<String>,
    index: HashMap<String, usize>,
}

impl Header {
    pub fn new(names: Vec<String>) -> Self {
        let mut index = HashMap::with_capacity(names.len());
        for (i, name) in names.iter().enumerate() {
            // 같은 이름이 여러 번 나오면 첫 번째 위치
            index.entry(name.clone()).or_insert(i);
        }
        Self { names, index }
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// 이름 우선, 없으면 고정 위치
    pub fn resolve(&self, column: &ColumnRef) -> Option<usize> {
        self.position(&column.name).or(column.fallback_offset)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// 데이터 행 (원본 파일의 행 번호 포함)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub line: usize,
    pub fields: Vec<String>,
}

/// 로드된 원천 파일
#[derive(Debug, Clone)]
pub struct Table {
    pub path: PathBuf,
    pub encoding: SourceEncoding,
    header: Header,
    rows: Vec<Row>,
}

impl Table {
    pub fn new(path: PathBuf, encoding: SourceEncoding, header: Header, rows: Vec<Row>) -> Self {
        Self { path, encoding, header, rows }
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn records(&self) -> impl Iterator<Item = SourceRecord<'_>> {
        self.rows.iter().map(move |row| SourceRecord { header: &self.header, row })
    }
}

/// 원천 레코드 한 건 (읽기 전용 스냅숏)
#[derive(Debug, Clone, Copy)]
pub struct SourceRecord<'a> {
    header: &'a Header,
    row: &'a Row,
}

impl<'a> SourceRecord<'a> {
    pub fn line(&self) -> usize {
        self.row.line
    }

    /// 위치로 값 조회
    pub fn field(&self, idx: usize) -> &'a str {
        self.row.fields.get(idx).map(String::as_str).unwrap_or("")
    }

    /// 헤더 이름으로 값 조회 (없는 컬럼은 빈 문자열)
    pub fn get(&self, name: &str) -> &'a str {
        match self.header.position(name) {
            Some(idx) => self.field(idx),
            None => "",
        }
    }

    pub fn column(&self, column: &ColumnRef) -> &'a str {
        match self.header.resolve(column) {
            Some(idx) => self.field(idx),
            None => "",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(header: &[&str], rows: Vec<Vec<&str>>) -> Table {
        Table::new(
            PathBuf::from("test.csv"),
            SourceEncoding::Utf8,
            Header::new(header.iter().map(|s| s.to_string()).collect()),
            rows.into_iter()
                .enumerate()
                .map(|(i, r)| Row { line: i + 2, fields: r.into_iter().map(String::from).collect() })
                .collect(),
        )
    }

    #[test]
    fn test_get_by_name() {
        let t = table(&["시장명", "도로명주소"], vec![vec!["중앙시장", "춘천시 중앙로 1"]]);
        let rec = t.records().next().unwrap();
        assert_eq!(rec.get("시장명"), "중앙시장");
        assert_eq!(rec.get("도로명주소"), "춘천시 중앙로 1");
        assert_eq!(rec.line(), 2);
    }

    #[test]
    fn test_ragged_row_returns_empty() {
        let t = table(&["시장명", "도로명주소", "위도"], vec![vec!["중앙시장"]]);
        let rec = t.records().next().unwrap();
        assert_eq!(rec.get("위도"), "");
        assert_eq!(rec.field(10), "");
    }

    #[test]
    fn test_missing_column_returns_empty() {
        let t = table(&["시장명"], vec![vec!["중앙시장"]]);
        let rec = t.records().next().unwrap();
        assert_eq!(rec.get("전화번호"), "");
    }

    #[test]
    fn test_resolve_fallback_offset() {
        let t = table(&["코드", "이름"], vec![vec!["123", "망월시장"]]);
        let rec = t.records().next().unwrap();
        assert_eq!(rec.column(&ColumnRef::with_offset("시장명", 1)), "망월시장");
        assert_eq!(rec.column(&ColumnRef::named("시장명")), "");
    }

    #[test]
    fn test_duplicate_header_first_wins() {
        let header = Header::new(vec!["a".into(), "b".into(), "a".into()]);
        assert_eq!(header.position("a"), Some(0));
        assert!(header.contains("b"));
        assert_eq!(header.len(), 3);
    }
}
