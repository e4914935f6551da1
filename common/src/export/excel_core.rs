//! Excel 생성 (공통 라이브러리)
//!
//! 헤더 + 행으로 된 표를 시트 단위로 받아 하나의 통합문서 버퍼를 만든다.

use rust_xlsxwriter::*;

/// 셀 값
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

/// 시트 하나 분량의 표
#[derive(Debug, Clone)]
pub struct SheetData {
    pub name: String,
    pub header: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl SheetData {
    pub fn new(name: impl Into<String>, header: Vec<String>) -> Self {
        Self {
            name: name.into(),
            header,
            rows: Vec::new(),
        }
    }

    /// 문자열만으로 된 행 추가
    pub fn push_text_row(&mut self, row: Vec<String>) {
        self.rows.push(row.into_iter().map(CellValue::Text).collect());
    }
}

/// 통합문서를 버퍼에 생성
///
/// # Arguments
/// * `sheets` - 시트 순서대로의 표 데이터
pub fn generate_workbook_buffer(sheets: &[SheetData]) -> Result<Vec<u8>, String> {
    let mut workbook = Workbook::new();

    let header_format = Format::new()
        .set_bold()
        .set_background_color(Color::RGB(0xF5F5F5))
        .set_border(FormatBorder::Thin)
        .set_border_color(Color::RGB(0xAAAAAA));

    for sheet in sheets {
        let worksheet = workbook.add_worksheet();
        worksheet
            .set_name(&sheet.name)
            .map_err(|e| format!("시트 이름 설정 오류: {}", e))?;

        for (col, label) in sheet.header.iter().enumerate() {
            worksheet
                .write_string_with_format(0, col as u16, label, &header_format)
                .map_err(|e| format!("헤더 쓰기 오류: {}", e))?;
        }

        for (r, row) in sheet.rows.iter().enumerate() {
            let row_idx = (r + 1) as u32;
            for (col, cell) in row.iter().enumerate() {
                match cell {
                    CellValue::Text(text) => worksheet.write_string(row_idx, col as u16, text),
                    CellValue::Number(n) => worksheet.write_number(row_idx, col as u16, *n),
                }
                .map_err(|e| format!("셀 쓰기 오류: {}", e))?;
            }
        }

        // 헤더 고정
        worksheet
            .set_freeze_panes(1, 0)
            .map_err(|e| format!("틀 고정 오류: {}", e))?;
    }

    workbook
        .save_to_buffer()
        .map_err(|e| format!("Excel 저장 오류: {}", e))
}

/// 통합문서를 파일로 저장
pub fn write_workbook(path: &std::path::Path, sheets: &[SheetData]) -> crate::Result<()> {
    let buffer = generate_workbook_buffer(sheets).map_err(crate::Error::Excel)?;
    std::fs::write(path, buffer)?;
    Ok(())
}
