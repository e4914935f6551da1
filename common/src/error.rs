//! 공통 에러

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),

    /// 통합문서 생성 실패 (rust_xlsxwriter 메시지)
    #[error("Excel 오류: {0}")]
    Excel(String),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_conversion_keeps_message() {
        let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "읽기 전용 디렉터리");
        let error: Error = io_error.into();
        assert!(matches!(error, Error::Io(_)));
        assert_eq!(error.to_string(), "입출력 오류: 읽기 전용 디렉터리");
    }

    #[test]
    fn test_excel_message() {
        let error = Error::Excel("시트 이름 설정 오류".to_string());
        assert_eq!(error.to_string(), "Excel 오류: 시트 이름 설정 오류");
    }
}
