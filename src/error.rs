use thiserror::Error;

#[derive(Error, Debug)]
pub enum MarketMergeError {
    #[error("설정 오류: {0}")]
    Config(String),

    #[error("파일을 찾을 수 없습니다: {0}")]
    FileNotFound(String),

    #[error("파일 {path}을(를) 읽을 수 없습니다. 시도한 인코딩: {}", attempted.join(", "))]
    Decode { path: String, attempted: Vec<String> },

    #[error("헤더 행이 없습니다: {0}")]
    EmptyInput(String),

    #[error("CSV 오류: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON 파싱 오류: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO 오류: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] market_merge_common::Error),
}

pub type Result<T> = std::result::Result<T, MarketMergeError>;
