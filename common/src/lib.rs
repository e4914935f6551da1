//! Market Merge Common Library
//!
//! 병합 결과 타입, 출력 스키마, 품질 기록, 통합문서 생성 코어

pub mod error;
pub mod export;
pub mod quality;
pub mod schema;
pub mod types;

pub use error::{Error, Result};
pub use quality::{IssueKind, QualityIssue, QualityLog};
pub use schema::{output_header, FacilityColumn, FILE_A_FACILITIES, FILE_B_FACILITIES, OUTPUT_WIDTH};
pub use types::{MatchOrigin, MergedRow, SourceSide};
