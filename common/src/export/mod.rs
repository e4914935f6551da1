//! 출력 코어 (통합문서)

#[cfg(feature = "excel")]
pub mod excel_core;
