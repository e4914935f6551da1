//! 정규화 모듈
//!
//! 두 원천 파일의 표기를 비교 가능한 형태로 맞춘다.
//!
//! ## 구성
//! 1. 시장명 정제 (예외 표기 → 괄호 제거 → 공백 정리)
//! 2. 지역명 표준화, 주소에서 시도/시군구 추출
//! 3. 주소 비교용 정규화와 주소 핵심부 키

pub mod address;
pub mod name;
pub mod region;

pub use address::{address_key, is_blank_address, normalize_address};
pub use name::clean_market_name;
pub use region::{extract_region, standardize_region, Region};
