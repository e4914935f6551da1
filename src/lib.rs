//! 전통시장 공공데이터 두 종(시장 현황, 전국 표준데이터)을 읽어
//! 같은 시장끼리 매칭하고 하나의 표로 병합한다.

pub mod cli;
pub mod config;
pub mod diagnose;
pub mod error;
pub mod export;
pub mod keys;
pub mod loader;
pub mod logging;
pub mod matcher;
pub mod merger;
pub mod normalizer;
pub mod pipeline;
pub mod targets;
pub mod verify;
