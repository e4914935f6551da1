use crate::error::{MarketMergeError, Result};
use crate::loader::SourceEncoding;
use market_merge_common::schema::{
    COL_CODE, COL_LOT_ADDRESS, COL_NAME, COL_ROAD_ADDRESS, COL_SIDO, COL_SIGUNGU,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 헤더 이름으로 찾고, 헤더에 없으면 고정 위치로 찾는 컬럼 참조
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnRef {
    pub name: String,
    /// 헤더에 이름이 없을 때 사용할 고정 위치
    #[serde(default)]
    pub fallback_offset: Option<usize>,
}

impl ColumnRef {
    pub fn named(name: &str) -> Self {
        Self { name: name.to_string(), fallback_offset: None }
    }

    pub fn with_offset(name: &str, offset: usize) -> Self {
        Self { name: name.to_string(), fallback_offset: Some(offset) }
    }
}

/// 첫 번째 파일(시장 현황) 컬럼 배치
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceALayout {
    pub code: ColumnRef,
    pub name: ColumnRef,
    pub road_address: ColumnRef,
    pub lot_address: ColumnRef,
    pub sido: ColumnRef,
    pub sigungu: ColumnRef,
}

impl Default for SourceALayout {
    fn default() -> Self {
        Self {
            // 코드·시장명은 원본 헤더 표기가 일정하지 않아 위치 0, 1로 보정
            code: ColumnRef::with_offset(COL_CODE, 0),
            name: ColumnRef::with_offset(COL_NAME, 1),
            road_address: ColumnRef::named(COL_ROAD_ADDRESS),
            lot_address: ColumnRef::named(COL_LOT_ADDRESS),
            sido: ColumnRef::named(COL_SIDO),
            sigungu: ColumnRef::named(COL_SIGUNGU),
        }
    }
}

/// 두 번째 파일(표준데이터) 컬럼 배치
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceBLayout {
    pub name: ColumnRef,
    pub road_address: ColumnRef,
    pub lot_address: ColumnRef,
}

impl Default for SourceBLayout {
    fn default() -> Self {
        Self {
            name: ColumnRef::with_offset(COL_NAME, 0),
            road_address: ColumnRef::named("소재지도로명주소"),
            lot_address: ColumnRef::named("소재지지번주소"),
        }
    }
}

/// 출력 파일 이름
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputNames {
    pub merged: String,
    pub matched: String,
    pub summary: String,
    pub report: String,
    pub workbook: String,
    pub targets: String,
}

impl Default for OutputNames {
    fn default() -> Self {
        Self {
            merged: "전통시장_최종합병데이터.csv".into(),
            matched: "전통시장_최종매칭데이터.csv".into(),
            summary: "합병_요약정보.csv".into(),
            report: "합병_실행보고서.json".into(),
            workbook: "전통시장_합병결과.xlsx".into(),
            targets: "리뷰_검색대상.csv".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 시도할 인코딩 (순서대로)
    pub encodings: Vec<String>,
    /// 빈 값으로 취급할 주소 자리표시자
    pub address_placeholder: String,
    /// 주소 매칭 최소 점수
    pub min_address_score: u8,
    pub source_a: SourceALayout,
    pub source_b: SourceBLayout,
    pub outputs: OutputNames,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            encodings: vec!["utf-8-sig".into(), "utf-8".into(), "cp949".into(), "euc-kr".into()],
            address_placeholder: "0".into(),
            min_address_score: 50,
            source_a: SourceALayout::default(),
            source_b: SourceBLayout::default(),
            outputs: OutputNames::default(),
        }
    }
}

impl Config {
    /// 설정 로드
    ///
    /// 명시한 경로가 없으면 에러, 기본 경로가 없으면 기본값을 사용한다.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let config_path = match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(MarketMergeError::FileNotFound(path.display().to_string()));
                }
                path.to_path_buf()
            }
            None => Self::config_path()?,
        };

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            config.validate()?;
            log::debug!("설정 로드: {}", config_path.display());
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| MarketMergeError::Config("홈 디렉터리를 찾을 수 없습니다".into()))?;
        Ok(home.join(".config").join("market-merge").join("config.json"))
    }

    /// 설정된 인코딩 목록을 해석
    pub fn source_encodings(&self) -> Result<Vec<SourceEncoding>> {
        if self.encodings.is_empty() {
            return Err(MarketMergeError::Config("인코딩 목록이 비어 있습니다".into()));
        }
        self.encodings
            .iter()
            .map(|name| name.parse::<SourceEncoding>().map_err(MarketMergeError::Config))
            .collect()
    }

    fn validate(&self) -> Result<()> {
        self.source_encodings()?;
        if self.min_address_score > 100 {
            return Err(MarketMergeError::Config(format!(
                "min_address_score는 0~100이어야 합니다: {}",
                self.min_address_score
            )));
        }
        Ok(())
    }
}
