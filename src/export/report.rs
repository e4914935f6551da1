//! 실행 보고서 (JSON)

use super::summary::{Summary, SummaryRow};
use crate::error::Result;
use crate::keys::KeyReport;
use crate::matcher::TierCounts;
use market_merge_common::{IssueKind, QualityLog};
use serde::Serialize;
use std::path::Path;

/// 입력 파일 정보
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputInfo {
    pub path: String,
    pub encoding: String,
    pub rows: usize,
    pub keys: KeyReport,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueCount {
    pub kind: IssueKind,
    pub label: String,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunReport {
    pub generated_at: String,
    pub file_a: InputInfo,
    pub file_b: InputInfo,
    pub tiers: TierCounts,
    pub issues: Vec<IssueCount>,
    pub summary: Vec<SummaryRow>,
    pub outputs: Vec<String>,
}

impl RunReport {
    pub fn new(
        file_a: InputInfo,
        file_b: InputInfo,
        tiers: TierCounts,
        issues: &QualityLog,
        summary: &Summary,
    ) -> Self {
        Self {
            generated_at: chrono::Utc::now().to_rfc3339(),
            file_a,
            file_b,
            tiers,
            issues: issues
                .counts()
                .into_iter()
                .map(|(kind, count)| IssueCount { kind, label: kind.to_string(), count })
                .collect(),
            summary: summary.rows(),
            outputs: Vec::new(),
        }
    }

    pub fn write(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
