//! 데이터 품질 이상 기록
//!
//! 배치를 멈추지 않는 이상(누락 컬럼, 중복 코드, 빈 시장명, 저신뢰 매칭)은
//! 에러가 아니라 기록으로 남기고, 실행 결과에는 건수로만 보고한다.

use crate::types::SourceSide;
use serde::{Deserialize, Serialize};

/// 품질 이상 한 건
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum QualityIssue {
    /// 헤더에 없는 컬럼을 참조함 (값은 빈 문자열로 처리)
    MissingColumn { side: SourceSide, column: String },
    /// 같은 시장코드가 다시 나타남 (첫 번째만 사용)
    DuplicateKey { code: String, line: usize },
    /// 정제 후 시장명이 비어 매칭에서 제외됨
    UnresolvedName { side: SourceSide, line: usize, raw: String },
    /// 주소 점수가 기준 미만이라 매칭하지 않음
    LowConfidenceMatch { name: String, line: usize, best_score: u8 },
}

/// 품질 이상 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IssueKind {
    MissingColumn,
    DuplicateKey,
    UnresolvedName,
    LowConfidenceMatch,
}

impl IssueKind {
    pub const ALL: [IssueKind; 4] = [
        IssueKind::MissingColumn,
        IssueKind::DuplicateKey,
        IssueKind::UnresolvedName,
        IssueKind::LowConfidenceMatch,
    ];
}

impl std::fmt::Display for IssueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IssueKind::MissingColumn => write!(f, "누락 컬럼"),
            IssueKind::DuplicateKey => write!(f, "중복 시장코드"),
            IssueKind::UnresolvedName => write!(f, "빈 시장명"),
            IssueKind::LowConfidenceMatch => write!(f, "저신뢰 매칭"),
        }
    }
}

impl QualityIssue {
    pub fn kind(&self) -> IssueKind {
        match self {
            QualityIssue::MissingColumn { .. } => IssueKind::MissingColumn,
            QualityIssue::DuplicateKey { .. } => IssueKind::DuplicateKey,
            QualityIssue::UnresolvedName { .. } => IssueKind::UnresolvedName,
            QualityIssue::LowConfidenceMatch { .. } => IssueKind::LowConfidenceMatch,
        }
    }
}

impl std::fmt::Display for QualityIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QualityIssue::MissingColumn { side, column } => {
                write!(f, "{}: 컬럼 '{}' 없음", side, column)
            }
            QualityIssue::DuplicateKey { code, line } => {
                write!(f, "시장코드 {} 중복 (행 {})", code, line)
            }
            QualityIssue::UnresolvedName { side, line, raw } => {
                write!(f, "{} 행 {}: 빈 시장명 (원본: '{}')", side, line, raw)
            }
            QualityIssue::LowConfidenceMatch { name, line, best_score } => {
                write!(f, "'{}' (행 {}): 최고 점수 {}", name, line, best_score)
            }
        }
    }
}

/// 품질 이상 목록
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QualityLog {
    issues: Vec<QualityIssue>,
}

impl QualityLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, issue: QualityIssue) {
        self.issues.push(issue);
    }

    pub fn extend(&mut self, other: QualityLog) {
        self.issues.extend(other.issues);
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &QualityIssue> {
        self.issues.iter()
    }

    /// 종류별 예시 (앞에서부터 최대 limit건)
    pub fn examples(&self, kind: IssueKind, limit: usize) -> impl Iterator<Item = &QualityIssue> {
        self.iter().filter(move |i| i.kind() == kind).take(limit)
    }

    /// 종류별 건수
    pub fn count(&self, kind: IssueKind) -> usize {
        self.issues.iter().filter(|i| i.kind() == kind).count()
    }

    /// 모든 종류의 건수 (0건 포함, IssueKind::ALL 순서)
    pub fn counts(&self) -> Vec<(IssueKind, usize)> {
        IssueKind::ALL.iter().map(|&k| (k, self.count(k))).collect()
    }
}
