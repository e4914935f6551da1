use crate::keys::Candidate;
use market_merge_common::{MatchOrigin, QualityLog};
use serde::Serialize;

/// 매칭 단계
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchTier {
    /// 양쪽에 한 번씩만 나오는 시장명
    UniqueName,
    /// 주소 점수로 가른 동명 시장
    Address(u8),
    /// 짝을 찾지 못한 나머지
    Residual,
}

/// 매칭 결과 한 건. 적어도 한쪽은 항상 있다.
#[derive(Debug, Clone)]
pub struct Match<'a> {
    pub a: Option<Candidate<'a>>,
    pub b: Option<Candidate<'a>>,
    pub tier: MatchTier,
}

impl<'a> Match<'a> {
    pub fn pair(a: Candidate<'a>, b: Candidate<'a>, tier: MatchTier) -> Self {
        Self { a: Some(a), b: Some(b), tier }
    }

    pub fn only_a(a: Candidate<'a>) -> Self {
        Self { a: Some(a), b: None, tier: MatchTier::Residual }
    }

    pub fn only_b(b: Candidate<'a>) -> Self {
        Self { a: None, b: Some(b), tier: MatchTier::Residual }
    }

    pub fn origin(&self) -> MatchOrigin {
        match (&self.a, &self.b) {
            (Some(_), Some(_)) => MatchOrigin::Both,
            (Some(_), None) => MatchOrigin::FileAOnly,
            _ => MatchOrigin::FileBOnly,
        }
    }
}

/// 단계별 건수
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TierCounts {
    pub unique_name: usize,
    pub address: usize,
    pub low_confidence: usize,
    pub file_a_only: usize,
    pub file_b_only: usize,
}

impl TierCounts {
    pub fn matched(&self) -> usize {
        self.unique_name + self.address
    }
}

/// 매칭 전체 결과
///
/// 순서: 1단계 → 2단계 → 첫 번째 파일 잔여 → 두 번째 파일 잔여
#[derive(Debug, Clone, Default)]
pub struct MatchOutcome<'a> {
    pub matches: Vec<Match<'a>>,
    pub counts: TierCounts,
    pub issues: QualityLog,
}
