//! 두 원천 파일의 시장 레코드 매칭
//!
//! 1단계: 양쪽에 한 번씩만 나오는 시장명은 이름만으로 짝짓는다.
//! 2단계: 어느 한쪽에라도 여러 번 나오는 시장명은 주소 점수로 가른다.
//!        첫 번째 파일 후보 순서대로 남은 후보 중 최고점을 고르는 탐욕 배정이다.
//! 3단계: 남은 후보는 각각 단독 결과가 된다.
//!
//! 배정된 후보는 풀에서 꺼내(take) 결과로 옮기므로 다음 단계에서 다시 보이지 않는다.

mod types;

pub use types::{Match, MatchOutcome, MatchTier, TierCounts};

use crate::keys::Candidate;
use market_merge_common::{QualityIssue, SourceSide};
use std::collections::HashMap;

/// 주소 점수: 도로명 일치
pub const SCORE_ROAD: u8 = 100;
/// 주소 점수: 지번 일치
pub const SCORE_LOT: u8 = 90;
/// 주소 점수: 시군구+동 일치
pub const SCORE_REGION_KEY: u8 = 70;
/// 주소 점수: 지역 키가 상대 도로명주소에 포함
pub const SCORE_REGION_IN_ROAD: u8 = 50;

/// 같은 정제 시장명을 가진 후보 위치
#[derive(Debug)]
struct NameGroup {
    a: Vec<usize>,
    b: Vec<usize>,
}

impl NameGroup {
    fn is_unique_pair(&self) -> bool {
        self.a.len() == 1 && self.b.len() == 1
    }

    fn needs_address(&self) -> bool {
        !self.a.is_empty() && !self.b.is_empty() && (self.a.len() > 1 || self.b.len() > 1)
    }
}

/// 후보 전체를 매칭한다
///
/// 결과는 입력 후보 하나하나를 정확히 한 번씩 담는다.
pub fn match_candidates<'a>(
    a: Vec<Candidate<'a>>,
    b: Vec<Candidate<'a>>,
    min_score: u8,
) -> MatchOutcome<'a> {
    let groups = group_by_name(&a, &b);
    let mut pool_a: Vec<Option<Candidate<'a>>> = a.into_iter().map(Some).collect();
    let mut pool_b: Vec<Option<Candidate<'a>>> = b.into_iter().map(Some).collect();
    let mut outcome = MatchOutcome::default();

    // 1단계
    for group in groups.iter().filter(|g| g.is_unique_pair()) {
        let Some((ca, cb)) = take_pair(&mut pool_a, group.a[0], &mut pool_b, group.b[0]) else {
            continue;
        };
        outcome.matches.push(Match::pair(ca, cb, MatchTier::UniqueName));
        outcome.counts.unique_name += 1;
    }
    log::debug!("1단계 (고유 시장명): {}건", outcome.counts.unique_name);

    // 2단계
    for group in groups.iter().filter(|g| g.needs_address()) {
        for &ai in &group.a {
            let Some(ca) = pool_a[ai].as_ref() else {
                continue;
            };

            let mut best: Option<(usize, u8)> = None;
            for &bi in &group.b {
                let Some(cb) = pool_b[bi].as_ref() else {
                    continue;
                };
                let score = address_score(ca, cb);
                // 동점이면 먼저 본 후보
                if best.map_or(true, |(_, top)| score > top) {
                    best = Some((bi, score));
                }
            }

            match best {
                Some((bi, score)) if score > 0 && score >= min_score => {
                    let Some((ca, cb)) = take_pair(&mut pool_a, ai, &mut pool_b, bi) else {
                        continue;
                    };
                    log::debug!("2단계 {} (행 {} ↔ {}): {}점", ca.name(), ca.line(), cb.line(), score);
                    outcome.matches.push(Match::pair(ca, cb, MatchTier::Address(score)));
                    outcome.counts.address += 1;
                }
                Some((_, score)) => {
                    log::debug!("2단계 {} (행 {}): 최고 {}점, 매칭 안 함", ca.name(), ca.line(), score);
                    outcome.issues.push(QualityIssue::LowConfidenceMatch {
                        name: ca.name().to_string(),
                        line: ca.line(),
                        best_score: score,
                    });
                    outcome.counts.low_confidence += 1;
                }
                // 같은 이름의 두 번째 파일 후보가 모두 소진됨
                None => {}
            }
        }
    }
    log::debug!("2단계 (주소 점수): {}건", outcome.counts.address);

    // 3단계
    for ca in pool_a.into_iter().flatten() {
        outcome.matches.push(Match::only_a(ca));
        outcome.counts.file_a_only += 1;
    }
    for cb in pool_b.into_iter().flatten() {
        outcome.matches.push(Match::only_b(cb));
        outcome.counts.file_b_only += 1;
    }

    log::info!(
        "매칭 완료: 고유명 {}, 주소 {}, 첫 번째만 {}, 두 번째만 {} (저신뢰 {})",
        outcome.counts.unique_name,
        outcome.counts.address,
        outcome.counts.file_a_only,
        outcome.counts.file_b_only,
        outcome.counts.low_confidence
    );
    outcome
}

/// 양쪽 풀에서 후보 한 쌍을 꺼낸다. 한쪽이라도 비어 있으면 둘 다 그대로 둔다.
fn take_pair<'a>(
    pool_a: &mut [Option<Candidate<'a>>],
    ai: usize,
    pool_b: &mut [Option<Candidate<'a>>],
    bi: usize,
) -> Option<(Candidate<'a>, Candidate<'a>)> {
    if pool_a[ai].is_none() || pool_b[bi].is_none() {
        return None;
    }
    Some((pool_a[ai].take()?, pool_b[bi].take()?))
}

/// 동명 후보 한 쌍의 주소 점수
pub fn address_score(a: &Candidate<'_>, b: &Candidate<'_>) -> u8 {
    if !a.road_norm.is_empty() && a.road_norm == b.road_norm {
        return SCORE_ROAD;
    }
    if !a.lot_norm.is_empty() && a.lot_norm == b.lot_norm {
        return SCORE_LOT;
    }
    if !a.address_key.is_empty() && a.address_key == b.address_key {
        return SCORE_REGION_KEY;
    }

    if a.road_norm.is_empty() || b.road_norm.is_empty() {
        return 0;
    }
    let key_in_road = |key: &str, road: &str| !key.is_empty() && road.contains(key);
    if key_in_road(&a.address_key, &b.road_norm) || key_in_road(&b.address_key, &a.road_norm) {
        return SCORE_REGION_IN_ROAD;
    }
    0
}

/// 정제 시장명별 후보 위치 (처음 나온 순서)
fn group_by_name(a: &[Candidate<'_>], b: &[Candidate<'_>]) -> Vec<NameGroup> {
    let mut order: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<NameGroup> = Vec::new();

    let entries = a
        .iter()
        .enumerate()
        .map(|(i, c)| (SourceSide::A, i, c.name()))
        .chain(b.iter().enumerate().map(|(i, c)| (SourceSide::B, i, c.name())));

    for (side, i, name) in entries {
        let g = *order.entry(name).or_insert_with(|| {
            groups.push(NameGroup { a: Vec::new(), b: Vec::new() });
            groups.len() - 1
        });
        match side {
            SourceSide::A => groups[g].a.push(i),
            SourceSide::B => groups[g].b.push(i),
        }
    }
    groups
}
