use humanizer_types::{SubscriptionTier, WordLimit};
use serde::{Deserialize, Serialize};

/// Usage ratio above which the banner warns (never blocks)
pub const NEAR_LIMIT_PCT: u8 = 80;

/// Outcome of checking a word count against a tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateDecision {
    pub word_count: usize,
    pub word_limit: WordLimit,
    pub blocked: bool,
    /// Percentage of the limit in use, 0-100
    pub usage_ratio: u8,
    pub near_limit: bool,
    pub at_limit: bool,
}

impl GateDecision {
    pub fn allowed(&self) -> bool {
        !self.blocked
    }
}

pub struct UsageGate;

impl UsageGate {
    /// Evaluate a word count against a tier.
    ///
    /// Only a rate-limited tier with a finite limit can block, and only when
    /// the count strictly exceeds the limit. An unbounded limit always reports
    /// a ratio of 0.
    pub fn evaluate(word_count: usize, tier: &SubscriptionTier) -> GateDecision {
        let (usage_ratio, over_limit) = match tier.word_limit {
            WordLimit::Unbounded => (0, false),
            WordLimit::Limited(limit) => (
                usage_ratio(word_count as u64, limit),
                word_count as u64 > limit,
            ),
        };

        GateDecision {
            word_count,
            word_limit: tier.word_limit,
            blocked: tier.tier.is_rate_limited() && over_limit,
            usage_ratio,
            near_limit: usage_ratio > NEAR_LIMIT_PCT,
            at_limit: usage_ratio >= 100,
        }
    }
}

/// `min(round(count / limit * 100), 100)` with half-up rounding, in integers
fn usage_ratio(count: u64, limit: u64) -> u8 {
    if limit == 0 {
        return if count == 0 { 0 } else { 100 };
    }

    let count = count as u128;
    let limit = limit as u128;
    let rounded = (count * 200 + limit) / (2 * limit);
    rounded.min(100) as u8
}
