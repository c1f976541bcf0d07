// Engine module - pure decision and transformation logic
// Sits between the value types and the workflow runtime; nothing here does I/O

pub mod gate;
pub mod transform;

pub use gate::{GateDecision, UsageGate, NEAR_LIMIT_PCT};
pub use transform::{
    MUTATION_SUFFIXES, SuffixMutation, TransformStrategy, detection_score, mutation_probability,
};

use humanizer_types::{Humanized, Result, Settings, SubscriptionTier};
use rand::RngCore;

// Façade API - stable entry points for the runtime and CLI layers

/// Humanize text with the reference strategy and an entropy-seeded RNG
pub fn humanize(text: &str, settings: &Settings) -> Result<Humanized> {
    humanize_with_rng(text, settings, &mut rand::thread_rng())
}

/// Humanize text with the reference strategy and a caller-supplied RNG
pub fn humanize_with_rng(
    text: &str,
    settings: &Settings,
    rng: &mut dyn RngCore,
) -> Result<Humanized> {
    SuffixMutation.transform(text, settings, rng)
}

/// Gate a text against a subscription tier
pub fn evaluate_text(text: &str, tier: &SubscriptionTier) -> GateDecision {
    UsageGate::evaluate(humanizer_types::word_count(text), tier)
}
