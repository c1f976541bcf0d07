//! Custom assertions for humanizer-specific validation.
//!
//! Provides high-level assertions that make tests more readable:
//! - Result object structure in JSON output
//! - Word-count preservation between original and humanized text

use anyhow::{Context, Result};
use humanizer_types::word_count;
use serde_json::Value;

/// Assert that JSON output carries a result with the expected detection score.
pub fn assert_detection_score(json: &Value, expected: u64) -> Result<()> {
    let score = json["result"]["detection_score"]
        .as_u64()
        .context("Expected 'result.detection_score' number in JSON")?;

    if score != expected {
        anyhow::bail!("Expected detection score {}, got {}", expected, score);
    }

    Ok(())
}

/// Assert that the humanized text in JSON output has as many words as the original.
pub fn assert_word_count_preserved(json: &Value) -> Result<()> {
    let original = json["result"]["original_text"]
        .as_str()
        .context("Expected 'result.original_text' string in JSON")?;
    let humanized = json["result"]["humanized_text"]
        .as_str()
        .context("Expected 'result.humanized_text' string in JSON")?;

    let (before, after) = (word_count(original), word_count(humanized));
    if before != after {
        anyhow::bail!(
            "Word count changed from {} to {} during humanization",
            before,
            after
        );
    }

    Ok(())
}

/// Assert the reported phase in JSON output.
pub fn assert_phase(json: &Value, expected: &str) -> Result<()> {
    let phase = json["phase"]
        .as_str()
        .context("Expected 'phase' string in JSON")?;

    if phase != expected {
        anyhow::bail!("Expected phase {}, got {}", expected, phase);
    }

    Ok(())
}
