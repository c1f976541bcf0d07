use humanizer_types::{Humanized, Result, Settings};
use rand::{Rng, RngCore};

/// Alternatives appended to a token selected for mutation; one is picked uniformly
pub const MUTATION_SUFFIXES: [&str; 2] = ["s", ""];

const SCORE_CEILING: i32 = 90;
const SCORE_FLOOR: i32 = 5;

/// A text rewriting backend.
///
/// Implementations must keep the word count of the input: tokens may only be
/// extended, never dropped, merged or reordered. Randomness must come from
/// the supplied `rng` so callers can make runs reproducible.
pub trait TransformStrategy: Send + Sync {
    fn transform(&self, text: &str, settings: &Settings, rng: &mut dyn RngCore)
    -> Result<Humanized>;
}

/// Placeholder strategy: each token independently gets a trailing suffix
/// with probability `level / 200`.
///
/// `style` and `preserve_key_points` are carried on [`Settings`] for real
/// backends; this strategy does not read them.
#[derive(Debug, Clone, Copy, Default)]
pub struct SuffixMutation;

impl TransformStrategy for SuffixMutation {
    fn transform(
        &self,
        text: &str,
        settings: &Settings,
        rng: &mut dyn RngCore,
    ) -> Result<Humanized> {
        settings.validate()?;

        let probability = mutation_probability(settings.level);
        let mut output = String::with_capacity(text.len() + text.len() / 8);
        let mut rest = text;

        while !rest.is_empty() {
            // Whitespace runs are copied verbatim so layout survives
            let gap = rest
                .find(|c: char| !c.is_whitespace())
                .unwrap_or(rest.len());
            output.push_str(&rest[..gap]);
            rest = &rest[gap..];
            if rest.is_empty() {
                break;
            }

            let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
            output.push_str(&rest[..end]);
            if rng.gen_bool(probability) {
                let suffix = MUTATION_SUFFIXES[rng.gen_range(0..MUTATION_SUFFIXES.len())];
                output.push_str(suffix);
            }
            rest = &rest[end..];
        }

        Ok(Humanized {
            text: output,
            detection_score: detection_score(settings.level),
        })
    }
}

/// Per-token mutation probability for a validated level
pub fn mutation_probability(level: i32) -> f64 {
    f64::from(level) / 200.0
}

/// Placeholder detection estimate: `max(5, 90 - level)`, clamped to `[5, 90]`
pub fn detection_score(level: i32) -> u8 {
    (SCORE_CEILING - level).clamp(SCORE_FLOOR, SCORE_CEILING) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use humanizer_types::{Error, Style};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn make_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(42)
    }

    #[test]
    fn test_detection_score_formula() {
        assert_eq!(detection_score(0), 90);
        assert_eq!(detection_score(50), 40);
        assert_eq!(detection_score(85), 5);
        assert_eq!(detection_score(100), 5);
    }

    #[test]
    fn test_mutation_probability() {
        assert_eq!(mutation_probability(0), 0.0);
        assert_eq!(mutation_probability(50), 0.25);
        assert_eq!(mutation_probability(100), 0.5);
    }

    #[test]
    fn test_level_zero_is_identity() {
        let settings = Settings::default().with_level(0);
        let text = "The quick brown fox jumps";
        let out = SuffixMutation
            .transform(text, &settings, &mut make_rng())
            .unwrap();
        assert_eq!(out.text, text);
        assert_eq!(out.detection_score, 90);
    }

    #[test]
    fn test_whitespace_layout_preserved() {
        let settings = Settings::default().with_level(100);
        let text = "  first line\n\tsecond   line  ";
        let out = SuffixMutation
            .transform(text, &settings, &mut make_rng())
            .unwrap();

        assert!(out.text.starts_with("  first"));
        assert!(out.text.ends_with("  "));
        assert_eq!(out.text.matches('\n').count(), 1);
        assert_eq!(out.text.matches('\t').count(), 1);
    }

    #[test]
    fn test_mutation_only_appends() {
        let settings = Settings::default().with_level(100);
        let text = "alpha beta gamma delta epsilon zeta eta theta";
        let out = SuffixMutation
            .transform(text, &settings, &mut make_rng())
            .unwrap();

        for (before, after) in text.split_whitespace().zip(out.text.split_whitespace()) {
            assert!(after.starts_with(before));
            let suffix = &after[before.len()..];
            assert!(MUTATION_SUFFIXES.contains(&suffix), "bad suffix {suffix:?}");
        }
    }

    #[test]
    fn test_same_seed_same_output() {
        let settings = Settings::new(100, Style::Casual, false);
        let text = "one two three four five six seven eight nine ten";
        let a = SuffixMutation
            .transform(text, &settings, &mut make_rng())
            .unwrap();
        let b = SuffixMutation
            .transform(text, &settings, &mut make_rng())
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_invalid_level_rejected() {
        let err = SuffixMutation
            .transform("text", &Settings::default().with_level(101), &mut make_rng())
            .unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }
}
