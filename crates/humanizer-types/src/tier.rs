use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::{Error, Result};

pub const DEFAULT_FREE_WORD_LIMIT: u64 = 500;

/// Subscription level supplied by the account collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    #[default]
    Free,
    Premium,
    Pro,
}

impl Tier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Free => "free",
            Tier::Premium => "premium",
            Tier::Pro => "pro",
        }
    }

    /// Label shown on the usage banner
    pub fn display_name(&self) -> &'static str {
        match self {
            Tier::Free => "Free Tier",
            Tier::Premium => "Premium",
            Tier::Pro => "Pro",
        }
    }

    /// Only the free tier is subject to the word ceiling
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Tier::Free)
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tier {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "free" => Ok(Tier::Free),
            "premium" => Ok(Tier::Premium),
            "pro" => Ok(Tier::Pro),
            other => Err(Error::Validation(format!("unknown tier '{}'", other))),
        }
    }
}

/// Word ceiling attached to a tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<u64>", into = "Option<u64>")]
pub enum WordLimit {
    Limited(u64),
    Unbounded,
}

impl WordLimit {
    pub fn as_option(&self) -> Option<u64> {
        match self {
            WordLimit::Limited(n) => Some(*n),
            WordLimit::Unbounded => None,
        }
    }

    pub fn is_unbounded(&self) -> bool {
        matches!(self, WordLimit::Unbounded)
    }
}

impl Default for WordLimit {
    fn default() -> Self {
        WordLimit::Unbounded
    }
}

impl From<Option<u64>> for WordLimit {
    fn from(value: Option<u64>) -> Self {
        value.map_or(WordLimit::Unbounded, WordLimit::Limited)
    }
}

impl From<WordLimit> for Option<u64> {
    fn from(value: WordLimit) -> Self {
        value.as_option()
    }
}

impl fmt::Display for WordLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WordLimit::Limited(n) => write!(f, "{}", n),
            WordLimit::Unbounded => write!(f, "unlimited"),
        }
    }
}

/// Read-only subscription facts injected into a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionTier {
    pub tier: Tier,
    #[serde(default, skip_serializing_if = "WordLimit::is_unbounded")]
    pub word_limit: WordLimit,
    /// Informational only, never consulted by gating
    #[serde(default)]
    pub current_usage: u64,
}

impl Default for SubscriptionTier {
    fn default() -> Self {
        Self::free(DEFAULT_FREE_WORD_LIMIT)
    }
}

impl SubscriptionTier {
    pub fn new(tier: Tier, word_limit: WordLimit) -> Self {
        Self {
            tier,
            word_limit,
            current_usage: 0,
        }
    }

    pub fn free(word_limit: u64) -> Self {
        Self::new(Tier::Free, WordLimit::Limited(word_limit))
    }

    pub fn premium() -> Self {
        Self::new(Tier::Premium, WordLimit::Unbounded)
    }

    pub fn pro() -> Self {
        Self::new(Tier::Pro, WordLimit::Unbounded)
    }

    /// Default limit for a tier: the free ceiling for `free`, unbounded otherwise
    pub fn for_tier(tier: Tier) -> Self {
        match tier {
            Tier::Free => Self::free(DEFAULT_FREE_WORD_LIMIT),
            Tier::Premium => Self::premium(),
            Tier::Pro => Self::pro(),
        }
    }

    pub fn with_current_usage(self, current_usage: u64) -> Self {
        Self {
            current_usage,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_parse_and_display() {
        assert_eq!("free".parse::<Tier>().unwrap(), Tier::Free);
        assert_eq!("Pro".parse::<Tier>().unwrap(), Tier::Pro);
        assert!("enterprise".parse::<Tier>().is_err());

        assert_eq!(Tier::Premium.to_string(), "premium");
        assert_eq!(Tier::Free.display_name(), "Free Tier");
        assert_eq!(Tier::Pro.display_name(), "Pro");
    }

    #[test]
    fn test_only_free_is_rate_limited() {
        assert!(Tier::Free.is_rate_limited());
        assert!(!Tier::Premium.is_rate_limited());
        assert!(!Tier::Pro.is_rate_limited());
    }

    #[test]
    fn test_for_tier_defaults() {
        assert_eq!(
            SubscriptionTier::for_tier(Tier::Free).word_limit,
            WordLimit::Limited(500)
        );
        assert!(SubscriptionTier::for_tier(Tier::Pro).word_limit.is_unbounded());
        assert_eq!(SubscriptionTier::default(), SubscriptionTier::free(500));
    }

    #[test]
    fn test_word_limit_serde() {
        let limited = serde_json::to_string(&SubscriptionTier::free(250)).unwrap();
        assert_eq!(
            limited,
            r#"{"tier":"free","word_limit":250,"current_usage":0}"#
        );

        let unbounded = serde_json::to_string(&SubscriptionTier::premium()).unwrap();
        assert_eq!(unbounded, r#"{"tier":"premium","current_usage":0}"#);

        let parsed: SubscriptionTier = serde_json::from_str(r#"{"tier":"pro"}"#).unwrap();
        assert_eq!(parsed, SubscriptionTier::pro());
    }
}
