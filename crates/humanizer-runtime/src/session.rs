use humanizer_engine::{GateDecision, UsageGate};
use humanizer_types::{DetectionBand, Settings, SubscriptionTier};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a session sits in the input → processing → results workflow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    #[default]
    Idle,
    Blocked,
    Processing,
    Results,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Blocked => "blocked",
            Phase::Processing => "processing",
            Phase::Results => "results",
        }
    }

    /// Which tab a front end should show; derived, never stored
    pub fn view(&self) -> View {
        match self {
            Phase::Results => View::Results,
            Phase::Idle | Phase::Blocked | Phase::Processing => View::Input,
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    Input,
    Results,
}

/// A completed transformation, kept alongside the snapshot it was computed from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformResult {
    pub original_text: String,
    pub humanized_text: String,
    pub detection_score: u8,
    pub settings: Settings,
}

impl TransformResult {
    pub fn band(&self) -> DetectionBand {
        DetectionBand::from_score(self.detection_score)
    }
}

/// The single mutable workflow instance.
///
/// Fields are only written by [`crate::WorkflowController`]; readers get
/// accessors so the phase/result invariants cannot be broken from outside.
#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub(crate) input_text: String,
    pub(crate) settings: Settings,
    pub(crate) tier: SubscriptionTier,
    pub(crate) phase: Phase,
    pub(crate) result: Option<TransformResult>,
    pub(crate) generation: u64,
    pub(crate) last_error: Option<String>,
}

impl Session {
    pub fn new(tier: SubscriptionTier, settings: Settings) -> Self {
        Self {
            input_text: String::new(),
            settings,
            tier,
            phase: Phase::Idle,
            result: None,
            generation: 0,
            last_error: None,
        }
    }

    pub fn input_text(&self) -> &str {
        &self.input_text
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn tier(&self) -> &SubscriptionTier {
        &self.tier
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn result(&self) -> Option<&TransformResult> {
        self.result.as_ref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn word_count(&self) -> usize {
        humanizer_types::word_count(&self.input_text)
    }

    /// Gate decision for the current text and tier
    pub fn gate(&self) -> GateDecision {
        UsageGate::evaluate(self.word_count(), &self.tier)
    }

    pub fn view(&self) -> View {
        self.phase.view()
    }

    /// True when a front end should enable its "humanize" action
    pub fn can_process(&self) -> bool {
        self.phase == Phase::Idle && !humanizer_types::is_blank(&self.input_text)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SubscriptionTier::default(), Settings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_projection() {
        assert_eq!(Phase::Idle.view(), View::Input);
        assert_eq!(Phase::Blocked.view(), View::Input);
        assert_eq!(Phase::Processing.view(), View::Input);
        assert_eq!(Phase::Results.view(), View::Results);
    }

    #[test]
    fn test_session_initialization() {
        let session = Session::default();
        assert_eq!(session.phase(), Phase::Idle);
        assert_eq!(session.input_text(), "");
        assert!(session.result().is_none());
        assert_eq!(session.generation(), 0);
        assert!(!session.can_process());
        assert_eq!(session.gate().usage_ratio, 0);
    }

    #[test]
    fn test_phase_display() {
        assert_eq!(Phase::Processing.to_string(), "processing");
        assert_eq!(
            serde_json::to_string(&Phase::Blocked).unwrap(),
            "\"blocked\""
        );
    }
}
