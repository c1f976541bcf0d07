use serde::{Deserialize, Serialize};
use std::fmt;

/// Output of a transformation: rewritten text plus its detection estimate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Humanized {
    pub text: String,
    /// 0-100, lower is more human-like
    pub detection_score: u8,
}

impl Humanized {
    pub fn band(&self) -> DetectionBand {
        DetectionBand::from_score(self.detection_score)
    }

    /// Value for the "human-like" progress bar
    pub fn human_likeness(&self) -> u8 {
        100u8.saturating_sub(self.detection_score)
    }
}

/// Coarse reading of a detection score, used for colouring results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetectionBand {
    HumanLike,
    Mixed,
    AiLike,
}

impl DetectionBand {
    pub fn from_score(score: u8) -> Self {
        if score < 30 {
            DetectionBand::HumanLike
        } else if score < 60 {
            DetectionBand::Mixed
        } else {
            DetectionBand::AiLike
        }
    }
}

impl fmt::Display for DetectionBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DetectionBand::HumanLike => write!(f, "human-like"),
            DetectionBand::Mixed => write!(f, "mixed"),
            DetectionBand::AiLike => write!(f, "AI-like"),
        }
    }
}
