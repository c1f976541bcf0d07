use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::{Error, Result};

pub const MIN_LEVEL: i32 = 0;
pub const MAX_LEVEL: i32 = 100;

/// Writing register requested from the rewriting backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    #[default]
    Academic,
    Professional,
    Casual,
}

impl Style {
    pub const ALL: [Style; 3] = [Style::Academic, Style::Professional, Style::Casual];

    pub fn as_str(&self) -> &'static str {
        match self {
            Style::Academic => "academic",
            Style::Professional => "professional",
            Style::Casual => "casual",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Style {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "academic" => Ok(Style::Academic),
            "professional" => Ok(Style::Professional),
            "casual" => Ok(Style::Casual),
            other => Err(Error::Validation(format!("unknown style '{}'", other))),
        }
    }
}

/// Human-readable bucket for the humanization level slider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    Subtle,
    Moderate,
    Aggressive,
}

impl Intensity {
    pub fn from_level(level: i32) -> Self {
        if level < 33 {
            Intensity::Subtle
        } else if level < 66 {
            Intensity::Moderate
        } else {
            Intensity::Aggressive
        }
    }
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Intensity::Subtle => write!(f, "Subtle"),
            Intensity::Moderate => write!(f, "Moderate"),
            Intensity::Aggressive => write!(f, "Aggressive"),
        }
    }
}

/// Humanization knobs, replaced wholesale on every edit.
///
/// `level` is kept signed so out-of-range input survives until
/// [`Settings::validate`] rejects it; nothing in the pipeline clamps it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub level: i32,
    pub style: Style,
    pub preserve_key_points: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            level: 50,
            style: Style::Academic,
            preserve_key_points: true,
        }
    }
}

impl Settings {
    pub fn new(level: i32, style: Style, preserve_key_points: bool) -> Self {
        Self {
            level,
            style,
            preserve_key_points,
        }
    }

    /// Build settings from untyped input, validating as we go
    pub fn parse(level: i32, style: &str, preserve_key_points: bool) -> Result<Self> {
        let settings = Self::new(level, style.parse()?, preserve_key_points);
        settings.validate()?;
        Ok(settings)
    }

    pub fn with_level(self, level: i32) -> Self {
        Self { level, ..self }
    }

    pub fn with_style(self, style: Style) -> Self {
        Self { style, ..self }
    }

    pub fn with_preserve_key_points(self, preserve_key_points: bool) -> Self {
        Self {
            preserve_key_points,
            ..self
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !(MIN_LEVEL..=MAX_LEVEL).contains(&self.level) {
            return Err(Error::Validation(format!(
                "level must be in range {}-{}, got: {}",
                MIN_LEVEL, MAX_LEVEL, self.level
            )));
        }
        Ok(())
    }

    pub fn intensity(&self) -> Intensity {
        Intensity::from_level(self.level)
    }
}
