pub mod error;
pub mod output;
pub mod settings;
pub mod tier;
mod util;

pub use error::{Error, Result};
pub use output::{DetectionBand, Humanized};
pub use settings::{Intensity, Settings, Style};
pub use tier::{SubscriptionTier, Tier, WordLimit};
pub use util::*;
