//! Scripted [`TransformService`] implementations.

use async_trait::async_trait;
use humanizer_runtime::{Error, Result, TransformRequest, TransformService};
use humanizer_types::Humanized;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Always answers with the same output and counts its calls.
pub struct FixedService {
    output: Humanized,
    calls: AtomicUsize,
}

impl FixedService {
    pub fn new(text: impl Into<String>, detection_score: u8) -> Self {
        Self {
            output: Humanized {
                text: text.into(),
                detection_score,
            },
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TransformService for FixedService {
    async fn transform(&self, _request: &TransformRequest) -> Result<Humanized> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.output.clone())
    }
}

/// Fails every call the way an unreachable backend would.
pub struct FailingService {
    message: String,
}

impl FailingService {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Default for FailingService {
    fn default() -> Self {
        Self::new("service unavailable")
    }
}

#[async_trait]
impl TransformService for FailingService {
    async fn transform(&self, _request: &TransformRequest) -> Result<Humanized> {
        Err(Error::Transformation(self.message.clone()))
    }
}
