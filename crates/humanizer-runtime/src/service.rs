use async_trait::async_trait;
use humanizer_engine::{SuffixMutation, TransformStrategy};
use humanizer_types::{Humanized, Settings};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::sync::Mutex;
use std::time::Duration;

use crate::{Error, Result};

/// Snapshot of what a dispatch asked to transform
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformRequest {
    pub text: String,
    pub settings: Settings,
}

/// Boundary to the rewriting service.
///
/// Callers must treat this as a suspension point that may fail; a network
/// backend implements the same contract as the in-process one.
#[async_trait]
pub trait TransformService: Send + Sync {
    async fn transform(&self, request: &TransformRequest) -> Result<Humanized>;
}

/// In-process service running a [`TransformStrategy`] after a simulated delay
pub struct LocalTransformService<S = SuffixMutation> {
    strategy: S,
    rng: Mutex<StdRng>,
    latency: Duration,
}

impl LocalTransformService<SuffixMutation> {
    pub fn reference() -> Self {
        Self::new(SuffixMutation)
    }
}

impl Default for LocalTransformService<SuffixMutation> {
    fn default() -> Self {
        Self::reference()
    }
}

impl<S: TransformStrategy> LocalTransformService<S> {
    pub fn new(strategy: S) -> Self {
        Self {
            strategy,
            rng: Mutex::new(StdRng::from_entropy()),
            latency: Duration::ZERO,
        }
    }

    /// Reproducible service: same seed, same sequence of outputs
    pub fn seeded(strategy: S, seed: u64) -> Self {
        Self {
            strategy,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
            latency: Duration::ZERO,
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    fn run_strategy(&self, request: &TransformRequest) -> Result<Humanized> {
        let mut rng = self
            .rng
            .lock()
            .map_err(|_| Error::Transformation("random source poisoned".to_string()))?;
        let humanized = self
            .strategy
            .transform(&request.text, &request.settings, &mut *rng)?;
        Ok(humanized)
    }
}

#[async_trait]
impl<S: TransformStrategy> TransformService for LocalTransformService<S> {
    async fn transform(&self, request: &TransformRequest) -> Result<Humanized> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        self.run_strategy(request)
    }
}
