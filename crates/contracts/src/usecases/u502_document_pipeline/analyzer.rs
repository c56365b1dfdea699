use std::future::Future;
use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;

use crate::domain::a002_uploaded_file::FileMeta;
use crate::domain::a003_analysis_result::{synthesize, AnalysisResult};
use crate::shared::delay::Delay;
use crate::shared::timing::SimulationTiming;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    #[error("analysis service unavailable: {0}")]
    Unavailable(String),
    #[error("document could not be analyzed: {0}")]
    Unreadable(String),
}

pub trait DocumentAnalyzer {
    fn analyze(&self, file: &FileMeta)
        -> impl Future<Output = Result<AnalysisResult, AnalysisError>>;
}

/// Returns a synthetic [`AnalysisResult`] after `3s + U(0,1) * 2s` (defaults).
/// Never fails.
pub struct SimulatedAnalyzer<D> {
    delay: D,
    timing: SimulationTiming,
    rng: Mutex<StdRng>,
}

impl<D: Delay> SimulatedAnalyzer<D> {
    pub fn new(delay: D, timing: SimulationTiming) -> Self {
        Self::with_rng(delay, timing, StdRng::from_entropy())
    }

    pub fn with_seed(delay: D, timing: SimulationTiming, seed: u64) -> Self {
        Self::with_rng(delay, timing, StdRng::seed_from_u64(seed))
    }

    fn with_rng(delay: D, timing: SimulationTiming, rng: StdRng) -> Self {
        Self {
            delay,
            timing,
            rng: Mutex::new(rng),
        }
    }
}

impl<D: Delay> DocumentAnalyzer for SimulatedAnalyzer<D> {
    async fn analyze(&self, file: &FileMeta) -> Result<AnalysisResult, AnalysisError> {
        let (latency, analysis) = {
            let mut rng = self
                .rng
                .lock()
                .unwrap_or_else(std::sync::PoisonError::into_inner);
            let latency = self.timing.analysis_latency(rng.gen::<f64>());
            (latency, synthesize(&file.name, &mut *rng))
        };

        self.delay.sleep(latency).await;
        Ok(analysis)
    }
}
