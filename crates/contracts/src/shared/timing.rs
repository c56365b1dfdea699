use std::time::Duration;

/// Fixed delays standing in for network latency
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationTiming {
    /// Chat reply latency
    pub reply_latency: Duration,
    /// Interval between upload progress updates
    pub upload_tick: Duration,
    /// Percent added per upload tick
    pub upload_step: u8,
    /// Shortest analysis time
    pub analysis_min: Duration,
    /// Upper bound of the random extra analysis time
    pub analysis_jitter: Duration,
}

impl Default for SimulationTiming {
    fn default() -> Self {
        Self {
            reply_latency: Duration::from_millis(1500),
            upload_tick: Duration::from_millis(100),
            upload_step: 10,
            analysis_min: Duration::from_millis(3000),
            analysis_jitter: Duration::from_millis(2000),
        }
    }
}

impl SimulationTiming {
    /// Progress values emitted during upload: `0, step, 2*step, ..., 100`.
    /// The last value is always exactly 100.
    pub fn progress_steps(&self) -> Vec<u8> {
        let step = self.upload_step.clamp(1, 100);
        let mut steps: Vec<u8> = (0..=100u8).step_by(step as usize).collect();
        if steps.last() != Some(&100) {
            steps.push(100);
        }
        steps
    }

    /// `analysis_min + roll * analysis_jitter`, `roll` in `[0, 1)`
    pub fn analysis_latency(&self, roll: f64) -> Duration {
        self.analysis_min + self.analysis_jitter.mul_f64(roll.clamp(0.0, 1.0))
    }
}
