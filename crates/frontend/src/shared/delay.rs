use std::future::Future;
use std::time::Duration;

use contracts::shared::delay::Delay;

/// `setTimeout`-backed delay for the simulated latencies
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooDelay;

impl Delay for GlooDelay {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> {
        gloo_timers::future::sleep(duration)
    }
}
