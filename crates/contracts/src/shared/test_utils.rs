//! Helpers shared by the async pipeline tests.

use std::future::Future;
use std::time::Duration;

use super::delay::Delay;

/// Delay on tokio's clock; pair with `#[tokio::test(start_paused = true)]`
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioDelay;

impl Delay for TokioDelay {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> {
        tokio::time::sleep(duration)
    }
}
