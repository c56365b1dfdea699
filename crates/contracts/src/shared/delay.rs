use std::future::Future;
use std::time::Duration;

/// Timer source for the simulated latencies.
///
/// The browser implementation is backed by `setTimeout`; tests use tokio's
/// virtual clock. No `Send` bound: browser timer futures are single-threaded.
pub trait Delay {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()>;
}
