//! Local task spawning and timers.
//!
//! The page runs on a single thread, so futures here are `!Send`
//! ([`LocalBoxFuture`]). The browser binding backs this with
//! `spawn_local` and gloo timers; tests use a paused tokio clock.

use std::time::Duration;

use futures::future::LocalBoxFuture;

/// Spawns local futures and produces sleep futures.
pub trait Executor {
    /// Run a future to completion in the background
    fn spawn(&self, task: LocalBoxFuture<'static, ()>);

    /// A future that resolves after `duration`
    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()>;
}
