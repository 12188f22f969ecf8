//! Test doubles for the [`Executor`] seam. Requires the `test-util` feature.

use std::time::Duration;

use futures::future::LocalBoxFuture;

use crate::executor::Executor;

/// Executor backed by the tokio `LocalSet` the test runs on.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioExecutor;

impl Executor for TokioExecutor {
    fn spawn(&self, task: LocalBoxFuture<'static, ()>) {
        tokio::task::spawn_local(task);
    }

    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()> {
        Box::pin(tokio::time::sleep(duration))
    }
}

/// Let spawned local tasks run without advancing the clock.
pub async fn settle() {
    for _ in 0..8 {
        tokio::task::yield_now().await;
    }
}
