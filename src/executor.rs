use std::time::Duration;

use folio_core::Executor;
use futures::future::LocalBoxFuture;

/// Runs tasks on the browser microtask queue with `setTimeout` timers.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserExecutor;

impl Executor for BrowserExecutor {
    fn spawn(&self, task: LocalBoxFuture<'static, ()>) {
        wasm_bindgen_futures::spawn_local(task);
    }

    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()> {
        Box::pin(gloo::timers::future::sleep(duration))
    }
}
