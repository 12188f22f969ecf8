//! Scroll throttling.
//!
//! A window opens on the first call and schedules exactly one invocation at
//! its end. Calls made while the window is open are dropped, not queued.
//! The window closes when the scheduled invocation fires.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use crate::executor::Executor;

/// Per-callback throttle window.
#[derive(Debug)]
pub struct Throttle {
    delay: Duration,
    armed: Rc<Cell<bool>>,
}

impl Throttle {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            armed: Rc::new(Cell::new(false)),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Whether a window is currently open
    pub fn is_pending(&self) -> bool {
        self.armed.get()
    }

    /// Schedule `callback` unless a window is already open.
    ///
    /// Returns `true` when this call opened a new window.
    pub fn schedule<X, F>(&self, executor: &X, callback: F) -> bool
    where
        X: Executor + ?Sized,
        F: FnOnce() + 'static,
    {
        if self.armed.replace(true) {
            return false;
        }
        let armed = Rc::clone(&self.armed);
        let window = executor.sleep(self.delay);
        executor.spawn(Box::pin(async move {
            window.await;
            callback();
            armed.set(false);
        }));
        true
    }
}
