//! `setInterval`-backed tick timer

use game_core::{Scheduler, TimerHandle};
use js_sys::Function;
use log::error;
use web_sys::Window;

/// Fires one long-lived JS callback on an interval
pub struct IntervalScheduler {
    window: Window,
    callback: Function,
}

impl IntervalScheduler {
    pub fn new(window: Window, callback: Function) -> Self {
        Self { window, callback }
    }
}

impl Scheduler for IntervalScheduler {
    fn schedule(&mut self, interval_ms: u32) -> TimerHandle {
        match self
            .window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                &self.callback,
                interval_ms as i32,
            ) {
            Ok(id) => TimerHandle(id),
            Err(e) => {
                // Handle 0 is never issued by the browser, so cancelling it is harmless
                error!("setInterval failed: {:?}", e);
                TimerHandle(0)
            }
        }
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.window.clear_interval_with_handle(handle.0);
    }
}
