//! Periodic auto-advance task

use bookshelf_carousel::TimerCommand;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Window;

use crate::util::{js_error_text, log};

/// `setInterval` handle driven by [`TimerCommand`]s
///
/// The callback closure lives as long as the timer so the browser never calls
/// a dropped function.
pub(crate) struct AutoAdvanceTimer {
    window: Window,
    interval_ms: i32,
    callback: Closure<dyn FnMut()>,
    handle: Option<i32>,
}

impl AutoAdvanceTimer {
    /// Create a stopped timer calling `callback` every `interval_ms`
    pub fn new(window: Window, interval_ms: u32, callback: Closure<dyn FnMut()>) -> Self {
        Self {
            window,
            interval_ms: interval_ms.min(i32::MAX as u32) as i32,
            callback,
            handle: None,
        }
    }

    /// Check if the interval is registered
    #[inline]
    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    /// Apply a command from the carousel engine
    pub fn apply(&mut self, command: TimerCommand) {
        match command {
            TimerCommand::Keep => {}
            TimerCommand::Start => self.start(),
            TimerCommand::Cancel => self.cancel(),
        }
    }

    /// Start ticking; no-op while already running
    fn start(&mut self) {
        if self.is_running() {
            return;
        }

        match self
            .window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                self.callback.as_ref().unchecked_ref(),
                self.interval_ms,
            ) {
            Ok(handle) => self.handle = Some(handle),
            Err(e) => log(&format!("[timer] setInterval failed: {}", js_error_text(&e))),
        }
    }

    fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.window.clear_interval_with_handle(handle);
        }
    }
}

impl Drop for AutoAdvanceTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}
