//! DOM event subscriptions
//!
//! A [`Subscription`] owns the closure registered with the browser, so the
//! closure stays alive for as long as it may be called. Dropping the
//! subscription removes the listener.

use std::cell::Cell;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget};

/// An event listener that can be attached and detached repeatedly
pub(crate) struct Subscription {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
    attached: Cell<bool>,
}

impl Subscription {
    /// Create a detached subscription
    pub fn new<F>(target: &EventTarget, event: &'static str, handler: F) -> Self
    where
        F: FnMut(Event) + 'static,
    {
        Self {
            target: target.clone(),
            event,
            callback: Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>),
            attached: Cell::new(false),
        }
    }

    /// Create and attach in one step
    pub fn listen<F>(target: &EventTarget, event: &'static str, handler: F) -> Result<Self, JsValue>
    where
        F: FnMut(Event) + 'static,
    {
        let subscription = Self::new(target, event, handler);
        subscription.attach()?;
        Ok(subscription)
    }

    /// Register with the target; no-op if already attached
    pub fn attach(&self) -> Result<(), JsValue> {
        if self.attached.get() {
            return Ok(());
        }
        self.target
            .add_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref())?;
        self.attached.set(true);
        Ok(())
    }

    /// Unregister from the target; no-op if not attached
    pub fn detach(&self) {
        if !self.attached.replace(false) {
            return;
        }
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.detach();
    }
}
