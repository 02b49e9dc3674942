//! Cancellable one-shot browser timers.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::dom::window;
use crate::error::Result;

/// A pending `setTimeout` callback. Dropping the handle cancels the timer if
/// it has not fired yet.
pub struct Timeout {
    id: i32,
    _closure: Closure<dyn FnMut()>,
}

impl Timeout {
    /// Run `callback` once after `millis` milliseconds.
    pub fn schedule<F>(millis: u32, callback: F) -> Result<Self>
    where
        F: FnOnce() + 'static,
    {
        let closure = Closure::once(callback);
        let id = window()?.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            i32::try_from(millis).unwrap_or(i32::MAX),
        )?;
        Ok(Self {
            id,
            _closure: closure,
        })
    }
}

impl Drop for Timeout {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            window.clear_timeout_with_handle(self.id);
        }
    }
}
