//! Chat input ergonomics: auto-growing input, Enter-to-send and keeping the
//! message list scrolled to the newest message.

use tracing::{info, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, HtmlElement, KeyboardEvent, MutationObserver, MutationObserverInit,
};

use crate::config::ChatConfig;
use crate::dom::{click, listen, query, query_html};
use crate::error::Result;

/// Whether a keydown should submit the message instead of inserting a
/// newline: plain Enter, no Shift, not mid IME composition.
pub fn is_send_key(key: &str, shift: bool, composing: bool) -> bool {
    key == "Enter" && !shift && !composing
}

/// Wire the chat input. Returns `false` (feature disabled) when the page has
/// no input field or no send control. The input must be an HTML element; the
/// send control and message list may be any element, SVG included.
pub fn init_chat(document: &Document, config: &ChatConfig) -> Result<bool> {
    let Some(input) = query_html(document, &config.input_selector)? else {
        return Ok(false);
    };
    let Some(send) = query(document, &config.send_selector)? else {
        return Ok(false);
    };

    {
        let field = input.clone();
        listen(&input, "input", move |_| fit_to_content(&field))?;
    }

    listen(&input, "keydown", move |event| {
        let Some(key) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        if is_send_key(&key.key(), key.shift_key(), key.is_composing()) {
            event.prevent_default();
            if let Err(err) = click(&send) {
                warn!(error = %err, "send control did not accept the click");
            }
        }
    })?;

    if let Some(messages) = query(document, &config.messages_selector)? {
        follow_new_messages(messages)?;
    }

    info!("Chat enhancements initialized");
    Ok(true)
}

/// Reset to natural height, then grow to fit the content.
fn fit_to_content(field: &HtmlElement) {
    let style = field.style();
    let _ = style.set_property("height", "auto");
    let _ = style.set_property("height", &format!("{}px", field.scroll_height()));
}

/// Scroll `container` to the bottom whenever its subtree gains or loses
/// children.
fn follow_new_messages(container: Element) -> Result<()> {
    let target = container.clone();
    let callback = Closure::<dyn FnMut(JsValue, JsValue)>::new(move |_records, _observer| {
        target.set_scroll_top(target.scroll_height());
    });
    let observer = MutationObserver::new(callback.as_ref().unchecked_ref())?;

    let options = MutationObserverInit::new();
    options.set_child_list(true);
    options.set_subtree(true);
    observer.observe_with_options(&container, &options)?;

    callback.forget();
    Ok(())
}
