//! Thin helpers over `web-sys` shared by the initializers.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    CssStyleDeclaration, Document, Element, Event, EventTarget, HtmlElement, MouseEvent,
    MouseEventInit, SvgElement, Window,
};

use crate::error::{Result, UiError};

pub(crate) fn window() -> Result<Window> {
    web_sys::window().ok_or(UiError::NoWindow)
}

pub(crate) fn document() -> Result<Document> {
    window()?.document().ok_or(UiError::NoDocument)
}

/// First element matching `selector`, if any.
pub(crate) fn query(document: &Document, selector: &str) -> Result<Option<Element>> {
    Ok(document.query_selector(selector)?)
}

/// First matching element that is also an `HtmlElement`. A match in another
/// namespace (SVG, MathML) counts as absent; use [`query`] where any element
/// will do.
pub(crate) fn query_html(document: &Document, selector: &str) -> Result<Option<HtmlElement>> {
    Ok(query(document, selector)?.and_then(|el| el.dyn_into::<HtmlElement>().ok()))
}

/// All elements matching `selector`, in document order.
pub(crate) fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>> {
    let list = document.query_selector_all(selector)?;
    let mut elements = Vec::with_capacity(list.length() as usize);
    for i in 0..list.length() {
        if let Some(el) = list.get(i).and_then(|node| node.dyn_into::<Element>().ok()) {
            elements.push(el);
        }
    }
    Ok(elements)
}

/// Add or remove `class` on `el`.
pub(crate) fn set_class(el: &Element, class: &str, on: bool) -> Result<()> {
    el.class_list().toggle_with_force(class, on)?;
    Ok(())
}

/// The inline style of an HTML or SVG element.
pub(crate) fn inline_style(el: &Element) -> Option<CssStyleDeclaration> {
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        Some(html.style())
    } else {
        el.dyn_ref::<SvgElement>().map(SvgElement::style)
    }
}

/// Activate `el` as if clicked. Elements without `click()` get a synthetic
/// bubbling click event.
pub(crate) fn click(el: &Element) -> Result<()> {
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        html.click();
        return Ok(());
    }
    let init = MouseEventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    let event = MouseEvent::new_with_mouse_event_init_dict("click", &init)?;
    el.dispatch_event(&event)?;
    Ok(())
}

/// Attach `handler` for `event` on `target` for the lifetime of the page.
pub(crate) fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<()>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Quote `value` for use inside a CSS attribute selector.
pub(crate) fn css_string(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for ch in value.chars() {
        if ch == '"' || ch == '\\' {
            quoted.push('\\');
        }
        quoted.push(ch);
    }
    quoted.push('"');
    quoted
}

#[cfg(test)]
mod tests {
    use super::css_string;

    #[test]
    fn css_string_escapes_quotes_and_backslashes() {
        assert_eq!(css_string("ledger"), r#""ledger""#);
        assert_eq!(css_string(r#"a"b\c"#), r#""a\"b\\c""#);
    }
}
