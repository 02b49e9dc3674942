//! Smooth scrolling for in-page anchor links.

use tracing::debug;
use web_sys::{Document, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::config::AnchorConfig;
use crate::dom::{listen, query_all};
use crate::error::Result;

/// Element id targeted by an in-page `href`. `None` for the bare `#` and for
/// links that leave the page.
pub fn fragment_target(href: &str) -> Option<&str> {
    match href.strip_prefix('#') {
        Some("") | None => None,
        Some(id) => Some(id),
    }
}

/// Attach smooth scrolling to every in-page anchor. Returns how many links
/// were wired.
pub fn init_smooth_scroll(document: &Document, config: &AnchorConfig) -> Result<usize> {
    let anchors = query_all(document, &config.selector)?;
    let count = anchors.len();

    for anchor in anchors {
        let link = anchor.clone();
        let document = document.clone();
        listen(&anchor, "click", move |event| {
            let Some(href) = link.get_attribute("href") else {
                return;
            };
            let Some(id) = fragment_target(&href) else {
                return;
            };
            event.prevent_default();

            let Some(target) = document.get_element_by_id(id) else {
                debug!(fragment = id, "anchor target not found");
                return;
            };
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            target.scroll_into_view_with_scroll_into_view_options(&options);
        })?;
    }

    Ok(count)
}
