//! RecruitApp Web - page interactivity
//!
//! Theme toggle, sliding side panels, chat input ergonomics and smooth anchor
//! scrolling, attached once when the document is ready.

pub mod anchors;
pub mod chat;
pub mod config;
mod dom;
pub mod error;
pub mod logging;
pub mod panels;
pub mod theme;
pub mod timer;

use tracing::{info, warn};
use wasm_bindgen::prelude::*;
use web_sys::Document;

pub use config::UiConfig;
pub use error::{Result, UiError};
pub use panels::{PanelController, PanelName, PanelRegistry, PanelSurface};
pub use theme::{Theme, ThemeState, ThemeStore};

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = UiConfig::from_window();
    logging::init(config.max_level());
    if let Some(err) = config_error {
        warn!(error = %err, "ignoring {}", config::CONFIG_GLOBAL);
    }

    if let Err(err) = run_when_ready(config) {
        warn!(error = %err, "page UI not started");
    }
}

/// Run [`init`] now, or on `DOMContentLoaded` if the document is still
/// loading.
pub fn run_when_ready(config: UiConfig) -> Result<()> {
    let document = dom::document()?;
    if document.ready_state() == "loading" {
        let ready = document.clone();
        let mut pending = Some(config);
        dom::listen(&document, "DOMContentLoaded", move |_| {
            if let Some(config) = pending.take() {
                init(&ready, &config);
            }
        })?;
    } else {
        init(&document, &config);
    }
    Ok(())
}

/// Attach every feature to `document`. A feature whose controls are missing
/// stays off; a failing feature is logged and does not stop the others.
pub fn init(document: &Document, config: &UiConfig) {
    info!("RecruitApp UI initialized");

    if let Err(err) = theme::init_theme_toggle(document, &config.theme) {
        warn!(error = %err, "theme toggle disabled");
    }
    if let Err(err) = panels::init_panels(document, &config.panels) {
        warn!(error = %err, "panels disabled");
    }
    if let Err(err) = chat::init_chat(document, &config.chat) {
        warn!(error = %err, "chat enhancements disabled");
    }
    if let Err(err) = anchors::init_smooth_scroll(document, &config.anchors) {
        warn!(error = %err, "smooth scroll disabled");
    }
}
