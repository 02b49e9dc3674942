//! Page UI configuration.
//!
//! Every selector, class name and storage key the initializers depend on lives
//! here. A page may override any of them by defining `window.RA_UI_CONFIG`
//! before the module loads; missing fields keep their defaults.

use serde::Deserialize;
use tracing::Level;

use crate::error::{Result, UiError};
use crate::theme::Theme;

/// Name of the optional global configuration object.
pub const CONFIG_GLOBAL: &str = "RA_UI_CONFIG";

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Maximum log level: `trace`, `debug`, `info`, `warn` or `error`.
    pub log_level: String,
    pub theme: ThemeConfig,
    pub panels: PanelConfig,
    pub chat: ChatConfig,
    pub anchors: AnchorConfig,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            theme: ThemeConfig::default(),
            panels: PanelConfig::default(),
            chat: ChatConfig::default(),
            anchors: AnchorConfig::default(),
        }
    }
}

impl UiConfig {
    /// Read `window.RA_UI_CONFIG`, falling back to defaults when it is absent.
    ///
    /// Logging is not installed yet when this runs, so a decode failure is
    /// returned alongside the defaults for the caller to report.
    pub fn from_window() -> (Self, Option<UiError>) {
        match Self::try_from_window() {
            Ok(config) => (config, None),
            Err(err) => (Self::default(), Some(err)),
        }
    }

    fn try_from_window() -> Result<Self> {
        let window = web_sys::window().ok_or(UiError::NoWindow)?;
        let value = js_sys::Reflect::get(&window, &CONFIG_GLOBAL.into())?;
        if value.is_undefined() || value.is_null() {
            return Ok(Self::default());
        }
        Ok(serde_wasm_bindgen::from_value(value)?)
    }

    /// Parsed log level; unrecognized values mean `INFO`.
    pub fn max_level(&self) -> Level {
        self.log_level.trim().parse().unwrap_or(Level::INFO)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// `localStorage` key holding the persisted theme.
    pub storage_key: String,
    /// Attribute set on the root element.
    pub attribute: String,
    pub toggle_selector: String,
    /// Theme used when nothing (or garbage) is stored.
    pub default_theme: Theme,
    /// Duration of the rotation affordance.
    pub spin_ms: u32,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: "ra-theme".to_string(),
            attribute: "data-theme".to_string(),
            toggle_selector: ".ra-theme-toggle".to_string(),
            default_theme: Theme::Light,
            spin_ms: 500,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    /// Class shared by every panel element.
    pub panel_class: String,
    /// Prefix of the per-panel class, e.g. `ra-panel-` + `ledger`.
    pub class_prefix: String,
    /// Explicit identity attribute on a panel element.
    pub id_attribute: String,
    /// Attribute on toggle controls naming their panel.
    pub toggle_attribute: String,
    pub close_selector: String,
    pub backdrop_selector: String,
    pub open_class: String,
    pub active_class: String,
    pub visible_class: String,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            panel_class: "ra-panel".to_string(),
            class_prefix: "ra-panel-".to_string(),
            id_attribute: "data-panel-id".to_string(),
            toggle_attribute: "data-panel".to_string(),
            close_selector: ".ra-panel-close".to_string(),
            backdrop_selector: ".ra-panel-backdrop".to_string(),
            open_class: "open".to_string(),
            active_class: "active".to_string(),
            visible_class: "visible".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    pub input_selector: String,
    pub send_selector: String,
    pub messages_selector: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            input_selector: ".ra-input-field".to_string(),
            send_selector: ".ra-send-btn".to_string(),
            messages_selector: ".ra-chat-messages".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AnchorConfig {
    pub selector: String,
}

impl Default for AnchorConfig {
    fn default() -> Self {
        Self {
            selector: r##"a[href^="#"]"##.to_string(),
        }
    }
}
