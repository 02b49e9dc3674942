//! Light/dark theme toggle.
//!
//! The active theme is written as an attribute on the root element and
//! persisted to `localStorage`, so it survives reloads. Clicking the toggle
//! control flips it and spins the control once.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use serde::Deserialize;
use tracing::{info, warn};
use web_sys::{Document, Element, Storage};

use crate::config::ThemeConfig;
use crate::dom::{inline_style, listen, query, window};
use crate::error::{Result, UiError};
use crate::timer::Timeout;

/// Page color scheme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// The other theme.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(()),
        }
    }
}

/// Where the theme preference is persisted.
pub trait ThemeStore {
    /// The stored theme, or `None` if nothing valid is stored.
    fn load(&self) -> Option<Theme>;

    fn save(&mut self, theme: Theme) -> Result<()>;
}

/// `window.localStorage` under a fixed key.
pub struct LocalStorageStore {
    storage: Option<Storage>,
    key: String,
}

impl LocalStorageStore {
    /// Open the store. Disabled storage (private mode, sandboxed frames) is
    /// not an error: loads return `None` and saves report [`UiError::Storage`].
    pub fn open(key: impl Into<String>) -> Result<Self> {
        let storage = window()?.local_storage().ok().flatten();
        Ok(Self {
            storage,
            key: key.into(),
        })
    }
}

impl ThemeStore for LocalStorageStore {
    fn load(&self) -> Option<Theme> {
        let value = self.storage.as_ref()?.get_item(&self.key).ok()??;
        value.parse().ok()
    }

    fn save(&mut self, theme: Theme) -> Result<()> {
        let storage = self
            .storage
            .as_ref()
            .ok_or_else(|| UiError::Storage("localStorage is disabled".to_string()))?;
        storage
            .set_item(&self.key, theme.as_str())
            .map_err(|err| UiError::Storage(UiError::from(err).to_string()))
    }
}

/// Current theme plus its backing store.
pub struct ThemeState<S> {
    current: Theme,
    store: S,
}

impl<S: ThemeStore> ThemeState<S> {
    /// Restore the persisted theme, or `default` when none is stored.
    pub fn load(store: S, default: Theme) -> Self {
        let current = store.load().unwrap_or(default);
        Self { current, store }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Switch to the other theme and persist it. The switch holds for the
    /// session even if persisting fails.
    pub fn toggle(&mut self) -> Theme {
        self.current = self.current.toggled();
        if let Err(err) = self.store.save(self.current) {
            warn!(theme = %self.current, error = %err, "theme not persisted");
        }
        self.current
    }
}

/// One-shot rotation on the toggle control. Replaying while a reset is
/// pending cancels that reset and schedules a new one. Elements without an
/// inline style (neither HTML nor SVG) are left still.
pub struct SpinAffordance {
    element: Element,
    duration_ms: u32,
    pending: Option<Timeout>,
}

impl SpinAffordance {
    pub fn new(element: Element, duration_ms: u32) -> Self {
        Self {
            element,
            duration_ms,
            pending: None,
        }
    }

    pub fn play(&mut self) -> Result<()> {
        self.pending.take();
        let Some(style) = inline_style(&self.element) else {
            return Ok(());
        };
        style.set_property("transform", "rotate(360deg)")?;

        self.pending = Some(Timeout::schedule(self.duration_ms, move || {
            let _ = style.remove_property("transform");
        })?);
        Ok(())
    }
}

fn apply(root: &Element, attribute: &str, theme: Theme) -> Result<()> {
    root.set_attribute(attribute, theme.as_str())?;
    Ok(())
}

/// Restore the saved theme and wire the toggle control. Returns `None` when
/// the page has no toggle control. Any element can be the control, including
/// an inline `<svg>` icon.
pub fn init_theme_toggle(
    document: &Document,
    config: &ThemeConfig,
) -> Result<Option<Rc<RefCell<ThemeState<LocalStorageStore>>>>> {
    let Some(toggle) = query(document, &config.toggle_selector)? else {
        return Ok(None);
    };
    let root = document.document_element().ok_or(UiError::NoDocument)?;

    let store = LocalStorageStore::open(config.storage_key.clone())?;
    let state = Rc::new(RefCell::new(ThemeState::load(store, config.default_theme)));
    apply(&root, &config.attribute, state.borrow().current())?;

    let affordance = RefCell::new(SpinAffordance::new(toggle.clone(), config.spin_ms));
    let attribute = config.attribute.clone();
    let handler_state = state.clone();
    listen(&toggle, "click", move |_| {
        let Ok(mut state) = handler_state.try_borrow_mut() else {
            return;
        };
        let next = state.toggle();
        if let Err(err) = apply(&root, &attribute, next) {
            warn!(theme = %next, error = %err, "failed to apply theme");
        }
        if let Ok(mut spin) = affordance.try_borrow_mut() {
            if let Err(err) = spin.play() {
                warn!(error = %err, "theme toggle animation failed");
            }
        }
        info!("Theme switched to: {next}");
    })?;

    Ok(Some(state))
}
