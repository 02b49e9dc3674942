//! Sliding side panels.
//!
//! A fixed set of named overlay panels of which at most one is open. The
//! open/closed state lives in a [`PanelRegistry`] owned by a
//! [`PanelController`]; the page markup is only ever written by rendering that
//! state through a [`PanelSurface`].

mod controller;
mod dom;

use std::fmt;
use std::str::FromStr;

use crate::error::UiError;

pub use controller::{PanelController, PanelSurface};
pub use dom::{DomPanelSurface, SharedController, init_panels};

/// One of the page's fixed overlay panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelName {
    Ledger,
    Actions,
    Profile,
}

impl PanelName {
    /// Every panel, in declaration order.
    pub const ALL: [PanelName; 3] = [PanelName::Ledger, PanelName::Actions, PanelName::Profile];

    pub fn as_str(self) -> &'static str {
        match self {
            PanelName::Ledger => "ledger",
            PanelName::Actions => "actions",
            PanelName::Profile => "profile",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for PanelName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PanelName {
    type Err = UiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PanelName::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| UiError::UnknownPanel(s.to_string()))
    }
}

/// Open flag per panel. At most one flag is set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PanelRegistry {
    open: [bool; PanelName::ALL.len()],
}

impl PanelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self, name: PanelName) -> bool {
        self.open[name.index()]
    }

    pub fn any_open(&self) -> bool {
        self.open.iter().any(|open| *open)
    }

    /// The open panel, if any.
    pub fn open_panel(&self) -> Option<PanelName> {
        PanelName::ALL.into_iter().find(|name| self.is_open(*name))
    }

    pub(crate) fn set(&mut self, name: PanelName, open: bool) {
        self.open[name.index()] = open;
    }

    /// Flip `name` and return its new state.
    pub(crate) fn flip(&mut self, name: PanelName) -> bool {
        let slot = &mut self.open[name.index()];
        *slot = !*slot;
        *slot
    }
}

/// Recover a panel's identity from its class list: the token
/// `<prefix><name>` whose suffix is a known panel name.
pub fn panel_from_class_list(class_name: &str, prefix: &str) -> Option<PanelName> {
    class_name
        .split_whitespace()
        .filter_map(|token| token.strip_prefix(prefix))
        .find_map(|suffix| suffix.parse().ok())
}
