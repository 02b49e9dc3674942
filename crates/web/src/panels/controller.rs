use tracing::{debug, error};

use super::{PanelName, PanelRegistry};
use crate::error::{Result, UiError};

/// Where panel state gets rendered.
///
/// The controller decides; the surface only draws. The DOM implementation is
/// [`super::DomPanelSurface`].
pub trait PanelSurface {
    /// Whether the page has an element for `name`. Errors only when the
    /// lookup itself fails.
    fn has_panel(&self, name: PanelName) -> Result<bool>;

    fn set_panel_open(&mut self, name: PanelName, open: bool) -> Result<()>;

    fn set_toggle_active(&mut self, name: PanelName, active: bool) -> Result<()>;

    fn set_backdrop_visible(&mut self, visible: bool) -> Result<()>;

    fn set_scroll_locked(&mut self, locked: bool) -> Result<()>;
}

/// Single-open-panel controller.
pub struct PanelController<S> {
    registry: PanelRegistry,
    surface: S,
}

impl<S: PanelSurface> PanelController<S> {
    pub fn new(surface: S) -> Self {
        Self {
            registry: PanelRegistry::new(),
            surface,
        }
    }

    pub fn registry(&self) -> &PanelRegistry {
        &self.registry
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn is_open(&self, name: PanelName) -> bool {
        self.registry.is_open(name)
    }

    pub fn any_open(&self) -> bool {
        self.registry.any_open()
    }

    pub fn open_panel(&self) -> Option<PanelName> {
        self.registry.open_panel()
    }

    /// Open `name` if closed, close it if open. Any other open panel is
    /// closed first. Returns whether `name` is now open.
    ///
    /// A panel with no element in the page still closes the others, but its
    /// own flag is not flipped.
    pub fn toggle_panel(&mut self, name: PanelName) -> Result<bool> {
        debug!(panel = %name, "toggling panel");

        for other in PanelName::ALL {
            if other != name && self.registry.is_open(other) {
                self.close_panel(other)?;
            }
        }

        if !self.surface.has_panel(name)? {
            error!(panel = %name, "panel not found");
            return Err(UiError::MissingPanel(name));
        }

        if self.registry.flip(name) {
            self.surface.set_panel_open(name, true)?;
            self.surface.set_backdrop_visible(true)?;
            self.surface.set_toggle_active(name, true)?;
            self.surface.set_scroll_locked(true)?;
            Ok(true)
        } else {
            self.close_panel(name)?;
            Ok(false)
        }
    }

    /// Close `name`. Backdrop and scroll-lock are released once no panel
    /// remains open. Closing a closed panel only re-renders it.
    pub fn close_panel(&mut self, name: PanelName) -> Result<()> {
        self.registry.set(name, false);
        self.surface.set_panel_open(name, false)?;
        self.surface.set_toggle_active(name, false)?;

        if !self.registry.any_open() {
            self.surface.set_backdrop_visible(false)?;
            self.surface.set_scroll_locked(false)?;
        }
        Ok(())
    }

    /// Close every panel.
    pub fn close_all_panels(&mut self) -> Result<()> {
        for name in PanelName::ALL {
            self.close_panel(name)?;
        }
        Ok(())
    }
}
