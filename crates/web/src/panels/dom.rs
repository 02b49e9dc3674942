use std::cell::RefCell;
use std::rc::Rc;

use tracing::{debug, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, KeyboardEvent};

use super::{PanelController, PanelName, PanelSurface, panel_from_class_list};
use crate::config::PanelConfig;
use crate::dom::{css_string, listen, query, query_all, set_class};
use crate::error::{Result, UiError};

/// Renders panel state into the page markup.
pub struct DomPanelSurface {
    document: Document,
    body: HtmlElement,
    backdrop: Option<Element>,
    config: PanelConfig,
}

impl DomPanelSurface {
    pub fn new(document: Document, config: PanelConfig) -> Result<Self> {
        let body = document.body().ok_or(UiError::NoBody)?;
        let backdrop = query(&document, &config.backdrop_selector)?;
        Ok(Self {
            document,
            body,
            backdrop,
            config,
        })
    }

    pub fn backdrop(&self) -> Option<&Element> {
        self.backdrop.as_ref()
    }

    fn panel_selector(&self, name: PanelName) -> String {
        format!(".{}{}", self.config.class_prefix, name)
    }

    fn toggle_selector(&self, name: PanelName) -> String {
        format!("[{}={}]", self.config.toggle_attribute, css_string(name.as_str()))
    }

    fn panel_element(&self, name: PanelName) -> Result<Option<Element>> {
        query(&self.document, &self.panel_selector(name))
    }

    /// Identity of the panel enclosing `el`: the explicit id attribute when
    /// present, else the `<prefix><name>` class token.
    pub fn enclosing_panel(&self, el: &Element) -> Option<PanelName> {
        let panel = el
            .closest(&format!(".{}", self.config.panel_class))
            .ok()
            .flatten()?;
        match panel.get_attribute(&self.config.id_attribute) {
            Some(id) => id.parse().ok(),
            None => panel_from_class_list(&panel.class_name(), &self.config.class_prefix),
        }
    }
}

impl PanelSurface for DomPanelSurface {
    fn has_panel(&self, name: PanelName) -> Result<bool> {
        Ok(self.panel_element(name)?.is_some())
    }

    fn set_panel_open(&mut self, name: PanelName, open: bool) -> Result<()> {
        if let Some(panel) = self.panel_element(name)? {
            set_class(&panel, &self.config.open_class, open)?;
        }
        Ok(())
    }

    fn set_toggle_active(&mut self, name: PanelName, active: bool) -> Result<()> {
        if let Some(button) = query(&self.document, &self.toggle_selector(name))? {
            set_class(&button, &self.config.active_class, active)?;
        }
        Ok(())
    }

    fn set_backdrop_visible(&mut self, visible: bool) -> Result<()> {
        if let Some(backdrop) = &self.backdrop {
            set_class(backdrop, &self.config.visible_class, visible)?;
        }
        Ok(())
    }

    fn set_scroll_locked(&mut self, locked: bool) -> Result<()> {
        let style = self.body.style();
        if locked {
            style.set_property("overflow", "hidden")?;
        } else {
            style.remove_property("overflow")?;
        }
        Ok(())
    }
}

/// Controller shared between the page's event handlers.
pub type SharedController = Rc<RefCell<PanelController<DomPanelSurface>>>;

/// Wire toggle controls, close controls, the backdrop and Escape to a new
/// controller. Returns the controller so callers can drive it directly.
pub fn init_panels(document: &Document, config: &PanelConfig) -> Result<SharedController> {
    let surface = DomPanelSurface::new(document.clone(), config.clone())?;
    let controller = Rc::new(RefCell::new(PanelController::new(surface)));

    let toggles = query_all(document, &format!("[{}]", config.toggle_attribute))?;
    for button in toggles {
        let controller = controller.clone();
        let attribute = config.toggle_attribute.clone();
        let target = button.clone();
        listen(&button, "click", move |_| {
            let Some(raw) = target.get_attribute(&attribute) else {
                return;
            };
            let name = match raw.parse::<PanelName>() {
                Ok(name) => name,
                Err(err) => {
                    warn!(error = %err, "ignoring panel toggle");
                    return;
                }
            };
            // Use try_borrow_mut to avoid panic on a re-entrant event
            let Ok(mut ctl) = controller.try_borrow_mut() else {
                return;
            };
            match ctl.toggle_panel(name) {
                Ok(_) | Err(UiError::MissingPanel(_)) => {}
                Err(err) => warn!(panel = %name, error = %err, "panel toggle failed"),
            }
        })?;
    }

    let closers = query_all(document, &config.close_selector)?;
    for button in closers {
        let controller = controller.clone();
        listen(&button, "click", move |event| {
            let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
                return;
            };
            let Ok(mut ctl) = controller.try_borrow_mut() else {
                return;
            };
            let Some(name) = ctl.surface().enclosing_panel(&target) else {
                debug!("close control outside a recognizable panel");
                return;
            };
            if let Err(err) = ctl.close_panel(name) {
                warn!(panel = %name, error = %err, "panel close failed");
            }
        })?;
    }

    let backdrop = controller.borrow().surface().backdrop().cloned();
    if let Some(backdrop) = backdrop {
        let controller = controller.clone();
        listen(&backdrop, "click", move |_| close_all(&controller))?;
    }

    {
        let controller = controller.clone();
        listen(document, "keydown", move |event| {
            let is_escape = event
                .dyn_ref::<KeyboardEvent>()
                .is_some_and(|key| key.key() == "Escape");
            if is_escape {
                close_all(&controller);
            }
        })?;
    }

    info!("Panel system initialized");
    Ok(controller)
}

fn close_all(controller: &SharedController) {
    let Ok(mut ctl) = controller.try_borrow_mut() else {
        return;
    };
    if let Err(err) = ctl.close_all_panels() {
        warn!(error = %err, "closing panels failed");
    }
}
