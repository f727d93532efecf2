//! Conditional section toggle.

use gloo_events::EventListener;
use web_sys::{Element, HtmlElement, HtmlInputElement};

use crate::dom::{self, query, query_all};
use crate::{AppResult, ControllerConfig};

/// Shows the secondary section and makes its fields required while the
/// checkbox is checked; hides it and relaxes them otherwise.
#[derive(Clone)]
pub struct ToggleController {
    root: Element,
    checkbox: HtmlInputElement,
    section: Option<HtmlElement>,
    user_inputs_selector: String,
    hidden_class: String,
}

impl ToggleController {
    pub fn new(root: &Element, checkbox: HtmlInputElement, config: &ControllerConfig) -> Self {
        Self {
            root: root.clone(),
            checkbox,
            section: query(root, &config.selectors.user_section),
            user_inputs_selector: config.selectors.user_inputs.clone(),
            hidden_class: config.classes.hidden.clone(),
        }
    }

    pub fn listen(self) -> EventListener {
        let target = self.checkbox.clone();
        EventListener::new(&target, "change", move |_| {
            if let Err(e) = self.apply(self.checkbox.checked()) {
                log::warn!("Toggle update failed: {}", e);
            }
        })
    }

    /// Bring the section and its fields in line with `checked`.
    pub fn apply(&self, checked: bool) -> AppResult<()> {
        if let Some(section) = &self.section {
            if checked {
                dom::set_display(section, "block")?;
                dom::remove_class(section, &self.hidden_class)?;
            } else {
                dom::set_display(section, "none")?;
                dom::add_class(section, &self.hidden_class)?;
            }
        }

        for field in query_all(&self.root, &self.user_inputs_selector) {
            dom::set_required(&field, checked)?;
        }
        Ok(())
    }
}
