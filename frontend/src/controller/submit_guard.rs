//! Submission guard and loading overlay.

use std::rc::Rc;

use gloo_events::{EventListener, EventListenerOptions};
use web_sys::{Event, HtmlElement, HtmlFormElement, HtmlInputElement};

use crate::dom;
use crate::services::Notifier;
use crate::{ControllerConfig, SubmissionOutcome};

pub struct SubmissionGuard {
    file_input: Option<HtmlInputElement>,
    overlay: Option<HtmlElement>,
    notifier: Rc<dyn Notifier>,
    message: String,
    hidden_class: String,
    flex_class: String,
}

impl SubmissionGuard {
    pub fn new(
        file_input: Option<HtmlInputElement>,
        overlay: Option<HtmlElement>,
        notifier: Rc<dyn Notifier>,
        config: &ControllerConfig,
    ) -> Self {
        Self {
            file_input,
            overlay,
            notifier,
            message: config.missing_file_message.clone(),
            hidden_class: config.classes.hidden.clone(),
            flex_class: config.classes.flex.clone(),
        }
    }

    pub fn listen(self, form: &HtmlFormElement) -> EventListener {
        EventListener::new_with_options(
            form,
            "submit",
            EventListenerOptions::enable_prevent_default(),
            move |event| self.on_submit(event),
        )
    }

    /// Decide the outcome from the current file selection.
    ///
    /// Without a file input on the page there is nothing to check.
    pub fn evaluate(&self) -> SubmissionOutcome {
        match &self.file_input {
            Some(input) if input.files().map_or(0, |files| files.length()) == 0 => {
                SubmissionOutcome::Blocked
            }
            _ => SubmissionOutcome::Proceeding,
        }
    }

    fn on_submit(&self, event: &Event) {
        if self.evaluate().is_blocked() {
            event.prevent_default();
            log::info!("Submission blocked: no file selected");
            if let Err(e) = self.notifier.notify(&self.message) {
                log::warn!("{}", e);
            }
        } else {
            log::info!("Submitting upload form");
            self.show_overlay();
        }
    }

    /// Reveal the overlay through inline style, the hidden class and the
    /// flex class, whichever the page stylesheet relies on. Each step is
    /// applied even if another one fails.
    fn show_overlay(&self) {
        let Some(overlay) = &self.overlay else {
            return;
        };
        dom::or_warn(dom::set_display(overlay, "flex"), "Overlay display not set");
        dom::or_warn(
            dom::remove_class(overlay, &self.hidden_class),
            "Overlay hidden class not removed",
        );
        dom::or_warn(
            dom::add_class(overlay, &self.flex_class),
            "Overlay flex class not added",
        );
    }
}
