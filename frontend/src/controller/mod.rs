//! The upload form controller.
//!
//! Four independent behaviors share one attach point:
//!
//! - [`DropZone`] - drag-and-drop intake, forwarding to the file intake
//! - [`FileIntake`] - image check and data-URL preview
//! - [`ToggleController`] - conditional section and required fields
//! - [`SubmissionGuard`] - missing-file block and loading overlay
//!
//! Each behavior binds only when its elements are present under the root.

mod drop_zone;
mod file_intake;
mod submit_guard;
mod toggle;

pub use drop_zone::*;
pub use file_intake::*;
pub use submit_guard::*;
pub use toggle::*;

use std::rc::Rc;

use gloo_events::EventListener;
use web_sys::{Element, HtmlElement, HtmlFormElement, HtmlInputElement};

use crate::dom::query;
use crate::services::{Notifier, WindowAlert};
use crate::ControllerConfig;

/// Handle owning every listener registered on the page.
///
/// Dropping it detaches the controller.
pub struct UploadFormController {
    intake: FileIntake,
    listeners: Vec<EventListener>,
}

impl UploadFormController {
    /// Attach to the elements under `root`, alerting through `window.alert`.
    pub fn attach(root: &Element, config: &ControllerConfig) -> Self {
        Self::attach_with_notifier(root, config, Rc::new(WindowAlert))
    }

    pub fn attach_with_notifier(
        root: &Element,
        config: &ControllerConfig,
        notifier: Rc<dyn Notifier>,
    ) -> Self {
        let selectors = &config.selectors;
        let file_input: Option<HtmlInputElement> = query(root, &selectors.file_input);
        let intake = FileIntake::new(root, config);
        let mut listeners = Vec::new();

        if let Some(area) = query::<HtmlElement>(root, &selectors.drop_area) {
            let zone = DropZone::new(
                area,
                file_input.clone(),
                intake.clone(),
                &config.classes.active,
            );
            listeners.extend(Rc::new(zone).listen());
        } else {
            log::debug!("No drop region ({})", selectors.drop_area);
        }

        if let Some(input) = &file_input {
            let picker = input.clone();
            let on_change = intake.clone();
            listeners.push(EventListener::new(input, "change", move |_| {
                if let Some(files) = picker.files() {
                    on_change.handle_files(&files);
                }
            }));
        } else {
            log::debug!("No file input ({})", selectors.file_input);
        }

        if let Some(checkbox) = query::<HtmlInputElement>(root, &selectors.toggle) {
            listeners.push(ToggleController::new(root, checkbox, config).listen());
        } else {
            log::debug!("No section toggle ({})", selectors.toggle);
        }

        if let Some(form) = query::<HtmlFormElement>(root, &selectors.upload_form) {
            let overlay = query::<HtmlElement>(root, &selectors.loading_overlay);
            let guard = SubmissionGuard::new(file_input, overlay, notifier, config);
            listeners.push(guard.listen(&form));
        } else {
            log::debug!("No upload form ({})", selectors.upload_form);
        }

        log::info!("Upload form controller attached ({} listeners)", listeners.len());
        Self { intake, listeners }
    }

    /// The file intake shared by the picker and the drop region.
    pub fn intake(&self) -> &FileIntake {
        &self.intake
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}
