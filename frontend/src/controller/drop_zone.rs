//! Drag-and-drop intake.
//!
//! All four drag events have their default action cancelled so the
//! browser never opens a dropped file itself.

use std::rc::Rc;

use gloo_events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, Event, FileList, HtmlElement, HtmlInputElement};

use super::FileIntake;
use crate::dom;
use crate::AppResult;

/// Drag events handled on the drop region.
pub const DRAG_EVENTS: [&str; 4] = ["dragenter", "dragover", "dragleave", "drop"];

pub struct DropZone {
    area: HtmlElement,
    file_input: Option<HtmlInputElement>,
    intake: FileIntake,
    active_class: String,
}

impl DropZone {
    pub fn new(
        area: HtmlElement,
        file_input: Option<HtmlInputElement>,
        intake: FileIntake,
        active_class: &str,
    ) -> Self {
        Self {
            area,
            file_input,
            intake,
            active_class: active_class.to_string(),
        }
    }

    /// Register one non-passive listener per drag event.
    pub fn listen(self: Rc<Self>) -> Vec<EventListener> {
        DRAG_EVENTS
            .iter()
            .map(|&event_type| {
                let zone = Rc::clone(&self);
                EventListener::new_with_options(
                    &self.area,
                    event_type,
                    EventListenerOptions::enable_prevent_default(),
                    move |event| zone.on_drag_event(event),
                )
            })
            .collect()
    }

    fn on_drag_event(&self, event: &Event) {
        event.prevent_default();
        event.stop_propagation();

        let result = match event.type_().as_str() {
            "dragenter" | "dragover" => dom::add_class(&self.area, &self.active_class),
            "dragleave" => dom::remove_class(&self.area, &self.active_class),
            "drop" => self.on_drop(event),
            _ => Ok(()),
        };
        if let Err(e) = result {
            log::warn!("Drop region update failed: {}", e);
        }
    }

    fn on_drop(&self, event: &Event) -> AppResult<()> {
        dom::or_warn(
            dom::remove_class(&self.area, &self.active_class),
            "Active class not cleared",
        );

        let Some(files) = dropped_files(event) else {
            return Ok(());
        };
        let Some(input) = &self.file_input else {
            log::debug!("No file input on the page, dropped files ignored");
            return Ok(());
        };

        input.set_files(Some(&files));
        self.intake.handle_files(&files);
        Ok(())
    }
}

fn dropped_files(event: &Event) -> Option<FileList> {
    event
        .dyn_ref::<DragEvent>()?
        .data_transfer()?
        .files()
}
