//! SnapCal - upload form page controller
//!
//! A WebAssembly module that wires the behaviors of the food photo upload
//! page onto server-rendered markup.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                    UploadFormController                       │
//! ├──────────────────────────────────────────────────────────────┤
//! │  DropZone ──────────────┐                                     │
//! │  file input (change) ───┴──> FileIntake ──> read_data_url     │
//! │  ToggleController (checkbox change)                           │
//! │  SubmissionGuard (form submit) ──> Notifier                   │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`] - Selectors, state classes and messages
//! - [`types`] - State views and errors
//! - [`controller`] - The four page behaviors
//! - [`services`] - Browser services (alert, file reads)

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod dom;
pub mod controller;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // State
    PreviewState, SubmissionOutcome,
    // Errors
    AppError, AppResult,
};

// Controller
pub use controller::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Points
// =============================================================================

/// WASM entry point - called automatically when the module loads.
#[wasm_bindgen(start)]
pub fn start() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(LOG_LEVEL);

    log::info!("SnapCal upload controller loading");

    if let Err(e) = boot() {
        log::error!("Upload controller not attached: {}", e);
    }
}

thread_local! {
    /// Controller bound to the whole document, replaced on every attach.
    static PAGE_CONTROLLER: RefCell<Option<UploadFormController>> = const { RefCell::new(None) };
}

/// Attach to the whole document once it has been parsed.
fn boot() -> AppResult<()> {
    let document = gloo_utils::document();

    if document.ready_state() == "loading" {
        gloo_events::EventListener::once(&document, "DOMContentLoaded", |_| {
            if let Err(e) = auto_attach() {
                log::error!("Upload controller not attached: {}", e);
            }
        })
        .forget();
        Ok(())
    } else {
        auto_attach()
    }
}

fn auto_attach() -> AppResult<()> {
    let config = ControllerConfig::from_document(&gloo_utils::document());
    if !config.auto_attach {
        log::debug!("Automatic attach disabled, waiting for attachUploadForm()");
        return Ok(());
    }
    attach_document(&config)
}

/// Bind the whole document with `config`, detaching any earlier binding first.
fn attach_document(config: &ControllerConfig) -> AppResult<()> {
    let root = gloo_utils::document()
        .document_element()
        .ok_or_else(|| AppError::Dom("document has no root element".into()))?;

    PAGE_CONTROLLER.with(|slot| {
        let mut slot = slot.borrow_mut();
        slot.take();
        *slot = Some(UploadFormController::attach(&root, config));
    });
    Ok(())
}

/// JavaScript API: attach with an explicit configuration.
///
/// `config` may be `undefined`/`null` for the defaults, or a partial object
/// using the same camelCase keys as the inline JSON block. The new binding
/// replaces whatever was attached before; on error the old one is kept.
#[wasm_bindgen(js_name = attachUploadForm)]
pub fn attach_upload_form(config: JsValue) -> Result<(), JsValue> {
    let config = if config.is_undefined() || config.is_null() {
        ControllerConfig::default()
    } else {
        serde_wasm_bindgen::from_value(config).map_err(|e| AppError::Config(e.to_string()))?
    };

    attach_document(&config)?;
    Ok(())
}

/// JavaScript API: remove the document binding, if any.
#[wasm_bindgen(js_name = detachUploadForm)]
pub fn detach_upload_form() {
    if PAGE_CONTROLLER.with(|slot| slot.borrow_mut().take()).is_some() {
        log::info!("Upload form controller detached");
    }
}
