//! Application configuration.
//!
//! Centralized configuration for the upload form controller. The defaults
//! match the markup rendered by the SnapCal server templates; a page can
//! override any of them with an inline JSON block:
//!
//! ```html
//! <script type="application/json" id="upload-form-config">
//!   { "selectors": { "dropArea": "#dropzone" }, "missingFileMessage": "Pick a photo first." }
//! </script>
//! ```
//!
//! or by calling `attachUploadForm({...})` from JavaScript, which replaces
//! the binding made at start-up.

use serde::{Deserialize, Serialize};
use web_sys::Document;

use crate::{AppError, AppResult};

/// Console log level used at start-up.
pub const LOG_LEVEL: log::Level = log::Level::Debug;

/// Id of the optional inline JSON configuration element.
pub const CONFIG_SCRIPT_ID: &str = "upload-form-config";

/// File picker attached to the upload form.
pub const FILE_INPUT_SELECTOR: &str = ".file-input";
/// Region accepting dragged files.
pub const DROP_AREA_SELECTOR: &str = ".file-drop-area";
/// Image element receiving the preview data URL.
pub const PREVIEW_IMAGE_SELECTOR: &str = ".preview-image";
/// Element shown while no preview is available.
pub const PLACEHOLDER_SELECTOR: &str = ".preview-placeholder";
/// Checkbox enabling the daily-needs section.
pub const TOGGLE_SELECTOR: &str = "#calorie-toggle";
/// Secondary section holding the user profile fields.
pub const USER_SECTION_SELECTOR: &str = "#user-form";
/// Fields that become required when the section is enabled.
pub const USER_INPUT_SELECTOR: &str = ".user-input";
/// The upload form itself.
pub const UPLOAD_FORM_SELECTOR: &str = "#upload-form";
/// Full-screen overlay shown while the form submits.
pub const LOADING_OVERLAY_SELECTOR: &str = "#loading-overlay";

/// Class marking the drop region while a drag hovers it.
pub const ACTIVE_CLASS: &str = "is-active";
/// Utility class hiding an element.
pub const HIDDEN_CLASS: &str = "hidden";
/// Utility class giving an element flex display.
pub const FLEX_CLASS: &str = "flex";

/// Media-type prefix accepted for previews.
pub const IMAGE_MIME_PREFIX: &str = "image/";

/// Alert shown when the form is submitted without a file.
pub const MISSING_FILE_MESSAGE: &str = "Please upload an image.";

/// CSS selectors the controller binds to.
///
/// Every selector is optional on the page: a selector that matches nothing
/// disables the behavior depending on it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Selectors {
    pub file_input: String,
    pub drop_area: String,
    pub preview_image: String,
    pub placeholder: String,
    pub toggle: String,
    pub user_section: String,
    pub user_inputs: String,
    pub upload_form: String,
    pub loading_overlay: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            file_input: FILE_INPUT_SELECTOR.to_string(),
            drop_area: DROP_AREA_SELECTOR.to_string(),
            preview_image: PREVIEW_IMAGE_SELECTOR.to_string(),
            placeholder: PLACEHOLDER_SELECTOR.to_string(),
            toggle: TOGGLE_SELECTOR.to_string(),
            user_section: USER_SECTION_SELECTOR.to_string(),
            user_inputs: USER_INPUT_SELECTOR.to_string(),
            upload_form: UPLOAD_FORM_SELECTOR.to_string(),
            loading_overlay: LOADING_OVERLAY_SELECTOR.to_string(),
        }
    }
}

/// State classes toggled on page elements.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StateClasses {
    pub active: String,
    pub hidden: String,
    pub flex: String,
}

impl Default for StateClasses {
    fn default() -> Self {
        Self {
            active: ACTIVE_CLASS.to_string(),
            hidden: HIDDEN_CLASS.to_string(),
            flex: FLEX_CLASS.to_string(),
        }
    }
}

/// Full controller configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ControllerConfig {
    pub selectors: Selectors,
    pub classes: StateClasses,
    pub image_mime_prefix: String,
    pub missing_file_message: String,
    /// Attach automatically when the module starts. With `false` the page
    /// stays unbound until `attachUploadForm` is called.
    pub auto_attach: bool,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            selectors: Selectors::default(),
            classes: StateClasses::default(),
            image_mime_prefix: IMAGE_MIME_PREFIX.to_string(),
            missing_file_message: MISSING_FILE_MESSAGE.to_string(),
            auto_attach: true,
        }
    }
}

impl ControllerConfig {
    /// Parse a (possibly partial) JSON configuration.
    pub fn from_json(json: &str) -> AppResult<Self> {
        serde_json::from_str(json).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Load the configuration declared by the page, if any.
    ///
    /// A malformed block is logged and ignored.
    pub fn from_document(document: &Document) -> Self {
        let Some(json) = document
            .get_element_by_id(CONFIG_SCRIPT_ID)
            .and_then(|el| el.text_content())
        else {
            return Self::default();
        };

        match Self::from_json(&json) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Ignoring #{}: {}", CONFIG_SCRIPT_ID, e);
                Self::default()
            }
        }
    }
}
