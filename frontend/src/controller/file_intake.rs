//! File intake: image type check and asynchronous preview.
//!
//! Only the first file of a collection matters. A non-image or empty
//! selection leaves the current preview untouched.

use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, File, FileList, HtmlImageElement};

use crate::dom::{self, query};
use crate::services::read_data_url;
use crate::{AppResult, ControllerConfig, PreviewState};

/// Whether a declared media type qualifies for preview.
pub fn is_image_type(mime: &str, prefix: &str) -> bool {
    mime.starts_with(prefix)
}

/// Renders the preview for files coming from the picker or a drop.
#[derive(Clone)]
pub struct FileIntake {
    root: Element,
    preview: Option<HtmlImageElement>,
    placeholder_selector: String,
    hidden_class: String,
    image_prefix: String,
}

impl FileIntake {
    pub fn new(root: &Element, config: &ControllerConfig) -> Self {
        Self {
            root: root.clone(),
            preview: query(root, &config.selectors.preview_image),
            placeholder_selector: config.selectors.placeholder.clone(),
            hidden_class: config.classes.hidden.clone(),
            image_prefix: config.image_mime_prefix.clone(),
        }
    }

    /// First file of `files` if it is an image.
    pub fn first_image(&self, files: &FileList) -> Option<File> {
        files
            .get(0)
            .filter(|file| is_image_type(&file.type_(), &self.image_prefix))
    }

    /// Start loading a preview for `files`.
    ///
    /// Returns `true` when a read was started. Reads are never cancelled:
    /// when several overlap, the last one to complete sets the image.
    pub fn handle_files(&self, files: &FileList) -> bool {
        let Some(file) = self.first_image(files) else {
            log::debug!("Selection has no leading image, preview unchanged");
            return false;
        };

        let intake = self.clone();
        spawn_local(async move {
            if let Err(e) = intake.load_preview(file).await {
                log::warn!("Preview not updated: {}", e);
            }
        });
        true
    }

    /// Read `file` and display it.
    pub async fn load_preview(&self, file: File) -> AppResult<()> {
        let name = file.name();
        let data_url = read_data_url(file).await?;
        self.show_preview(&data_url)?;
        log::debug!("Preview loaded for {}", name);
        Ok(())
    }

    fn show_preview(&self, data_url: &str) -> AppResult<()> {
        let Some(preview) = &self.preview else {
            return Ok(());
        };

        preview.set_src(data_url);
        dom::or_warn(
            dom::remove_class(preview, &self.hidden_class),
            "Preview not unhidden",
        );

        if let Some(placeholder) = query::<Element>(&self.root, &self.placeholder_selector) {
            dom::add_class(&placeholder, &self.hidden_class)?;
        }
        Ok(())
    }

    /// Current preview state, read back from the DOM.
    pub fn preview_state(&self) -> PreviewState {
        match &self.preview {
            Some(preview) if !preview.class_list().contains(&self.hidden_class) => {
                PreviewState::Image
            }
            _ => PreviewState::Placeholder,
        }
    }
}
