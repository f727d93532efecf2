//! Common types used across the frontend.
//!
//! # Categories
//!
//! - **State Types** - typed views of transient page state
//! - **Error Types** - frontend error handling

use thiserror::Error;
use wasm_bindgen::JsValue;

// =============================================================================
// State Types
// =============================================================================

/// What the preview area currently displays.
///
/// Always derived from the DOM, never cached.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PreviewState {
    /// The preview image is visible.
    Image,
    /// The placeholder is shown (or no preview image exists).
    Placeholder,
}

/// Result of the submission guard for one submit event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// No file selected: submission cancelled and the user alerted.
    Blocked,
    /// Native submission continues and the loading overlay is shown.
    Proceeding,
}

impl SubmissionOutcome {
    pub fn is_blocked(self) -> bool {
        matches!(self, SubmissionOutcome::Blocked)
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend errors.
///
/// None of these reach the user: handlers log them and carry on.
#[derive(Clone, Debug, Error)]
pub enum AppError {
    /// A DOM call was rejected.
    #[error("DOM error: {0}")]
    Dom(String),

    /// Reading a file as a data URL failed.
    #[error("File read error: {0}")]
    FileRead(String),

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The user notice could not be shown.
    #[error("Notification error: {0}")]
    Notify(String),
}

impl AppError {
    /// Wrap a rejected DOM call with some context.
    pub fn dom(context: &str, value: JsValue) -> Self {
        AppError::Dom(format!("{}: {:?}", context, value))
    }
}

impl From<AppError> for JsValue {
    fn from(err: AppError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;
