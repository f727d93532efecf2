//! Blocking user notices.

use crate::{AppError, AppResult};

/// Something able to put a blocking message in front of the user.
///
/// The page uses [`WindowAlert`]; tests substitute a recorder.
pub trait Notifier {
    fn notify(&self, message: &str) -> AppResult<()>;
}

/// `window.alert(...)`.
#[derive(Clone, Copy, Debug, Default)]
pub struct WindowAlert;

impl Notifier for WindowAlert {
    fn notify(&self, message: &str) -> AppResult<()> {
        let window = web_sys::window().ok_or_else(|| AppError::Notify("no global window".into()))?;
        window
            .alert_with_message(message)
            .map_err(|e| AppError::Notify(format!("{:?}", e)))
    }
}
