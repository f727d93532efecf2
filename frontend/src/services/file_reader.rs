//! Reading selected files as data URLs.

use gloo_file::futures::read_as_data_url;
use web_sys::File;

use crate::{AppError, AppResult};

/// Read `file` into a `data:` URL.
///
/// Dropping the returned future aborts the read; callers that need every
/// read to complete must drive it to the end (see `spawn_local`).
pub async fn read_data_url(file: File) -> AppResult<String> {
    let file = gloo_file::File::from(file);
    read_as_data_url(&file)
        .await
        .map_err(|e| AppError::FileRead(e.to_string()))
}
