//! Browser services used by the controller.
//!
//! # Services
//!
//! - [`notify`] - blocking user notices (`window.alert`)
//! - [`file_reader`] - asynchronous file to data-URL reads

pub mod file_reader;
pub mod notify;

pub use file_reader::*;
pub use notify::*;
