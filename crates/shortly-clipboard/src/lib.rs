//! Async clipboard boundary for the Shortly prototype.
//!
//! The clipboard is the one asynchronous seam of the system: writes are
//! fire-and-forget, failures are diagnostic-only, and a transient
//! "copied" indicator is auto-cleared by a timer scoped to the record
//! it marks.

pub mod clipboard;
pub mod error;
pub mod indicator;

pub use clipboard::Clipboard;
#[cfg(feature = "system")]
pub use clipboard::SystemClipboard;
pub use error::ClipboardError;
pub use indicator::{CopyTracker, COPIED_RESET_DELAY};
