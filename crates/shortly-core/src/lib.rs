//! Core types for the Shortly URL shortener prototype.
//!
//! This crate provides the shared types used by the registry and the
//! clipboard boundary: the validated short code, the tracked record,
//! and the URL validator.

pub mod error;
pub mod record;
pub mod shortcode;
pub mod validate;

pub use error::{CoreError, Result};
pub use record::{RecordId, UrlRecord};
pub use shortcode::{ShortCode, CODE_LENGTH};
pub use validate::is_valid_url;
