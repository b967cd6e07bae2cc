//! Bounded in-memory registry of shortened URLs.
//!
//! This crate provides the record lifecycle: validation, short code
//! generation, bounded insertion-ordered mutation, and the usage
//! statistics derived from it. Core types are re-exported from
//! `shortly_core`.

pub mod error;
pub mod generator;
pub mod registry;
pub mod stats;

pub use error::RegistryError;
pub use generator::{random::RandomGenerator, seq::SequentialGenerator, Generator};
pub use registry::{Registry, CAPACITY};
pub use stats::UsageStats;

pub use shortly_core::{RecordId, ShortCode, UrlRecord};
