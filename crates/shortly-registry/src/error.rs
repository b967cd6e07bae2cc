use thiserror::Error;

pub type Result<T> = std::result::Result<T, RegistryError>;

/// Errors produced by [`Registry::add`](crate::Registry::add).
///
/// Every failure is a rejected single operation: the registry is left
/// unchanged and stays usable afterwards. Callers decide how to surface
/// a rejection; nothing here blocks or retries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("url cannot be empty")]
    EmptyInput,
    #[error("invalid url: {0}")]
    InvalidUrl(String),
    #[error("registry is full: capacity is {0}")]
    CapacityExceeded(usize),
}
