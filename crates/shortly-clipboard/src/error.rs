use thiserror::Error;

pub type Result<T> = std::result::Result<T, ClipboardError>;

/// Clipboard failures are non-fatal and diagnostic-only: they are
/// logged and swallowed, and never affect registry state.
#[derive(Debug, Clone, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("clipboard write failed: {0}")]
    Write(String),
}
