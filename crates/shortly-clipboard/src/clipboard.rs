use crate::error::Result;
use async_trait::async_trait;

/// A clipboard-write primitive.
///
/// Implementations are external collaborators; the core only ever
/// drives them through [`CopyTracker`](crate::CopyTracker), which
/// issues writes without blocking and observes completion later.
#[async_trait]
pub trait Clipboard: Send + Sync + 'static {
    /// Writes the given text to the clipboard.
    async fn write_text(&self, text: &str) -> Result<()>;
}

/// System clipboard backed by `arboard`.
///
/// The underlying handle is not `Send`, so each write opens its own on
/// a blocking thread.
#[cfg(feature = "system")]
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClipboard;

#[cfg(feature = "system")]
#[async_trait]
impl Clipboard for SystemClipboard {
    async fn write_text(&self, text: &str) -> Result<()> {
        use crate::error::ClipboardError;

        let text = text.to_owned();
        tokio::task::spawn_blocking(move || {
            let mut clipboard = arboard::Clipboard::new()
                .map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
            clipboard
                .set_text(text)
                .map_err(|e| ClipboardError::Write(e.to_string()))
        })
        .await
        .map_err(|e| ClipboardError::Write(e.to_string()))?
    }
}
