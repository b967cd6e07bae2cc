use crate::clipboard::Clipboard;
use shortly_core::RecordId;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::warn;

/// How long the "copied" indicator stays set after a successful write.
pub const COPIED_RESET_DELAY: Duration = Duration::from_secs(2);

#[derive(Default)]
struct IndicatorState {
    /// Which record currently shows as "copied", if any.
    copied: Option<RecordId>,
    /// The pending auto-clear timer for that record.
    reset: Option<JoinHandle<()>>,
}

/// Drives fire-and-forget clipboard writes and the transient "copied"
/// indicator.
///
/// A write is issued without blocking the caller. On success the
/// indicator is set to the record's id and a reset timer is armed; the
/// timer is cancelled when the indicator is cleared early (a newer copy
/// or the record's removal), so it never fires against stale state. On
/// failure the error is logged and otherwise ignored.
pub struct CopyTracker<C> {
    clipboard: Arc<C>,
    state: Arc<Mutex<IndicatorState>>,
}

impl<C: Clipboard> CopyTracker<C> {
    pub fn new(clipboard: C) -> Self {
        Self {
            clipboard: Arc::new(clipboard),
            state: Arc::new(Mutex::new(IndicatorState::default())),
        }
    }

    /// Copies `text` to the clipboard on behalf of the given record.
    ///
    /// Must be called within a tokio runtime. The returned handle may
    /// be dropped; the write proceeds regardless. There is no
    /// cancellation for an in-flight write and no timeout.
    pub fn copy(&self, id: RecordId, text: String) -> JoinHandle<()> {
        let clipboard = Arc::clone(&self.clipboard);
        let state = Arc::clone(&self.state);

        tokio::spawn(async move {
            if let Err(err) = clipboard.write_text(&text).await {
                warn!(%id, error = %err, "clipboard write failed");
                return;
            }

            let mut guard = lock(&state);
            if let Some(previous) = guard.reset.take() {
                previous.abort();
            }
            guard.copied = Some(id);
            guard.reset = Some(tokio::spawn(reset_after_delay(Arc::clone(&state), id)));
        })
    }

    /// The record currently marked as "copied", if any.
    pub fn copied(&self) -> Option<RecordId> {
        lock(&self.state).copied
    }

    /// Clears the indicator for the given record and cancels its timer.
    ///
    /// Call this when the record is removed. A no-op when the indicator
    /// marks a different record or nothing at all.
    pub fn clear(&self, id: RecordId) {
        let mut guard = lock(&self.state);
        if guard.copied != Some(id) {
            return;
        }
        guard.copied = None;
        if let Some(timer) = guard.reset.take() {
            timer.abort();
        }
    }
}

async fn reset_after_delay(state: Arc<Mutex<IndicatorState>>, id: RecordId) {
    tokio::time::sleep(COPIED_RESET_DELAY).await;

    let mut guard = lock(&state);
    // A newer copy may have taken over the indicator in the meantime;
    // resetting is a no-op against a stale id.
    if guard.copied == Some(id) {
        guard.copied = None;
        guard.reset = None;
    }
}

fn lock(state: &Mutex<IndicatorState>) -> MutexGuard<'_, IndicatorState> {
    // The lock is never held across an await point, so poisoning only
    // happens if a holder panicked; the state itself stays coherent.
    state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
