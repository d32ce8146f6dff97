//! Single-slot tracking of in-flight pronunciation fetches.

use tokio::task::AbortHandle;

/// Holds at most one active speech fetch. Starting a new one aborts the
/// previous.
#[derive(Debug, Default)]
pub struct SpeechSlot {
    active: Option<AbortHandle>,
}

impl SpeechSlot {
    /// Install `handle` as the active fetch.
    ///
    /// Returns `true` when a still-running fetch was aborted.
    pub fn replace(&mut self, handle: AbortHandle) -> bool {
        match self.active.replace(handle) {
            Some(previous) => {
                let was_running = !previous.is_finished();
                previous.abort();
                was_running
            }
            None => false,
        }
    }

    /// Abort the active fetch, if any.
    pub fn stop(&mut self) {
        if let Some(handle) = self.active.take() {
            handle.abort();
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for SpeechSlot {
    fn drop(&mut self) {
        self.stop();
    }
}
