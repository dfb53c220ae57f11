use std::collections::HashMap;
use tokio::sync::Mutex;
use tracing::debug;

/// Per-room transcript buffers.
///
/// A buffer is created lazily on the first utterance for a room code and
/// removed by `snapshot_and_clear` at teardown. Growth is unbounded for the
/// lifetime of the room; transcripts are volatile and never persisted.
pub struct TranscriptLog {
    buffers: Mutex<HashMap<String, String>>,
}

impl TranscriptLog {
    pub fn new() -> Self {
        Self {
            buffers: Mutex::new(HashMap::new()),
        }
    }

    /// Append one recognized utterance to a room's transcript.
    ///
    /// Text that trims to empty is ignored; callers are expected to filter,
    /// but empty input must not create a buffer or a blank line.
    pub async fn append(&self, room: &str, speaker: &str, text: &str) {
        if text.trim().is_empty() {
            return;
        }

        let mut buffers = self.buffers.lock().await;
        let buffer = buffers.entry(room.to_string()).or_default();
        buffer.push_str(speaker);
        buffer.push_str(": ");
        buffer.push_str(text);
        buffer.push('\n');
    }

    /// Atomically remove and return the accumulated transcript for a room.
    ///
    /// Returns `None` when no utterance was ever recorded. Called once per
    /// teardown; a later join under the same code starts a fresh buffer.
    pub async fn snapshot_and_clear(&self, room: &str) -> Option<String> {
        let snapshot = self.buffers.lock().await.remove(room);
        if snapshot.is_none() {
            debug!("No transcript recorded for room {}", room);
        }
        snapshot
    }
}

impl Default for TranscriptLog {
    fn default() -> Self {
        Self::new()
    }
}
