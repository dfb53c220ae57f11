use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use tokio::sync::Mutex;
use tracing::info;

/// Returned by `get` when no record exists for the room code
pub const SUMMARY_NOT_FOUND: &str = "No summary could be found for that room.";

/// Returned by `get` exactly once when a record has outlived its retention
pub const SUMMARY_EXPIRED: &str =
    "The meeting ended more than 24 hours ago, so its summary is no longer available.";

/// How long a summary record stays readable after its last write
const RETENTION_HOURS: i64 = 24;

struct SummaryRecord {
    text: String,
    updated_at: DateTime<Utc>,
}

/// Keyed cache of room summaries with lazy time-based eviction.
///
/// At most one live record exists per room code. Repeated teardowns of the
/// same code within the retention window append to the record, so summary
/// text accumulates across occupancies. Records outlive the rooms that
/// produced them and are only dropped when a read finds them expired.
pub struct SummaryStore {
    records: Mutex<HashMap<String, SummaryRecord>>,
}

impl SummaryStore {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(HashMap::new()),
        }
    }

    /// Append a summary and the transcript that produced it to the room's
    /// record, creating the record with its banner if absent. Every write
    /// refreshes the record's timestamp.
    pub async fn put(&self, room: &str, summary: &str, transcript: &str) {
        self.put_at(room, summary, transcript, Utc::now()).await;
    }

    /// Fetch the stored text for a room.
    ///
    /// Unknown codes yield the not-found sentinel. A record older than the
    /// retention window is deleted and reported as expired once; subsequent
    /// reads see not-found. Reads never extend the timestamp.
    pub async fn get(&self, room: &str) -> String {
        self.get_at(room, Utc::now()).await
    }

    async fn put_at(&self, room: &str, summary: &str, transcript: &str, now: DateTime<Utc>) {
        let mut records = self.records.lock().await;
        let record = records
            .entry(room.to_string())
            .or_insert_with(|| SummaryRecord {
                text: format!("--- Meeting log: room {} ---\n\n", room),
                updated_at: now,
            });

        record.text.push_str("[AI summary]\n");
        record.text.push_str(summary);
        record.text.push_str("\n\n");
        record.text.push_str("--- Full conversation ---\n");
        record.text.push_str(transcript);
        record.updated_at = now;

        info!("Stored summary for room {}", room);
    }

    async fn get_at(&self, room: &str, now: DateTime<Utc>) -> String {
        let mut records = self.records.lock().await;
        match records.get(room) {
            None => SUMMARY_NOT_FOUND.to_string(),
            Some(record) => {
                if now.signed_duration_since(record.updated_at)
                    >= Duration::hours(RETENTION_HOURS)
                {
                    records.remove(room);
                    info!("Summary for room {} expired", room);
                    SUMMARY_EXPIRED.to_string()
                } else {
                    record.text.clone()
                }
            }
        }
    }
}

impl Default for SummaryStore {
    fn default() -> Self {
        Self::new()
    }
}
