//! Summarization pipeline and summary retention
//!
//! When a room empties, its transcript snapshot is handed to this module:
//! the pipeline builds a prompt, calls the external summarization worker,
//! normalizes the response, and the store keeps the result readable for
//! 24 hours. Service failures never escape the pipeline; they degrade to a
//! stored marker string.

mod clean;
mod pipeline;
mod store;

pub use clean::clean_summary;
pub use pipeline::{
    store_room_summary, summarize_transcript, Summarize, WorkerSummarizer,
    INSUFFICIENT_CONTENT_MARKER, MIN_TRANSCRIPT_CHARS, SUMMARY_FAILURE_MARKER,
};
pub use store::{SummaryStore, SUMMARY_EXPIRED, SUMMARY_NOT_FOUND};
