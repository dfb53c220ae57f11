//! Room lifecycle state
//!
//! This module owns the two process-wide stores that exist only while rooms
//! are occupied:
//! - `Registry`: room membership, join/leave broadcasts, signal relay
//! - `TranscriptLog`: per-room recognized-speech buffers
//!
//! Both route every mutation through one mutex, so room state changes are
//! serialized. Teardown (occupancy reaching zero) is driven by the
//! connection layer, which snapshots the transcript and hands it to the
//! summarization pipeline.

mod registry;
mod transcript;

pub use registry::{EventSender, Registry};
pub use transcript::TranscriptLog;
