pub mod config;
pub mod events;
pub mod http;
pub mod room;
pub mod summary;

pub use config::Config;
pub use events::{ClientEvent, ServerEvent};
pub use http::{create_router, AppState};
pub use room::{Registry, TranscriptLog};
pub use summary::{
    clean_summary, store_room_summary, summarize_transcript, Summarize, SummaryStore,
    WorkerSummarizer,
};
