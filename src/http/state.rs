use crate::config::Config;
use crate::room::{Registry, TranscriptLog};
use crate::summary::{Summarize, SummaryStore, WorkerSummarizer};
use anyhow::Result;
use std::sync::Arc;
use std::time::Duration;

/// Shared application state: one handle per process-wide store.
///
/// Each store serializes its own mutations; handlers and connection tasks
/// only ever hold one of them at a time.
#[derive(Clone)]
pub struct AppState {
    /// Room membership and event delivery
    pub registry: Arc<Registry>,

    /// Per-room transcript buffers
    pub transcripts: Arc<TranscriptLog>,

    /// Retained summaries, 24 h per record
    pub summaries: Arc<SummaryStore>,

    /// External summarization service port
    pub summarizer: Arc<dyn Summarize>,
}

impl AppState {
    pub fn new(cfg: &Config) -> Result<Self> {
        let summarizer = WorkerSummarizer::new(
            cfg.summarizer.endpoint.clone(),
            Duration::from_secs(cfg.summarizer.timeout_secs),
        )?;

        Ok(Self {
            registry: Arc::new(Registry::new()),
            transcripts: Arc::new(TranscriptLog::new()),
            summaries: Arc::new(SummaryStore::new()),
            summarizer: Arc::new(summarizer),
        })
    }
}
