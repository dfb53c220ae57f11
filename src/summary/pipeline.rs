use super::clean::clean_summary;
use super::store::SummaryStore;
use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{error, info, warn};

/// Transcripts shorter than this never reach the external service
pub const MIN_TRANSCRIPT_CHARS: usize = 30;

/// Stored when a transcript was too short to be worth summarizing
pub const INSUFFICIENT_CONTENT_MARKER: &str = "Not enough was said to produce a summary.";

/// Stored when the external service call failed in any way
pub const SUMMARY_FAILURE_MARKER: &str = "[AI summary failed]";

/// Port to the external summarization service.
///
/// Takes the fully built prompt and returns the raw summary string; any
/// transport or protocol problem surfaces as an error for the pipeline to
/// absorb.
#[async_trait]
pub trait Summarize: Send + Sync {
    async fn summarize(&self, prompt: &str) -> Result<String>;
}

#[derive(Debug, Serialize)]
struct WorkerRequest<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct WorkerResponse {
    summary: String,
}

/// HTTP client for the summarization worker: one POST carrying the prompt,
/// one JSON response carrying the summary.
pub struct WorkerSummarizer {
    client: reqwest::Client,
    endpoint: String,
}

impl WorkerSummarizer {
    /// The request timeout bounds how long a teardown task can hold its
    /// transcript snapshot in memory.
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let endpoint = endpoint.into();
        if endpoint.is_empty() {
            warn!("Summarization worker endpoint is not configured; summaries will fail");
        }

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build summarization HTTP client")?;

        Ok(Self { client, endpoint })
    }
}

#[async_trait]
impl Summarize for WorkerSummarizer {
    async fn summarize(&self, prompt: &str) -> Result<String> {
        if self.endpoint.is_empty() {
            return Err(anyhow!("summarization worker endpoint not configured"));
        }

        info!("Requesting summary from worker");

        let response = self
            .client
            .post(&self.endpoint)
            .json(&WorkerRequest { text: prompt })
            .send()
            .await
            .context("Summarization request failed")?;

        if !response.status().is_success() {
            return Err(anyhow!(
                "Summarization worker returned status {}",
                response.status()
            ));
        }

        let body: WorkerResponse = response
            .json()
            .await
            .context("Malformed summarization response")?;

        Ok(body.summary)
    }
}

fn build_prompt(transcript: &str) -> String {
    format!(
        "Summarize the following conversation concisely, in English only. \
         Focus on important decisions and action items, and start every point \
         with a bullet (-). Do not add any other commentary.\
         \n\nConversation:\n\"{transcript}\"\n\nSummary:"
    )
}

/// Turn one room's transcript into summary text.
///
/// Short transcripts short-circuit to the insufficient-content marker
/// without calling the service. Service failures of any kind are logged and
/// converted to the failure marker so the caller's teardown always
/// completes. Successful responses are normalized before being returned.
pub async fn summarize_transcript(service: &dyn Summarize, transcript: &str) -> String {
    let len = transcript.chars().count();
    if len < MIN_TRANSCRIPT_CHARS {
        info!("Transcript too short to summarize ({} chars)", len);
        return INSUFFICIENT_CONTENT_MARKER.to_string();
    }

    let prompt = build_prompt(transcript);
    match service.summarize(&prompt).await {
        Ok(raw) => {
            info!("Raw summary received ({} chars)", raw.len());
            clean_summary(&raw)
        }
        Err(e) => {
            error!("Summarization failed: {:#}", e);
            SUMMARY_FAILURE_MARKER.to_string()
        }
    }
}

/// Post-teardown completion: summarize a room's snapshot and store the
/// result under its code. Runs inside the detached teardown task, after the
/// room is already gone from the registry.
pub async fn store_room_summary(
    service: &dyn Summarize,
    store: &SummaryStore,
    room: &str,
    transcript: &str,
) {
    info!("Last user left room {}. Summarizing...", room);
    let summary = summarize_transcript(service, transcript).await;
    store.put(room, &summary, transcript).await;
}
