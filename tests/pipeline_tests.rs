use anyhow::{anyhow, Result};
use async_trait::async_trait;
use huddle::summary::{
    summarize_transcript, Summarize, INSUFFICIENT_CONTENT_MARKER, SUMMARY_FAILURE_MARKER,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Test double for the summarization worker: counts calls, records the last
/// prompt, and replies with a canned response or an error.
#[derive(Clone, Default)]
struct MockSummarizer {
    calls: Arc<AtomicUsize>,
    last_prompt: Arc<Mutex<Option<String>>>,
    reply: Option<String>,
}

impl MockSummarizer {
    fn replying(reply: &str) -> Self {
        Self {
            reply: Some(reply.to_string()),
            ..Self::default()
        }
    }

    fn failing() -> Self {
        Self::default()
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Summarize for MockSummarizer {
    async fn summarize(&self, prompt: &str) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_prompt.lock().unwrap() = Some(prompt.to_string());
        match &self.reply {
            Some(reply) => Ok(reply.clone()),
            None => Err(anyhow!("worker unreachable")),
        }
    }
}

#[tokio::test]
async fn short_transcripts_never_reach_the_service() {
    let mock = MockSummarizer::replying("- unused");

    let result = summarize_transcript(&mock, "0123456789").await;

    assert_eq!(result, INSUFFICIENT_CONTENT_MARKER);
    assert_eq!(mock.calls(), 0);
}

#[tokio::test]
async fn service_failure_degrades_to_the_failure_marker() {
    let mock = MockSummarizer::failing();
    let transcript = "peer-a: a conversation long enough to summarize\n";

    let result = summarize_transcript(&mock, transcript).await;

    assert_eq!(result, SUMMARY_FAILURE_MARKER);
    assert_eq!(mock.calls(), 1);
}

#[tokio::test]
async fn successful_responses_are_normalized() {
    let mock = MockSummarizer::replying("Sure! - decided to ship friday (Note: tentative)");
    let transcript = "peer-a: should we ship friday?\npeer-b: yes, tentatively\n";

    let result = summarize_transcript(&mock, transcript).await;

    assert_eq!(result, "- decided to ship friday");
    assert_eq!(mock.calls(), 1);
}

#[tokio::test]
async fn prompt_embeds_the_transcript_with_the_instruction() {
    let mock = MockSummarizer::replying("- fine");
    let transcript = "peer-a: this transcript is long enough to be summarized\n";

    let _ = summarize_transcript(&mock, transcript).await;

    let prompt = mock.last_prompt.lock().unwrap().clone().unwrap();
    assert!(prompt.contains(transcript));
    assert!(prompt.ends_with("Summary:"));
    assert!(prompt.contains("bullet"));
}
