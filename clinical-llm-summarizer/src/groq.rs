use async_trait::async_trait;
use rig::{client::CompletionClient, completion::Prompt, providers::groq};
use std::time::Duration;
use tracing::{debug, info};

use crate::{
    DocumentSummarizer, SummarizerError,
    prompts::{QUESTION_PREAMBLE, SUMMARY_PREAMBLE, question_prompt, summary_prompt},
};

pub const API_KEY_VAR: &str = "GROQ_API_KEY";
pub const MODEL_VAR: &str = "GROQ_MODEL";
pub const DEFAULT_MODEL: &str = "llama-3.1-8b-instant";
pub const TEMPERATURE: f64 = 0.2;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// One chat completion: a system preamble plus a user prompt in, raw text out.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    async fn complete(&self, preamble: &str, prompt: &str) -> Result<String, SummarizerError>;
}

/// Groq chat completions through rig.
pub struct GroqBackend {
    client: groq::Client,
    model: String,
}

impl GroqBackend {
    pub fn new(api_key: &str, model: impl Into<String>) -> Self {
        Self {
            client: groq::Client::new(api_key),
            model: model.into(),
        }
    }
}

#[async_trait]
impl CompletionBackend for GroqBackend {
    async fn complete(&self, preamble: &str, prompt: &str) -> Result<String, SummarizerError> {
        let agent = self
            .client
            .agent(&self.model)
            .preamble(preamble)
            .temperature(TEMPERATURE)
            .build();

        debug!(model = %self.model, prompt_length = prompt.len(), "Sending completion request");
        Ok(agent.prompt(prompt).await?)
    }
}

/// `DocumentSummarizer` that bounds every backend call with a timeout.
pub struct GroqSummarizer<B = GroqBackend> {
    backend: B,
    timeout: Duration,
}

impl GroqSummarizer {
    pub fn new(api_key: &str, model: impl Into<String>) -> Self {
        Self::with_backend(GroqBackend::new(api_key, model))
    }

    /// Build from `GROQ_API_KEY` and, if set, `GROQ_MODEL`.
    pub fn from_env() -> Result<Self, SummarizerError> {
        let api_key =
            std::env::var(API_KEY_VAR).map_err(|_| SummarizerError::MissingApiKey(API_KEY_VAR))?;
        let model = std::env::var(MODEL_VAR).unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        Ok(Self::new(&api_key, model))
    }

    pub fn model(&self) -> &str {
        &self.backend.model
    }
}

impl<B: CompletionBackend> GroqSummarizer<B> {
    pub fn with_backend(backend: B) -> Self {
        Self {
            backend,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    async fn complete(&self, preamble: &str, prompt: &str) -> Result<String, SummarizerError> {
        let response = tokio::time::timeout(self.timeout, self.backend.complete(preamble, prompt))
            .await
            .map_err(|_| SummarizerError::Timeout(self.timeout))??;

        info!(response_length = response.len(), "Completion received");
        Ok(response)
    }
}

#[async_trait]
impl<B: CompletionBackend> DocumentSummarizer for GroqSummarizer<B> {
    async fn summarize(&self, document_text: &str) -> Result<String, SummarizerError> {
        self.complete(SUMMARY_PREAMBLE, &summary_prompt(document_text))
            .await
    }

    async fn answer(
        &self,
        document_text: &str,
        question: &str,
    ) -> Result<String, SummarizerError> {
        self.complete(QUESTION_PREAMBLE, &question_prompt(document_text, question))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompts::SAMPLE_DOCUMENT;
    use std::sync::{Arc, Mutex};

    /// Echoes a fixed reply and keeps every `(preamble, prompt)` pair.
    #[derive(Clone, Default)]
    struct RecordingBackend {
        calls: Arc<Mutex<Vec<(String, String)>>>,
    }

    #[async_trait]
    impl CompletionBackend for RecordingBackend {
        async fn complete(&self, preamble: &str, prompt: &str) -> Result<String, SummarizerError> {
            self.calls
                .lock()
                .unwrap()
                .push((preamble.to_string(), prompt.to_string()));
            Ok("{\"summary\": \"TIA\"}".to_string())
        }
    }

    struct StalledBackend;

    #[async_trait]
    impl CompletionBackend for StalledBackend {
        async fn complete(&self, _preamble: &str, _prompt: &str) -> Result<String, SummarizerError> {
            tokio::time::sleep(Duration::from_secs(30)).await;
            Ok(String::new())
        }
    }

    #[test]
    fn test_defaults() {
        let summarizer = GroqSummarizer::new("test-key", DEFAULT_MODEL);
        assert_eq!(summarizer.model(), "llama-3.1-8b-instant");
        assert_eq!(summarizer.timeout, DEFAULT_TIMEOUT);

        let summarizer = summarizer.with_timeout(Duration::from_secs(5));
        assert_eq!(summarizer.timeout, Duration::from_secs(5));
    }

    #[tokio::test]
    async fn test_summarize_sends_json_preamble_and_field_prompt() {
        let backend = RecordingBackend::default();
        let summarizer = GroqSummarizer::with_backend(backend.clone());

        let reply = summarizer.summarize(SAMPLE_DOCUMENT).await.unwrap();

        assert_eq!(reply, "{\"summary\": \"TIA\"}");
        let calls = backend.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, SUMMARY_PREAMBLE);
        assert_eq!(calls[0].1, summary_prompt(SAMPLE_DOCUMENT));
    }

    #[tokio::test]
    async fn test_answer_sends_document_only_preamble() {
        let backend = RecordingBackend::default();
        let summarizer = GroqSummarizer::with_backend(backend.clone());

        summarizer
            .answer(SAMPLE_DOCUMENT, "Which medications?")
            .await
            .unwrap();

        let calls = backend.calls.lock().unwrap();
        assert_eq!(calls[0].0, QUESTION_PREAMBLE);
        assert!(calls[0].1.starts_with("Document:\n"));
        assert!(calls[0].1.ends_with("\n\nQuestion:Which medications?"));
    }

    #[tokio::test]
    async fn test_stalled_backend_times_out() {
        let summarizer =
            GroqSummarizer::with_backend(StalledBackend).with_timeout(Duration::from_millis(50));

        let result = summarizer.summarize(SAMPLE_DOCUMENT).await;

        match result {
            Err(SummarizerError::Timeout(limit)) => assert_eq!(limit, Duration::from_millis(50)),
            other => panic!("expected timeout, got {:?}", other),
        }
    }

    /// Live call against Groq.
    /// Usage: GROQ_API_KEY=key cargo test test_live_summarize
    #[tokio::test]
    async fn test_live_summarize() -> anyhow::Result<()> {
        if std::env::var(API_KEY_VAR).is_err() {
            println!("Skipping test - set GROQ_API_KEY environment variable");
            return Ok(());
        }

        let summarizer = GroqSummarizer::from_env()?;
        let reply = summarizer.summarize(SAMPLE_DOCUMENT).await?;
        println!("Model reply: {}", reply);
        assert!(!reply.trim().is_empty());

        Ok(())
    }
}
