//! Asks a hosted LLM to turn a clinical document into structured JSON.
//!
//! The model reply is returned as raw text; nothing here parses or validates it.

pub mod analysis;
pub mod groq;
pub mod highlight;
pub mod keywords;
pub mod prompts;
pub mod severity;

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

pub use analysis::{DocumentAnalysis, DocumentAnalyzer};
pub use groq::{CompletionBackend, GroqBackend, GroqSummarizer};

#[derive(Error, Debug)]
pub enum SummarizerError {
    #[error("{0} environment variable is not set")]
    MissingApiKey(&'static str),

    #[error("LLM request failed: {0}")]
    Prompt(#[from] rig::completion::PromptError),

    #[error("LLM request timed out after {0:?}")]
    Timeout(Duration),

    #[error("Invalid keyword pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

/// A backend that can read a clinical document and reply in free text.
#[async_trait]
pub trait DocumentSummarizer: Send + Sync {
    /// Ask for the structured JSON summary of `document_text`.
    async fn summarize(&self, document_text: &str) -> Result<String, SummarizerError>;

    /// Ask a question that must be answered from `document_text` alone.
    async fn answer(&self, document_text: &str, question: &str)
    -> Result<String, SummarizerError>;
}

/// Summarize a clinical document, returning the model's raw reply.
pub async fn summarize_clinical_document(
    summarizer: &dyn DocumentSummarizer,
    document_text: &str,
) -> Result<String, SummarizerError> {
    summarizer.summarize(document_text).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Records the prompts it receives and replies with canned text.
    struct MockSummarizer {
        reply: String,
        seen: Mutex<Vec<String>>,
    }

    impl MockSummarizer {
        fn new(reply: &str) -> Self {
            Self {
                reply: reply.to_string(),
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl DocumentSummarizer for MockSummarizer {
        async fn summarize(&self, document_text: &str) -> Result<String, SummarizerError> {
            self.seen
                .lock()
                .unwrap()
                .push(prompts::summary_prompt(document_text));
            Ok(self.reply.clone())
        }

        async fn answer(
            &self,
            document_text: &str,
            question: &str,
        ) -> Result<String, SummarizerError> {
            self.seen
                .lock()
                .unwrap()
                .push(prompts::question_prompt(document_text, question));
            Ok(self.reply.clone())
        }
    }

    struct FailingSummarizer;

    #[async_trait]
    impl DocumentSummarizer for FailingSummarizer {
        async fn summarize(&self, _document_text: &str) -> Result<String, SummarizerError> {
            Err(SummarizerError::Timeout(Duration::from_secs(60)))
        }

        async fn answer(
            &self,
            _document_text: &str,
            _question: &str,
        ) -> Result<String, SummarizerError> {
            Err(SummarizerError::Timeout(Duration::from_secs(60)))
        }
    }

    #[tokio::test]
    async fn test_reply_is_returned_unmodified() {
        // Not valid JSON on purpose: the reply is passed through untouched.
        let reply = "```json\n{\"patient_name\": \"Ramesh Kumar\"\n```";
        let summarizer = MockSummarizer::new(reply);

        let result = summarize_clinical_document(&summarizer, prompts::SAMPLE_DOCUMENT)
            .await
            .unwrap();

        assert_eq!(result, reply);
        let seen = summarizer.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert!(seen[0].contains("Ramesh Kumar"));
    }

    #[tokio::test]
    async fn test_errors_propagate() {
        let result = summarize_clinical_document(&FailingSummarizer, "TIA").await;
        assert!(matches!(result, Err(SummarizerError::Timeout(_))));
    }
}
