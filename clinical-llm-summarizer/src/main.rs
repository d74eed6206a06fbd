use clinical_llm_summarizer::{
    DocumentAnalyzer, GroqSummarizer, prompts::SAMPLE_DOCUMENT, summarize_clinical_document,
};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout carries only the model reply
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "clinical_llm_summarizer=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let summarizer = GroqSummarizer::from_env()?;

    let local = DocumentAnalyzer::new()?.analyze(SAMPLE_DOCUMENT);
    info!(
        analysis = %serde_json::to_string(&local)?,
        "Local keyword analysis"
    );
    info!(model = summarizer.model(), "Summarizing sample clinical document");

    let result = summarize_clinical_document(&summarizer, SAMPLE_DOCUMENT).await?;
    println!("{}", result);

    Ok(())
}
