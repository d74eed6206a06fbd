use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Structured facts extracted from one clinical document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisResult {
    pub summary: String,
    pub detected_diseases: Vec<String>,
    pub medications: Vec<String>,
    pub expanded_abbreviations: BTreeMap<String, String>,
}

/// A persisted audit row.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct SummaryRecord {
    pub id: i64,
    pub document: String,
    pub summary: String,
}

#[derive(Debug)]
pub struct SummarizeRequest {
    pub document: String,
}

impl SummarizeRequest {
    /// Accepts only a JSON object whose `document` field is a string.
    pub fn from_json(body: &Value) -> Option<Self> {
        let document = body.as_object()?.get("document")?.as_str()?;
        Some(Self {
            document: document.to_string(),
        })
    }
}

#[derive(Debug, Serialize)]
pub struct SummarizeResponse {
    pub analysis: AnalysisResult,
    pub abbreviation_reference: BTreeMap<String, String>,
}
