use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{
    SummarizerError,
    highlight::{self, AbbreviationFinder, AbbreviationMatch, HighlightedTerms},
    severity::{self, Severity},
};

/// Keyword findings computed locally, alongside whatever the model returns.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentAnalysis {
    pub highlighted_terms: HighlightedTerms,
    pub severity: Severity,
    pub abbreviations: Vec<AbbreviationMatch>,
    pub analyzed_at: DateTime<Utc>,
}

pub struct DocumentAnalyzer {
    abbreviations: AbbreviationFinder,
}

impl DocumentAnalyzer {
    pub fn new() -> Result<Self, SummarizerError> {
        Ok(Self {
            abbreviations: AbbreviationFinder::new()?,
        })
    }

    pub fn analyze(&self, document_text: &str) -> DocumentAnalysis {
        DocumentAnalysis {
            highlighted_terms: highlight::extract(document_text),
            severity: severity::calculate(document_text),
            abbreviations: self.abbreviations.find(document_text),
            analyzed_at: Utc::now(),
        }
    }
}
