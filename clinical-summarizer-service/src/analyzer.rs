use regex::{Regex, RegexBuilder};
use std::collections::BTreeMap;
use tracing::debug;

use crate::{
    error::AnalyzerError,
    models::AnalysisResult,
    reference::{ABBREVIATIONS, MEDICATIONS},
};

pub const FALLBACK_SUMMARY: &str = "Unable to extract meaningful clinical information.";

/// Reference tables the analyzer matches against.
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// `(code, expansion)` pairs, matched in order.
    pub abbreviations: Vec<(String, String)>,
    /// Lowercase medication names, matched in order.
    pub medications: Vec<String>,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            abbreviations: ABBREVIATIONS
                .iter()
                .map(|(code, full)| (code.to_string(), full.to_string()))
                .collect(),
            medications: MEDICATIONS.iter().map(|m| m.to_string()).collect(),
        }
    }
}

struct AbbreviationPattern {
    code: String,
    expansion: String,
    pattern: Regex,
}

struct MedicationPattern {
    display_name: String,
    pattern: Regex,
}

/// Keyword analyzer with one pre-compiled whole-word pattern per table entry.
pub struct Analyzer {
    abbreviations: Vec<AbbreviationPattern>,
    medications: Vec<MedicationPattern>,
}

impl Analyzer {
    pub fn new(config: AnalyzerConfig) -> Result<Self, AnalyzerError> {
        let abbreviations = config
            .abbreviations
            .into_iter()
            .map(|(code, expansion)| {
                Ok(AbbreviationPattern {
                    pattern: whole_word_pattern(&code)?,
                    code,
                    expansion,
                })
            })
            .collect::<Result<Vec<_>, AnalyzerError>>()?;

        let medications = config
            .medications
            .into_iter()
            .map(|name| {
                Ok(MedicationPattern {
                    pattern: whole_word_pattern(&name)?,
                    display_name: capitalize(&name),
                })
            })
            .collect::<Result<Vec<_>, AnalyzerError>>()?;

        Ok(Self {
            abbreviations,
            medications,
        })
    }

    pub fn analyze(&self, text: &str) -> AnalysisResult {
        let mut expanded_abbreviations = BTreeMap::new();
        let mut detected_diseases = Vec::new();

        for entry in &self.abbreviations {
            if entry.pattern.is_match(text) {
                expanded_abbreviations.insert(entry.code.clone(), entry.expansion.clone());
                detected_diseases.push(entry.expansion.clone());
            }
        }

        let medications: Vec<String> = self
            .medications
            .iter()
            .filter(|entry| entry.pattern.is_match(text))
            .map(|entry| entry.display_name.clone())
            .collect();

        debug!(
            diseases = detected_diseases.len(),
            medications = medications.len(),
            "Document analyzed"
        );

        AnalysisResult {
            summary: build_summary(&detected_diseases, &medications),
            detected_diseases,
            medications,
            expanded_abbreviations,
        }
    }

    /// The complete abbreviation table as a code to expansion map.
    pub fn abbreviation_reference(&self) -> BTreeMap<String, String> {
        self.abbreviations
            .iter()
            .map(|entry| (entry.code.clone(), entry.expansion.clone()))
            .collect()
    }
}

fn whole_word_pattern(term: &str) -> Result<Regex, AnalyzerError> {
    RegexBuilder::new(&format!(r"\b{}\b", regex::escape(term)))
        .case_insensitive(true)
        .build()
        .map_err(|source| AnalyzerError::InvalidPattern {
            term: term.to_string(),
            source,
        })
}

fn build_summary(diseases: &[String], medications: &[String]) -> String {
    if diseases.is_empty() && medications.is_empty() {
        return FALLBACK_SUMMARY.to_string();
    }
    format!(
        "Patient with {}. Medications include {}.",
        diseases.join(", "),
        medications.join(", ")
    )
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
