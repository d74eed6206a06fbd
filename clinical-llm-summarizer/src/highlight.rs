use regex::{Regex, RegexBuilder};
use serde::Serialize;

use crate::keywords::{ABBREVIATIONS, DISEASE_KEYWORDS, MEDICATION_KEYWORDS, TEST_KEYWORDS};

/// Keywords found in a document, lowercase, in table order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HighlightedTerms {
    pub diseases: Vec<String>,
    pub medications: Vec<String>,
    pub tests: Vec<String>,
}

/// Substring lookup of every keyword table against the lowercased text.
pub fn extract(text: &str) -> HighlightedTerms {
    let lowered = text.to_lowercase();
    let found = |keywords: &[&str]| -> Vec<String> {
        keywords
            .iter()
            .filter(|keyword| lowered.contains(*keyword))
            .map(|keyword| keyword.to_string())
            .collect()
    };

    HighlightedTerms {
        diseases: found(&DISEASE_KEYWORDS),
        medications: found(&MEDICATION_KEYWORDS),
        tests: found(&TEST_KEYWORDS),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AbbreviationMatch {
    pub abbr: String,
    pub full: String,
}

/// Case-insensitive whole-word lookup of the abbreviation table.
pub struct AbbreviationFinder {
    patterns: Vec<(&'static str, &'static str, Regex)>,
}

impl AbbreviationFinder {
    pub fn new() -> Result<Self, regex::Error> {
        let patterns = ABBREVIATIONS
            .iter()
            .map(|&(abbr, full)| {
                let pattern = RegexBuilder::new(&format!(r"\b{}\b", regex::escape(abbr)))
                    .case_insensitive(true)
                    .build()?;
                Ok((abbr, full, pattern))
            })
            .collect::<Result<Vec<_>, regex::Error>>()?;
        Ok(Self { patterns })
    }

    pub fn find(&self, text: &str) -> Vec<AbbreviationMatch> {
        self.patterns
            .iter()
            .filter(|(_, _, pattern)| pattern.is_match(text))
            .map(|(abbr, full, _)| AbbreviationMatch {
                abbr: abbr.to_string(),
                full: full.to_string(),
            })
            .collect()
    }
}
