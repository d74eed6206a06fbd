use serde::Serialize;

use crate::keywords::{HIGH_SEVERITY_KEYWORDS, MEDIUM_SEVERITY_KEYWORDS};

const HIGH_WEIGHT: u32 = 3;
const MEDIUM_WEIGHT: u32 = 2;
const HIGH_THRESHOLD: u32 = 6;
const MEDIUM_THRESHOLD: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SeverityLevel {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Severity {
    pub level: SeverityLevel,
    pub score: u32,
    /// Matched keywords, high-severity ones first.
    pub indicators: Vec<String>,
}

pub fn calculate(text: &str) -> Severity {
    let lowered = text.to_lowercase();
    let mut score = 0;
    let mut indicators = Vec::new();

    let weighted = HIGH_SEVERITY_KEYWORDS
        .iter()
        .map(|keyword| (keyword, HIGH_WEIGHT))
        .chain(MEDIUM_SEVERITY_KEYWORDS.iter().map(|keyword| (keyword, MEDIUM_WEIGHT)));

    for (keyword, weight) in weighted {
        if lowered.contains(keyword) {
            score += weight;
            indicators.push(keyword.to_string());
        }
    }

    let level = if score >= HIGH_THRESHOLD {
        SeverityLevel::High
    } else if score >= MEDIUM_THRESHOLD {
        SeverityLevel::Medium
    } else {
        SeverityLevel::Low
    };

    Severity {
        level,
        score,
        indicators,
    }
}
