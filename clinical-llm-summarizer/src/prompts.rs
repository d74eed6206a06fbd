pub const SUMMARY_PREAMBLE: &str =
    "You are an expert medical document analyzer. Respond ONLY with valid JSON.";

pub const QUESTION_PREAMBLE: &str =
    "Answer ONLY from the document. If not found, say not available.";

/// Fields the model is asked to return.
pub const SUMMARY_FIELDS: [&str; 8] = [
    "patient_name",
    "age",
    "gender",
    "diagnosis",
    "symptoms",
    "medications",
    "test_results",
    "summary",
];

pub const SAMPLE_DOCUMENT: &str = "
    Patient Name: Ramesh Kumar
    Age: 62
    Gender: Male
    Diagnosis: Transient Ischemic Attack (TIA)
    Symptoms: Sudden weakness, slurred speech
    Medications: Aspirin, Atorvastatin
    CT Scan: No hemorrhage detected
";

pub fn summary_prompt(document_text: &str) -> String {
    let fields: String = SUMMARY_FIELDS
        .iter()
        .map(|field| format!("- {}\n", field))
        .collect();

    format!(
        "\nAnalyze the following clinical document and return JSON with:\n{}\nClinical Document:\n{}\n",
        fields, document_text
    )
}

pub fn question_prompt(document_text: &str, question: &str) -> String {
    format!("Document:\n{}\n\nQuestion:{}", document_text, question)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_prompt_lists_every_field_before_document() {
        let prompt = summary_prompt("Dx: CVA");
        let document_at = prompt.find("Clinical Document:\nDx: CVA").unwrap();

        for field in SUMMARY_FIELDS {
            let field_at = prompt.find(&format!("- {}\n", field)).unwrap();
            assert!(field_at < document_at, "{} listed after document", field);
        }
    }

    #[test]
    fn test_question_prompt_layout() {
        assert_eq!(
            question_prompt("Age: 62", "How old?"),
            "Document:\nAge: 62\n\nQuestion:How old?"
        );
    }
}
