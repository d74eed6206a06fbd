//! Keyword tables for local highlighting and severity scoring.

pub const DISEASE_KEYWORDS: [&str; 32] = [
    "diabetes",
    "hypertension",
    "cancer",
    "stroke",
    "infarction",
    "pneumonia",
    "asthma",
    "copd",
    "heart failure",
    "arrhythmia",
    "anemia",
    "sepsis",
    "tuberculosis",
    "hepatitis",
    "cirrhosis",
    "nephritis",
    "alzheimer",
    "parkinson",
    "epilepsy",
    "seizure",
    "dementia",
    "nstemi",
    "stemi",
    "myocardial infarction",
    "coronary artery disease",
    "cad",
    "ckd",
    "chronic kidney disease",
    "malignancy",
    "carcinoma",
    "tumor",
    "lesion",
];

pub const MEDICATION_KEYWORDS: [&str; 18] = [
    "aspirin",
    "metformin",
    "lisinopril",
    "atorvastatin",
    "metoprolol",
    "amlodipine",
    "clopidogrel",
    "warfarin",
    "heparin",
    "insulin",
    "omeprazole",
    "gabapentin",
    "levetiracetam",
    "prednisone",
    "acetaminophen",
    "ibuprofen",
    "morphine",
    "furosemide",
];

pub const TEST_KEYWORDS: [&str; 16] = [
    "ct scan",
    "mri",
    "x-ray",
    "ecg",
    "ekg",
    "eeg",
    "ultrasound",
    "biopsy",
    "blood test",
    "cbc",
    "bmp",
    "cmp",
    "lipid panel",
    "hba1c",
    "troponin",
    "bnp",
];

/// Each match adds 3 to the severity score.
pub const HIGH_SEVERITY_KEYWORDS: [&str; 6] = [
    "icu",
    "critical",
    "emergency",
    "arrest",
    "respiratory failure",
    "intubated",
];

/// Each match adds 2 to the severity score.
pub const MEDIUM_SEVERITY_KEYWORDS: [&str; 3] = ["moderate", "abnormal", "elevated"];

pub const ABBREVIATIONS: [(&str, &str); 22] = [
    ("BP", "Blood Pressure"),
    ("HR", "Heart Rate"),
    ("RR", "Respiratory Rate"),
    ("ECG", "Electrocardiogram"),
    ("EKG", "Electrocardiogram"),
    ("EEG", "Electroencephalogram"),
    ("CT", "Computed Tomography"),
    ("MRI", "Magnetic Resonance Imaging"),
    ("CBC", "Complete Blood Count"),
    ("BMP", "Basic Metabolic Panel"),
    ("CMP", "Comprehensive Metabolic Panel"),
    ("BUN", "Blood Urea Nitrogen"),
    ("eGFR", "Estimated Glomerular Filtration Rate"),
    ("HbA1c", "Hemoglobin A1C"),
    ("TIA", "Transient Ischemic Attack"),
    ("CVA", "Cerebrovascular Accident"),
    ("MI", "Myocardial Infarction"),
    ("COPD", "Chronic Obstructive Pulmonary Disease"),
    ("CKD", "Chronic Kidney Disease"),
    ("CAD", "Coronary Artery Disease"),
    ("ICU", "Intensive Care Unit"),
    ("ED", "Emergency Department"),
];
