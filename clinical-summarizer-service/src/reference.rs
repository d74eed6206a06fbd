//! Built-in clinical reference tables.

/// Abbreviation codes and their expansions, in lookup order.
pub const ABBREVIATIONS: [(&str, &str); 11] = [
    ("TIA", "Transient Ischemic Attack"),
    ("CAD", "Coronary Artery Disease"),
    ("HTN", "Hypertension"),
    ("DM", "Diabetes Mellitus"),
    ("MI", "Myocardial Infarction"),
    ("NSTEMI", "Non-ST Elevation Myocardial Infarction"),
    ("STEMI", "ST Elevation Myocardial Infarction"),
    ("CKD", "Chronic Kidney Disease"),
    ("COPD", "Chronic Obstructive Pulmonary Disease"),
    ("CHF", "Congestive Heart Failure"),
    ("CVA", "Cerebrovascular Accident"),
];

/// Recognised medication names, lowercase.
pub const MEDICATIONS: [&str; 6] = [
    "aspirin",
    "atorvastatin",
    "metformin",
    "insulin",
    "clopidogrel",
    "heparin",
];
