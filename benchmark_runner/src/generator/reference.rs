//!
//! The reference vocabularies the generator samples from.
//!

/// The primary conditions.
pub const CONDITIONS: [&str; 15] = [
    "Hypertension",
    "Type 2 Diabetes",
    "Asthma",
    "COPD",
    "Heart Disease",
    "Arthritis",
    "Depression",
    "Anxiety",
    "Obesity",
    "Chronic Pain",
    "Migraine",
    "Allergies",
    "Anemia",
    "Thyroid Disorder",
    "Sleep Apnea",
];

/// The hospital departments.
pub const DEPARTMENTS: [&str; 15] = [
    "Emergency",
    "Cardiology",
    "Orthopedics",
    "Neurology",
    "Oncology",
    "Pediatrics",
    "Psychiatry",
    "Radiology",
    "Surgery",
    "Internal Medicine",
    "Dermatology",
    "Gastroenterology",
    "Pulmonology",
    "Endocrinology",
    "Nephrology",
];

/// The medical event types.
pub const EVENT_TYPES: [&str; 10] = [
    "Consultation",
    "Lab Test",
    "Imaging",
    "Procedure",
    "Surgery",
    "Follow-up",
    "Emergency Visit",
    "Therapy Session",
    "Vaccination",
    "Screening",
];

/// The event severities.
pub const SEVERITIES: [&str; 4] = ["Low", "Medium", "High", "Critical"];

/// The prescribed medications.
pub const MEDICATIONS: [&str; 25] = [
    "Lisinopril",
    "Metformin",
    "Amlodipine",
    "Metoprolol",
    "Omeprazole",
    "Losartan",
    "Gabapentin",
    "Hydrochlorothiazide",
    "Sertraline",
    "Simvastatin",
    "Montelukast",
    "Escitalopram",
    "Rosuvastatin",
    "Bupropion",
    "Pantoprazole",
    "Duloxetine",
    "Pravastatin",
    "Clopidogrel",
    "Carvedilol",
    "Trazodone",
    "Fluticasone",
    "Albuterol",
    "Atorvastatin",
    "Levothyroxine",
    "Prednisone",
];

/// The medication dosages.
pub const DOSAGES: [&str; 8] = [
    "5mg", "10mg", "20mg", "25mg", "50mg", "100mg", "250mg", "500mg",
];

/// The medication frequencies.
pub const FREQUENCIES: [&str; 5] = [
    "Once daily",
    "Twice daily",
    "Three times daily",
    "As needed",
    "Weekly",
];

/// The patient genders.
pub const GENDERS: [&str; 3] = ["Male", "Female", "Other"];

/// The blood types.
pub const BLOOD_TYPES: [&str; 8] = ["A+", "A-", "B+", "B-", "AB+", "AB-", "O+", "O-"];

/// The insurance types.
pub const INSURANCE_TYPES: [&str; 5] = ["Private", "Medicare", "Medicaid", "Self-Pay", "Military"];
