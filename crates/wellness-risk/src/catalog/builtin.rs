//! Reference catalog data shipped with the engine.

use wellness_types::{CatalogSymptom, ConditionRecord, RiskTier};

/// Common symptoms offered for selection, as `(name, category)`.
const COMMON_SYMPTOMS: &[(&str, &str)] = &[
    ("Fever", "General"),
    ("Headache", "Neurological"),
    ("Cough", "Respiratory"),
    ("Fatigue", "General"),
    ("Nausea", "Digestive"),
    ("Dizziness", "Neurological"),
    ("Shortness of breath", "Respiratory"),
    ("Muscle ache", "Musculoskeletal"),
    ("Sore throat", "Respiratory"),
    ("Loss of appetite", "Digestive"),
    ("Joint pain", "Musculoskeletal"),
    ("Chest pain", "Cardiovascular"),
    ("Runny nose", "Respiratory"),
    ("Chills", "General"),
    ("Sweating", "General"),
    ("Skin rash", "Dermatological"),
];

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Returns the builtin symptom entries in catalog order.
pub(crate) fn symptoms() -> Vec<CatalogSymptom> {
    COMMON_SYMPTOMS
        .iter()
        .map(|(name, category)| CatalogSymptom::new(*name, *category))
        .collect()
}

/// Returns the builtin condition records in catalog order.
pub(crate) fn conditions() -> Vec<ConditionRecord> {
    vec![
        ConditionRecord {
            condition: "Common Cold".to_string(),
            base_probability: 0.8,
            risk_tier: RiskTier::Low,
            risk_factors: strings(&["Seasonal changes", "Weakened immune system"]),
            recommended_tests: strings(&["Temperature monitoring", "Throat examination"]),
            preventive_measures: strings(&["Rest", "Hydration", "Vitamin C intake"]),
            dietary_recommendations: strings(&[
                "Chicken soup",
                "Citrus fruits",
                "Honey and lemon tea",
                "Ginger",
            ]),
            lifestyle_changes: strings(&[
                "Get adequate sleep",
                "Stay warm",
                "Avoid strenuous activities",
            ]),
            urgency_level: "Low".to_string(),
            time_to_seek_care: "Within 3-5 days if symptoms persist".to_string(),
        },
        ConditionRecord {
            condition: "Seasonal Allergies".to_string(),
            base_probability: 0.6,
            risk_tier: RiskTier::Moderate,
            risk_factors: strings(&["Pollen count", "Environmental allergens"]),
            recommended_tests: strings(&["Allergy testing", "Nasal examination"]),
            preventive_measures: strings(&["Antihistamines", "Air purification", "Avoid triggers"]),
            dietary_recommendations: strings(&[
                "Anti-inflammatory foods",
                "Local honey",
                "Foods rich in quercetin",
            ]),
            lifestyle_changes: strings(&[
                "Use air purifiers",
                "Keep windows closed during high pollen",
                "Shower before bed",
            ]),
            urgency_level: "Low".to_string(),
            time_to_seek_care: "When symptoms affect daily activities".to_string(),
        },
    ]
}
