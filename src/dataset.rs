// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The symptom table and the recommendation table.
//!
//! The built-in dataset is embedded constant data: twelve symptoms, each with
//! four candidate conditions, and advice for nine of those conditions. The
//! recommendation table is partial on purpose; callers fall back to generic
//! advice when a condition has no entry.
//!
//! A dataset can also be loaded from JSON (feature `serde_json`):
//!
//! ```text
//! {
//!   "symptoms": [{ "id": 1, "name": "Fever", "conditions": ["Flu"] }],
//!   "recommendations": { "Flu": "Rest and hydrate." }
//! }
//! ```
//!
//! Every construction path except `builtin()` runs `validate_symptoms`.

use crate::types::{ChecklistEntry, Symptom, SymptomId};
use crate::verify::{validate_symptoms, DatasetError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::OnceLock;

#[cfg(feature = "serde_json")]
use std::path::Path;

/// Symptom table plus recommendation table. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dataset {
    symptoms: Vec<Symptom>,
    recommendations: BTreeMap<String, String>,
}

/// Wire shape of a dataset document, before validation.
#[derive(Deserialize)]
struct RawDataset {
    symptoms: Vec<Symptom>,
    #[serde(default)]
    recommendations: BTreeMap<String, String>,
}

static BUILTIN: OnceLock<Dataset> = OnceLock::new();

impl Dataset {
    /// Build a dataset, rejecting a malformed symptom table.
    pub fn new(
        symptoms: Vec<Symptom>,
        recommendations: BTreeMap<String, String>,
    ) -> Result<Self, DatasetError> {
        if let Err(err) = validate_symptoms(&symptoms) {
            tracing::warn!(error = %err, "rejecting symptom table");
            return Err(err);
        }
        Ok(Dataset {
            symptoms,
            recommendations,
        })
    }

    /// The embedded dataset. Initialized on first use, shared read-only after.
    pub fn builtin() -> &'static Dataset {
        BUILTIN.get_or_init(|| Dataset {
            symptoms: builtin_symptoms(),
            recommendations: builtin_recommendations(),
        })
    }

    /// Decode and validate a JSON dataset document.
    #[cfg(feature = "serde_json")]
    pub fn from_json(json: &str) -> Result<Self, DatasetError> {
        let raw: RawDataset =
            serde_json::from_str(json).map_err(|e| DatasetError::Parse(e.to_string()))?;
        Dataset::new(raw.symptoms, raw.recommendations)
    }

    /// Read a JSON dataset document from disk.
    #[cfg(feature = "serde_json")]
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| DatasetError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let dataset = Dataset::from_json(&json)?;
        tracing::debug!(
            path = %path.display(),
            symptoms = dataset.symptoms.len(),
            recommendations = dataset.recommendations.len(),
            "loaded dataset"
        );
        Ok(dataset)
    }

    /// Symptoms in table order. Table order is what ranking ties fall back to.
    pub fn symptoms(&self) -> &[Symptom] {
        &self.symptoms
    }

    pub fn symptom(&self, id: SymptomId) -> Option<&Symptom> {
        self.symptoms.iter().find(|s| s.id == id)
    }

    pub fn contains(&self, id: SymptomId) -> bool {
        self.symptom(id).is_some()
    }

    /// Advice text for a condition, if the table has any.
    pub fn recommendation(&self, condition: &str) -> Option<&str> {
        self.recommendations.get(condition).map(String::as_str)
    }

    pub fn recommendations(&self) -> &BTreeMap<String, String> {
        &self.recommendations
    }

    /// Checkbox rows, in table order.
    pub fn checklist(&self) -> Vec<ChecklistEntry> {
        self.symptoms.iter().map(ChecklistEntry::from).collect()
    }
}

impl<'de> Deserialize<'de> for Dataset {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = RawDataset::deserialize(deserializer)?;
        Dataset::new(raw.symptoms, raw.recommendations).map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// EMBEDDED DATA
// =============================================================================

const SYMPTOM_TABLE: &[(u32, &str, [&str; 4])] = &[
    (1, "Fever", ["Flu", "Common Cold", "COVID-19", "Pneumonia"]),
    (2, "Cough", ["Common Cold", "Flu", "COVID-19", "Bronchitis"]),
    (3, "Headache", ["Migraine", "Tension Headache", "Dehydration", "Sinusitis"]),
    (4, "Sore Throat", ["Common Cold", "Strep Throat", "COVID-19", "Tonsillitis"]),
    (5, "Runny Nose", ["Common Cold", "Allergies", "Sinusitis", "Flu"]),
    (6, "Shortness of Breath", ["Asthma", "COVID-19", "Pneumonia", "Anxiety"]),
    (7, "Chest Pain", ["Angina", "Heart Attack", "Acid Reflux", "Pneumonia"]),
    (8, "Nausea", ["Food Poisoning", "Migraine", "Stomach Flu", "Pregnancy"]),
    (9, "Dizziness", ["Dehydration", "Inner Ear Problem", "Low Blood Pressure", "Anemia"]),
    (10, "Fatigue", ["Anemia", "Depression", "Sleep Apnea", "Hypothyroidism"]),
    (11, "Muscle Aches", ["Flu", "Fibromyalgia", "Lyme Disease", "Autoimmune Disorder"]),
    (12, "Rash", ["Allergic Reaction", "Eczema", "Measles", "Chickenpox"]),
];

const RECOMMENDATION_TABLE: &[(&str, &str)] = &[
    (
        "Common Cold",
        "Rest, drink plenty of fluids, and consider over-the-counter cold remedies.",
    ),
    (
        "Flu",
        "Rest, hydrate, and consider antiviral medications if caught early.",
    ),
    (
        "COVID-19",
        "Isolate yourself, rest, monitor symptoms, and seek medical attention if breathing difficulties occur.",
    ),
    (
        "Allergies",
        "Avoid allergens, consider antihistamines, and use nasal sprays as needed.",
    ),
    (
        "Migraine",
        "Rest in a dark room, stay hydrated, and consider pain relievers or prescription medications.",
    ),
    (
        "Strep Throat",
        "See a doctor for antibiotics, rest, and drink warm liquids to soothe throat.",
    ),
    (
        "Asthma",
        "Use prescribed inhalers, avoid triggers, and seek emergency care if severe breathing difficulties occur.",
    ),
    (
        "Anxiety",
        "Practice relaxation techniques, consider therapy, and in some cases medication may be helpful.",
    ),
    (
        "Food Poisoning",
        "Stay hydrated, eat bland foods, and rest. Seek medical care if symptoms are severe.",
    ),
];

fn builtin_symptoms() -> Vec<Symptom> {
    SYMPTOM_TABLE
        .iter()
        .map(|(id, name, conditions)| Symptom::new(*id, name, conditions.iter().copied()))
        .collect()
}

fn builtin_recommendations() -> BTreeMap<String, String> {
    RECOMMENDATION_TABLE
        .iter()
        .map(|(condition, advice)| (condition.to_string(), advice.to_string()))
        .collect()
}
