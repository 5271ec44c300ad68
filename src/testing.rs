// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::dataset::Dataset;
use crate::types::{Symptom, SymptomId};
use crate::verify::DatasetError;
use std::collections::BTreeMap;

/// Create a symptom from borrowed strings.
pub fn make_symptom(id: u32, name: &str, conditions: &[&str]) -> Symptom {
    Symptom::new(id, name, conditions.iter().copied())
}

/// Create a dataset from `(id, name, conditions)` rows and `(condition, advice)` pairs.
pub fn make_dataset(
    rows: &[(u32, &str, &[&str])],
    advice: &[(&str, &str)],
) -> Result<Dataset, DatasetError> {
    let symptoms = rows
        .iter()
        .map(|(id, name, conditions)| make_symptom(*id, name, conditions))
        .collect();
    let recommendations: BTreeMap<String, String> = advice
        .iter()
        .map(|(condition, text)| (condition.to_string(), text.to_string()))
        .collect();
    Dataset::new(symptoms, recommendations)
}

/// Wrap raw ids.
pub fn ids(raw: &[u32]) -> Vec<SymptomId> {
    raw.iter().copied().map(SymptomId).collect()
}

/// Every id in the built-in dataset.
pub fn builtin_ids() -> Vec<SymptomId> {
    Dataset::builtin().symptoms().iter().map(|s| s.id).collect()
}
