// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Dataset invariants and the error type for violating them.
//!
//! The built-in tables are fine by construction. A table loaded from JSON is
//! not, so everything that can build a `Dataset` goes through
//! `validate_symptoms` first.
//!
//! | Check               | Why ranking depends on it                       |
//! |---------------------|-------------------------------------------------|
//! | unique ids          | resolution would count a symptom twice          |
//! | non-empty names     | the checklist would render a blank checkbox     |
//! | non-empty condition | a blank condition would rank and display        |
//! | no repeated condition in a symptom | one symptom would count twice    |

use crate::types::Symptom;
use std::collections::HashSet;
use thiserror::Error;

/// Why a dataset was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DatasetError {
    /// Two symptoms share an id.
    #[error("duplicate symptom id {id}")]
    DuplicateId { id: u32 },
    /// A symptom has a blank name.
    #[error("symptom {id} has an empty name")]
    EmptyName { id: u32 },
    /// A symptom lists a blank condition.
    #[error("symptom {id} lists an empty condition at position {position}")]
    EmptyCondition { id: u32, position: usize },
    /// A symptom lists the same condition twice.
    #[error("symptom {id} lists condition '{condition}' more than once")]
    DuplicateCondition { id: u32, condition: String },
    /// The dataset document could not be decoded.
    #[error("invalid dataset document: {0}")]
    Parse(String),
    /// The dataset file could not be read.
    #[error("failed to read dataset {path}: {message}")]
    Io { path: String, message: String },
}

/// Check every symptom-table invariant, stopping at the first violation.
///
/// Symptoms are checked in table order, so the reported error is stable for a
/// given input.
pub fn validate_symptoms(symptoms: &[Symptom]) -> Result<(), DatasetError> {
    let mut seen_ids = HashSet::with_capacity(symptoms.len());

    for symptom in symptoms {
        let id = symptom.id.get();

        if !seen_ids.insert(id) {
            return Err(DatasetError::DuplicateId { id });
        }
        if symptom.name.trim().is_empty() {
            return Err(DatasetError::EmptyName { id });
        }

        let mut seen_conditions = HashSet::with_capacity(symptom.conditions.len());
        for (position, condition) in symptom.conditions.iter().enumerate() {
            if condition.trim().is_empty() {
                return Err(DatasetError::EmptyCondition { id, position });
            }
            if !seen_conditions.insert(condition.as_str()) {
                return Err(DatasetError::DuplicateCondition {
                    id,
                    condition: condition.clone(),
                });
            }
        }
    }

    Ok(())
}
