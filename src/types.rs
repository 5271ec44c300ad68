// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a symptom checklist.
//!
//! A symptom points at the conditions it may indicate. A ranking is what you
//! get back after counting how many selected symptoms point at each condition.
//! Condition names are plain strings shared between the symptom table and the
//! recommendation table; there is no separate condition entity.
//!
//! # Invariants
//!
//! - **Symptom**: `id` is unique within a dataset, `name` is non-empty, and
//!   `conditions` holds no duplicates. `Dataset::new` enforces this.
//!
//! - **RankedCondition**: `count >= 1`. A condition only appears in a ranking
//!   because at least one selected symptom listed it.

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// NEWTYPES
// =============================================================================

/// Type-safe symptom identifier.
///
/// Stable across releases: the checklist UI stores these, not positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct SymptomId(pub u32);

impl SymptomId {
    /// Get the underlying value.
    #[inline]
    pub fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for SymptomId {
    fn from(id: u32) -> Self {
        SymptomId(id)
    }
}

impl fmt::Display for SymptomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// DATA TYPES
// =============================================================================

/// A checklist entry and the conditions it may indicate.
///
/// `conditions` is ordered: that order is what breaks ties in a ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Symptom {
    pub id: SymptomId,
    pub name: String,
    pub conditions: Vec<String>,
}

impl Symptom {
    pub fn new<I, S>(id: u32, name: &str, conditions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Symptom {
            id: SymptomId(id),
            name: name.to_string(),
            conditions: conditions.into_iter().map(Into::into).collect(),
        }
    }
}

/// One row of a ranking: a condition and how many selected symptoms list it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RankedCondition {
    pub condition: String,
    pub count: u32,
}

/// Checklist row for UIs: just enough to draw a checkbox.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistEntry {
    pub id: SymptomId,
    pub name: String,
}

impl From<&Symptom> for ChecklistEntry {
    fn from(symptom: &Symptom) -> Self {
        ChecklistEntry {
            id: symptom.id,
            name: symptom.name.clone(),
        }
    }
}
