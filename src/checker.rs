// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The entry point most callers want: a dataset bundled with the operations
//! that run over it.

use crate::dataset::Dataset;
use crate::report::{self, Assessment};
use crate::scoring;
use crate::types::{ChecklistEntry, RankedCondition, SymptomId};

/// Ranks and assesses selections against one dataset.
///
/// Every operation is a pure function of the dataset and its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymptomChecker {
    dataset: Dataset,
}

impl SymptomChecker {
    pub fn new(dataset: Dataset) -> Self {
        SymptomChecker { dataset }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Checkbox rows, in table order.
    pub fn checklist(&self) -> Vec<ChecklistEntry> {
        self.dataset.checklist()
    }

    /// Conditions ordered by how many selected symptoms list them.
    pub fn rank<I>(&self, selected: I) -> Vec<RankedCondition>
    where
        I: IntoIterator<Item = SymptomId>,
    {
        scoring::rank(&self.dataset, selected)
    }

    /// What the user sees after pressing Analyze.
    pub fn assess<I>(&self, selected: I) -> Assessment
    where
        I: IntoIterator<Item = SymptomId>,
    {
        report::assess(&self.dataset, selected)
    }
}

impl Default for SymptomChecker {
    fn default() -> Self {
        SymptomChecker::new(Dataset::builtin().clone())
    }
}
