// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Checklist view state as a value.
//!
//! Rather than reading checkboxes and toggling a "hidden" class on shared
//! widgets, a UI keeps one `ViewState` and replaces it after every
//! interaction. The state says which symptoms are ticked and what, if
//! anything, the results section shows. Rendering is a function of it.

use crate::checker::SymptomChecker;
use crate::report::Assessment;
use crate::types::SymptomId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A user action on the checklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "id", rename_all = "snake_case")]
pub enum Interaction {
    /// Tick or untick one symptom.
    Toggle(SymptomId),
    /// Compute and show results for the current selection.
    Analyze,
    /// Untick everything and hide results.
    Reset,
}

/// Everything a checklist UI needs to draw itself.
///
/// `assessment` is `None` while the results section is hidden.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    selected: BTreeSet<SymptomId>,
    assessment: Option<Assessment>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> &BTreeSet<SymptomId> {
        &self.selected
    }

    pub fn is_selected(&self, id: SymptomId) -> bool {
        self.selected.contains(&id)
    }

    pub fn assessment(&self) -> Option<&Assessment> {
        self.assessment.as_ref()
    }

    pub fn results_visible(&self) -> bool {
        self.assessment.is_some()
    }

    /// The state after `interaction`.
    ///
    /// Toggling an id the dataset does not know leaves the state unchanged.
    /// Toggling does not touch results already on screen; only Analyze and
    /// Reset do.
    #[must_use]
    pub fn apply(self, checker: &SymptomChecker, interaction: Interaction) -> ViewState {
        match interaction {
            Interaction::Toggle(id) => {
                if !checker.dataset().contains(id) {
                    return self;
                }
                let mut selected = self.selected;
                if !selected.remove(&id) {
                    selected.insert(id);
                }
                ViewState {
                    selected,
                    assessment: self.assessment,
                }
            }
            Interaction::Analyze => {
                let assessment = checker.assess(self.selected.iter().copied());
                ViewState {
                    selected: self.selected,
                    assessment: Some(assessment),
                }
            }
            Interaction::Reset => ViewState::new(),
        }
    }
}
