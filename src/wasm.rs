// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! WebAssembly bindings for the symptom checker.
//!
//! Provides one WASM-accessible type, `SymptomCheckerWasm`, with two ways in:
//! - stateless: `rank(ids)` / `assess(ids)` for pages that track checkboxes themselves
//! - stateful: `toggle(id)` / `analyze()` / `reset()` over an internal `ViewState`
//!
//! All structured values cross the boundary through `serde-wasm-bindgen`.
//! The page owns the DOM; nothing here touches it.

use crate::checker::SymptomChecker;
use crate::dataset::Dataset;
use crate::types::SymptomId;
use crate::view::{Interaction, ViewState};
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

fn to_ids(ids: Vec<u32>) -> impl Iterator<Item = SymptomId> {
    ids.into_iter().map(SymptomId)
}

fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, JsValue> {
    to_value(value).map_err(|e| e.to_string().into())
}

/// WASM-accessible checker plus the checklist state of one page.
#[wasm_bindgen]
pub struct SymptomCheckerWasm {
    checker: SymptomChecker,
    state: ViewState,
}

#[wasm_bindgen]
impl SymptomCheckerWasm {
    /// Create a checker over the built-in dataset.
    #[wasm_bindgen(constructor)]
    pub fn new() -> SymptomCheckerWasm {
        SymptomCheckerWasm {
            checker: SymptomChecker::default(),
            state: ViewState::new(),
        }
    }

    /// Create a checker over a custom dataset object
    /// `{ symptoms: [{id, name, conditions}], recommendations: {...} }`.
    ///
    /// The dataset is validated; a malformed one is rejected with a message.
    #[wasm_bindgen(js_name = fromDataset)]
    pub fn from_dataset(dataset: JsValue) -> Result<SymptomCheckerWasm, JsValue> {
        let dataset: Dataset = from_value(dataset).map_err(|e| e.to_string())?;
        Ok(Self::with_dataset(dataset))
    }

    /// Create a checker over a JSON dataset document.
    #[cfg(feature = "serde_json")]
    #[wasm_bindgen(js_name = fromJson)]
    pub fn from_json(json: &str) -> Result<SymptomCheckerWasm, JsValue> {
        Ok(Self::load_json(json)?)
    }

    /// Checklist rows `[{id, name}]`, in table order.
    #[wasm_bindgen]
    pub fn symptoms(&self) -> Result<JsValue, JsValue> {
        to_js(&self.checker.checklist())
    }

    /// Ranked conditions `[{condition, count}]` for a selection.
    #[wasm_bindgen]
    pub fn rank(&self, ids: Vec<u32>) -> Result<JsValue, JsValue> {
        to_js(&self.checker.rank(to_ids(ids)))
    }

    /// Tagged assessment object for a selection.
    #[wasm_bindgen]
    pub fn assess(&self, ids: Vec<u32>) -> Result<JsValue, JsValue> {
        to_js(&self.checker.assess(to_ids(ids)))
    }

    /// Assessment for a selection as display lines joined by newlines.
    #[wasm_bindgen(js_name = assessText)]
    pub fn assess_text(&self, ids: Vec<u32>) -> String {
        self.checker.assess(to_ids(ids)).to_string()
    }

    // =========================================================================
    // STATEFUL CHECKLIST API
    // =========================================================================

    /// Tick or untick a symptom. Returns whether it is ticked afterwards.
    #[wasm_bindgen]
    pub fn toggle(&mut self, id: u32) -> bool {
        self.apply(Interaction::Toggle(SymptomId(id)));
        self.state.is_selected(SymptomId(id))
    }

    /// Assess the ticked symptoms and return the assessment object.
    #[wasm_bindgen]
    pub fn analyze(&mut self) -> Result<JsValue, JsValue> {
        self.apply(Interaction::Analyze);
        to_js(&self.state.assessment())
    }

    /// Untick everything and hide results.
    #[wasm_bindgen]
    pub fn reset(&mut self) {
        self.apply(Interaction::Reset);
    }

    /// Currently ticked ids, ascending.
    #[wasm_bindgen]
    pub fn selected(&self) -> Vec<u32> {
        self.state.selected().iter().map(|id| id.get()).collect()
    }

    #[wasm_bindgen(js_name = resultsVisible)]
    pub fn results_visible(&self) -> bool {
        self.state.results_visible()
    }

    /// Full view state `{selected, assessment}`.
    #[wasm_bindgen]
    pub fn state(&self) -> Result<JsValue, JsValue> {
        to_js(&self.state)
    }
}

impl SymptomCheckerWasm {
    fn with_dataset(dataset: Dataset) -> Self {
        SymptomCheckerWasm {
            checker: SymptomChecker::new(dataset),
            state: ViewState::new(),
        }
    }

    /// Validated JSON load; the error is the message handed to JavaScript.
    #[cfg(feature = "serde_json")]
    fn load_json(json: &str) -> Result<Self, String> {
        Dataset::from_json(json)
            .map(Self::with_dataset)
            .map_err(|e| e.to_string())
    }

    fn apply(&mut self, interaction: Interaction) {
        let state = std::mem::take(&mut self.state);
        self.state = state.apply(&self.checker, interaction);
    }
}

impl Default for SymptomCheckerWasm {
    fn default() -> Self {
        Self::new()
    }
}
