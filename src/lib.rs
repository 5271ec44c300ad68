// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Symptom checklist that ranks candidate conditions by symptom overlap.
//!
//! Pick some symptoms; every condition those symptoms list gets one point per
//! symptom that lists it. Conditions come back ordered by points, ties broken
//! by where each condition first appeared in the symptom table. The top three
//! are shown with a match percentage and the top one gets advice.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐
//! │  dataset.rs │────▶│  scoring/    │────▶│  report.rs  │
//! │ (symptoms,  │     │ (resolve,    │     │ (top three, │
//! │  advice)    │     │  tally, rank)│     │  advice)    │
//! └─────────────┘     └──────────────┘     └─────────────┘
//!        │                   │                    │
//!        ▼                   ▼                    ▼
//! ┌─────────────────────────────────────────────────────┐
//! │                     verify/                          │
//! │  (validate_symptoms, DatasetError, debug contracts) │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! `checker.rs` bundles a dataset with these operations, `view.rs` holds the
//! checklist state a UI redraws from, and `wasm.rs` (feature `wasm`) exposes
//! both to the browser.
//!
//! # Usage
//!
//! ```
//! use symcheck::{SymptomChecker, SymptomId};
//!
//! let checker = SymptomChecker::default();
//! let ranking = checker.rank([SymptomId(1), SymptomId(2)]);
//!
//! assert_eq!(ranking[0].condition, "Flu");
//! assert_eq!(ranking[0].count, 2);
//! ```

// Module declarations
mod checker;
mod dataset;
pub mod report;
pub mod scoring;
pub mod testing;
mod types;
pub mod verify;
pub mod view;

#[cfg(feature = "wasm")]
mod wasm;

// Re-exports for public API
pub use checker::SymptomChecker;
pub use dataset::Dataset;
pub use report::{assess, Assessment, DisplayMatch, MatchReport, Recommendation};
pub use scoring::{match_percentage, rank, resolve, MAX_MATCH_PERCENT, TOP_N};
pub use types::{ChecklistEntry, RankedCondition, Symptom, SymptomId};
pub use verify::DatasetError;
pub use view::{Interaction, ViewState};

#[cfg(feature = "wasm")]
pub use wasm::SymptomCheckerWasm;
