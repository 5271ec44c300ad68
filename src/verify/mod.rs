// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The verification layer: dataset validation and runtime contracts.
//!
//! Two complementary approaches to catching bugs:
//!
//! 1. **Construction-time validation** (`validate_symptoms`) that rejects a
//!    malformed symptom table before anything can rank over it. A `Dataset`
//!    that exists is a dataset that passed.
//!
//! 2. **Runtime contracts** that panic in debug builds when a ranking breaks
//!    its ordering or loses counts. Zero-cost in release, but they catch
//!    algorithmic errors when tests run.

mod types;
pub mod contracts;

pub use types::*;
