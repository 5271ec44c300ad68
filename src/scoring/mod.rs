// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how conditions get their numbers.
//!
//! A condition's score is the number of selected symptoms that list it.
//! Nothing else feeds in. Ties are broken by where the condition first showed
//! up while walking the selected symptoms in table order, so the same
//! selection always produces the same ranking.

mod core;
pub mod ranking;

pub use self::core::*;
pub use ranking::{compare_ranked, rank, resolve};
