// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for ranking arbitrary selections of the embedded table.
//!
//! Any list of ids, known or not, repeated or not, must rank without panicking.
//! Debug builds also run the ranking contracts on every call.

#![no_main]

use libfuzzer_sys::fuzz_target;
use symcheck::{assess, rank, Assessment, Dataset, SymptomId};

fuzz_target!(|raw: Vec<u32>| {
    let dataset = Dataset::builtin();
    let ids: Vec<SymptomId> = raw.iter().copied().map(SymptomId).collect();

    let ranking = rank(dataset, ids.iter().copied());
    let total: u32 = ranking.iter().map(|r| r.count).sum();
    let expected: usize = dataset
        .symptoms()
        .iter()
        .filter(|s| ids.contains(&s.id))
        .map(|s| s.conditions.len())
        .sum();
    assert_eq!(total as usize, expected, "counts not conserved");

    // Reversing the selection must not change anything.
    let reversed = rank(dataset, ids.iter().rev().copied());
    assert_eq!(ranking, reversed, "selection order leaked into ranking");

    match assess(dataset, ids) {
        Assessment::NoSelection => assert!(expected == 0 && ranking.is_empty()),
        Assessment::NoConditions => unreachable!("every built-in symptom lists conditions"),
        Assessment::Matches(report) => {
            assert_eq!(report.matches[0].percentage, 100);
            assert!(report.matches.len() <= 3);
        }
    }
});
