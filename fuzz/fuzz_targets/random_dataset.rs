// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for ranking over arbitrary valid tables.
//!
//! Tables the validator accepts must rank into a well-formed list: counts at
//! least 1, sorted by count, ties in first-seen order.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use std::collections::BTreeMap;
use symcheck::{rank, Dataset, Symptom, SymptomId};

#[derive(Debug, Arbitrary)]
struct Input {
    table: Vec<(u8, Vec<u8>)>,
    selection: Vec<u8>,
}

fuzz_target!(|input: Input| {
    // Small id and condition spaces so that overlaps happen.
    let symptoms: Vec<Symptom> = input
        .table
        .iter()
        .map(|(id, conditions)| {
            Symptom::new(
                u32::from(*id % 32),
                "symptom",
                conditions.iter().map(|c| format!("C{}", c % 16)),
            )
        })
        .collect();

    let Ok(dataset) = Dataset::new(symptoms, BTreeMap::new()) else {
        return;
    };

    let selection: Vec<SymptomId> = input
        .selection
        .iter()
        .map(|id| SymptomId(u32::from(*id % 32)))
        .collect();
    let ranking = rank(&dataset, selection.iter().copied());

    let mut first_seen: Vec<&str> = Vec::new();
    for symptom in dataset.symptoms().iter().filter(|s| selection.contains(&s.id)) {
        for condition in &symptom.conditions {
            if !first_seen.contains(&condition.as_str()) {
                first_seen.push(condition);
            }
        }
    }
    assert_eq!(ranking.len(), first_seen.len());

    let position = |c: &str| first_seen.iter().position(|s| *s == c);
    for pair in ranking.windows(2) {
        assert!(pair[0].count >= pair[1].count);
        if pair[0].count == pair[1].count {
            let (a, b) = (pair[0].condition.as_str(), pair[1].condition.as_str());
            assert!(position(a) < position(b));
        }
    }
    assert!(ranking.iter().all(|r| r.count >= 1));
});
