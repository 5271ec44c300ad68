//! Shared test utilities and fixtures.

#![allow(dead_code)]

use symcheck::{resolve, Dataset, RankedCondition, SymptomId};

// Re-export canonical test utilities from symcheck::testing
pub use symcheck::testing::{builtin_ids, ids, make_dataset, make_symptom};

/// An id the built-in dataset does not contain.
pub const UNKNOWN_ID: SymptomId = SymptomId(404);

/// `(condition, count)` pairs, for compact assertions.
pub fn pairs(ranking: &[RankedCondition]) -> Vec<(&str, u32)> {
    ranking
        .iter()
        .map(|r| (r.condition.as_str(), r.count))
        .collect()
}

/// Condition names in ranking order.
pub fn names(ranking: &[RankedCondition]) -> Vec<&str> {
    ranking.iter().map(|r| r.condition.as_str()).collect()
}

/// Every ranking invariant that can be checked from outside the crate.
pub fn assert_ranking_well_formed(
    dataset: &Dataset,
    selection: &[SymptomId],
    ranking: &[RankedCondition],
) {
    let resolved = resolve(dataset, selection.iter().copied());

    let ranked: u32 = ranking.iter().map(|r| r.count).sum();
    let listed: usize = resolved.iter().map(|s| s.conditions.len()).sum();
    assert_eq!(ranked as usize, listed, "counts not conserved");

    for (i, entry) in ranking.iter().enumerate() {
        assert!(entry.count >= 1, "ranking[{}] has count 0", i);
        let listing = resolved
            .iter()
            .filter(|s| s.conditions.contains(&entry.condition))
            .count();
        assert_eq!(
            entry.count as usize, listing,
            "'{}' count disagrees with listing symptoms",
            entry.condition
        );
    }

    for pair in ranking.windows(2) {
        assert!(
            pair[0].count >= pair[1].count,
            "'{}' ({}) ranked above '{}' ({})",
            pair[0].condition,
            pair[0].count,
            pair[1].condition,
            pair[1].count
        );
    }
}

/// Position at which each condition first appears when walking `selection`
/// through the dataset in table order.
pub fn first_seen_positions(dataset: &Dataset, selection: &[SymptomId]) -> Vec<String> {
    let mut order: Vec<String> = Vec::new();
    for symptom in resolve(dataset, selection.iter().copied()) {
        for condition in &symptom.conditions {
            if !order.contains(condition) {
                order.push(condition.clone());
            }
        }
    }
    order
}
