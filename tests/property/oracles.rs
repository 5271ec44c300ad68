//! Differential tests against a deliberately naive ranker.
//!
//! The oracle recounts with nested scans and sorts with a plain comparison on
//! (-count, first-seen index). It shares no code with the crate.

use proptest::prelude::*;
use std::collections::BTreeMap;
use symcheck::{rank, Dataset, RankedCondition, Symptom, SymptomId};

/// Naive reference implementation.
fn oracle_rank(symptoms: &[Symptom], selection: &[SymptomId]) -> Vec<RankedCondition> {
    let mut seen: Vec<String> = Vec::new();
    for symptom in symptoms.iter().filter(|s| selection.contains(&s.id)) {
        for condition in &symptom.conditions {
            if !seen.contains(condition) {
                seen.push(condition.clone());
            }
        }
    }

    let mut ranked: Vec<(usize, RankedCondition)> = seen
        .iter()
        .enumerate()
        .map(|(index, condition)| {
            let count = symptoms
                .iter()
                .filter(|s| selection.contains(&s.id))
                .filter(|s| s.conditions.contains(condition))
                .count() as u32;
            (
                index,
                RankedCondition {
                    condition: condition.clone(),
                    count,
                },
            )
        })
        .collect();

    ranked.sort_by(|(ia, a), (ib, b)| b.count.cmp(&a.count).then(ia.cmp(ib)));
    ranked.into_iter().map(|(_, r)| r).collect()
}

// ============================================================================
// STRATEGIES
// ============================================================================

/// A small condition vocabulary so that random symptoms overlap often.
const VOCABULARY: &[&str] = &[
    "Flu", "Cold", "Migraine", "Asthma", "Anemia", "Eczema", "Angina", "Sinusitis",
];

/// A valid dataset: unique ids, non-empty names, no repeated condition per symptom.
fn dataset_strategy() -> impl Strategy<Value = Dataset> {
    prop::collection::vec(
        prop::sample::subsequence(VOCABULARY.to_vec(), 0..=5).prop_shuffle(),
        1..10,
    )
    .prop_map(|condition_lists| {
        let symptoms: Vec<Symptom> = condition_lists
            .into_iter()
            .enumerate()
            .map(|(i, conditions)| {
                Symptom::new(i as u32 * 3 + 1, &format!("Symptom {}", i), conditions)
            })
            .collect();
        Dataset::new(symptoms, BTreeMap::new()).unwrap()
    })
}

fn selection_strategy() -> impl Strategy<Value = Vec<SymptomId>> {
    prop::collection::vec((0u32..32).prop_map(SymptomId), 0..12)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_matches_oracle(dataset in dataset_strategy(), selection in selection_strategy()) {
        let expected = oracle_rank(dataset.symptoms(), &selection);
        let actual = rank(&dataset, selection);
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn prop_whole_table_matches_oracle(dataset in dataset_strategy()) {
        let all: Vec<SymptomId> = dataset.symptoms().iter().map(|s| s.id).collect();
        let expected = oracle_rank(dataset.symptoms(), &all);
        prop_assert_eq!(rank(&dataset, all), expected);
    }
}

#[test]
fn test_oracle_agrees_on_builtin_scenario() {
    let selection = [SymptomId(1), SymptomId(2)];
    assert_eq!(
        oracle_rank(Dataset::builtin().symptoms(), &selection),
        rank(Dataset::builtin(), selection)
    );
}
