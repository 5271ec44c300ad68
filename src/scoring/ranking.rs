// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Condition ranking: selection in, ordered `(condition, count)` list out.
//!
//! 1. **Resolve** - keep the dataset symptoms whose id was selected, in table
//!    order. Unknown ids drop out here without complaint.
//! 2. **Tally** - walk each resolved symptom's conditions in listed order and
//!    count them, remembering first-seen position.
//! 3. **Sort** - descending count, then ascending first-seen position.
//!
//! The sort key is total, so there is exactly one valid output per input.
//! Selection order never matters: resolution walks the table, not the
//! selection.

use crate::dataset::Dataset;
use crate::scoring::core::{Tally, TallyEntry};
use crate::types::{RankedCondition, Symptom, SymptomId};
#[cfg(debug_assertions)]
use crate::verify::contracts;
use std::cmp::Ordering;
use std::collections::HashSet;

/// Selected symptoms in dataset order. Ids with no symptom are dropped.
pub fn resolve<I>(dataset: &Dataset, selected: I) -> Vec<&Symptom>
where
    I: IntoIterator<Item = SymptomId>,
{
    let wanted: HashSet<SymptomId> = selected.into_iter().collect();
    dataset
        .symptoms()
        .iter()
        .filter(|symptom| wanted.contains(&symptom.id))
        .collect()
}

/// Compare two tallied conditions for ranking.
///
/// Sort order:
/// 1. **Count** - descending (more selected symptoms wins)
/// 2. **First seen** - ascending (earlier in the scan wins)
///
/// `first_seen` is unique per tally, so two distinct entries never compare
/// `Equal`.
pub fn compare_ranked(a: &TallyEntry<'_>, b: &TallyEntry<'_>) -> Ordering {
    b.count
        .cmp(&a.count)
        .then_with(|| a.first_seen.cmp(&b.first_seen))
}

/// Rank conditions by how many selected symptoms list them.
///
/// An empty selection, or one made only of unknown ids, yields an empty
/// ranking.
pub fn rank<I>(dataset: &Dataset, selected: I) -> Vec<RankedCondition>
where
    I: IntoIterator<Item = SymptomId>,
{
    let resolved = resolve(dataset, selected);

    let mut tally = Tally::new();
    for symptom in &resolved {
        for condition in &symptom.conditions {
            tally.add(condition);
        }
    }

    let mut entries = tally.into_entries();
    entries.sort_by(compare_ranked);

    #[cfg(debug_assertions)]
    let first_seen: Vec<usize> = entries.iter().map(|e| e.first_seen).collect();

    let ranking: Vec<RankedCondition> = entries
        .into_iter()
        .map(|entry| RankedCondition {
            condition: entry.condition.to_string(),
            count: entry.count,
        })
        .collect();

    #[cfg(debug_assertions)]
    {
        contracts::check_ranking_sorted(&ranking, &first_seen);
        contracts::check_counts_conserved(&ranking, &resolved);
        contracts::check_counts_positive(&ranking);
    }

    tracing::debug!(
        resolved = resolved.len(),
        conditions = ranking.len(),
        top = ranking.first().map(|r| r.condition.as_str()),
        "ranked selection"
    );

    ranking
}
