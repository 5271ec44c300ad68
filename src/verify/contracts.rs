// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the ranking invariants.
//!
//! These are debug-mode assertions. They:
//!
//! 1. Are **zero-cost in release builds** (use `debug_assert!`)
//! 2. Provide **early failure detection** during development
//! 3. Mirror the documented ranking guarantees exactly
//!
//! | Contract Function          | Guarantee                                        |
//! |----------------------------|--------------------------------------------------|
//! | `check_ranking_sorted`     | totally ordered by (-count, first_seen)          |
//! | `check_counts_conserved`   | Σ counts = Σ conditions over resolved symptoms   |
//! | `check_counts_positive`    | every ranked condition has count >= 1            |
//!
//! # Usage
//!
//! ```ignore
//! use symcheck::verify::contracts::*;
//!
//! // In debug builds, this panics if the invariant is violated
//! check_counts_conserved(&ranking, &resolved);
//! ```

// ============================================================================
// COMPILE-TIME ASSERTIONS (evaluated at build time)
// ============================================================================

/// The display cap must be a percentage, and it must sit below the value the
/// top entry shows, otherwise the top entry stops standing out.
const _: () = {
    use crate::scoring::{MAX_MATCH_PERCENT, TOP_MATCH_PERCENT};
    assert!(MAX_MATCH_PERCENT <= 100);
    assert!(MAX_MATCH_PERCENT < TOP_MATCH_PERCENT);
};

use crate::types::{RankedCondition, Symptom};

// ============================================================================
// RANKING CONTRACTS
// ============================================================================

/// Check that a ranking is ordered by descending count, and by first-seen
/// position among equal counts.
///
/// `first_seen[i]` is the position at which `ranking[i]` was first tallied.
///
/// # Panics (debug builds only)
/// Panics if any adjacent pair is out of order.
#[inline]
pub fn check_ranking_sorted(ranking: &[RankedCondition], first_seen: &[usize]) {
    debug_assert_eq!(
        ranking.len(),
        first_seen.len(),
        "Contract violation: ranking and first-seen positions differ in length"
    );

    for i in 1..ranking.len().min(first_seen.len()) {
        let prev = &ranking[i - 1];
        let curr = &ranking[i];

        debug_assert!(
            prev.count > curr.count
                || (prev.count == curr.count && first_seen[i - 1] < first_seen[i]),
            "Contract violation: ranking not ordered at {} - '{}' ({}, seen {}) before '{}' ({}, seen {})",
            i,
            prev.condition,
            prev.count,
            first_seen[i - 1],
            curr.condition,
            curr.count,
            first_seen[i]
        );
    }
}

/// Check that no count was gained or lost while tallying.
///
/// # Panics (debug builds only)
/// Panics if Σ counts differs from the number of (symptom, condition) pairs.
#[inline]
pub fn check_counts_conserved(ranking: &[RankedCondition], resolved: &[&Symptom]) {
    let ranked: u64 = ranking.iter().map(|r| u64::from(r.count)).sum();
    let listed: u64 = resolved.iter().map(|s| s.conditions.len() as u64).sum();

    debug_assert_eq!(
        ranked, listed,
        "Contract violation: ranking holds {} counts but resolved symptoms list {} conditions",
        ranked, listed
    );
}

/// Check that every ranked condition was actually listed at least once.
///
/// # Panics (debug builds only)
/// Panics on a zero count.
#[inline]
pub fn check_counts_positive(ranking: &[RankedCondition]) {
    for (i, entry) in ranking.iter().enumerate() {
        debug_assert!(
            entry.count >= 1,
            "Contract violation: ranking[{}] '{}' has count 0",
            i,
            entry.condition
        );
    }
}
