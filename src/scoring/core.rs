// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Counting and the display math on top of counts.
//!
//! The tally keeps conditions in first-seen order explicitly (a `Vec` plus an
//! index map) instead of trusting a map's iteration order. First-seen order is
//! the ranking tiebreaker, so it cannot be left to a hasher.
//!
//! # Display constants
//!
//! | Constant            | Value | Meaning                                        |
//! |---------------------|-------|------------------------------------------------|
//! | `TOP_N`             | 3     | How many ranked conditions get displayed       |
//! | `MAX_MATCH_PERCENT` | 95    | Cap for anything ranked below the top count    |
//! | `TOP_MATCH_PERCENT` | 100   | What an entry tied with the top count displays |

use std::collections::HashMap;

// =============================================================================
// DISPLAY CONSTANTS
// =============================================================================

/// Number of ranked conditions shown to the user.
pub const TOP_N: usize = 3;

/// Displayed confidence never exceeds this for entries below the top count.
pub const MAX_MATCH_PERCENT: u32 = 95;

/// Displayed confidence for the top entry and anything tied with it.
pub const TOP_MATCH_PERCENT: u32 = 100;

// =============================================================================
// TALLY
// =============================================================================

/// One tallied condition, remembering where it was first seen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TallyEntry<'a> {
    pub condition: &'a str,
    pub count: u32,
    pub first_seen: usize,
}

/// Running per-condition counts in first-seen order.
#[derive(Debug, Default)]
pub struct Tally<'a> {
    entries: Vec<TallyEntry<'a>>,
    index: HashMap<&'a str, usize>,
}

impl<'a> Tally<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more mention of `condition`.
    pub fn add(&mut self, condition: &'a str) {
        match self.index.get(condition) {
            Some(&slot) => self.entries[slot].count += 1,
            None => {
                let slot = self.entries.len();
                self.index.insert(condition, slot);
                self.entries.push(TallyEntry {
                    condition,
                    count: 1,
                    first_seen: slot,
                });
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in first-seen order.
    pub fn into_entries(self) -> Vec<TallyEntry<'a>> {
        self.entries
    }
}

// =============================================================================
// MATCH PERCENTAGE
// =============================================================================

/// Display percentage for a count relative to the top count.
///
/// Anything tied with the top count shows 100. Everything below shows
/// `min(95, round(100 * count / top_count))`, rounding halves up. A zero top
/// count means there is nothing to compare against and yields 0.
pub fn match_percentage(count: u32, top_count: u32) -> u32 {
    if top_count == 0 {
        return 0;
    }
    if count >= top_count {
        return TOP_MATCH_PERCENT;
    }

    let (count, top) = (u64::from(count), u64::from(top_count));
    let rounded = (200 * count + top) / (2 * top);
    (rounded as u32).min(MAX_MATCH_PERCENT)
}
