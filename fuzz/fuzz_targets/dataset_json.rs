// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the JSON dataset loader.
//!
//! Arbitrary bytes must either decode to a valid dataset or fail with an error.
//! Anything that decodes must rank its whole table without panicking.

#![no_main]

use libfuzzer_sys::fuzz_target;
use symcheck::{assess, Dataset};

fuzz_target!(|data: &[u8]| {
    let Ok(json) = std::str::from_utf8(data) else {
        return;
    };

    if let Ok(dataset) = Dataset::from_json(json) {
        let all: Vec<_> = dataset.symptoms().iter().map(|s| s.id).collect();
        let _ = assess(&dataset, all);
    }
});
