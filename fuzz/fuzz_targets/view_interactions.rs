// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for checklist interaction sequences.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use symcheck::{Interaction, SymptomChecker, SymptomId, ViewState};

#[derive(Debug, Arbitrary)]
enum Step {
    Toggle(u8),
    Analyze,
    Reset,
}

fuzz_target!(|steps: Vec<Step>| {
    let checker = SymptomChecker::default();
    let mut state = ViewState::new();

    for step in steps {
        let interaction = match step {
            Step::Toggle(id) => Interaction::Toggle(SymptomId(u32::from(id % 16))),
            Step::Analyze => Interaction::Analyze,
            Step::Reset => Interaction::Reset,
        };
        state = state.apply(&checker, interaction);

        // Only known ids can ever be selected.
        assert!(state
            .selected()
            .iter()
            .all(|id| checker.dataset().contains(*id)));
    }
});
