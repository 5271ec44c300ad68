//! The checklist state cycle: toggle, analyze, reset.

use symcheck::{Assessment, Interaction, SymptomChecker, SymptomId, ViewState};

fn run(checker: &SymptomChecker, interactions: &[Interaction]) -> ViewState {
    interactions
        .iter()
        .fold(ViewState::new(), |state, &i| state.apply(checker, i))
}

#[test]
fn test_analyze_shows_results_for_ticked_symptoms() {
    let checker = SymptomChecker::default();
    let state = run(
        &checker,
        &[
            Interaction::Toggle(SymptomId(2)),
            Interaction::Toggle(SymptomId(1)),
            Interaction::Analyze,
        ],
    );

    assert!(state.results_visible());
    assert_eq!(
        state.assessment(),
        Some(&checker.assess([SymptomId(1), SymptomId(2)]))
    );
}

#[test]
fn test_analyze_with_nothing_ticked_prompts() {
    let checker = SymptomChecker::default();
    let state = run(&checker, &[Interaction::Analyze]);
    assert_eq!(state.assessment(), Some(&Assessment::NoSelection));
}

#[test]
fn test_toggle_after_analyze_keeps_stale_results_until_reanalyzed() {
    let checker = SymptomChecker::default();
    let analyzed = run(
        &checker,
        &[Interaction::Toggle(SymptomId(7)), Interaction::Analyze],
    );
    let before = analyzed.assessment().cloned();

    let toggled = analyzed.apply(&checker, Interaction::Toggle(SymptomId(1)));
    assert_eq!(toggled.assessment().cloned(), before);

    let reanalyzed = toggled.apply(&checker, Interaction::Analyze);
    assert_ne!(reanalyzed.assessment().cloned(), before);
}

#[test]
fn test_reset_unticks_and_hides() {
    let checker = SymptomChecker::default();
    let state = run(
        &checker,
        &[
            Interaction::Toggle(SymptomId(3)),
            Interaction::Toggle(SymptomId(9)),
            Interaction::Analyze,
            Interaction::Reset,
        ],
    );

    assert!(state.selected().is_empty());
    assert!(!state.results_visible());
}

#[test]
fn test_selection_is_a_set() {
    let checker = SymptomChecker::default();
    let state = run(
        &checker,
        &[
            Interaction::Toggle(SymptomId(5)),
            Interaction::Toggle(SymptomId(5)),
            Interaction::Toggle(SymptomId(5)),
            Interaction::Toggle(SymptomId(404)),
        ],
    );

    let selected: Vec<SymptomId> = state.selected().iter().copied().collect();
    assert_eq!(selected, vec![SymptomId(5)]);
}

#[test]
fn test_analyze_ignores_unknown_ids() {
    let checker = SymptomChecker::default();
    let state = ViewState::new().apply(&checker, Interaction::Toggle(SymptomId(404)));
    let state = state.apply(&checker, Interaction::Analyze);
    assert_eq!(state.assessment(), Some(&Assessment::NoSelection));
}
