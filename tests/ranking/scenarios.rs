//! Concrete selections over the built-in dataset, checked condition by condition.

use super::common::{assert_ranking_well_formed, ids, names, pairs};
use symcheck::{rank, Dataset, SymptomChecker};

// ============================================================================
// DOCUMENTED SCENARIOS
// ============================================================================

#[test]
fn test_fever_and_cough() {
    let dataset = Dataset::builtin();
    let selection = ids(&[1, 2]);
    let ranking = rank(dataset, selection.clone());

    assert_eq!(
        pairs(&ranking),
        vec![
            ("Flu", 2),
            ("Common Cold", 2),
            ("COVID-19", 2),
            ("Pneumonia", 1),
            ("Bronchitis", 1),
        ]
    );
    assert_ranking_well_formed(dataset, &selection, &ranking);
}

#[test]
fn test_chest_pain_alone() {
    let ranking = rank(Dataset::builtin(), ids(&[7]));
    assert_eq!(
        pairs(&ranking),
        vec![
            ("Angina", 1),
            ("Heart Attack", 1),
            ("Acid Reflux", 1),
            ("Pneumonia", 1),
        ]
    );
}

// ============================================================================
// TIE-BREAKING
// ============================================================================

#[test]
fn test_tie_order_follows_table_not_selection() {
    // Cough lists Common Cold before Flu, but Fever comes first in the table
    let forward = rank(Dataset::builtin(), ids(&[1, 2]));
    let backward = rank(Dataset::builtin(), ids(&[2, 1]));
    assert_eq!(forward, backward);
    assert_eq!(names(&forward)[..2], ["Flu", "Common Cold"]);
}

#[test]
fn test_cough_alone_uses_its_own_listing_order() {
    let ranking = rank(Dataset::builtin(), ids(&[2]));
    assert_eq!(
        names(&ranking),
        vec!["Common Cold", "Flu", "COVID-19", "Bronchitis"]
    );
}

#[test]
fn test_higher_count_outranks_earlier_first_seen() {
    // Headache: Migraine, Tension Headache, Dehydration, Sinusitis
    // Dizziness: Dehydration, ...
    // Dehydration is seen third but counted twice, so it leads.
    let ranking = rank(Dataset::builtin(), ids(&[3, 9]));
    assert_eq!(pairs(&ranking)[0], ("Dehydration", 2));
    assert_eq!(
        names(&ranking)[1..5],
        ["Migraine", "Tension Headache", "Sinusitis", "Inner Ear Problem"]
    );
}

#[test]
fn test_respiratory_cluster() {
    // Fever, Cough, Sore Throat, Runny Nose, Shortness of Breath
    let dataset = Dataset::builtin();
    let selection = ids(&[1, 2, 4, 5, 6]);
    let ranking = rank(dataset, selection.clone());

    assert_eq!(
        pairs(&ranking)[..4],
        [("Common Cold", 4), ("COVID-19", 4), ("Flu", 3), ("Pneumonia", 2)]
    );
    assert_ranking_well_formed(dataset, &selection, &ranking);
}

#[test]
fn test_every_symptom_selected() {
    let dataset = Dataset::builtin();
    let selection = super::common::builtin_ids();
    let ranking = rank(dataset, selection.clone());

    assert_eq!(ranking.iter().map(|r| r.count).sum::<u32>(), 48);
    assert_eq!(pairs(&ranking)[0], ("Flu", 4));
    assert_ranking_well_formed(dataset, &selection, &ranking);
}

// ============================================================================
// CHECKER FACADE
// ============================================================================

#[test]
fn test_checker_ranks_like_free_function() {
    let checker = SymptomChecker::default();
    for selection in [ids(&[1]), ids(&[5, 11]), ids(&[6, 7, 8])] {
        assert_eq!(
            checker.rank(selection.clone()),
            rank(Dataset::builtin(), selection)
        );
    }
}
