//! Empty, unknown, and degenerate inputs.

use super::common::{ids, make_dataset, pairs, UNKNOWN_ID};
use symcheck::{assess, rank, Assessment, Dataset, DatasetError, SymptomId};

#[test]
fn test_empty_selection_ranks_nothing() {
    assert!(rank(Dataset::builtin(), Vec::<SymptomId>::new()).is_empty());
}

#[test]
fn test_unknown_ids_are_ignored() {
    let with_unknown = rank(Dataset::builtin(), [SymptomId(1), UNKNOWN_ID, SymptomId(0)]);
    assert_eq!(with_unknown, rank(Dataset::builtin(), ids(&[1])));
}

#[test]
fn test_only_unknown_ids_rank_nothing() {
    assert!(rank(Dataset::builtin(), [UNKNOWN_ID, SymptomId(u32::MAX)]).is_empty());
}

#[test]
fn test_repeated_ids_count_once() {
    let ranking = rank(Dataset::builtin(), ids(&[12, 12, 12]));
    assert!(ranking.iter().all(|r| r.count == 1));
    assert_eq!(ranking.len(), 4);
}

#[test]
fn test_symptoms_without_conditions() {
    let dataset = make_dataset(
        &[(1, "Tingling", &[]), (2, "Numbness", &[])],
        &[],
    )
    .unwrap();

    assert!(rank(&dataset, ids(&[1, 2])).is_empty());
    assert_eq!(assess(&dataset, ids(&[1, 2])), Assessment::NoConditions);
}

#[test]
fn test_custom_dataset_ranking() {
    let dataset = make_dataset(
        &[
            (10, "Itch", &["Eczema", "Allergic Reaction"]),
            (20, "Swelling", &["Allergic Reaction", "Injury"]),
            (30, "Redness", &["Injury", "Eczema", "Allergic Reaction"]),
        ],
        &[("Allergic Reaction", "Avoid the trigger.")],
    )
    .unwrap();

    let ranking = rank(&dataset, ids(&[30, 10, 20]));
    assert_eq!(
        pairs(&ranking),
        vec![("Allergic Reaction", 3), ("Eczema", 2), ("Injury", 2)]
    );
}

#[test]
fn test_malformed_dataset_is_rejected() {
    let err = make_dataset(&[(1, "Fever", &["Flu"]), (1, "Chills", &["Flu"])], &[]).unwrap_err();
    assert_eq!(err, DatasetError::DuplicateId { id: 1 });
}
