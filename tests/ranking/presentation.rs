//! What the user reads: top three, percentages, advice, fallbacks.

use super::common::{ids, make_dataset, UNKNOWN_ID};
use symcheck::report::{
    top_matches, DISCLAIMER, FALLBACK_ADVICE, NO_CONDITIONS, PERSISTENT_SYMPTOMS_ADVICE,
    RESULTS_INTRO, SELECT_PROMPT,
};
use symcheck::{assess, match_percentage, rank, Assessment, Dataset, MAX_MATCH_PERCENT, TOP_N};

fn shown(assessment: &Assessment) -> Vec<(&str, u32)> {
    assessment
        .matches()
        .iter()
        .map(|m| (m.condition.as_str(), m.percentage))
        .collect()
}

// ============================================================================
// MATCH PERCENTAGES
// ============================================================================

#[test]
fn test_fever_and_cough_all_full_match() {
    let assessment = assess(Dataset::builtin(), ids(&[1, 2]));
    assert_eq!(
        shown(&assessment),
        vec![("Flu", 100), ("Common Cold", 100), ("COVID-19", 100)]
    );
}

#[test]
fn test_chest_pain_top_three_full_match() {
    let assessment = assess(Dataset::builtin(), ids(&[7]));
    assert_eq!(
        shown(&assessment),
        vec![("Angina", 100), ("Heart Attack", 100), ("Acid Reflux", 100)]
    );
}

#[test]
fn test_lower_counts_show_proportional_percentages() {
    // Fever + Shortness of Breath: COVID-19 2, Pneumonia 2, then Flu 1
    let assessment = assess(Dataset::builtin(), ids(&[1, 6]));
    assert_eq!(
        shown(&assessment),
        vec![("COVID-19", 100), ("Pneumonia", 100), ("Flu", 50)]
    );
}

#[test]
fn test_percentages_below_top_never_exceed_cap() {
    let ranking = rank(Dataset::builtin(), super::common::builtin_ids());
    let top = ranking[0].count;
    for entry in &ranking {
        let pct = match_percentage(entry.count, top);
        if entry.count < top {
            assert!(pct <= MAX_MATCH_PERCENT);
        } else {
            assert_eq!(pct, 100);
        }
    }
}

#[test]
fn test_top_matches_limit() {
    let ranking = rank(Dataset::builtin(), ids(&[1, 2, 3]));
    assert!(ranking.len() > TOP_N);
    assert_eq!(top_matches(&ranking, TOP_N).len(), TOP_N);
}

// ============================================================================
// RECOMMENDATIONS
// ============================================================================

#[test]
fn test_recommendation_for_top_condition() {
    let assessment = assess(Dataset::builtin(), ids(&[1, 2]));
    let lines = assessment.lines();

    assert_eq!(lines[0], RESULTS_INTRO);
    assert!(lines.contains(&"Flu (100% match)".to_string()));
    assert!(lines.contains(&"Recommendations for Flu:".to_string()));
    assert!(lines.contains(
        &"Rest, hydrate, and consider antiviral medications if caught early.".to_string()
    ));
    assert_eq!(lines.last().map(String::as_str), Some(DISCLAIMER));
}

#[test]
fn test_chest_pain_falls_back_to_generic_advice() {
    let assessment = assess(Dataset::builtin(), ids(&[7]));
    let rec = assessment.recommendation().unwrap();

    assert!(rec.is_fallback());
    assert_eq!(rec.text(), FALLBACK_ADVICE);
    assert_eq!(assessment.lines().last().map(String::as_str), Some(FALLBACK_ADVICE));
}

#[test]
fn test_only_top_condition_gets_advice() {
    // Cough + Runny Nose: Common Cold leads, Allergies (which has advice) trails
    let assessment = assess(Dataset::builtin(), ids(&[2, 5]));
    let rec = assessment.recommendation().unwrap();
    assert_eq!(rec.condition, "Common Cold");
    assert!(!assessment.to_string().contains("Avoid allergens"));
}

// ============================================================================
// EMPTY OUTCOMES
// ============================================================================

#[test]
fn test_empty_selection_prompts() {
    let assessment = assess(Dataset::builtin(), Vec::new());
    assert_eq!(assessment, Assessment::NoSelection);
    assert_eq!(assessment.to_string(), SELECT_PROMPT);
    assert!(assessment.recommendation().is_none());
}

#[test]
fn test_selection_of_unknown_ids_prompts() {
    let assessment = assess(Dataset::builtin(), [UNKNOWN_ID]);
    assert_eq!(assessment, Assessment::NoSelection);
    assert_eq!(assessment.to_string(), SELECT_PROMPT);
}

#[test]
fn test_no_conditions_message() {
    let dataset = make_dataset(&[(1, "Tingling", &[])], &[]).unwrap();
    let assessment = assess(&dataset, ids(&[1]));

    assert_eq!(assessment, Assessment::NoConditions);
    let lines = assessment.lines();
    assert_eq!(lines.first().map(String::as_str), Some(NO_CONDITIONS));
    assert_eq!(lines.last().map(String::as_str), Some(PERSISTENT_SYMPTOMS_ADVICE));
}

#[test]
fn test_assessment_json_round_trip() {
    let assessment = assess(Dataset::builtin(), ids(&[4, 5]));
    let json = serde_json::to_string(&assessment).unwrap();
    let decoded: Assessment = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, assessment);
}
