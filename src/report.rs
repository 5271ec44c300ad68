// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Turning a ranking into what the user reads.
//!
//! Three outcomes, one per `Assessment` variant:
//!
//! - nothing selected: a prompt, and the ranker never runs
//! - selection ranks to nothing: a neutral "no conditions identified" note
//! - otherwise: the top three conditions with match percentages, then advice
//!   for the top one (or generic advice when the table has none)
//!
//! `Assessment::lines` is the plain-text rendering shared by the CLI and the
//! browser binding.

use crate::dataset::Dataset;
use crate::scoring::{self, match_percentage, TOP_N};
use crate::types::{RankedCondition, SymptomId};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const SELECT_PROMPT: &str = "Please select at least one symptom.";
pub const RESULTS_INTRO: &str = "Based on your symptoms, the most likely conditions are:";
pub const DISCLAIMER: &str =
    "Remember: This is not medical advice. Please consult a healthcare professional for proper diagnosis.";
pub const FALLBACK_ADVICE: &str =
    "Please consult a healthcare professional for proper diagnosis and treatment.";
pub const NO_CONDITIONS: &str = "No specific conditions identified based on your symptoms.";
pub const PERSISTENT_SYMPTOMS_ADVICE: &str =
    "If symptoms persist or worsen, please consult a healthcare professional.";

/// A ranked condition as displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayMatch {
    pub condition: String,
    pub count: u32,
    pub percentage: u32,
}

/// Advice for the top-ranked condition. `advice` is `None` when the
/// recommendation table has no entry for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub condition: String,
    pub advice: Option<String>,
}

impl Recommendation {
    /// Table advice, or the generic fallback.
    pub fn text(&self) -> &str {
        self.advice.as_deref().unwrap_or(FALLBACK_ADVICE)
    }

    pub fn is_fallback(&self) -> bool {
        self.advice.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchReport {
    pub matches: Vec<DisplayMatch>,
    pub recommendation: Recommendation,
}

/// Outcome of one Analyze interaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Assessment {
    /// Nothing was selected; prompt instead of ranking.
    NoSelection,
    /// The selection ranked to an empty list.
    NoConditions,
    Matches(MatchReport),
}

/// The first `n` ranked conditions with their display percentages.
///
/// Percentages are relative to the first entry's count.
pub fn top_matches(ranking: &[RankedCondition], n: usize) -> Vec<DisplayMatch> {
    let top_count = ranking.first().map_or(0, |r| r.count);
    ranking
        .iter()
        .take(n)
        .map(|r| DisplayMatch {
            condition: r.condition.clone(),
            count: r.count,
            percentage: match_percentage(r.count, top_count),
        })
        .collect()
}

/// Build the assessment for an already-computed ranking.
pub fn report(dataset: &Dataset, ranking: &[RankedCondition]) -> Assessment {
    let Some(top) = ranking.first() else {
        return Assessment::NoConditions;
    };

    Assessment::Matches(MatchReport {
        matches: top_matches(ranking, TOP_N),
        recommendation: Recommendation {
            condition: top.condition.clone(),
            advice: dataset.recommendation(&top.condition).map(str::to_string),
        },
    })
}

/// Rank a selection and build its assessment.
///
/// Ids the dataset does not know count as not selected, so a selection with
/// no known id short-circuits to `NoSelection` without ranking.
pub fn assess<I>(dataset: &Dataset, selected: I) -> Assessment
where
    I: IntoIterator<Item = SymptomId>,
{
    let known: Vec<SymptomId> = selected
        .into_iter()
        .filter(|id| dataset.contains(*id))
        .collect();
    if known.is_empty() {
        return Assessment::NoSelection;
    }
    let ranking = scoring::rank(dataset, known);
    report(dataset, &ranking)
}

impl Assessment {
    pub fn matches(&self) -> &[DisplayMatch] {
        match self {
            Assessment::Matches(report) => &report.matches,
            _ => &[],
        }
    }

    pub fn recommendation(&self) -> Option<&Recommendation> {
        match self {
            Assessment::Matches(report) => Some(&report.recommendation),
            _ => None,
        }
    }

    /// Plain-text rendering, one display line per entry. Blank strings
    /// separate the result list from the advice.
    pub fn lines(&self) -> Vec<String> {
        match self {
            Assessment::NoSelection => vec![SELECT_PROMPT.to_string()],
            Assessment::NoConditions => vec![
                NO_CONDITIONS.to_string(),
                String::new(),
                PERSISTENT_SYMPTOMS_ADVICE.to_string(),
            ],
            Assessment::Matches(report) => {
                let mut lines = vec![RESULTS_INTRO.to_string(), String::new()];
                lines.extend(
                    report
                        .matches
                        .iter()
                        .map(|m| format!("{} ({}% match)", m.condition, m.percentage)),
                );
                lines.push(String::new());

                let rec = &report.recommendation;
                match &rec.advice {
                    Some(advice) => {
                        lines.push(format!("Recommendations for {}:", rec.condition));
                        lines.push(advice.clone());
                        lines.push(DISCLAIMER.to_string());
                    }
                    None => lines.push(FALLBACK_ADVICE.to_string()),
                }
                lines
            }
        }
    }
}

impl fmt::Display for Assessment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines().join("\n"))
    }
}
