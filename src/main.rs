// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use symcheck::{Assessment, Dataset, RankedCondition, SymptomChecker, SymptomId};

mod cli;
use cli::display::{
    blank_row, count_value, dim, double_footer, double_header, pad_right, percentage_colored,
    row, section_bot, section_mid, section_top, themed, title, wrap, BOLD, BOX_WIDTH, CYAN,
    YELLOW,
};
use cli::{Cli, Commands};

/// Column where condition counts start in `rank` output
const CONDITION_COLUMN: usize = 40;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr so stdout stays clean for `--json`.
fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let checker = load_checker(cli.dataset.as_deref())?;

    match cli.command {
        Commands::List { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(&checker.checklist())?);
            } else {
                print_checklist(&checker);
            }
        }
        Commands::Rank { ids, limit, json } => {
            let mut ranking = checker.rank(to_ids(&ids));
            if let Some(limit) = limit {
                ranking.truncate(limit);
            }
            if json {
                println!("{}", serde_json::to_string_pretty(&ranking)?);
            } else {
                print_ranking(&ranking);
            }
        }
        Commands::Assess { ids, json } => {
            let assessment = checker.assess(to_ids(&ids));
            if json {
                println!("{}", serde_json::to_string_pretty(&assessment)?);
            } else {
                print_assessment(&assessment);
            }
        }
    }

    Ok(())
}

fn load_checker(path: Option<&str>) -> Result<SymptomChecker> {
    let dataset = match path {
        Some(path) => Dataset::from_path(path)
            .with_context(|| format!("could not load dataset from {}", path))?,
        None => Dataset::builtin().clone(),
    };
    Ok(SymptomChecker::new(dataset))
}

fn to_ids(raw: &[u32]) -> Vec<SymptomId> {
    let ids: Vec<SymptomId> = raw.iter().copied().map(SymptomId).collect();
    tracing::debug!(selected = ?ids, "selection");
    ids
}

// ═══════════════════════════════════════════════════════════════════════════
// RENDERING
// ═══════════════════════════════════════════════════════════════════════════

fn print_checklist(checker: &SymptomChecker) {
    double_header();
    title("SYMPTOM CHECKLIST");
    double_footer();

    section_top("SYMPTOMS");
    for symptom in checker.dataset().symptoms() {
        let id = themed(CYAN, &[BOLD], &format!("[{:>2}]", symptom.id.get()));
        let name = pad_right(&symptom.name, CONDITION_COLUMN - 6);
        let conditions = dim(&format!("{} conditions", symptom.conditions.len()));
        row(&format!("  {} {}{}", id, name, conditions));
    }
    blank_row();
    row(&dim("  Select ids with: symcheck assess 1,2"));
    section_bot();
}

fn print_ranking(ranking: &[RankedCondition]) {
    section_top("RANKING");
    if ranking.is_empty() {
        row(&dim("  No conditions ranked for this selection."));
    }
    for (position, entry) in ranking.iter().enumerate() {
        let label = pad_right(
            &format!("  {:>2}. {}", position + 1, entry.condition),
            CONDITION_COLUMN,
        );
        row(&format!("{}{}", label, count_value(entry.count)));
    }
    section_bot();
}

fn print_assessment(assessment: &Assessment) {
    match assessment {
        Assessment::NoSelection => {
            println!("{}", themed(YELLOW, &[BOLD], symcheck::report::SELECT_PROMPT));
        }
        Assessment::NoConditions => {
            section_top("RESULTS");
            print_wrapped(symcheck::report::NO_CONDITIONS);
            section_mid("ADVICE");
            print_wrapped(symcheck::report::PERSISTENT_SYMPTOMS_ADVICE);
            section_bot();
        }
        Assessment::Matches(report) => {
            section_top("LIKELY CONDITIONS");
            print_wrapped(symcheck::report::RESULTS_INTRO);
            blank_row();
            for m in &report.matches {
                let label = pad_right(&format!("  {}", m.condition), CONDITION_COLUMN);
                row(&format!("{}{} match", label, percentage_colored(m.percentage)));
            }

            let rec = &report.recommendation;
            match &rec.advice {
                Some(advice) => {
                    section_mid(&format!("RECOMMENDATIONS FOR {}", rec.condition.to_uppercase()));
                    print_wrapped(advice);
                    blank_row();
                    for line in wrap(symcheck::report::DISCLAIMER, BOX_WIDTH - 4) {
                        row(&format!("  {}", dim(&line)));
                    }
                }
                None => {
                    section_mid("ADVICE");
                    print_wrapped(rec.text());
                }
            }
            section_bot();
        }
    }
}

fn print_wrapped(text: &str) {
    for line in wrap(text, BOX_WIDTH - 4) {
        row(&format!("  {}", line));
    }
}
