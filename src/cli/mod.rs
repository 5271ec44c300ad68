// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the symcheck command-line interface.
//!
//! Three subcommands: `list` to show the checklist, `rank` to see every
//! condition a selection scores, and `assess` to get the top three with
//! advice, the way the checklist page presents them. All three can emit JSON
//! instead of boxes.

pub mod display;

use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "symcheck",
    about = "Rank likely conditions from a symptom checklist",
    version
)]
pub struct Cli {
    /// Load symptoms and recommendations from a JSON file instead of the built-in tables
    #[arg(long, global = true)]
    pub dataset: Option<String>,

    /// Log more to stderr (-v debug, -vv trace). Overrides RUST_LOG.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the symptom checklist
    List {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Rank every condition listed by the selected symptoms
    Rank {
        /// Selected symptom ids (space or comma separated)
        #[arg(value_delimiter = ',')]
        ids: Vec<u32>,

        /// Maximum number of conditions to show
        #[arg(short, long)]
        limit: Option<usize>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show the most likely conditions and advice for the top one
    Assess {
        /// Selected symptom ids (space or comma separated)
        #[arg(value_delimiter = ',')]
        ids: Vec<u32>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}
