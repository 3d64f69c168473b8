// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown CLI, evaluates and compares poker hands from the terminal.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::{debug, error};
use serde::Serialize;
use std::fmt;

use showdown_eval::{Card, parse_cards};

pub mod report;

#[derive(Debug, Parser)]
#[clap(version, about)]
struct Cli {
    /// Print the results as JSON.
    #[clap(long, global = true)]
    json: bool,
    /// Enable debug logging.
    #[clap(long, short, global = true)]
    verbose: bool,
    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Selects the best hand out of 5 to 7 cards.
    Eval {
        /// The cards, for example `AS KD 10h 7c 2S`.
        #[clap(required = true, num_args = 1..)]
        cards: Vec<String>,
    },
    /// Compares the players hole cards against the board.
    Compare {
        /// The community cards.
        #[clap(long, short)]
        board: String,
        /// The hole cards for each player, for example `"AS KD" "7h 7c"`.
        #[clap(required = true, num_args = 1..)]
        players: Vec<String>,
    },
    /// Samples random 7-cards hands and prints the categories distribution.
    Stats {
        /// The number of hands to sample.
        #[clap(long, short, default_value_t = 100_000)]
        samples: usize,
        /// Number of parallel tasks.
        #[clap(long, short, default_value_t = 4, value_parser = clap::value_parser!(u16).range(1..=64))]
        tasks: u16,
    },
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::builder()
        .filter_level(level)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    if let Err(e) = run(cli) {
        error!("{e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    debug!("Running {:?}", cli.command);

    match cli.command {
        Command::Eval { cards } => {
            let cards = parse_args(&cards)?;
            print(&report::evaluate(&cards)?, cli.json)
        }
        Command::Compare { board, players } => {
            let board = parse_cards(&board).with_context(|| format!("Invalid board {board}"))?;
            let players = players
                .iter()
                .map(|hole| parse_cards(hole).with_context(|| format!("Invalid hole {hole}")))
                .collect::<Result<Vec<_>>>()?;
            print(&report::showdown(&board, &players)?, cli.json)
        }
        Command::Stats { samples, tasks } => {
            print(&report::sample_stats(samples, tasks as usize), cli.json)
        }
    }
}

fn parse_args(args: &[String]) -> Result<Vec<Card>> {
    let cards = args.join(" ");
    parse_cards(&cards).with_context(|| format!("Invalid cards {cards}"))
}

fn print<T: Serialize + fmt::Display>(report: &T, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        println!("{report}");
    }

    Ok(())
}
