// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Evaluation reports printed by the CLI.
use anyhow::{Result, bail};
use log::info;
use serde::Serialize;
use std::{
    fmt,
    sync::atomic::{AtomicU64, Ordering},
    time::Instant,
};

use showdown_eval::{Card, Deck, EvaluatedHand, HandCategory, best_hand, best_hand_of, winners};

/// The best hand out of a set of cards.
#[derive(Debug, Serialize)]
pub struct EvalReport {
    /// The evaluated cards.
    pub cards: Vec<Card>,
    /// The best hand.
    pub hand: EvaluatedHand,
}

impl fmt::Display for EvalReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.hand)
    }
}

/// Evaluates the best hand out of 5 to 7 cards.
pub fn evaluate(cards: &[Card]) -> Result<EvalReport> {
    let hand = best_hand(cards)?;
    Ok(EvalReport {
        cards: cards.to_vec(),
        hand,
    })
}

/// A player result in a showdown.
#[derive(Debug, Serialize)]
pub struct PlayerResult {
    /// The player position on the command line.
    pub player: usize,
    /// The player hole cards.
    pub hole: Vec<Card>,
    /// The player best hand.
    pub hand: EvaluatedHand,
    /// Whether this player wins or splits the pot.
    pub winner: bool,
}

/// The result of a showdown between players sharing a board.
#[derive(Debug, Serialize)]
pub struct ShowdownReport {
    /// The community cards.
    pub board: Vec<Card>,
    /// The players results, strongest first.
    pub players: Vec<PlayerResult>,
}

impl fmt::Display for ShowdownReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, res) in self.players.iter().enumerate() {
            if idx > 0 {
                writeln!(f)?;
            }

            let hole = res
                .hole
                .iter()
                .map(Card::to_string)
                .collect::<Vec<_>>()
                .join(" ");
            let tag = if res.winner { " *" } else { "" };
            write!(f, "Player {} [{hole}]: {}{tag}", res.player + 1, res.hand)?;
        }

        Ok(())
    }
}

/// Evaluates each player hole cards against the board and ranks the hands.
pub fn showdown(board: &[Card], players: &[Vec<Card>]) -> Result<ShowdownReport> {
    // A single deck can't deal the same card twice.
    let mut all = board.to_vec();
    players.iter().for_each(|hole| all.extend_from_slice(hole));
    all.sort();
    if let Some(w) = all.windows(2).find(|w| w[0] == w[1]) {
        bail!("Card {} dealt more than once", w[0]);
    }

    let hands = players
        .iter()
        .map(|hole| best_hand_of(hole, board))
        .collect::<Result<Vec<_>, _>>()?;

    let winners = winners(&hands);
    info!("Showdown winners {winners:?} out of {} players", hands.len());

    let mut results = players
        .iter()
        .zip(hands)
        .enumerate()
        .map(|(player, (hole, hand))| PlayerResult {
            player,
            hole: hole.clone(),
            hand,
            winner: winners.contains(&player),
        })
        .collect::<Vec<_>>();
    results.sort_by(|a, b| b.hand.cmp(&a.hand).then(a.player.cmp(&b.player)));

    Ok(ShowdownReport {
        board: board.to_vec(),
        players: results,
    })
}

/// A category count in a sample.
#[derive(Debug, Serialize)]
pub struct CategoryCount {
    /// The hand category.
    pub category: HandCategory,
    /// The number of sampled hands in this category.
    pub count: u64,
    /// The frequency of this category.
    pub frequency: f64,
}

/// Categories distribution of random 7-cards hands.
#[derive(Debug, Serialize)]
pub struct StatsReport {
    /// The number of sampled hands.
    pub samples: u64,
    /// The sampling time in seconds.
    pub elapsed: f64,
    /// The count for each category from the weakest to the strongest.
    pub categories: Vec<CategoryCount>,
}

impl fmt::Display for StatsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total hands      {}", self.samples)?;
        writeln!(f, "Elapsed:         {:.3}s", self.elapsed)?;

        for c in &self.categories {
            let label = format!("{}:", c.category);
            write!(
                f,
                "\n{label:<17}{:>10} {:>7.3}%",
                c.count,
                c.frequency * 100.0
            )?;
        }

        Ok(())
    }
}

/// Samples random 7-cards hands from `tasks` parallel tasks.
///
/// The samples are split evenly between tasks so the total can be rounded up
/// to a multiple of the number of tasks.
pub fn sample_stats(samples: usize, tasks: usize) -> StatsReport {
    let tasks = tasks.max(1);
    let samples_per_task = samples.div_ceil(tasks);

    // Create per task counters to avoid contention.
    let task_counters = (0..tasks)
        .map(|_| {
            (0..HandCategory::COUNT)
                .map(|_| AtomicU64::new(0))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    let now = Instant::now();

    Deck::default().par_sample::<7, _>(tasks, samples_per_task, |task_id, hand| {
        if let Ok(best) = best_hand(hand) {
            task_counters[task_id][best.category() as usize].fetch_add(1, Ordering::Relaxed);
        }
    });

    let elapsed = now.elapsed().as_secs_f64();

    let counts = HandCategory::categories()
        .map(|category| {
            let count = task_counters
                .iter()
                .map(|counters| counters[category as usize].load(Ordering::Relaxed))
                .sum::<u64>();
            (category, count)
        })
        .collect::<Vec<_>>();

    let total = counts.iter().map(|(_, count)| count).sum::<u64>();
    info!("Sampled {total} hands in {elapsed:.3}s with {tasks} tasks");

    let categories = counts
        .into_iter()
        .map(|(category, count)| CategoryCount {
            category,
            count,
            frequency: if total > 0 {
                count as f64 / total as f64
            } else {
                0.0
            },
        })
        .collect();

    StatsReport {
        samples: total,
        elapsed,
        categories,
    }
}
