// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// ```bash
// $ cargo r --release --features=parallel --example par_sample7
// ```

use std::{
    sync::atomic::{AtomicU64, Ordering},
    time::Instant,
};

use showdown_eval::*;

fn main() {
    // Select the best hand of 4M random 7-cards hands with 4 parallel tasks.
    const NUM_TASKS: usize = 4;
    const SAMPLES_PER_TASK: usize = 1_000_000;

    // Create per task counters to avoid contention and boost performance.
    let task_counters = (0..NUM_TASKS)
        .map(|_| {
            (0..HandCategory::COUNT)
                .map(|_| AtomicU64::new(0))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    let now = Instant::now();

    Deck::default().par_sample::<7, _>(NUM_TASKS, SAMPLES_PER_TASK, |task_id, hand| {
        if let Ok(best) = best_hand(hand) {
            let counters = &task_counters[task_id];
            counters[best.category() as usize].fetch_add(1, Ordering::Relaxed);
        }
    });

    let elapsed = now.elapsed().as_secs_f64();

    // Aggregate counters.
    let agg = (0..HandCategory::COUNT)
        .map(|c| {
            task_counters
                .iter()
                .map(|counts| counts[c].load(Ordering::Relaxed))
                .sum()
        })
        .collect::<Vec<u64>>();

    let total = agg.iter().sum::<u64>();
    println!("Total hands      {total}");
    println!("Elapsed:         {:.3}s", elapsed);
    println!("Hands/sec:       {:.0}\n", total as f64 / elapsed);

    for category in HandCategory::categories() {
        let freq = agg[category as usize] as f64 / total as f64;
        let label = format!("{category}:");
        println!("{label:<17}{:>6.3}%", freq * 100.0);
    }
}
