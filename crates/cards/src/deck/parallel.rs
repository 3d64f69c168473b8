// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Parallel hand iteration.
use std::thread;

use super::{Card, Deck};
use crate::{Combinations, nck};

impl Deck {
    /// Parallel for each, calls the `f` closure for each K-cards hand.
    ///
    /// The closure takes an usize that is the task identifier (0..num_task)
    /// and a K-cards hand, each task visits a contiguous range of hands.
    ///
    /// Panics if num_tasks is zero.
    pub fn par_for_each<const K: usize, F>(&self, num_tasks: usize, f: F)
    where
        F: Fn(usize, &[Card; K]) + Send + Sync,
    {
        assert!(num_tasks > 0, "num_tasks must be positive");

        let num_hands = nck(self.cards.len(), K);
        let hands_per_task = num_hands.div_ceil(num_tasks);

        thread::scope(|s| {
            for task_id in 0..num_tasks {
                let start = task_id * hands_per_task;
                if start >= num_hands {
                    break;
                }

                let f = &f;
                s.spawn(move || {
                    Combinations::<Card, K>::starting_at(&self.cards, start)
                        .take(hands_per_task)
                        .for_each(|hand| f(task_id, &hand));
                });
            }
        });
    }

    /// Calls the given closure from `num_tasks` parallel tasks generating
    /// `samples_per_task` samples of K cards.
    ///
    /// Panics if num_tasks is zero.
    pub fn par_sample<const K: usize, F>(&self, num_tasks: usize, samples_per_task: usize, f: F)
    where
        F: Fn(usize, &[Card; K]) + Send + Sync,
    {
        assert!(num_tasks > 0, "num_tasks must be positive");

        if K > self.cards.len() {
            return;
        }

        thread::scope(|s| {
            for task_id in 0..num_tasks {
                let f = &f;
                s.spawn(move || {
                    let mut rng = rand::rng();
                    for _ in 0..samples_per_task {
                        if let Some(hand) = self.sample::<K, _>(&mut rng) {
                            f(task_id, &hand);
                        }
                    }
                });
            }
        });
    }
}
