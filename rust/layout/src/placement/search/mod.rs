// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Population/iteration search strategies (spec 4.4.4): evolutionary,
//! simulated annealing, particle swarm. All three share the fitness
//! function in [`super::fitness`] and the repair step in
//! [`super::validity::repair_non_overlapping`].
//!
//! Per-call scratch state (best-so-far solution, iteration counter) lives
//! in [`SearchState`], owned by the call; nothing here is process-wide.

pub mod annealing;
pub mod evolutionary;
pub mod swarm;

use crate::ilot::Ilot;
use crate::layout::PlaceOutcome;

/// Mutable scratch state for one search invocation.
pub struct SearchState {
    pub best: Vec<Ilot>,
    pub best_score: f64,
    pub iterations_run: u32,
    pub outcome: PlaceOutcome,
}

impl SearchState {
    pub fn new(initial: Vec<Ilot>, initial_score: f64) -> Self {
        Self {
            best: initial,
            best_score: initial_score,
            iterations_run: 0,
            outcome: PlaceOutcome::Completed,
        }
    }

    pub fn consider(&mut self, candidate: Vec<Ilot>, score: f64) {
        if score > self.best_score {
            self.best = candidate;
            self.best_score = score;
        }
    }
}

/// Population variance, used by the evolutionary strategy's convergence
/// check (spec 4.4.4: "variance over last 10 best-scores <
/// convergenceThreshold").
pub(super) fn variance(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64
}
