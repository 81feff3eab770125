// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Simulated annealing (spec 4.4.4): starts from a grid solution, proposes
//! a neighbor by nudging one îlot by up to +/-300 mm per step, accepts
//! improving neighbors unconditionally and worsening ones with probability
//! `exp(delta / T)`. `T` starts at 1000, decays by 0.95 per step, and the
//! run stops once `T < 1`.

use floorplan_core::ProcessedPlan;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::cancel::CancelToken;
use crate::ilot::Ilot;
use crate::layout::PlaceOutcome;
use crate::placement::fitness;
use crate::placement::sizing::SizeSpec;
use crate::placement::strategies::grid;
use crate::placement::validity::repair_non_overlapping;
use crate::settings::Settings;

use super::SearchState;

const INITIAL_TEMPERATURE: f64 = 1000.0;
const COOLING_RATE: f64 = 0.95;
const MIN_TEMPERATURE: f64 = 1.0;
const NUDGE_MM: f64 = 300.0;

pub fn run(
    plan: &ProcessedPlan,
    settings: &Settings,
    classes: &[SizeSpec],
    count: usize,
    cancel: &CancelToken,
) -> (Vec<Ilot>, PlaceOutcome) {
    let mut rng = SmallRng::seed_from_u64(settings.seed);

    let mut current = grid::place(plan, classes, count, settings.min_clearance, settings.corridor_width);
    let mut current_score =
        fitness::score(&current, plan, settings.optimization_target, settings.min_clearance, 0).overall;

    let mut state = SearchState::new(current.clone(), current_score);

    let mut temperature = INITIAL_TEMPERATURE;
    let mut step = 0u32;

    while temperature >= MIN_TEMPERATURE && step < settings.max_iterations {
        if cancel.is_triggered() {
            state.outcome = PlaceOutcome::Cancelled;
            break;
        }

        let neighbor_rects: Vec<floorplan_core::Rect> = if current.is_empty() {
            Vec::new()
        } else {
            let mut rects: Vec<floorplan_core::Rect> = current.iter().map(|i| i.rect).collect();
            let idx = rng.gen_range(0..rects.len());
            rects[idx].x += rng.gen_range(-NUDGE_MM..=NUDGE_MM);
            rects[idx].y += rng.gen_range(-NUDGE_MM..=NUDGE_MM);
            rects
        };
        let neighbor = repair_non_overlapping(neighbor_rects, plan, settings.min_clearance);
        let neighbor_score =
            fitness::score(&neighbor, plan, settings.optimization_target, settings.min_clearance, 0).overall;

        let delta = neighbor_score - current_score;
        let accept = delta > 0.0 || rng.gen::<f64>() < (delta / temperature).exp();

        if accept {
            current = neighbor;
            current_score = neighbor_score;
            state.consider(current.clone(), current_score);
        }

        temperature *= COOLING_RATE;
        step += 1;
        state.iterations_run = step;
    }

    (state.best, state.outcome)
}
