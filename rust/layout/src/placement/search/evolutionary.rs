// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Evolutionary strategy (spec 4.4.4): population 20-40, generations
//! 50-80 (capped by `settings.max_iterations`), elitism + tournament
//! selection + crossover + mutation, stopping on convergence.

use floorplan_core::{ProcessedPlan, Rect};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::cancel::CancelToken;
use crate::ilot::Ilot;
use crate::layout::PlaceOutcome;
use crate::placement::fitness;
use crate::placement::sizing::SizeSpec;
use crate::placement::strategies::{corner_first, grid, spiral, wall_aligned};
use crate::placement::validity::repair_non_overlapping;
use crate::settings::Settings;

use super::{variance, SearchState};

const POPULATION_SIZE: usize = 24;
const ELITE_FRACTION: f64 = 0.2;
const TOURNAMENT_SIZE: usize = 3;
const MUTATION_JITTER_MM: f64 = 300.0;
const CONVERGENCE_WINDOW: usize = 10;

pub fn run(
    plan: &ProcessedPlan,
    settings: &Settings,
    classes: &[SizeSpec],
    count: usize,
    cancel: &CancelToken,
) -> (Vec<Ilot>, PlaceOutcome) {
    let mut rng = SmallRng::seed_from_u64(settings.seed);

    let mut population: Vec<Vec<Ilot>> = Vec::with_capacity(POPULATION_SIZE);
    population.push(grid::place(plan, classes, count, settings.min_clearance, settings.corridor_width));
    population.push(spiral::place(plan, classes, count, settings.min_clearance));
    population.push(corner_first::place(plan, classes, count, settings.min_clearance));
    population.push(wall_aligned::place(plan, classes, count, settings.min_clearance));

    while population.len() < POPULATION_SIZE {
        let base = &population[rng.gen_range(0..population.len())];
        let mutated = mutate_rects(base, &mut rng);
        population.push(repair_non_overlapping(mutated, plan, settings.min_clearance));
    }

    let mut state = SearchState::new(Vec::new(), f64::MIN);
    let mut score_history: Vec<f64> = Vec::new();
    let elite_count = ((POPULATION_SIZE as f64) * ELITE_FRACTION).ceil().max(1.0) as usize;

    for _ in 0..settings.max_iterations {
        if cancel.is_triggered() {
            state.outcome = PlaceOutcome::Cancelled;
            break;
        }

        let mut scored: Vec<(f64, usize)> = population
            .iter()
            .enumerate()
            .map(|(i, ind)| {
                (
                    fitness::score(ind, plan, settings.optimization_target, settings.min_clearance, 0).overall,
                    i,
                )
            })
            .collect();
        scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));

        let best_score = scored[0].0;
        state.consider(population[scored[0].1].clone(), best_score);
        score_history.push(best_score);
        if score_history.len() > CONVERGENCE_WINDOW {
            score_history.remove(0);
        }

        state.iterations_run += 1;

        if score_history.len() == CONVERGENCE_WINDOW
            && variance(&score_history) < settings.convergence_threshold
        {
            break;
        }

        let mut next_gen: Vec<Vec<Ilot>> = scored
            .iter()
            .take(elite_count)
            .map(|(_, i)| population[*i].clone())
            .collect();

        while next_gen.len() < POPULATION_SIZE {
            let parent_a = tournament_select(&population, &scored, &mut rng);
            let parent_b = tournament_select(&population, &scored, &mut rng);
            let child_rects = crossover(parent_a, parent_b, &mut rng);
            let child_rects = mutate_rects_single(&child_rects, &mut rng);
            next_gen.push(repair_non_overlapping(child_rects, plan, settings.min_clearance));
        }

        population = next_gen;
    }

    if state.best.is_empty() && !population.is_empty() {
        let best = population
            .iter()
            .max_by(|a, b| {
                let sa = fitness::score(a, plan, settings.optimization_target, settings.min_clearance, 0).overall;
                let sb = fitness::score(b, plan, settings.optimization_target, settings.min_clearance, 0).overall;
                sa.partial_cmp(&sb).unwrap_or(std::cmp::Ordering::Equal)
            })
            .cloned()
            .unwrap_or_default();
        state.best = best;
    }

    (state.best, state.outcome)
}

fn tournament_select<'a>(
    population: &'a [Vec<Ilot>],
    scored: &[(f64, usize)],
    rng: &mut SmallRng,
) -> &'a [Ilot] {
    let mut best: Option<(f64, usize)> = None;
    for _ in 0..TOURNAMENT_SIZE {
        let idx = rng.gen_range(0..population.len());
        let score = scored.iter().find(|(_, i)| *i == idx).map(|(s, _)| *s).unwrap_or(f64::MIN);
        if best.map(|(b, _)| score > b).unwrap_or(true) {
            best = Some((score, idx));
        }
    }
    &population[best.map(|(_, i)| i).unwrap_or(0)]
}

fn crossover(a: &[Ilot], b: &[Ilot], rng: &mut SmallRng) -> Vec<Rect> {
    if a.is_empty() && b.is_empty() {
        return Vec::new();
    }
    let cut = rng.gen_range(0..=a.len());
    a.iter()
        .take(cut)
        .map(|i| i.rect)
        .chain(b.iter().skip(cut.min(b.len())).map(|i| i.rect))
        .collect()
}

fn mutate_rects_single(rects: &[Rect], rng: &mut SmallRng) -> Vec<Rect> {
    let mut out = rects.to_vec();
    if out.is_empty() {
        return out;
    }
    let idx = rng.gen_range(0..out.len());
    out[idx].x += rng.gen_range(-MUTATION_JITTER_MM..=MUTATION_JITTER_MM);
    out[idx].y += rng.gen_range(-MUTATION_JITTER_MM..=MUTATION_JITTER_MM);
    out
}

fn mutate_rects(ilots: &[Ilot], rng: &mut SmallRng) -> Vec<Rect> {
    mutate_rects_single(&ilots.iter().map(|i| i.rect).collect::<Vec<_>>(), rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use floorplan_core::{Bounds, SpaceAnalysis};

    fn sample_plan() -> ProcessedPlan {
        let bounds = Bounds::new(0.0, 0.0, 10000.0, 8000.0);
        ProcessedPlan {
            walls: Vec::new(),
            doors: Vec::new(),
            windows: Vec::new(),
            restricted_areas: Vec::new(),
            bounds,
            space_analysis: SpaceAnalysis::compute(&bounds, &[], &[]),
        }
    }

    #[test]
    fn runs_without_overlap() {
        let plan = sample_plan();
        let classes = vec![SizeSpec { width_mm: 1200.0, height_mm: 800.0, weight: 1.0 }];
        let settings = Settings::builder().max_iterations(5).build();
        let cancel = CancelToken::new();
        let (ilots, outcome) = run(&plan, &settings, &classes, 10, &cancel);
        assert_eq!(outcome, PlaceOutcome::Completed);
        for i in 0..ilots.len() {
            for j in (i + 1)..ilots.len() {
                assert!(!floorplan_core::rect_overlap(&ilots[i].rect, &ilots[j].rect, settings.min_clearance));
            }
        }
    }

    #[test]
    fn same_seed_is_deterministic() {
        let plan = sample_plan();
        let classes = vec![SizeSpec { width_mm: 1200.0, height_mm: 800.0, weight: 1.0 }];
        let settings = Settings::builder().max_iterations(5).seed(7).build();
        let cancel = CancelToken::new();
        let (a, _) = run(&plan, &settings, &classes, 10, &cancel);
        let (b, _) = run(&plan, &settings, &classes, 10, &cancel);
        assert_eq!(a, b);
    }

    #[test]
    fn cancellation_returns_valid_layout() {
        let plan = sample_plan();
        let classes = vec![SizeSpec { width_mm: 1200.0, height_mm: 800.0, weight: 1.0 }];
        let settings = Settings::builder().max_iterations(1000).build();
        let cancel = CancelToken::new();
        cancel.cancel();
        let (ilots, outcome) = run(&plan, &settings, &classes, 10, &cancel);
        assert_eq!(outcome, PlaceOutcome::Cancelled);
        for i in 0..ilots.len() {
            for j in (i + 1)..ilots.len() {
                assert!(!floorplan_core::rect_overlap(&ilots[i].rect, &ilots[j].rect, settings.min_clearance));
            }
        }
    }
}
