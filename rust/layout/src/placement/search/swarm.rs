// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Particle swarm optimization (spec 4.4.4): 30 particles, each a position
//! vector of concatenated îlot (x, y) pairs, updated with inertia 0.7 and
//! cognitive/social coefficients 1.5/1.5, for up to 200 iterations (capped
//! by `settings.max_iterations`).

use floorplan_core::{ProcessedPlan, Rect};
use nalgebra::DVector;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use crate::cancel::CancelToken;
use crate::ilot::Ilot;
use crate::layout::PlaceOutcome;
use crate::placement::fitness;
use crate::placement::sizing::SizeSpec;
use crate::placement::validity::repair_non_overlapping;
use crate::settings::Settings;

use super::SearchState;

const SWARM_SIZE: usize = 30;
const MAX_ITERATIONS: u32 = 200;
const INERTIA: f64 = 0.7;
const COGNITIVE: f64 = 1.5;
const SOCIAL: f64 = 1.5;

struct Particle {
    position: DVector<f64>,
    velocity: DVector<f64>,
    best_position: DVector<f64>,
    best_score: f64,
}

pub fn run(
    plan: &ProcessedPlan,
    settings: &Settings,
    classes: &[SizeSpec],
    count: usize,
    cancel: &CancelToken,
) -> (Vec<Ilot>, PlaceOutcome) {
    if count == 0 || classes.is_empty() {
        return (Vec::new(), PlaceOutcome::Completed);
    }

    let bounds = plan.bounds.as_rect();
    let dims = count * 2;
    let mut rng = SmallRng::seed_from_u64(settings.seed);

    let mut particles: Vec<Particle> = (0..SWARM_SIZE)
        .map(|_| random_particle(&bounds, dims, &mut rng))
        .collect();

    let score_of = |position: &DVector<f64>| -> (f64, Vec<Ilot>) {
        let rects = position_to_rects(position, classes, &bounds);
        let ilots = repair_non_overlapping(rects, plan, settings.min_clearance);
        let score = fitness::score(&ilots, plan, settings.optimization_target, settings.min_clearance, 0).overall;
        (score, ilots)
    };

    let mut global_best_position = particles[0].position.clone();
    let mut global_best_ilots: Vec<Ilot> = Vec::new();
    let mut global_best_score = f64::MIN;

    let initial_scores: Vec<(f64, Vec<Ilot>)> = particles.par_iter().map(|p| score_of(&p.position)).collect();
    for (particle, (score, _)) in particles.iter_mut().zip(initial_scores.iter()) {
        particle.best_position = particle.position.clone();
        particle.best_score = *score;
    }
    if let Some((idx, (score, ilots))) = initial_scores
        .iter()
        .enumerate()
        .max_by(|a, b| a.1 .0.partial_cmp(&b.1 .0).unwrap_or(std::cmp::Ordering::Equal))
    {
        global_best_score = *score;
        global_best_position = particles[idx].position.clone();
        global_best_ilots = ilots.clone();
    }

    let mut state = SearchState::new(global_best_ilots.clone(), global_best_score);
    let max_iterations = MAX_ITERATIONS.min(settings.max_iterations);

    for _ in 0..max_iterations {
        if cancel.is_triggered() {
            state.outcome = PlaceOutcome::Cancelled;
            break;
        }

        for particle in particles.iter_mut() {
            for d in 0..dims {
                let r1: f64 = rng.gen();
                let r2: f64 = rng.gen();
                let cognitive = COGNITIVE * r1 * (particle.best_position[d] - particle.position[d]);
                let social = SOCIAL * r2 * (global_best_position[d] - particle.position[d]);
                particle.velocity[d] = INERTIA * particle.velocity[d] + cognitive + social;
                particle.position[d] += particle.velocity[d];
            }
            clamp_position(&mut particle.position, &bounds, dims);
        }

        let scores: Vec<(f64, Vec<Ilot>)> = particles.par_iter().map(|p| score_of(&p.position)).collect();
        for (particle, (score, _)) in particles.iter_mut().zip(scores.iter()) {
            if *score > particle.best_score {
                particle.best_score = *score;
                particle.best_position = particle.position.clone();
            }
        }

        if let Some((idx, (score, ilots))) = scores
            .iter()
            .enumerate()
            .max_by(|a, b| a.1 .0.partial_cmp(&b.1 .0).unwrap_or(std::cmp::Ordering::Equal))
        {
            if *score > global_best_score {
                global_best_score = *score;
                global_best_position = particles[idx].position.clone();
                global_best_ilots = ilots.clone();
                state.consider(global_best_ilots.clone(), global_best_score);
            }
        }

        state.iterations_run += 1;
    }

    (state.best, state.outcome)
}

fn random_particle(bounds: &Rect, dims: usize, rng: &mut SmallRng) -> Particle {
    let mut position = DVector::zeros(dims);
    for d in (0..dims).step_by(2) {
        position[d] = rng.gen_range(bounds.min_x()..bounds.max_x());
        position[d + 1] = rng.gen_range(bounds.min_y()..bounds.max_y());
    }
    let velocity = DVector::zeros(dims);
    Particle { position: position.clone(), velocity, best_position: position, best_score: f64::MIN }
}

fn clamp_position(position: &mut DVector<f64>, bounds: &Rect, dims: usize) {
    for d in (0..dims).step_by(2) {
        position[d] = position[d].clamp(bounds.min_x(), bounds.max_x());
        position[d + 1] = position[d + 1].clamp(bounds.min_y(), bounds.max_y());
    }
}

fn position_to_rects(position: &DVector<f64>, classes: &[SizeSpec], bounds: &Rect) -> Vec<Rect> {
    let mut rects = Vec::with_capacity(position.len() / 2);
    for (i, d) in (0..position.len()).step_by(2).enumerate() {
        let spec = classes[i % classes.len()];
        let x = position[d].clamp(bounds.min_x(), bounds.max_x() - spec.width_mm);
        let y = position[d + 1].clamp(bounds.min_y(), bounds.max_y() - spec.height_mm);
        rects.push(Rect::new(x, y, spec.width_mm, spec.height_mm));
    }
    rects
}
