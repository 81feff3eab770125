// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Îlot placement engine (spec 4.4): picks a target size distribution and
//! count from the plan's usable area and the requested density, then
//! dispatches to whichever strategy [`crate::settings::Algorithm`] names.

pub mod fitness;
pub mod sizing;
pub mod strategies;

pub mod search;
pub mod validity;

use floorplan_core::ProcessedPlan;

use crate::cancel::CancelToken;
use crate::error::{Error, PlaceError};
use crate::ilot::Ilot;
use crate::layout::{Layout, LayoutMetrics, PlaceOutcome};
use crate::settings::{Algorithm, Settings};

/// Places îlots against `plan` under `settings`, returning a ready-to-route
/// [`Layout`]. Discards the [`PlaceOutcome`]; use [`place_ex`] if the
/// caller needs to tell a converged run from a cancelled or timed-out one.
pub fn place(plan: &ProcessedPlan, settings: &Settings, cancel: CancelToken) -> Result<Layout, Error> {
    place_ex(plan, settings, cancel).map(|(layout, _)| layout).map_err(Error::Place)
}

/// Places îlots against `plan` under `settings`, also reporting how the run
/// ended. The returned [`Layout`] always respects every placement
/// invariant (non-overlap, clearance, bounds) regardless of the outcome.
pub fn place_ex(
    plan: &ProcessedPlan,
    settings: &Settings,
    cancel: CancelToken,
) -> Result<(Layout, PlaceOutcome), PlaceError> {
    settings.validate().map_err(PlaceError::InvalidSettings)?;

    let classes = sizing::size_distribution(plan);
    if classes.is_empty() {
        return Err(PlaceError::Infeasible);
    }

    let count = sizing::target_count(plan, settings.density, &classes);
    if count == 0 {
        return Ok((Layout::empty(), PlaceOutcome::Completed));
    }

    let smallest = classes
        .iter()
        .min_by(|a, b| {
            (a.width_mm * a.height_mm)
                .partial_cmp(&(b.width_mm * b.height_mm))
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .copied()
        .expect("classes is non-empty");
    let probe = strategies::grid::place(
        plan,
        std::slice::from_ref(&smallest),
        1,
        settings.min_clearance,
        settings.corridor_width,
    );
    if probe.is_empty() {
        return Err(PlaceError::Infeasible);
    }

    let (ilots, mut outcome) = match settings.algorithm {
        Algorithm::Grid => (
            strategies::grid::place(plan, &classes, count, settings.min_clearance, settings.corridor_width),
            PlaceOutcome::Completed,
        ),
        Algorithm::Spiral => (
            strategies::spiral::place(plan, &classes, count, settings.min_clearance),
            PlaceOutcome::Completed,
        ),
        Algorithm::CornerFirst => (
            strategies::corner_first::place(plan, &classes, count, settings.min_clearance),
            PlaceOutcome::Completed,
        ),
        Algorithm::WallAligned => (
            strategies::wall_aligned::place(plan, &classes, count, settings.min_clearance),
            PlaceOutcome::Completed,
        ),
        Algorithm::Evolutionary => search::evolutionary::run(plan, settings, &classes, count, &cancel),
        Algorithm::Annealing => search::annealing::run(plan, settings, &classes, count, &cancel),
        Algorithm::Swarm => search::swarm::run(plan, settings, &classes, count, &cancel),
    };

    if outcome == PlaceOutcome::Cancelled && !cancel.is_explicitly_cancelled() && cancel.is_past_deadline() {
        outcome = PlaceOutcome::TimedOut;
    }

    Ok((build_layout(plan, settings, ilots), outcome))
}

fn build_layout(plan: &ProcessedPlan, settings: &Settings, ilots: Vec<Ilot>) -> Layout {
    let scores = fitness::score(&ilots, plan, settings.optimization_target, settings.min_clearance, 0);
    let ilot_count = ilots.len();
    let total_ilot_area_m2: f64 = ilots.iter().map(Ilot::area_m2).sum();
    let occupancy = if plan.space_analysis.usable_area > f64::EPSILON {
        (total_ilot_area_m2 / plan.space_analysis.usable_area).min(1.0)
    } else {
        0.0
    };

    Layout {
        ilots,
        corridors: Vec::new(),
        metrics: LayoutMetrics {
            ilot_count,
            total_ilot_area_m2,
            total_corridor_length_mm: 0.0,
            occupancy,
            accessibility_score: scores.accessibility,
            fire_compliance_score: scores.fire_compliance,
            flow_efficiency_score: scores.flow_efficiency,
            overall_score: scores.overall,
        },
    }
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
    fn grid_algorithm_places_and_completes() {
        let plan = sample_plan();
        let settings = Settings::builder().algorithm(Algorithm::Grid).build();
        let (layout, outcome) = place_ex(&plan, &settings, CancelToken::new()).unwrap();
        assert_eq!(outcome, PlaceOutcome::Completed);
        assert!(!layout.ilots.is_empty());
        assert_eq!(layout.metrics.ilot_count, layout.ilots.len());
    }

    #[test]
    fn evolutionary_algorithm_completes() {
        let plan = sample_plan();
        let settings = Settings::builder()
            .algorithm(Algorithm::Evolutionary)
            .max_iterations(5)
            .build();
        let (layout, outcome) = place_ex(&plan, &settings, CancelToken::new()).unwrap();
        assert_eq!(outcome, PlaceOutcome::Completed);
        assert!(!layout.ilots.is_empty());
    }

    #[test]
    fn infeasible_bounds_report_infeasible() {
        // A long, very thin strip: area is large enough to request a
        // positive count, but no clamped size class is short enough to
        // clear `min_clearance` on both sides of the strip's height.
        let bounds = Bounds::new(0.0, 0.0, 100_000.0, 150.0);
        let plan = ProcessedPlan {
            walls: Vec::new(),
            doors: Vec::new(),
            windows: Vec::new(),
            restricted_areas: Vec::new(),
            bounds,
            space_analysis: SpaceAnalysis::compute(&bounds, &[], &[]),
        };
        let settings = Settings::builder().build();
        let err = place_ex(&plan, &settings, CancelToken::new()).unwrap_err();
        assert_eq!(err, PlaceError::Infeasible);
    }
}
