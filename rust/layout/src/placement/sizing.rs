// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Target-size distribution: how many îlots of which footprint to attempt,
//! derived from `targetArea = usableArea * density / 100`.

use floorplan_core::{Bounds, ProcessedPlan};
use rand::Rng;

/// One size class in the target distribution: a footprint in mm plus its
/// relative weight in the requested population.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeSpec {
    pub width_mm: f64,
    pub height_mm: f64,
    pub weight: f64,
}

const BASE_CLASSES: [SizeSpec; 4] = [
    SizeSpec { width_mm: 1200.0, height_mm: 800.0, weight: 0.5 },
    SizeSpec { width_mm: 1600.0, height_mm: 1000.0, weight: 0.3 },
    SizeSpec { width_mm: 2000.0, height_mm: 1200.0, weight: 0.15 },
    SizeSpec { width_mm: 2400.0, height_mm: 1400.0, weight: 0.05 },
];

const MIN_DIM_MM: f64 = 80.0;
const MIN_HEIGHT_MM: f64 = 60.0;
/// Restricted-area density (m^2 of restricted area per m^2 of bounds) above
/// which îlot dimensions shrink by 15%.
const RESTRICTED_DENSITY_THRESHOLD: f64 = 0.15;
const MAX_ILOTS: usize = 25;

/// Computes the adjusted size classes for this plan, applying the
/// aspect-ratio, restricted-density, and door-count scaling rules before
/// clamping to the bounding-box-relative minimum/maximum.
pub fn size_distribution(plan: &ProcessedPlan) -> Vec<SizeSpec> {
    let bounds = &plan.bounds;
    let width_ratio = if bounds.height() > f64::EPSILON {
        bounds.width() / bounds.height()
    } else {
        1.0
    };

    let restricted_density = if bounds.area_m2() > f64::EPSILON {
        plan.restricted_areas
            .iter()
            .map(|r| r.area_m2())
            .sum::<f64>()
            / bounds.area_m2()
    } else {
        0.0
    };

    let mut width_scale = 1.0;
    let mut height_scale = 1.0;
    if width_ratio > 2.5 {
        width_scale *= 1.3;
        height_scale *= 0.8;
    } else if width_ratio < 1.0 / 2.5 {
        width_scale *= 0.8;
        height_scale *= 1.3;
    }

    let mut uniform_scale = 1.0;
    if restricted_density > RESTRICTED_DENSITY_THRESHOLD {
        uniform_scale *= 0.85;
    }
    if plan.doors.len() > 3 {
        width_scale *= 1.1;
    }

    clamp_classes(bounds, width_scale * uniform_scale, height_scale * uniform_scale)
}

fn clamp_classes(bounds: &Bounds, width_scale: f64, height_scale: f64) -> Vec<SizeSpec> {
    let max_width = (bounds.width() * 0.3).max(MIN_DIM_MM);
    let max_height = (bounds.height() * 0.3).max(MIN_HEIGHT_MM);

    BASE_CLASSES
        .iter()
        .map(|c| SizeSpec {
            width_mm: (c.width_mm * width_scale).clamp(MIN_DIM_MM, max_width),
            height_mm: (c.height_mm * height_scale).clamp(MIN_HEIGHT_MM, max_height),
            weight: c.weight,
        })
        .collect()
}

/// Total number of îlots to request: `min(floor(targetArea / smallest_area), 25)`.
pub fn target_count(plan: &ProcessedPlan, density_pct: f64, classes: &[SizeSpec]) -> usize {
    let target_area_m2 = plan.space_analysis.usable_area * density_pct / 100.0;
    let smallest_area_m2 = classes
        .iter()
        .map(|c| c.width_mm * c.height_mm / 1_000_000.0)
        .fold(f64::INFINITY, f64::min);

    if smallest_area_m2 <= 0.0 || !smallest_area_m2.is_finite() {
        return 0;
    }

    let count = (target_area_m2 / smallest_area_m2).floor().max(0.0) as usize;
    count.min(MAX_ILOTS)
}

/// Jitters a footprint by up to +/-15%, using the supplied RNG so the
/// whole placement run stays reproducible under a fixed seed.
pub fn jitter(spec: SizeSpec, rng: &mut impl Rng) -> (f64, f64) {
    let jitter_w = rng.gen_range(-0.15..=0.15);
    let jitter_h = rng.gen_range(-0.15..=0.15);
    (
        (spec.width_mm * (1.0 + jitter_w)).max(MIN_DIM_MM),
        (spec.height_mm * (1.0 + jitter_h)).max(MIN_HEIGHT_MM),
    )
}

/// Draws a weighted size class using `rng`.
pub fn pick_class<'a>(classes: &'a [SizeSpec], rng: &mut impl Rng) -> &'a SizeSpec {
    let total: f64 = classes.iter().map(|c| c.weight).sum();
    let mut pick = rng.gen_range(0.0..total.max(f64::EPSILON));
    for c in classes {
        if pick < c.weight {
            return c;
        }
        pick -= c.weight;
    }
    classes.last().expect("classes is never empty")
}
