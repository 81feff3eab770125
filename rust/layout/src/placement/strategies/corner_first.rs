// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Corner-first strategy: attempts each of the four corners, in sequence,
//! at `min_clearance` margin. Deterministic and necessarily sparse — this
//! strategy alone cannot reach a high density; it exists as a named
//! entry point and as a seed solution for the evolutionary strategy's
//! diverse initial population.

use floorplan_core::{ProcessedPlan, Rect};

use crate::ilot::Ilot;
use crate::placement::sizing::SizeSpec;

use super::place_from_candidates;

pub fn place(
    plan: &ProcessedPlan,
    classes: &[SizeSpec],
    count: usize,
    min_clearance: f64,
) -> Vec<Ilot> {
    if classes.is_empty() {
        return Vec::new();
    }

    let bounds = plan.bounds.as_rect();
    let corners: Vec<Rect> = (0..4)
        .map(|i| {
            let spec = classes[i % classes.len()];
            let (x, y) = match i {
                0 => (bounds.min_x() + min_clearance, bounds.min_y() + min_clearance),
                1 => (bounds.max_x() - min_clearance - spec.width_mm, bounds.min_y() + min_clearance),
                2 => (bounds.min_x() + min_clearance, bounds.max_y() - min_clearance - spec.height_mm),
                _ => (
                    bounds.max_x() - min_clearance - spec.width_mm,
                    bounds.max_y() - min_clearance - spec.height_mm,
                ),
            };
            Rect::new(x, y, spec.width_mm, spec.height_mm)
        })
        .collect();

    place_from_candidates(plan, classes, count.min(4), min_clearance, corners.into_iter(), 0)
}
