// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Wall-aligned strategy: iterate walls sorted by length descending,
//! attempt a flush placement along each wall at `min_clearance`. Îlots
//! never rotate off-axis, so a wall's own orientation (horizontal or
//! vertical) picks which side of it the candidate sits on.

use floorplan_core::{rect_center, segment_length, ProcessedPlan, Rect};

use crate::ilot::Ilot;
use crate::placement::sizing::SizeSpec;

use super::place_from_candidates;

pub fn place(
    plan: &ProcessedPlan,
    classes: &[SizeSpec],
    count: usize,
    min_clearance: f64,
) -> Vec<Ilot> {
    if classes.is_empty() || plan.walls.is_empty() {
        return Vec::new();
    }

    let mut walls: Vec<&floorplan_core::Wall> = plan.walls.iter().collect();
    walls.sort_by(|a, b| {
        segment_length(&b.segment)
            .partial_cmp(&segment_length(&a.segment))
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let center = rect_center(&plan.bounds.as_rect());

    let candidates = walls.into_iter().enumerate().map(move |(i, wall)| {
        let spec = classes[i % classes.len()];
        let seg = wall.segment;
        let dx = (seg.end.x - seg.start.x).abs();
        let dy = (seg.end.y - seg.start.y).abs();
        let mid_x = (seg.start.x + seg.end.x) / 2.0;
        let mid_y = (seg.start.y + seg.end.y) / 2.0;

        if dx >= dy {
            let wall_y = seg.start.y;
            let y = if wall_y < center.y {
                wall_y + min_clearance
            } else {
                wall_y - min_clearance - spec.height_mm
            };
            Rect::new(mid_x - spec.width_mm / 2.0, y, spec.width_mm, spec.height_mm)
        } else {
            let wall_x = seg.start.x;
            let x = if wall_x < center.x {
                wall_x + min_clearance
            } else {
                wall_x - min_clearance - spec.width_mm
            };
            Rect::new(x, mid_y - spec.height_mm / 2.0, spec.width_mm, spec.height_mm)
        }
    });

    place_from_candidates(plan, classes, count, min_clearance, candidates, 0)
}
