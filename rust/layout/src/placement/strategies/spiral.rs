// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Spiral ("center out") strategy: candidates along an Archimedean spiral
//! from the bounds' center, radius stepping 80 mm per full turn at 22.5°
//! angular resolution.

use floorplan_core::{rect_center, ProcessedPlan, Rect};

use crate::ilot::Ilot;
use crate::placement::sizing::SizeSpec;

use super::place_from_candidates;

const ANGLE_STEP_DEG: f64 = 22.5;
const RADIUS_STEP_PER_TURN_MM: f64 = 80.0;
const STEPS_PER_TURN: u32 = (360.0 / ANGLE_STEP_DEG) as u32;

pub fn place(
    plan: &ProcessedPlan,
    classes: &[SizeSpec],
    count: usize,
    min_clearance: f64,
) -> Vec<Ilot> {
    if classes.is_empty() {
        return Vec::new();
    }

    let center = rect_center(&plan.bounds.as_rect());
    let max_radius = plan.bounds.width().hypot(plan.bounds.height());
    let candidates = SpiralCandidates {
        classes: classes.to_vec(),
        center,
        max_radius,
        step: 0,
        class_idx: 0,
    };

    place_from_candidates(plan, classes, count, min_clearance, candidates, 0)
}

struct SpiralCandidates {
    classes: Vec<SizeSpec>,
    center: floorplan_core::Point,
    /// Stop once the spiral radius exceeds this; the candidate space is
    /// finite even though the spiral formula itself is not.
    max_radius: f64,
    step: u32,
    class_idx: usize,
}

impl Iterator for SpiralCandidates {
    type Item = Rect;

    fn next(&mut self) -> Option<Rect> {
        let angle_deg = self.step as f64 * ANGLE_STEP_DEG;
        let turns = self.step as f64 / STEPS_PER_TURN as f64;
        let radius = turns * RADIUS_STEP_PER_TURN_MM;

        if radius > self.max_radius {
            return None;
        }

        let angle_rad = angle_deg.to_radians();
        let spec = self.classes[self.class_idx % self.classes.len()];

        let cx = self.center.x + radius * angle_rad.cos() - spec.width_mm / 2.0;
        let cy = self.center.y + radius * angle_rad.sin() - spec.height_mm / 2.0;

        self.step += 1;
        self.class_idx += 1;

        Some(Rect::new(cx, cy, spec.width_mm, spec.height_mm))
    }
}
