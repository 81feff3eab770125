// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Grid strategy: left-to-right, top-to-bottom scan, row spacing
//! `size.height + corridor_width`.

use floorplan_core::{ProcessedPlan, Rect};

use crate::ilot::Ilot;
use crate::placement::sizing::SizeSpec;

use super::place_from_candidates;

pub fn place(
    plan: &ProcessedPlan,
    classes: &[SizeSpec],
    count: usize,
    min_clearance: f64,
    corridor_width: f64,
) -> Vec<Ilot> {
    if classes.is_empty() {
        return Vec::new();
    }

    let bounds = plan.bounds.as_rect();
    let candidates = GridCandidates {
        classes: classes.to_vec(),
        x: bounds.min_x() + min_clearance,
        y: bounds.min_y() + min_clearance,
        min_x: bounds.min_x() + min_clearance,
        max_x: bounds.max_x() - min_clearance,
        max_y: bounds.max_y() - min_clearance,
        min_clearance,
        corridor_width,
        class_idx: 0,
        row_height: classes[0].height_mm,
        done: false,
    };

    place_from_candidates(plan, classes, count, min_clearance, candidates, 0)
}

/// Cycles through the size classes column by column, wrapping to the next
/// row once `max_x` is reached, and stopping once `max_y` is exceeded.
struct GridCandidates {
    classes: Vec<SizeSpec>,
    x: f64,
    y: f64,
    min_x: f64,
    max_x: f64,
    max_y: f64,
    min_clearance: f64,
    corridor_width: f64,
    class_idx: usize,
    row_height: f64,
    done: bool,
}

impl GridCandidates {
    fn current_spec(&self) -> SizeSpec {
        self.classes[self.class_idx % self.classes.len()]
    }

    fn advance_row(&mut self) {
        self.y += self.row_height + self.corridor_width;
        self.x = self.min_x;
        self.row_height = self.current_spec().height_mm;
    }
}

impl Iterator for GridCandidates {
    type Item = Rect;

    fn next(&mut self) -> Option<Rect> {
        if self.done {
            return None;
        }

        loop {
            if self.y + self.row_height > self.max_y {
                self.done = true;
                return None;
            }

            let spec = self.current_spec();
            if self.x + spec.width_mm > self.max_x {
                self.advance_row();
                continue;
            }

            let rect = Rect::new(self.x, self.y, spec.width_mm, spec.height_mm);
            self.x += spec.width_mm + self.min_clearance;
            self.class_idx += 1;
            return Some(rect);
        }
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
    fn places_requested_count_when_space_allows() {
        let plan = sample_plan();
        let classes = vec![SizeSpec { width_mm: 1200.0, height_mm: 800.0, weight: 1.0 }];
        let placed = place(&plan, &classes, 10, 80.0, 1200.0);
        assert_eq!(placed.len(), 10);
    }

    #[test]
    fn placed_ilots_stay_inside_bounds_margin() {
        let plan = sample_plan();
        let classes = vec![SizeSpec { width_mm: 1200.0, height_mm: 800.0, weight: 1.0 }];
        let placed = place(&plan, &classes, 10, 80.0, 1200.0);
        for ilot in placed {
            assert!(ilot.rect.min_x() >= 80.0 - 1e-6);
            assert!(ilot.rect.max_x() <= 9920.0 + 1e-6);
        }
    }
}
