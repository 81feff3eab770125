// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Placement validity check (spec 4.4.2): a candidate rect is valid iff it
//! sits inside the plan bounds with margin, doesn't overlap any placed
//! îlot or restricted area within `min_clearance`, and keeps its distance
//! from every door's swing radius plus clearance.

use floorplan_core::{rect_distance, rect_overlap, ProcessedPlan, Rect};

use crate::ilot::Ilot;

/// True iff `candidate` may be placed given the îlots already placed in
/// `placed`, against `plan`, under `min_clearance`.
pub fn is_valid(
    candidate: &Rect,
    placed: &[Ilot],
    plan: &ProcessedPlan,
    min_clearance: f64,
) -> bool {
    let bounds_rect = plan.bounds.as_rect();
    if !bounds_rect.contains_with_margin(candidate, min_clearance) {
        return false;
    }

    for ilot in placed {
        if rect_overlap(candidate, &ilot.rect, min_clearance) {
            return false;
        }
    }

    for restricted in &plan.restricted_areas {
        if rect_overlap(candidate, &restricted.bounds, min_clearance) {
            return false;
        }
    }

    for door in &plan.doors {
        let door_rect = Rect::new(door.center.x, door.center.y, 0.0, 0.0);
        if rect_distance(candidate, &door_rect) < door.radius + min_clearance {
            return false;
        }
    }

    true
}

/// Greedily rebuilds a collision-free îlot set from a candidate rect
/// sequence, inserting each rect only if it remains valid against every
/// rect already accepted. Used by the search strategies to repair a
/// crossover/mutation result back into an invariant-respecting layout
/// without re-deriving genetic-operator-specific validity logic.
pub fn repair_non_overlapping(
    candidates: impl IntoIterator<Item = Rect>,
    plan: &ProcessedPlan,
    min_clearance: f64,
) -> Vec<Ilot> {
    let mut accepted = Vec::new();
    for rect in candidates {
        if is_valid(&rect, &accepted, plan, min_clearance) {
            let id = accepted.len() as u32;
            accepted.push(Ilot::new(id, rect));
        }
    }
    accepted
}
