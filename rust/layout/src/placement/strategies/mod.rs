// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Deterministic placement strategies (spec 4.4.3). Each scans a fixed
//! candidate order and greedily accepts the first valid rect it finds,
//! using [`super::validity::is_valid`] for every candidate.

pub mod corner_first;
pub mod grid;
pub mod spiral;
pub mod wall_aligned;

use floorplan_core::ProcessedPlan;

use crate::ilot::Ilot;
use crate::placement::sizing::SizeSpec;
use crate::placement::validity::is_valid;

/// Shared driver: walks `candidates` in order, testing each against the
/// accumulating `placed` set, stopping once `count` îlots are placed or
/// the candidate source is exhausted.
pub(super) fn place_from_candidates(
    plan: &ProcessedPlan,
    classes: &[SizeSpec],
    count: usize,
    min_clearance: f64,
    mut candidates: impl Iterator<Item = floorplan_core::Rect>,
    mut next_id: u32,
) -> Vec<Ilot> {
    let mut placed = Vec::new();
    if classes.is_empty() || count == 0 {
        return placed;
    }

    while placed.len() < count {
        let Some(candidate) = candidates.next() else {
            break;
        };
        if is_valid(&candidate, &placed, plan, min_clearance) {
            placed.push(Ilot::new(next_id, candidate));
            next_id += 1;
        }
    }

    placed
}
