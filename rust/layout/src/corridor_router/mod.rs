// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Corridor Router (spec 4.5): groups a [`Layout`]'s îlots into rows,
//! connects adjacent rows and doors with corridors, then deduplicates and
//! filters the result. Mirrors the teacher's split of `geometry::router`
//! into row/segment submodules instead of one monolithic function.

pub mod rows;
pub mod segments;

use floorplan_core::ProcessedPlan;
use tracing::instrument;

use crate::layout::Layout;

/// Routes corridors for an already-placed `layout`. Never fails: an empty
/// îlot set returns an empty corridor list (spec 4.5.5).
#[instrument(skip_all)]
pub fn route(plan: &ProcessedPlan, mut layout: Layout, corridor_width: f64) -> Layout {
    if layout.ilots.is_empty() {
        layout.metrics = layout.metrics.recompute(&layout.ilots, &[], plan.space_analysis.usable_area);
        layout.corridors = Vec::new();
        return layout;
    }

    let row_list = rows::group_rows(&layout.ilots);

    let mut next_id = 0u32;
    let mut corridors = segments::inter_row_corridors(&row_list, corridor_width, &mut next_id);
    corridors.extend(segments::door_connections(&layout.ilots, &plan.doors, corridor_width, &mut next_id));

    // Every emitted corridor already carries `corridor_width`, so this
    // filter only ever bites if a caller passes an inconsistent width; it
    // exists to enforce the spec's stated invariant explicitly rather than
    // relying on that never happening.
    let corridors = segments::dedup_and_filter(corridors, corridor_width);

    layout.metrics = layout.metrics.recompute(&layout.ilots, &corridors, plan.space_analysis.usable_area);
    layout.corridors = corridors;
    layout
}

#[cfg(test)]
mod tests {
    use super::*;
    use floorplan_core::{Bounds, Door, DoorSwing, Point, Rect, SpaceAnalysis};

    use crate::ilot::Ilot;
    use crate::layout::LayoutMetrics;
    use crate::placement::fitness;

    fn sample_plan(doors: Vec<Door>) -> ProcessedPlan {
        let bounds = Bounds::new(0.0, 0.0, 10000.0, 8000.0);
        ProcessedPlan {
            walls: Vec::new(),
            doors,
            windows: Vec::new(),
            restricted_areas: Vec::new(),
            bounds,
            space_analysis: SpaceAnalysis::compute(&bounds, &[], &[]),
        }
    }

    fn layout_with(ilots: Vec<Ilot>) -> Layout {
        Layout { ilots, corridors: Vec::new(), metrics: LayoutMetrics::empty() }
    }

    #[test]
    fn empty_ilot_set_routes_to_empty_corridors() {
        let plan = sample_plan(vec![]);
        let layout = route(&plan, layout_with(vec![]), 1200.0);
        assert!(layout.corridors.is_empty());
    }

    #[test]
    fn two_rows_and_a_door_produce_corridors() {
        let plan = sample_plan(vec![Door {
            id: 0,
            center: Point::new(100.0, 0.0),
            radius: 500.0,
            is_entrance: true,
            swing: DoorSwing::Left,
        }]);
        let ilots = vec![
            Ilot::new(0, Rect::new(0.0, 0.0, 1000.0, 800.0)),
            Ilot::new(1, Rect::new(0.0, 3000.0, 1000.0, 800.0)),
        ];
        let layout = route(&plan, layout_with(ilots), 1200.0);
        assert!(layout.corridors.iter().any(|c| c.kind == crate::corridor::CorridorKind::Horizontal));
        assert!(layout.corridors.iter().any(|c| c.kind == crate::corridor::CorridorKind::Connection));
        assert!(layout.corridors.iter().all(|c| fitness::corridor_meets_min_width(c.width)));
    }
}
