// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The placed-and-routed layout, plus its aggregate metrics.

use crate::corridor::Corridor;
#[cfg(test)]
use crate::corridor::CorridorKind;
use crate::ilot::Ilot;

/// How a search strategy's call to [`crate::placement::place`] ended. The
/// returned [`Layout`] is always a valid layout (non-overlap/clearance
/// invariants hold) regardless of which variant is reported; cancellation
/// and timeout are not failures, per the cooperative-cancellation contract
/// in the engine's concurrency model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceOutcome {
    /// Ran to convergence or exhausted `max_iterations` normally.
    Completed,
    /// Cooperative cancel token was triggered before completion.
    Cancelled,
    /// Wall-clock deadline was reached before completion.
    TimedOut,
}

/// Aggregate scoring for a [`Layout`], recomputed any time the îlot or
/// corridor set changes.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutMetrics {
    pub ilot_count: usize,
    pub total_ilot_area_m2: f64,
    pub total_corridor_length_mm: f64,
    /// Fraction of usable area covered by îlots, in `[0, 1]`.
    pub occupancy: f64,
    pub accessibility_score: f64,
    pub fire_compliance_score: f64,
    pub flow_efficiency_score: f64,
    /// Weighted sum of the four scores above, in `[0, 1]`.
    pub overall_score: f64,
}

impl LayoutMetrics {
    pub fn empty() -> Self {
        Self {
            ilot_count: 0,
            total_ilot_area_m2: 0.0,
            total_corridor_length_mm: 0.0,
            occupancy: 0.0,
            accessibility_score: 0.0,
            fire_compliance_score: 0.0,
            flow_efficiency_score: 0.0,
            overall_score: 0.0,
        }
    }

    /// Refreshes `ilot_count`/`total_ilot_area_m2`/`total_corridor_length_mm`/
    /// `occupancy` from the current îlot and corridor sets, leaving the four
    /// fitness sub-scores untouched. Lets a caller whose post-processing
    /// changes the corridor set (the router's dedup pass, say) update the
    /// geometry-derived fields without re-running fitness scoring.
    pub fn recompute(&self, ilots: &[Ilot], corridors: &[Corridor], usable_area_m2: f64) -> Self {
        let total_ilot_area_m2: f64 = ilots.iter().map(Ilot::area_m2).sum();
        let occupancy = if usable_area_m2 > f64::EPSILON {
            (total_ilot_area_m2 / usable_area_m2).min(1.0)
        } else {
            0.0
        };
        Self {
            ilot_count: ilots.len(),
            total_ilot_area_m2,
            total_corridor_length_mm: corridors.iter().map(Corridor::length).sum(),
            occupancy,
            ..*self
        }
    }
}

/// The placement + routing output: a set of îlots, the corridor network
/// connecting them, and the metrics summarizing both. Fully owns its
/// îlots and corridors; the caller may discard or persist it freely.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Layout {
    pub ilots: Vec<Ilot>,
    pub corridors: Vec<Corridor>,
    pub metrics: LayoutMetrics,
}

impl Layout {
    pub fn empty() -> Self {
        Self {
            ilots: Vec::new(),
            corridors: Vec::new(),
            metrics: LayoutMetrics::empty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ilot::Ilot;
    use floorplan_core::Rect;

    #[test]
    fn recompute_updates_geometry_fields_and_keeps_scores() {
        let before = LayoutMetrics { overall_score: 0.9, accessibility_score: 0.8, ..LayoutMetrics::empty() };
        let ilots = vec![Ilot::new(0, Rect::new(0.0, 0.0, 2000.0, 1000.0))];
        let corridors = vec![Corridor {
            id: 0,
            start: floorplan_core::Point::new(0.0, 0.0),
            end: floorplan_core::Point::new(1000.0, 0.0),
            width: 1200.0,
            kind: CorridorKind::Horizontal,
        }];

        let after = before.recompute(&ilots, &corridors, 10.0);
        assert_eq!(after.ilot_count, 1);
        assert!((after.total_ilot_area_m2 - 2.0).abs() < 1e-9);
        assert!((after.total_corridor_length_mm - 1000.0).abs() < 1e-9);
        assert!((after.occupancy - 0.2).abs() < 1e-9);
        assert_eq!(after.overall_score, 0.9);
        assert_eq!(after.accessibility_score, 0.8);
    }
}
