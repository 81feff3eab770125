// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Domain entities produced by [`classifier`](crate::classifier): walls,
//! doors, windows, restricted areas, and the processed plan they roll up
//! into.

use crate::geometry::{Bounds, Rect, Segment};

/// A structural wall segment.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Wall {
    pub id: u32,
    pub segment: Segment,
    /// Wall thickness in millimeters, always positive.
    pub thickness: f64,
    /// Source layer name, if the entity carried one.
    pub layer: Option<String>,
}

/// Door swing direction, derived from arc sweep angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DoorSwing {
    Left,
    Right,
    Double,
}

/// A door opening.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Door {
    pub id: u32,
    pub center: crate::geometry::Point,
    /// Door swing radius in millimeters, in `[400, 1200]`.
    pub radius: f64,
    pub is_entrance: bool,
    pub swing: DoorSwing,
}

impl Door {
    /// Door width, twice the swing radius.
    pub fn width(&self) -> f64 {
        self.radius * 2.0
    }
}

/// A window opening.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Window {
    pub id: u32,
    pub bounds: Rect,
}

impl Window {
    pub fn area_m2(&self) -> f64 {
        self.bounds.area_m2()
    }
}

/// Classification of a [`RestrictedArea`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RestrictedCategory {
    Stairs,
    Elevator,
    Restroom,
    Utility,
    Other,
}

/// A region that excludes ilot placement: stairs, elevators, restrooms,
/// utility/mechanical rooms, etc.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RestrictedArea {
    pub id: u32,
    pub bounds: Rect,
    pub category: RestrictedCategory,
}

impl RestrictedArea {
    pub fn area_m2(&self) -> f64 {
        self.bounds.area_m2()
    }
}

/// Space usage summary for a [`ProcessedPlan`], all areas in square meters.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpaceAnalysis {
    pub total_area: f64,
    pub usable_area: f64,
    pub wall_area: f64,
    pub restricted_area: f64,
    /// Percentage of total area that is usable, in `[0, 100]`.
    pub efficiency: f64,
}

impl SpaceAnalysis {
    /// Computes the summary for a bounding box plus the walls/restricted
    /// areas found inside it. Windows do not subtract from `wall_area` (an
    /// Open Question in the source spec, resolved by following source
    /// behavior: they don't there either).
    pub fn compute(bounds: &Bounds, walls: &[Wall], restricted: &[RestrictedArea]) -> Self {
        let total_area = bounds.area_m2();

        let wall_area: f64 = walls
            .iter()
            .map(|w| {
                let length_m = crate::geometry::segment_length(&w.segment) / 1000.0;
                let thickness_m = w.thickness / 1000.0;
                length_m * thickness_m
            })
            .sum();

        let restricted_area: f64 = restricted.iter().map(RestrictedArea::area_m2).sum();

        let usable_area = (total_area - wall_area - restricted_area).max(0.0);

        let efficiency = if total_area > 0.0 {
            (100.0 * usable_area / total_area).clamp(0.0, 100.0)
        } else {
            0.0
        };

        Self {
            total_area,
            usable_area,
            wall_area,
            restricted_area,
            efficiency,
        }
    }

    /// Short human-readable summary, e.g. `"72.8 m2 usable / 80.0 m2 total (91%)"`.
    pub fn summary(&self) -> String {
        format!(
            "{:.1} m2 usable / {:.1} m2 total ({:.0}%)",
            self.usable_area, self.total_area, self.efficiency
        )
    }
}

/// The immutable, classified result of ingesting a CAD drawing.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProcessedPlan {
    pub walls: Vec<Wall>,
    pub doors: Vec<Door>,
    pub windows: Vec<Window>,
    pub restricted_areas: Vec<RestrictedArea>,
    pub bounds: Bounds,
    pub space_analysis: SpaceAnalysis,
}
