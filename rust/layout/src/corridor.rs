// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The corridor (walkway) type emitted by [`crate::corridor_router`].

use floorplan_core::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CorridorKind {
    Horizontal,
    Vertical,
    Connection,
}

/// An axis-aligned walkway between two points, always at least
/// `min_corridor_width` wide (enforced by the router as an invariant, not
/// re-checked by consumers).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Corridor {
    pub id: u32,
    pub start: Point,
    pub end: Point,
    pub width: f64,
    pub kind: CorridorKind,
}

impl Corridor {
    pub fn length(&self) -> f64 {
        self.start.distance_to(self.end)
    }
}
