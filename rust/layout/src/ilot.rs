// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The placed îlot (workstation cluster) type.

use floorplan_core::Rect;

/// Size-class bucket an îlot's footprint falls into, by area in m².
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IlotSizeClass {
    /// <= 5 m^2
    Small,
    /// 5-10 m^2
    Medium,
    /// 10-15 m^2
    Large,
    /// > 15 m^2
    XLarge,
}

impl IlotSizeClass {
    pub fn for_area_m2(area_m2: f64) -> Self {
        if area_m2 <= 5.0 {
            IlotSizeClass::Small
        } else if area_m2 <= 10.0 {
            IlotSizeClass::Medium
        } else if area_m2 <= 15.0 {
            IlotSizeClass::Large
        } else {
            IlotSizeClass::XLarge
        }
    }
}

/// A placed, axis-aligned workstation cluster. Immutable once placed; the
/// placement engine never mutates an îlot after it enters the
/// already-placed set.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ilot {
    pub id: u32,
    pub rect: Rect,
}

impl Ilot {
    pub fn new(id: u32, rect: Rect) -> Self {
        Self { id, rect }
    }

    pub fn area_m2(&self) -> f64 {
        self.rect.area_m2()
    }

    pub fn size_class(&self) -> IlotSizeClass {
        IlotSizeClass::for_area_m2(self.area_m2())
    }
}
