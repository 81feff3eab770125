// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Centralized layer-name keyword tables.
//!
//! Every classification rule that matches on a substring of a layer name
//! reads from here, so the heuristic is auditable and testable in one
//! place instead of scattered `contains` calls through the classifier.

use crate::model::RestrictedCategory;

pub const WALL_KEYWORDS: &[&str] = &[
    "wall", "mur", "partition", "structure", "arch", "external", "internal",
];

pub const DOOR_KEYWORDS: &[&str] = &["door", "porte", "opening", "entrance", "exit"];

pub const ENTRANCE_KEYWORDS: &[&str] = &[
    "entrance", "entree", "sortie", "exit", "main", "principal",
];

pub const WINDOW_KEYWORDS: &[&str] = &["window", "fenetre", "glazing", "glass"];

pub const RESTRICTED_KEYWORDS: &[&str] = &[
    "stair", "escalier", "elev", "ascens", "toilet", "wc", "tech", "util", "mech",
];

pub fn layer_contains_any(layer: &str, keywords: &[&str]) -> bool {
    let lower = layer.to_ascii_lowercase();
    keywords.iter().any(|kw| lower.contains(kw))
}

/// Wall thickness (mm) implied by a layer name when the entity carries no
/// explicit thickness/lineweight value.
pub fn default_wall_thickness_mm(layer: &str) -> f64 {
    let lower = layer.to_ascii_lowercase();
    if lower.contains("wall") || lower.contains("mur") {
        200.0
    } else if lower.contains("partition") {
        100.0
    } else {
        150.0
    }
}

/// Maps a restricted-area layer name to its category. Checked in a fixed
/// order so a layer matching several keywords (e.g. `"tech-wc"`) resolves
/// deterministically.
pub fn restricted_category(layer: &str) -> RestrictedCategory {
    let lower = layer.to_ascii_lowercase();
    if lower.contains("stair") || lower.contains("escalier") {
        RestrictedCategory::Stairs
    } else if lower.contains("elev") || lower.contains("ascens") {
        RestrictedCategory::Elevator
    } else if lower.contains("toilet") || lower.contains("wc") {
        RestrictedCategory::Restroom
    } else if lower.contains("tech") || lower.contains("util") || lower.contains("mech") {
        RestrictedCategory::Utility
    } else {
        RestrictedCategory::Other
    }
}
