// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Floorplan Core
//!
//! Vendor-neutral ingestion of 2D architectural floor plans: a streaming
//! CAD parser, a layer-heuristic classifier, and the geometry kernel both
//! of them sit on.
//!
//! ## Overview
//!
//! - **Geometry Kernel** ([`geometry`]): axis-aligned primitives and the
//!   distance/overlap predicates the rest of the workspace is built on.
//! - **CAD Parser** ([`parser`]): turns a vendor-neutral ASCII group-code
//!   drawing exchange stream into a flat list of [`parser::RawEntity`].
//! - **Classifier & Analyzer** ([`classifier`]): lifts raw entities into
//!   [`model::Wall`]/[`model::Door`]/[`model::Window`]/[`model::RestrictedArea`]
//!   and computes [`model::SpaceAnalysis`].
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use floorplan_core::{parser, classifier};
//!
//! let (entities, _stats) = parser::parse(bytes)?;
//! let plan = classifier::classify(&entities)?;
//! println!("{}", plan.space_analysis.summary());
//! ```
//!
//! ## Feature flags
//!
//! - `serde`: derive `Serialize`/`Deserialize` on the public data model.

pub mod classifier;
pub mod error;
pub mod geometry;
pub mod model;
pub mod parser;

pub use error::{ClassifyError, Error, ParseError, Result};
pub use geometry::{
    point_segment_distance, rect_center, rect_distance, rect_expand, rect_overlap, rect_union,
    segment_intersection, segment_length, Bounds, Point, Rect, Segment, GEOMETRY_EPSILON_MM,
};
pub use model::{
    Door, DoorSwing, ProcessedPlan, RestrictedArea, RestrictedCategory, SpaceAnalysis, Wall,
    Window,
};
pub use parser::{ParseStats, RawEntity};
