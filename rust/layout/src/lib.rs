// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Floorplan Layout
//!
//! Turns a [`floorplan_core::ProcessedPlan`] into a placed, routed
//! [`Layout`]: a collision-free set of [`Ilot`]s sized by target density,
//! and the [`Corridor`] network connecting them.
//!
//! ## Overview
//!
//! - **Placement Engine** ([`placement`]): strategy-selectable îlot
//!   placement (four deterministic layouts, three population/iteration
//!   search strategies) scored by a shared multi-objective fitness
//!   function.
//! - **Corridor Router** ([`corridor_router`]): groups îlots into rows and
//!   emits the corridor segments connecting them and the doors.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use floorplan_layout::{Settings, CancelToken, placement, corridor_router};
//!
//! let settings = Settings::builder().density(25.0).build();
//! let layout = placement::place(&plan, &settings, CancelToken::new())?;
//! let layout = corridor_router::route(&plan, layout, settings.corridor_width);
//! ```
//!
//! ## Feature flags
//!
//! - `serde`: derive `Serialize`/`Deserialize` on the public data model.

pub mod cancel;
pub mod corridor;
pub mod corridor_router;
pub mod error;
pub mod ilot;
pub mod layout;
pub mod placement;
pub mod settings;

pub use cancel::CancelToken;
pub use corridor::{Corridor, CorridorKind};
pub use error::{Error, PlaceError, Result};
pub use ilot::{Ilot, IlotSizeClass};
pub use layout::{Layout, LayoutMetrics, PlaceOutcome};
pub use settings::{Algorithm, OptimizationTarget, Settings, SettingsBuilder};
