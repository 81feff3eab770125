// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error taxonomy for placement and routing.

use thiserror::Error;

/// Result type for the layout engine.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Place(#[from] PlaceError),

    #[error("core ingestion error: {0}")]
    Core(#[from] floorplan_core::Error),
}

/// Errors raised by [`crate::placement`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlaceError {
    /// No valid ilot fits anywhere in the usable area, even at the smallest
    /// size class. Terminal: the caller must relax settings and retry.
    #[error("no valid ilot placement exists at the requested size/clearance")]
    Infeasible,

    /// Invalid settings (e.g. density outside its accepted band) caught
    /// before any placement work began.
    #[error("invalid settings: {0}")]
    InvalidSettings(String),
}
