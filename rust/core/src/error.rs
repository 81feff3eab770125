// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error taxonomy for ingestion (parsing + classification).

use thiserror::Error;

/// Result type for the core ingestion pipeline.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error for [`parser`](crate::parser) and
/// [`classifier`](crate::classifier).
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Classify(#[from] ClassifyError),
}

/// Errors raised while tokenizing the group-code drawing exchange stream.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The `ENTITIES` section contained no valid records.
    #[error("ENTITIES section contains no valid records")]
    EmptyEntities,

    /// The stream ended inside an unfinished `SECTION`.
    #[error("input truncated inside an unfinished SECTION")]
    Truncated,

    /// The input is not the vendor-neutral ASCII group-code format.
    #[error("unsupported input format: {0}")]
    UnsupportedFormat(String),
}

/// Errors raised while lifting raw entities into a [`ProcessedPlan`](crate::model::ProcessedPlan).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClassifyError {
    /// No entity survived classification at all.
    #[error("no surviving geometry to compute bounds from")]
    NoGeometry,

    /// Geometry survived, but none of it classified as a wall.
    #[error("no walls found; cannot proceed to placement")]
    NoWalls,

    /// The computed drawing bounds have zero area.
    #[error("degenerate (zero-area) drawing bounds")]
    DegenerateBounds,
}
