// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Placement configuration.

/// Deterministic layout strategies place îlots directly; search strategies
/// iterate a population/neighbor loop scored by the shared fitness
/// function (see [`crate::placement::fitness`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    Grid,
    Spiral,
    CornerFirst,
    WallAligned,
    Evolutionary,
    Annealing,
    Swarm,
}

/// Selects the fitness weighting in [`crate::placement::fitness`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OptimizationTarget {
    Area,
    Accessibility,
    Fire,
    Flow,
}

/// Placement configuration. Construct via [`Settings::builder`]; every
/// setter clamps its field to the accepted band from the data model
/// rather than letting an out-of-range value reach the engine.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Settings {
    /// Percentage of usable area targeted, `[10, 90]`.
    pub density: f64,
    /// Corridor width in mm, `[1000, 2000]`.
    pub corridor_width: f64,
    /// Minimum clearance in mm, `[50, 150]`.
    pub min_clearance: f64,
    pub algorithm: Algorithm,
    pub optimization_target: OptimizationTarget,
    pub max_iterations: u32,
    pub convergence_threshold: f64,
    /// Minimum corridor width accepted by the router; invariant-checked,
    /// not user-tunable in practice but exposed for extension.
    pub min_corridor_width: f64,
    /// RNG seed for the stochastic search strategies; identical seed must
    /// produce bitwise-identical output.
    pub seed: u64,
}

impl Settings {
    pub fn builder() -> SettingsBuilder {
        SettingsBuilder::default()
    }

    /// Re-validates an already-built `Settings`, in case fields were
    /// mutated directly instead of through the builder.
    pub fn validate(&self) -> Result<(), String> {
        if !(10.0..=90.0).contains(&self.density) {
            return Err(format!("density {} outside [10, 90]", self.density));
        }
        if !(1000.0..=2000.0).contains(&self.corridor_width) {
            return Err(format!(
                "corridor_width {} outside [1000, 2000]",
                self.corridor_width
            ));
        }
        if !(50.0..=150.0).contains(&self.min_clearance) {
            return Err(format!(
                "min_clearance {} outside [50, 150]",
                self.min_clearance
            ));
        }
        if self.max_iterations == 0 {
            return Err("max_iterations must be positive".to_string());
        }
        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        SettingsBuilder::default().build()
    }
}

/// Builder for [`Settings`]. Every setter clamps to the field's accepted
/// band so a caller can never hand the engine a setting that violates a
/// data-model invariant.
#[derive(Debug, Clone, Copy)]
pub struct SettingsBuilder {
    density: f64,
    corridor_width: f64,
    min_clearance: f64,
    algorithm: Algorithm,
    optimization_target: OptimizationTarget,
    max_iterations: u32,
    convergence_threshold: f64,
    min_corridor_width: f64,
    seed: u64,
}

impl Default for SettingsBuilder {
    fn default() -> Self {
        Self {
            density: 25.0,
            corridor_width: 1200.0,
            min_clearance: 80.0,
            algorithm: Algorithm::Grid,
            optimization_target: OptimizationTarget::Area,
            max_iterations: 500,
            convergence_threshold: 1e-3,
            min_corridor_width: 1200.0,
            seed: 0,
        }
    }
}

impl SettingsBuilder {
    pub fn density(mut self, value: f64) -> Self {
        self.density = value.clamp(10.0, 90.0);
        self
    }

    pub fn corridor_width(mut self, value: f64) -> Self {
        self.corridor_width = value.clamp(1000.0, 2000.0);
        self
    }

    pub fn min_clearance(mut self, value: f64) -> Self {
        self.min_clearance = value.clamp(50.0, 150.0);
        self
    }

    pub fn algorithm(mut self, value: Algorithm) -> Self {
        self.algorithm = value;
        self
    }

    pub fn optimization_target(mut self, value: OptimizationTarget) -> Self {
        self.optimization_target = value;
        self
    }

    pub fn max_iterations(mut self, value: u32) -> Self {
        self.max_iterations = value.max(1);
        self
    }

    pub fn convergence_threshold(mut self, value: f64) -> Self {
        self.convergence_threshold = value.max(0.0);
        self
    }

    pub fn min_corridor_width(mut self, value: f64) -> Self {
        self.min_corridor_width = value.max(0.0);
        self
    }

    pub fn seed(mut self, value: u64) -> Self {
        self.seed = value;
        self
    }

    pub fn build(self) -> Settings {
        Settings {
            density: self.density,
            corridor_width: self.corridor_width,
            min_clearance: self.min_clearance,
            algorithm: self.algorithm,
            optimization_target: self.optimization_target,
            max_iterations: self.max_iterations,
            convergence_threshold: self.convergence_threshold,
            min_corridor_width: self.min_corridor_width,
            seed: self.seed,
        }
    }
}
