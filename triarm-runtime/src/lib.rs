// Copyright (C) 2024 Laixer Equipment B.V.
// All rights reserved.
//
// This software may be modified and distributed under the terms
// of the included license.  See the LICENSE file for details.

//! The `triarm` library provides the runtime environment for the triarm
//! motion core.
//!
//! The core state lives in the `core` module: the [`core::ArmState`] value
//! object owns the joint angles, the active target and the seeking flag. The
//! `components` module hosts the target seeking stepper and the component
//! pipeline; the `runtime` module provides the component plumbing and the
//! runtime error type. Kinematics itself comes from the `triarm-core` crate,
//! re-exported here as `kinematics`.

pub mod components;
pub mod core;

#[macro_use]
extern crate log;

mod config;

pub use self::config::*;

pub mod runtime;
pub use self::runtime::Error;

pub use nalgebra;
pub use triarm_core as kinematics;

/// Triarm runtime module containing various constants.
pub mod consts {
    use std::time::Duration;

    /// Triarm runtime version.
    ///
    /// # Example
    ///
    /// ```
    /// use triarm::consts::VERSION;
    ///
    /// println!("Triarm runtime version: {}", VERSION);
    /// ```
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// Triarm runtime major version.
    pub const VERSION_MAJOR: &str = env!("CARGO_PKG_VERSION_MAJOR");

    /// Triarm runtime minor version.
    pub const VERSION_MINOR: &str = env!("CARGO_PKG_VERSION_MINOR");

    /// Triarm runtime patch version.
    pub const VERSION_PATCH: &str = env!("CARGO_PKG_VERSION_PATCH");

    /// Convergence tolerance on each axis of the effector to target
    /// distance, in world units. The target counts as reached when both the
    /// x and the y distance fall below this threshold.
    pub const CONVERGENCE_TOLERANCE: f32 = 0.03;

    /// Default interval between two frame ticks.
    pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);
}
