//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`ParametersConfig`] – tunable physical parameters
//! - [`SpawnConfig`]      – randomized initial-state distribution
//! - [`BodyConfig`]       – optional explicit initial state per body
//! - [`RunConfig`]        – headless driver settings
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! parameters:
//!   G: 0.1                  # gravitational constant
//!   air_resistance: 1.0     # per-tick velocity multiplier
//!   collision_enabled: false
//!   collision_damping: 1.0  # collision impulse scale (1.0 = elastic)
//!
//! spawn:
//!   n: 4                    # number of bodies
//!   position_bound: [266.0, 200.0]   # positions uniform in +-bound
//!   velocity_bound: 2.0              # velocities uniform in +-bound
//!   radius: 20.0            # shared body radius
//!   seed: 42                # deterministic seed
//!
//! run:
//!   ticks: 600              # ticks for the headless driver
//!
//! # optional: explicit bodies override the spawn block
//! # bodies:
//! #   - x: [ -50.0, 0.0 ]
//! #     v: [   0.0, 0.0 ]
//! #     radius: 20.0
//! #   - x: [  50.0, 0.0 ]
//! #     v: [   0.0, 0.0 ]
//! #     radius: 20.0
//! ```
//!
//! The engine then maps this configuration into its internal runtime scenario
//! representation via `Scenario::build_scenario`.

use serde::Deserialize;

/// Tunable physical parameters for a scenario
#[allow(non_snake_case)]
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub G: f64, // gravitational constant (negative gives repulsion)
    pub air_resistance: f64, // per-tick velocity multiplier
    pub collision_enabled: bool, // gates collision resolution
    pub collision_damping: f64, // collision impulse scale
}

/// Randomized initial-state distribution
#[derive(Deserialize, Debug, Clone)]
pub struct SpawnConfig {
    pub n: usize, // number of bodies
    pub position_bound: [f64; 2], // symmetric rectangular position bound
    pub velocity_bound: f64, // symmetric velocity bound per component
    pub radius: f64, // shared body radius
    pub seed: u64, // deterministic seed to make runs reproducible
}

/// Configuration for a single body's explicit initial state
#[derive(Deserialize, Debug)]
pub struct BodyConfig {
    pub x: Vec<f64>, // initial position vector
    pub v: Vec<f64>, // initial velocity vector, units per tick
    pub radius: f64, // body radius
}

/// Headless driver settings
#[derive(Deserialize, Debug, Clone)]
pub struct RunConfig {
    pub ticks: u64, // how many ticks to run
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub parameters: ParametersConfig, // tunable physical parameters
    pub spawn: SpawnConfig, // randomized initial state
    pub bodies: Option<Vec<BodyConfig>>, // explicit bodies, overriding spawn
    pub run: RunConfig, // headless driver settings
}
