//! Build and drive fully-initialized simulation scenarios
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! (`Scenario`) containing:
//! - tunable parameters (`Parameters`)
//! - system state (`System` with bodies at t = 0)
//! - active force set (`KickSet`)
//! - the Running/Paused gate
//!
//! The scenario is also the boundary with the (external) presentation layer:
//! sliders and keys land on the setters, the renderer reads the body slice
//! and the center-of-mass query between ticks.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::configuration::config::{BodyConfig, ScenarioConfig, SpawnConfig};
use crate::simulation::forces::{KickSet, UniformGravity};
use crate::simulation::integrator::euler_step;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, EmptyPopulation, NVec2, System};

/// A fully-initialized runtime scenario
///
/// Owns the body list and the shared parameter store exclusively; ticks run
/// to completion on the caller's thread, so no locking is involved anywhere
pub struct Scenario {
    pub parameters: Parameters,
    pub system: System,
    pub forces: KickSet,
    paused: bool,
}

impl Scenario {
    /// Wrap an existing system with the standard gravity force set
    pub fn new(system: System, parameters: Parameters) -> Self {
        Self {
            parameters,
            system,
            forces: KickSet::new().with(UniformGravity),
            paused: false,
        }
    }

    /// Build a runtime scenario from a loaded config
    ///
    /// Bodies come from the explicit `bodies:` list when present, otherwise
    /// `spawn.n` bodies are drawn from the seeded spawn distribution
    pub fn build_scenario(cfg: ScenarioConfig) -> Self {
        let bodies = match &cfg.bodies {
            Some(list) => explicit_bodies(list),
            None => spawn_bodies(&cfg.spawn),
        };

        let system = System { bodies, t: 0.0 };

        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            G: p_cfg.G,
            air_resistance: p_cfg.air_resistance,
            collision_enabled: p_cfg.collision_enabled,
            collision_damping: p_cfg.collision_damping,
        };

        Self::new(system, parameters)
    }

    /// Advance one tick, unless paused
    pub fn step(&mut self) {
        if self.paused {
            return;
        }
        euler_step(&mut self.system, &self.forces, &self.parameters);
    }

    /// Flip between Running and Paused; returns the new paused state
    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        self.paused
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    // Parameter setters: plain writes, last one wins, no clamping

    pub fn set_gravitational_constant(&mut self, g: f64) {
        self.parameters.G = g;
    }

    pub fn set_air_resistance(&mut self, factor: f64) {
        self.parameters.air_resistance = factor;
    }

    pub fn set_collision_enabled(&mut self, enabled: bool) {
        self.parameters.collision_enabled = enabled;
    }

    pub fn set_collision_damping(&mut self, factor: f64) {
        self.parameters.collision_damping = factor;
    }

    /// Read-only view of the bodies (positions, velocities, trails, colors)
    pub fn bodies(&self) -> &[Body] {
        &self.system.bodies
    }

    pub fn center_of_mass(&self) -> Result<NVec2, EmptyPopulation> {
        self.system.center_of_mass()
    }
}

/// Map explicit `BodyConfig` entries to runtime bodies
fn explicit_bodies(list: &[BodyConfig]) -> Vec<Body> {
    list.iter()
        .map(|bc| {
            Body::new(
                NVec2::new(bc.x[0], bc.x[1]),
                NVec2::new(bc.v[0], bc.v[1]),
                bc.radius,
                [255, 255, 255],
            )
        })
        .collect()
}

/// Randomize `n` bodies from a seeded generator
///
/// Positions are uniform in the symmetric rectangle +-position_bound,
/// velocities uniform in +-velocity_bound on both components. Color channels
/// stay in 50..=255 so every body reads against a light canvas
fn spawn_bodies(cfg: &SpawnConfig) -> Vec<Body> {
    let mut rng = SmallRng::seed_from_u64(cfg.seed);
    let [bx, by] = cfg.position_bound;
    let bv = cfg.velocity_bound;

    (0..cfg.n)
        .map(|_| {
            let x = NVec2::new(rng.gen_range(-bx..=bx), rng.gen_range(-by..=by));
            let v = NVec2::new(rng.gen_range(-bv..=bv), rng.gen_range(-bv..=bv));
            let color = [
                rng.gen_range(50..=255u8),
                rng.gen_range(50..=255u8),
                rng.gen_range(50..=255u8),
            ];
            Body::new(x, v, cfg.radius, color)
        })
        .collect()
}
