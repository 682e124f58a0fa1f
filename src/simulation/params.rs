//! Tunable physical parameters for the simulation
//!
//! `Parameters` holds the runtime-settable scalars:
//! - gravitational constant `G`,
//! - per-tick air resistance multiplier,
//! - collision toggle and collision impulse damping
//!
//! One instance is shared by all bodies; there are no per-body overrides.
//! The core performs no clamping: negative `G` gives repulsion, air
//! resistance above 1 amplifies. Whatever range the UI enforces is its
//! business, not ours.

#[allow(non_snake_case)]
#[derive(Debug, Clone)]
pub struct Parameters {
    pub G: f64, // gravitational constant
    pub air_resistance: f64, // velocity multiplier applied once per tick
    pub collision_enabled: bool, // gates collision resolution (detection always runs)
    pub collision_damping: f64, // scales collision impulse (1.0 = elastic)
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            G: 0.1,
            air_resistance: 1.0,
            collision_enabled: false,
            collision_damping: 1.0,
        }
    }
}
