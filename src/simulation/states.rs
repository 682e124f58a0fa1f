//! Core state types for the N-body simulation.
//!
//! Defines the 2D body/system structs:
//! - `Body` using `NVec2`, with a bounded trail of past positions
//! - `System` holding the list of bodies and the current tick count `t`
//!
//! All bodies share equal unit mass; there is no mass field.

use nalgebra::Vector2;
use std::collections::VecDeque;
use std::fmt;

pub type NVec2 = Vector2<f64>;

/// Maximum number of past positions kept per body.
/// The trail is a FIFO: once full, the oldest point is evicted first.
pub const MAX_TRAIL_LEN: usize = 600;

#[derive(Debug, Clone)]
pub struct Body {
    pub x: NVec2, // position
    pub v: NVec2, // velocity, world units per tick
    pub radius: f64, // radius, used for collision and rendering
    pub color: [u8; 3], // render hint, assigned at creation, never mutated here
    pub trail: VecDeque<NVec2>, // past positions, oldest first
}

impl Body {
    /// Create a body with an empty trail
    pub fn new(x: NVec2, v: NVec2, radius: f64, color: [u8; 3]) -> Self {
        Self {
            x,
            v,
            radius,
            color,
            trail: VecDeque::with_capacity(MAX_TRAIL_LEN),
        }
    }

    /// Advance the body by one tick: x += v, then record the new position
    /// on the trail, evicting the oldest point once over capacity
    ///
    /// The step size is implicitly one tick; there is no dt parameter
    pub fn advance(&mut self) {
        self.x += self.v;
        self.trail.push_back(self.x);
        if self.trail.len() > MAX_TRAIL_LEN {
            self.trail.pop_front();
        }
    }
}

#[derive(Debug, Clone)]
pub struct System {
    pub bodies: Vec<Body>, // collection of bodies
    pub t: f64, // tick count (one step advances t by 1)
}

impl System {
    /// Equal-weighted mean position of all bodies, recomputed on demand
    ///
    /// Errors on an empty body list rather than dividing by zero
    pub fn center_of_mass(&self) -> Result<NVec2, EmptyPopulation> {
        let n = self.bodies.len();
        if n == 0 {
            return Err(EmptyPopulation);
        }
        let total: NVec2 = self.bodies.iter().map(|b| b.x).sum();
        Ok(total / n as f64)
    }
}

/// Center-of-mass query on a system with no bodies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyPopulation;

impl fmt::Display for EmptyPopulation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "center of mass is undefined for an empty system")
    }
}

impl std::error::Error for EmptyPopulation {}
