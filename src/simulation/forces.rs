//! Force contributors for the n-body engine
//!
//! Defines the velocity-kick trait and the summing set that drives it.
//! Each contributor writes per-body velocity deltas into a flat buffer
//! indexed by body position; the integrator applies the buffer afterwards.
//! Accumulating into the buffer instead of mutating bodies mid-pass keeps
//! every pair computation reading a consistent snapshot of positions.

use crate::simulation::params::Parameters;
use crate::simulation::states::{NVec2, System};

/// Collection of velocity-kick terms (gravity, etc.)
/// Each term implements [`VelocityKick`] and their contributions are summed
/// into a single per-body delta
pub struct KickSet {
    terms: Vec<Box<dyn VelocityKick + Send + Sync>>,
}

impl KickSet {
    /// Create an empty kick set
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Add a kick term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: VelocityKick + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Compute total velocity deltas for all bodies in `sys`
    /// - `out[i]` will be set to the sum of contributions from all terms
    pub fn accumulate_kicks(&self, sys: &System, params: &Parameters, out: &mut [NVec2]) {
        // Zero buffer
        for k in out.iter_mut() {
            *k = NVec2::zeros();
        }
        // Iterate over all kick contributors
        for term in &self.terms {
            term.kick(sys, params, out);
        }
    }
}

impl Default for KickSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Trait for velocity-kick sources operating on [`System`]
/// Implementations add their contribution into `out[i]` for each body
///
/// `params` is threaded into every call so that setter updates (sliders,
/// keys) take effect on the next tick instead of being baked in at build time
pub trait VelocityKick {
    fn kick(&self, sys: &System, params: &Parameters, out: &mut [NVec2]);
}

/// Pairwise gravity with constant-magnitude attraction
///
/// The kick applied per pair is `G` along the unit separation direction,
/// independent of distance. There is deliberately no inverse-square falloff;
/// that is the exercised force law of this simulation, not an oversight.
/// Coincident bodies fall back to a separation of 1 so the direction stays
/// finite and the tick keeps advancing.
pub struct UniformGravity;

impl VelocityKick for UniformGravity {
    fn kick(&self, sys: &System, params: &Parameters, out: &mut [NVec2]) {
        let n = sys.bodies.len();
        if n == 0 { // no bodies, return
            return;
        }

        // Loop over each unordered pair (i, j) with i < j
        for i in 0..n {
            let xi = sys.bodies[i].x; // position of body i

            for j in (i + 1)..n {
                let xj = sys.bodies[j].x; // position of body j

                // r is the displacement vector from i to j.
                // i is kicked along +r (toward j), j along -r (toward i)
                let r = xj - xi;

                // Separation distance, with the degenerate-case fallback:
                // exactly coincident bodies use dist = 1 instead of faulting
                let mut dist = r.norm();
                if dist == 0.0 {
                    dist = 1.0;
                }

                // Constant magnitude G along the unit direction
                let dv = r / dist * params.G;

                // Equal and opposite, unit mass on both sides
                out[i] += dv;
                out[j] -= dv;
            }
        }
    }
}
