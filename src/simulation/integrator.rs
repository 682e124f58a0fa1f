//! Fixed-step explicit-Euler tick for the N-body system
//!
//! One tick is one implicit unit of time. The phase ordering inside a tick
//! is normative: gravity kicks, then collision resolution, then air
//! resistance, then the position update and trail append. Reordering any of
//! these changes the numerical trajectories.

use super::collisions;
use super::forces::KickSet;
use super::params::Parameters;
use super::states::{NVec2, System};

/// Advance the system by one tick
///
/// 1. Accumulate gravity kicks for all pairs, then apply them to velocities
/// 2. Detect every unordered pair; resolve the ones that overlap
/// 3. Per body: scale velocity by `air_resistance`, then advance position
///    and trail
/// 4. `sys.t += 1`
pub fn euler_step(sys: &mut System, forces: &KickSet, params: &Parameters) {
    let n = sys.bodies.len();
    if n == 0 { // no bodies, return
        return;
    }

    // kicks[i] holds the total velocity delta for body i this tick.
    // The buffer is filled from a consistent position snapshot and applied
    // in one pass, so pair order cannot leak into the result
    let mut kicks = vec![NVec2::zeros(); n];
    forces.accumulate_kicks(&*sys, params, &mut kicks);

    for (b, k) in sys.bodies.iter_mut().zip(kicks.iter()) {
        b.v += *k;
    }

    // Collision pass over all unordered pairs, on post-gravity velocities.
    // Detection always runs; resolve gates itself on collision_enabled
    for i in 0..n {
        for j in (i + 1)..n {
            if collisions::detect(&sys.bodies[i], &sys.bodies[j]) {
                collisions::resolve(&mut sys.bodies, i, j, params);
            }
        }
    }

    // Damping after collisions, before the position update
    for b in sys.bodies.iter_mut() {
        b.v *= params.air_resistance;
        b.advance();
    }

    // One tick of implicit unit time
    sys.t += 1.0;
}
