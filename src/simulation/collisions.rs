//! Collision detection and impulse-based resolution
//!
//! Bodies are circles; a collision is centers closer than the summed radii.
//! Resolution pushes an overlapping pair apart symmetrically, then exchanges
//! a normal impulse between them. Pairs are addressed by index into the body
//! slice so both sides can be mutated without aliasing.

use crate::simulation::params::Parameters;
use crate::simulation::states::Body;

/// True iff the two bodies overlap (center distance <= sum of radii)
pub fn detect(a: &Body, b: &Body) -> bool {
    (a.x - b.x).norm() <= a.radius + b.radius
}

/// Resolve a colliding pair `(i, j)` with `i < j`
///
/// No-op when `collision_enabled` is off. Otherwise:
/// 1. positional correction: push each body apart by half the overlap along
///    the collision normal,
/// 2. normal impulse: skip if the pair is already separating (`vn > 0`),
///    else exchange `collision_damping * vn` along the normal
///    (equal unit masses, so `(2 * vn) / (1/m + 1/m)` reduces to `vn`)
pub fn resolve(bodies: &mut [Body], i: usize, j: usize, params: &Parameters) {
    if !params.collision_enabled {
        return;
    }

    debug_assert!(i < j);
    // Split the slice so both bodies can be borrowed mutably
    let (head, tail) = bodies.split_at_mut(j);
    let a = &mut head[i];
    let b = &mut tail[0];

    // Collision normal, pointing from b toward a
    let d = a.x - b.x;
    let mut dist = d.norm();
    if dist == 0.0 { // perfectly coincident centers, same fallback as gravity
        dist = 1.0;
    }
    let n = d / dist;

    // Push the pair apart so the discrete step cannot leave them overlapping
    let overlap = (a.radius + b.radius) - dist;
    if overlap > 0.0 {
        let half = overlap / 2.0;
        a.x += n * half;
        b.x -= n * half;
    }

    // Relative velocity along the normal
    let dv = a.v - b.v;
    let vn = dv.dot(&n);

    // Already separating: applying an impulse here would add energy
    if vn > 0.0 {
        return;
    }

    // Equal unit masses: (2 * vn) / (1 + 1)
    let impulse = params.collision_damping * (2.0 * vn) / 2.0;
    a.v -= n * impulse;
    b.v += n * impulse;
}
