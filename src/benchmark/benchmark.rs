//! Wall-clock scaling checks for the O(N^2) passes
//!
//! Not criterion-grade benchmarking; just a quick table to confirm the
//! direct pair loops stay acceptable at the body counts this simulation
//! is meant for (order tens) and to see where they stop being so.

use std::time::Instant;

use crate::simulation::forces::{KickSet, UniformGravity, VelocityKick};
use crate::simulation::integrator::euler_step;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec2, System};

/// Build a deterministic synthetic system, no rng needed
fn synthetic_system(n: usize) -> System {
    let mut bodies = Vec::with_capacity(n);

    for i in 0..n {
        let i_f = i as f64;
        let x = NVec2::new((i_f * 0.37).sin() * 500.0, (i_f * 0.13).cos() * 500.0);
        bodies.push(Body::new(x, NVec2::zeros(), 5.0, [255, 255, 255]));
    }

    System { bodies, t: 0.0 }
}

pub fn bench_gravity() {
    // Different system sizes to test
    let ns = [8, 16, 32, 64, 128, 256, 512, 1024];

    let params = Parameters::default();
    let gravity = UniformGravity;

    for n in ns {
        let sys = synthetic_system(n);
        let mut out = vec![NVec2::zeros(); n];

        // Warm up
        gravity.kick(&sys, &params, &mut out);

        // Time one full pair pass
        let t0 = Instant::now();
        gravity.kick(&sys, &params, &mut out);
        let dt = t0.elapsed().as_secs_f64();

        println!("N = {n:5}, gravity pass = {dt:8.6} s");
    }
}

pub fn bench_step() {
    let ns = [8, 16, 32, 64, 128, 256, 512];
    let steps = 100; // ticks per size

    let params = Parameters {
        collision_enabled: true, // exercise the resolution path too
        ..Parameters::default()
    };

    for n in ns {
        let mut sys = synthetic_system(n);
        let forces = KickSet::new().with(UniformGravity);

        // Warm up
        euler_step(&mut sys, &forces, &params);

        let t0 = Instant::now();
        for _ in 0..steps {
            euler_step(&mut sys, &forces, &params);
        }
        let dt = t0.elapsed().as_secs_f64();

        println!("N = {n:5}, {steps} ticks = {dt:8.6} s ({:8.6} s/tick)", dt / steps as f64);
    }
}
