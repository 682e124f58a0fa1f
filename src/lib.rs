pub mod simulation;
pub mod configuration;
pub mod benchmark;

pub use simulation::states::{Body, System, NVec2, EmptyPopulation, MAX_TRAIL_LEN};
pub use simulation::params::Parameters;
pub use simulation::forces::{VelocityKick, KickSet, UniformGravity};
pub use simulation::collisions::{detect, resolve};
pub use simulation::integrator::euler_step;
pub use simulation::scenario::Scenario;

pub use configuration::config::{ParametersConfig, SpawnConfig, BodyConfig, RunConfig, ScenarioConfig};

pub use benchmark::benchmark::{bench_gravity, bench_step};
