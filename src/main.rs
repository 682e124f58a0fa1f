use gravsim::{Scenario, ScenarioConfig};
use gravsim::{bench_gravity, bench_step};

use anyhow::Result;
use clap::Parser;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

/// Headless driver for the 2D N-body simulation core
///
/// Loads a scenario from YAML, runs the requested number of ticks, and logs
/// a summary. Rendering/input lives outside this crate; anything that would
/// draw reads the body slice and center of mass between ticks instead.
#[derive(Parser, Debug)]
struct Args {
    #[arg(short, default_value = "four_body.yaml")]
    file_name: String,

    /// Override the tick count from the scenario's run block
    #[arg(long)]
    ticks: Option<u64>,

    /// Run the scaling benches instead of a scenario
    #[arg(long, default_value_t = false)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("scenarios")
        .join(file_name);
    let file = File::open(&config_path)?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.bench {
        bench_gravity();
        bench_step();
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let ticks = args.ticks.unwrap_or(scenario_cfg.run.ticks);

    let mut scenario = Scenario::build_scenario(scenario_cfg);
    log::info!(
        "running {} ticks with {} bodies (G = {}, air resistance = {}, collisions = {})",
        ticks,
        scenario.bodies().len(),
        scenario.parameters.G,
        scenario.parameters.air_resistance,
        scenario.parameters.collision_enabled,
    );

    for _ in 0..ticks {
        scenario.step();
    }

    let com = scenario.center_of_mass()?;
    println!("t = {}, center of mass = ({:.3}, {:.3})", scenario.system.t, com.x, com.y);

    for (i, body) in scenario.bodies().iter().enumerate() {
        log::debug!(
            "body {i}: x = ({:.3}, {:.3}), v = ({:.3}, {:.3}), trail = {}",
            body.x.x,
            body.x.y,
            body.v.x,
            body.v.y,
            body.trail.len(),
        );
    }

    Ok(())
}
