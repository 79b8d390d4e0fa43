use collisim::{BodyParams, Scenario, ScenarioConfig};
use collisim::run_headless;
#[cfg(feature = "viewer")]
use collisim::run_2d;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Two elastic circles in a walled arena")]
struct Args {
    /// Scenario file, looked up as given and then under `scenarios/`
    #[arg(short, default_value = "default.yaml")]
    file_name: String,

    /// Run fixed steps without opening a window
    #[arg(long)]
    headless: bool,

    /// Step count for headless runs (default: t_end / h0)
    #[arg(long)]
    steps: Option<usize>,

    /// Override body 1 as "mass,x,y,speed,angle,radius"
    #[arg(long)]
    body1: Option<BodyParams>,

    /// Override body 2 as "mass,x,y,speed,angle,radius"
    #[arg(long)]
    body2: Option<BodyParams>,
}

fn scenario_path(file_name: &str) -> PathBuf {
    let direct = PathBuf::from(file_name);
    if direct.is_file() {
        return direct;
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name)
}

// load here to keep main clean
fn load_scenario(args: &Args) -> Result<Scenario> {
    let path = scenario_path(&args.file_name);
    let cfg = ScenarioConfig::from_file(&path)
        .with_context(|| format!("failed to load scenario {}", path.display()))?;
    let mut scenario = Scenario::build_scenario(cfg).context("invalid scenario")?;

    let overrides = [args.body1, args.body2];
    for (i, params) in overrides.iter().enumerate() {
        if let Some(p) = params {
            scenario
                .set_start(i, *p)
                .with_context(|| format!("invalid --body{}", i + 1))?;
        }
    }
    // a running engine was started from the file values, pick up the overrides
    if overrides.iter().any(Option::is_some) && scenario.engine.is_running() {
        scenario.restart()?;
    }

    info!("loaded scenario {}", path.display());
    Ok(scenario)
}

fn headless(mut scenario: Scenario, steps: Option<usize>) -> Result<()> {
    let steps = steps.unwrap_or_else(|| scenario.parameters.steps());
    let summary = run_headless(&mut scenario, steps)?;

    println!(
        "{} steps, t = {:.4} s, {} ball-ball collisions",
        summary.steps, summary.t, summary.collisions
    );
    println!(
        "kinetic energy {:.6} -> {:.6}",
        summary.kinetic_energy.0, summary.kinetic_energy.1
    );
    for (i, b) in scenario.engine.bodies().iter().enumerate() {
        println!(
            "body {}: x = ({:.3}, {:.3}) v = ({:.3}, {:.3}) r = {}",
            i + 1,
            b.x.x,
            b.x.y,
            b.v.x,
            b.v.y,
            b.radius
        );
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let scenario = load_scenario(&args)?;

    if args.headless {
        return headless(scenario, args.steps);
    }

    #[cfg(feature = "viewer")]
    {
        run_2d(scenario);
        Ok(())
    }

    #[cfg(not(feature = "viewer"))]
    {
        log::warn!("built without the `viewer` feature, running headless");
        headless(scenario, args.steps)
    }
}
