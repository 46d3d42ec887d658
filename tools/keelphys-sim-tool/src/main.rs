use std::{fs, path::PathBuf, sync::Arc};

use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;

use keelphys_buoy::FloatConfig;
use keelphys_core::{vec3, WorldMode, hash::hex32};
use keelphys_fluid::{Fluid, spec_id};
use keelphys_hydro::{ArchimedesBuoyancy, LinearQuadDrag};
use keelphys_testbed::BobWorld;

#[derive(Parser, Debug)]
#[command(name = "keelphys-sim-tool", version, about = "Run a headless bob simulation from a hull spec JSON")]
struct Opts {
    /// Hull spec (.json)
    input: PathBuf,

    /// Simulated duration, seconds
    #[arg(long, default_value_t = 10.0)]
    seconds: f32,

    /// Fixed time step, seconds
    #[arg(long, default_value_t = 1.0 / 60.0)]
    dt: f32,

    /// Print a telemetry line every N ticks (0 = only the summary)
    #[arg(long, default_value_t = 30)]
    print_every: u32,

    /// Use the legacy depth-blind Archimedes buoyancy
    #[arg(long)]
    legacy: bool,

    /// Tag the run as interactive-preview mode
    #[arg(long)]
    preview: bool,
}

#[derive(Deserialize, Debug)]
struct FluidSpec {
    #[serde(default = "default_rho")]
    rho: f32,
    #[serde(default = "default_g")]
    g: f32,
    #[serde(default)]
    sea_level: f32,
}

fn default_rho() -> f32 { 997.0 }
fn default_g() -> f32 { 9.807 }

impl Default for FluidSpec {
    fn default() -> Self {
        Self { rho: default_rho(), g: default_g(), sea_level: 0.0 }
    }
}

#[derive(Deserialize, Debug)]
struct HullSpec {
    /// Object density, kg/m^3
    density: f32,
    /// Half extents in host units (centimeters by default)
    half_extents_units: [f32; 3],
    /// Starting height of the body center, meters
    #[serde(default)]
    start_y_m: f32,
    #[serde(default)]
    fluid: FluidSpec,
}

fn main() -> Result<()> {
    let opt = Opts::parse();

    let s = fs::read_to_string(&opt.input)
        .with_context(|| format!("failed to read {}", opt.input.display()))?;
    let hull: HullSpec = serde_json::from_str(&s)
        .with_context(|| format!("bad hull spec {}", opt.input.display()))?;

    let fluid = Fluid {
        rho: hull.fluid.rho,
        g: hull.fluid.g,
        sea_level: hull.fluid.sea_level,
    };
    let mut world = BobWorld::new(fluid);
    if opt.preview {
        world.set_mode(WorldMode::Preview);
    }

    let cfg = FloatConfig { density: hull.density, ..FloatConfig::default() };
    let he = vec3(
        hull.half_extents_units[0],
        hull.half_extents_units[1],
        hull.half_extents_units[2],
    );
    let start = vec3(0.0, hull.start_y_m, 0.0);
    let id = if opt.legacy {
        world.add_hull_with(
            he,
            cfg,
            start,
            Arc::new(ArchimedesBuoyancy),
            Arc::new(LinearQuadDrag::default()),
        )
    } else {
        world.add_hull(he, cfg, start)
    }
    .map_err(|e| anyhow::anyhow!("hull rejected: {e}"))?;

    let ticks = (opt.seconds / opt.dt).ceil() as u64;
    println!(
        "fluid id {:016x}  rho={} g={} sea_level={}",
        spec_id(&fluid), fluid.rho, fluid.g, fluid.sea_level
    );
    for t in 0..ticks {
        world.step(opt.dt).map_err(|e| anyhow::anyhow!("step failed: {e}"))?;
        if opt.print_every != 0 && t % u64::from(opt.print_every) == 0 {
            let p = world.body_pose(id);
            let v = world.body_vel(id);
            println!(
                "tick {t:5}  t={:7.2}s  y={:+8.3}m  vy={:+8.3}m/s",
                t as f32 * opt.dt, p.pos.y, v.lin.y
            );
        }
    }

    let p = world.body_pose(id);
    println!("final y={:+.3}m after {:.2}s", p.pos.y, opt.seconds);
    println!("state hash {}", hex32(world.step_hash()));
    Ok(())
}
