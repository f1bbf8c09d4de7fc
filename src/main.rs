//! Hex Bounce entry point
//!
//! Headless native runner: builds the simulation from a config, advances it
//! tick by tick and reports what happened. Windowing is left to a host.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use hex_bounce::platform::FixedStepClock;
use hex_bounce::renderer::build_frame;
use hex_bounce::sim::{SimState, tick};
use hex_bounce::SimConfig;
use hex_bounce::consts::MAX_SUBSTEPS;

#[derive(Parser, Debug)]
#[command(author, version, about = "Ball bouncing in a spinning hexagon", long_about = None)]
struct Cli {
    /// JSON config file (missing fields take defaults)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Number of ticks to simulate
    #[arg(long, default_value_t = 600)]
    ticks: u64,
    /// Rotation per tick in degrees (overrides the config)
    #[arg(long, allow_hyphen_values = true)]
    rotation: Option<f64>,
    /// Print one JSON line per tick
    #[arg(long)]
    trace: bool,
    /// Pace ticks at the configured tick rate
    #[arg(long)]
    realtime: bool,
    /// Most ticks to catch up on per frame in realtime mode
    #[arg(long, default_value_t = MAX_SUBSTEPS)]
    max_substeps: u32,
    /// Print the effective config as JSON and exit
    #[arg(long)]
    print_config: bool,
}

/// One line of `--trace` output
#[derive(Serialize)]
struct TraceLine {
    tick: u64,
    pos: [f64; 2],
    vel: [f64; 2],
    angle: f64,
    bounces: Vec<usize>,
}

impl TraceLine {
    fn from_state(state: &SimState) -> Self {
        Self {
            tick: state.time_ticks,
            pos: state.ball.pos.to_array(),
            vel: state.ball.vel.to_array(),
            angle: state.hexagon.angle_degrees(),
            bounces: state.bounces().map(|b| b.contact.edge).collect(),
        }
    }
}

fn load_config(cli: &Cli) -> Result<SimConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("read config {}", path.display()))?;
            SimConfig::from_json(&json).with_context(|| format!("load config {}", path.display()))?
        }
        None => SimConfig::default(),
    };

    if let Some(rotation) = cli.rotation {
        config.rotation_speed = rotation;
    }
    config.validate()?;
    Ok(config)
}

fn run(cli: &Cli, config: &SimConfig) -> Result<SimState> {
    let mut state = config.build_state();
    let mut clock = FixedStepClock::new(config.tick_secs()).with_max_substeps(cli.max_substeps);
    let mut last = Instant::now();

    while state.time_ticks < cli.ticks {
        let due = if cli.realtime {
            std::thread::sleep(Duration::from_secs_f64(clock.step_secs() / 2.0));
            let now = Instant::now();
            let due = clock.advance((now - last).as_secs_f64());
            last = now;
            log::trace!("{} ticks due, alpha {:.3}", due, clock.alpha());
            due as u64
        } else {
            1
        };

        for _ in 0..due.min(cli.ticks - state.time_ticks) {
            tick(&mut state, config.rotation_speed);
            if cli.trace {
                println!("{}", serde_json::to_string(&TraceLine::from_state(&state))?);
            }
        }
    }

    Ok(state)
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    if cli.print_config {
        println!("{}", config.to_json_pretty()?);
        return Ok(());
    }

    log::info!(
        "Hex Bounce starting: {} ticks at {:.2} deg/tick",
        cli.ticks,
        config.rotation_speed
    );

    let state = run(&cli, &config)?;

    let frame = build_frame(&state, &config);
    let frame_bytes: &[u8] = bytemuck::cast_slice(&frame);

    log::info!(
        "done after {} ticks: {} bounces, ball at ({:.1}, {:.1}), speed {:.2}",
        state.time_ticks,
        state.bounce_count,
        state.ball.pos.x,
        state.ball.pos.y,
        state.ball.speed()
    );
    log::info!(
        "final frame: {} vertices ({} bytes)",
        frame.len(),
        frame_bytes.len()
    );
    if state.escaped {
        log::warn!("ball escaped the hexagon during the run");
    }

    Ok(())
}
