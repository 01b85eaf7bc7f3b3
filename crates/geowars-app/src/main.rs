use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use geowars_app::autopilot::Autopilot;
use geowars_app::game_loop::{run_game_loop, LoopOptions};
use geowars_app::render::LogRenderer;
use geowars_core::config::GameConfig;
use geowars_sim::SimulationEngine;

const DEFAULT_LOG_FILTER: &str = "geowars_app=info,geowars_sim=info";

/// Headless geowars runner - plays the simulation with an autopilot and logs
/// what happens.
#[derive(Parser, Debug)]
#[command(name = "geowars")]
#[command(about = "Run the geowars simulation headless with a scripted player")]
struct Args {
    /// Path to the TOML game configuration
    #[arg(long, default_value = "config/geowars.toml")]
    config: PathBuf,

    /// Stop after this many frames
    #[arg(long, default_value_t = 600, value_parser = clap::value_parser!(u64).range(1..))]
    frames: u64,

    /// Random seed (overrides the config file)
    #[arg(long)]
    seed: Option<u64>,

    /// Pace frames to the configured fps instead of running flat out
    #[arg(long)]
    realtime: bool,

    /// Log a summary line every N frames
    #[arg(long, default_value_t = 60)]
    report_every: u64,

    /// Autopilot fires once every N frames
    #[arg(long, default_value_t = 10)]
    fire_every: u64,
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let mut config = match GameConfig::load(&args.config) {
        Ok(config) => config,
        Err(err) => {
            tracing::error!(path = %args.config.display(), "failed to load config: {err}");
            return ExitCode::FAILURE;
        }
    };
    if args.seed.is_some() {
        config.seed = args.seed;
    }

    let mut engine = match SimulationEngine::new(config) {
        Ok(engine) => engine,
        Err(err) => {
            tracing::error!("invalid configuration: {err}");
            return ExitCode::FAILURE;
        }
    };

    let options = LoopOptions {
        max_frames: args.frames,
        realtime: args.realtime,
    };
    let mut pilot = Autopilot::new(args.fire_every, 150.0);
    let mut renderer = LogRenderer::new(args.report_every);

    let summary = run_game_loop(&mut engine, options, &mut pilot, &mut renderer);
    tracing::info!(
        frames = summary.frames,
        score = summary.score,
        kills = renderer.kills,
        respawns = renderer.respawns,
        "session over"
    );
    ExitCode::SUCCESS
}
