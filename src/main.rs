//! Copy Sketch entry point
//!
//! Runs a session in the terminal with the autopilot holding the pen and
//! prints each round's canvases as text.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use copy_sketch::consts::SIM_DT;
use copy_sketch::hud::{self, HudSnapshot};
use copy_sketch::renderer::render_side_by_side;
use copy_sketch::sim::{Autopilot, Composition, CopySurface, FrameClock, GameEvent, GameState};
use copy_sketch::{Settings, SettingsError};

#[derive(Parser, Debug)]
#[command(name = "copy-sketch", about = "Copy the shapes before the timer runs out")]
struct Cli {
    /// Run seed (defaults to the current time)
    #[arg(long)]
    seed: Option<u64>,

    /// JSON settings file
    #[arg(long, env = "COPY_SKETCH_SETTINGS")]
    settings: Option<PathBuf>,

    /// How closely the autopilot traces, 0 to 1
    #[arg(long, default_value_t = 0.9)]
    accuracy: f32,

    /// Stop after this many rounds even if lives remain
    #[arg(long, default_value_t = 20)]
    max_rounds: u32,

    /// Text canvas width in characters
    #[arg(long, default_value_t = 32)]
    columns: usize,

    /// Text canvas height in lines
    #[arg(long, default_value_t = 16)]
    rows: usize,

    /// Print the final HUD snapshot as JSON
    #[arg(long)]
    json: bool,
}

fn load_settings(path: Option<&PathBuf>) -> Result<Settings, SettingsError> {
    match path {
        Some(path) => Settings::load(path),
        None => {
            log::info!("Using default settings");
            Ok(Settings::default())
        }
    }
}

fn time_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let settings = match load_settings(cli.settings.as_ref()) {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!("copy-sketch: {err}");
            return ExitCode::FAILURE;
        }
    };

    let seed = cli.seed.unwrap_or_else(time_seed);
    log::info!("Copy Sketch starting with seed {seed}");

    let mut state = GameState::new(seed, settings);
    let dot_radius = state.settings.ink_dot_radius();
    let mut pilot = Autopilot::new(seed, cli.accuracy);
    let mut clock = FrameClock::new();

    let mut reference: Option<Composition> = None;
    // Mirrors the live copy from ink events; the core drops its canvases
    // on the tick that scores the round
    let mut copy: Option<CopySurface> = None;
    let mut rounds = 0;
    let mut finished = false;

    while !finished && rounds < cli.max_rounds {
        let mut input = pilot.next_input(&state);
        clock.advance(&mut state, &mut input, SIM_DT);

        for event in state.drain_events() {
            match event {
                GameEvent::RoundStarted { round, primitives } => {
                    println!("\n== Round {round}: {primitives} shape(s) ==");
                }
                GameEvent::CompositionReady { composition, .. } => {
                    reference = Some(composition);
                }
                GameEvent::CopySurfaceReady { .. } => {
                    copy = Some(CopySurface::new(dot_radius));
                }
                GameEvent::InkStamped { point, .. } => {
                    if let Some(copy) = copy.as_mut() {
                        copy.add_ink(point);
                    }
                }
                GameEvent::RoundEnded(report) => {
                    rounds += 1;
                    if let (Some(original), Some(copy)) = (&reference, &copy) {
                        print!("{}", render_side_by_side(original, copy, cli.columns, cli.rows));
                    }
                    for line in hud::round_summary(&report) {
                        println!("  {line}");
                    }
                }
                GameEvent::GameOver {
                    final_score,
                    rounds_played,
                    reason,
                } => {
                    println!();
                    for line in hud::game_over_summary(final_score, rounds_played, reason) {
                        println!("{line}");
                    }
                    finished = true;
                }
            }
        }
    }

    let snapshot = HudSnapshot::from_state(&state);
    println!("\n{}", snapshot.status_line());
    if cli.json {
        match serde_json::to_string_pretty(&snapshot) {
            Ok(json) => println!("{json}"),
            Err(err) => log::warn!("Could not encode HUD snapshot: {err}"),
        }
    }

    ExitCode::SUCCESS
}
