//! Flapper entry point
//!
//! Runs the simulation headless: a scripted autopilot plays, frames are
//! paced by sleeping, and an ASCII view is printed when enabled.

use std::process::ExitCode;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use flapper::Settings;
use flapper::error::InitError;
use flapper::platform::{Autopilot, SystemClock};
use flapper::renderer::{AsciiRenderer, FileSpriteLoader};
use flapper::settings::DEFAULT_SETTINGS_PATH;
use flapper::sim::{SimContext, Simulation};

fn main() -> ExitCode {
    // RUST_LOG overrides the default level
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Flapper starting...");

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("Failed to initialize: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), InitError> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_SETTINGS_PATH.to_string());
    let settings = Settings::load(&path)?;

    let seed = settings.seed.unwrap_or_else(wall_clock_seed);
    log::info!("Seed: {seed}");

    let ctx = SimContext::new(Box::new(SystemClock::new()), seed);
    let mut sprites = FileSpriteLoader::new(&settings.assets_dir);
    let mut sim = Simulation::new(settings.pipe_count, ctx, &mut sprites);

    let mut input = Autopilot::new(settings.flap_every, settings.max_frames);
    let mut renderer = AsciiRenderer::stdout(settings.ascii_every);
    let frame_time = Duration::from_millis(settings.frame_ms);

    sim.run(&mut input, &mut renderer, || std::thread::sleep(frame_time));
    Ok(())
}

/// Seconds since the Unix epoch, or 0 if the system clock is before it
fn wall_clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_secs())
}
