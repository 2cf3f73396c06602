//! Sky Dodger headless runner
//!
//! Drives the fixed-timestep loop with a synthetic frame clock and the
//! autopilot, then prints the final HUD as JSON.
//!
//! Usage: `sky-dodger [config.json] [seconds]`

use sky_dodger::input::Autopilot;
use sky_dodger::renderer::{DrawListRenderer, Hud};
use sky_dodger::sim::GameState;
use sky_dodger::{GameConfig, GameLoop};

/// Alternating frame intervals (ms) to mimic display jitter
const FRAME_INTERVALS_MS: [f64; 3] = [16.0, 17.5, 16.9];
const DEFAULT_SECONDS: f64 = 60.0;

fn load_config(path: Option<&str>) -> GameConfig {
    let Some(path) = path else {
        return GameConfig::default();
    };
    match GameConfig::load(path) {
        Ok(config) => {
            log::info!("Loaded config from {}", path);
            config
        }
        Err(e) => {
            log::error!("Could not load {}: {} (using defaults)", path, e);
            GameConfig::default()
        }
    }
}

fn main() {
    env_logger::init();
    log::info!("Sky Dodger (headless) starting...");

    let args: Vec<String> = std::env::args().collect();
    let config = load_config(args.get(1).map(String::as_str));
    let seconds = args
        .get(2)
        .and_then(|s| s.parse::<f64>().ok())
        .unwrap_or(DEFAULT_SECONDS);

    let mut game_loop = GameLoop::new(&config);
    let mut state = match GameState::try_with_config(config) {
        Ok(state) => state,
        Err(e) => {
            log::error!("{} (using defaults)", e);
            GameState::with_config(GameConfig::default())
        }
    };
    let mut pilot = Autopilot::with_session_limit(3);
    let mut renderer = DrawListRenderer::new();

    let end_ms = seconds * 1000.0;
    let mut now_ms = 0.0;
    let mut frame = 0usize;
    while now_ms <= end_ms {
        game_loop.frame(now_ms, &mut state, &mut pilot, &mut renderer);
        now_ms += FRAME_INTERVALS_MS[frame % FRAME_INTERVALS_MS.len()];
        frame += 1;
    }

    log::info!(
        "Ran {} frames, {} ticks, {} sessions",
        frame,
        game_loop.tick_count(),
        state.sessions
    );

    if let Some(frame) = &renderer.frame {
        log::debug!(
            "Last frame: {} vertices, {} bytes",
            frame.vertices.len(),
            frame.vertex_bytes().len()
        );
    }
    let hud = renderer
        .frame
        .map(|f| f.hud)
        .unwrap_or_else(|| Hud::from_state(&state));
    for line in hud.lines() {
        println!("{}", line);
    }
    match serde_json::to_string_pretty(&hud) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Failed to serialize HUD: {}", e),
    }
}
