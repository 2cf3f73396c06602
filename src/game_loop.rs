//! Fixed-timestep driver
//!
//! The host calls `frame` once per display callback with a monotonic
//! timestamp in milliseconds. Elapsed time is accumulated and spent in whole
//! ticks; each tick polls input, runs the simulation step, then draws.

use crate::config::GameConfig;
use crate::renderer::Renderer;
use crate::sim::{ControllerState, GameState, tick};

/// Fills the controller snapshot once per tick
pub trait InputSource {
    fn poll(&mut self, state: &GameState) -> ControllerState;
}

/// Replays the same controller state every tick
impl InputSource for ControllerState {
    fn poll(&mut self, _state: &GameState) -> ControllerState {
        *self
    }
}

#[derive(Debug, Clone)]
pub struct GameLoop {
    /// Seconds per tick
    tick_duration: f64,
    /// Unspent real time, seconds
    accumulator: f64,
    /// Timestamp of the previous callback (None before the first)
    last_time_ms: Option<f64>,
    tick_count: u64,
    max_ticks_per_frame: Option<u32>,
}

impl GameLoop {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            tick_duration: 1.0 / config.tick_rate_hz as f64,
            accumulator: 0.0,
            last_time_ms: None,
            tick_count: 0,
            max_ticks_per_frame: config.max_ticks_per_frame,
        }
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    pub fn tick_duration(&self) -> f64 {
        self.tick_duration
    }

    pub fn accumulator(&self) -> f64 {
        self.accumulator
    }

    /// Forget the baseline timestamp; the next callback starts from zero elapsed
    pub fn reset_clock(&mut self) {
        self.last_time_ms = None;
        self.accumulator = 0.0;
    }

    /// Handle one host callback. Returns the number of ticks run.
    pub fn frame<I, R>(
        &mut self,
        now_ms: f64,
        state: &mut GameState,
        input: &mut I,
        renderer: &mut R,
    ) -> u32
    where
        I: InputSource + ?Sized,
        R: Renderer + ?Sized,
    {
        // First callback only sets the baseline; a clock that steps back adds nothing
        let elapsed_ms = self.last_time_ms.map_or(0.0, |last| (now_ms - last).max(0.0));
        self.last_time_ms = Some(now_ms);
        self.accumulator += elapsed_ms / 1000.0;

        let dt = self.tick_duration as f32;
        let mut ticks = 0;
        // Exactly one tick's worth of time runs a tick
        while self.accumulator >= self.tick_duration {
            if self.max_ticks_per_frame.is_some_and(|max| ticks >= max) {
                log::warn!(
                    "Frame hit tick cap ({}), {:.1} ms behind",
                    ticks,
                    self.accumulator * 1000.0
                );
                break;
            }
            let controller = input.poll(state);
            tick(state, &controller, dt);
            renderer.draw(state);

            self.accumulator -= self.tick_duration;
            self.tick_count += 1;
            ticks += 1;
        }

        log::trace!("Frame at {:.1} ms ran {} ticks", now_ms, ticks);
        ticks
    }
}
