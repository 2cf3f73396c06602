//! Countdown timer gating repeated spawn/fire actions
//!
//! Two states: counting down, or ready (remaining <= 0). A ready timer fires
//! on the first tick it is asked to and rearms to the full interval.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cooldown {
    /// Seconds until ready
    pub remaining: f32,
    /// Seconds to rearm to after firing
    pub interval: f32,
}

impl Cooldown {
    /// A timer that is ready immediately
    pub fn new(interval: f32) -> Self {
        Self {
            remaining: 0.0,
            interval,
        }
    }

    #[inline]
    pub fn is_ready(&self) -> bool {
        self.remaining <= 0.0
    }

    /// Advance by one tick. Returns true if the gated action should happen now.
    pub fn tick(&mut self, dt: f32, wants_fire: bool) -> bool {
        if self.is_ready() && wants_fire {
            self.remaining = self.interval;
            true
        } else {
            self.remaining = (self.remaining - dt).max(0.0);
            false
        }
    }

    pub fn reset(&mut self) {
        self.remaining = 0.0;
    }
}
