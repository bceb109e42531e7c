// src/state/progress_state.rs
//
// Cosmetic progress for the analysis bar. Not tied to bytes sent: it creeps
// up while a request is in flight, snaps to full when it ends, then clears.
use rand::Rng;
use std::time::{Duration, Instant};

pub const TICK_INTERVAL: Duration = Duration::from_millis(300);
pub const RESET_DELAY: Duration = Duration::from_millis(500);
pub const IN_FLIGHT_CAP: f32 = 90.0;
pub const MAX_STEP: f32 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
enum Phase {
    #[default]
    Stopped,
    Running { last_tick: Instant },
    Finishing { since: Instant },
}

#[derive(Debug, Clone, Default)]
pub struct ProgressState {
    percent: f32,
    phase: Phase,
}

impl ProgressState {
    pub fn start(&mut self, now: Instant) {
        self.percent = 0.0;
        self.phase = Phase::Running { last_tick: now };
    }

    pub fn finish(&mut self, now: Instant) {
        self.percent = 100.0;
        self.phase = Phase::Finishing { since: now };
    }

    /// Tear down without the completion flourish.
    pub fn stop(&mut self) {
        self.percent = 0.0;
        self.phase = Phase::Stopped;
    }

    /// Advance to `now`. Returns true when the displayed value changed.
    pub fn tick<R: Rng>(&mut self, now: Instant, rng: &mut R) -> bool {
        let before = self.percent;

        match self.phase {
            Phase::Stopped => {}
            Phase::Running { mut last_tick } => {
                while now.saturating_duration_since(last_tick) >= TICK_INTERVAL {
                    last_tick += TICK_INTERVAL;
                    if self.percent < IN_FLIGHT_CAP {
                        let step = rng.gen_range(0.0..MAX_STEP);
                        self.percent = (self.percent + step).min(IN_FLIGHT_CAP);
                    }
                }
                self.phase = Phase::Running { last_tick };
            }
            Phase::Finishing { since } => {
                if now.saturating_duration_since(since) >= RESET_DELAY {
                    self.stop();
                }
            }
        }

        self.percent != before
    }

    pub fn percent(&self) -> f32 {
        self.percent.clamp(0.0, 100.0)
    }

    pub fn fraction(&self) -> f32 {
        self.percent() / 100.0
    }

    pub fn is_active(&self) -> bool {
        self.phase != Phase::Stopped
    }

    /// How long until the next visible change, for scheduling a repaint.
    pub fn next_change_in(&self, now: Instant) -> Option<Duration> {
        match self.phase {
            Phase::Stopped => None,
            Phase::Running { last_tick } => {
                Some((last_tick + TICK_INTERVAL).saturating_duration_since(now))
            }
            Phase::Finishing { since } => {
                Some((since + RESET_DELAY).saturating_duration_since(now))
            }
        }
    }
}
