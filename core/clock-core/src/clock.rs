//! The countdown state machine.
//!
//! One [`Clock`] owns the configured lengths, the display record, and the
//! alarm cue for its whole mounted lifetime. The frontend schedules ticks
//! (one per elapsed second while running) and forwards control events; all
//! rules live here so every client behaves identically.
//!
//! The phase transition is an explicit post-decrement check, not a reactive
//! subscription: it fires only when a tick moves the count from 1 to 0,
//! never merely because the count "is 0", so it cannot double-fire.

use tracing::{debug, info};

use crate::cue::AlarmCue;
use crate::types::{clamp_length, DisplayState, Phase, Settings, LENGTH_STEP_MIN};

/// Emitted by [`Clock::tick`] when a countdown ran out and the phase
/// swapped. Frontends use it for notifications and status messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseChange {
    pub from: Phase,
    pub to: Phase,
    /// Configured length of the phase just entered, in minutes.
    pub minutes: u32,
}

/// The single owner of all clock state.
pub struct Clock {
    /// What reset restores. Normally 5/25; CLI flags may override per run.
    defaults: Settings,
    settings: Settings,
    display: DisplayState,
    cue: Box<dyn AlarmCue>,
}

impl Clock {
    /// A clock with the stock 5-minute break / 25-minute session defaults.
    pub fn new(cue: Box<dyn AlarmCue>) -> Self {
        Self::with_defaults(Settings::default(), cue)
    }

    /// A clock whose reset target is `defaults` instead of the stock
    /// values. Out-of-range lengths are clamped; the bounds are structural
    /// and cannot be sidestepped through a hand-built `Settings`.
    pub fn with_defaults(defaults: Settings, cue: Box<dyn AlarmCue>) -> Self {
        let defaults = Settings::new(defaults.break_min, defaults.session_min);
        Self {
            defaults,
            settings: defaults,
            display: DisplayState::fresh(defaults.session_min),
            cue,
        }
    }

    pub fn settings(&self) -> Settings {
        self.settings
    }

    pub fn display(&self) -> DisplayState {
        self.display
    }

    /// Start/Stop. Returns the new running flag so the frontend can re-arm
    /// or drop its tick source.
    pub fn toggle_running(&mut self) -> bool {
        self.display.running = !self.display.running;
        debug!(running = self.display.running, "Start/stop toggled");
        self.display.running
    }

    /// Applies one elapsed second. No-op while stopped. When the decrement
    /// lands on zero the cue plays and the phase swaps to the other
    /// configured length, all within this call.
    pub fn tick(&mut self) -> Option<PhaseChange> {
        if !self.display.running {
            return None;
        }
        let hit_zero = self.display.remaining_secs == 1;
        self.display.remaining_secs = self.display.remaining_secs.saturating_sub(1);
        if !hit_zero {
            return None;
        }

        self.cue.play();
        let from = self.display.phase;
        let to = from.other();
        self.display.phase = to;
        self.display.remaining_secs = self.settings.phase_secs(to);
        info!(
            from = from.label(),
            to = to.label(),
            secs = self.display.remaining_secs,
            "Phase transition"
        );
        Some(PhaseChange {
            from,
            to,
            minutes: self.display.remaining_secs / 60,
        })
    }

    /// Restores everything to the construction defaults and silences the
    /// cue. Allowed from any state, running or not.
    pub fn reset(&mut self) {
        self.settings = self.defaults;
        self.display = DisplayState::fresh(self.defaults.session_min);
        self.cue.silence();
        info!("Clock reset to defaults");
    }

    pub fn increment_break(&mut self) {
        self.set_break_length(self.settings.break_min.saturating_add(LENGTH_STEP_MIN));
    }

    pub fn decrement_break(&mut self) {
        self.set_break_length(self.settings.break_min.saturating_sub(LENGTH_STEP_MIN));
    }

    pub fn increment_session(&mut self) {
        self.set_session_length(self.settings.session_min.saturating_add(LENGTH_STEP_MIN));
    }

    pub fn decrement_session(&mut self) {
        self.set_session_length(self.settings.session_min.saturating_sub(LENGTH_STEP_MIN));
    }

    /// Stores a new break length. Rejected while running; clamped to the
    /// valid range. Never touches the displayed phase/time — the new value
    /// only matters at the next transition into Break.
    pub fn set_break_length(&mut self, minutes: u32) {
        if self.display.running {
            return;
        }
        self.settings.break_min = clamp_length(minutes);
    }

    /// Stores a new session length. Rejected while running. A request that
    /// clamps back to the stored value (a setter step at the bounds) is a
    /// no-op. On an actual change the display immediately rewinds to a
    /// fresh stopped Session of the new length, even if it was showing
    /// Break.
    pub fn set_session_length(&mut self, minutes: u32) {
        if self.display.running {
            return;
        }
        let minutes = clamp_length(minutes);
        if minutes == self.settings.session_min {
            return;
        }
        self.settings.session_min = minutes;
        self.display = DisplayState::fresh(minutes);
    }
}
