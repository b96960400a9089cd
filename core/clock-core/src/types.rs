//! Core types shared across all clock clients.
//!
//! These are the "lingua franca" of the clock: the configured lengths and
//! the display record every frontend renders. Nothing here is persisted;
//! all state dies with the process.

/// Smallest configurable length, in minutes.
pub const MIN_LENGTH_MIN: u32 = 1;
/// Largest configurable length, in minutes.
pub const MAX_LENGTH_MIN: u32 = 60;
/// Setter step, in minutes.
pub const LENGTH_STEP_MIN: u32 = 1;

/// Default break length, in minutes.
pub const DEFAULT_BREAK_MIN: u32 = 5;
/// Default session length, in minutes.
pub const DEFAULT_SESSION_MIN: u32 = 25;

/// The current countdown mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Focused work.
    Session,
    /// Rest.
    Break,
}

impl Phase {
    pub fn label(self) -> &'static str {
        match self {
            Phase::Session => "Session",
            Phase::Break => "Break",
        }
    }

    /// The phase the clock swaps into when this one runs out.
    pub fn other(self) -> Phase {
        match self {
            Phase::Session => Phase::Break,
            Phase::Break => Phase::Session,
        }
    }
}

/// Configured lengths, in minutes. Mutable only while the timer is stopped;
/// the [`Clock`](crate::Clock) enforces that, not the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub break_min: u32,
    pub session_min: u32,
}

impl Settings {
    pub fn new(break_min: u32, session_min: u32) -> Self {
        Self {
            break_min: clamp_length(break_min),
            session_min: clamp_length(session_min),
        }
    }

    /// The configured length for `phase`, in seconds.
    pub fn phase_secs(&self, phase: Phase) -> u32 {
        let minutes = match phase {
            Phase::Session => self.session_min,
            Phase::Break => self.break_min,
        };
        minutes * 60
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            break_min: DEFAULT_BREAK_MIN,
            session_min: DEFAULT_SESSION_MIN,
        }
    }
}

/// What the countdown display shows right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayState {
    /// Seconds remaining in the current phase. Never underflows.
    pub remaining_secs: u32,
    pub phase: Phase,
    pub running: bool,
}

impl DisplayState {
    /// Fresh display for the start of a session of `session_min` minutes.
    /// Clamps into the configurable range, so the seconds can't overflow.
    pub fn fresh(session_min: u32) -> Self {
        Self {
            remaining_secs: clamp_length(session_min) * 60,
            phase: Phase::Session,
            running: false,
        }
    }

    /// The remaining time as zero-padded `mm:ss`.
    pub fn mmss(&self) -> String {
        format!(
            "{:02}:{:02}",
            self.remaining_secs / 60,
            self.remaining_secs % 60
        )
    }
}

/// Clamps a requested length into the configurable range.
pub fn clamp_length(minutes: u32) -> u32 {
    minutes.clamp(MIN_LENGTH_MIN, MAX_LENGTH_MIN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_length_bounds() {
        assert_eq!(clamp_length(0), MIN_LENGTH_MIN);
        assert_eq!(clamp_length(1), 1);
        assert_eq!(clamp_length(60), 60);
        assert_eq!(clamp_length(61), MAX_LENGTH_MIN);
    }

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.break_min, 5);
        assert_eq!(settings.session_min, 25);
    }

    #[test]
    fn test_phase_secs() {
        let settings = Settings::default();
        assert_eq!(settings.phase_secs(Phase::Session), 1500);
        assert_eq!(settings.phase_secs(Phase::Break), 300);
    }

    #[test]
    fn test_phase_other_round_trips() {
        assert_eq!(Phase::Session.other(), Phase::Break);
        assert_eq!(Phase::Break.other(), Phase::Session);
    }

    #[test]
    fn test_mmss_zero_padding() {
        let mut display = DisplayState::fresh(25);
        assert_eq!(display.mmss(), "25:00");
        display.remaining_secs = 61;
        assert_eq!(display.mmss(), "01:01");
        display.remaining_secs = 0;
        assert_eq!(display.mmss(), "00:00");
    }

    #[test]
    fn test_fresh_display() {
        let display = DisplayState::fresh(25);
        assert_eq!(display.remaining_secs, 1500);
        assert_eq!(display.phase, Phase::Session);
        assert!(!display.running);
    }

    #[test]
    fn test_fresh_clamps_out_of_range_lengths() {
        assert_eq!(DisplayState::fresh(0).remaining_secs, 60);
        assert_eq!(DisplayState::fresh(u32::MAX).remaining_secs, 3600);
    }
}
