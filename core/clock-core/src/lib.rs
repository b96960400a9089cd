//! # clock-core
//!
//! Core library for the 25+5 clock: the countdown state machine, the
//! configured lengths, and the alarm-cue seam. Any frontend (TUI, desktop,
//! tests) drives the same [`Clock`] and renders its state.
//!
//! ## Design principles
//!
//! - **Synchronous**: no async runtime dependency. The frontend owns tick
//!   scheduling and calls [`Clock::tick`] once per elapsed second.
//! - **Not thread-safe**: clients provide their own synchronization.
//! - **Explicit effects**: the alarm is an [`AlarmCue`] handle passed in at
//!   construction, never a global looked up by name. Playback failures are
//!   the cue's problem to log and swallow; they never touch timer state.

pub mod clock;
pub mod cue;
pub mod types;

pub use clock::{Clock, PhaseChange};
pub use cue::{AlarmCue, NullCue};
pub use types::{
    DisplayState, Phase, Settings, DEFAULT_BREAK_MIN, DEFAULT_SESSION_MIN, LENGTH_STEP_MIN,
    MAX_LENGTH_MIN, MIN_LENGTH_MIN,
};
