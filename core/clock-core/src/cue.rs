//! The alarm-cue seam.
//!
//! The clock owns its cue as an explicit handle rather than looking an
//! audio element up from some global registry. Implementations must swallow
//! playback failures (log and continue): the countdown proceeds whether or
//! not the cue made a sound.

/// A short alarm sound the clock fires on each phase transition.
pub trait AlarmCue {
    /// Restart the cue from its cue point and play it. Infallible by
    /// contract; implementations log and swallow playback errors.
    fn play(&mut self);

    /// Stop playback and rewind. Called on reset.
    fn silence(&mut self);
}

/// A cue that makes no sound. Used for `--no-sound` and in tests.
#[derive(Debug, Default)]
pub struct NullCue;

impl AlarmCue for NullCue {
    fn play(&mut self) {}
    fn silence(&mut self) {}
}
