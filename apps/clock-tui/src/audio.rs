//! The rodio-backed alarm cue.
//!
//! The alarm is a short generated tone (two rising beeps) appended to a
//! single `Sink` the cue owns for its whole lifetime. `play` always
//! restarts the tone from the beginning; `silence` empties the queue.
//! Playback problems are logged and swallowed — the countdown never waits
//! for audio.

use clock_core::AlarmCue;
use rodio::buffer::SamplesBuffer;
use rodio::{OutputStream, Sink};
use tracing::debug;

const SAMPLE_RATE: u32 = 44_100;
const BEEP_FREQS_HZ: [f32; 2] = [880.0, 1174.66];
const BEEP_SECS: f32 = 0.4;
const FADE_SECS: f32 = 0.03;

#[derive(Debug, thiserror::Error)]
pub enum AudioError {
    #[error("No audio output device: {0}")]
    Stream(#[from] rodio::StreamError),

    #[error("Audio sink unavailable: {0}")]
    Sink(#[from] rodio::PlayError),
}

pub struct RodioCue {
    // Dropping the stream tears down the output device, so it must live
    // exactly as long as the sink.
    _stream: OutputStream,
    sink: Sink,
}

impl RodioCue {
    /// Opens the default output device. Fails when the host has no usable
    /// audio output; callers fall back to a silent cue.
    pub fn new() -> Result<Self, AudioError> {
        let (stream, handle) = OutputStream::try_default()?;
        let sink = Sink::try_new(&handle)?;
        debug!("Audio output opened");
        Ok(Self {
            _stream: stream,
            sink,
        })
    }
}

impl AlarmCue for RodioCue {
    fn play(&mut self) {
        // drop anything still ringing so the tone restarts from its start
        self.sink.stop();
        self.sink.append(alarm_tone());
        self.sink.play();
    }

    fn silence(&mut self) {
        self.sink.stop();
    }
}

/// Two rising beeps with short fades, about 0.8 s total.
fn alarm_tone() -> SamplesBuffer<f32> {
    let beep_len = (SAMPLE_RATE as f32 * BEEP_SECS) as usize;
    let mut samples = Vec::with_capacity(beep_len * BEEP_FREQS_HZ.len());

    for freq in BEEP_FREQS_HZ {
        for i in 0..beep_len {
            let t = i as f32 / SAMPLE_RATE as f32;
            let sample = (t * freq * 2.0 * std::f32::consts::PI).sin() * 0.5;
            let envelope = if t < FADE_SECS {
                t / FADE_SECS
            } else if t > BEEP_SECS - FADE_SECS {
                (BEEP_SECS - t) / FADE_SECS
            } else {
                1.0
            };
            samples.push(sample * envelope);
        }
    }

    SamplesBuffer::new(1, SAMPLE_RATE, samples)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alarm_tone_shape() {
        let expected = (SAMPLE_RATE as f32 * BEEP_SECS) as usize * BEEP_FREQS_HZ.len();
        let tone = alarm_tone();
        // SamplesBuffer exposes its data through the Source iterator
        let samples: Vec<f32> = tone.into_iter().collect();
        assert_eq!(samples.len(), expected);
        assert!(samples.iter().all(|s| s.abs() <= 0.5));
    }
}
