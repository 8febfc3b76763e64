//! Oscillators, envelope and voice mixing
//!
//! Pure sample generation, independent of any output device. A tone starts at
//! its peak and decays exponentially to [`ENVELOPE_FLOOR`] at the end of its
//! duration, which gives the plucked character of every cue.

use super::{Tone, Waveform};
use std::f32::consts::TAU;

/// Gain the envelope reaches at the end of a tone
pub const ENVELOPE_FLOOR: f32 = 0.001;

/// One period of `waveform`, `phase` in [0, 1)
pub fn oscillator(waveform: Waveform, phase: f32) -> f32 {
    match waveform {
        Waveform::Sine => (TAU * phase).sin(),
        Waveform::Square => {
            if phase < 0.5 {
                1.0
            } else {
                -1.0
            }
        }
        Waveform::Sawtooth => 2.0 * phase - 1.0,
        Waveform::Triangle => {
            if phase < 0.5 {
                4.0 * phase - 1.0
            } else {
                3.0 - 4.0 * phase
            }
        }
    }
}

/// Gain at `elapsed` seconds into a tone of `duration` seconds
pub fn envelope(peak: f32, elapsed: f32, duration: f32) -> f32 {
    if duration <= 0.0 || elapsed >= duration || elapsed < 0.0 {
        return 0.0;
    }
    if peak <= ENVELOPE_FLOOR {
        return peak;
    }
    peak * (ENVELOPE_FLOOR / peak).powf(elapsed / duration)
}

/// A tone being rendered at a fixed sample rate
#[derive(Debug, Clone)]
pub struct Voice {
    tone: Tone,
    sample_rate: f64,
    position: u64,
}

impl Voice {
    pub fn new(tone: Tone, sample_rate: f32) -> Self {
        Self {
            tone,
            sample_rate: sample_rate as f64,
            position: 0,
        }
    }

    fn elapsed(&self) -> f64 {
        self.position as f64 / self.sample_rate
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed() >= self.tone.duration as f64
    }

    pub fn next_sample(&mut self) -> f32 {
        if self.is_finished() {
            return 0.0;
        }
        let t = self.elapsed();
        let phase = (self.tone.frequency as f64 * t).fract() as f32;
        let sample = oscillator(self.tone.waveform, phase)
            * envelope(self.tone.peak, t as f32, self.tone.duration);
        self.position += 1;
        sample
    }
}

/// Additive mix of active voices
#[derive(Debug, Default)]
pub struct Mixer {
    voices: Vec<Voice>,
}

impl Mixer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, voice: Voice) {
        self.voices.push(voice);
    }

    pub fn active_voices(&self) -> usize {
        self.voices.len()
    }

    /// Next mono sample, clamped to [-1, 1]; finished voices are dropped
    pub fn next_sample(&mut self) -> f32 {
        if self.voices.is_empty() {
            return 0.0;
        }
        let sum: f32 = self.voices.iter_mut().map(Voice::next_sample).sum();
        self.voices.retain(|voice| !voice.is_finished());
        sum.clamp(-1.0, 1.0)
    }
}

/// Render a whole tone to mono samples
pub fn render(tone: Tone, sample_rate: f32) -> Vec<f32> {
    let mut voice = Voice::new(tone, sample_rate);
    let mut samples = Vec::with_capacity((tone.duration * sample_rate).ceil() as usize);
    while !voice.is_finished() {
        samples.push(voice.next_sample());
    }
    samples
}
