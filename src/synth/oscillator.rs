//! Oscillator primitives — periodic waveform generation.

use std::f64::consts::PI;
use std::str::FromStr;

/// Available waveform shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Square,
    Saw,
}

impl Waveform {
    pub const ALL: [Waveform; 3] = [Waveform::Sine, Waveform::Square, Waveform::Saw];

    pub fn name(self) -> &'static str {
        match self {
            Waveform::Sine => "sine",
            Waveform::Square => "square",
            Waveform::Saw => "sawtooth",
        }
    }
}

impl FromStr for Waveform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sine" => Ok(Waveform::Sine),
            "square" => Ok(Waveform::Square),
            "sawtooth" | "saw" => Ok(Waveform::Saw),
            other => Err(format!(
                "unknown waveform '{other}' (expected sine, square, or sawtooth)"
            )),
        }
    }
}

/// Generate a single sample for the given waveform at the specified phase.
///
/// `phase` is in the range [0.0, 1.0), representing one full cycle.
/// Returns a value in [-1.0, 1.0].
pub fn oscillator(waveform: Waveform, phase: f64) -> f64 {
    match waveform {
        Waveform::Sine => (phase * 2.0 * PI).sin(),
        Waveform::Square => {
            if phase < 0.5 {
                1.0
            } else {
                -1.0
            }
        }
        Waveform::Saw => 2.0 * phase - 1.0,
    }
}

/// Number of samples covering `duration_secs` at `sample_rate`.
pub fn sample_count(duration_secs: f64, sample_rate: u32) -> usize {
    (sample_rate as f64 * duration_secs).round() as usize
}

/// Generate a tone buffer of `round(sample_rate * duration_secs)` samples.
///
/// Samples lie on the uniform grid `t_i = i / sample_rate` for `i` in
/// `[0, N)`, endpoint excluded. Callers must route zero-frequency events to
/// [`silence`] instead of this function.
pub fn generate(waveform: Waveform, frequency: f64, duration_secs: f64, sample_rate: u32) -> Vec<f32> {
    let num_samples = sample_count(duration_secs, sample_rate);
    let mut output = Vec::with_capacity(num_samples);

    for i in 0..num_samples {
        let t = i as f64 / sample_rate as f64;
        let phase = (frequency * t).fract();
        output.push(oscillator(waveform, phase) as f32);
    }

    output
}

/// A zero buffer with the same length rule as [`generate`].
pub fn silence(duration_secs: f64, sample_rate: u32) -> Vec<f32> {
    vec![0.0; sample_count(duration_secs, sample_rate)]
}
