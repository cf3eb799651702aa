//! Melody rendering — drives the parse → resolve → oscillate → shape chain
//! and assembles one normalized 16-bit PCM buffer.

use crate::notation::{self, NoteEvent};

use super::envelope::Envelope;
use super::oscillator::{self, Waveform};

/// Default output sample rate in Hz.
pub const DEFAULT_SAMPLE_RATE: u32 = 44100;

/// Spacer gap appended after every note and rest, in seconds.
pub const NOTE_GAP_SECS: f64 = 0.01;

/// Errors from misconfigured rendering parameters.
///
/// These indicate a broken caller, not bad musical content — malformed
/// melody text never produces one of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// Tempo must be a positive number of beats per minute.
    InvalidTempo(u32),
    /// Sample rate must be positive.
    InvalidSampleRate(u32),
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::InvalidTempo(bpm) => {
                write!(f, "tempo must be positive, got {bpm} BPM")
            }
            RenderError::InvalidSampleRate(rate) => {
                write!(f, "sample rate must be positive, got {rate} Hz")
            }
        }
    }
}

impl std::error::Error for RenderError {}

/// Renders note events into a mono 16-bit PCM buffer.
#[derive(Debug)]
pub struct Renderer {
    bpm: u32,
    waveform: Waveform,
    sample_rate: u32,
    envelope: Envelope,
}

impl Renderer {
    /// Create a renderer at the default 44100 Hz sample rate.
    pub fn new(bpm: u32, waveform: Waveform) -> Result<Self, RenderError> {
        Self::with_sample_rate(bpm, waveform, DEFAULT_SAMPLE_RATE)
    }

    /// Create a renderer with an explicit sample rate.
    pub fn with_sample_rate(
        bpm: u32,
        waveform: Waveform,
        sample_rate: u32,
    ) -> Result<Self, RenderError> {
        if bpm == 0 {
            return Err(RenderError::InvalidTempo(bpm));
        }
        if sample_rate == 0 {
            return Err(RenderError::InvalidSampleRate(sample_rate));
        }
        Ok(Self {
            bpm,
            waveform,
            sample_rate,
            envelope: Envelope::standard(),
        })
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn bpm(&self) -> u32 {
        self.bpm
    }

    pub fn waveform(&self) -> Waveform {
        self.waveform
    }

    /// Render parsed events into normalized 16-bit PCM.
    ///
    /// Tones are oscillated and envelope-shaped; rests (and unknown pitches,
    /// which resolve to frequency 0) become silence of the same duration.
    /// A 10 ms gap follows every event. The concatenated signal is scaled so
    /// its peak hits exactly 32767, then quantized. An empty event list
    /// yields `None` — "no audio", distinct from a present-but-silent buffer.
    pub fn render(&self, events: &[NoteEvent]) -> Option<Vec<i16>> {
        if events.is_empty() {
            return None;
        }

        let seconds_per_beat = 60.0 / self.bpm as f64;
        let mut signal: Vec<f32> = Vec::new();

        for event in events {
            let duration_secs = seconds_per_beat * event.duration_beats;
            let frequency = event.pitch.frequency();

            if frequency > 0.0 {
                let mut tone =
                    oscillator::generate(self.waveform, frequency, duration_secs, self.sample_rate);
                self.envelope.apply(&mut tone);
                signal.extend_from_slice(&tone);
            } else {
                signal.extend_from_slice(&oscillator::silence(duration_secs, self.sample_rate));
            }

            signal.extend_from_slice(&oscillator::silence(NOTE_GAP_SECS, self.sample_rate));
        }

        Some(quantize(&signal))
    }

    /// Parse a melody string and render it. `None` when the string contains
    /// no tokens at all.
    pub fn render_melody(&self, melody: &str) -> Option<Vec<i16>> {
        self.render(&notation::parse_melody(melody))
    }
}

/// Scale so the peak maps to exactly 32767, then truncate to i16.
/// An all-zero signal stays all zero.
fn quantize(signal: &[f32]) -> Vec<i16> {
    let peak = signal.iter().fold(0.0f32, |max, s| max.max(s.abs()));
    if peak > 0.0 {
        // Dividing by the peak per sample keeps the peak itself at exactly
        // ±1.0, so it quantizes to exactly ±32767.
        signal
            .iter()
            .map(|&s| (s as f64 / peak as f64 * 32767.0) as i16)
            .collect()
    } else {
        vec![0; signal.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notation::parse_melody;

    const SR: u32 = 44100;

    fn renderer(bpm: u32) -> Renderer {
        Renderer::new(bpm, Waveform::Sine).unwrap()
    }

    fn gap_samples() -> usize {
        (SR as f64 * NOTE_GAP_SECS).round() as usize
    }

    #[test]
    fn zero_tempo_rejected() {
        assert_eq!(
            Renderer::new(0, Waveform::Sine).unwrap_err(),
            RenderError::InvalidTempo(0)
        );
    }

    #[test]
    fn zero_sample_rate_rejected() {
        assert_eq!(
            Renderer::with_sample_rate(120, Waveform::Sine, 0).unwrap_err(),
            RenderError::InvalidSampleRate(0)
        );
    }

    #[test]
    fn empty_melody_is_no_audio() {
        assert!(renderer(120).render_melody("").is_none());
        assert!(renderer(120).render(&[]).is_none());
    }

    #[test]
    fn single_note_length() {
        // One beat at 120 BPM = 0.5s = 22050 samples, plus the 10ms gap.
        let pcm = renderer(120).render_melody("A4:1").unwrap();
        assert_eq!(pcm.len(), 22050 + gap_samples());
    }

    #[test]
    fn rest_renders_as_silence() {
        // R:2 at 120 BPM = 1.0s of zeros plus the gap.
        let pcm = renderer(120).render_melody("R:2").unwrap();
        assert_eq!(pcm.len(), 44100 + gap_samples());
        assert!(pcm.iter().all(|&s| s == 0));
    }

    #[test]
    fn unknown_pitch_renders_as_silence() {
        let pcm = renderer(120).render_melody("H4:1").unwrap();
        assert!(pcm.iter().all(|&s| s == 0));
        assert_eq!(pcm.len(), 22050 + gap_samples());
    }

    #[test]
    fn peak_normalized_to_full_scale() {
        let pcm = renderer(120).render_melody("C4 E4 G4").unwrap();
        let peak = pcm.iter().map(|s| (*s as i32).abs()).max().unwrap();
        assert_eq!(peak, 32767);
    }

    #[test]
    fn normalization_applies_per_buffer() {
        for wf in Waveform::ALL {
            let r = Renderer::new(90, wf).unwrap();
            let pcm = r.render_melody("C4:0.5 R:0.5 G5:1").unwrap();
            let peak = pcm.iter().map(|s| (*s as i32).abs()).max().unwrap();
            assert_eq!(peak, 32767, "waveform {wf:?}");
        }
    }

    #[test]
    fn gap_follows_every_event() {
        // Two quarter notes at 60 BPM: 1s each, 10ms gap after each.
        let pcm = renderer(60).render_melody("C4 D4").unwrap();
        assert_eq!(pcm.len(), 2 * (44100 + gap_samples()));
        // The gap after the second note is silent.
        let tail = &pcm[pcm.len() - gap_samples()..];
        assert!(tail.iter().all(|&s| s == 0));
    }

    #[test]
    fn tempo_scales_durations() {
        let slow = renderer(60).render_melody("A4:1").unwrap();
        let fast = renderer(240).render_melody("A4:1").unwrap();
        assert_eq!(slow.len(), 44100 + gap_samples());
        assert_eq!(fast.len(), 11025 + gap_samples());
    }

    #[test]
    fn render_is_deterministic() {
        let a = renderer(120).render_melody("C4 E4 G4 C5:2").unwrap();
        let b = renderer(120).render_melody("C4 E4 G4 C5:2").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn render_accepts_parsed_events() {
        let events = parse_melody("C4:1 E4:1");
        let via_events = renderer(120).render(&events).unwrap();
        let via_string = renderer(120).render_melody("C4:1 E4:1").unwrap();
        assert_eq!(via_events, via_string);
    }

    #[test]
    fn note_starts_quiet_from_attack() {
        let pcm = renderer(120).render_melody("A4:1").unwrap();
        // First 20 samples sit at the very start of the attack ramp.
        for &s in &pcm[..20] {
            assert!((s as i32).abs() < 2000, "attack start too loud: {s}");
        }
    }

    #[test]
    fn quantize_all_zero_stays_zero() {
        let out = quantize(&[0.0, 0.0, 0.0]);
        assert_eq!(out, vec![0, 0, 0]);
    }

    #[test]
    fn quantize_negative_peak_maps_to_full_scale() {
        let out = quantize(&[-0.5, 0.25]);
        assert_eq!(out[0], -32767);
        assert_eq!(out[1], 16383);
    }
}
