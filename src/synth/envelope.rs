//! ADSR envelope shaping over whole sample buffers.
//!
//! Segment lengths are fractions of the buffer length rather than absolute
//! times, so every note gets the same proportional shape regardless of tempo.

/// Attack-Decay-Sustain-Release envelope with segment lengths as fractions
/// of the total sample count. Sustain is a level (0.0–1.0) and absorbs
/// whatever rounding the other three segments leave over.
#[derive(Debug, Clone, Copy)]
pub struct Envelope {
    pub attack: f64,
    pub decay: f64,
    pub release: f64,
    pub sustain_level: f64,
}

impl Envelope {
    /// The stock shape: 10% attack, 10% decay, 20% release, sustain at 0.7.
    pub fn standard() -> Self {
        Self {
            attack: 0.1,
            decay: 0.1,
            release: 0.2,
            sustain_level: 0.7,
        }
    }

    /// Amplitude curve of exactly `total_samples` values.
    ///
    /// Attack ramps 0→1, decay 1→sustain, sustain holds flat, release ramps
    /// sustain→0, all linear. Segment sample counts are truncated fractions
    /// of the total; the sustain segment takes the remainder, so the output
    /// length always equals `total_samples`, even for tiny buffers where some
    /// segments round down to zero.
    pub fn curve(&self, total_samples: usize) -> Vec<f64> {
        let attack_len = (self.attack * total_samples as f64) as usize;
        let decay_len = (self.decay * total_samples as f64) as usize;
        let release_len = (self.release * total_samples as f64) as usize;
        let sustain_len = total_samples - attack_len - decay_len - release_len;

        let mut curve = Vec::with_capacity(total_samples);
        extend_ramp(&mut curve, 0.0, 1.0, attack_len);
        extend_ramp(&mut curve, 1.0, self.sustain_level, decay_len);
        curve.extend(std::iter::repeat(self.sustain_level).take(sustain_len));
        extend_ramp(&mut curve, self.sustain_level, 0.0, release_len);
        curve
    }

    /// Multiply `samples` elementwise by this envelope's curve.
    pub fn apply(&self, samples: &mut [f32]) {
        let curve = self.curve(samples.len());
        for (sample, amp) in samples.iter_mut().zip(curve) {
            *sample *= amp as f32;
        }
    }
}

impl Default for Envelope {
    fn default() -> Self {
        Self::standard()
    }
}

/// Append `len` linearly interpolated values from `from` to `to`, endpoints
/// inclusive. A single-point ramp yields `from`.
fn extend_ramp(out: &mut Vec<f64>, from: f64, to: f64, len: usize) {
    match len {
        0 => {}
        1 => out.push(from),
        _ => {
            let step = (to - from) / (len - 1) as f64;
            out.extend((0..len).map(|i| from + step * i as f64));
        }
    }
}
