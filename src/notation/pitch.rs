//! Pitch classes and equal-temperament frequency resolution.

/// One of the 12 equal-temperament pitch classes within an octave.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PitchClass {
    C,
    CSharp,
    D,
    DSharp,
    E,
    F,
    FSharp,
    G,
    GSharp,
    A,
    ASharp,
    B,
}

pub const ALL_PITCH_CLASSES: [PitchClass; 12] = [
    PitchClass::C,
    PitchClass::CSharp,
    PitchClass::D,
    PitchClass::DSharp,
    PitchClass::E,
    PitchClass::F,
    PitchClass::FSharp,
    PitchClass::G,
    PitchClass::GSharp,
    PitchClass::A,
    PitchClass::ASharp,
    PitchClass::B,
];

impl PitchClass {
    /// Parse a pitch-class name like "C", "F#", or "Bb".
    ///
    /// Case-insensitive. Flat spellings are normalized enharmonically to the
    /// sharp pitch class an octave-local semitone below (Db → C#, Bb → A#).
    /// "Cb" is not accepted since it names a pitch in the octave below.
    /// Returns `None` for anything else.
    pub fn from_name(name: &str) -> Option<Self> {
        let upper = name.to_ascii_uppercase();
        let pc = match upper.as_str() {
            "C" => PitchClass::C,
            "C#" | "DB" => PitchClass::CSharp,
            "D" => PitchClass::D,
            "D#" | "EB" => PitchClass::DSharp,
            "E" | "FB" => PitchClass::E,
            "F" => PitchClass::F,
            "F#" | "GB" => PitchClass::FSharp,
            "G" => PitchClass::G,
            "G#" | "AB" => PitchClass::GSharp,
            "A" => PitchClass::A,
            "A#" | "BB" => PitchClass::ASharp,
            "B" => PitchClass::B,
            _ => return None,
        };
        Some(pc)
    }

    /// Reference frequency at octave 4 (A4 = 440.00 Hz, equal temperament).
    pub fn base_frequency(self) -> f64 {
        match self {
            PitchClass::C => 261.63,
            PitchClass::CSharp => 277.18,
            PitchClass::D => 293.66,
            PitchClass::DSharp => 311.13,
            PitchClass::E => 329.63,
            PitchClass::F => 349.23,
            PitchClass::FSharp => 369.99,
            PitchClass::G => 392.00,
            PitchClass::GSharp => 415.30,
            PitchClass::A => 440.00,
            PitchClass::ASharp => 466.16,
            PitchClass::B => 493.88,
        }
    }

    /// Frequency in Hz at the given octave: each octave step doubles or
    /// halves the octave-4 reference.
    pub fn frequency(self, octave: i32) -> f64 {
        self.base_frequency() * 2.0f64.powi(octave - 4)
    }

    /// Canonical sharp spelling of this pitch class.
    pub fn name(self) -> &'static str {
        match self {
            PitchClass::C => "C",
            PitchClass::CSharp => "C#",
            PitchClass::D => "D",
            PitchClass::DSharp => "D#",
            PitchClass::E => "E",
            PitchClass::F => "F",
            PitchClass::FSharp => "F#",
            PitchClass::G => "G",
            PitchClass::GSharp => "G#",
            PitchClass::A => "A",
            PitchClass::ASharp => "A#",
            PitchClass::B => "B",
        }
    }
}
