//! Melody notation — parses strings like "C4:1 E4:0.5 R:2" into note events.

pub mod pitch;

pub use pitch::PitchClass;

/// Octave assumed when a token carries no octave number.
pub const DEFAULT_OCTAVE: i32 = 4;

/// Beats assumed when a token carries no (or an unusable) duration.
pub const DEFAULT_DURATION_BEATS: f64 = 1.0;

/// A sounding pitch or a rest.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Pitch {
    Tone { class: PitchClass, octave: i32 },
    Rest,
}

impl Pitch {
    /// Frequency in Hz; rests resolve to 0.0 (silence).
    pub fn frequency(&self) -> f64 {
        match self {
            Pitch::Tone { class, octave } => class.frequency(*octave),
            Pitch::Rest => 0.0,
        }
    }

    /// Whether this pitch produces no sound.
    pub fn is_rest(&self) -> bool {
        matches!(self, Pitch::Rest)
    }
}

/// One parsed melody token: a pitch (or rest) held for a number of beats.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoteEvent {
    pub pitch: Pitch,
    pub duration_beats: f64,
}

/// Parse a whitespace-separated melody string into note events.
///
/// Each token is `PITCH` or `PITCH:DURATION`. `PITCH` is a letter A–G with an
/// optional `#` or `b` accidental and an optional trailing octave number
/// (default 4). `R` or `REST` denote silence. `DURATION` is a beat multiplier;
/// tokens without one, or with one that does not parse as a positive number,
/// get exactly 1 beat. Unknown pitch names degrade to rests with a warning on
/// stderr rather than failing the whole melody. An empty string parses to an
/// empty event list.
pub fn parse_melody(text: &str) -> Vec<NoteEvent> {
    text.split_whitespace().map(parse_token).collect()
}

fn parse_token(token: &str) -> NoteEvent {
    let (name, duration_beats) = match token.split_once(':') {
        Some((name, duration)) => (name, parse_duration(duration)),
        None => (token, DEFAULT_DURATION_BEATS),
    };

    NoteEvent {
        pitch: parse_pitch(name),
        duration_beats,
    }
}

fn parse_duration(text: &str) -> f64 {
    match text.parse::<f64>() {
        Ok(beats) if beats > 0.0 && beats.is_finite() => beats,
        _ => DEFAULT_DURATION_BEATS,
    }
}

fn parse_pitch(name: &str) -> Pitch {
    // Trailing digit run is the octave; everything before it names the pitch.
    let digit_count = name.chars().rev().take_while(|c| c.is_ascii_digit()).count();
    let (letters, digits) = name.split_at(name.len() - digit_count);

    // Rests ignore any octave or accidental modifiers.
    let upper = letters.to_ascii_uppercase();
    let core = upper.trim_end_matches('#');
    if core == "R" || core == "REST" {
        return Pitch::Rest;
    }

    let octave = digits.parse::<i32>().unwrap_or(DEFAULT_OCTAVE);

    match PitchClass::from_name(letters) {
        Some(class) => Pitch::Tone { class, octave },
        None => {
            eprintln!("warning: unknown pitch '{name}', treating as rest");
            Pitch::Rest
        }
    }
}
