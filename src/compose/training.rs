//! Training data for the Markov composer — built-in seed melodies and a
//! newline-delimited melody file loader.

use std::fs;
use std::io;
use std::path::Path;

/// Seed melodies used when no training file is supplied.
pub const BUILTIN_MELODIES: [&str; 4] = [
    // Twinkle Twinkle
    "C4 C4 G4 G4 A4 A4 G4 F4 F4 E4 E4 D4 D4 C4",
    // Mary Had a Little Lamb
    "E4 D4 C4 D4 E4 E4 E4 D4 D4 D4 E4 G4 G4",
    // C major scale, up and down
    "C4 D4 E4 F4 G4 A4 B4 C5 B4 A4 G4 F4 E4 D4 C4",
    // Jingle Bells-ish
    "G4 E4 E4 F4 D4 D4 C4 D4 E4 F4 G4 G4 G4",
];

/// Load training melodies from a file, one melody per line.
///
/// Blank lines are skipped. No validation is applied here; unknown tokens
/// surface later as silence during rendering.
pub fn load_melodies<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn builtin_melodies_are_parseable() {
        for melody in BUILTIN_MELODIES {
            let events = crate::notation::parse_melody(melody);
            assert!(!events.is_empty());
            assert!(events.iter().all(|e| !e.pitch.is_rest()), "{melody}");
        }
    }

    #[test]
    fn load_skips_blank_lines() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "C4 D4 E4").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "  G4 A4  ").unwrap();
        writeln!(file, "   ").unwrap();

        let melodies = load_melodies(file.path()).unwrap();
        assert_eq!(melodies, vec!["C4 D4 E4".to_string(), "G4 A4".to_string()]);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        assert!(load_melodies("/nonexistent/melodies.txt").is_err());
    }

    #[test]
    fn builtins_train_a_usable_model() {
        use rand::SeedableRng;

        let mut composer = crate::compose::MarkovComposer::new();
        composer.train(BUILTIN_MELODIES);
        assert!(composer.is_trained());

        let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(0);
        let melody = composer.compose(&mut rng, 20, None);
        assert_eq!(melody.len(), 20);
    }
}
