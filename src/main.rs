//! Cantabile CLI — renders melody notation to a WAV file, optionally
//! composing the melody first with the Markov model.

use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use cantabile::compose::{training, MarkovComposer};
use cantabile::config;
use cantabile::synth::{self, Renderer, Waveform};

#[derive(Parser)]
#[command(
    name = "cantabile",
    version,
    about = "Turn melody notation into audio, or compose new melodies"
)]
struct Args {
    /// Note tokens, e.g. "C4:1 E4:0.5 R:1 G4"
    notes: Vec<String>,

    /// Waveform: sine, square, or sawtooth
    #[arg(long)]
    wave: Option<Waveform>,

    /// Tempo in beats per minute
    #[arg(long, value_parser = clap::value_parser!(u32).range(60..=240))]
    bpm: Option<u32>,

    /// Compose a melody with the Markov model instead of reading notes
    #[arg(long)]
    compose: bool,

    /// Composition length in tokens
    #[arg(long, default_value_t = 16, value_parser = clap::value_parser!(u64).range(4..=128))]
    length: u64,

    /// Pitch token to start the composition from
    #[arg(long)]
    start: Option<String>,

    /// RNG seed for reproducible compositions
    #[arg(long)]
    seed: Option<u64>,

    /// Train from a newline-delimited melody file instead of the built-ins
    #[arg(long)]
    train: Option<PathBuf>,

    /// Output WAV path
    #[arg(long)]
    output: Option<PathBuf>,
}

fn compose_melody(args: &Args) -> String {
    let melodies: Vec<String> = match &args.train {
        Some(path) => match training::load_melodies(path) {
            Ok(melodies) => melodies,
            Err(e) => {
                eprintln!("failed to read training file {}: {e}", path.display());
                std::process::exit(1);
            }
        },
        None => training::BUILTIN_MELODIES.iter().map(|m| m.to_string()).collect(),
    };

    let mut composer = MarkovComposer::new();
    composer.train(melodies.iter().map(String::as_str));

    let mut rng = match args.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    let melody = composer.compose_string(&mut rng, args.length as usize, args.start.as_deref());
    if melody.is_empty() {
        eprintln!("training data produced no transitions, nothing to compose");
        std::process::exit(1);
    }
    melody
}

fn read_melody_from_stdin() -> String {
    print!("Enter a string of notes (e.g. 'C4 D4 E4'):\n>> ");
    std::io::stdout().flush().ok();

    let mut line = String::new();
    if std::io::stdin().read_line(&mut line).is_err() {
        eprintln!("failed to read from stdin");
        std::process::exit(1);
    }
    line.trim().to_string()
}

fn main() {
    let args = Args::parse();
    let config = config::load_config().unwrap_or_default();

    let wave = match args.wave {
        Some(wave) => wave,
        None => match config.wave.parse::<Waveform>() {
            Ok(wave) => wave,
            Err(e) => {
                eprintln!("bad config: {e}");
                std::process::exit(1);
            }
        },
    };
    let bpm = args.bpm.unwrap_or(config.bpm);
    let output = args.output.clone().unwrap_or_else(|| config.output.clone());

    let melody = if args.compose {
        let melody = compose_melody(&args);
        println!("composed: {melody}");
        melody
    } else if !args.notes.is_empty() {
        args.notes.join(" ")
    } else {
        read_melody_from_stdin()
    };

    println!("rendering '{melody}' at {bpm} BPM with a {} wave", wave.name());

    let renderer = match Renderer::new(bpm, wave) {
        Ok(renderer) => renderer,
        Err(e) => {
            eprintln!("bad configuration: {e}");
            std::process::exit(1);
        }
    };

    match renderer.render_melody(&melody) {
        Some(pcm) => {
            if let Err(e) = synth::write_wav_file(&output, &pcm, renderer.sample_rate()) {
                eprintln!("failed to write {}: {e}", output.display());
                std::process::exit(1);
            }
            println!("saved {} ({} samples)", output.display(), pcm.len());
        }
        None => {
            eprintln!("no notes found, nothing to render");
            std::process::exit(1);
        }
    }
}
