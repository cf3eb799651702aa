//! Synthesis engine — oscillators, envelope shaping, melody rendering, and
//! WAV output.

pub mod envelope;
pub mod oscillator;
pub mod render;
pub mod wav;

pub use envelope::Envelope;
pub use oscillator::Waveform;
pub use render::{RenderError, Renderer, DEFAULT_SAMPLE_RATE};
pub use wav::{write_wav, write_wav_file};
