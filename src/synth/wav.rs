//! WAV container output — mono 16-bit linear PCM via `hound`.

use std::io::{Seek, Write};
use std::path::Path;

/// Canonical spec for our output: mono, 16-bit signed integer PCM.
pub fn wav_spec(sample_rate: u32) -> hound::WavSpec {
    hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    }
}

/// Write PCM samples as a WAV stream to any seekable sink.
pub fn write_wav<W: Write + Seek>(
    sink: W,
    samples: &[i16],
    sample_rate: u32,
) -> Result<(), hound::Error> {
    let mut writer = hound::WavWriter::new(sink, wav_spec(sample_rate))?;
    for &sample in samples {
        writer.write_sample(sample)?;
    }
    writer.finalize()
}

/// Write PCM samples to a WAV file at `path`.
pub fn write_wav_file<P: AsRef<Path>>(
    path: P,
    samples: &[i16],
    sample_rate: u32,
) -> Result<(), hound::Error> {
    let mut writer = hound::WavWriter::create(path, wav_spec(sample_rate))?;
    for &sample in samples {
        writer.write_sample(sample)?;
    }
    writer.finalize()
}
