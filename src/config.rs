//! User configuration — loads optional ~/.cantabile/config.yaml defaults.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

fn default_bpm() -> u32 {
    120
}

fn default_wave() -> String {
    "sine".to_string()
}

fn default_output() -> PathBuf {
    PathBuf::from("output.wav")
}

/// Defaults applied when the corresponding CLI flags are absent.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Tempo in beats per minute.
    #[serde(default = "default_bpm")]
    pub bpm: u32,
    /// Waveform name: sine, square, or sawtooth.
    #[serde(default = "default_wave")]
    pub wave: String,
    /// Output WAV path.
    #[serde(default = "default_output")]
    pub output: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bpm: default_bpm(),
            wave: default_wave(),
            output: default_output(),
        }
    }
}

/// Get the config file path.
fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".cantabile").join("config.yaml"))
}

/// Load configuration from ~/.cantabile/config.yaml.
/// Returns None if the file doesn't exist or fails to parse.
pub fn load_config() -> Option<Config> {
    let path = config_path()?;
    let content = std::fs::read_to_string(&path).ok()?;
    serde_yaml::from_str(&content).ok()
}
