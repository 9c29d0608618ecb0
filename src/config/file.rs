//! TOML configuration file loading
//!
//! Supports `~/.config/suno/config.toml` as a persistent config source.
//! All fields are optional — the file is a partial overlay on top of
//! defaults, so an absent file leaves stock behavior unchanged.

use std::path::PathBuf;

use serde::Deserialize;

/// Top-level TOML configuration file schema
#[derive(Debug, Default, Deserialize)]
pub struct ConfigFile {
    /// Speaker label printed before the final transcript
    #[serde(default)]
    pub speaker_label: Option<String>,

    /// BCP-47 recognizer language hint (e.g. "hi-IN")
    #[serde(default)]
    pub language: Option<String>,

    /// Phrase endpointing parameters
    #[serde(default)]
    pub listen: ListenFileConfig,

    /// Speech recognition backend
    #[serde(default)]
    pub stt: SttFileConfig,

    /// Translation backend
    #[serde(default)]
    pub translate: TranslateFileConfig,
}

/// Phrase endpointing overrides
#[derive(Debug, Default, Deserialize)]
pub struct ListenFileConfig {
    /// Energy threshold on the 16-bit PCM RMS scale
    pub energy_threshold: Option<f32>,

    /// Seconds of silence that end a phrase
    pub pause_threshold: Option<f32>,

    /// Maximum phrase duration in seconds
    pub phrase_time_limit: Option<f32>,

    /// Seconds of leading padding kept before the phrase
    pub non_speaking_duration: Option<f32>,

    /// Minimum voiced duration for a phrase to count, in seconds
    pub min_phrase_duration: Option<f32>,
}

/// Speech recognition overrides
#[derive(Debug, Default, Deserialize)]
pub struct SttFileConfig {
    pub endpoint: Option<String>,
    pub api_key: Option<String>,
}

/// Translation overrides
#[derive(Debug, Default, Deserialize)]
pub struct TranslateFileConfig {
    pub endpoint: Option<String>,
    pub source: Option<String>,
    pub target: Option<String>,
}

/// Load the TOML config file from the standard path
///
/// Returns `ConfigFile::default()` if the file doesn't exist or can't
/// be parsed.
#[must_use]
pub fn load_config_file() -> ConfigFile {
    let Some(path) = config_file_path() else {
        return ConfigFile::default();
    };

    if !path.exists() {
        return ConfigFile::default();
    }

    match std::fs::read_to_string(&path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(config) => {
                tracing::info!(path = %path.display(), "loaded config file");
                config
            }
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "failed to parse config file, using defaults"
                );
                ConfigFile::default()
            }
        },
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "failed to read config file"
            );
            ConfigFile::default()
        }
    }
}

/// Return the config file path: `~/.config/suno/config.toml`
#[must_use]
pub fn config_file_path() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|d| d.config_dir().join("suno").join("config.toml"))
}
