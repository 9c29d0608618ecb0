//! Configuration for suno
//!
//! Built-in defaults reproduce the stock behavior exactly; an optional
//! TOML file overlays them, and CLI flags override both.

pub mod file;

use crate::{translate, voice};

/// Top-level configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Speaker label printed before the final transcript
    pub speaker_label: String,

    /// BCP-47 language hint passed to the recognizer
    pub language: String,

    /// Phrase endpointing parameters
    pub listen: ListenConfig,

    /// Speech recognition backend
    pub stt: SttConfig,

    /// Translation backend
    pub translate: TranslateConfig,
}

/// Phrase endpointing parameters
#[derive(Debug, Clone)]
pub struct ListenConfig {
    /// Energy threshold on the 16-bit PCM RMS scale. A fixed constant:
    /// ambient calibration measures the noise floor but never adapts
    /// this value.
    pub energy_threshold: f32,

    /// Seconds of continuous silence that end a phrase
    pub pause_threshold: f32,

    /// Maximum phrase duration in seconds
    pub phrase_time_limit: f32,

    /// Seconds of leading non-speech audio kept before the phrase
    pub non_speaking_duration: f32,

    /// Phrases with less voiced audio than this are discarded, in seconds
    pub min_phrase_duration: f32,
}

impl Default for ListenConfig {
    fn default() -> Self {
        Self {
            energy_threshold: 4000.0,
            pause_threshold: 1.2,
            phrase_time_limit: 15.0,
            non_speaking_duration: 0.5,
            min_phrase_duration: 0.3,
        }
    }
}

/// Speech recognition backend configuration
#[derive(Debug, Clone)]
pub struct SttConfig {
    /// Recognizer endpoint URL
    pub endpoint: String,

    /// API key sent with each request
    pub api_key: String,
}

impl Default for SttConfig {
    fn default() -> Self {
        Self {
            endpoint: voice::stt::DEFAULT_ENDPOINT.to_string(),
            api_key: voice::stt::DEFAULT_API_KEY.to_string(),
        }
    }
}

/// Translation backend configuration
#[derive(Debug, Clone)]
pub struct TranslateConfig {
    /// Translator endpoint URL
    pub endpoint: String,

    /// Source language code for Devanagari transcripts
    pub source: String,

    /// Target language code
    pub target: String,
}

impl Default for TranslateConfig {
    fn default() -> Self {
        Self {
            endpoint: translate::DEFAULT_ENDPOINT.to_string(),
            source: "hi".to_string(),
            target: "en".to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            speaker_label: "Priti".to_string(),
            language: "hi-IN".to_string(),
            listen: ListenConfig::default(),
            stt: SttConfig::default(),
            translate: TranslateConfig::default(),
        }
    }
}

impl Config {
    /// Load defaults overlaid with the optional config file
    #[must_use]
    pub fn load() -> Self {
        Self::default().with_overlay(file::load_config_file())
    }

    fn with_overlay(mut self, overlay: file::ConfigFile) -> Self {
        if let Some(label) = overlay.speaker_label {
            self.speaker_label = label;
        }
        if let Some(language) = overlay.language {
            self.language = language;
        }

        if let Some(v) = overlay.listen.energy_threshold {
            self.listen.energy_threshold = v;
        }
        if let Some(v) = overlay.listen.pause_threshold {
            self.listen.pause_threshold = v;
        }
        if let Some(v) = overlay.listen.phrase_time_limit {
            self.listen.phrase_time_limit = v;
        }
        if let Some(v) = overlay.listen.non_speaking_duration {
            self.listen.non_speaking_duration = v;
        }
        if let Some(v) = overlay.listen.min_phrase_duration {
            self.listen.min_phrase_duration = v;
        }

        if let Some(v) = overlay.stt.endpoint {
            self.stt.endpoint = v;
        }
        if let Some(v) = overlay.stt.api_key {
            self.stt.api_key = v;
        }

        if let Some(v) = overlay.translate.endpoint {
            self.translate.endpoint = v;
        }
        if let Some(v) = overlay.translate.source {
            self.translate.source = v;
        }
        if let Some(v) = overlay.translate.target {
            self.translate.target = v;
        }

        self
    }
}
