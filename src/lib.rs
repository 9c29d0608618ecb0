//! suno - one-shot Hindi voice listener
//!
//! Captures a single microphone utterance, transcribes it with a Hindi
//! language hint, translates Devanagari transcripts to English, and
//! prints the result behind an animated listening cue.
//!
//! # Flow
//!
//! ```text
//! calibrate -> listen (indicator animates) -> recognize
//!           -> translate if Devanagari -> present
//! ```
//!
//! Recognition failures degrade to an empty transcript and translation
//! failures fall back to the original text; neither aborts the run.

pub mod config;
pub mod error;
pub mod pipeline;
pub mod script;
pub mod term;
pub mod translate;
pub mod voice;

pub use config::Config;
pub use error::{Error, Result};
pub use pipeline::{Outcome, listen_once};
pub use script::contains_devanagari;
pub use translate::{GoogleTranslator, Translate};
pub use voice::{AudioCapture, GoogleRecognizer, PhraseDetector, Recognize, SAMPLE_RATE};
