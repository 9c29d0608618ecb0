//! Voice processing module
//!
//! Handles audio capture, phrase endpointing, and speech recognition.

pub mod capture;
pub mod phrase;
pub mod stt;

pub use capture::{AudioCapture, SAMPLE_RATE, rms_energy, samples_to_pcm16, write_wav};
pub use phrase::{PhraseDetector, PhraseState};
pub use stt::{GoogleRecognizer, Recognize};
