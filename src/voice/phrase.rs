//! Phrase endpointing
//!
//! Turns the raw capture stream into exactly one bounded utterance:
//! waits for audio energy above the threshold, records until a long
//! enough pause, and enforces the maximum phrase duration. Too-short
//! blips are discarded and the detector goes back to waiting.

use crate::config::ListenConfig;
use crate::voice::capture::{SAMPLE_RATE, rms_energy};

/// State of the phrase detector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhraseState {
    /// Waiting for speech to start
    Waiting,
    /// Speech detected, accumulating the phrase
    Recording,
    /// Phrase bounded, ready to take
    Complete,
}

/// Bounds one utterance out of a stream of audio chunks
pub struct PhraseDetector {
    energy_threshold: f32,
    pause_samples: usize,
    limit_samples: usize,
    min_voiced_samples: usize,
    padding_samples: usize,
    state: PhraseState,
    buffer: Vec<f32>,
    padding: Vec<f32>,
    silence_counter: usize,
    voiced_counter: usize,
}

#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn seconds_to_samples(seconds: f32) -> usize {
    (seconds * SAMPLE_RATE as f32).max(0.0) as usize
}

impl PhraseDetector {
    /// Create a detector from endpointing parameters
    #[must_use]
    pub fn new(config: &ListenConfig) -> Self {
        Self {
            energy_threshold: config.energy_threshold,
            pause_samples: seconds_to_samples(config.pause_threshold),
            limit_samples: seconds_to_samples(config.phrase_time_limit),
            min_voiced_samples: seconds_to_samples(config.min_phrase_duration),
            padding_samples: seconds_to_samples(config.non_speaking_duration),
            state: PhraseState::Waiting,
            buffer: Vec::new(),
            padding: Vec::new(),
            silence_counter: 0,
            voiced_counter: 0,
        }
    }

    /// Feed a chunk of samples. Returns true once the phrase is complete.
    pub fn push(&mut self, samples: &[f32]) -> bool {
        if samples.is_empty() {
            return self.state == PhraseState::Complete;
        }

        let energy = rms_energy(samples);
        let is_speech = energy > self.energy_threshold;

        match self.state {
            PhraseState::Waiting => {
                if is_speech {
                    self.buffer.clear();
                    self.buffer.append(&mut self.padding);
                    self.buffer.extend_from_slice(samples);
                    self.voiced_counter = samples.len();
                    self.silence_counter = 0;
                    self.state = PhraseState::Recording;
                    tracing::trace!(energy, "phrase started");
                } else {
                    // Rolling tail of leading padding
                    self.padding.extend_from_slice(samples);
                    let excess = self.padding.len().saturating_sub(self.padding_samples);
                    if excess > 0 {
                        self.padding.drain(..excess);
                    }
                }
            }
            PhraseState::Recording => {
                self.buffer.extend_from_slice(samples);

                if is_speech {
                    self.silence_counter = 0;
                    self.voiced_counter += samples.len();
                } else {
                    self.silence_counter += samples.len();
                }

                tracing::trace!(
                    buffer_len = self.buffer.len(),
                    silence = self.silence_counter,
                    is_speech,
                    "recording"
                );

                if self.silence_counter >= self.pause_samples {
                    if self.voiced_counter >= self.min_voiced_samples {
                        self.state = PhraseState::Complete;
                        tracing::debug!(samples = self.buffer.len(), "phrase complete");
                    } else {
                        tracing::trace!(voiced = self.voiced_counter, "phrase too short, discarded");
                        self.reset();
                    }
                } else if self.buffer.len() >= self.limit_samples {
                    self.state = PhraseState::Complete;
                    tracing::debug!(samples = self.buffer.len(), "phrase time limit reached");
                }
            }
            PhraseState::Complete => {}
        }

        self.state == PhraseState::Complete
    }

    /// Take the bounded phrase, resetting the detector to waiting
    pub fn take_phrase(&mut self) -> Vec<f32> {
        let phrase = std::mem::take(&mut self.buffer);
        self.reset();
        phrase
    }

    /// Reset to the waiting state, discarding any partial phrase
    pub fn reset(&mut self) {
        self.state = PhraseState::Waiting;
        self.buffer.clear();
        self.padding.clear();
        self.silence_counter = 0;
        self.voiced_counter = 0;
    }

    /// Current state
    #[must_use]
    pub const fn state(&self) -> PhraseState {
        self.state
    }
}
