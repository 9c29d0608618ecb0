//! Pipeline branch tests with mock recognizer and translator
//!
//! Covers the single branch of the flow: translation happens iff the
//! transcript is non-empty and contains Devanagari, and every failure
//! degrades instead of aborting.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use suno::pipeline::{self, Outcome};
use suno::translate::Translate;
use suno::voice::Recognize;
use suno::{Error, Result};

struct MockRecognizer {
    transcript: Option<String>,
    fail: bool,
}

#[async_trait]
impl Recognize for MockRecognizer {
    async fn recognize(&self, _audio: &[u8], _language: &str) -> Result<Option<String>> {
        if self.fail {
            return Err(Error::Stt("service unavailable".to_string()));
        }
        Ok(self.transcript.clone())
    }
}

struct MockTranslator {
    calls: AtomicUsize,
    fail: bool,
}

impl MockTranslator {
    fn new(fail: bool) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            fail,
        }
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Translate for MockTranslator {
    async fn translate(&self, text: &str, source: &str, target: &str) -> String {
        self.calls.fetch_add(1, Ordering::SeqCst);
        assert_eq!(source, "hi");
        assert_eq!(target, "en");

        if self.fail {
            // Contract: failure falls back to the input unchanged
            text.to_string()
        } else {
            format!("translated:{text}")
        }
    }
}

#[tokio::test]
async fn empty_transcript_skips_translation() {
    let translator = MockTranslator::new(false);
    let outcome = pipeline::resolve_outcome(&translator, "", "hi", "en").await;

    assert_eq!(outcome, Outcome::NoSpeech);
    assert_eq!(translator.call_count(), 0);
}

#[tokio::test]
async fn non_hindi_transcript_is_shown_verbatim() {
    let translator = MockTranslator::new(false);
    let outcome = pipeline::resolve_outcome(&translator, "hello world", "hi", "en").await;

    assert_eq!(
        outcome,
        Outcome::Spoken {
            text: "hello world".to_string(),
            translated: false,
        }
    );
    assert_eq!(translator.call_count(), 0);
}

#[tokio::test]
async fn hindi_transcript_is_translated() {
    let translator = MockTranslator::new(false);
    let outcome = pipeline::resolve_outcome(&translator, "नमस्ते", "hi", "en").await;

    assert_eq!(
        outcome,
        Outcome::Spoken {
            text: "translated:नमस्ते".to_string(),
            translated: true,
        }
    );
    assert_eq!(translator.call_count(), 1);
}

#[tokio::test]
async fn mixed_transcript_is_translated() {
    let translator = MockTranslator::new(false);
    let outcome = pipeline::resolve_outcome(&translator, "hello नमस्ते", "hi", "en").await;

    assert!(matches!(outcome, Outcome::Spoken { translated: true, .. }));
    assert_eq!(translator.call_count(), 1);
}

#[tokio::test]
async fn translator_failure_keeps_original_text() {
    let translator = MockTranslator::new(true);
    let outcome = pipeline::resolve_outcome(&translator, "नमस्ते", "hi", "en").await;

    assert_eq!(
        outcome,
        Outcome::Spoken {
            text: "नमस्ते".to_string(),
            translated: true,
        }
    );
    assert_eq!(translator.call_count(), 1);
}

#[tokio::test]
async fn recognizer_transcript_is_passed_through() {
    let recognizer = MockRecognizer {
        transcript: Some("नमस्ते".to_string()),
        fail: false,
    };

    let transcript = pipeline::recognize_utterance(&recognizer, &[], "hi-IN").await;
    assert_eq!(transcript, "नमस्ते");
}

#[tokio::test]
async fn nothing_understood_becomes_empty_transcript() {
    let recognizer = MockRecognizer {
        transcript: None,
        fail: false,
    };

    let transcript = pipeline::recognize_utterance(&recognizer, &[], "hi-IN").await;
    assert!(transcript.is_empty());
}

#[tokio::test]
async fn service_error_degrades_to_empty_transcript() {
    let recognizer = MockRecognizer {
        transcript: Some("ignored".to_string()),
        fail: true,
    };

    let transcript = pipeline::recognize_utterance(&recognizer, &[], "hi-IN").await;
    assert!(transcript.is_empty());
}

#[tokio::test]
async fn full_degraded_run_reports_no_speech() {
    // Service error during recognition ends in the no-speech notice,
    // with the translator never consulted
    let recognizer = MockRecognizer {
        transcript: None,
        fail: true,
    };
    let translator = MockTranslator::new(false);

    let transcript = pipeline::recognize_utterance(&recognizer, &[], "hi-IN").await;
    let outcome = pipeline::resolve_outcome(&translator, &transcript, "hi", "en").await;

    assert_eq!(outcome, Outcome::NoSpeech);
    assert_eq!(translator.call_count(), 0);
}
