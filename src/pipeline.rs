//! The one-shot listen flow
//!
//! Strictly sequential: calibrate, capture one phrase while the
//! indicator animates, stop the indicator, recognize, translate
//! Devanagari transcripts, present. Ctrl-C during capture stops the
//! indicator and ends the run without recognition.

use std::time::Duration;

use crate::config::Config;
use crate::script::contains_devanagari;
use crate::term::{self, Indicator};
use crate::translate::Translate;
use crate::voice::capture::{AudioCapture, samples_to_pcm16};
use crate::voice::phrase::PhraseDetector;
use crate::voice::stt::Recognize;
use crate::Result;

/// How often the capture buffer is drained into the phrase detector
const DRAIN_INTERVAL: Duration = Duration::from_millis(100);

/// Ambient noise measurement window before listening starts
const CALIBRATION_WINDOW: Duration = Duration::from_secs(1);

/// Summary of one listen run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The recognizer produced an empty transcript
    NoSpeech,
    /// A transcript was presented
    Spoken {
        /// The displayed text
        text: String,
        /// Whether the translator was consulted
        translated: bool,
    },
    /// Ctrl-C arrived during capture
    Interrupted,
}

/// Run the whole flow once against real audio hardware.
///
/// The microphone stream is released on every exit path.
///
/// # Errors
///
/// Returns error if the audio device cannot be opened or started.
/// Recognizer and translator failures degrade per their contracts and
/// never surface here.
#[allow(clippy::future_not_send)]
pub async fn listen_once<R, T>(config: &Config, recognizer: &R, translator: &T) -> Result<Outcome>
where
    R: Recognize,
    T: Translate,
{
    let mut capture = AudioCapture::new()?;
    capture.start()?;

    let ambient = capture.calibrate(CALIBRATION_WINDOW).await;
    tracing::debug!(
        ambient_rms = ambient,
        energy_threshold = config.listen.energy_threshold,
        "calibrated, threshold stays fixed"
    );
    println!("{}Microphone ready!{}", term::YELLOW, term::RESET);

    let indicator = Indicator::spawn(std::io::stdout());
    let mut detector = PhraseDetector::new(&config.listen);

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    let interrupted = loop {
        tokio::select! {
            signal = &mut ctrl_c => {
                if let Err(e) = signal {
                    tracing::warn!(error = %e, "ctrl-c handler failed, stopping");
                }
                break true;
            }
            () = tokio::time::sleep(DRAIN_INTERVAL) => {
                if detector.push(&capture.take_buffer()) {
                    break false;
                }
            }
        }
    };

    // The indicator must be fully stopped before anything else prints
    indicator.stop().await;
    capture.stop();

    if interrupted {
        println!("{}Stopping...{}", term::RED, term::RESET);
        return Ok(Outcome::Interrupted);
    }

    let audio = samples_to_pcm16(&detector.take_phrase());
    let transcript = recognize_utterance(recognizer, &audio, &config.language).await;

    let outcome = resolve_outcome(
        translator,
        &transcript,
        &config.translate.source,
        &config.translate.target,
    )
    .await;
    present(&config.speaker_label, &outcome);

    Ok(outcome)
}

/// Recognize one utterance, degrading every failure to an empty
/// transcript: "nothing understood" silently, service errors with an
/// inline notice.
pub async fn recognize_utterance<R: Recognize>(
    recognizer: &R,
    audio: &[u8],
    language: &str,
) -> String {
    match recognizer.recognize(audio, language).await {
        Ok(Some(text)) => text,
        Ok(None) => String::new(),
        Err(e) => {
            println!("{}API error: {e}{}", term::RED, term::RESET);
            String::new()
        }
    }
}

/// Decide what to display: Devanagari transcripts are translated,
/// everything else is shown verbatim. Empty transcripts never reach the
/// translator.
pub async fn resolve_outcome<T: Translate>(
    translator: &T,
    transcript: &str,
    source: &str,
    target: &str,
) -> Outcome {
    if transcript.is_empty() {
        return Outcome::NoSpeech;
    }

    if contains_devanagari(transcript) {
        let text = translator.translate(transcript, source, target).await;
        Outcome::Spoken {
            text,
            translated: true,
        }
    } else {
        Outcome::Spoken {
            text: transcript.to_string(),
            translated: false,
        }
    }
}

/// Print the final line
pub fn present(label: &str, outcome: &Outcome) {
    match outcome {
        Outcome::Spoken { text, .. } => {
            println!("{}{label} : {text}{}", term::BLUE, term::RESET);
        }
        Outcome::NoSpeech => {
            println!("{}No speech detected.{}", term::RED, term::RESET);
        }
        Outcome::Interrupted => {}
    }
}
