use std::path::Path;
use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use suno::voice::{AudioCapture, SAMPLE_RATE, rms_energy, write_wav};
use suno::{Config, GoogleRecognizer, GoogleTranslator};

/// suno - one-shot Hindi voice listener
#[derive(Parser)]
#[command(name = "suno", version, about)]
struct Cli {
    /// Recognition language hint (BCP-47, e.g. "hi-IN")
    #[arg(long, env = "SUNO_LANGUAGE")]
    language: Option<String>,

    /// Energy threshold for phrase detection (16-bit PCM RMS scale)
    #[arg(long)]
    energy_threshold: Option<f32>,

    /// Maximum phrase duration in seconds
    #[arg(long)]
    phrase_limit: Option<f32>,

    /// Speaker label shown before the final transcript
    #[arg(long, env = "SUNO_LABEL")]
    label: Option<String>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Test microphone input
    TestMic {
        /// Duration in seconds
        #[arg(short, long, default_value = "5")]
        duration: u64,

        /// Write the captured audio to a WAV file
        #[arg(long)]
        dump: Option<std::path::PathBuf>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Default level keeps the terminal clean so the animation is not
    // garbled by log lines
    let filter = match cli.verbose {
        0 => "warn",
        1 => "warn,suno=debug",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("fatal: {e}");
            ExitCode::FAILURE
        }
    }
}

#[allow(clippy::future_not_send)]
async fn run(cli: Cli) -> anyhow::Result<()> {
    if let Some(Command::TestMic { duration, dump }) = cli.command {
        return test_mic(duration, dump.as_deref()).await;
    }

    let mut config = Config::load();
    if let Some(language) = cli.language {
        config.language = language;
    }
    if let Some(threshold) = cli.energy_threshold {
        config.listen.energy_threshold = threshold;
    }
    if let Some(limit) = cli.phrase_limit {
        config.listen.phrase_time_limit = limit;
    }
    if let Some(label) = cli.label {
        config.speaker_label = label;
    }

    let recognizer = GoogleRecognizer::new(&config.stt, SAMPLE_RATE)?;
    let translator = GoogleTranslator::new(&config.translate);

    suno::listen_once(&config, &recognizer, &translator).await?;
    Ok(())
}

/// Test microphone input with a live RMS meter
#[allow(clippy::future_not_send)]
async fn test_mic(duration: u64, dump: Option<&Path>) -> anyhow::Result<()> {
    println!("Testing microphone for {duration} seconds...");
    println!("Speak into your microphone!\n");

    let mut capture = AudioCapture::new()?;
    capture.start()?;

    println!("Sample rate: {} Hz", capture.sample_rate());
    println!("---");

    let mut recorded = Vec::new();
    for i in 0..duration {
        tokio::time::sleep(Duration::from_secs(1)).await;

        let samples = capture.take_buffer();
        let energy = rms_energy(&samples);
        let peak = samples.iter().map(|s| s.abs()).fold(0.0f32, f32::max);

        // Meter scaled to twice the default energy threshold
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let meter_len = ((energy / 8000.0) * 50.0).min(50.0) as usize;
        let meter: String = "\u{2588}".repeat(meter_len) + &" ".repeat(50 - meter_len);

        println!("[{:2}s] RMS: {energy:7.1} | Peak: {peak:.4} | [{meter}]", i + 1);

        recorded.extend_from_slice(&samples);
    }

    capture.stop();

    if let Some(path) = dump {
        write_wav(path, &recorded, SAMPLE_RATE)?;
        println!("\nWrote {} samples to {}", recorded.len(), path.display());
    }

    println!("\n---");
    println!("If you saw movement in the meter, your mic is working!");
    println!("If RMS stayed near 0, check:");
    println!("  1. Is your mic plugged in?");
    println!("  2. Run: pactl info | grep 'Default Source'");
    println!("  3. Run: arecord -l (to list devices)");
    println!("  4. Try: pavucontrol (to check levels)");

    Ok(())
}
