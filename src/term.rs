//! Terminal output: ANSI colors and the animated listening indicator

use std::io::Write;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

pub const YELLOW: &str = "\x1b[33m";
pub const LIGHT_GREEN: &str = "\x1b[92m";
pub const BLUE: &str = "\x1b[34m";
pub const RED: &str = "\x1b[31m";
pub const RESET: &str = "\x1b[0m";

/// Animation frames appended to the listening cue
const FRAMES: [&str; 5] = ["", ".", "..", "...", "...."];

/// Cadence of the listening animation
pub const FRAME_INTERVAL: Duration = Duration::from_millis(300);

/// Cosmetic "I am listening" animation running as a background task.
///
/// The task polls the stop signal at each frame boundary, so worst-case
/// stop latency is one frame interval plus the in-flight sleep. The
/// spawner must await [`Indicator::stop`] before printing anything else.
pub struct Indicator {
    stop_tx: watch::Sender<bool>,
    handle: JoinHandle<()>,
}

impl Indicator {
    /// Spawn the indicator task, rendering frames into `sink`
    pub fn spawn<W>(sink: W) -> Self
    where
        W: Write + Send + 'static,
    {
        let (stop_tx, stop_rx) = watch::channel(false);
        let handle = tokio::spawn(run(sink, stop_rx));
        Self { stop_tx, handle }
    }

    /// Signal the task to stop and wait for its final cleanup render.
    ///
    /// Once this returns, no further frame is written.
    pub async fn stop(self) {
        let _ = self.stop_tx.send(true);
        let _ = self.handle.await;
    }
}

async fn run<W: Write + Send + 'static>(mut sink: W, stop_rx: watch::Receiver<bool>) {
    loop {
        for frame in FRAMES {
            if *stop_rx.borrow() {
                // Cleanup render: clear the line, reset style
                let _ = write!(sink, "\r{:width$}\r{RESET}", "", width = 30);
                let _ = sink.flush();
                return;
            }

            let _ = write!(sink, "\r{LIGHT_GREEN}\u{1f3a4} I am listening{frame}    {RESET}");
            let _ = sink.flush();
            tokio::time::sleep(FRAME_INTERVAL).await;
        }
    }
}
