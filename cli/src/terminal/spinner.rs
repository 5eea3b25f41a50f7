use std::io::Write;
use std::sync::OnceLock;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

static SPINNER: OnceLock<ProgressBar> = OnceLock::new();

const TICK_STRINGS: &[&str] = &[
    "▁▁▁▁▁",
    "▁▂▂▂▁",
    "▁▄▂▄▁",
    "▂▄▆▄▂",
    "▄▆█▆▄",
    "▂▄▆▄▂",
    "▁▄▂▄▁",
    "▁▂▂▂▁",
];

/// Starts the process-wide spinner. Later calls only update the message.
pub fn start(message: String) {
    let pb = SPINNER.get_or_init(init_spinner);
    pb.set_message(message);
}

/// Clears the spinner from the terminal, if one was started.
pub fn stop() {
    if let Some(pb) = SPINNER.get() {
        pb.finish_and_clear();
    }
}

fn init_spinner() -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_strings(TICK_STRINGS));
    }
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Stream {
    Stdout,
    Stderr,
}

/// Log sink that prints above a running spinner instead of through it.
///
/// Without a spinner, lines go to the stream the writer was made for.
pub struct SpinnerWriter {
    stream: Stream,
}

impl SpinnerWriter {
    pub fn stdout() -> Self {
        Self { stream: Stream::Stdout }
    }

    pub fn stderr() -> Self {
        Self { stream: Stream::Stderr }
    }
}

impl Write for SpinnerWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let msg = String::from_utf8_lossy(buf);
        let msg = msg.trim_end();
        match SPINNER.get() {
            Some(pb) if !pb.is_finished() => pb.println(msg),
            _ => match self.stream {
                Stream::Stdout => writeln!(std::io::stdout(), "{msg}")?,
                Stream::Stderr => writeln!(std::io::stderr(), "{msg}")?,
            },
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        match self.stream {
            Stream::Stdout => std::io::stdout().flush(),
            Stream::Stderr => std::io::stderr().flush(),
        }
    }
}
