//! Built-in reporters.

use super::{Report, Reporter};
use std::io::{self, Write};

/// Emits reports as `tracing` events.
///
/// Applied changes are logged at `info`, refused ones at `warn`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn report(&mut self, report: &Report) {
        match report {
            Report::Changed { from, to } => {
                tracing::info!(from = %from, to = %to, "{}", report);
            }
            Report::Illegal { from, to } => {
                tracing::warn!(from = %from, to = %to, "{}", report);
            }
        }
    }
}

/// Writes one line per report to a writer.
///
/// Write failures are logged and otherwise ignored; a player action never
/// fails because its output could not be written.
#[derive(Debug)]
pub struct Console<W: Write> {
    out: W,
}

impl Console<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Console<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Reporter for Console<W> {
    fn report(&mut self, report: &Report) {
        if let Err(e) = writeln!(self.out, "{report}") {
            tracing::error!("Failed to write report: {}", e);
        }
    }
}

/// Keeps every report in memory, in arrival order.
///
/// # Example
///
/// ```rust
/// use playstate::report::Transcript;
/// use playstate::Player;
///
/// let mut player = Player::with_reporter(Transcript::default());
/// player.play();
/// player.play();
///
/// assert_eq!(
///     player.reporter().lines(),
///     vec![
///         "changing from Stopped to Playing state",
///         "Illegal state transition from Playing to Playing",
///     ]
/// );
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Transcript {
    reports: Vec<Report>,
}

impl Transcript {
    pub fn reports(&self) -> &[Report] {
        &self.reports
    }

    /// Rendered report lines.
    pub fn lines(&self) -> Vec<String> {
        self.reports.iter().map(ToString::to_string).collect()
    }

    pub fn len(&self) -> usize {
        self.reports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    pub fn clear(&mut self) {
        self.reports.clear();
    }

    /// Serialize the collected reports as a JSON array.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.reports)
    }
}

impl Reporter for Transcript {
    fn report(&mut self, report: &Report) {
        self.reports.push(*report);
    }
}
