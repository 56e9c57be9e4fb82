//! Observable output of player actions.
//!
//! Every action produces exactly one [`Report`]: either a change that was
//! applied or an illegal transition that was refused. Reports are handed to a
//! [`Reporter`], which decides where they go.

mod sinks;

pub use sinks::{Console, LogReporter, Transcript};

use crate::core::StateKind;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of a single action.
///
/// # Example
///
/// ```rust
/// use playstate::core::StateKind;
/// use playstate::report::Report;
///
/// let report = Report::Changed {
///     from: StateKind::Stopped,
///     to: StateKind::Playing,
/// };
/// assert_eq!(report.to_string(), "changing from Stopped to Playing state");
///
/// let report = Report::Illegal {
///     from: StateKind::Playing,
///     to: StateKind::Playing,
/// };
/// assert_eq!(report.to_string(), "Illegal state transition from Playing to Playing");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Report {
    /// The player moved from one state to another
    Changed { from: StateKind, to: StateKind },

    /// The requested move was refused; the player is still in `from`
    Illegal { from: StateKind, to: StateKind },
}

impl Report {
    pub fn is_change(&self) -> bool {
        matches!(self, Self::Changed { .. })
    }

    /// State the player was in when the action arrived.
    pub fn from(&self) -> StateKind {
        match *self {
            Self::Changed { from, .. } | Self::Illegal { from, .. } => from,
        }
    }

    /// State that was installed, or would have been.
    pub fn to(&self) -> StateKind {
        match *self {
            Self::Changed { to, .. } | Self::Illegal { to, .. } => to,
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Changed { from, to } => write!(f, "changing from {from} to {to} state"),
            Self::Illegal { from, to } => {
                write!(f, "Illegal state transition from {from} to {to}")
            }
        }
    }
}

/// Destination for reports.
pub trait Reporter {
    fn report(&mut self, report: &Report);
}

impl<R: Reporter + ?Sized> Reporter for &mut R {
    fn report(&mut self, report: &Report) {
        (**self).report(report);
    }
}

impl<R: Reporter + ?Sized> Reporter for Box<R> {
    fn report(&mut self, report: &Report) {
        (**self).report(report);
    }
}
