//! Record of applied state changes.
//!
//! Only legal changes are recorded. Rejected actions never touch history.

use super::kind::StateKind;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A single applied change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Change {
    /// The state being left
    pub from: StateKind,
    /// The state being installed
    pub to: StateKind,
    /// When the change was applied
    pub at: DateTime<Utc>,
}

impl Change {
    /// A change stamped with the current time.
    pub fn now(from: StateKind, to: StateKind) -> Self {
        Self {
            from,
            to,
            at: Utc::now(),
        }
    }
}

/// Ordered history of applied changes.
///
/// `record` returns a new history and leaves the receiver untouched.
///
/// # Example
///
/// ```rust
/// use playstate::core::{Change, History, StateKind};
///
/// let history = History::new()
///     .record(Change::now(StateKind::Stopped, StateKind::Playing))
///     .record(Change::now(StateKind::Playing, StateKind::Paused));
///
/// assert_eq!(
///     history.path(),
///     vec![StateKind::Stopped, StateKind::Playing, StateKind::Paused]
/// );
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    changes: Vec<Change>,
}

impl History {
    pub fn new() -> Self {
        Self {
            changes: Vec::new(),
        }
    }

    /// Record a change, returning a new history.
    pub fn record(&self, change: Change) -> Self {
        let mut changes = self.changes.clone();
        changes.push(change);
        Self { changes }
    }

    /// Append a change in place.
    pub(crate) fn push(&mut self, change: Change) {
        self.changes.push(change);
    }

    /// States traversed: the first `from`, then each `to`.
    ///
    /// Empty when nothing has been recorded.
    pub fn path(&self) -> Vec<StateKind> {
        let mut path = Vec::with_capacity(self.changes.len() + 1);
        if let Some(first) = self.changes.first() {
            path.push(first.from);
        }
        path.extend(self.changes.iter().map(|change| change.to));
        path
    }

    /// Time between the first and last change, `None` if empty.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.changes.first()?, self.changes.last()?);
        last.at.signed_duration_since(first.at).to_std().ok()
    }

    pub fn changes(&self) -> &[Change] {
        &self.changes
    }

    pub fn len(&self) -> usize {
        self.changes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }
}
