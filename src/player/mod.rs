//! The player that owns the current state.

use crate::core::{Action, Change, History, StateHost, StateKind};
use crate::report::{LogReporter, Report, Reporter};

/// A music player driven by `play`, `pause` and `stop`.
///
/// The player holds exactly one [`StateKind`] at a time and delegates every
/// action to that state's behavior. Actions never fail: they either change
/// the state or report that the change is illegal.
///
/// # Example
///
/// ```rust
/// use playstate::core::StateKind;
/// use playstate::report::Transcript;
/// use playstate::Player;
///
/// let mut player = Player::with_reporter(Transcript::default());
/// player.play();
/// player.play();
/// player.pause();
/// player.stop();
///
/// assert_eq!(player.state(), StateKind::Stopped);
/// assert_eq!(
///     player.reporter().lines(),
///     vec![
///         "changing from Stopped to Playing state",
///         "Illegal state transition from Playing to Playing",
///         "changing from Playing to Paused state",
///         "changing from Paused to Stopped state",
///     ]
/// );
/// ```
#[derive(Debug)]
pub struct Player<R: Reporter = LogReporter> {
    state: StateKind,
    reporter: R,
    history: History,
}

impl Player {
    /// A stopped player that logs through `tracing`.
    pub fn new() -> Self {
        Self::with_reporter(LogReporter)
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Reporter> Player<R> {
    /// A stopped player sending its reports to `reporter`.
    pub fn with_reporter(reporter: R) -> Self {
        Self {
            state: StateKind::Stopped,
            reporter,
            history: History::new(),
        }
    }

    pub fn play(&mut self) {
        self.perform(Action::Play);
    }

    pub fn pause(&mut self) {
        self.perform(Action::Pause);
    }

    pub fn stop(&mut self) {
        self.perform(Action::Stop);
    }

    /// Hand `action` to the current state's behavior.
    pub fn perform(&mut self, action: Action) {
        tracing::trace!(state = %self.state, action = %action, "Dispatching action");
        self.state.behavior().on(action, self);
    }

    /// Perform each action in order.
    pub fn run<I>(&mut self, actions: I)
    where
        I: IntoIterator<Item = Action>,
    {
        for action in actions {
            self.perform(action);
        }
    }

    /// Report the change, then install `kind` in place of the current state.
    pub fn set_state(&mut self, kind: StateKind) {
        let from = self.state;
        self.reporter.report(&Report::Changed { from, to: kind });
        self.history.push(Change::now(from, kind));
        self.state = kind;
    }

    pub fn state(&self) -> StateKind {
        self.state
    }

    pub fn state_name(&self) -> &'static str {
        self.state.name()
    }

    /// Applied changes, oldest first.
    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    pub fn reporter_mut(&mut self) -> &mut R {
        &mut self.reporter
    }

    pub fn into_reporter(self) -> R {
        self.reporter
    }
}

impl<R: Reporter> StateHost for Player<R> {
    fn current(&self) -> StateKind {
        self.state
    }

    fn set_state(&mut self, kind: StateKind) {
        Player::set_state(self, kind);
    }

    fn report(&mut self, report: Report) {
        self.reporter.report(&report);
    }
}
