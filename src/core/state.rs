//! The per-state behavior contract.
//!
//! Every state decides how it responds to each [`Action`]. Responses that are
//! not overridden fall back to the provided methods, which report an illegal
//! transition and leave the host untouched.

use super::kind::{Action, StateKind};
use crate::report::Report;
use std::fmt::Debug;

/// The owner of a current state, as seen by the state's handlers.
///
/// [`Player`](crate::Player) is the production host. Handlers only ever ask
/// the host to install a new state or to emit a report.
pub trait StateHost {
    /// The state currently installed.
    fn current(&self) -> StateKind;

    /// Replace the current state with a newly selected one.
    fn set_state(&mut self, kind: StateKind);

    /// Emit an observable report without changing state.
    fn report(&mut self, report: Report);
}

/// Behavior of a single player state.
///
/// Implementors override only the actions that lead somewhere legal. The
/// provided `on_*` methods reject the action via [`reject`].
///
/// # Example
///
/// ```rust
/// use playstate::core::{Action, State, StateKind};
/// use playstate::report::Transcript;
/// use playstate::Player;
///
/// let mut player = Player::with_reporter(Transcript::default());
/// StateKind::Stopped.behavior().on(Action::Pause, &mut player);
///
/// assert_eq!(player.state(), StateKind::Stopped);
/// assert_eq!(
///     player.reporter().lines(),
///     vec!["Illegal state transition from Stopped to Paused"]
/// );
/// ```
pub trait State: Debug + Send + Sync {
    /// The kind this behavior belongs to.
    fn kind(&self) -> StateKind;

    /// Display name, identical to the kind's name.
    fn name(&self) -> &'static str {
        self.kind().name()
    }

    fn on_play(&self, host: &mut dyn StateHost) {
        reject(host, Action::Play);
    }

    fn on_pause(&self, host: &mut dyn StateHost) {
        reject(host, Action::Pause);
    }

    fn on_stop(&self, host: &mut dyn StateHost) {
        reject(host, Action::Stop);
    }

    /// Route an action value to the matching handler.
    fn on(&self, action: Action, host: &mut dyn StateHost) {
        match action {
            Action::Play => self.on_play(host),
            Action::Pause => self.on_pause(host),
            Action::Stop => self.on_stop(host),
        }
    }
}

/// Report that `action` is not allowed from the host's current state.
pub fn reject(host: &mut dyn StateHost, action: Action) {
    let from = host.current();
    host.report(Report::Illegal {
        from,
        to: action.target(),
    });
}

/// Host that records the requested state instead of applying it.
struct Probe {
    current: StateKind,
    next: Option<StateKind>,
}

impl StateHost for Probe {
    fn current(&self) -> StateKind {
        self.current
    }

    fn set_state(&mut self, kind: StateKind) {
        self.next = Some(kind);
    }

    fn report(&mut self, _report: Report) {}
}

/// Where `action` leads from `from`, or `None` if it is illegal.
///
/// Pure: the handler runs against a throwaway host and nothing is reported.
///
/// # Example
///
/// ```rust
/// use playstate::core::{transition, Action, StateKind};
///
/// assert_eq!(transition(StateKind::Paused, Action::Play), Some(StateKind::Playing));
/// assert_eq!(transition(StateKind::Paused, Action::Pause), None);
/// ```
pub fn transition(from: StateKind, action: Action) -> Option<StateKind> {
    let mut probe = Probe {
        current: from,
        next: None,
    };
    from.behavior().on(action, &mut probe);
    probe.next
}
