//! Concrete state behaviors.
//!
//! Each type overrides only its legal actions; everything else is rejected
//! by the provided methods on [`State`].

use super::kind::StateKind;
use super::state::{State, StateHost};

/// Nothing is playing. Only `Play` is legal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Stopped;

/// Audio is playing. `Pause` and `Stop` are legal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Playing;

/// Playback is suspended. `Play` and `Stop` are legal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Paused;

impl State for Stopped {
    fn kind(&self) -> StateKind {
        StateKind::Stopped
    }

    fn on_play(&self, host: &mut dyn StateHost) {
        host.set_state(StateKind::Playing);
    }
}

impl State for Playing {
    fn kind(&self) -> StateKind {
        StateKind::Playing
    }

    fn on_pause(&self, host: &mut dyn StateHost) {
        host.set_state(StateKind::Paused);
    }

    fn on_stop(&self, host: &mut dyn StateHost) {
        host.set_state(StateKind::Stopped);
    }
}

impl State for Paused {
    fn kind(&self) -> StateKind {
        StateKind::Paused
    }

    fn on_play(&self, host: &mut dyn StateHost) {
        host.set_state(StateKind::Playing);
    }

    fn on_stop(&self, host: &mut dyn StateHost) {
        host.set_state(StateKind::Stopped);
    }
}

impl StateKind {
    /// The behavior installed for this kind.
    pub fn behavior(self) -> &'static dyn State {
        match self {
            Self::Stopped => &Stopped,
            Self::Playing => &Playing,
            Self::Paused => &Paused,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn behavior_kind_round_trips() {
        for kind in StateKind::ALL {
            assert_eq!(kind.behavior().kind(), kind);
            assert_eq!(kind.behavior().name(), kind.name());
        }
    }

    #[test]
    fn states_are_zero_sized() {
        assert_eq!(std::mem::size_of::<Stopped>(), 0);
        assert_eq!(std::mem::size_of::<Playing>(), 0);
        assert_eq!(std::mem::size_of::<Paused>(), 0);
    }
}
