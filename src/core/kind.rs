//! State and action identifiers.

use crate::error::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The three mutually exclusive states of a player.
///
/// # Example
///
/// ```rust
/// use playstate::core::StateKind;
///
/// assert_eq!(StateKind::Paused.name(), "Paused");
/// assert_eq!("playing".parse::<StateKind>().unwrap(), StateKind::Playing);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StateKind {
    #[default]
    Stopped,
    Playing,
    Paused,
}

impl StateKind {
    /// Every state kind, in declaration order.
    pub const ALL: [StateKind; 3] = [Self::Stopped, Self::Playing, Self::Paused];

    /// Display name used in reports.
    pub fn name(self) -> &'static str {
        match self {
            Self::Stopped => "Stopped",
            Self::Playing => "Playing",
            Self::Paused => "Paused",
        }
    }
}

impl fmt::Display for StateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StateKind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseError::UnknownState(s.to_string()))
    }
}

/// An action requested of a player.
///
/// Every action names the state it would move the player into, which is also
/// the state named when the action is rejected.
///
/// # Example
///
/// ```rust
/// use playstate::core::{Action, StateKind};
///
/// assert_eq!(Action::Pause.target(), StateKind::Paused);
/// assert_eq!("STOP".parse::<Action>().unwrap(), Action::Stop);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Play,
    Pause,
    Stop,
}

impl Action {
    /// Every action, in declaration order.
    pub const ALL: [Action; 3] = [Self::Play, Self::Pause, Self::Stop];

    pub fn name(self) -> &'static str {
        match self {
            Self::Play => "Play",
            Self::Pause => "Pause",
            Self::Stop => "Stop",
        }
    }

    /// The state this action asks for.
    pub fn target(self) -> StateKind {
        match self {
            Self::Play => StateKind::Playing,
            Self::Pause => StateKind::Paused,
            Self::Stop => StateKind::Stopped,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Action {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|action| action.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseError::UnknownAction(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_names_match_reports() {
        assert_eq!(StateKind::Stopped.name(), "Stopped");
        assert_eq!(StateKind::Playing.name(), "Playing");
        assert_eq!(StateKind::Paused.name(), "Paused");
        assert_eq!(StateKind::Paused.to_string(), "Paused");
    }

    #[test]
    fn default_state_is_stopped() {
        assert_eq!(StateKind::default(), StateKind::Stopped);
    }

    #[test]
    fn action_targets() {
        assert_eq!(Action::Play.target(), StateKind::Playing);
        assert_eq!(Action::Pause.target(), StateKind::Paused);
        assert_eq!(Action::Stop.target(), StateKind::Stopped);
    }

    #[test]
    fn parsing_ignores_case_and_whitespace() {
        assert_eq!(" pause ".parse::<Action>().unwrap(), Action::Pause);
        assert_eq!("PLAY".parse::<Action>().unwrap(), Action::Play);
        assert_eq!("stopped".parse::<StateKind>().unwrap(), StateKind::Stopped);
    }

    #[test]
    fn parsing_rejects_unknown_names() {
        let err = "rewind".parse::<Action>().unwrap_err();
        assert!(matches!(err, ParseError::UnknownAction(ref name) if name == "rewind"));

        let err = "buffering".parse::<StateKind>().unwrap_err();
        assert!(matches!(err, ParseError::UnknownState(ref name) if name == "buffering"));
    }

    #[test]
    fn kinds_serialize_by_name() {
        let json = serde_json::to_string(&StateKind::Playing).unwrap();
        assert_eq!(json, "\"Playing\"");
        let action: Action = serde_json::from_str("\"Stop\"").unwrap();
        assert_eq!(action, Action::Stop);
    }
}
