//! Parse errors for action and state names.

use thiserror::Error;

/// Errors that can occur when turning text into actions or states.
///
/// Illegal transitions are not errors; they are reported through a
/// [`Reporter`](crate::report::Reporter) and leave the player unchanged.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown action '{0}'. Expected one of: play, pause, stop")]
    UnknownAction(String),

    #[error("Unknown state '{0}'. Expected one of: stopped, playing, paused")]
    UnknownState(String),
}
