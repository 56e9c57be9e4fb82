//! Playstate: a music player modelled as a small state machine.
//!
//! A [`Player`] is always in exactly one of three states (`Stopped`,
//! `Playing`, `Paused`) and accepts three actions (`play`, `pause`, `stop`).
//! Each state decides how it answers each action. Legal actions move the
//! player to a new state; illegal ones are reported and change nothing.
//!
//! # Core Concepts
//!
//! - **State**: per-variant behavior via the [`State`](core::State) trait
//! - **Player**: owns the current state and delegates actions to it
//! - **Report**: the single line of output every action produces
//! - **History**: ordered record of applied changes
//!
//! | Current state | Play | Pause | Stop |
//! |---|---|---|---|
//! | Stopped | → Playing | illegal | illegal |
//! | Playing | illegal | → Paused | → Stopped |
//! | Paused | → Playing | illegal | → Stopped |
//!
//! # Example
//!
//! ```rust
//! use playstate::core::StateKind;
//! use playstate::report::Transcript;
//! use playstate::Player;
//!
//! let mut player = Player::with_reporter(Transcript::default());
//! player.play();
//! player.pause();
//!
//! assert_eq!(player.state(), StateKind::Paused);
//! assert_eq!(player.history().len(), 2);
//! ```

pub mod core;
pub mod error;
pub mod player;
pub mod report;

// Re-export commonly used types
pub use crate::core::{Action, State, StateKind};
pub use error::ParseError;
pub use player::Player;
pub use report::{Report, Reporter};
