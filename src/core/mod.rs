//! Core state machine types.
//!
//! - [`StateKind`] and [`Action`] identify states and requests
//! - [`State`] is the per-state behavior contract, with one type per variant
//! - [`History`] tracks applied changes

mod history;
mod kind;
mod state;
mod variants;

pub use history::{Change, History};
pub use kind::{Action, StateKind};
pub use state::{reject, transition, State, StateHost};
pub use variants::{Paused, Playing, Stopped};
