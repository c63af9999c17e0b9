//! Core controller types and logic.
//!
//! This module contains the pure core of the controller:
//! - Logical states and input signals
//! - Lamp commands and observer notifications
//! - The fixed transition table
//! - Transition history tracking
//!
//! Nothing here talks to a device or an observer; that happens in
//! [`crate::machine`].

mod command;
mod history;
mod signal;
mod state;
pub mod table;

pub use command::{LampCommand, Notification};
pub use history::{TransitionHistory, TransitionRecord};
pub use signal::Signal;
pub use state::LampState;
pub use table::{lookup, TransitionEntry, TRANSITION_TABLE};
