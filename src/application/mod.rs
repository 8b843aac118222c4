//! Application layer managing session state and user workflows.
//!
//! This module sits between the step state machine and the terminal
//! front end, owning the mutable session and the layout settings.

pub mod config;
pub mod state;

pub use config::*;
pub use state::*;
