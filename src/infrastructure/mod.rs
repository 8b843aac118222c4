//! Infrastructure layer providing external service integrations.
//!
//! This module contains file loading and logging setup, the only
//! places the program touches the world outside the terminal.

pub mod logging;
pub mod persistence;

pub use logging::*;
pub use persistence::*;
