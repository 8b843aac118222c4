//! Presentation layer handling terminal UI and user input.
//!
//! This module draws the lemonade screen with ratatui, maps resource
//! keys to text and pictures, and turns key and mouse events into taps.

pub mod resources;
pub mod ui;
pub mod input;

pub use resources::*;
pub use ui::*;
pub use input::*;
