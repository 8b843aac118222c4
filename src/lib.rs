//! Lemonade - Terminal Lemonade Maker Library
//!
//! A four-step "make lemonade" activity for the terminal, built in Rust.

pub mod domain;
pub mod application;
pub mod infrastructure;
pub mod presentation;

pub use domain::*;
pub use application::*;
