//! foliotui library
//!
//! Exposes modules for testing: the pure model and logic, content and
//! config loading, and the ratatui view tree.

pub mod config;
pub mod content;
pub mod error;
pub mod logging;
pub mod logic;
pub mod model;
pub mod ui;
