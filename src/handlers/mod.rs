//! Event Handlers
//!
//! This module contains handlers for different types of events:
//! - keyboard: User keyboard input
//! - mouse: Wheel scrolling and clicks on top bar / drawer items
//! - links: Responses from the link opener service
//!
//! Handlers are functions that take &mut App and process one event.

pub mod keyboard;
pub mod links;
pub mod mouse;

// Re-export for convenience
pub use keyboard::handle_key;
pub use links::handle_link_response;
pub use mouse::handle_mouse;
