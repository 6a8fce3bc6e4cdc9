//! External Services
//!
//! This module contains services that interact with external systems:
//! - links: Opens resume, email and social links with the platform opener

pub mod links;

// Re-export commonly used types for convenience
pub use links::{spawn_link_service, LinkRequest, LinkResponse};
