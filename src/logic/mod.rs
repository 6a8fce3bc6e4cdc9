//! Business Logic
//!
//! This module contains pure business logic functions that can be unit tested:
//! - formatting: Width-aware wrapping, padding and chip packing
//! - layout: Responsive breakpoint and content column calculations
//! - navigation: Section <-> index mapping and section cycling
//! - platform: Platform defaults (link opener)
//! - scroll: Section geometry and scroll animation curves
//! - ui: Toast timing and theme parsing

pub mod formatting;
pub mod layout;
pub mod navigation;
pub mod platform;
pub mod scroll;
pub mod ui;
