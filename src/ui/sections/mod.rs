//! Section renderers
//!
//! Each section builds its own lines for a content width, layout mode and
//! palette. The document is the sections in `Section::ALL` order.

pub mod about;
pub mod contact;
pub mod experience;
pub mod hero;
pub mod projects;
pub mod services;
pub mod skills;

use ratatui::text::Line;

use super::theme::Palette;
use crate::content::PortfolioContent;
use crate::model::{LayoutMode, Section};

/// Lines for one section
pub fn section_lines(
    section: Section,
    content: &PortfolioContent,
    width: u16,
    mode: LayoutMode,
    palette: &Palette,
) -> Vec<Line<'static>> {
    match section {
        Section::Home => hero::lines(content, width, mode, palette),
        Section::About => about::lines(content, width, mode, palette),
        Section::Skills => skills::lines(content, width, mode, palette),
        Section::Experience => experience::lines(content, width, mode, palette),
        Section::Projects => projects::lines(content, width, mode, palette),
        Section::Services => services::lines(content, width, mode, palette),
        Section::Contact => contact::lines(content, width, mode, palette),
    }
}

/// Every section's lines, in document order
pub fn document(
    content: &PortfolioContent,
    width: u16,
    mode: LayoutMode,
    palette: &Palette,
) -> Vec<Vec<Line<'static>>> {
    Section::ALL
        .iter()
        .map(|section| section_lines(*section, content, width, mode, palette))
        .collect()
}

/// Row heights of `sections`, saturating at `u16::MAX`
pub fn heights(sections: &[Vec<Line<'static>>]) -> Vec<u16> {
    sections
        .iter()
        .map(|lines| u16::try_from(lines.len()).unwrap_or(u16::MAX))
        .collect()
}
