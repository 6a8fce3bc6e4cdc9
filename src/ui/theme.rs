//! Color palettes for the dark and light schemes
//!
//! RGB values follow the portfolio's web palette: a green primary on a
//! near-black or white background.

use ratatui::style::{Color, Modifier, Style};

use crate::model::ThemeMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub foreground: Color,
    pub primary: Color,
    pub on_primary: Color,
    pub surface: Color,
    pub muted: Color,
    pub muted_foreground: Color,
    pub border: Color,
    pub accent: Color,
    pub error: Color,
    pub success: Color,
}

pub const DARK: Palette = Palette {
    background: Color::Rgb(13, 10, 9),
    foreground: Color::Rgb(250, 250, 250),
    primary: Color::Rgb(34, 197, 94),
    on_primary: Color::Rgb(5, 41, 16),
    surface: Color::Rgb(26, 21, 20),
    muted: Color::Rgb(25, 56, 38),
    muted_foreground: Color::Rgb(156, 163, 175),
    border: Color::Rgb(25, 56, 38),
    accent: Color::Rgb(245, 158, 11),
    error: Color::Rgb(239, 68, 68),
    success: Color::Rgb(16, 185, 129),
};

pub const LIGHT: Palette = Palette {
    background: Color::Rgb(255, 255, 255),
    foreground: Color::Rgb(10, 10, 11),
    primary: Color::Rgb(22, 163, 74),
    on_primary: Color::Rgb(255, 255, 255),
    surface: Color::Rgb(249, 250, 251),
    muted: Color::Rgb(244, 245, 245),
    muted_foreground: Color::Rgb(107, 114, 128),
    border: Color::Rgb(229, 231, 235),
    accent: Color::Rgb(217, 119, 6),
    error: Color::Rgb(239, 68, 68),
    success: Color::Rgb(16, 185, 129),
};

pub fn palette(mode: ThemeMode) -> Palette {
    match mode {
        ThemeMode::Dark => DARK,
        ThemeMode::Light => LIGHT,
    }
}

impl Palette {
    /// Default text on the page background
    pub fn text(&self) -> Style {
        Style::default().fg(self.foreground).bg(self.background)
    }

    pub fn primary_bold(&self) -> Style {
        Style::default().fg(self.primary).add_modifier(Modifier::BOLD)
    }

    pub fn heading(&self) -> Style {
        Style::default().fg(self.foreground).add_modifier(Modifier::BOLD)
    }

    pub fn secondary(&self) -> Style {
        Style::default().fg(self.muted_foreground)
    }

    pub fn border(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Filled button, like "Hire Me"
    pub fn button(&self) -> Style {
        Style::default()
            .fg(self.on_primary)
            .bg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Skill / technology chip
    pub fn chip(&self) -> Style {
        Style::default().fg(self.primary).bg(self.muted)
    }

    pub fn link(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::UNDERLINED)
    }
}
