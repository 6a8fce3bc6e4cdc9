// UI module - handles all TUI rendering using Ratatui
//
// Architecture:
// - theme: Dark and light palettes
// - layout: Calculates screen layout (top bar, centered content column, legend, status)
// - render: Main orchestration function that coordinates all rendering
// - top_bar: Name, section links, theme indicator, Hire Me / Menu button
// - document: Draws the visible window of the scrollable document
// - sections: One renderer per portfolio section
// - blocks: Cards, grids, chips and headings built from plain lines
// - drawer: Navigation drawer overlay (collapsed top bar)
// - links_panel: Overlay listing every external link
// - legend: Renders hotkey legend
// - status_bar: Renders bottom status line
// - toast: Renders toast notifications (brief pop-up messages)
// - hitbox: Clickable regions recorded during rendering

pub mod blocks;
pub mod document;
pub mod drawer;
pub mod hitbox;
pub mod layout;
pub mod legend;
pub mod links_panel;
pub mod render;
pub mod sections;
pub mod status_bar;
pub mod theme;
pub mod toast;
pub mod top_bar;

// Re-export main render function for convenience
pub use hitbox::{HitTarget, Hitboxes};
pub use render::render;
