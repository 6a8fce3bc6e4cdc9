use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::logic::layout::{content_column, resolve_columns};
use crate::model::LayoutMode;

/// Horizontal padding inside the content column
const CONTENT_PADDING: u16 = 1;

/// Layout information for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutInfo {
    /// Top bar with name and section links
    pub top_bar_area: Rect,
    /// Centered column the document is drawn into
    pub content_area: Rect,
    /// Full-width band behind the content (scrollbar lives on its right edge)
    pub scroll_area: Rect,
    /// Hotkey legend area (full width)
    pub legend_area: Rect,
    /// Bottom status line
    pub status_area: Rect,
    /// Layout class for this terminal width
    pub mode: LayoutMode,
}

/// Calculate the screen layout for all UI components
pub fn calculate_layout(terminal_size: Rect, legend_height: u16, cell_width_units: u32) -> LayoutInfo {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Top bar (border, text, border)
            Constraint::Min(1),                // Document
            Constraint::Length(legend_height), // Legend (exact fit for wrapped content)
            Constraint::Length(1),             // Status line
        ])
        .split(terminal_size);

    let scroll_area = main_chunks[1];

    // Leave the rightmost column to the scrollbar
    let usable = scroll_area.width.saturating_sub(1);
    let column = content_column(usable, cell_width_units);
    let padding = if column.width > CONTENT_PADDING * 2 + 20 { CONTENT_PADDING } else { 0 };
    let content_area = Rect {
        x: scroll_area.x + column.margin + padding,
        y: scroll_area.y,
        width: column.width.saturating_sub(padding * 2),
        height: scroll_area.height,
    };

    LayoutInfo {
        top_bar_area: main_chunks[0],
        content_area,
        scroll_area,
        legend_area: main_chunks[2],
        status_area: main_chunks[3],
        mode: resolve_columns(terminal_size.width, cell_width_units),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_stacks_bars_around_content() {
        let info = calculate_layout(Rect::new(0, 0, 80, 30), 3, 8);
        assert_eq!(info.top_bar_area.height, 3);
        assert_eq!(info.status_area.height, 1);
        assert_eq!(info.status_area.y, 29);
        assert_eq!(info.legend_area.height, 3);
        assert_eq!(info.scroll_area.height, 30 - 3 - 3 - 1);
        assert_eq!(info.mode, LayoutMode::Compact);
    }

    #[test]
    fn test_content_is_padded_and_leaves_scrollbar_column() {
        let info = calculate_layout(Rect::new(0, 0, 80, 30), 3, 8);
        assert_eq!(info.content_area.x, 1);
        assert_eq!(info.content_area.width, 77);
    }

    #[test]
    fn test_wide_terminal_centers_capped_column() {
        let info = calculate_layout(Rect::new(0, 0, 221, 40), 3, 8);
        assert_eq!(info.mode, LayoutMode::Expanded);
        // 220 usable columns, 171-column cap, 24-column margins, 1 padding
        assert_eq!(info.content_area.x, 25);
        assert_eq!(info.content_area.width, 169);
    }
}
