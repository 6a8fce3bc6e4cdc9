//! Layout calculation logic
//!
//! Pure functions for classifying the viewport width and sizing the
//! centered content column.

use crate::model::LayoutMode;

/// Widths below this many units use the compact arrangement
pub const EXPANDED_BREAKPOINT: u32 = 900;

/// Widest the content column may grow, in width units
pub const MAX_CONTENT_WIDTH: u32 = 1368;

/// Default number of width units a terminal column represents
pub const DEFAULT_CELL_WIDTH_UNITS: u32 = 8;

/// Classify a width into a layout mode
///
/// # Examples
/// ```
/// use foliotui::logic::layout::resolve;
/// use foliotui::model::LayoutMode;
///
/// assert_eq!(resolve(899), LayoutMode::Compact);
/// assert_eq!(resolve(900), LayoutMode::Expanded);
/// ```
pub fn resolve(width: u32) -> LayoutMode {
    if width < EXPANDED_BREAKPOINT {
        LayoutMode::Compact
    } else {
        LayoutMode::Expanded
    }
}

/// Select the per-mode value
///
/// # Examples
/// ```
/// use foliotui::logic::layout::pick;
/// use foliotui::model::LayoutMode;
///
/// assert_eq!(pick(LayoutMode::Compact, 1, 3), 1);
/// assert_eq!(pick(LayoutMode::Expanded, 1, 3), 3);
/// ```
pub fn pick<T>(mode: LayoutMode, compact: T, expanded: T) -> T {
    match mode {
        LayoutMode::Compact => compact,
        LayoutMode::Expanded => expanded,
    }
}

/// Convert terminal columns into width units
pub fn columns_to_units(columns: u16, cell_width_units: u32) -> u32 {
    u32::from(columns).saturating_mul(cell_width_units.max(1))
}

/// Layout mode for a terminal that is `columns` wide
pub fn resolve_columns(columns: u16, cell_width_units: u32) -> LayoutMode {
    resolve(columns_to_units(columns, cell_width_units))
}

/// Horizontal placement of the content column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentColumn {
    /// Left margin in columns
    pub margin: u16,
    /// Column width in columns
    pub width: u16,
}

/// Center a column capped at `MAX_CONTENT_WIDTH` within `available` columns
///
/// # Examples
/// ```
/// use foliotui::logic::layout::content_column;
///
/// // 80 columns fit under the cap, so the column fills the screen
/// let col = content_column(80, 8);
/// assert_eq!((col.margin, col.width), (0, 80));
///
/// // 200 columns exceed 1368/8 = 171, so the column is centered
/// let col = content_column(200, 8);
/// assert_eq!((col.margin, col.width), (14, 171));
/// ```
pub fn content_column(available: u16, cell_width_units: u32) -> ContentColumn {
    let max_columns = (MAX_CONTENT_WIDTH / cell_width_units.max(1)).min(u32::from(u16::MAX)) as u16;
    let width = available.min(max_columns.max(1));
    ContentColumn {
        margin: (available - width) / 2,
        width,
    }
}

/// Number of card columns for a grid of `items` in the given mode
pub fn grid_columns(mode: LayoutMode, expanded_columns: usize, items: usize) -> usize {
    pick(mode, 1, expanded_columns).min(items.max(1))
}
