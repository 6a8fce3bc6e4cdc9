use ratatui::text::Line;

use crate::content::PortfolioContent;
use crate::logic::layout::grid_columns;
use crate::model::LayoutMode;
use crate::ui::blocks::{card, card_inner_width, column_width, grid, paragraph, section_heading};
use crate::ui::theme::Palette;

/// Services: a card per offering, three columns when expanded
pub fn lines(content: &PortfolioContent, width: u16, mode: LayoutMode, palette: &Palette) -> Vec<Line<'static>> {
    let services = &content.services;
    let mut lines = section_heading("My", "Services", &services.intro, width, palette);

    let columns = grid_columns(mode, 3, services.items.len());
    let col = column_width(width, columns);
    let cards = services
        .items
        .iter()
        .map(|service| {
            card(
                &service.title,
                paragraph(&service.description, card_inner_width(col), palette.secondary()),
                col,
                palette,
            )
        })
        .collect();
    lines.extend(grid(cards, columns, col));
    lines
}
