use ratatui::{
    layout::Rect,
    text::Line,
    widgets::{Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

use super::sections;
use super::theme::Palette;
use crate::content::PortfolioContent;
use crate::logic::scroll::SECTION_SPACING;
use crate::model::{LayoutMode, ViewportModel};

/// Rows of the document visible at `offset`, spacers included
fn visible_rows(sections: Vec<Vec<Line<'static>>>, offset: u32, height: u16) -> Vec<Line<'static>> {
    let spacing = usize::from(SECTION_SPACING);
    sections
        .into_iter()
        .enumerate()
        .flat_map(|(i, lines)| {
            let spacer = if i == 0 { 0 } else { spacing };
            std::iter::repeat_with(Line::default).take(spacer).chain(lines)
        })
        .skip(offset as usize)
        .take(usize::from(height))
        .collect()
}

/// Lay out every section, update the viewport geometry, draw the window
///
/// Section heights depend on width and mode, so the viewport is
/// relayouted here on every frame; it is a no-op when nothing changed.
pub fn render_document(
    f: &mut Frame,
    area: Rect,
    scroll_area: Rect,
    viewport: &mut ViewportModel,
    content: &PortfolioContent,
    mode: LayoutMode,
    palette: &Palette,
) {
    let sections = sections::document(content, area.width, mode, palette);
    viewport.relayout(sections::heights(&sections), area.height);

    let rows = visible_rows(sections, viewport.offset, area.height);
    f.render_widget(Paragraph::new(rows).style(palette.text()), area);

    let max_offset = viewport.max_offset();
    if max_offset > 0 {
        let mut state = ScrollbarState::new(max_offset as usize).position(viewport.offset as usize);
        f.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(None)
                .end_symbol(None)
                .thumb_style(palette.primary_bold())
                .track_style(palette.border()),
            scroll_area,
            &mut state,
        );
    }
}
