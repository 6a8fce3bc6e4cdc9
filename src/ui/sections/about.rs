use ratatui::text::{Line, Span};

use crate::content::{Fact, PortfolioContent};
use crate::logic::formatting::wrap_text;
use crate::logic::layout::grid_columns;
use crate::model::LayoutMode;
use crate::ui::blocks::{card, card_inner_width, column_width, grid, paragraph, section_heading};
use crate::ui::theme::Palette;

/// "Label: value" rows, value wrapped under the label
fn fact_lines(facts: &[Fact], width: u16, palette: &Palette) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for fact in facts {
        lines.push(Line::from(Span::styled(fact.label.clone(), palette.secondary())));
        for row in wrap_text(&fact.value, usize::from(width)) {
            lines.push(Line::from(Span::styled(row, palette.heading())));
        }
    }
    lines
}

fn story(paragraphs: &[String], width: u16, palette: &Palette) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (i, text) in paragraphs.iter().enumerate() {
        if i > 0 {
            lines.push(Line::default());
        }
        lines.extend(paragraph(text, width, palette.text()));
    }
    lines
}

/// About: headline, story paragraphs and the details card
///
/// Expanded puts the story and the details side by side.
pub fn lines(content: &PortfolioContent, width: u16, mode: LayoutMode, palette: &Palette) -> Vec<Line<'static>> {
    let about = &content.about;
    let mut lines = section_heading("About", "Me", &about.headline, width, palette);

    let columns = grid_columns(mode, 2, 2);
    let col = column_width(width, columns);

    let details = card(
        "Details",
        fact_lines(&about.facts, card_inner_width(col), palette),
        col,
        palette,
    );

    if about.facts.is_empty() {
        lines.extend(story(&about.paragraphs, width, palette));
    } else if columns == 1 {
        lines.extend(story(&about.paragraphs, width, palette));
        lines.push(Line::default());
        lines.extend(details);
    } else {
        lines.extend(grid(vec![story(&about.paragraphs, col, palette), details], columns, col));
    }
    lines
}
