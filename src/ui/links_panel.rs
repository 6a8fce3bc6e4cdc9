use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use super::hitbox::{HitTarget, Hitboxes};
use super::theme::Palette;
use crate::content::LinkEntry;
use crate::logic::formatting::fit_width;
use crate::model::LinksPanelState;

const PANEL_WIDTH: u16 = 64;

/// Rows taken by the border and the hint line
const CHROME_ROWS: u16 = 4;

/// Panel centered horizontally below the top bar
pub fn panel_area(area: Rect, count: usize) -> Rect {
    let width = PANEL_WIDTH.min(area.width);
    let top = area.y + 3.min(area.height);
    let wanted = (count as u16).saturating_add(CHROME_ROWS);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: top,
        width,
        height: wanted.min(area.bottom().saturating_sub(top)),
    }
}

/// First listed entry so that `cursor` stays inside `rows` visible rows
///
/// # Examples
/// ```
/// use foliotui::ui::links_panel::scroll_start;
///
/// assert_eq!(scroll_start(0, 5), 0);
/// assert_eq!(scroll_start(4, 5), 0);
/// assert_eq!(scroll_start(7, 5), 3);
/// ```
pub fn scroll_start(cursor: usize, rows: usize) -> usize {
    if rows == 0 {
        return cursor;
    }
    (cursor + 1).saturating_sub(rows)
}

fn entry_line(link: &LinkEntry, selected: bool, width: usize, palette: &Palette) -> Line<'static> {
    let marker = if selected { "▸" } else { " " };
    let label = format!(" {} {}", marker, link.label);
    let label_width = label.width().min(width);
    let url_width = width.saturating_sub(label_width + 2);

    let mut label_style = Style::default().fg(palette.foreground);
    if selected {
        label_style = palette.primary_bold().add_modifier(Modifier::REVERSED);
    }
    let mut spans = vec![Span::styled(fit_width(&label, width), label_style)];
    if url_width > 3 {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(fit_width(&link.url, url_width), palette.link()));
    }
    Line::from(spans)
}

/// Render the links panel and record a click target per visible entry
pub fn render_links_panel(
    f: &mut Frame,
    area: Rect,
    state: &LinksPanelState,
    links: &[LinkEntry],
    palette: &Palette,
    hitboxes: &mut Hitboxes,
) {
    let panel = panel_area(area, links.len());
    if panel.width < 6 || panel.height < 3 {
        return;
    }
    f.render_widget(Clear, panel);
    hitboxes.set_modal(panel);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(palette.primary_bold())
        .title(Span::styled(" Links ", palette.heading()))
        .style(palette.text());
    let inner = block.inner(panel);
    f.render_widget(block, panel);

    let rows = usize::from(inner.height.saturating_sub(CHROME_ROWS - 2));
    let start = scroll_start(state.cursor, rows);
    let width = usize::from(inner.width);

    let mut lines = Vec::new();
    for (index, link) in links.iter().enumerate().skip(start).take(rows) {
        let y = inner.y + lines.len() as u16;
        lines.push(entry_line(link, index == state.cursor, width, palette));
        hitboxes.push(Rect::new(inner.x, y, inner.width, 1), HitTarget::Link(index));
    }
    lines.push(Line::default());
    lines.push(Line::from(vec![
        Span::styled(" Enter", Style::default().fg(palette.accent)),
        Span::styled(":Open  ", palette.secondary()),
        Span::styled("Esc", Style::default().fg(palette.accent)),
        Span::styled(":Close", palette.secondary()),
    ]));

    f.render_widget(Paragraph::new(lines), inner);
}
