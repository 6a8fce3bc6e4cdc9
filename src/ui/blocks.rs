//! Line-level building blocks for the scrollable document
//!
//! Sections are rendered to plain `Vec<Line>` so the viewport can measure
//! their heights and slice the document by row. Cards are drawn with
//! box characters instead of `Block` widgets for the same reason.

use ratatui::{
    style::Style,
    text::{Line, Span},
};
use unicode_width::UnicodeWidthStr;

use super::theme::Palette;
use crate::logic::formatting::{center_padding, chip_rows, fit_width, wrap_text};

/// Gap between side-by-side cards
pub const COLUMN_GAP: u16 = 2;

/// Display width of a line
pub fn line_width(line: &Line) -> usize {
    line.spans.iter().map(|span| span.content.width()).sum()
}

/// Pad a line with spaces to exactly `width` columns
///
/// Lines wider than `width` are left as they are; callers wrap first.
pub fn pad_line(mut line: Line<'static>, width: usize) -> Line<'static> {
    let current = line_width(&line);
    if current < width {
        line.spans.push(Span::raw(" ".repeat(width - current)));
    }
    line
}

/// Center a line within `width` columns
pub fn center_line(mut line: Line<'static>, width: usize) -> Line<'static> {
    let padding = center_padding(line_width(&line), width);
    if padding > 0 {
        line.spans.insert(0, Span::raw(" ".repeat(padding)));
    }
    line
}

/// Wrapped paragraph in a single style
pub fn paragraph(text: &str, width: u16, style: Style) -> Vec<Line<'static>> {
    wrap_text(text, usize::from(width))
        .into_iter()
        .map(|row| Line::from(Span::styled(row, style)))
        .collect()
}

/// Wrapped paragraph with every row centered
pub fn centered_paragraph(text: &str, width: u16, style: Style) -> Vec<Line<'static>> {
    paragraph(text, width, style)
        .into_iter()
        .map(|line| center_line(line, usize::from(width)))
        .collect()
}

/// Two-tone section title ("About" + "Me") with a centered subtitle
pub fn section_heading(
    plain: &str,
    accent: &str,
    subtitle: &str,
    width: u16,
    palette: &Palette,
) -> Vec<Line<'static>> {
    let mut lines = vec![center_line(
        Line::from(vec![
            Span::styled(format!("{} ", plain), palette.heading()),
            Span::styled(accent.to_string(), palette.primary_bold()),
        ]),
        usize::from(width),
    )];
    let rule_width = (plain.width() + accent.width() + 1).min(usize::from(width));
    lines.push(center_line(
        Line::from(Span::styled("━".repeat(rule_width), palette.primary_bold())),
        usize::from(width),
    ));
    if !subtitle.is_empty() {
        lines.extend(centered_paragraph(subtitle, width, palette.secondary()));
    }
    lines.push(Line::default());
    lines
}

/// Chips ("Kotlin", "Flutter") packed into rows
pub fn chips<S: AsRef<str>>(items: &[S], width: u16, palette: &Palette) -> Vec<Line<'static>> {
    chip_rows(items, usize::from(width))
        .into_iter()
        .map(|row| {
            let mut spans = Vec::new();
            for (i, chip) in row.iter().enumerate() {
                if i > 0 {
                    spans.push(Span::raw(" "));
                }
                spans.push(Span::styled(format!(" {} ", chip), palette.chip()));
            }
            Line::from(spans)
        })
        .collect()
}

/// Bullet list with hanging indent
pub fn bullets(items: &[String], width: u16, marker: &str, palette: &Palette) -> Vec<Line<'static>> {
    let marker_width = marker.width() + 1;
    let text_width = usize::from(width).saturating_sub(marker_width).max(1);
    let mut lines = Vec::new();
    for item in items {
        for (i, row) in wrap_text(item, text_width).into_iter().enumerate() {
            let prefix = if i == 0 {
                Span::styled(format!("{} ", marker), palette.primary_bold())
            } else {
                Span::raw(" ".repeat(marker_width))
            };
            lines.push(Line::from(vec![prefix, Span::styled(row, palette.text())]));
        }
    }
    lines
}

/// Draw a rounded card of `width` columns around `body`
///
/// The title sits in the top border. Body lines are padded to the inner
/// width; anything wider is the caller's bug and is left unclipped.
pub fn card(title: &str, body: Vec<Line<'static>>, width: u16, palette: &Palette) -> Vec<Line<'static>> {
    let width = usize::from(width.max(4));
    let inner = width - 4;
    let border = palette.border();

    let mut top = vec![Span::styled("╭─", border)];
    if title.is_empty() {
        top.push(Span::styled("─".repeat(inner + 1), border));
    } else {
        let title = fit_width(title, inner.saturating_sub(2).min(title.width()));
        let title_width = title.width();
        top.push(Span::styled(format!(" {} ", title), palette.primary_bold()));
        top.push(Span::styled(
            "─".repeat((inner + 1).saturating_sub(title_width + 2)),
            border,
        ));
    }
    top.push(Span::styled("╮", border));

    let mut lines = vec![Line::from(top)];
    for line in body {
        let mut spans = vec![Span::styled("│ ", border)];
        spans.extend(pad_line(line, inner).spans);
        spans.push(Span::styled(" │", border));
        lines.push(Line::from(spans));
    }
    lines.push(Line::from(vec![
        Span::styled("╰", border),
        Span::styled("─".repeat(width - 2), border),
        Span::styled("╯", border),
    ]));
    lines
}

/// Inner text width of a card `width` columns wide
pub fn card_inner_width(width: u16) -> u16 {
    width.max(4) - 4
}

/// Width of each column when `columns` cards share `total` columns
pub fn column_width(total: u16, columns: usize) -> u16 {
    let columns = columns.max(1) as u16;
    let gaps = COLUMN_GAP * (columns - 1);
    (total.saturating_sub(gaps) / columns).max(4)
}

/// Lay out blocks in a grid of `columns`, row by row
///
/// Blocks in one grid row are padded to the tallest of them.
pub fn grid(blocks: Vec<Vec<Line<'static>>>, columns: usize, column_width: u16) -> Vec<Line<'static>> {
    let columns = columns.max(1);
    let width = usize::from(column_width);
    let gap = " ".repeat(usize::from(COLUMN_GAP));
    let mut lines = Vec::new();

    let mut blocks = blocks.into_iter().peekable();
    while blocks.peek().is_some() {
        let row: Vec<Vec<Line<'static>>> = blocks.by_ref().take(columns).collect();
        let height = row.iter().map(Vec::len).max().unwrap_or(0);
        for r in 0..height {
            let mut spans = Vec::new();
            for (c, block) in row.iter().enumerate() {
                if c > 0 {
                    spans.push(Span::raw(gap.clone()));
                }
                let line = block.get(r).cloned().unwrap_or_default();
                spans.extend(pad_line(line, width).spans);
            }
            lines.push(Line::from(spans));
        }
        lines.push(Line::default());
    }
    lines.pop();
    lines
}
