use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::theme::Palette;
use crate::model::Overlay;

/// Build hotkey spans (extracted for testability)
fn build_hotkey_spans(
    vim_mode: bool,
    overlay: Overlay,
    menu_collapsed: bool,
    has_resume: bool,
    palette: &Palette,
) -> Vec<Span<'static>> {
    let key = Style::default().fg(palette.accent);
    let mut hotkey_spans = vec![];
    let (up, down) = if vim_mode { ("k", "j") } else { ("↑", "↓") };

    // Inside an overlay only its own keys apply
    match overlay {
        Overlay::Drawer => {
            hotkey_spans.extend(vec![
                Span::styled(format!("{}/{}", up, down), key),
                Span::raw(":Move  "),
                Span::styled("Enter", key),
                Span::raw(":Go  "),
                Span::styled("1-7", key),
                Span::raw(":Jump  "),
                Span::styled("h", key),
                Span::raw(":Hire Me  "),
                Span::styled("Esc/m", key),
                Span::raw(":Close"),
            ]);
            return hotkey_spans;
        }
        Overlay::Links => {
            hotkey_spans.extend(vec![
                Span::styled(format!("{}/{}", up, down), key),
                Span::raw(":Move  "),
                Span::styled("Enter", key),
                Span::raw(":Open  "),
                Span::styled("Esc/l", key),
                Span::raw(":Close"),
            ]);
            return hotkey_spans;
        }
        Overlay::None => {}
    }

    if vim_mode {
        hotkey_spans.extend(vec![
            Span::styled("j/k", key),
            Span::raw(":Scroll  "),
            Span::styled("^d/^u", key),
            Span::raw(":½Page  "),
            Span::styled("gg/G", key),
            Span::raw(":Top/Bottom  "),
        ]);
    } else {
        hotkey_spans.extend(vec![
            Span::styled("↑/↓", key),
            Span::raw(":Scroll  "),
            Span::styled("PgUp/PgDn", key),
            Span::raw(":½Page  "),
            Span::styled("Home/End", key),
            Span::raw(":Top/Bottom  "),
        ]);
    }

    hotkey_spans.extend(vec![
        Span::styled("Tab", key),
        Span::raw(":Next Section  "),
        Span::styled("1-7", key),
        Span::raw(":Jump  "),
    ]);

    // The drawer stands in for the top bar links when they are collapsed
    if menu_collapsed {
        hotkey_spans.extend(vec![Span::styled("m", key), Span::raw(":Menu  ")]);
    }

    hotkey_spans.extend(vec![
        Span::styled("t", key),
        Span::raw(":Theme  "),
        Span::styled("c", key),
        Span::raw(":Contact  "),
        Span::styled("l", key),
        Span::raw(":Links  "),
    ]);

    if has_resume {
        hotkey_spans.extend(vec![Span::styled("h", key), Span::raw(":Hire Me  ")]);
    }

    hotkey_spans.extend(vec![
        Span::styled("e", key),
        Span::raw(":Email  "),
        Span::styled("q", key),
        Span::raw(":Quit"),
    ]);

    hotkey_spans
}

/// Build the legend paragraph (reusable for both rendering and height calculation)
pub fn build_legend_paragraph(
    vim_mode: bool,
    overlay: Overlay,
    menu_collapsed: bool,
    has_resume: bool,
    palette: &Palette,
) -> Paragraph<'static> {
    let hotkey_line = Line::from(build_hotkey_spans(vim_mode, overlay, menu_collapsed, has_resume, palette));

    Paragraph::new(vec![hotkey_line])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(palette.border())
                .title("Hotkeys"),
        )
        .style(Style::default().fg(palette.muted_foreground).bg(palette.background))
        .wrap(ratatui::widgets::Wrap { trim: false })
}

/// Render the hotkey legend
pub fn render_legend(
    f: &mut Frame,
    area: Rect,
    vim_mode: bool,
    overlay: Overlay,
    menu_collapsed: bool,
    has_resume: bool,
    palette: &Palette,
) {
    let legend = build_legend_paragraph(vim_mode, overlay, menu_collapsed, has_resume, palette);
    f.render_widget(legend, area);
}

/// Calculate required height for legend based on terminal width and content
pub fn calculate_legend_height(
    terminal_width: u16,
    vim_mode: bool,
    overlay: Overlay,
    menu_collapsed: bool,
    has_resume: bool,
    palette: &Palette,
) -> u16 {
    // Count wrapped lines without the block; line_count() ignores borders
    let hotkey_line = Line::from(build_hotkey_spans(vim_mode, overlay, menu_collapsed, has_resume, palette));
    let paragraph_for_counting =
        Paragraph::new(vec![hotkey_line]).wrap(ratatui::widgets::Wrap { trim: false });

    let available_width = terminal_width.saturating_sub(2);
    let line_count = paragraph_for_counting.line_count(available_width);

    // Add top + bottom borders, ensure minimum of 3
    (line_count as u16).saturating_add(2).max(3)
}
