use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::theme::Palette;
use crate::logic::navigation::{index_for_section, SECTION_COUNT};
use crate::model::{LayoutMode, Section, ThemeMode};

/// Percentage of the scroll range covered by `offset`
///
/// # Examples
/// ```
/// use foliotui::ui::status_bar::scroll_percent;
///
/// assert_eq!(scroll_percent(0, 0), 100);
/// assert_eq!(scroll_percent(0, 80), 0);
/// assert_eq!(scroll_percent(20, 80), 25);
/// assert_eq!(scroll_percent(80, 80), 100);
/// ```
pub fn scroll_percent(offset: u32, max_offset: u32) -> u32 {
    if max_offset == 0 {
        return 100;
    }
    (u64::from(offset.min(max_offset)) * 100 / u64::from(max_offset)) as u32
}

/// Build the status line (extracted for testability)
fn build_status_spans(
    current: Section,
    offset: u32,
    max_offset: u32,
    mode: LayoutMode,
    theme: ThemeMode,
    animating: bool,
    palette: &Palette,
) -> Vec<Span<'static>> {
    let separator = Span::styled(" │ ", palette.border());
    let mode_label = match mode {
        LayoutMode::Compact => "Compact",
        LayoutMode::Expanded => "Expanded",
    };

    let mut spans = vec![
        Span::styled(format!(" {} {}", current.icon(), current.label()), palette.primary_bold()),
        Span::styled(
            format!(" {}/{}", index_for_section(current) + 1, SECTION_COUNT),
            palette.secondary(),
        ),
        separator.clone(),
        Span::styled(format!("{:>3}%", scroll_percent(offset, max_offset)), palette.secondary()),
        separator.clone(),
        Span::styled(mode_label, palette.secondary()),
        separator,
        Span::styled(theme.as_str(), palette.secondary()),
    ];
    if animating {
        spans.push(Span::styled("  ⇣", Style::default().fg(palette.accent)));
    }
    spans
}

/// Render the bottom status line
pub fn render_status_bar(
    f: &mut Frame,
    area: Rect,
    current: Section,
    offset: u32,
    max_offset: u32,
    mode: LayoutMode,
    theme: ThemeMode,
    animating: bool,
    palette: &Palette,
) {
    let line = Line::from(build_status_spans(
        current, offset, max_offset, mode, theme, animating, palette,
    ));
    f.render_widget(
        Paragraph::new(line).style(Style::default().bg(palette.surface)),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::palette;

    #[test]
    fn test_status_shows_section_position_and_mode() {
        let p = palette(ThemeMode::Dark);
        let spans = build_status_spans(
            Section::Experience,
            40,
            80,
            LayoutMode::Expanded,
            ThemeMode::Dark,
            false,
            &p,
        );
        let text: String = spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(text.contains("Experience 4/7"));
        assert!(text.contains(" 50%"));
        assert!(text.contains("Expanded"));
        assert!(text.contains("dark"));
        assert!(!text.contains('⇣'));
    }
}
