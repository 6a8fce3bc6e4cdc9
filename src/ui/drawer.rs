use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::hitbox::{HitTarget, Hitboxes};
use super::theme::Palette;
use crate::logic::formatting::fit_width;
use crate::model::{DrawerState, Section};

/// Drawer panel width, including borders
const DRAWER_WIDTH: u16 = 30;

/// Panel anchored to the right edge below the top bar
pub fn drawer_area(area: Rect) -> Rect {
    let width = DRAWER_WIDTH.min(area.width);
    let top = area.y + 3.min(area.height);
    Rect {
        x: area.right() - width,
        y: top,
        width,
        height: area.bottom().saturating_sub(top),
    }
}

fn item_line(section: Section, current: Section, under_cursor: bool, width: usize, palette: &Palette) -> Line<'static> {
    let marker = if section == current { "●" } else { " " };
    let label = format!(" {} {} {}", marker, section.icon(), section.label());
    let text = fit_width(&label, width.saturating_sub(3));
    let key = format!(" {} ", section.shortcut());

    let mut style = if section == current {
        palette.primary_bold()
    } else {
        Style::default().fg(palette.foreground)
    };
    if under_cursor {
        style = style.add_modifier(Modifier::REVERSED);
    }
    Line::from(vec![
        Span::styled(text, style),
        Span::styled(key, palette.secondary()),
    ])
}

/// Record a full-width click row `row` lines into `inner`, if it is visible
fn push_row(hitboxes: &mut Hitboxes, inner: Rect, row: usize, target: HitTarget) {
    let y = inner.y.saturating_add(row as u16);
    if row < usize::from(inner.height) {
        hitboxes.push(Rect::new(inner.x, y, inner.width, 1), target);
    }
}

/// Render the navigation drawer and record its items
pub fn render_drawer(
    f: &mut Frame,
    area: Rect,
    drawer: &DrawerState,
    current: Section,
    full_name: &str,
    palette: &Palette,
    hitboxes: &mut Hitboxes,
) {
    let panel = drawer_area(area);
    if panel.width < 4 || panel.height < 3 {
        return;
    }
    f.render_widget(Clear, panel);
    hitboxes.set_modal(panel);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(palette.primary_bold())
        .title(Span::styled(format!(" {} ", full_name), palette.heading()))
        .style(palette.text());
    let inner = block.inner(panel);
    f.render_widget(block, panel);

    let width = usize::from(inner.width);
    let mut lines = Vec::new();
    for (index, section) in Section::ALL.iter().enumerate() {
        lines.push(item_line(*section, current, drawer.cursor == index, width, palette));
        push_row(hitboxes, inner, index, HitTarget::DrawerItem(*section));
    }
    lines.push(Line::default());

    push_row(hitboxes, inner, lines.len(), HitTarget::HireButton);
    lines.push(Line::from(vec![
        Span::raw(" "),
        Span::styled(fit_width(" Hire Me (h) ", width.saturating_sub(1)), palette.button()),
    ]));
    lines.push(Line::default());
    lines.push(Line::from(vec![
        Span::styled(" Enter", Style::default().fg(palette.accent)),
        Span::styled(":Go  ", palette.secondary()),
        Span::styled("Esc", Style::default().fg(palette.accent)),
        Span::styled(":Close", palette.secondary()),
    ]));

    f.render_widget(Paragraph::new(lines), inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ThemeMode;
    use crate::ui::theme::palette;

    #[test]
    fn test_drawer_area_hugs_right_edge() {
        let area = drawer_area(Rect::new(0, 0, 80, 24));
        assert_eq!(area, Rect::new(50, 3, 30, 21));

        let narrow = drawer_area(Rect::new(0, 0, 20, 24));
        assert_eq!(narrow.x, 0);
        assert_eq!(narrow.width, 20);
    }

    #[test]
    fn test_hire_me_row_follows_sections() {
        let inner = Rect::new(51, 4, 28, 20);
        let mut hitboxes = Hitboxes::default();
        hitboxes.set_modal(Rect::new(50, 3, 30, 22));
        push_row(&mut hitboxes, inner, 8, HitTarget::HireButton);
        assert_eq!(hitboxes.hit(55, 12), Some(HitTarget::HireButton));

        // Rows past the panel bottom are not clickable
        let mut clipped = Hitboxes::default();
        push_row(&mut clipped, Rect::new(0, 0, 10, 3), 5, HitTarget::HireButton);
        assert!(clipped.is_empty());
    }

    #[test]
    fn test_cursor_row_is_reversed() {
        let p = palette(ThemeMode::Dark);
        let line = item_line(Section::About, Section::Home, true, 28, &p);
        assert!(line.spans[0].style.add_modifier.contains(Modifier::REVERSED));
        let line = item_line(Section::About, Section::Home, false, 28, &p);
        assert!(!line.spans[0].style.add_modifier.contains(Modifier::REVERSED));
    }
}
