use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use super::hitbox::{HitTarget, Hitboxes};
use super::theme::Palette;
use crate::content::Profile;
use crate::model::{LayoutMode, Section, ThemeMode};

/// Gap between top bar items
const ITEM_GAP: u16 = 2;

/// Theme indicator glyph for the active scheme
pub fn theme_indicator(theme: ThemeMode) -> &'static str {
    match theme {
        ThemeMode::Dark => "☾",
        ThemeMode::Light => "☀",
    }
}

/// How the bar fits into the available width
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopBarPlan {
    /// Draw the name on the left
    pub show_name: bool,
    /// Section links are behind "☰ Menu" instead of inline
    pub collapsed: bool,
}

/// Columns taken by the profile name
pub fn name_width(profile: &Profile) -> u16 {
    (profile.first_name.width() + 1 + profile.last_name.width()) as u16
}

fn items_width<T>(items: &[(String, Style, T)]) -> u16 {
    items.iter().map(|(text, _, _)| text.width() as u16).sum::<u16>()
        + ITEM_GAP * (items.len() as u16).saturating_sub(1)
}

/// Decide what the bar shows in `inner_width` columns
///
/// Inline section links need the whole row; when they do not fit even
/// without the name they collapse behind the Menu button. The name is
/// dropped before any item is.
pub fn plan_top_bar(name_width: u16, inner_width: u16, mode: LayoutMode, palette: &Palette) -> TopBarPlan {
    let width_for = |mode| items_width(&build_items(Section::Home, mode, ThemeMode::Dark, palette));
    let inline = mode == LayoutMode::Expanded && width_for(LayoutMode::Expanded) <= inner_width;
    let row = width_for(if inline { LayoutMode::Expanded } else { LayoutMode::Compact });
    TopBarPlan {
        show_name: name_width + ITEM_GAP + row <= inner_width,
        collapsed: !inline,
    }
}

/// Right-hand items of the bar: (text, style, click target)
fn build_items(
    current: Section,
    mode: LayoutMode,
    theme: ThemeMode,
    palette: &Palette,
) -> Vec<(String, Style, HitTarget)> {
    let mut items = Vec::new();

    if mode == LayoutMode::Expanded {
        for section in Section::ALL {
            let style = if section == current {
                palette
                    .primary_bold()
                    .add_modifier(Modifier::UNDERLINED)
            } else {
                Style::default().fg(palette.foreground)
            };
            items.push((section.label().to_string(), style, HitTarget::TopBarItem(section)));
        }
    }

    items.push((
        format!(" {} ", theme_indicator(theme)),
        Style::default().fg(palette.accent),
        HitTarget::ThemeButton,
    ));

    match mode {
        LayoutMode::Expanded => {
            items.push((" Hire Me ".to_string(), palette.button(), HitTarget::HireButton));
        }
        LayoutMode::Compact => {
            items.push(("☰ Menu".to_string(), palette.primary_bold(), HitTarget::MenuButton));
        }
    }
    items
}

/// Render the top bar and record its clickable items
pub fn render_top_bar(
    f: &mut Frame,
    area: Rect,
    profile: &Profile,
    current: Section,
    plan: TopBarPlan,
    theme: ThemeMode,
    palette: &Palette,
    hitboxes: &mut Hitboxes,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(palette.border())
        .style(palette.text());
    let inner = block.inner(area);
    f.render_widget(block, area);
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    if plan.show_name {
        let name = Line::from(vec![
            Span::styled(format!("{} ", profile.first_name), palette.primary_bold()),
            Span::styled(profile.last_name.clone(), palette.heading()),
        ]);
        f.render_widget(Paragraph::new(name), inner);
    }

    let mode = if plan.collapsed {
        LayoutMode::Compact
    } else {
        LayoutMode::Expanded
    };
    let items = build_items(current, mode, theme, palette);
    let mut x = inner.right().saturating_sub(items_width(&items)).max(inner.x);

    for (text, style, target) in items {
        let width = (text.width() as u16).min(inner.right().saturating_sub(x));
        if width == 0 {
            break;
        }
        let rect = Rect::new(x, inner.y, width, 1);
        f.render_widget(Paragraph::new(Span::styled(text, style)), rect);
        hitboxes.push(rect, target);
        x = x.saturating_add(width + ITEM_GAP);
    }
}
