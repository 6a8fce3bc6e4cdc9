use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use crate::content::PortfolioContent;
use crate::logic::formatting::fit_width;
use crate::model::LayoutMode;
use crate::ui::blocks::{card, center_line, centered_paragraph, column_width, grid, paragraph};
use crate::ui::theme::Palette;

/// Initials shown in the monogram card
fn monogram(content: &PortfolioContent) -> String {
    let first = content.profile.first_name.chars().next();
    let last = content.profile.last_name.chars().next();
    first.into_iter().chain(last).flat_map(char::to_uppercase).collect()
}

fn monogram_card(content: &PortfolioContent, width: u16, palette: &Palette) -> Vec<Line<'static>> {
    let initials = monogram(content);
    let spaced: String = initials
        .chars()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    let inner = usize::from(width.saturating_sub(4));
    let role = &content.profile.role;
    let role = if role.width() > inner { fit_width(role, inner) } else { role.clone() };
    let body = vec![
        Line::default(),
        center_line(Line::from(Span::styled(spaced, palette.primary_bold())), inner),
        Line::default(),
        center_line(
            Line::from(Span::styled(role, palette.secondary())),
            inner,
        ),
    ];
    card("", body, width, palette)
}

/// Action buttons; the letters match the keyboard shortcuts
fn actions(content: &PortfolioContent, palette: &Palette) -> Line<'static> {
    let mut spans = vec![
        Span::styled(" Contact Me (c) ", palette.button()),
        Span::raw("  "),
    ];
    if content.profile.resume_url.is_some() {
        spans.push(Span::styled(" Resume (h) ", palette.link()));
    }
    Line::from(spans)
}

fn socials(content: &PortfolioContent, palette: &Palette) -> Option<Line<'static>> {
    if content.contact.socials.is_empty() {
        return None;
    }
    let mut spans = Vec::new();
    for (i, social) in content.contact.socials.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  ·  ", palette.secondary()));
        }
        spans.push(Span::styled(social.label.clone(), palette.link()));
    }
    spans.push(Span::styled("  (l)", palette.secondary()));
    Some(Line::from(spans))
}

fn intro(content: &PortfolioContent, width: u16, centered: bool, palette: &Palette) -> Vec<Line<'static>> {
    let profile = &content.profile;
    let place = |line: Line<'static>| {
        if centered {
            center_line(line, usize::from(width))
        } else {
            line
        }
    };

    let mut lines = vec![
        place(Line::from(Span::styled(profile.greeting.clone(), palette.secondary()))),
        place(Line::from(vec![
            Span::styled(format!("{} ", profile.first_name), palette.heading()),
            Span::styled(profile.last_name.clone(), palette.primary_bold()),
        ])),
        place(Line::from(Span::styled(profile.role.clone(), palette.primary_bold()))),
        Line::default(),
    ];

    if centered {
        lines.extend(centered_paragraph(&profile.tagline, width, palette.secondary()));
    } else {
        lines.extend(paragraph(&profile.tagline, width, palette.secondary()));
    }
    lines.push(Line::default());
    lines.push(place(actions(content, palette)));
    if let Some(socials) = socials(content, palette) {
        lines.push(Line::default());
        lines.push(place(socials));
    }
    lines
}

/// Home: greeting, name, role, tagline, actions
pub fn lines(content: &PortfolioContent, width: u16, mode: LayoutMode, palette: &Palette) -> Vec<Line<'static>> {
    let mut lines = vec![Line::default()];

    match mode {
        LayoutMode::Expanded => {
            let col = column_width(width, 2);
            lines.extend(grid(
                vec![
                    intro(content, col, false, palette),
                    monogram_card(content, col.min(40), palette),
                ],
                2,
                col,
            ));
        }
        LayoutMode::Compact => {
            let card_width = width.min(30);
            let offset = " ".repeat(usize::from(width.saturating_sub(card_width) / 2));
            for line in monogram_card(content, card_width, palette) {
                let mut spans = vec![Span::raw(offset.clone())];
                spans.extend(line.spans);
                lines.push(Line::from(spans));
            }
            lines.push(Line::default());
            lines.extend(intro(content, width, true, palette));
        }
    }

    lines.push(Line::default());
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ThemeMode;
    use crate::ui::blocks::line_width;
    use crate::ui::theme::palette;

    fn widest(lines: &[Line]) -> usize {
        lines.iter().map(line_width).max().unwrap_or(0)
    }

    fn text(lines: &[Line]) -> String {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_hero_shows_name_role_and_actions() {
        let content = PortfolioContent::bundled().unwrap();
        let p = palette(ThemeMode::Dark);
        for mode in [LayoutMode::Compact, LayoutMode::Expanded] {
            let out = text(&lines(&content, 120, mode, &p));
            assert!(out.contains("Alex Rivera"), "{:?}", mode);
            assert!(out.contains("Full Stack Mobile App Developer"));
            assert!(out.contains("Contact Me (c)"));
            assert!(out.contains("Resume (h)"));
            assert!(out.contains("GitHub"));
        }
    }

    #[test]
    fn test_hero_fits_width() {
        let content = PortfolioContent::bundled().unwrap();
        let p = palette(ThemeMode::Dark);
        assert!(widest(&lines(&content, 50, LayoutMode::Compact, &p)) <= 50);
        assert!(widest(&lines(&content, 140, LayoutMode::Expanded, &p)) <= 140);
    }

    #[test]
    fn test_monogram_uses_initials() {
        let content = PortfolioContent::bundled().unwrap();
        assert_eq!(monogram(&content), "AR");
    }
}
