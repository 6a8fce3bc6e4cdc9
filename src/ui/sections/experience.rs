use ratatui::text::{Line, Span};

use crate::content::{Milestone, PortfolioContent, Role};
use crate::logic::formatting::wrap_text;
use crate::logic::layout::grid_columns;
use crate::model::LayoutMode;
use crate::ui::blocks::{bullets, card, card_inner_width, chips, column_width, grid, section_heading};
use crate::ui::theme::Palette;

fn role_card(role: &Role, width: u16, palette: &Palette) -> Vec<Line<'static>> {
    let inner = card_inner_width(width);
    let mut body = Vec::new();

    for row in wrap_text(&role.company, usize::from(inner)) {
        body.push(Line::from(Span::styled(row, palette.heading())));
    }
    let when = if role.duration.is_empty() {
        role.period.clone()
    } else {
        format!("{} · {}", role.period, role.duration)
    };
    for row in wrap_text(&when, usize::from(inner)) {
        body.push(Line::from(Span::styled(row, palette.secondary())));
    }

    if !role.achievements.is_empty() {
        body.push(Line::default());
        body.extend(bullets(&role.achievements, inner, "▸", palette));
    }
    if !role.metrics.is_empty() {
        body.push(Line::default());
        let mut spans = Vec::new();
        for (i, metric) in role.metrics.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("   "));
            }
            spans.push(Span::styled(format!("{}: ", metric.label), palette.secondary()));
            spans.push(Span::styled(metric.value.clone(), palette.primary_bold()));
        }
        let metrics = Line::from(spans);
        if crate::ui::blocks::line_width(&metrics) <= usize::from(inner) {
            body.push(metrics);
        } else {
            for metric in &role.metrics {
                let text = format!("{}: {}", metric.label, metric.value);
                for row in wrap_text(&text, usize::from(inner)) {
                    body.push(Line::from(Span::styled(row, palette.secondary())));
                }
            }
        }
    }
    if !role.technologies.is_empty() {
        body.push(Line::default());
        body.extend(chips(&role.technologies, inner, palette));
    }

    card(&role.title, body, width, palette)
}

/// Timeline rail on the left of each role card
fn with_rail(card: Vec<Line<'static>>, palette: &Palette) -> Vec<Line<'static>> {
    card.into_iter()
        .enumerate()
        .map(|(i, line)| {
            let marker = if i == 0 { "● " } else { "│ " };
            let mut spans = vec![Span::styled(marker, palette.primary_bold())];
            spans.extend(line.spans);
            Line::from(spans)
        })
        .collect()
}

fn milestone_tile(milestone: &Milestone, width: u16, palette: &Palette) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(Span::styled(milestone.date.clone(), palette.primary_bold()))];
    for row in wrap_text(&milestone.title, usize::from(width)) {
        lines.push(Line::from(Span::styled(row, palette.heading())));
    }
    for row in wrap_text(&milestone.track, usize::from(width)) {
        lines.push(Line::from(Span::styled(row, palette.secondary())));
    }
    lines
}

/// Experience: role timeline followed by career milestones
pub fn lines(content: &PortfolioContent, width: u16, mode: LayoutMode, palette: &Palette) -> Vec<Line<'static>> {
    let experience = &content.experience;
    let mut lines = section_heading("Work", "Experience", &experience.intro, width, palette);

    let card_width = width.saturating_sub(2).max(4);
    for (i, role) in experience.roles.iter().enumerate() {
        if i > 0 {
            lines.push(Line::from(Span::styled("│", palette.primary_bold())));
        }
        lines.extend(with_rail(role_card(role, card_width, palette), palette));
    }

    if !experience.milestones.is_empty() {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled("Milestones", palette.heading())));
        let columns = grid_columns(mode, 4, experience.milestones.len());
        let col = column_width(width, columns);
        let tiles = experience
            .milestones
            .iter()
            .map(|m| milestone_tile(m, col, palette))
            .collect();
        lines.extend(grid(tiles, columns, col));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ThemeMode;
    use crate::ui::blocks::line_width;
    use crate::ui::theme::palette;

    fn text(lines: &[Line]) -> String {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_roles_show_period_and_metrics() {
        let content = PortfolioContent::bundled().unwrap();
        let out = text(&lines(&content, 100, LayoutMode::Expanded, &palette(ThemeMode::Dark)));
        assert!(out.contains("Senior Mobile App Developer"));
        assert!(out.contains("Feb 2025 - Aug 2025 · 7 months"));
        assert!(out.contains("Clients: 3+ International"));
        assert!(out.contains("Started Journey"));
    }

    #[test]
    fn test_narrow_width_stays_in_bounds() {
        let content = PortfolioContent::bundled().unwrap();
        for line in lines(&content, 40, LayoutMode::Compact, &palette(ThemeMode::Dark)) {
            assert!(line_width(&line) <= 40, "{:?}", line);
        }
    }
}
