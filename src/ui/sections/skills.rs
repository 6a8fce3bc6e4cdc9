use ratatui::text::{Line, Span};

use crate::content::PortfolioContent;
use crate::logic::layout::grid_columns;
use crate::model::LayoutMode;
use crate::ui::blocks::{card, card_inner_width, chips, column_width, grid, section_heading};
use crate::ui::theme::Palette;

/// Skills: one card of chips per group, then the highlight strip
pub fn lines(content: &PortfolioContent, width: u16, mode: LayoutMode, palette: &Palette) -> Vec<Line<'static>> {
    let skills = &content.skills;
    let mut lines = section_heading("My", "Skills", &skills.intro, width, palette);

    let columns = grid_columns(mode, 3, skills.groups.len());
    let col = column_width(width, columns);
    let cards = skills
        .groups
        .iter()
        .map(|group| {
            card(
                &group.title,
                chips(&group.skills, card_inner_width(col), palette),
                col,
                palette,
            )
        })
        .collect();
    lines.extend(grid(cards, columns, col));

    if !skills.highlights.is_empty() {
        lines.push(Line::default());
        let columns = grid_columns(mode, 4, skills.highlights.len());
        let col = column_width(width, columns);
        let tiles = skills
            .highlights
            .iter()
            .map(|highlight| {
                vec![
                    Line::from(Span::styled(format!("◆ {}", highlight.title), palette.primary_bold())),
                    Line::from(Span::styled(format!("  {}", highlight.subtitle), palette.secondary())),
                ]
            })
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

    #[test]
    fn test_expanded_uses_three_columns() {
        let content = PortfolioContent::bundled().unwrap();
        let p = palette(ThemeMode::Dark);
        let expanded = lines(&content, 150, LayoutMode::Expanded, &p);
        let compact = lines(&content, 150, LayoutMode::Compact, &p);

        let has_three_cards = expanded.iter().any(|line| {
            let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
            text.matches('╭').count() == 3
        });
        assert!(has_three_cards);
        assert!(expanded.len() < compact.len());
    }

    #[test]
    fn test_skill_rows_fit_width() {
        let content = PortfolioContent::bundled().unwrap();
        let p = palette(ThemeMode::Light);
        for line in lines(&content, 60, LayoutMode::Compact, &p) {
            assert!(line_width(&line) <= 60);
        }
    }
}
