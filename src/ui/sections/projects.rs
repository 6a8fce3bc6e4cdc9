use ratatui::text::{Line, Span};

use crate::content::{PortfolioContent, Project};
use crate::logic::formatting::fit_width;
use crate::logic::layout::grid_columns;
use crate::model::LayoutMode;
use crate::ui::blocks::{card, card_inner_width, chips, column_width, grid, paragraph, section_heading};
use crate::ui::theme::Palette;
use unicode_width::UnicodeWidthStr;

fn link_line(label: &str, url: &str, width: u16, palette: &Palette) -> Line<'static> {
    let prefix = format!("{}: ", label);
    let room = usize::from(width).saturating_sub(prefix.width());
    let url = if url.width() > room { fit_width(url, room) } else { url.to_string() };
    Line::from(vec![
        Span::styled(prefix, palette.secondary()),
        Span::styled(url, palette.link()),
    ])
}

fn project_card(project: &Project, width: u16, palette: &Palette) -> Vec<Line<'static>> {
    let inner = card_inner_width(width);
    let mut body = paragraph(&project.description, inner, palette.text());

    if !project.tags.is_empty() {
        body.push(Line::default());
        body.extend(chips(&project.tags, inner, palette));
    }
    if project.demo_url.is_some() || project.source_url.is_some() {
        body.push(Line::default());
    }
    if let Some(url) = &project.demo_url {
        body.push(link_line("Demo", url, inner, palette));
    }
    if let Some(url) = &project.source_url {
        body.push(link_line("Source", url, inner, palette));
    }
    card(&project.title, body, width, palette)
}

/// Projects: one card per project, two columns when expanded
pub fn lines(content: &PortfolioContent, width: u16, mode: LayoutMode, palette: &Palette) -> Vec<Line<'static>> {
    let mut lines = section_heading("My", "Projects", "Things I have designed and shipped", width, palette);

    if content.projects.is_empty() {
        lines.push(Line::from(Span::styled("Nothing to show yet.", palette.secondary())));
        return lines;
    }

    let columns = grid_columns(mode, 2, content.projects.len());
    let col = column_width(width, columns);
    let cards = content
        .projects
        .iter()
        .map(|project| project_card(project, col, palette))
        .collect();
    lines.extend(grid(cards, columns, col));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ThemeMode;
    use crate::ui::blocks::line_width;
    use crate::ui::theme::palette;

    #[test]
    fn test_project_links_are_listed() {
        let content = PortfolioContent::bundled().unwrap();
        let out: String = lines(&content, 120, LayoutMode::Expanded, &palette(ThemeMode::Dark))
            .iter()
            .flat_map(|l| l.spans.iter().map(|s| s.content.to_string()))
            .collect();
        assert!(out.contains("ReWatch"));
        assert!(out.contains("Source: https://github.com/example/rewatch"));
        assert!(out.contains("Demo: https://example.com/trailhead"));
    }

    #[test]
    fn test_long_urls_are_truncated() {
        let project = Project {
            title: "Long".to_string(),
            description: "x".to_string(),
            tags: vec![],
            demo_url: Some(format!("https://example.com/{}", "a".repeat(80))),
            source_url: None,
        };
        let card = project_card(&project, 30, &palette(ThemeMode::Dark));
        for line in &card {
            assert_eq!(line_width(line), 30);
        }
    }
}
