use chrono::Datelike;
use ratatui::text::{Line, Span};

use crate::content::{ContactMethod, PortfolioContent};
use crate::logic::formatting::wrap_text;
use crate::logic::layout::grid_columns;
use crate::model::LayoutMode;
use crate::ui::blocks::{
    card, card_inner_width, center_line, centered_paragraph, column_width, grid, paragraph,
    section_heading,
};
use crate::ui::theme::Palette;

fn method_card(method: &ContactMethod, width: u16, palette: &Palette) -> Vec<Line<'static>> {
    let inner = card_inner_width(width);
    let mut body: Vec<Line<'static>> = wrap_text(&method.value, usize::from(inner))
        .into_iter()
        .map(|row| Line::from(Span::styled(row, palette.heading())))
        .collect();
    body.push(Line::from(Span::styled(format!("→ {}", method.action_label), palette.link())));
    card(&method.title, body, width, palette)
}

/// Page footer: name, tagline and copyright line
fn footer(content: &PortfolioContent, year: i32, width: u16, palette: &Palette) -> Vec<Line<'static>> {
    let w = usize::from(width);
    let mut lines = vec![
        Line::from(Span::styled("─".repeat(w), palette.border())),
        center_line(
            Line::from(vec![
                Span::styled(format!("{} ", content.profile.first_name), palette.heading()),
                Span::styled(content.profile.last_name.clone(), palette.primary_bold()),
            ]),
            w,
        ),
    ];
    if !content.contact.footer_tagline.is_empty() {
        lines.extend(centered_paragraph(&content.contact.footer_tagline, width, palette.secondary()));
    }
    lines.push(center_line(
        Line::from(vec![
            Span::styled(
                format!("© {} {}. Made with ", year, content.profile.full_name()),
                palette.secondary(),
            ),
            Span::styled("♥", palette.primary_bold()),
        ]),
        w,
    ));
    lines
}

/// Contact: methods, socials, call to action and the footer
pub fn lines(content: &PortfolioContent, width: u16, mode: LayoutMode, palette: &Palette) -> Vec<Line<'static>> {
    lines_for_year(content, width, mode, palette, chrono::Local::now().year())
}

pub(crate) fn lines_for_year(
    content: &PortfolioContent,
    width: u16,
    mode: LayoutMode,
    palette: &Palette,
    year: i32,
) -> Vec<Line<'static>> {
    let contact = &content.contact;
    let mut lines = section_heading("Get In", "Touch", &contact.intro, width, palette);

    let columns = grid_columns(mode, 2, contact.methods.len());
    let col = column_width(width, columns);
    let cards = contact
        .methods
        .iter()
        .map(|method| method_card(method, col, palette))
        .collect();
    lines.extend(grid(cards, columns, col));

    if !contact.socials.is_empty() {
        lines.push(Line::default());
        let mut spans = vec![Span::styled("Find me on ", palette.secondary())];
        for (i, social) in contact.socials.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" · ", palette.secondary()));
            }
            spans.push(Span::styled(social.label.clone(), palette.link()));
        }
        spans.push(Span::styled("  (l)", palette.secondary()));
        lines.push(center_line(Line::from(spans), usize::from(width)));
    }

    if let Some(cta) = &contact.call_to_action {
        lines.push(Line::default());
        let inner = card_inner_width(width);
        let mut body = paragraph(&cta.body, inner, palette.text());
        body.push(Line::default());
        body.push(Line::from(vec![
            Span::styled(" Send Email (e) ", palette.button()),
            Span::raw("  "),
            Span::styled(" Hire Me (h) ", palette.link()),
        ]));
        lines.extend(card(&cta.title, body, width, palette));
    }

    lines.push(Line::default());
    lines.extend(footer(content, year, width, palette));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ThemeMode;
    use crate::ui::theme::palette;

    fn text(lines: &[Line]) -> String {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_contact_ends_with_footer() {
        let content = PortfolioContent::bundled().unwrap();
        let out = lines_for_year(&content, 100, LayoutMode::Expanded, &palette(ThemeMode::Dark), 2026);
        let last = text(&out[out.len() - 1..]);
        assert!(last.contains("© 2026 Alex Rivera. Made with ♥"));
        assert!(text(&out).contains("Send Email"));
        assert!(text(&out).contains("Ready to bring your app idea to life?"));
    }

    #[test]
    fn test_methods_side_by_side_when_expanded() {
        let content = PortfolioContent::bundled().unwrap();
        let p = palette(ThemeMode::Dark);
        let expanded = lines_for_year(&content, 120, LayoutMode::Expanded, &p, 2026);
        let compact = lines_for_year(&content, 120, LayoutMode::Compact, &p, 2026);
        assert!(expanded.len() < compact.len());
    }
}
