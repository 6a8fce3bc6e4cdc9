//! Text formatting helpers
//!
//! Width-aware wrapping and padding for section content. All widths are
//! display columns (via `unicode-width`), not bytes.

use unicode_width::UnicodeWidthStr;

/// Word-wrap `text` so no line exceeds `width` display columns
///
/// Words longer than `width` are split hard. Empty input yields no lines.
///
/// # Examples
/// ```
/// use foliotui::logic::formatting::wrap_text;
///
/// assert_eq!(wrap_text("one two three", 7), vec!["one two", "three"]);
/// assert_eq!(wrap_text("abcdefgh", 3), vec!["abc", "def", "gh"]);
/// assert!(wrap_text("", 10).is_empty());
/// ```
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let word_width = word.width();

        if word_width > width {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }
            let mut chunk = String::new();
            let mut chunk_width = 0;
            for ch in word.chars() {
                let ch_width = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
                if chunk_width + ch_width > width && !chunk.is_empty() {
                    lines.push(std::mem::take(&mut chunk));
                    chunk_width = 0;
                }
                chunk.push(ch);
                chunk_width += ch_width;
            }
            current = chunk;
            current_width = chunk_width;
            continue;
        }

        let needed = if current.is_empty() { word_width } else { current_width + 1 + word_width };
        if needed > width {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_width = word_width;
        } else {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
            current_width = needed;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Pad or truncate `text` to exactly `width` display columns
///
/// # Examples
/// ```
/// use foliotui::logic::formatting::fit_width;
///
/// assert_eq!(fit_width("abc", 5), "abc  ");
/// assert_eq!(fit_width("abcdef", 4), "abc…");
/// ```
pub fn fit_width(text: &str, width: usize) -> String {
    let text_width = text.width();
    if text_width <= width {
        let mut out = text.to_string();
        out.push_str(&" ".repeat(width - text_width));
        return out;
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let ch_width = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + ch_width > width - 1 {
            break;
        }
        out.push(ch);
        used += ch_width;
    }
    out.push('…');
    used += 1;
    out.push_str(&" ".repeat(width.saturating_sub(used)));
    out
}

/// Left padding that centers `text_width` inside `width`
pub fn center_padding(text_width: usize, width: usize) -> usize {
    width.saturating_sub(text_width) / 2
}

/// Pack chips ("[Kotlin]") into rows no wider than `width`
///
/// # Examples
/// ```
/// use foliotui::logic::formatting::chip_rows;
///
/// let rows = chip_rows(&["Rust", "Go", "Kotlin"], 14);
/// assert_eq!(rows, vec![vec!["Rust", "Go"], vec!["Kotlin"]]);
/// ```
pub fn chip_rows<'a, S: AsRef<str>>(chips: &'a [S], width: usize) -> Vec<Vec<&'a str>> {
    let mut rows: Vec<Vec<&str>> = Vec::new();
    let mut row: Vec<&str> = Vec::new();
    let mut row_width = 0;

    for chip in chips {
        let chip = chip.as_ref();
        // " chip " plus one separating space
        let chip_width = chip.width() + 2;
        let needed = if row.is_empty() { chip_width } else { row_width + 1 + chip_width };
        if needed > width && !row.is_empty() {
            rows.push(std::mem::take(&mut row));
            row_width = chip_width;
        } else {
            row_width = needed;
        }
        row.push(chip);
    }

    if !row.is_empty() {
        rows.push(row);
    }
    rows
}
