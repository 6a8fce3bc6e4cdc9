//! Section navigation logic
//!
//! Pure functions mapping sections to document positions, plus the
//! wrapping next/previous selection used by Tab and the drawer cursor.

use crate::error::SectionMapError;
use crate::model::Section;

/// Number of sections in the document
pub const SECTION_COUNT: usize = Section::ALL.len();

/// Resolve a scroll position to the section occupying it
///
/// Out-of-range indices fall back to the first section rather than failing:
/// a stale highlight is cosmetic and corrects itself on the next event.
///
/// # Examples
/// ```
/// use foliotui::logic::navigation::section_for_index;
/// use foliotui::model::Section;
///
/// assert_eq!(section_for_index(0), Section::Home);
/// assert_eq!(section_for_index(6), Section::Contact);
/// assert_eq!(section_for_index(42), Section::Home);
/// ```
pub fn section_for_index(index: usize) -> Section {
    Section::ALL.get(index).copied().unwrap_or(Section::Home)
}

/// Document position of a section
///
/// Every declared section has a position. A missing one means the section
/// list and the enum diverged, which trips a debug assertion; release
/// builds fall back to the top of the document.
///
/// # Examples
/// ```
/// use foliotui::logic::navigation::index_for_section;
/// use foliotui::model::Section;
///
/// assert_eq!(index_for_section(Section::Home), 0);
/// assert_eq!(index_for_section(Section::Contact), 6);
/// ```
pub fn index_for_section(section: Section) -> usize {
    let position = Section::ALL.iter().position(|s| *s == section);
    debug_assert!(position.is_some(), "section {:?} missing from Section::ALL", section);
    position.unwrap_or(0)
}

/// Verify the section list is a bijection over its positions
///
/// Run once at startup; a failure aborts before the terminal is touched.
pub fn check_section_map() -> Result<(), SectionMapError> {
    check_mapping(&Section::ALL, index_for_section)
}

fn check_mapping(
    sections: &[Section],
    index_of: impl Fn(Section) -> usize,
) -> Result<(), SectionMapError> {
    for (position, section) in sections.iter().enumerate() {
        let mapped = index_of(*section);
        if mapped != position || section_for_index(mapped) != *section {
            return Err(SectionMapError {
                section: section.label(),
                mapped,
                position,
            });
        }
    }
    Ok(())
}

/// Section after `current`, wrapping from the last back to the first
///
/// # Examples
/// ```
/// use foliotui::logic::navigation::next_section;
/// use foliotui::model::Section;
///
/// assert_eq!(next_section(Section::Home), Section::About);
/// assert_eq!(next_section(Section::Contact), Section::Home);
/// ```
pub fn next_section(current: Section) -> Section {
    let idx = index_for_section(current);
    section_for_index(if idx + 1 >= SECTION_COUNT { 0 } else { idx + 1 })
}

/// Section before `current`, wrapping from the first to the last
///
/// # Examples
/// ```
/// use foliotui::logic::navigation::prev_section;
/// use foliotui::model::Section;
///
/// assert_eq!(prev_section(Section::About), Section::Home);
/// assert_eq!(prev_section(Section::Home), Section::Contact);
/// ```
pub fn prev_section(current: Section) -> Section {
    match index_for_section(current) {
        0 => section_for_index(SECTION_COUNT - 1),
        i => section_for_index(i - 1),
    }
}

/// Section bound to a digit shortcut, if any
pub fn section_for_shortcut(c: char) -> Option<Section> {
    Section::ALL.iter().copied().find(|s| s.shortcut() == c)
}
