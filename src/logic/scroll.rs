//! Scroll geometry and animation curves
//!
//! Pure helpers behind the viewport: where each section starts, which
//! section owns a row, how far the viewport may scroll, and the easing
//! used for animated scroll-to-section.

/// Blank rows between consecutive sections
pub const SECTION_SPACING: u16 = 2;

/// Starting row of each section given its rendered height
///
/// The spacer after a section belongs to that section, so the ranges tile
/// the document without gaps.
///
/// # Examples
/// ```
/// use foliotui::logic::scroll::section_starts;
///
/// assert_eq!(section_starts(&[10, 5, 8], 2), vec![0, 12, 19]);
/// assert!(section_starts(&[], 2).is_empty());
/// ```
pub fn section_starts(heights: &[u16], spacing: u16) -> Vec<u32> {
    let mut starts = Vec::with_capacity(heights.len());
    let mut row = 0u32;
    for height in heights {
        starts.push(row);
        row += u32::from(*height) + u32::from(spacing);
    }
    starts
}

/// Index of the section whose row range contains `offset`
///
/// `starts` must be ascending. Offsets before the first start resolve to 0.
///
/// # Examples
/// ```
/// use foliotui::logic::scroll::index_at_offset;
///
/// let starts = [0, 12, 19];
/// assert_eq!(index_at_offset(&starts, 0), 0);
/// assert_eq!(index_at_offset(&starts, 11), 0);
/// assert_eq!(index_at_offset(&starts, 12), 1);
/// assert_eq!(index_at_offset(&starts, 500), 2);
/// ```
pub fn index_at_offset(starts: &[u32], offset: u32) -> usize {
    starts.partition_point(|start| *start <= offset).saturating_sub(1)
}

/// Largest allowed scroll offset
///
/// Normally the document bottom aligns with the viewport bottom, but the
/// last section's first row may always reach the top so every section can
/// become the first visible one.
///
/// # Examples
/// ```
/// use foliotui::logic::scroll::max_offset;
///
/// // Long document: bottom-aligned limit wins
/// assert_eq!(max_offset(100, 20, 70), 80);
/// // Short last section: it may still scroll to the top
/// assert_eq!(max_offset(100, 20, 95), 95);
/// ```
pub fn max_offset(total_rows: u32, viewport_height: u16, last_start: u32) -> u32 {
    total_rows
        .saturating_sub(u32::from(viewport_height))
        .max(last_start)
}

/// Ease-out cubic: fast start, gentle landing
///
/// `t` is clamped into `[0, 1]`.
pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Row reached after `progress` of an animation from `from` to `to`
///
/// # Examples
/// ```
/// use foliotui::logic::scroll::interpolate_offset;
///
/// assert_eq!(interpolate_offset(0, 100, 0.0), 0);
/// assert_eq!(interpolate_offset(0, 100, 1.0), 100);
/// assert_eq!(interpolate_offset(100, 0, 1.0), 0);
/// ```
pub fn interpolate_offset(from: u32, to: u32, progress: f64) -> u32 {
    let eased = ease_out_cubic(progress);
    let from_f = f64::from(from);
    let delta = f64::from(to) - from_f;
    (from_f + delta * eased).round().max(0.0) as u32
}
