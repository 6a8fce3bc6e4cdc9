//! Viewport Model
//!
//! The scrollable document: row offset, where each section starts, and
//! the animated scroll-to-section primitive that consumes
//! `ScrollToIndexCommand`s from the navigation model.

use std::time::{Duration, Instant};

use super::types::{ScrollEvent, ScrollToIndexCommand};
use crate::logic::scroll::{
    index_at_offset, interpolate_offset, max_offset, section_starts, SECTION_SPACING,
};

/// An in-flight animated scroll
#[derive(Clone, Debug, PartialEq)]
pub struct ScrollAnimation {
    pub from: u32,
    pub to: u32,
    pub target_index: usize,
    pub started: Instant,
}

/// Scroll position and document geometry
#[derive(Clone, Debug)]
pub struct ViewportModel {
    /// First document row shown at the top of the viewport
    pub offset: u32,

    /// Rows available for content
    pub viewport_height: u16,

    /// Rendered height of each section, in document order
    pub heights: Vec<u16>,

    /// First row of each section
    pub starts: Vec<u32>,

    /// Document height including spacers
    pub total_rows: u32,

    pub animation: Option<ScrollAnimation>,

    pub animation_duration: Duration,
}

impl ViewportModel {
    pub fn new(animation_duration: Duration) -> Self {
        Self {
            offset: 0,
            viewport_height: 0,
            heights: Vec::new(),
            starts: Vec::new(),
            total_rows: 0,
            animation: None,
            animation_duration,
        }
    }

    /// Recompute section ranges after a resize or content change
    ///
    /// The first visible section stays anchored at the same relative row,
    /// and an in-flight animation is retargeted to its section's new start.
    pub fn relayout(&mut self, heights: Vec<u16>, viewport_height: u16) {
        if heights == self.heights && viewport_height == self.viewport_height {
            return;
        }

        let anchor_index = self.first_visible_index();
        let anchor_delta = self
            .starts
            .get(anchor_index)
            .map(|start| self.offset.saturating_sub(*start))
            .unwrap_or(0);

        self.starts = section_starts(&heights, SECTION_SPACING);
        self.total_rows = heights
            .iter()
            .map(|h| u32::from(*h) + u32::from(SECTION_SPACING))
            .sum::<u32>()
            .saturating_sub(u32::from(SECTION_SPACING));
        self.heights = heights;
        self.viewport_height = viewport_height;

        let anchor_height = self.heights.get(anchor_index).copied().unwrap_or(0);
        let anchored = self.section_start(anchor_index) + anchor_delta.min(u32::from(anchor_height));
        self.offset = anchored.min(self.max_offset());

        if let Some(mut animation) = self.animation.take() {
            animation.to = self.section_start(animation.target_index).min(self.max_offset());
            animation.from = animation.from.min(self.max_offset());
            self.animation = Some(animation);
        }
    }

    /// Index of the first fully or partially visible section
    pub fn first_visible_index(&self) -> usize {
        index_at_offset(&self.starts, self.offset)
    }

    /// First row of the section at `index`, clamped to the last section
    pub fn section_start(&self, index: usize) -> u32 {
        match self.starts.get(index) {
            Some(start) => *start,
            None => self.starts.last().copied().unwrap_or(0),
        }
    }

    /// Largest offset the viewport may scroll to
    pub fn max_offset(&self) -> u32 {
        max_offset(
            self.total_rows,
            self.viewport_height,
            self.starts.last().copied().unwrap_or(0),
        )
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Move by `delta` rows in response to a user gesture
    ///
    /// Cancels any animation. Returns `true` if the offset changed.
    pub fn scroll_by(&mut self, delta: i32) -> bool {
        self.animation = None;
        let target = if delta.is_negative() {
            self.offset.saturating_sub(delta.unsigned_abs())
        } else {
            self.offset.saturating_add(delta.unsigned_abs())
        };
        self.set_offset(target)
    }

    /// Jump to `row` without animating
    pub fn set_offset(&mut self, row: u32) -> bool {
        let clamped = row.min(self.max_offset());
        let changed = clamped != self.offset;
        self.offset = clamped;
        changed
    }

    /// Rows moved by a half-page gesture
    pub fn half_page(&self) -> i32 {
        i32::from((self.viewport_height / 2).max(1))
    }

    /// Start scrolling toward the section named by `command`
    ///
    /// A command issued mid-animation retargets from the current row.
    /// Returns `Settled` right away when no animation is needed.
    pub fn apply(&mut self, command: ScrollToIndexCommand, now: Instant) -> Option<ScrollEvent> {
        let target = self.section_start(command.index).min(self.max_offset());

        if !command.animated || self.animation_duration.is_zero() || target == self.offset {
            self.animation = None;
            self.offset = target;
            return Some(ScrollEvent::Settled);
        }

        self.animation = Some(ScrollAnimation {
            from: self.offset,
            to: target,
            target_index: command.index,
            started: now,
        });
        None
    }

    /// Advance the animation to `now`
    ///
    /// Returns `Settled` exactly once, on the frame the target is reached.
    pub fn tick(&mut self, now: Instant) -> Option<ScrollEvent> {
        let animation = self.animation.as_ref()?;

        let elapsed = now.saturating_duration_since(animation.started);
        let progress = elapsed.as_secs_f64() / self.animation_duration.as_secs_f64();

        if progress >= 1.0 {
            self.offset = animation.to;
            self.animation = None;
            return Some(ScrollEvent::Settled);
        }

        self.offset = interpolate_offset(animation.from, animation.to, progress);
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> ViewportModel {
        let mut vp = ViewportModel::new(Duration::from_millis(400));
        // Seven sections of 10 rows each, 2-row spacers: starts 0,12,...,72
        vp.relayout(vec![10; 7], 20);
        vp
    }

    #[test]
    fn test_relayout_computes_geometry() {
        let vp = viewport();
        assert_eq!(vp.starts, vec![0, 12, 24, 36, 48, 60, 72]);
        assert_eq!(vp.total_rows, 82);
        // Bottom-aligned limit is 62 but the last section may reach the top
        assert_eq!(vp.max_offset(), 72);
    }

    #[test]
    fn test_first_visible_index_tracks_offset() {
        let mut vp = viewport();
        assert_eq!(vp.first_visible_index(), 0);
        vp.scroll_by(12);
        assert_eq!(vp.first_visible_index(), 1);
        vp.scroll_by(-1);
        assert_eq!(vp.first_visible_index(), 0);
    }

    #[test]
    fn test_scroll_by_clamps() {
        let mut vp = viewport();
        assert!(!vp.scroll_by(-5));
        assert_eq!(vp.offset, 0);
        vp.scroll_by(1_000);
        assert_eq!(vp.offset, 72);
        assert!(!vp.scroll_by(3));
    }

    #[test]
    fn test_apply_unanimated_jumps_and_settles() {
        let mut vp = viewport();
        let event = vp.apply(ScrollToIndexCommand { index: 3, animated: false }, Instant::now());
        assert_eq!(event, Some(ScrollEvent::Settled));
        assert_eq!(vp.offset, 36);
        assert_eq!(vp.first_visible_index(), 3);
    }

    #[test]
    fn test_animation_progresses_and_settles_once() {
        let mut vp = viewport();
        let start = Instant::now();
        assert_eq!(vp.apply(ScrollToIndexCommand { index: 6, animated: true }, start), None);
        assert!(vp.is_animating());

        assert_eq!(vp.tick(start + Duration::from_millis(200)), None);
        assert!(vp.offset > 0 && vp.offset < 72);

        assert_eq!(vp.tick(start + Duration::from_millis(400)), Some(ScrollEvent::Settled));
        assert_eq!(vp.offset, 72);
        assert_eq!(vp.first_visible_index(), 6);
        assert_eq!(vp.tick(start + Duration::from_millis(500)), None);
    }

    #[test]
    fn test_new_command_retargets_from_current_row() {
        let mut vp = viewport();
        let start = Instant::now();
        vp.apply(ScrollToIndexCommand { index: 6, animated: true }, start);
        vp.tick(start + Duration::from_millis(100));
        let midway = vp.offset;

        vp.apply(
            ScrollToIndexCommand { index: 1, animated: true },
            start + Duration::from_millis(100),
        );
        let animation = vp.animation.clone().unwrap();
        assert_eq!(animation.from, midway);
        assert_eq!(animation.to, 12);
    }

    #[test]
    fn test_user_scroll_cancels_animation() {
        let mut vp = viewport();
        vp.apply(ScrollToIndexCommand { index: 5, animated: true }, Instant::now());
        vp.scroll_by(1);
        assert!(!vp.is_animating());
    }

    #[test]
    fn test_relayout_keeps_anchor_section() {
        let mut vp = viewport();
        vp.set_offset(27); // 3 rows into Skills
        vp.relayout(vec![20; 7], 20);
        assert_eq!(vp.first_visible_index(), 2);
        assert_eq!(vp.offset, 44 + 3);
    }

    #[test]
    fn test_relayout_retargets_animation() {
        let mut vp = viewport();
        vp.apply(ScrollToIndexCommand { index: 4, animated: true }, Instant::now());
        vp.relayout(vec![5; 7], 20);
        assert_eq!(vp.animation.as_ref().map(|a| a.to), Some(28));
    }

    #[test]
    fn test_out_of_range_command_targets_last_section() {
        let mut vp = viewport();
        vp.apply(ScrollToIndexCommand { index: 40, animated: false }, Instant::now());
        assert_eq!(vp.offset, 72);
    }

    #[test]
    fn test_empty_viewport_is_safe() {
        let mut vp = ViewportModel::new(Duration::from_millis(400));
        assert_eq!(vp.first_visible_index(), 0);
        assert_eq!(vp.max_offset(), 0);
        assert_eq!(
            vp.apply(ScrollToIndexCommand { index: 3, animated: true }, Instant::now()),
            Some(ScrollEvent::Settled)
        );
    }
}
