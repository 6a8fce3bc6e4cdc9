//! Navigation Model
//!
//! Keeps the highlighted section in the navigation UI consistent with the
//! section the user is looking at, and turns navigation clicks into
//! scroll commands for the viewport.
//!
//! Two phases: `Idle`, and `ProgrammaticScrolling` from a click until the
//! viewport reports the animation settled.

use tracing::debug;

use super::types::{NavCommand, NavOrigin, ScrollPhase, ScrollToIndexCommand, Section};
use crate::logic::navigation::{index_for_section, section_for_index};

/// Navigation state (active section, programmatic scroll phase)
#[derive(Clone, Debug)]
pub struct NavigationModel {
    /// Section highlighted in the top bar and drawer
    pub current: Section,

    /// Whether an animated scroll-to-section is in flight
    pub phase: ScrollPhase,

    /// Derive the highlight from intermediate positions while animating
    pub sync_during_animation: bool,
}

impl NavigationModel {
    /// Create initial navigation model, highlighting the first section
    pub fn new(sync_during_animation: bool) -> Self {
        Self {
            current: Section::Home,
            phase: ScrollPhase::Idle,
            sync_during_animation,
        }
    }

    /// Whether a programmatic scroll is in flight
    pub fn is_programmatic_scrolling(&self) -> bool {
        matches!(self.phase, ScrollPhase::ProgrammaticScrolling { .. })
    }

    /// Feed the viewport's first visible index
    ///
    /// Returns `true` when the highlight changed and the navigation UI needs
    /// to redraw. Repeated indices are no-ops, and since every call derives
    /// from the index it is given, the last event always wins.
    pub fn on_scroll_position_changed(&mut self, index: usize) -> bool {
        if self.is_programmatic_scrolling() && !self.sync_during_animation {
            return false;
        }

        let section = section_for_index(index);
        if section == self.current {
            return false;
        }

        debug!(from = ?self.current, to = ?section, index, "scroll moved highlight");
        self.current = section;
        true
    }

    /// Handle a click on a navigation entry
    ///
    /// The highlight moves immediately so the old section never flashes
    /// while the scroll animation runs. Clicks from the drawer also ask for
    /// the drawer to close.
    pub fn on_navigation_item_clicked(
        &mut self,
        section: Section,
        origin: NavOrigin,
    ) -> Vec<NavCommand> {
        debug!(?section, ?origin, "navigation clicked");
        self.current = section;
        self.phase = ScrollPhase::ProgrammaticScrolling { target: section };

        let mut commands = vec![NavCommand::ScrollToIndex(ScrollToIndexCommand {
            index: index_for_section(section),
            animated: true,
        })];
        if origin == NavOrigin::Drawer {
            commands.push(NavCommand::CloseDrawer);
        }
        commands
    }

    /// The viewport finished an animated scroll and sits at `index`
    ///
    /// Returns `true` when the settled position changed the highlight.
    pub fn on_scroll_settled(&mut self, index: usize) -> bool {
        if let ScrollPhase::ProgrammaticScrolling { target } = self.phase {
            debug!(?target, index, "programmatic scroll settled");
        }
        self.phase = ScrollPhase::Idle;
        self.on_scroll_position_changed(index)
    }

    /// A user gesture supersedes any programmatic scroll in flight
    pub fn on_user_scroll(&mut self) {
        if self.is_programmatic_scrolling() {
            debug!("user scroll interrupted programmatic scroll");
            self.phase = ScrollPhase::Idle;
        }
    }
}

impl Default for NavigationModel {
    fn default() -> Self {
        Self::new(false)
    }
}
