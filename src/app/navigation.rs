//! Navigation orchestration methods
//!
//! Methods that move through the document:
//! - Jumping to a section (top bar, drawer, shortcuts, hero buttons)
//! - Cycling sections with Tab / Shift-Tab
//! - Row, half-page and edge scrolling
//! - Drawer open / close / select

use std::time::Instant;
use tracing::debug;

use crate::App;
use foliotui::logic::navigation::{next_section, prev_section, section_for_index};
use foliotui::model::{NavOrigin, Section};

impl App {
    pub(crate) fn navigate_to(&mut self, section: Section, origin: NavOrigin) {
        debug!(?section, ?origin, "navigate");
        self.model.navigate(section, origin, Instant::now());
    }

    pub(crate) fn next_section(&mut self) {
        let target = next_section(self.model.current_section());
        self.navigate_to(target, NavOrigin::Keyboard);
    }

    pub(crate) fn previous_section(&mut self) {
        let target = prev_section(self.model.current_section());
        self.navigate_to(target, NavOrigin::Keyboard);
    }

    /// Scroll by `delta` rows as a user gesture
    pub(crate) fn scroll_rows(&mut self, delta: i32) {
        self.model.scroll_by(delta);
    }

    pub(crate) fn half_page(&mut self, down: bool) {
        let rows = self.model.viewport.half_page();
        self.scroll_rows(if down { rows } else { -rows });
    }

    pub(crate) fn jump_to_edge(&mut self, bottom: bool) {
        self.model.scroll_to_edge(bottom);
    }

    /// Open the drawer, or close it if open
    ///
    /// The drawer only opens while the top bar shows the Menu button;
    /// otherwise the section links are inline already.
    pub(crate) fn toggle_drawer(&mut self) {
        if self.model.ui.drawer.is_some() {
            self.model.ui.close_drawer();
        } else if self.model.ui.menu_collapsed {
            self.model.ui.open_drawer(self.model.current_section());
        }
    }

    /// Navigate to the section under the drawer cursor
    pub(crate) fn select_drawer_item(&mut self) {
        if let Some(drawer) = &self.model.ui.drawer {
            let section = section_for_index(drawer.cursor);
            self.navigate_to(section, NavOrigin::Drawer);
        }
    }

    pub(crate) fn toggle_theme(&mut self) {
        self.model.ui.toggle_theme();
        debug!(theme = self.model.ui.theme.as_str(), "theme toggled");
    }
}
