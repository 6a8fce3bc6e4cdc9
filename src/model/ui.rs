//! UI Model
//!
//! This sub-model contains all state related to the user interface:
//! preferences, the navigation drawer, toasts, and visual state.

use std::time::Instant;

use super::types::{
    DrawerState, LayoutMode, LinksPanelState, Overlay, Section, ThemeMode, VimCommandState,
};
use crate::logic::navigation::{index_for_section, SECTION_COUNT};

/// UI preferences and overlays
#[derive(Clone, Debug)]
pub struct UiModel {
    // ============================================
    // PREFERENCES
    // ============================================
    /// Active color scheme
    pub theme: ThemeMode,

    /// Whether vim keybindings are enabled
    pub vim_mode: bool,

    /// Vim command state (for 'gg' double-key)
    pub vim_command_state: VimCommandState,

    // ============================================
    // OVERLAYS
    // ============================================
    /// Navigation drawer (compact layouts)
    pub drawer: Option<DrawerState>,

    /// Links panel listing every external link
    pub links_panel: Option<LinksPanelState>,

    /// Toast message (text, timestamp)
    pub toast_message: Option<(String, Instant)>,

    // ============================================
    // VISUAL STATE
    // ============================================
    /// Layout mode used for the last frame
    pub layout_mode: LayoutMode,

    /// Section links sit behind the Menu button instead of the top bar
    pub menu_collapsed: bool,

    /// Whether app should quit
    pub should_quit: bool,
}

impl UiModel {
    /// Create initial UI model with default preferences
    pub fn new(vim_mode: bool, theme: ThemeMode) -> Self {
        Self {
            theme,
            vim_mode,
            vim_command_state: VimCommandState::None,
            drawer: None,
            links_panel: None,
            toast_message: None,
            layout_mode: LayoutMode::Compact,
            menu_collapsed: true,
            should_quit: false,
        }
    }

    /// Check if an overlay is capturing input
    pub fn has_modal(&self) -> bool {
        self.overlay() != Overlay::None
    }

    pub fn overlay(&self) -> Overlay {
        if self.drawer.is_some() {
            Overlay::Drawer
        } else if self.links_panel.is_some() {
            Overlay::Links
        } else {
            Overlay::None
        }
    }

    /// Open the drawer with the cursor on the highlighted section
    pub fn open_drawer(&mut self, current: Section) {
        self.links_panel = None;
        self.drawer = Some(DrawerState {
            cursor: index_for_section(current),
        });
    }

    /// Open the links panel over `count` links; nothing happens without links
    pub fn open_links_panel(&mut self, count: usize) {
        if count == 0 {
            return;
        }
        self.drawer = None;
        self.links_panel = Some(LinksPanelState { cursor: 0, count });
    }

    pub fn close_links_panel(&mut self) {
        self.links_panel = None;
    }

    /// Move the links cursor, wrapping at both ends
    pub fn move_links_cursor(&mut self, down: bool) {
        if let Some(panel) = self.links_panel.as_mut() {
            let count = panel.count.max(1);
            panel.cursor = if down {
                (panel.cursor + 1) % count
            } else {
                (panel.cursor + count - 1) % count
            };
        }
    }

    /// Close whichever overlay is open
    pub fn close_overlays(&mut self) {
        self.drawer = None;
        self.links_panel = None;
    }

    pub fn close_drawer(&mut self) {
        self.drawer = None;
    }

    /// Move the drawer cursor, wrapping at both ends
    pub fn move_drawer_cursor(&mut self, down: bool) {
        if let Some(drawer) = self.drawer.as_mut() {
            drawer.cursor = if down {
                (drawer.cursor + 1) % SECTION_COUNT
            } else {
                (drawer.cursor + SECTION_COUNT - 1) % SECTION_COUNT
            };
        }
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }

    /// Show toast message
    pub fn show_toast(&mut self, message: String) {
        self.toast_message = Some((message, Instant::now()));
    }

    /// Check if toast should be dismissed
    pub fn should_dismiss_toast(&self) -> bool {
        self.toast_message
            .as_ref()
            .map(|(_, shown)| crate::logic::ui::should_dismiss_toast(shown.elapsed().as_millis()))
            .unwrap_or(false)
    }

    /// Dismiss toast message
    pub fn dismiss_toast(&mut self) {
        self.toast_message = None;
    }
}
