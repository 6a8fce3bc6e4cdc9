//! Pure Application Model - Elm Architecture
//!
//! This module defines the pure, cloneable state for the application.
//! The Model is organized into focused sub-models:
//!
//! - **NavigationModel**: Highlighted section, programmatic scroll phase
//! - **ViewportModel**: Scroll offset, section geometry, scroll animation
//! - **UiModel**: Theme, drawer, toasts
//!
//! Key principles:
//! - Clone + Debug: Can snapshot state in tests
//! - No services: Process spawning lives in `services`
//! - One instance per session: nothing global, so tests never interfere

pub mod navigation;
pub mod types;
pub mod ui;
pub mod viewport;

pub use navigation::NavigationModel;
pub use types::*;
pub use ui::UiModel;
pub use viewport::ViewportModel;

use std::time::{Duration, Instant};

/// Root application model composed of focused sub-models
#[derive(Clone, Debug)]
pub struct Model {
    /// Highlighted section and scroll phase
    pub navigation: NavigationModel,

    /// Scroll position and geometry
    pub viewport: ViewportModel,

    /// UI preferences and overlays
    pub ui: UiModel,
}

impl Model {
    /// Create initial model
    pub fn new(
        vim_mode: bool,
        theme: ThemeMode,
        animation: Duration,
        sync_during_animation: bool,
    ) -> Self {
        Self {
            navigation: NavigationModel::new(sync_during_animation),
            viewport: ViewportModel::new(animation),
            ui: UiModel::new(vim_mode, theme),
        }
    }

    /// Currently highlighted section
    pub fn current_section(&self) -> Section {
        self.navigation.current
    }

    /// Navigate to `section` and carry out the resulting commands
    ///
    /// Returns `true` if the highlight changed as a result of the commands
    /// (only possible when the scroll settles immediately short of the
    /// target).
    pub fn navigate(&mut self, section: Section, origin: NavOrigin, now: Instant) -> bool {
        let commands = self.navigation.on_navigation_item_clicked(section, origin);
        let mut changed = false;
        for command in commands {
            match command {
                NavCommand::ScrollToIndex(scroll) => {
                    if let Some(ScrollEvent::Settled) = self.viewport.apply(scroll, now) {
                        changed |= self
                            .navigation
                            .on_scroll_settled(self.viewport.first_visible_index());
                    }
                }
                NavCommand::CloseDrawer => self.ui.close_drawer(),
            }
        }
        changed
    }

    /// User scroll gesture of `delta` rows
    ///
    /// Returns `true` if the highlight changed.
    pub fn scroll_by(&mut self, delta: i32) -> bool {
        self.navigation.on_user_scroll();
        self.viewport.scroll_by(delta);
        self.navigation
            .on_scroll_position_changed(self.viewport.first_visible_index())
    }

    /// Jump to the top or bottom of the document
    pub fn scroll_to_edge(&mut self, bottom: bool) -> bool {
        self.navigation.on_user_scroll();
        self.viewport.animation = None;
        let row = if bottom { self.viewport.max_offset() } else { 0 };
        self.viewport.set_offset(row);
        self.navigation
            .on_scroll_position_changed(self.viewport.first_visible_index())
    }

    /// Advance animations by one frame and re-derive the highlight
    ///
    /// Returns `true` if the highlight changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.viewport.tick(now) {
            Some(ScrollEvent::Settled) => self
                .navigation
                .on_scroll_settled(self.viewport.first_visible_index()),
            None => self
                .navigation
                .on_scroll_position_changed(self.viewport.first_visible_index()),
        }
    }

    /// Check if the drawer is showing
    pub fn has_modal(&self) -> bool {
        self.ui.has_modal()
    }

    /// Show toast message
    pub fn show_toast(&mut self, message: String) {
        self.ui.show_toast(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> Model {
        let mut model = Model::new(false, ThemeMode::Dark, Duration::from_millis(300), false);
        model.viewport.relayout(vec![10; 7], 20);
        model
    }

    #[test]
    fn test_model_creation() {
        let model = Model::new(false, ThemeMode::Dark, Duration::from_millis(300), false);
        assert_eq!(model.current_section(), Section::Home);
        assert!(!model.has_modal());
        assert!(!model.ui.vim_mode);
    }

    #[test]
    fn test_model_is_cloneable() {
        let model = model();
        let _cloned = model.clone();
    }

    #[test]
    fn test_navigate_then_settle() {
        let mut model = model();
        let start = Instant::now();
        model.navigate(Section::Experience, NavOrigin::TopBar, start);
        assert_eq!(model.current_section(), Section::Experience);
        assert!(model.viewport.is_animating());

        // Mid-flight frames pass over About and Skills without moving the highlight
        model.tick(start + Duration::from_millis(50));
        assert_eq!(model.current_section(), Section::Experience);

        model.tick(start + Duration::from_millis(300));
        assert!(!model.viewport.is_animating());
        assert!(!model.navigation.is_programmatic_scrolling());
        assert_eq!(model.viewport.first_visible_index(), 3);
    }

    #[test]
    fn test_drawer_navigation_closes_drawer() {
        let mut model = model();
        model.ui.open_drawer(Section::Home);
        model.navigate(Section::Skills, NavOrigin::Drawer, Instant::now());
        assert!(!model.has_modal());
        assert_eq!(model.current_section(), Section::Skills);
    }

    #[test]
    fn test_scroll_by_updates_highlight() {
        let mut model = model();
        assert!(model.scroll_by(24));
        assert_eq!(model.current_section(), Section::Skills);
        assert!(!model.scroll_by(1));
    }

    #[test]
    fn test_scroll_to_edges() {
        let mut model = model();
        assert!(model.scroll_to_edge(true));
        assert_eq!(model.current_section(), Section::Contact);
        assert!(model.scroll_to_edge(false));
        assert_eq!(model.current_section(), Section::Home);
    }

    #[test]
    fn test_navigate_to_current_position_settles_immediately() {
        let mut model = model();
        let changed = model.navigate(Section::Home, NavOrigin::Keyboard, Instant::now());
        assert!(!changed);
        assert!(!model.viewport.is_animating());
        assert!(!model.navigation.is_programmatic_scrolling());
    }
}
