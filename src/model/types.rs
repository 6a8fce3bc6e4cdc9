//! Shared types for the Model
//!
//! These types are used across multiple sub-models and represent
//! fundamental domain concepts.

/// A named content block of the portfolio, in document order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Section {
    #[default]
    Home,
    About,
    Skills,
    Experience,
    Projects,
    Services,
    Contact,
}

impl Section {
    /// Every section in vertical document order
    pub const ALL: [Section; 7] = [
        Section::Home,
        Section::About,
        Section::Skills,
        Section::Experience,
        Section::Projects,
        Section::Services,
        Section::Contact,
    ];

    /// Label shown in the top bar and the drawer
    pub fn label(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Skills => "Skills",
            Section::Experience => "Experience",
            Section::Projects => "Projects",
            Section::Services => "Services",
            Section::Contact => "Contact",
        }
    }

    /// Icon used in the drawer
    pub fn icon(&self) -> &'static str {
        match self {
            Section::Home => "⌂",
            Section::About => "☺",
            Section::Skills => "⚒",
            Section::Experience => "◆",
            Section::Projects => "▣",
            Section::Services => "⚙",
            Section::Contact => "✉",
        }
    }

    /// Digit key that jumps to this section ('1'..='7')
    pub fn shortcut(&self) -> char {
        match self {
            Section::Home => '1',
            Section::About => '2',
            Section::Skills => '3',
            Section::Experience => '4',
            Section::Projects => '5',
            Section::Services => '6',
            Section::Contact => '7',
        }
    }
}

/// Responsive layout class derived from the viewport width
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    Compact,
    Expanded,
}

/// Color scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    Dark,
    Light,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Dark => "dark",
            ThemeMode::Light => "light",
        }
    }
}

/// Request for the viewport to bring a section to the top
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollToIndexCommand {
    pub index: usize,
    pub animated: bool,
}

/// Effects produced by the navigation controller, executed by the app
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavCommand {
    ScrollToIndex(ScrollToIndexCommand),
    CloseDrawer,
}

/// Where a navigation request came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavOrigin {
    TopBar,
    Drawer,
    Keyboard,
    HeroButton,
}

/// Whether a programmatic scroll is in flight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollPhase {
    Idle,
    ProgrammaticScrolling { target: Section },
}

/// Viewport notifications produced while animating
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollEvent {
    /// The animation reached its target row
    Settled,
}

/// Vim command state for tracking double-key commands like 'gg'
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VimCommandState {
    None,
    WaitingForSecondG, // First 'g' pressed, waiting for second 'g'
}

/// Navigation drawer state (compact layouts)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DrawerState {
    /// Row under the cursor
    pub cursor: usize,
}

/// Links panel state; `count` is the number of listed links
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinksPanelState {
    pub cursor: usize,
    pub count: usize,
}

/// Which overlay, if any, is capturing input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    None,
    Drawer,
    Links,
}
