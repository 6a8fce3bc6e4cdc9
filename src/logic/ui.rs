//! UI state transition logic
//!
//! Pure functions for toast timing and theme cycling.

use crate::model::ThemeMode;

/// How long a toast stays on screen
pub const TOAST_DURATION_MS: u128 = 1500;

/// Whether a toast shown `elapsed_ms` ago should be dismissed
///
/// # Examples
/// ```
/// use foliotui::logic::ui::should_dismiss_toast;
///
/// assert!(!should_dismiss_toast(200));
/// assert!(should_dismiss_toast(1500));
/// ```
pub fn should_dismiss_toast(elapsed_ms: u128) -> bool {
    elapsed_ms >= TOAST_DURATION_MS
}

/// Whether a toast message should use the error style
pub fn is_error_toast(message: &str) -> bool {
    message.starts_with("Error:")
}

/// Parse a theme name from config or CLI
///
/// Unknown names fall back to dark, the default look.
///
/// # Examples
/// ```
/// use foliotui::logic::ui::parse_theme;
/// use foliotui::model::ThemeMode;
///
/// assert_eq!(parse_theme("Light"), ThemeMode::Light);
/// assert_eq!(parse_theme("dark"), ThemeMode::Dark);
/// assert_eq!(parse_theme("neon"), ThemeMode::Dark);
/// ```
pub fn parse_theme(name: &str) -> ThemeMode {
    match name.trim().to_lowercase().as_str() {
        "light" => ThemeMode::Light,
        _ => ThemeMode::Dark,
    }
}
