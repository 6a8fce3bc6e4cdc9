//! Platform defaults
//!
//! Config path resolution lives in `config::get_config_path`; this module
//! only answers which program opens links when none is configured.

/// Program used to open URLs on this platform
pub fn default_open_command() -> &'static str {
    if cfg!(target_os = "macos") {
        "open"
    } else if cfg!(target_os = "windows") {
        "explorer"
    } else {
        "xdg-open"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_open_command_is_known() {
        assert!(["open", "explorer", "xdg-open"].contains(&default_open_command()));
    }
}
