//! Link Response Handler
//!
//! Turns results from the link service into toasts.

use crate::services::LinkResponse;
use crate::App;

/// Handle a link service response
pub fn handle_link_response(app: &mut App, response: LinkResponse) {
    let message = match response {
        LinkResponse::Opened { label } => format!("Opened {}", label),
        LinkResponse::Failed { label, error } => {
            format!("Error: could not open {}: {}", label, error)
        }
    };
    app.model.show_toast(message);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_app;
    use foliotui::logic::ui::is_error_toast;

    #[test]
    fn test_opened_shows_success_toast() {
        let mut app = test_app();
        handle_link_response(&mut app, LinkResponse::Opened { label: "GitHub".to_string() });
        let (message, _) = app.model.ui.toast_message.clone().unwrap();
        assert_eq!(message, "Opened GitHub");
        assert!(!is_error_toast(&message));
    }

    #[test]
    fn test_failure_shows_error_toast() {
        let mut app = test_app();
        handle_link_response(
            &mut app,
            LinkResponse::Failed {
                label: "Resume".to_string(),
                error: "'xdg-open' exited with exit status: 3".to_string(),
            },
        );
        let (message, _) = app.model.ui.toast_message.clone().unwrap();
        assert!(is_error_toast(&message));
        assert!(message.contains("Resume"));
    }
}
