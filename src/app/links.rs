//! Link orchestration methods
//!
//! Resume, email and contact actions, and the links panel. Opening happens in the link
//! service; results come back through `handlers::handle_link_response`.

use tracing::warn;

use crate::services::LinkRequest;
use crate::App;
use foliotui::model::{NavOrigin, Section};

impl App {
    /// Queue `url` for the link service
    pub(crate) fn open_link(&mut self, label: &str, url: &str) {
        let request = LinkRequest {
            label: label.to_string(),
            url: url.to_string(),
        };
        if self.link_tx.send(request).is_err() {
            warn!(label, "link service is not running");
            self.model
                .show_toast(format!("Error: could not open {}", label));
        }
    }

    /// "Hire Me": open the resume, or jump to Contact when there is none
    pub(crate) fn hire_me(&mut self) {
        match self.content.profile.resume_url.clone() {
            Some(url) => self.open_link("Resume", &url),
            None => self.navigate_to(Section::Contact, NavOrigin::HeroButton),
        }
    }

    /// Open the links panel, or close it if open
    pub(crate) fn toggle_links_panel(&mut self) {
        if self.model.ui.links_panel.is_some() {
            self.model.ui.close_links_panel();
        } else {
            self.model.ui.open_links_panel(self.content.links().len());
        }
    }

    /// Open the entry at `index` of the links panel and close the panel
    pub(crate) fn open_link_at(&mut self, index: usize) {
        let Some(link) = self.content.links().into_iter().nth(index) else {
            return;
        };
        self.model.ui.close_links_panel();
        self.open_link(&link.label, &link.url);
    }

    /// Open the entry under the links panel cursor
    pub(crate) fn select_link(&mut self) {
        if let Some(cursor) = self.model.ui.links_panel.as_ref().map(|p| p.cursor) {
            self.open_link_at(cursor);
        }
    }

    /// "Contact Me" jumps to the contact section
    pub(crate) fn contact_me(&mut self) {
        self.navigate_to(Section::Contact, NavOrigin::HeroButton);
    }

    pub(crate) fn send_email(&mut self) {
        match self.content.email_url().map(str::to_string) {
            Some(url) => self.open_link("Email", &url),
            None => self
                .model
                .show_toast("Error: no email address in contact methods".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::services::LinkRequest;
    use crate::test_app_with_links;
    use foliotui::model::Section;

    #[test]
    fn test_hire_me_requests_resume() {
        let (mut app, mut requests) = test_app_with_links();
        app.hire_me();
        let request = requests.try_recv().unwrap();
        assert_eq!(
            request,
            LinkRequest {
                label: "Resume".to_string(),
                url: "https://example.com/alex-rivera/resume.pdf".to_string(),
            }
        );
    }

    #[test]
    fn test_hire_me_without_resume_goes_to_contact() {
        let (mut app, mut requests) = test_app_with_links();
        app.content.profile.resume_url = None;
        app.hire_me();
        assert!(requests.try_recv().is_err());
        assert_eq!(app.model.current_section(), Section::Contact);
    }

    #[test]
    fn test_send_email_uses_mailto() {
        let (mut app, mut requests) = test_app_with_links();
        app.send_email();
        assert_eq!(requests.try_recv().unwrap().url, "mailto:alex@example.com");
    }

    #[test]
    fn test_links_panel_opens_social_link() {
        let (mut app, mut requests) = test_app_with_links();
        app.toggle_links_panel();
        let github = app
            .content
            .links()
            .iter()
            .position(|l| l.label == "GitHub")
            .unwrap();
        for _ in 0..github {
            app.model.ui.move_links_cursor(true);
        }
        app.select_link();

        assert_eq!(
            requests.try_recv().unwrap(),
            LinkRequest {
                label: "GitHub".to_string(),
                url: "https://github.com/example".to_string(),
            }
        );
        assert!(app.model.ui.links_panel.is_none());
    }

    #[test]
    fn test_every_link_reaches_the_service() {
        let (mut app, mut requests) = test_app_with_links();
        let links = app.content.links();
        for index in 0..links.len() {
            app.open_link_at(index);
        }
        let urls: Vec<_> = std::iter::from_fn(|| requests.try_recv().ok())
            .map(|r| r.url)
            .collect();
        let expected: Vec<_> = links.into_iter().map(|l| l.url).collect();
        assert_eq!(urls, expected);
    }

    #[test]
    fn test_out_of_range_link_is_ignored() {
        let (mut app, mut requests) = test_app_with_links();
        app.toggle_links_panel();
        app.open_link_at(500);
        assert!(requests.try_recv().is_err());
        assert!(app.model.ui.links_panel.is_some());
    }

    #[test]
    fn test_closed_service_shows_error_toast() {
        let (mut app, requests) = test_app_with_links();
        drop(requests);
        app.send_email();
        let (message, _) = app.model.ui.toast_message.clone().unwrap();
        assert!(message.starts_with("Error:"));
    }
}
