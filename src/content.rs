//! Portfolio content
//!
//! Everything the sections display, deserialized from YAML. A sample
//! profile is compiled into the binary and used when no content file is
//! configured.

use serde::Deserialize;
use std::path::Path;

use crate::error::ContentError;

/// Sample content bundled with the binary
pub const BUNDLED_CONTENT: &str = include_str!("../assets/portfolio.yaml");

#[derive(Debug, Clone, Deserialize)]
pub struct PortfolioContent {
    pub profile: Profile,
    pub about: About,
    pub skills: Skills,
    pub experience: Experience,
    #[serde(default)]
    pub projects: Vec<Project>,
    pub services: Services,
    pub contact: Contact,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Profile {
    pub first_name: String,
    pub last_name: String,
    #[serde(default = "default_greeting")]
    pub greeting: String,
    pub role: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub resume_url: Option<String>,
}

fn default_greeting() -> String {
    "Hi, I'm".to_string()
}

impl Profile {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A label/value pair (info cards, role metrics)
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Fact {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct About {
    pub headline: String,
    #[serde(default)]
    pub paragraphs: Vec<String>,
    #[serde(default)]
    pub facts: Vec<Fact>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Skills {
    #[serde(default)]
    pub intro: String,
    #[serde(default)]
    pub groups: Vec<SkillGroup>,
    #[serde(default)]
    pub highlights: Vec<Highlight>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SkillGroup {
    pub title: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Highlight {
    pub title: String,
    pub subtitle: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Experience {
    #[serde(default)]
    pub intro: String,
    #[serde(default)]
    pub roles: Vec<Role>,
    #[serde(default)]
    pub milestones: Vec<Milestone>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Role {
    pub title: String,
    pub company: String,
    pub period: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub achievements: Vec<String>,
    #[serde(default)]
    pub metrics: Vec<Fact>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Milestone {
    pub date: String,
    pub title: String,
    pub track: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub demo_url: Option<String>,
    #[serde(default)]
    pub source_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Services {
    #[serde(default)]
    pub intro: String,
    #[serde(default)]
    pub items: Vec<Service>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Service {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Contact {
    #[serde(default)]
    pub intro: String,
    pub methods: Vec<ContactMethod>,
    #[serde(default)]
    pub socials: Vec<Link>,
    #[serde(default)]
    pub call_to_action: Option<CallToAction>,
    #[serde(default)]
    pub footer_tagline: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContactMethod {
    pub title: String,
    pub value: String,
    pub action_label: String,
    pub url: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Link {
    pub label: String,
    pub url: String,
}

/// An openable link with the label shown for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkEntry {
    pub label: String,
    pub url: String,
}

impl LinkEntry {
    fn new(label: &str, url: &str) -> Self {
        Self {
            label: label.to_string(),
            url: url.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CallToAction {
    pub title: String,
    pub body: String,
}

impl PortfolioContent {
    /// Parse and validate content from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ContentError> {
        let content: PortfolioContent = serde_yaml::from_str(yaml)?;
        content.validate()?;
        Ok(content)
    }

    /// Read, parse and validate a content file
    pub fn load(path: &Path) -> Result<Self, ContentError> {
        let yaml = std::fs::read_to_string(path).map_err(|source| ContentError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&yaml)
    }

    /// The sample profile compiled into the binary
    pub fn bundled() -> Result<Self, ContentError> {
        Self::from_yaml_str(BUNDLED_CONTENT)
    }

    /// Reject content the sections cannot render sensibly
    pub fn validate(&self) -> Result<(), ContentError> {
        if self.profile.first_name.trim().is_empty() {
            return Err(ContentError::EmptyField { field: "profile.first_name" });
        }
        if self.profile.role.trim().is_empty() {
            return Err(ContentError::EmptyField { field: "profile.role" });
        }
        if self.about.headline.trim().is_empty() {
            return Err(ContentError::EmptyField { field: "about.headline" });
        }
        if self.contact.methods.is_empty() {
            return Err(ContentError::NoContactMethods);
        }

        for link in self.links() {
            if link.url.trim().is_empty() {
                return Err(ContentError::EmptyUrl { label: link.label });
            }
        }
        Ok(())
    }

    /// Every external link in the content, in display order
    ///
    /// Resume first, then contact methods, socials and project links. The
    /// links panel lists exactly these entries.
    pub fn links(&self) -> Vec<LinkEntry> {
        let mut links = Vec::new();
        if let Some(url) = &self.profile.resume_url {
            links.push(LinkEntry::new("Resume", url));
        }
        for method in &self.contact.methods {
            links.push(LinkEntry::new(&method.action_label, &method.url));
        }
        for social in &self.contact.socials {
            links.push(LinkEntry::new(&social.label, &social.url));
        }
        for project in &self.projects {
            if let Some(url) = &project.demo_url {
                links.push(LinkEntry::new(&format!("{} demo", project.title), url));
            }
            if let Some(url) = &project.source_url {
                links.push(LinkEntry::new(&format!("{} source", project.title), url));
            }
        }
        links
    }

    /// First `mailto:` contact url, if any
    pub fn email_url(&self) -> Option<&str> {
        self.contact
            .methods
            .iter()
            .map(|m| m.url.as_str())
            .find(|url| url.starts_with("mailto:"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_content_parses() {
        let content = PortfolioContent::bundled().unwrap();
        assert_eq!(content.profile.full_name(), "Alex Rivera");
        assert!(!content.skills.groups.is_empty());
        assert!(!content.experience.roles.is_empty());
        assert!(!content.projects.is_empty());
        assert!(!content.services.items.is_empty());
        assert_eq!(content.email_url(), Some("mailto:alex@example.com"));
    }

    const MINIMAL: &str = r#"
profile:
  first_name: Sam
  last_name: Lee
  role: Developer
about:
  headline: Hello
skills: {}
experience: {}
services: {}
contact:
  methods:
    - title: Email
      value: sam@example.com
      action_label: Send Email
      url: mailto:sam@example.com
"#;

    #[test]
    fn test_minimal_content_uses_defaults() {
        let content = PortfolioContent::from_yaml_str(MINIMAL).unwrap();
        assert_eq!(content.profile.greeting, "Hi, I'm");
        assert!(content.projects.is_empty());
        assert!(content.profile.resume_url.is_none());
        assert!(content.contact.call_to_action.is_none());
    }

    #[test]
    fn test_missing_contact_methods_rejected() {
        let yaml = MINIMAL.replace(
            "  methods:\n    - title: Email\n      value: sam@example.com\n      action_label: Send Email\n      url: mailto:sam@example.com\n",
            "  methods: []\n",
        );
        let err = PortfolioContent::from_yaml_str(&yaml).unwrap_err();
        assert!(matches!(err, ContentError::NoContactMethods));
    }

    #[test]
    fn test_empty_name_rejected() {
        let yaml = MINIMAL.replace("first_name: Sam", "first_name: \"  \"");
        let err = PortfolioContent::from_yaml_str(&yaml).unwrap_err();
        assert!(matches!(err, ContentError::EmptyField { field: "profile.first_name" }));
    }

    #[test]
    fn test_empty_url_rejected() {
        let yaml = MINIMAL.replace("url: mailto:sam@example.com", "url: \"\"");
        let err = PortfolioContent::from_yaml_str(&yaml).unwrap_err();
        assert!(matches!(err, ContentError::EmptyUrl { .. }));
    }

    #[test]
    fn test_links_cover_resume_contacts_socials_and_projects() {
        let content = PortfolioContent::bundled().unwrap();
        let links = content.links();
        let labels: Vec<_> = links.iter().map(|l| l.label.as_str()).collect();

        assert_eq!(labels[0], "Resume");
        assert!(labels.contains(&"Send Email"));
        assert!(labels.contains(&"GitHub"));
        assert!(labels.contains(&"LinkedIn"));
        assert!(labels.contains(&"Trailhead demo"));
        assert!(labels.contains(&"Trailhead source"));
        assert!(links.iter().any(|l| l.url == "https://github.com/example"));
    }

    #[test]
    fn test_malformed_yaml_is_parse_error() {
        let err = PortfolioContent::from_yaml_str("profile: [").unwrap_err();
        assert!(matches!(err, ContentError::Parse(_)));
    }
}
