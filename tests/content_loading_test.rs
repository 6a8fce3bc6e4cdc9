//! Loading portfolio content from disk and rendering sparse profiles

use std::io::Write;
use std::time::Duration;

use ratatui::backend::TestBackend;
use ratatui::Terminal;

use foliotui::content::PortfolioContent;
use foliotui::error::ContentError;
use foliotui::model::{Model, Section, ThemeMode};
use foliotui::ui::{self, Hitboxes};

const SPARSE: &str = r#"
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

fn write_content(yaml: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(yaml.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_from_file() {
    let file = write_content(SPARSE);
    let content = PortfolioContent::load(file.path()).unwrap();
    assert_eq!(content.profile.full_name(), "Sam Lee");
    assert_eq!(content.email_url(), Some("mailto:sam@example.com"));
}

#[test]
fn test_missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.yaml");
    let err = PortfolioContent::load(&path).unwrap_err();
    assert!(matches!(err, ContentError::Read { .. }));
    assert!(err.to_string().contains("missing.yaml"));
}

#[test]
fn test_invalid_file_is_rejected() {
    let file = write_content(&SPARSE.replace("first_name: Sam", "first_name: \"\""));
    assert!(matches!(
        PortfolioContent::load(file.path()),
        Err(ContentError::EmptyField { .. })
    ));
}

/// Empty sections still occupy a slot so every index stays navigable
#[test]
fn test_sparse_content_renders_every_section() {
    let content = PortfolioContent::load(write_content(SPARSE).path()).unwrap();
    let mut model = Model::new(false, ThemeMode::Light, Duration::from_millis(0), false);
    let mut hitboxes = Hitboxes::default();

    for width in [60, 120, 200] {
        let mut terminal = Terminal::new(TestBackend::new(width, 30)).unwrap();
        terminal
            .draw(|f| ui::render(f, &mut model, &content, 8, &mut hitboxes))
            .unwrap();

        assert_eq!(model.viewport.heights.len(), Section::ALL.len());
        assert!(model.viewport.heights.iter().all(|h| *h > 0), "width {}", width);
    }
}
