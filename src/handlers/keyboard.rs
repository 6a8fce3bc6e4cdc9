//! Keyboard Input Handler
//!
//! Handles all keyboard input. An open overlay captures input;
//! otherwise keys scroll the document, jump between sections and trigger
//! the portfolio actions.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::App;
use foliotui::logic::navigation::section_for_shortcut;
use foliotui::model::{NavOrigin, Overlay, VimCommandState};

/// Handle keyboard input
pub fn handle_key(app: &mut App, key: KeyEvent) -> Result<()> {
    // Windows reports releases too
    if key.kind == KeyEventKind::Release {
        return Ok(());
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.model.ui.should_quit = true;
        return Ok(());
    }

    match app.model.ui.overlay() {
        Overlay::Drawer => {
            handle_drawer_key(app, key);
            return Ok(());
        }
        Overlay::Links => {
            handle_links_key(app, key);
            return Ok(());
        }
        Overlay::None => {}
    }

    // Any key but 'g' breaks a pending "gg"
    if app.model.ui.vim_mode && key.code != KeyCode::Char('g') {
        app.model.ui.vim_command_state = VimCommandState::None;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            app.model.ui.should_quit = true;
        }
        // Vim keybindings
        KeyCode::Char('j') if app.model.ui.vim_mode => app.scroll_rows(1),
        KeyCode::Char('k') if app.model.ui.vim_mode => app.scroll_rows(-1),
        KeyCode::Char('d')
            if app.model.ui.vim_mode && key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            app.half_page(true);
        }
        KeyCode::Char('u')
            if app.model.ui.vim_mode && key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            app.half_page(false);
        }
        KeyCode::Char('g') if app.model.ui.vim_mode => {
            if app.model.ui.vim_command_state == VimCommandState::WaitingForSecondG {
                // gg - jump to top
                app.jump_to_edge(false);
                app.model.ui.vim_command_state = VimCommandState::None;
            } else {
                // First 'g' press
                app.model.ui.vim_command_state = VimCommandState::WaitingForSecondG;
            }
        }
        KeyCode::Char('G') if app.model.ui.vim_mode => app.jump_to_edge(true),
        // Standard navigation keys
        KeyCode::Down => app.scroll_rows(1),
        KeyCode::Up => app.scroll_rows(-1),
        KeyCode::PageDown => app.half_page(true),
        KeyCode::PageUp => app.half_page(false),
        KeyCode::Home => app.jump_to_edge(false),
        KeyCode::End => app.jump_to_edge(true),
        KeyCode::Tab => app.next_section(),
        KeyCode::BackTab => app.previous_section(),
        KeyCode::Char(c) if section_for_shortcut(c).is_some() => {
            if let Some(section) = section_for_shortcut(c) {
                app.navigate_to(section, NavOrigin::Keyboard);
            }
        }
        // Portfolio actions
        KeyCode::Char('m') => app.toggle_drawer(),
        KeyCode::Char('t') => app.toggle_theme(),
        KeyCode::Char('c') => app.contact_me(),
        KeyCode::Char('h') => app.hire_me(),
        KeyCode::Char('e') => app.send_email(),
        KeyCode::Char('l') => app.toggle_links_panel(),
        _ => {}
    }
    Ok(())
}

/// Keys while the drawer is open
fn handle_drawer_key(app: &mut App, key: KeyEvent) {
    let vim = app.model.ui.vim_mode;
    match key.code {
        KeyCode::Esc | KeyCode::Char('m') => app.model.ui.close_drawer(),
        KeyCode::Char('q') => app.model.ui.should_quit = true,
        KeyCode::Down | KeyCode::Tab => app.model.ui.move_drawer_cursor(true),
        KeyCode::Up | KeyCode::BackTab => app.model.ui.move_drawer_cursor(false),
        KeyCode::Char('j') if vim => app.model.ui.move_drawer_cursor(true),
        KeyCode::Char('k') if vim => app.model.ui.move_drawer_cursor(false),
        KeyCode::Enter | KeyCode::Char(' ') => app.select_drawer_item(),
        KeyCode::Char('h') => {
            app.model.ui.close_drawer();
            app.hire_me();
        }
        KeyCode::Char(c) => {
            if let Some(section) = section_for_shortcut(c) {
                app.navigate_to(section, NavOrigin::Drawer);
            }
        }
        _ => {}
    }
}

/// Keys while the links panel is open
fn handle_links_key(app: &mut App, key: KeyEvent) {
    let vim = app.model.ui.vim_mode;
    match key.code {
        KeyCode::Esc | KeyCode::Char('l') => app.model.ui.close_links_panel(),
        KeyCode::Char('q') => app.model.ui.should_quit = true,
        KeyCode::Down | KeyCode::Tab => app.model.ui.move_links_cursor(true),
        KeyCode::Up | KeyCode::BackTab => app.model.ui.move_links_cursor(false),
        KeyCode::Char('j') if vim => app.model.ui.move_links_cursor(true),
        KeyCode::Char('k') if vim => app.model.ui.move_links_cursor(false),
        KeyCode::Enter | KeyCode::Char(' ') => app.select_link(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{test_app, test_app_with_links};
    use foliotui::model::Section;

    fn press(app: &mut App, code: KeyCode) {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE)).unwrap();
    }

    fn ctrl(app: &mut App, c: char) {
        handle_key(app, KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)).unwrap();
    }

    #[test]
    fn test_digit_jumps_to_section() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('4'));
        assert_eq!(app.model.current_section(), Section::Experience);
        assert!(app.model.navigation.is_programmatic_scrolling());
    }

    #[test]
    fn test_arrow_scroll_updates_highlight() {
        let mut app = test_app();
        for _ in 0..12 {
            press(&mut app, KeyCode::Down);
        }
        assert_eq!(app.model.viewport.offset, 12);
        assert_eq!(app.model.current_section(), Section::About);
        press(&mut app, KeyCode::Up);
        assert_eq!(app.model.current_section(), Section::Home);
    }

    #[test]
    fn test_vim_keys_only_in_vim_mode() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.model.viewport.offset, 0);

        app.model.ui.vim_mode = true;
        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.model.viewport.offset, 1);
        ctrl(&mut app, 'd');
        assert_eq!(app.model.viewport.offset, 11);
    }

    #[test]
    fn test_vim_gg_and_g() {
        let mut app = test_app();
        app.model.ui.vim_mode = true;
        handle_key(&mut app, KeyEvent::new(KeyCode::Char('G'), KeyModifiers::SHIFT)).unwrap();
        assert_eq!(app.model.current_section(), Section::Contact);

        press(&mut app, KeyCode::Char('g'));
        assert_eq!(app.model.current_section(), Section::Contact);
        press(&mut app, KeyCode::Char('g'));
        assert_eq!(app.model.current_section(), Section::Home);
    }

    #[test]
    fn test_interrupted_gg_does_not_jump() {
        let mut app = test_app();
        app.model.ui.vim_mode = true;
        press(&mut app, KeyCode::End);
        press(&mut app, KeyCode::Char('g'));
        press(&mut app, KeyCode::Char('k'));
        press(&mut app, KeyCode::Char('g'));
        assert_ne!(app.model.current_section(), Section::Home);
    }

    #[test]
    fn test_escape_closes_drawer_before_quitting() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('m'));
        assert!(app.model.has_modal());

        press(&mut app, KeyCode::Esc);
        assert!(!app.model.has_modal());
        assert!(!app.model.ui.should_quit);

        press(&mut app, KeyCode::Esc);
        assert!(app.model.ui.should_quit);
    }

    #[test]
    fn test_drawer_enter_navigates() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('m'));
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.model.current_section(), Section::Contact);
        assert!(!app.model.has_modal());
    }

    #[test]
    fn test_drawer_swallows_section_keys() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('m'));
        press(&mut app, KeyCode::Char('t'));
        assert!(app.model.has_modal());
        assert_eq!(app.model.ui.theme, foliotui::model::ThemeMode::Dark);
    }

    #[test]
    fn test_ctrl_c_quits_from_drawer() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('m'));
        ctrl(&mut app, 'c');
        assert!(app.model.ui.should_quit);
    }

    #[test]
    fn test_contact_key_navigates() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('c'));
        assert_eq!(app.model.current_section(), Section::Contact);
    }

    #[test]
    fn test_links_panel_keys_open_social_link() {
        let (mut app, mut requests) = test_app_with_links();
        let target = app
            .content
            .links()
            .iter()
            .position(|l| l.url == "https://linkedin.com/in/example")
            .unwrap();

        press(&mut app, KeyCode::Char('l'));
        assert!(app.model.has_modal());
        for _ in 0..target {
            press(&mut app, KeyCode::Down);
        }
        press(&mut app, KeyCode::Enter);

        assert_eq!(requests.try_recv().unwrap().url, "https://linkedin.com/in/example");
        assert!(!app.model.has_modal());
    }

    #[test]
    fn test_links_panel_swallows_document_keys() {
        let (mut app, mut requests) = test_app_with_links();
        press(&mut app, KeyCode::Char('l'));
        press(&mut app, KeyCode::Char('4'));
        press(&mut app, KeyCode::Char('e'));
        assert_eq!(app.model.current_section(), Section::Home);
        assert!(requests.try_recv().is_err());

        press(&mut app, KeyCode::Esc);
        assert!(!app.model.has_modal());
        assert!(!app.model.ui.should_quit);
    }

    #[test]
    fn test_hire_me_from_drawer() {
        let (mut app, mut requests) = test_app_with_links();
        press(&mut app, KeyCode::Char('m'));
        press(&mut app, KeyCode::Char('h'));
        assert!(!app.model.has_modal());
        assert_eq!(
            requests.try_recv().unwrap().url,
            "https://example.com/alex-rivera/resume.pdf"
        );
    }
}
