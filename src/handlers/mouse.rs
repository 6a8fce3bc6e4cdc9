//! Mouse Input Handler
//!
//! Wheel scrolling over the document and clicks on the hitboxes recorded
//! by the last rendered frame.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::App;
use foliotui::model::NavOrigin;
use foliotui::ui::HitTarget;

/// Rows moved per wheel notch
const WHEEL_ROWS: i32 = 3;

/// Handle mouse input
pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::ScrollDown if !app.model.has_modal() => app.scroll_rows(WHEEL_ROWS),
        MouseEventKind::ScrollUp if !app.model.has_modal() => app.scroll_rows(-WHEEL_ROWS),
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(target) = app.hitboxes.hit(mouse.column, mouse.row) {
                handle_click(app, target);
            }
        }
        _ => {}
    }
}

fn handle_click(app: &mut App, target: HitTarget) {
    match target {
        HitTarget::TopBarItem(section) => app.navigate_to(section, NavOrigin::TopBar),
        HitTarget::DrawerItem(section) => app.navigate_to(section, NavOrigin::Drawer),
        HitTarget::MenuButton => app.toggle_drawer(),
        HitTarget::ThemeButton => app.toggle_theme(),
        HitTarget::HireButton => {
            app.model.ui.close_overlays();
            app.hire_me();
        }
        HitTarget::Link(index) => app.open_link_at(index),
        HitTarget::Backdrop => app.model.ui.close_overlays(),
    }
}
