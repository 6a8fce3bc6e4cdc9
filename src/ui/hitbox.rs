//! Clickable regions recorded while rendering
//!
//! Mouse handling needs to know where the top bar and the overlays put
//! their items on the last frame. The renderers push rectangles here and the
//! event loop looks them up by cell.

use ratatui::layout::{Position, Rect};

use crate::model::Section;

/// What a mouse click landed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// Section link in the top bar
    TopBarItem(Section),
    /// Section link in the drawer
    DrawerItem(Section),
    MenuButton,
    ThemeButton,
    HireButton,
    /// Entry of the links panel, by position in `PortfolioContent::links`
    Link(usize),
    /// Click outside the open overlay
    Backdrop,
}

/// Rectangles from the last rendered frame, checked front to back
#[derive(Debug, Clone, Default)]
pub struct Hitboxes {
    regions: Vec<(Rect, HitTarget)>,
    modal: Option<Rect>,
}

impl Hitboxes {
    /// Forget the previous frame's regions
    pub fn clear(&mut self) {
        self.regions.clear();
        self.modal = None;
    }

    pub fn push(&mut self, area: Rect, target: HitTarget) {
        if area.width > 0 && area.height > 0 {
            self.regions.push((area, target));
        }
    }

    /// Record an overlay panel; clicks outside it become `Backdrop`
    pub fn set_modal(&mut self, area: Rect) {
        self.modal = Some(area);
    }

    /// Target under the cell at (`column`, `row`)
    ///
    /// While an overlay is open only the regions inside it are clickable.
    pub fn hit(&self, column: u16, row: u16) -> Option<HitTarget> {
        let position = Position::new(column, row);

        if let Some(modal) = self.modal {
            if !modal.contains(position) {
                return Some(HitTarget::Backdrop);
            }
            return self
                .regions
                .iter()
                .filter(|(area, _)| modal.intersection(*area) == *area)
                .find(|(area, _)| area.contains(position))
                .map(|(_, target)| *target);
        }

        self.regions
            .iter()
            .find(|(area, _)| area.contains(position))
            .map(|(_, target)| *target)
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}
