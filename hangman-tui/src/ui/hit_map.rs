use crate::state::Action;
use ratatui::layout::{Position, Rect};

/// Screen regions that respond to mouse clicks, rebuilt on every frame.
#[derive(Debug, Clone, Default)]
pub struct HitMap {
    regions: Vec<(Rect, Action)>,
}

impl HitMap {
    pub fn register(&mut self, area: Rect, action: Action) {
        if !area.is_empty() {
            self.regions.push((area, action));
        }
    }

    /// Action under the given terminal cell. Later registrations win.
    pub fn action_at(&self, column: u16, row: u16) -> Option<Action> {
        let position = Position::new(column, row);
        self.regions
            .iter()
            .rev()
            .find(|(area, _)| area.contains(position))
            .map(|(_, action)| *action)
    }

    pub fn iter(&self) -> impl Iterator<Item = &(Rect, Action)> {
        self.regions.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}
