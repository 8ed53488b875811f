use ratatui::{layout::Rect, widgets::ListState};

use crate::keys::Action;

use super::layout;

/// Selection and scroll position of a list panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListSelection {
    pub selected: usize,
    /// First visible row, as of the last draw.
    pub offset: usize,
}

impl ListSelection {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Applies a navigation action to a list of `len` rows. Returns whether the
    /// action was a navigation action.
    pub fn apply(&mut self, action: Action, len: usize) -> bool {
        let last = len.saturating_sub(1);
        self.selected = match action {
            Action::MoveUp => self.selected.saturating_sub(1),
            Action::MoveDown => (self.selected + 1).min(last),
            Action::PageUp => self.selected.saturating_sub(layout::PAGE_SCROLL_SIZE),
            Action::PageDown => (self.selected + layout::PAGE_SCROLL_SIZE).min(last),
            Action::GotoTop => 0,
            Action::GotoBottom => last,
            _ => return false,
        };
        true
    }

    /// Moves the selection by `delta` rows, clamped to the list.
    pub fn scroll(&mut self, delta: i32, len: usize) {
        let last = len.saturating_sub(1);
        let steps = delta.unsigned_abs() as usize;
        self.selected = if delta < 0 {
            self.selected.saturating_sub(steps)
        } else {
            (self.selected + steps).min(last)
        };
    }

    /// The list row under terminal row `y`, if any.
    pub fn row_at(&self, inner: Rect, y: u16, len: usize) -> Option<usize> {
        if y < inner.y || y >= inner.y + inner.height {
            return None;
        }
        let row = self.offset + (y - inner.y) as usize;
        (row < len).then_some(row)
    }

    pub fn list_state(&self) -> ListState {
        ListState::default()
            .with_selected(Some(self.selected))
            .with_offset(self.offset)
    }

    /// Records the scroll position ratatui settled on.
    pub fn store(&mut self, state: &ListState) {
        self.offset = state.offset();
    }
}
