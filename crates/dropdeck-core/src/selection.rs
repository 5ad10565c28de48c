//! Single-selection state for a list, reusable by any view.

#[derive(Clone, Debug, Default)]
pub struct SelectionState {
    selected: Option<usize>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Option<usize> {
        self.selected
    }

    pub fn set(&mut self, index: Option<usize>) {
        self.selected = index;
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// Move selection down, saturating at the last item.
    pub fn next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.selected = Some(match self.selected {
            Some(idx) => (idx + 1).min(len - 1),
            None => 0,
        });
    }

    /// Move selection up, saturating at the first item.
    pub fn prev(&mut self) {
        self.selected = Some(self.selected.map_or(0, |idx| idx.saturating_sub(1)));
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected == Some(index)
    }

    /// Select the first item when the list is non-empty and nothing is
    /// selected yet.
    pub fn auto_select_first(&mut self, len: usize) {
        if self.selected.is_none() && len > 0 {
            self.selected = Some(0);
        }
    }

    /// Keep the selection valid after the list shrinks or empties.
    pub fn clamp(&mut self, len: usize) {
        if let Some(idx) = self.selected {
            if len == 0 {
                self.selected = None;
            } else if idx >= len {
                self.selected = Some(len - 1);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_unselected() {
        assert!(SelectionState::new().get().is_none());
    }

    #[test]
    fn test_next_from_none_selects_first() {
        let mut selection = SelectionState::new();
        selection.next(3);
        assert_eq!(selection.get(), Some(0));
    }

    #[test]
    fn test_next_saturates_at_end() {
        let mut selection = SelectionState::new();
        selection.set(Some(2));
        selection.next(3);
        assert_eq!(selection.get(), Some(2));
    }

    #[test]
    fn test_next_on_empty_list_is_noop() {
        let mut selection = SelectionState::new();
        selection.next(0);
        assert!(selection.get().is_none());
    }

    #[test]
    fn test_prev_saturates_at_start() {
        let mut selection = SelectionState::new();
        selection.set(Some(1));
        selection.prev();
        selection.prev();
        assert_eq!(selection.get(), Some(0));
    }

    #[test]
    fn test_auto_select_first() {
        let mut selection = SelectionState::new();
        selection.auto_select_first(0);
        assert!(selection.get().is_none());
        selection.auto_select_first(2);
        assert_eq!(selection.get(), Some(0));
        selection.set(Some(1));
        selection.auto_select_first(2);
        assert_eq!(selection.get(), Some(1));
    }

    #[test]
    fn test_clamp_after_shrink() {
        let mut selection = SelectionState::new();
        selection.set(Some(5));
        selection.clamp(3);
        assert_eq!(selection.get(), Some(2));
        selection.clamp(0);
        assert!(selection.get().is_none());
    }
}
