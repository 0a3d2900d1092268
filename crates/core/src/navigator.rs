use serde::{Deserialize, Serialize};

use crate::model::WritingTaskKind;

/// Bounded cursor over the sections (or writing tasks) of a test.
///
/// Movement never depends on whether the current section is answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionNavigator {
    index: usize,
    len: usize,
    frozen: bool,
}

impl SectionNavigator {
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            index: 0,
            len,
            frozen: false,
        }
    }

    /// Two-slot navigator for a writing test.
    #[must_use]
    pub fn for_writing() -> Self {
        Self::new(2)
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    #[must_use]
    pub fn is_last(&self) -> bool {
        self.index + 1 >= self.len
    }

    #[must_use]
    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    /// Advances unless already at the last index. Returns whether it moved.
    pub fn next(&mut self) -> bool {
        if self.frozen || self.is_last() {
            return false;
        }
        self.index += 1;
        true
    }

    /// Retreats unless already at the first index. Returns whether it moved.
    pub fn prev(&mut self) -> bool {
        if self.frozen || self.is_first() {
            return false;
        }
        self.index -= 1;
        true
    }

    /// Jumps to `index` if it is in range. Returns whether it moved.
    pub fn go_to(&mut self, index: usize) -> bool {
        if self.frozen || index >= self.len || index == self.index {
            return false;
        }
        self.index = index;
        true
    }

    pub fn go_to_task(&mut self, task: WritingTaskKind) -> bool {
        self.go_to(task.index())
    }

    /// Current position as a writing task; `None` outside a two-slot navigator.
    #[must_use]
    pub fn current_task(&self) -> Option<WritingTaskKind> {
        if self.len != 2 {
            return None;
        }
        WritingTaskKind::from_index(self.index)
    }

    /// After submission every transition is a no-op.
    pub fn freeze(&mut self) {
        self.frozen = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_sections_bounded_at_both_ends() {
        let mut nav = SectionNavigator::new(4);
        assert!(!nav.prev());
        assert_eq!(nav.index(), 0);

        for _ in 0..3 {
            assert!(nav.next());
        }
        assert_eq!(nav.index(), 3);
        assert!(!nav.next());
        assert_eq!(nav.index(), 3);
    }

    #[test]
    fn go_to_rejects_out_of_range() {
        let mut nav = SectionNavigator::new(3);
        assert!(nav.go_to(2));
        assert!(!nav.go_to(3));
        assert_eq!(nav.index(), 2);
    }

    #[test]
    fn frozen_navigator_ignores_everything() {
        let mut nav = SectionNavigator::new(4);
        nav.next();
        nav.freeze();
        assert!(!nav.next());
        assert!(!nav.prev());
        assert!(!nav.go_to(0));
        assert_eq!(nav.index(), 1);
    }

    #[test]
    fn writing_navigator_switches_tasks() {
        let mut nav = SectionNavigator::for_writing();
        assert_eq!(nav.current_task(), Some(WritingTaskKind::Task1));
        assert!(nav.go_to_task(WritingTaskKind::Task2));
        assert_eq!(nav.current_task(), Some(WritingTaskKind::Task2));
        assert!(!nav.next());
    }

    #[test]
    fn empty_navigator_never_moves() {
        let mut nav = SectionNavigator::new(0);
        assert!(nav.is_empty());
        assert!(!nav.next());
        assert!(!nav.prev());
    }
}
