//! # Reorder Engine
//!
//! Drag-and-drop moves an entry from a *source* canonical index onto a *target*
//! canonical index. The source is removed first, which shifts every later entry
//! down by one, so a forward move lands at `target - 1`:
//!
//! ```text
//! [A, B, C, D]  reorder(0, 2)  ->  [B, A, C, D]
//! [A, B, C, D]  reorder(2, 0)  ->  [C, A, B, D]
//! [A, B, C, D]  reorder(1, 1)  ->  [A, B, C, D]
//! ```
//!
//! A forward drop onto the next row (`reorder(1, 2)`) lands the source where it
//! already was, so it counts as a no-op too.
//!
//! Out-of-range indices are a silent no-op, not an error: a stale drag must never
//! corrupt the collection.
//!
//! [`DragState`] tracks the transient part of a drag (source and highlighted row).
//! It holds ids rather than positions and never touches the collection itself.

use uuid::Uuid;

/// Where the source ends up after removal, for a drop on `target`.
pub fn insertion_index(source: usize, target: usize) -> usize {
    if source < target {
        target - 1
    } else {
        target
    }
}

/// Moves `items[source]` onto `target`. Returns `true` if the order changed.
pub fn reorder<T>(items: &mut Vec<T>, source: usize, target: usize) -> bool {
    if source == target || source >= items.len() || target >= items.len() {
        return false;
    }

    let landing = insertion_index(source, target);
    if landing == source {
        return false;
    }

    let moved = items.remove(source);
    items.insert(landing, moved);
    true
}

/// Transient drag bookkeeping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DragState {
    source: Option<Uuid>,
    over: Option<Uuid>,
}

impl DragState {
    pub fn source(&self) -> Option<Uuid> {
        self.source
    }

    /// The row currently highlighted as a drop target.
    pub fn over(&self) -> Option<Uuid> {
        self.over
    }

    pub fn is_dragging(&self) -> bool {
        self.source.is_some()
    }

    pub fn start(&mut self, id: Uuid) {
        self.source = Some(id);
        self.over = None;
    }

    pub fn enter(&mut self, id: Uuid) {
        self.over = Some(id);
    }

    pub fn leave(&mut self, id: Uuid) {
        if self.over == Some(id) {
            self.over = None;
        }
    }

    /// Ends the drag and returns the source, if any. The highlight is cleared either way.
    pub fn take_source(&mut self) -> Option<Uuid> {
        self.over = None;
        self.source.take()
    }

    /// Clears everything. Runs whether or not a drop happened.
    pub fn end(&mut self) {
        self.source = None;
        self.over = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abcd() -> Vec<char> {
        vec!['A', 'B', 'C', 'D']
    }

    #[test]
    fn forward_move_compensates_for_removal() {
        let mut v = abcd();
        assert!(reorder(&mut v, 0, 2));
        assert_eq!(v, vec!['B', 'A', 'C', 'D']);
    }

    #[test]
    fn backward_move_inserts_at_target() {
        let mut v = abcd();
        assert!(reorder(&mut v, 2, 0));
        assert_eq!(v, vec!['C', 'A', 'B', 'D']);
    }

    #[test]
    fn same_index_is_noop() {
        let mut v = abcd();
        assert!(!reorder(&mut v, 1, 1));
        assert_eq!(v, abcd());
    }

    #[test]
    fn adjacent_forward_drop_is_noop() {
        let mut v = abcd();
        assert!(!reorder(&mut v, 1, 2));
        assert_eq!(v, abcd());
    }

    #[test]
    fn drop_on_last_row() {
        let mut v = abcd();
        assert!(reorder(&mut v, 0, 3));
        assert_eq!(v, vec!['B', 'C', 'A', 'D']);
    }

    #[test]
    fn out_of_range_is_noop() {
        let mut v = abcd();
        assert!(!reorder(&mut v, 4, 0));
        assert!(!reorder(&mut v, 0, 4));
        assert!(!reorder(&mut Vec::<char>::new(), 0, 0));
        assert_eq!(v, abcd());
    }

    #[test]
    fn end_clears_everything() {
        let (a, b) = (Uuid::new_v4(), Uuid::new_v4());
        let mut drag = DragState::default();
        drag.start(a);
        drag.enter(b);
        drag.end();
        assert_eq!(drag, DragState::default());
    }

    #[test]
    fn leave_only_clears_matching_highlight() {
        let (a, b) = (Uuid::new_v4(), Uuid::new_v4());
        let mut drag = DragState::default();
        drag.enter(a);
        drag.leave(b);
        assert_eq!(drag.over(), Some(a));
        drag.leave(a);
        assert_eq!(drag.over(), None);
    }
}
