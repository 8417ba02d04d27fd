//! Linear snapshot history with a cursor.
//!
//! The cursor is either `Empty` (nothing displayed, the surface shows only the
//! background) or `At(i)` with `snapshots[i]` on the surface. Committing while
//! the cursor sits below the newest entry prunes the redo branch.

use crate::surface::RasterSurface;
use crate::types::Snapshot;
use tracing::debug;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HistoryState {
    Empty,
    At(usize),
}

#[derive(Debug, Default)]
pub struct History {
    snapshots: Vec<Snapshot>,
    cursor: Option<usize>,
    limit: Option<usize>,
    /// Set once the limit has dropped entries; `At(0)` is then the floor.
    evicted: bool,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep at most `limit` snapshots; the oldest are evicted first. `0` means unlimited.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            limit: (limit > 0).then_some(limit),
            ..Self::default()
        }
    }

    pub fn state(&self) -> HistoryState {
        match self.cursor {
            None => HistoryState::Empty,
            Some(i) => HistoryState::At(i),
        }
    }

    /// Cursor as a signed index, `-1` when empty.
    pub fn cursor(&self) -> isize {
        self.cursor.map_or(-1, |i| i as isize)
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn snapshot(&self, index: usize) -> Option<&Snapshot> {
        self.snapshots.get(index)
    }

    /// False at `Empty`, and at the oldest entry once older ones were evicted.
    pub fn can_undo(&self) -> bool {
        match self.cursor {
            None => false,
            Some(0) => !self.evicted,
            Some(_) => true,
        }
    }

    pub fn can_redo(&self) -> bool {
        self.next_index() < self.snapshots.len()
    }

    fn next_index(&self) -> usize {
        self.cursor.map_or(0, |i| i + 1)
    }

    /// Append the surface's current pixels, dropping any redo branch first.
    pub fn commit<S: RasterSurface + ?Sized>(&mut self, surface: &S) {
        let pruned = self.snapshots.len() - self.next_index();
        self.snapshots.truncate(self.next_index());
        self.snapshots.push(surface.snapshot());

        if let Some(limit) = self.limit {
            if self.snapshots.len() > limit {
                let evict = self.snapshots.len() - limit;
                self.snapshots.drain(..evict);
                self.evicted = true;
                debug!(evict, "history limit reached");
            }
        }

        self.cursor = Some(self.snapshots.len() - 1);
        debug!(cursor = self.cursor(), len = self.len(), pruned, "commit");
    }

    /// Step back one entry. Undoing the first entry clears the surface but keeps
    /// the entry for a later redo. Returns false when already empty, or when
    /// the oldest kept entry is shown after eviction.
    pub fn undo<S: RasterSurface + ?Sized>(&mut self, surface: &mut S) -> bool {
        if !self.can_undo() {
            return false;
        }
        match self.cursor {
            None => return false,
            Some(0) => {
                self.cursor = None;
                surface.clear();
            }
            Some(i) => {
                self.cursor = Some(i - 1);
                surface.restore(&self.snapshots[i - 1]);
            }
        }
        debug!(cursor = self.cursor(), len = self.len(), "undo");
        true
    }

    /// Step forward one entry; from `Empty` this shows the first entry.
    /// Returns false when there is nothing ahead.
    pub fn redo<S: RasterSurface + ?Sized>(&mut self, surface: &mut S) -> bool {
        let next = self.next_index();
        let Some(snapshot) = self.snapshots.get(next) else {
            return false;
        };
        surface.restore(snapshot);
        self.cursor = Some(next);
        debug!(cursor = self.cursor(), len = self.len(), "redo");
        true
    }

    /// Drop every entry and blank the surface.
    pub fn reset<S: RasterSurface + ?Sized>(&mut self, surface: &mut S) {
        self.snapshots.clear();
        self.cursor = None;
        self.evicted = false;
        surface.clear();
        debug!("history reset");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{BLACK, WHITE};
    use crate::raster::{LineCap, Stroke, StrokeStyle};
    use crate::surface::Canvas;
    use crate::types::Point;

    fn canvas() -> Canvas {
        Canvas::new(12, 12, WHITE)
    }

    fn mark(canvas: &mut Canvas, n: i32) {
        let p = Point::new(n, n);
        canvas.render_stroke(
            &Stroke::Segment { from: p, to: p },
            &StrokeStyle { color: BLACK, width: 1, cap: LineCap::Round },
        );
    }

    fn commit_marks(history: &mut History, canvas: &mut Canvas, marks: &[i32]) {
        for &n in marks {
            mark(canvas, n);
            history.commit(canvas);
        }
    }

    #[test]
    fn commit_moves_cursor_to_the_newest_entry() {
        let mut c = canvas();
        let mut history = History::new();
        assert_eq!(history.state(), HistoryState::Empty);
        for n in 0..4 {
            mark(&mut c, n);
            history.commit(&c);
            assert_eq!(history.cursor(), history.len() as isize - 1);
        }
    }

    #[test]
    fn commit_after_undo_prunes_redo_branch() {
        let mut c = canvas();
        let mut history = History::new();
        commit_marks(&mut history, &mut c, &[1, 2, 3]);
        let a = history.snapshot(0).cloned();

        history.undo(&mut c);
        history.undo(&mut c);
        assert_eq!(history.state(), HistoryState::At(0));

        mark(&mut c, 9);
        history.commit(&c);
        assert_eq!(history.len(), 2);
        assert_eq!(history.state(), HistoryState::At(1));
        assert_eq!(history.snapshot(0).cloned(), a);
        assert!(!history.can_redo());
    }

    #[test]
    fn undo_from_first_entry_clears_but_keeps_it_for_redo() {
        let mut c = canvas();
        let mut history = History::new();
        commit_marks(&mut history, &mut c, &[4]);

        assert!(history.undo(&mut c));
        assert_eq!(history.state(), HistoryState::Empty);
        assert_eq!(history.cursor(), -1);
        assert!(c.is_blank());
        assert_eq!(history.len(), 1);

        assert!(history.redo(&mut c));
        assert_eq!(history.state(), HistoryState::At(0));
        assert_eq!(c.pixel(4, 4), Some(BLACK));
    }

    #[test]
    fn undo_at_empty_is_a_no_op() {
        let mut c = canvas();
        let mut history = History::new();
        assert!(!history.undo(&mut c));
        commit_marks(&mut history, &mut c, &[1]);
        history.undo(&mut c);
        assert!(!history.undo(&mut c));
        assert_eq!(history.cursor(), -1);
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn redo_at_the_top_is_a_no_op() {
        let mut c = canvas();
        let mut history = History::new();
        assert!(!history.redo(&mut c));
        commit_marks(&mut history, &mut c, &[1, 2]);
        let before = c.snapshot();
        assert!(!history.redo(&mut c));
        assert_eq!(c.snapshot(), before);
        assert_eq!(history.state(), HistoryState::At(1));
    }

    #[test]
    fn reset_empties_list_and_surface() {
        let mut c = canvas();
        let mut history = History::new();
        commit_marks(&mut history, &mut c, &[1, 2]);
        history.reset(&mut c);
        assert!(history.is_empty());
        assert_eq!(history.state(), HistoryState::Empty);
        assert!(c.is_blank());
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn limit_evicts_oldest_and_keeps_cursor_on_top() {
        let mut c = canvas();
        let mut history = History::with_limit(2);
        commit_marks(&mut history, &mut c, &[1, 2, 3]);
        assert_eq!(history.len(), 2);
        assert_eq!(history.state(), HistoryState::At(1));

        // The oldest surviving entry already contains marks 1 and 2.
        history.undo(&mut c);
        assert_eq!(c.pixel(2, 2), Some(BLACK));
        assert_eq!(c.pixel(3, 3), Some(WHITE));
    }

    #[test]
    fn undo_stops_at_oldest_kept_entry_after_eviction() {
        let mut c = canvas();
        let mut history = History::with_limit(2);
        commit_marks(&mut history, &mut c, &[2, 5, 8]);
        let oldest = history.snapshot(0).cloned();

        assert!(history.undo(&mut c));
        assert!(!history.can_undo());
        assert!(!history.undo(&mut c));
        assert_eq!(history.state(), HistoryState::At(0));
        assert_eq!(Some(c.snapshot()), oldest);
        assert_eq!(c.pixel(2, 2), Some(BLACK));

        // A new stroke branches from the kept entry; mark 2 survives.
        mark(&mut c, 9);
        history.commit(&c);
        assert_eq!(history.len(), 2);
        assert_eq!(c.pixel(2, 2), Some(BLACK));
        assert_eq!(history.snapshot(0).cloned(), oldest);
    }

    #[test]
    fn reset_lifts_the_eviction_floor() {
        let mut c = canvas();
        let mut history = History::with_limit(1);
        commit_marks(&mut history, &mut c, &[1, 2]);
        assert!(!history.can_undo());
        history.reset(&mut c);
        commit_marks(&mut history, &mut c, &[3]);
        assert!(history.undo(&mut c));
        assert!(c.is_blank());
    }
}
