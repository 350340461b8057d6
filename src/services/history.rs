//! Undo/redo history over recorded colors.
//!
//! Tracks every color the user lands on and lets them walk backwards and
//! forwards through those choices. Boundary hits are silent no-ops, never
//! errors: the UI dims its undo/redo hints via [`ColorHistory::can_undo`]
//! and [`ColorHistory::can_redo`] instead of reporting failures.

use crate::models::RgbColor;

/// Color history state: an undo stack, a redo stack, and the current color.
///
/// Invariants:
/// - After the first [`record`](Self::record), the undo stack is never empty
///   and its last element equals `current`.
/// - Colors only enter history through `record`; `undo`/`redo` move them
///   between the two stacks without inventing or dropping values.
#[derive(Debug, Clone)]
pub struct ColorHistory {
    /// Chronological, oldest first; the current color is the last element.
    undo_stack: Vec<RgbColor>,
    /// Colors undone, most recently undone last.
    redo_stack: Vec<RgbColor>,
    /// The color currently shown.
    current: RgbColor,
}

impl ColorHistory {
    /// Create an empty history with the startup default as current.
    ///
    /// The default color is not recorded; callers record it explicitly if
    /// the initial color should be undoable-to.
    #[must_use]
    pub fn new() -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            current: RgbColor::default(),
        }
    }

    /// The color currently shown.
    #[must_use]
    pub const fn current(&self) -> RgbColor {
        self.current
    }

    /// Record a newly chosen color and make it current.
    ///
    /// This is the only way colors enter history. Recording discards the
    /// redo stack: once the user picks a fresh color, the abandoned branch
    /// of undone colors is no longer reachable.
    pub fn record(&mut self, color: RgbColor) {
        self.undo_stack.push(color);
        self.redo_stack.clear();
        self.current = color;
    }

    /// Step back to the previously recorded color.
    ///
    /// Returns the new current color, or `None` when there is nothing
    /// before the first recorded color (the history is left untouched).
    pub fn undo(&mut self) -> Option<RgbColor> {
        if self.undo_stack.len() <= 1 {
            return None;
        }

        // Move the current color to the redo stack; the previous color
        // stays on the undo stack and becomes current again.
        let undone = self.undo_stack.pop()?;
        self.redo_stack.push(undone);

        self.current = *self.undo_stack.last()?;
        Some(self.current)
    }

    /// Step forward to the most recently undone color.
    ///
    /// Returns the new current color, or `None` when nothing has been
    /// undone (the history is left untouched).
    pub fn redo(&mut self) -> Option<RgbColor> {
        let color = self.redo_stack.pop()?;
        self.undo_stack.push(color);
        self.current = color;
        Some(color)
    }

    /// Whether an undo step is available.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.undo_stack.len() > 1
    }

    /// Whether a redo step is available.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Number of recorded colors currently on the undo stack.
    #[must_use]
    pub fn len(&self) -> usize {
        self.undo_stack.len()
    }

    /// Whether nothing has been recorded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.undo_stack.is_empty()
    }
}

impl Default for ColorHistory {
    fn default() -> Self {
        Self::new()
    }
}
