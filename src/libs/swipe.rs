//! Swipe-to-delete gesture for a single row.
//!
//! Dragging tints the row and moves it with the pointer. Releasing past
//! the threshold commits a delete for that row; releasing earlier puts the
//! row back as it was. A gesture always ends in one of those two outcomes.

pub const DEFAULT_SWIPE_THRESHOLD: f32 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Background {
    Normal,
    PendingDelete,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowAppearance {
    pub background: Background,
    pub translation_x: f32,
}

impl RowAppearance {
    pub const RESTING: RowAppearance = RowAppearance {
        background: Background::Normal,
        translation_x: 0.0,
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeOutcome {
    Commit(usize),
    Restore,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Idle,
    Dragging { offset: f32 },
    Released,
}

#[derive(Debug, Clone)]
pub struct SwipeGesture {
    position: usize,
    row_width: f32,
    threshold: f32,
    phase: Phase,
}

impl SwipeGesture {
    /// Starts tracking a swipe on the row at `position`.
    pub fn begin(position: usize, row_width: f32, threshold: f32) -> Self {
        SwipeGesture {
            position,
            row_width: row_width.max(0.0),
            threshold: threshold.clamp(f32::EPSILON, 1.0),
            phase: Phase::Idle,
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// Moves the row by `dx`. Ignored once the gesture has been released.
    pub fn drag(&mut self, dx: f32) {
        self.phase = match self.phase {
            Phase::Idle => Phase::Dragging { offset: dx },
            Phase::Dragging { offset } => Phase::Dragging { offset: offset + dx },
            Phase::Released => Phase::Released,
        };
    }

    pub fn appearance(&self) -> RowAppearance {
        match self.phase {
            Phase::Dragging { offset } => RowAppearance {
                background: Background::PendingDelete,
                translation_x: offset,
            },
            Phase::Idle | Phase::Released => RowAppearance::RESTING,
        }
    }

    pub fn release(&mut self) -> SwipeOutcome {
        let offset = match self.phase {
            Phase::Dragging { offset } => offset,
            Phase::Idle | Phase::Released => 0.0,
        };
        self.phase = Phase::Released;

        if self.row_width > 0.0 && offset.abs() >= self.threshold * self.row_width {
            SwipeOutcome::Commit(self.position)
        } else {
            SwipeOutcome::Restore
        }
    }
}
