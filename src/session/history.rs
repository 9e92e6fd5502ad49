//! Snapshot history with an undo/redo cursor.
//!
//! `History` is an arena of immutable `GameState` snapshots plus the index
//! of the live one. Snapshots are reference-counted, so handing one to the
//! renderer or cloning the whole history never copies a board.
//!
//! Invariants:
//! - never empty; slot 0 is the opening position
//! - `cursor` is always in `[0, len - 1]`
//! - pushing after an undo drops every snapshot past the cursor

use std::sync::Arc;

use im::Vector;

use crate::core::GameState;

#[derive(Clone, Debug)]
pub struct History {
    states: Vector<Arc<GameState>>,
    cursor: usize,
}

impl History {
    /// A history holding only the opening position.
    #[must_use]
    pub fn new() -> Self {
        Self {
            states: Vector::unit(Arc::new(GameState::initial())),
            cursor: 0,
        }
    }

    /// The live snapshot.
    #[must_use]
    pub fn current(&self) -> &Arc<GameState> {
        &self.states[self.cursor]
    }

    /// Index of the live snapshot.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of stored snapshots, including any redoable ones.
    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Never true: the opening position is always stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Snapshot at `index`, if stored.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Arc<GameState>> {
        self.states.get(index)
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.states.len()
    }

    /// Append `state` after the cursor and make it live.
    ///
    /// Anything that was redoable is discarded first.
    pub(crate) fn push(&mut self, state: GameState) -> &Arc<GameState> {
        self.states.truncate(self.cursor + 1);
        self.states.push_back(Arc::new(state));
        self.cursor = self.states.len() - 1;
        self.current()
    }

    /// Step back one snapshot. Returns false at the opening position.
    pub fn undo(&mut self) -> bool {
        if !self.can_undo() {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Step forward one snapshot. Returns false at the newest snapshot.
    pub fn redo(&mut self) -> bool {
        if !self.can_redo() {
            return false;
        }
        self.cursor += 1;
        true
    }

    /// Iterate over all stored snapshots, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<GameState>> {
        self.states.iter()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
