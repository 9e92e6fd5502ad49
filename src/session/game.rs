//! A running match.
//!
//! `Session` owns everything one game needs: the player profiles, the
//! snapshot history, the transient piece selection, and the elapsed clock.
//! The presentation layer keeps one per match and forwards clicks to it.
//!
//! Every intent that does not apply (wrong piece, illegal target, undo at
//! the start, anything after a win) is a silent no-op.

use std::sync::Arc;

use tracing::{debug, info, instrument, trace};

use super::clock::ElapsedClock;
use super::history::History;
use crate::core::{GameState, MatchSetup, Player, Position, Profile};
use crate::rules::{self, Targets};

#[derive(Clone, Debug)]
pub struct Session {
    setup: MatchSetup,
    history: History,
    /// Slot of the selected piece in the live snapshot.
    selected: Option<usize>,
    clock: ElapsedClock,
}

impl Session {
    /// Start a match: opening layout, player 1 to move.
    ///
    /// Names and colors are taken as given; check them with
    /// [`MatchSetup::validate`] at the setup screen.
    pub fn new(
        player1_name: impl Into<String>,
        player1_color: impl Into<String>,
        player2_name: impl Into<String>,
        player2_color: impl Into<String>,
    ) -> Self {
        Self::from_setup(MatchSetup::new(
            player1_name,
            player1_color,
            player2_name,
            player2_color,
        ))
    }

    #[instrument(skip_all, fields(
        player1 = %setup.profile(Player::One).name,
        player2 = %setup.profile(Player::Two).name
    ))]
    pub fn from_setup(setup: MatchSetup) -> Self {
        debug!("new session");
        Self {
            setup,
            history: History::new(),
            selected: None,
            clock: ElapsedClock::new(),
        }
    }

    // === Reading ===

    /// The live snapshot, for rendering.
    #[must_use]
    pub fn current_state(&self) -> &Arc<GameState> {
        self.history.current()
    }

    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    #[must_use]
    pub fn profile(&self, player: Player) -> &Profile {
        self.setup.profile(player)
    }

    #[must_use]
    pub fn setup(&self) -> &MatchSetup {
        &self.setup
    }

    /// Cell of the selected piece, if any.
    #[must_use]
    pub fn selected(&self) -> Option<Position> {
        let index = self.selected?;
        Some(self.current_state().pieces()[index].position)
    }

    /// Where the selected piece could go. Empty with no selection.
    #[must_use]
    pub fn legal_targets_of_selection(&self) -> Targets {
        let state = self.current_state();
        match self.selected {
            Some(index) => rules::legal_targets(&state.pieces()[index], state.pieces()),
            None => Targets::new(),
        }
    }

    /// Profile of the winner on the live snapshot.
    #[must_use]
    pub fn winner_profile(&self) -> Option<&Profile> {
        self.current_state().winner().map(|p| self.profile(p))
    }

    /// Moves the winner needed, for the end screen.
    #[must_use]
    pub fn winner_moves(&self) -> Option<u32> {
        let state = self.current_state();
        state.winner().map(|p| state.moves(p))
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    // === Intents ===

    /// Pick up the piece on `position`.
    ///
    /// Only the side to move may select, only its own pieces, and only
    /// while nobody has won. Anything else leaves the selection as it was.
    #[instrument(skip(self))]
    pub fn select(&mut self, position: Position) {
        let state = self.history.current();
        if state.is_over() {
            trace!("select ignored: game decided");
            return;
        }
        match state.piece_index_at(position) {
            Some(index) if state.pieces()[index].owner == state.current_player() => {
                trace!("piece selected");
                self.selected = Some(index);
            }
            _ => trace!("select ignored: not a piece of the side to move"),
        }
    }

    /// Move the selected piece to `target`.
    ///
    /// On success the new snapshot replaces any redoable ones, becomes
    /// live, and the selection clears. Otherwise nothing changes, the
    /// selection included. Returns the live snapshot either way.
    #[instrument(skip(self))]
    pub fn commit(&mut self, target: Position) -> Arc<GameState> {
        let Some(index) = self.selected else {
            trace!("commit ignored: nothing selected");
            return Arc::clone(self.current_state());
        };

        let current = self.history.current();
        let Some(next) = rules::apply_move(current, index, target) else {
            trace!("commit ignored: illegal move");
            return Arc::clone(current);
        };

        let mover = current.current_player();
        let from = current.pieces()[index].position;
        debug!(%mover, %from, "piece moved");
        if let Some(winner) = next.winner() {
            info!(%winner, moves = next.moves(winner), "game won");
        }

        self.selected = None;
        Arc::clone(self.history.push(next))
    }

    /// Step back one snapshot and drop the selection. No-op at the start.
    #[instrument(skip(self))]
    pub fn undo(&mut self) -> Arc<GameState> {
        if self.history.undo() {
            self.selected = None;
            debug!(cursor = self.history.cursor(), "undo");
        }
        Arc::clone(self.current_state())
    }

    /// Step forward one snapshot and drop the selection. No-op at the newest.
    #[instrument(skip(self))]
    pub fn redo(&mut self) -> Arc<GameState> {
        if self.history.redo() {
            self.selected = None;
            debug!(cursor = self.history.cursor(), "redo");
        }
        Arc::clone(self.current_state())
    }

    /// Abandon the match and go back to the setup screen.
    ///
    /// History, selection and clock are dropped with the session; the
    /// setup comes back so the form can be shown prefilled.
    #[instrument(skip(self))]
    pub fn reset(self) -> MatchSetup {
        debug!(snapshots = self.history.len(), "session reset");
        self.setup
    }

    // === Clock ===

    /// One second passed. Ignored once the live snapshot has a winner.
    pub fn tick(&mut self) {
        if !self.current_state().is_over() {
            self.clock.tick();
        }
    }

    #[must_use]
    pub fn elapsed(&self) -> ElapsedClock {
        self.clock
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::from_setup(MatchSetup::default())
    }
}
