//! Property tests over random click sequences.
//!
//! Whatever the UI sends, the session must keep a consistent board and
//! history.

use std::collections::HashSet;
use std::sync::Arc;

use proptest::prelude::*;
use shift_three::{GameState, Player, Position, Session};

#[derive(Clone, Copy, Debug)]
enum Intent {
    Select(u8),
    Commit(u8),
    Undo,
    Redo,
}

fn intent() -> impl Strategy<Value = Intent> {
    prop_oneof![
        4 => (0u8..9).prop_map(Intent::Select),
        4 => (0u8..9).prop_map(Intent::Commit),
        1 => Just(Intent::Undo),
        1 => Just(Intent::Redo),
    ]
}

fn at(index: u8) -> Position {
    Position::new(index).unwrap()
}

/// Cells that differ between two snapshots, piece by piece.
fn moved_pieces(before: &GameState, after: &GameState) -> usize {
    before
        .pieces()
        .iter()
        .zip(after.pieces())
        .filter(|(a, b)| a != b)
        .count()
}

fn assert_board_consistent(state: &GameState) {
    let occupied: HashSet<_> = state.pieces().iter().map(|p| p.position).collect();
    assert_eq!(occupied.len(), 6, "two pieces share a cell");
    for player in Player::ALL {
        assert_eq!(state.positions_of(player).count(), 3);
    }
}

proptest! {
    #[test]
    fn prop_session_invariants(intents in prop::collection::vec(intent(), 0..80)) {
        let mut session = Session::default();

        for intent in intents {
            let before = Arc::clone(session.current_state());
            let len_before = session.history().len();

            match intent {
                Intent::Select(cell) => {
                    let selected_before = session.selected();
                    session.select(at(cell));
                    let owner = before.piece_at(at(cell)).map(|p| p.owner);
                    if before.is_over() || owner != Some(before.current_player()) {
                        prop_assert_eq!(session.selected(), selected_before);
                    } else {
                        prop_assert_eq!(session.selected(), Some(at(cell)));
                    }
                    prop_assert!(Arc::ptr_eq(&before, session.current_state()));
                }
                Intent::Commit(cell) => {
                    let after = session.commit(at(cell));
                    if Arc::ptr_eq(&before, &after) {
                        prop_assert_eq!(session.history().len(), len_before);
                    } else {
                        prop_assert_eq!(moved_pieces(&before, &after), 1);
                        prop_assert_eq!(after.current_player(), before.current_player().opponent());
                        let mover = before.current_player();
                        prop_assert_eq!(after.moves(mover), before.moves(mover) + 1);
                        prop_assert!(!session.can_redo());
                        prop_assert_eq!(session.selected(), None);
                    }
                }
                Intent::Undo => {
                    let could_undo = session.can_undo();
                    let after = session.undo();
                    prop_assert_eq!(session.history().len(), len_before);
                    if could_undo {
                        prop_assert!(session.can_redo());
                        let back = session.redo();
                        prop_assert!(Arc::ptr_eq(&back, &before));
                        session.undo();
                    } else {
                        prop_assert!(Arc::ptr_eq(&after, &before));
                    }
                }
                Intent::Redo => {
                    session.redo();
                    prop_assert_eq!(session.history().len(), len_before);
                }
            }

            let history = session.history();
            prop_assert!(history.cursor() < history.len());
            prop_assert_eq!(&**history.get(0).unwrap(), &GameState::initial());
            assert_board_consistent(session.current_state());
        }
    }

    #[test]
    fn prop_winner_is_permanent(intents in prop::collection::vec(intent(), 0..120)) {
        let mut session = Session::default();

        for intent in intents {
            match intent {
                Intent::Select(cell) => session.select(at(cell)),
                Intent::Commit(cell) => {
                    session.commit(at(cell));
                }
                // Stay on the newest snapshot so a win is never navigated away from.
                Intent::Undo | Intent::Redo => {}
            }

            if let Some(winner) = session.current_state().winner() {
                let won = Arc::clone(session.current_state());
                for cell in 0..9 {
                    session.select(at(cell));
                    session.commit(at(cell));
                }
                prop_assert!(Arc::ptr_eq(&won, session.current_state()));
                prop_assert_eq!(won.winner(), Some(winner));
                break;
            }
        }
    }
}
