//! Match sessions: history, selection, and clock around the rules.
//!
//! - `history`: immutable snapshots plus the undo/redo cursor
//! - `clock`: elapsed seconds for the timer display
//! - `game`: `Session`, the object the presentation layer talks to

pub mod clock;
pub mod game;
pub mod history;

pub use clock::ElapsedClock;
pub use game::Session;
pub use history::History;
