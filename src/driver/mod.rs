//! Turn loop and move sources layered over the engine.
//!
//! - `source`: the `ActionSource` trait plus scripted and random sources
//! - `turn`: `TurnDriver`, which skips eliminated players and plays turns
//! - `board`: text rendering of the table

pub mod board;
pub mod source;
pub mod turn;

pub use board::{render_board, render_hand};
pub use source::{ActionSource, RandomSource, ScriptedSource};
pub use turn::{skip_inactive, Turn, TurnDriver, DEFAULT_MAX_ATTEMPTS};
