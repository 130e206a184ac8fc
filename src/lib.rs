//! # chopsticks
//!
//! The finger game Chopsticks for any number of players, hands and
//! fingers per hand.
//!
//! ## Rules
//!
//! Every hand starts with one finger up. On your turn you either:
//!
//! - **Tap**: add one of your active hands to an opponent's active hand.
//!   The target wraps modulo capacity, so reaching capacity exactly puts
//!   it out at 0.
//! - **Split**: move fingers from one of your active hands to another of
//!   your hands, never past capacity.
//!
//! A hand is active while `0 < fingers < capacity`; a player is active
//! while any hand is. The last active player wins.
//!
//! ## Design
//!
//! - **Values, not mutation**: `Hand` is `Copy`. A move builds new hand
//!   values and the owning `Player` swaps them in by ID.
//! - **One gate**: every move is checked by `Game::validate` before any
//!   state changes; a rejected move leaves the game as it was.
//! - **Thin driver**: the engine advances one round per call and never
//!   skips anybody. `TurnDriver` skips eliminated players and asks an
//!   `ActionSource` for moves.
//!
//! ## Modules
//!
//! - `core`: IDs, hands, players, actions, errors, RNG, configuration
//! - `rules`: the `Game` engine and `GameResult`
//! - `driver`: turn loop, scripted and random move sources, board text
//! - `terminal`: interactive terminal player (feature `cli`)

pub mod core;
pub mod rules;
pub mod driver;
#[cfg(feature = "cli")]
pub mod terminal;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionKind, ActionRecord, ConfigError, GameConfig, GameError, GameRng, GameRngState,
    Hand, HandId, HandRef, Player, PlayerId, SnapshotError, TargetViolation,
};

pub use crate::rules::{Game, GameResult};

pub use crate::driver::{ActionSource, RandomSource, ScriptedSource, Turn, TurnDriver};
