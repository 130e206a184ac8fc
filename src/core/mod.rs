//! Core types: identifiers, hands, players, actions, errors, RNG, configuration.
//!
//! These are plain values. Hands are never mutated in place; a changed hand
//! is a new value that its owning `Player` stores in place of the old one.

pub mod hand;
pub mod player;
pub mod rng;
pub mod config;
pub mod action;
pub mod error;

pub use hand::{Hand, HandId, HandRef};
pub use player::{Player, PlayerId};
pub use rng::{GameRng, GameRngState};
pub use config::{GameConfig, MAX_CAPACITY, MAX_HANDS, MAX_PLAYERS};
pub use action::{Action, ActionKind, ActionRecord};
pub use error::{ConfigError, GameError, SnapshotError, TargetViolation};
