//! Error types for game construction and move resolution.
//!
//! `ConfigError` aborts game creation. `GameError` rejects a single action
//! and leaves the game untouched, so the driver can ask again.
//! `SnapshotError` rejects a saved game whose state could not have been
//! reached by play.

use thiserror::Error;

use super::hand::HandRef;
use super::player::PlayerId;

/// Invalid game configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("a game needs at least one player")]
    NoPlayers,

    #[error("at most {max} players are supported, got {requested}")]
    TooManyPlayers { requested: usize, max: usize },

    #[error("each player needs at least one hand")]
    NoHands,

    #[error("at most {max} hands per player are supported, got {requested}")]
    TooManyHands { requested: usize, max: usize },

    #[error("hand capacity must be at least 2, got {0}")]
    CapacityTooSmall(u32),

    #[error("hand capacity must be at most {max}, got {requested}")]
    CapacityTooLarge { requested: u32, max: u32 },
}

/// Why an action's hands are not a legal pairing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum TargetViolation {
    #[error("source hand does not belong to the player on turn")]
    NotActingPlayer,

    #[error("source hand is out of play")]
    DeadSource,

    #[error("target hand is out of play")]
    DeadTarget,

    #[error("cannot tap one of your own hands")]
    SelfTap,

    #[error("split must stay within one player's hands")]
    CrossPlayerSplit,

    #[error("source and target are the same hand")]
    SameHand,
}

/// A rejected action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("{fingers} fingers is outside 0..={capacity}")]
    InvalidFingerCount { fingers: u32, capacity: u32 },

    #[error("cannot move {requested} fingers from a hand holding {available}")]
    InsufficientFingers { available: u32, requested: u32 },

    #[error("a split must move at least one finger")]
    EmptyTransfer,

    #[error("invalid target: {0}")]
    InvalidActionTarget(#[from] TargetViolation),

    #[error("no such hand: {0}")]
    UnknownHand(HandRef),

    #[error("the game is already over")]
    GameOver,
}

/// A saved game that fails the checks `Game::new` and the move rules
/// guarantee.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum SnapshotError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("expected {expected} players, found {found}")]
    PlayerCount { expected: usize, found: usize },

    #[error("seat {seat} holds {found}")]
    PlayerOrder { seat: usize, found: PlayerId },

    #[error("{player} should have {expected} hands, found {found}")]
    HandCount {
        player: PlayerId,
        expected: usize,
        found: usize,
    },

    #[error("{0} is out of place or has the wrong capacity")]
    HandMismatch(HandRef),

    #[error("{hand} holds {fingers} fingers, outside 0..={capacity}")]
    FingerCount {
        hand: HandRef,
        fingers: u32,
        capacity: u32,
    },

    #[error("history entry {index} does not fit the game")]
    History { index: usize },
}
