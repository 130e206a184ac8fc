//! The turn loop that sits on top of the engine.
//!
//! The engine advances one round per `next_player()` and never skips
//! anybody. The driver skips eliminated players (at most one full lap),
//! asks its source for a move, applies it and advances the round.

use crate::core::{ActionRecord, GameError, PlayerId};
use crate::rules::{Game, GameResult};

use super::source::ActionSource;

/// Rejected moves tolerated per turn before the driver gives up.
pub const DEFAULT_MAX_ATTEMPTS: usize = 16;

/// Advance past eliminated players.
///
/// Stops after `player_count` steps so a game with no active player
/// cannot loop forever. Returns the active player now on turn, if any.
pub fn skip_inactive(game: &mut Game) -> Option<PlayerId> {
    for _ in 0..game.player_count() {
        if game.current_player().is_active() {
            return Some(game.current_player().id());
        }
        let skipped = game.current_player().id();
        game.next_player();
        log::debug!("skipping eliminated {}", skipped);
    }
    game.current_player()
        .is_active()
        .then(|| game.current_player().id())
}

/// What happened on one call to `TurnDriver::play_turn`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Turn {
    /// A move was applied and the round advanced.
    Played(ActionRecord),
    /// The game had already ended.
    Over(GameResult),
    /// The source returned no move.
    Stopped,
    /// Every attempt this turn was rejected; the round did not advance.
    Rejected(GameError),
}

/// Drives a game with moves from an `ActionSource`.
#[derive(Clone, Debug)]
pub struct TurnDriver<S> {
    source: S,
    max_attempts: usize,
}

impl<S: ActionSource> TurnDriver<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    #[must_use]
    pub fn with_max_attempts(mut self, attempts: usize) -> Self {
        self.max_attempts = attempts.max(1);
        self
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn into_source(self) -> S {
        self.source
    }

    /// Play a single turn.
    pub fn play_turn(&mut self, game: &mut Game) -> Turn {
        if let Some(result) = game.result() {
            return Turn::Over(result);
        }
        if skip_inactive(game).is_none() {
            return Turn::Over(game.result().unwrap_or(GameResult::Draw));
        }

        let mut last_error = GameError::GameOver;
        for _ in 0..self.max_attempts {
            let Some(action) = self.source.choose(game) else {
                return Turn::Stopped;
            };
            match game.apply(action) {
                Ok(()) => {
                    let record = ActionRecord {
                        round: game.round(),
                        player: game.current_player().id(),
                        action,
                    };
                    game.next_player();
                    return Turn::Played(record);
                }
                Err(error) => {
                    log::warn!("rejected {}: {}", action, error);
                    self.source.rejected(&action, &error);
                    last_error = error;
                }
            }
        }
        Turn::Rejected(last_error)
    }

    /// Play until the game ends or `max_turns` turns have been played.
    ///
    /// Returns `None` if the turn limit was hit, the source stopped, or a
    /// turn exhausted its attempts.
    pub fn run(&mut self, game: &mut Game, max_turns: usize) -> Option<GameResult> {
        for _ in 0..max_turns {
            match self.play_turn(game) {
                Turn::Played(_) => continue,
                Turn::Over(result) => return Some(result),
                Turn::Stopped | Turn::Rejected(_) => return None,
            }
        }
        game.result()
    }
}
