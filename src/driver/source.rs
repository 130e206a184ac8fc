//! Where player decisions come from.
//!
//! The engine never decides anything. A driver asks an `ActionSource` for
//! the current player's move and hands it to the engine. Sources here:
//!
//! - `ScriptedSource`: replays a fixed list of moves
//! - `RandomSource`: picks uniformly among legal moves with a seeded RNG

use std::collections::VecDeque;

use crate::core::{Action, GameError, GameRng, GameRngState};
use crate::rules::Game;

/// Supplier of moves for the player on turn.
pub trait ActionSource {
    /// Choose a move for `game.current_player()`.
    ///
    /// Returning `None` stops the game.
    fn choose(&mut self, game: &Game) -> Option<Action>;

    /// Called when the engine rejects the chosen move. The same turn is
    /// offered again.
    fn rejected(&mut self, _action: &Action, _error: &GameError) {}
}

/// Replays a queue of moves, then stops.
#[derive(Clone, Debug, Default)]
pub struct ScriptedSource {
    script: VecDeque<Action>,
    rejections: Vec<(Action, GameError)>,
}

impl ScriptedSource {
    pub fn new(script: impl IntoIterator<Item = Action>) -> Self {
        Self {
            script: script.into_iter().collect(),
            rejections: Vec::new(),
        }
    }

    /// Moves not yet played.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.script.len()
    }

    /// Moves the engine refused, in order.
    #[must_use]
    pub fn rejections(&self) -> &[(Action, GameError)] {
        &self.rejections
    }
}

impl ActionSource for ScriptedSource {
    fn choose(&mut self, _game: &Game) -> Option<Action> {
        self.script.pop_front()
    }

    fn rejected(&mut self, action: &Action, error: &GameError) {
        self.rejections.push((*action, *error));
    }
}

/// Uniform random play over `Game::legal_actions`.
#[derive(Clone, Debug)]
pub struct RandomSource {
    rng: GameRng,
}

impl RandomSource {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }

    /// Continue from a saved RNG state.
    #[must_use]
    pub fn resume(state: &GameRngState) -> Self {
        Self {
            rng: GameRng::from_state(state),
        }
    }

    #[must_use]
    pub fn checkpoint(&self) -> GameRngState {
        self.rng.state()
    }
}

impl ActionSource for RandomSource {
    fn choose(&mut self, game: &Game) -> Option<Action> {
        let actions = game.legal_actions();
        self.rng.choose(&actions).copied()
    }
}
