//! Game rules: the turn engine, its validation gate and results.
//!
//! `Game` owns the players and the round counter. Every move goes through
//! `Game::validate` before any hand is replaced, so a rejected move never
//! leaves partial state behind.

pub mod game;
pub mod result;
mod snapshot;
mod validate;

pub use game::Game;
pub use result::GameResult;
