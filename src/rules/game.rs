//! The game engine: turn order, move resolution and win detection.
//!
//! ## State
//!
//! A `Game` holds its players in turn order and a round counter. The
//! player on turn is always `players[round % player_count]`. The counter
//! moves by exactly one per `next_player()`, whether or not the next
//! player can still act; skipping eliminated players is the driver's job.
//!
//! ## Moves
//!
//! `tap` and `split` pass through `validate` first and leave the game
//! untouched on error. On success the new hand values replace the old ones
//! on their owner and the action is appended to the history.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{
    Action, ActionKind, ActionRecord, ConfigError, GameConfig, GameError, Hand, HandRef, Player,
    PlayerId,
};

use super::result::GameResult;
use super::snapshot::GameSnapshot;

/// A game of Chopsticks.
///
/// ## Example
///
/// ```
/// use chopsticks::core::{GameConfig, HandId, HandRef, PlayerId};
/// use chopsticks::rules::Game;
///
/// let mut game = Game::new(GameConfig::new(3, 2, 5)).unwrap();
///
/// let mine = HandRef::new(PlayerId::new(0), HandId::new(0));
/// let theirs = HandRef::new(PlayerId::new(1), HandId::new(0));
///
/// let hit = game.tap(mine, theirs).unwrap();
/// assert_eq!(hit.fingers(), 2);
///
/// assert_eq!(game.next_player().id(), PlayerId::new(1));
/// ```
///
/// Deserializing re-checks the saved state; see `SnapshotError`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GameSnapshot")]
pub struct Game {
    config: GameConfig,
    players: Vec<Player>,
    round: u64,
    history: Vector<ActionRecord>,
}

impl Game {
    /// Start a game: every hand at one finger, round 0, first player on turn.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let players = PlayerId::all(config.player_count)
            .map(|id| Player::new(id, config.hands_per_player, config.capacity))
            .collect();

        log::debug!(
            "new game: {} players, {} hands each, capacity {}",
            config.player_count,
            config.hands_per_player,
            config.capacity
        );

        Ok(Self {
            config,
            players,
            round: 0,
            history: Vector::new(),
        })
    }

    /// Reassemble a game from parts the caller has already checked.
    pub(super) fn from_parts(
        config: GameConfig,
        players: Vec<Player>,
        round: u64,
        history: Vector<ActionRecord>,
    ) -> Self {
        Self {
            config,
            players,
            round,
            history,
        }
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn capacity(&self) -> u32 {
        self.config.capacity
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Rounds played so far, counting skipped turns.
    #[must_use]
    pub fn round(&self) -> u64 {
        self.round
    }

    /// Players in turn order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id.index())
    }

    /// Current value of the hand at `at`.
    #[must_use]
    pub fn hand(&self, at: HandRef) -> Option<&Hand> {
        self.player(at.player)?.hand(at.hand)
    }

    /// Every applied action, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    /// Player whose turn it is. May be eliminated.
    #[must_use]
    pub fn current_player(&self) -> &Player {
        &self.players[self.turn_index()]
    }

    /// Advance the round by one and return the player now on turn.
    pub fn next_player(&mut self) -> &Player {
        self.round += 1;
        &self.players[self.turn_index()]
    }

    /// Players with at least one active hand.
    pub fn active_players(&self) -> Vec<PlayerId> {
        self.players
            .iter()
            .filter(|p| p.is_active())
            .map(Player::id)
            .collect()
    }

    /// The game ends once at most one player has an active hand.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.players.iter().filter(|p| p.is_active()).count() <= 1
    }

    /// The last player standing, if there is exactly one.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self.active_players().as_slice() {
            [only] => Some(*only),
            _ => None,
        }
    }

    /// Returns `Some(result)` if the game has ended, `None` if it continues.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        if !self.is_game_over() {
            return None;
        }
        Some(match self.winner() {
            Some(p) => GameResult::Winner(p),
            None => GameResult::Draw,
        })
    }

    /// Apply either move. See `tap` and `split`.
    pub fn apply(&mut self, action: Action) -> Result<(), GameError> {
        match action {
            Action::Tap { source, target } => self.tap(source, target).map(|_| ()),
            Action::Split {
                source,
                target,
                amount,
            } => self.split(source, target, amount).map(|_| ()),
        }
    }

    /// Tap an opponent's hand with one of the current player's hands.
    ///
    /// Returns the target's new value.
    pub fn tap(
        &mut self,
        source: impl Into<HandRef>,
        target: impl Into<HandRef>,
    ) -> Result<Hand, GameError> {
        let action = Action::tap(source, target);
        self.validate(&action)?;

        let source = self.stored(action.source())?;
        let target = self.stored(action.target())?;
        let hit = source.tap(&target);

        self.owner_mut(hit.key())?.update_hand(hit)?;
        self.record(action);

        if !hit.is_active() {
            log::info!("{} is out of play", hit.key());
            self.announce_if_eliminated(hit.player());
        }
        Ok(hit)
    }

    /// Move `amount` fingers between two of the current player's hands.
    ///
    /// Returns the new `(source, target)` values.
    pub fn split(
        &mut self,
        source: impl Into<HandRef>,
        target: impl Into<HandRef>,
        amount: u32,
    ) -> Result<(Hand, Hand), GameError> {
        let action = Action::split(source, target, amount);
        self.validate(&action)?;

        let source = self.stored(action.source())?;
        let target = self.stored(action.target())?;
        let remaining = source
            .fingers()
            .checked_sub(amount)
            .ok_or(GameError::InsufficientFingers {
                available: source.fingers(),
                requested: amount,
            })?;
        let new_source = source.with_fingers(remaining)?;
        let landed = target
            .fingers()
            .checked_add(amount)
            .ok_or(GameError::InvalidFingerCount {
                fingers: u32::MAX,
                capacity: target.capacity(),
            })?;
        let new_target = target.with_fingers(landed)?;

        let owner = self.owner_mut(new_source.key())?;
        owner.update_hand(new_source)?;
        owner.update_hand(new_target)?;
        self.record(action);

        self.announce_if_eliminated(new_source.player());
        Ok((new_source, new_target))
    }

    /// Every action the current player may legally take.
    ///
    /// Taps come first, then splits, each in hand order. Empty once the
    /// game is over or when the current player is eliminated.
    pub fn legal_actions(&self) -> Vec<Action> {
        if self.is_game_over() {
            return Vec::new();
        }

        let me = self.current_player();
        let mine = me.active_hands();
        let mut actions = Vec::new();

        for source in &mine {
            for opponent in self.players.iter().filter(|p| p.id() != me.id()) {
                for target in opponent.active_hands() {
                    actions.push(Action::tap(source, target));
                }
            }
        }

        for source in &mine {
            for target in me.all_hands().iter().filter(|h| h.id() != source.id()) {
                let room = target.capacity().saturating_sub(target.fingers());
                for amount in 1..=source.fingers().min(room) {
                    actions.push(Action::split(source, target, amount));
                }
            }
        }

        actions
    }

    /// Kinds of move with at least one legal action, in the same order as
    /// `legal_actions`. Checked directly, without listing every action.
    pub fn legal_kinds(&self) -> Vec<ActionKind> {
        if self.is_game_over() {
            return Vec::new();
        }

        let me = self.current_player();
        let mine = me.active_hands();
        let mut kinds = Vec::new();

        let opponent_active = self
            .players
            .iter()
            .any(|p| p.id() != me.id() && p.is_active());
        if !mine.is_empty() && opponent_active {
            kinds.push(ActionKind::Tap);
        }

        let can_split = mine.iter().any(|source| {
            me.all_hands()
                .iter()
                .any(|target| target.id() != source.id() && target.fingers() < target.capacity())
        });
        if can_split {
            kinds.push(ActionKind::Split);
        }

        kinds
    }

    fn turn_index(&self) -> usize {
        (self.round % self.players.len() as u64) as usize
    }

    fn stored(&self, at: HandRef) -> Result<Hand, GameError> {
        self.hand(at).copied().ok_or(GameError::UnknownHand(at))
    }

    fn owner_mut(&mut self, at: HandRef) -> Result<&mut Player, GameError> {
        self.players
            .get_mut(at.player.index())
            .ok_or(GameError::UnknownHand(at))
    }

    fn record(&mut self, action: Action) {
        let record = ActionRecord {
            round: self.round,
            player: self.current_player().id(),
            action,
        };
        log::debug!("round {}: {}", record.round, record.action);
        self.history.push_back(record);
    }

    fn announce_if_eliminated(&self, player: PlayerId) {
        if self.player(player).is_some_and(|p| !p.is_active()) {
            log::info!("{} is eliminated", player);
        }
        if let Some(result) = self.result() {
            log::info!("game over after round {}: {}", self.round, result);
        }
    }
}
