//! Player identification and hand ownership.
//!
//! ## PlayerId
//!
//! Type-safe player identifier supporting 1-255 players.
//!
//! ## Player
//!
//! Owns a fixed-length, ordered set of hands. The only mutation after
//! construction is `update_hand`, which swaps in a new hand value by ID.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::config::MAX_PLAYERS;
use super::error::GameError;
use super::hand::{Hand, HandId};

/// Player identifier supporting 1-255 players.
///
/// Player indices are 0-based: the first player is `PlayerId(0)`.
/// `Display` is 1-based, the way players are shown at the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// Stops at `MAX_PLAYERS`, the number of distinct IDs.
    ///
    /// ```
    /// use chopsticks::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(3).collect();
    /// assert_eq!(players.len(), 3);
    /// assert_eq!(players[0], PlayerId::new(0));
    /// assert_eq!(players[2], PlayerId::new(2));
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count.min(MAX_PLAYERS)).map(|i| PlayerId(i as u8))
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.index() + 1)
    }
}

/// A player and the hands they own.
///
/// Hands keep creation order, so `all_hands()[i].id() == HandId(i)`.
/// Players are only built by `Game`, which validates their shape.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Player {
    id: PlayerId,
    hands: SmallVec<[Hand; 2]>,
}

impl Player {
    /// Create a player with `hand_count` fresh hands.
    pub(crate) fn new(id: PlayerId, hand_count: usize, capacity: u32) -> Self {
        let hands = HandId::all(hand_count)
            .map(|hand| Hand::new(id, hand, capacity))
            .collect();
        Self { id, hands }
    }

    /// Assemble a player from hands already checked by the caller.
    pub(crate) fn from_hands(id: PlayerId, hands: impl IntoIterator<Item = Hand>) -> Self {
        Self {
            id,
            hands: hands.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    /// A player stays in the game while any hand is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.hands.iter().any(Hand::is_active)
    }

    /// Active hands in creation order. May be empty.
    pub fn active_hands(&self) -> Vec<Hand> {
        self.hands.iter().filter(|h| h.is_active()).copied().collect()
    }

    /// Every hand, dead or alive, in creation order.
    #[must_use]
    pub fn all_hands(&self) -> &[Hand] {
        &self.hands
    }

    #[must_use]
    pub fn hand(&self, id: HandId) -> Option<&Hand> {
        self.hands.get(id.index())
    }

    /// Total fingers up across all hands.
    #[must_use]
    pub fn total_fingers(&self) -> u64 {
        self.hands.iter().map(|h| u64::from(h.fingers())).sum()
    }

    /// Replace the stored hand with the same ID as `hand`.
    ///
    /// Fails with `UnknownHand` if this player owns no such hand.
    pub fn update_hand(&mut self, hand: Hand) -> Result<(), GameError> {
        let slot = self
            .hands
            .iter_mut()
            .find(|h| h.key() == hand.key())
            .ok_or(GameError::UnknownHand(hand.key()))?;
        *slot = hand;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::hand::HandRef;

    #[test]
    fn test_player_id_basics() {
        let p0 = PlayerId::new(0);
        let p1 = PlayerId::new(1);

        assert_eq!(p0.index(), 0);
        assert_eq!(p1.index(), 1);
        assert_eq!(format!("{}", p0), "Player 1");
    }

    #[test]
    fn test_player_ids_stop_at_max() {
        assert_eq!(PlayerId::all(0).count(), 0);
        assert_eq!(PlayerId::all(256).count(), MAX_PLAYERS);
        assert_eq!(PlayerId::all(300).last(), Some(PlayerId::new(254)));
    }

    #[test]
    fn test_total_fingers_is_wide() {
        let full = Hand::new(PlayerId::new(0), HandId::new(0), u32::MAX)
            .with_fingers(u32::MAX)
            .unwrap();
        let player = Player::from_hands(PlayerId::new(0), [full, full, full]);
        assert_eq!(player.total_fingers(), 3 * u64::from(u32::MAX));
    }

    #[test]
    fn test_new_player_hands() {
        let player = Player::new(PlayerId::new(1), 3, 5);
        assert_eq!(player.all_hands().len(), 3);
        for (i, hand) in player.all_hands().iter().enumerate() {
            assert_eq!(hand.id(), HandId::new(i as u8));
            assert_eq!(hand.player(), PlayerId::new(1));
            assert_eq!(hand.fingers(), 1);
        }
        assert!(player.is_active());
        assert_eq!(player.total_fingers(), 3);
    }

    #[test]
    fn test_update_hand_replaces_by_id() {
        let mut player = Player::new(PlayerId::new(0), 2, 5);
        let updated = player.all_hands()[1].with_fingers(3).unwrap();
        player.update_hand(updated).unwrap();

        assert_eq!(player.all_hands()[0].fingers(), 1);
        assert_eq!(player.all_hands()[1].fingers(), 3);
        assert_eq!(player.hand(HandId::new(1)), Some(&updated));
    }

    #[test]
    fn test_update_hand_unknown() {
        let mut player = Player::new(PlayerId::new(0), 2, 5);
        let stranger = Hand::new(PlayerId::new(1), HandId::new(0), 5);
        assert_eq!(
            player.update_hand(stranger),
            Err(GameError::UnknownHand(HandRef::new(PlayerId::new(1), HandId::new(0))))
        );

        let missing = Hand::new(PlayerId::new(0), HandId::new(7), 5);
        assert!(player.update_hand(missing).is_err());
        assert_eq!(player, Player::new(PlayerId::new(0), 2, 5));
    }

    #[test]
    fn test_active_hands_filters_dead() {
        let mut player = Player::new(PlayerId::new(0), 3, 5);
        player
            .update_hand(player.all_hands()[0].with_fingers(0).unwrap())
            .unwrap();
        player
            .update_hand(player.all_hands()[2].with_fingers(5).unwrap())
            .unwrap();

        let active = player.active_hands();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id(), HandId::new(1));
        assert!(player.is_active());

        player
            .update_hand(player.all_hands()[1].with_fingers(0).unwrap())
            .unwrap();
        assert!(player.active_hands().is_empty());
        assert!(!player.is_active());
    }
}
