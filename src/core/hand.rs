//! Hands: the finger-counting unit of the game.
//!
//! ## Hand
//!
//! An immutable value holding a finger count and a capacity. A hand is
//! *active* while `0 < fingers < capacity`; at either bound it is dead.
//! Every change produces a new `Hand`, which the owning `Player` stores
//! in place of the old one.
//!
//! ## HandRef
//!
//! Global address of a hand: owning player plus hand identifier.

use serde::{Deserialize, Serialize};

use super::config::MAX_HANDS;
use super::error::GameError;
use super::player::PlayerId;

/// Hand identifier, unique within its player.
///
/// Indices are 0-based; `Display` shows them 1-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct HandId(pub u8);

impl HandId {
    /// Create a new hand ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw hand index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all hand IDs for a player with `hand_count` hands.
    ///
    /// Stops at `MAX_HANDS`, the number of distinct IDs.
    pub(crate) fn all(hand_count: usize) -> impl Iterator<Item = HandId> {
        (0..hand_count.min(MAX_HANDS)).map(|i| HandId(i as u8))
    }
}

impl std::fmt::Display for HandId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Hand {}", self.index() + 1)
    }
}

/// Address of one hand in the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct HandRef {
    pub player: PlayerId,
    pub hand: HandId,
}

impl HandRef {
    #[must_use]
    pub const fn new(player: PlayerId, hand: HandId) -> Self {
        Self { player, hand }
    }
}

impl std::fmt::Display for HandRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.player, self.hand)
    }
}

impl From<Hand> for HandRef {
    fn from(hand: Hand) -> Self {
        hand.key()
    }
}

impl From<&Hand> for HandRef {
    fn from(hand: &Hand) -> Self {
        hand.key()
    }
}

/// One hand's finger count and capacity.
///
/// ## Example
///
/// ```
/// use chopsticks::core::{Hand, HandId, PlayerId};
///
/// let a = Hand::new(PlayerId::new(0), HandId::new(0), 5);
/// let b = Hand::new(PlayerId::new(1), HandId::new(0), 5).with_fingers(4).unwrap();
///
/// // 4 + 1 wraps to 0 and the hand dies
/// let hit = a.tap(&b);
/// assert_eq!(hit.fingers(), 0);
/// assert!(!hit.is_active());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Hand {
    player: PlayerId,
    id: HandId,
    fingers: u32,
    capacity: u32,
}

impl Hand {
    /// Fingers every hand starts the game with.
    pub const STARTING_FINGERS: u32 = 1;

    /// Create a fresh hand with one finger up.
    ///
    /// `capacity` comes from a validated `GameConfig` and is at least 2.
    #[must_use]
    pub const fn new(player: PlayerId, id: HandId, capacity: u32) -> Self {
        Self {
            player,
            id,
            fingers: Self::STARTING_FINGERS,
            capacity,
        }
    }

    #[must_use]
    pub const fn player(&self) -> PlayerId {
        self.player
    }

    #[must_use]
    pub const fn id(&self) -> HandId {
        self.id
    }

    /// Global address of this hand.
    #[must_use]
    pub const fn key(&self) -> HandRef {
        HandRef::new(self.player, self.id)
    }

    #[must_use]
    pub const fn fingers(&self) -> u32 {
        self.fingers
    }

    /// Finger count at which the hand resets.
    #[must_use]
    pub const fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Check if the hand is still in play.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        0 < self.fingers && self.fingers < self.capacity
    }

    /// Return a copy of this hand holding `fingers` fingers.
    ///
    /// Fails with `InvalidFingerCount` outside `0..=capacity`.
    pub fn with_fingers(&self, fingers: u32) -> Result<Hand, GameError> {
        if fingers > self.capacity {
            return Err(GameError::InvalidFingerCount {
                fingers,
                capacity: self.capacity,
            });
        }
        Ok(Hand { fingers, ..*self })
    }

    /// Tap `target` with this hand.
    ///
    /// The target receives `(target + self) mod capacity` fingers. The
    /// result is always in range, so this never fails. `self` is unchanged
    /// and the caller stores the returned hand.
    #[must_use]
    pub fn tap(&self, target: &Hand) -> Hand {
        let sum = u64::from(target.fingers) + u64::from(self.fingers);
        Hand {
            // Below `target.capacity`, so it fits back in a u32
            fingers: (sum % u64::from(target.capacity)) as u32,
            ..*target
        }
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}/{}", self.id, self.fingers, self.capacity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hand(player: u8, id: u8, fingers: u32) -> Hand {
        Hand::new(PlayerId::new(player), HandId::new(id), 5)
            .with_fingers(fingers)
            .unwrap()
    }

    #[test]
    fn test_new_hand_starts_with_one_finger() {
        let h = Hand::new(PlayerId::new(2), HandId::new(1), 5);
        assert_eq!(h.fingers(), 1);
        assert_eq!(h.capacity(), 5);
        assert_eq!(h.key(), HandRef::new(PlayerId::new(2), HandId::new(1)));
        assert!(h.is_active());
    }

    #[test]
    fn test_active_bounds() {
        assert!(!hand(0, 0, 0).is_active());
        assert!(hand(0, 0, 1).is_active());
        assert!(hand(0, 0, 4).is_active());
        assert!(!hand(0, 0, 5).is_active());
    }

    #[test]
    fn test_with_fingers_rejects_over_capacity() {
        let h = hand(0, 0, 1);
        assert_eq!(
            h.with_fingers(6),
            Err(GameError::InvalidFingerCount { fingers: 6, capacity: 5 })
        );
        assert_eq!(h.with_fingers(5).unwrap().fingers(), 5);
    }

    #[test]
    fn test_with_fingers_keeps_identity() {
        let h = hand(1, 1, 1).with_fingers(3).unwrap();
        assert_eq!(h.player(), PlayerId::new(1));
        assert_eq!(h.id(), HandId::new(1));
        assert_eq!(h.capacity(), 5);
    }

    #[test]
    fn test_tap_adds_modulo_capacity() {
        let source = hand(0, 0, 3);
        let target = hand(1, 0, 4);
        let hit = source.tap(&target);
        assert_eq!(hit.fingers(), 2);
        assert_eq!(hit.key(), target.key());
        assert_eq!(source.fingers(), 3);
    }

    #[test]
    fn test_tap_wrap_to_zero_kills() {
        let hit = hand(0, 0, 1).tap(&hand(1, 0, 4));
        assert_eq!(hit.fingers(), 0);
        assert!(!hit.is_active());
    }

    #[test]
    fn test_dead_source_is_noop() {
        let target = hand(1, 0, 2);
        assert_eq!(hand(0, 0, 0).tap(&target), target);
    }

    #[test]
    fn test_tap_near_u32_max_does_not_overflow() {
        let big = |player, fingers| {
            Hand::new(PlayerId::new(player), HandId::new(0), u32::MAX)
                .with_fingers(fingers)
                .unwrap()
        };
        let hit = big(0, u32::MAX - 1).tap(&big(1, u32::MAX - 1));
        assert_eq!(hit.fingers(), u32::MAX - 2);
        assert!(hit.is_active());
    }

    #[test]
    fn test_hand_ids_stop_at_max() {
        assert_eq!(HandId::all(3).count(), 3);
        assert_eq!(HandId::all(300).count(), MAX_HANDS);
        assert_eq!(HandId::all(300).last(), Some(HandId::new(254)));
    }

    #[test]
    fn test_display_is_one_based() {
        assert_eq!(format!("{}", HandId::new(0)), "Hand 1");
        assert_eq!(format!("{}", hand(0, 1, 3)), "Hand 2: 3/5");
    }
}
