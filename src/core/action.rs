//! Action representation.
//!
//! There are two moves:
//! - **Tap**: add one of your active hands to an opponent's active hand
//! - **Split**: move fingers from one of your active hands to another of
//!   your hands
//!
//! Actions address hands by `HandRef`; the engine reads the current hand
//! values when it applies them.

use serde::{Deserialize, Serialize};

use super::hand::HandRef;
use super::player::PlayerId;

/// The kind of move, chosen before its hands are picked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    Tap,
    Split,
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActionKind::Tap => write!(f, "Tap"),
            ActionKind::Split => write!(f, "Split"),
        }
    }
}

/// A complete move.
///
/// ```
/// use chopsticks::core::{Action, ActionKind, HandId, HandRef, PlayerId};
///
/// let mine = HandRef::new(PlayerId::new(0), HandId::new(0));
/// let theirs = HandRef::new(PlayerId::new(1), HandId::new(0));
///
/// let tap = Action::tap(mine, theirs);
/// assert_eq!(tap.kind(), ActionKind::Tap);
/// assert_eq!(tap.source(), mine);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Add `source`'s fingers to `target`, modulo capacity.
    Tap { source: HandRef, target: HandRef },

    /// Move `amount` fingers from `source` to `target`.
    Split {
        source: HandRef,
        target: HandRef,
        amount: u32,
    },
}

impl Action {
    #[must_use]
    pub fn tap(source: impl Into<HandRef>, target: impl Into<HandRef>) -> Self {
        Action::Tap {
            source: source.into(),
            target: target.into(),
        }
    }

    #[must_use]
    pub fn split(source: impl Into<HandRef>, target: impl Into<HandRef>, amount: u32) -> Self {
        Action::Split {
            source: source.into(),
            target: target.into(),
            amount,
        }
    }

    #[must_use]
    pub fn kind(&self) -> ActionKind {
        match self {
            Action::Tap { .. } => ActionKind::Tap,
            Action::Split { .. } => ActionKind::Split,
        }
    }

    #[must_use]
    pub fn source(&self) -> HandRef {
        match *self {
            Action::Tap { source, .. } | Action::Split { source, .. } => source,
        }
    }

    #[must_use]
    pub fn target(&self) -> HandRef {
        match *self {
            Action::Tap { target, .. } | Action::Split { target, .. } => target,
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Tap { source, target } => write!(f, "{} taps {}", source, target),
            Action::Split {
                source,
                target,
                amount,
            } => write!(f, "{} moves {} to {}", source, amount, target.hand),
        }
    }
}

/// Record of an applied action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActionRecord {
    /// Round the action was played in.
    pub round: u64,

    /// Player who acted.
    pub player: PlayerId,

    pub action: Action,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::hand::HandId;

    fn at(player: u8, hand: u8) -> HandRef {
        HandRef::new(PlayerId::new(player), HandId::new(hand))
    }

    #[test]
    fn test_accessors() {
        let split = Action::split(at(0, 0), at(0, 1), 2);
        assert_eq!(split.kind(), ActionKind::Split);
        assert_eq!(split.source(), at(0, 0));
        assert_eq!(split.target(), at(0, 1));
    }

    #[test]
    fn test_display() {
        assert_eq!(
            format!("{}", Action::tap(at(0, 0), at(1, 1))),
            "Player 1 Hand 1 taps Player 2 Hand 2"
        );
        assert_eq!(
            format!("{}", Action::split(at(2, 1), at(2, 0), 3)),
            "Player 3 Hand 2 moves 3 to Hand 1"
        );
    }

    #[test]
    fn test_serialization() {
        let record = ActionRecord {
            round: 4,
            player: PlayerId::new(1),
            action: Action::tap(at(1, 0), at(0, 0)),
        };
        let json = serde_json::to_string(&record).unwrap();
        let deserialized: ActionRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, deserialized);
    }
}
