//! The single gate every action passes before it touches game state.

use crate::core::{Action, GameError, TargetViolation};

use super::game::Game;

impl Game {
    /// Check `action` is legal for the player on turn.
    ///
    /// Checks run in a fixed order, so the first violated rule is the one
    /// reported:
    /// 1. the game is still running
    /// 2. both hands exist
    /// 3. the source belongs to the current player and is active
    /// 4. tap: the target is an opponent's active hand
    /// 5. split: the target is another of the same player's hands, and the
    ///    transfer keeps both hands within `0..=capacity`
    pub fn validate(&self, action: &Action) -> Result<(), GameError> {
        if self.is_game_over() {
            return Err(GameError::GameOver);
        }

        let source = self
            .hand(action.source())
            .ok_or(GameError::UnknownHand(action.source()))?;
        let target = self
            .hand(action.target())
            .ok_or(GameError::UnknownHand(action.target()))?;

        if source.player() != self.current_player().id() {
            return Err(TargetViolation::NotActingPlayer.into());
        }
        if !source.is_active() {
            return Err(TargetViolation::DeadSource.into());
        }

        match *action {
            Action::Tap { .. } => {
                if target.player() == source.player() {
                    return Err(TargetViolation::SelfTap.into());
                }
                if !target.is_active() {
                    return Err(TargetViolation::DeadTarget.into());
                }
            }
            Action::Split { amount, .. } => {
                if target.player() != source.player() {
                    return Err(TargetViolation::CrossPlayerSplit.into());
                }
                if target.id() == source.id() {
                    return Err(TargetViolation::SameHand.into());
                }
                if amount == 0 {
                    return Err(GameError::EmptyTransfer);
                }
                if amount > source.fingers() {
                    return Err(GameError::InsufficientFingers {
                        available: source.fingers(),
                        requested: amount,
                    });
                }
                match target.fingers().checked_add(amount) {
                    Some(landed) if landed <= target.capacity() => {}
                    landed => {
                        return Err(GameError::InvalidFingerCount {
                            fingers: landed.unwrap_or(u32::MAX),
                            capacity: target.capacity(),
                        });
                    }
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::core::{
        Action, GameConfig, GameError, HandId, HandRef, PlayerId, TargetViolation, MAX_CAPACITY,
    };
    use crate::rules::Game;

    fn at(player: u8, hand: u8) -> HandRef {
        HandRef::new(PlayerId::new(player), HandId::new(hand))
    }

    fn game() -> Game {
        Game::new(GameConfig::new(3, 2, 5)).unwrap()
    }

    #[test]
    fn test_fresh_tap_is_valid() {
        assert_eq!(game().validate(&Action::tap(at(0, 0), at(1, 1))), Ok(()));
    }

    #[test]
    fn test_unknown_hands() {
        let g = game();
        assert_eq!(
            g.validate(&Action::tap(at(0, 5), at(1, 0))),
            Err(GameError::UnknownHand(at(0, 5)))
        );
        assert_eq!(
            g.validate(&Action::tap(at(0, 0), at(9, 0))),
            Err(GameError::UnknownHand(at(9, 0)))
        );
    }

    #[test]
    fn test_source_must_be_on_turn() {
        assert_eq!(
            game().validate(&Action::tap(at(1, 0), at(2, 0))),
            Err(GameError::InvalidActionTarget(TargetViolation::NotActingPlayer))
        );
    }

    #[test]
    fn test_self_tap_rejected() {
        assert_eq!(
            game().validate(&Action::tap(at(0, 0), at(0, 1))),
            Err(GameError::InvalidActionTarget(TargetViolation::SelfTap))
        );
    }

    #[test]
    fn test_split_shape_rejections() {
        let g = game();
        assert_eq!(
            g.validate(&Action::split(at(0, 0), at(1, 0), 1)),
            Err(GameError::InvalidActionTarget(TargetViolation::CrossPlayerSplit))
        );
        assert_eq!(
            g.validate(&Action::split(at(0, 0), at(0, 0), 1)),
            Err(GameError::InvalidActionTarget(TargetViolation::SameHand))
        );
        assert_eq!(
            g.validate(&Action::split(at(0, 0), at(0, 1), 0)),
            Err(GameError::EmptyTransfer)
        );
        assert_eq!(
            g.validate(&Action::split(at(0, 0), at(0, 1), 2)),
            Err(GameError::InsufficientFingers { available: 1, requested: 2 })
        );
        assert_eq!(g.validate(&Action::split(at(0, 0), at(0, 1), 1)), Ok(()));
    }

    #[test]
    fn test_split_overshoot_at_max_capacity() {
        let mut value = serde_json::to_value(Game::new(GameConfig::new(2, 2, MAX_CAPACITY)).unwrap())
            .unwrap();
        value["players"][0]["hands"][0]["fingers"] = serde_json::json!(600);
        value["players"][0]["hands"][1]["fingers"] = serde_json::json!(500);
        let g: Game = serde_json::from_value(value).unwrap();

        assert_eq!(g.validate(&Action::split(at(0, 0), at(0, 1), 500)), Ok(()));
        assert_eq!(
            g.validate(&Action::split(at(0, 0), at(0, 1), 600)),
            Err(GameError::InvalidFingerCount { fingers: 1_100, capacity: MAX_CAPACITY })
        );
        assert_eq!(
            g.validate(&Action::split(at(0, 0), at(0, 1), u32::MAX)),
            Err(GameError::InsufficientFingers { available: 600, requested: u32::MAX })
        );
    }
}
