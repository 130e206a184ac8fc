//! Game configuration.
//!
//! A game is shaped by three numbers: how many players, how many hands
//! each, and the finger count at which a hand resets. The classic game is
//! two players with two hands of five fingers.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Most players a game can seat (`PlayerId` is a `u8`).
pub const MAX_PLAYERS: usize = 255;

/// Most hands a player can have (`HandId` is a `u8`).
pub const MAX_HANDS: usize = 255;

/// Largest finger count a hand may reset at. Keeps tap sums and the
/// number of possible splits small.
pub const MAX_CAPACITY: u32 = 1_000;

/// Shape of a game, fixed at creation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of players, in turn order.
    pub player_count: usize,

    /// Hands per player. Never changes during a game.
    pub hands_per_player: usize,

    /// Finger count at which a hand wraps to 0 when tapped.
    pub capacity: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_count: 2,
            hands_per_player: 2,
            capacity: 5,
        }
    }
}

impl GameConfig {
    #[must_use]
    pub fn new(player_count: usize, hands_per_player: usize, capacity: u32) -> Self {
        Self {
            player_count,
            hands_per_player,
            capacity,
        }
    }

    #[must_use]
    pub fn with_players(mut self, count: usize) -> Self {
        self.player_count = count;
        self
    }

    #[must_use]
    pub fn with_hands(mut self, count: usize) -> Self {
        self.hands_per_player = count;
        self
    }

    #[must_use]
    pub fn with_capacity(mut self, capacity: u32) -> Self {
        self.capacity = capacity;
        self
    }

    /// Check the configuration can build a game.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.player_count {
            0 => return Err(ConfigError::NoPlayers),
            n if n > MAX_PLAYERS => {
                return Err(ConfigError::TooManyPlayers {
                    requested: n,
                    max: MAX_PLAYERS,
                })
            }
            _ => {}
        }
        match self.hands_per_player {
            0 => return Err(ConfigError::NoHands),
            n if n > MAX_HANDS => {
                return Err(ConfigError::TooManyHands {
                    requested: n,
                    max: MAX_HANDS,
                })
            }
            _ => {}
        }
        if self.capacity < 2 {
            return Err(ConfigError::CapacityTooSmall(self.capacity));
        }
        if self.capacity > MAX_CAPACITY {
            return Err(ConfigError::CapacityTooLarge {
                requested: self.capacity,
                max: MAX_CAPACITY,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.player_count, 2);
        assert_eq!(config.hands_per_player, 2);
        assert_eq!(config.capacity, 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = GameConfig::default()
            .with_players(4)
            .with_hands(3)
            .with_capacity(10);

        assert_eq!(config, GameConfig::new(4, 3, 10));
    }

    #[test]
    fn test_validate_rejects_bad_shapes() {
        assert_eq!(GameConfig::new(0, 2, 5).validate(), Err(ConfigError::NoPlayers));
        assert_eq!(GameConfig::new(2, 0, 5).validate(), Err(ConfigError::NoHands));
        assert_eq!(
            GameConfig::new(2, 2, 1).validate(),
            Err(ConfigError::CapacityTooSmall(1))
        );
        assert_eq!(
            GameConfig::new(256, 2, 5).validate(),
            Err(ConfigError::TooManyPlayers { requested: 256, max: 255 })
        );
        assert_eq!(
            GameConfig::new(2, 300, 5).validate(),
            Err(ConfigError::TooManyHands { requested: 300, max: 255 })
        );
    }

    #[test]
    fn test_capacity_limits() {
        assert!(GameConfig::new(1, 1, 2).validate().is_ok());
        assert!(GameConfig::new(2, 2, MAX_CAPACITY).validate().is_ok());
        assert_eq!(
            GameConfig::new(2, 2, MAX_CAPACITY + 1).validate(),
            Err(ConfigError::CapacityTooLarge { requested: 1_001, max: 1_000 })
        );
        assert_eq!(
            GameConfig::new(2, 1, u32::MAX).validate(),
            Err(ConfigError::CapacityTooLarge { requested: u32::MAX, max: MAX_CAPACITY })
        );
    }

    #[test]
    fn test_serialization() {
        let config = GameConfig::new(3, 2, 7);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
