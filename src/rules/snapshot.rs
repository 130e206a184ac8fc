//! Checked loading of saved games.
//!
//! `Game` serializes directly, but deserializes through `GameSnapshot`,
//! which mirrors the serialized shape field for field. Converting a
//! snapshot into a `Game` re-checks everything `Game::new` and the move
//! rules would otherwise guarantee: a valid configuration, one player per
//! seat in order, the configured number of hands with the configured
//! capacity, and finger counts within `0..=capacity`.

use im::Vector;
use serde::Deserialize;

use crate::core::{
    ActionRecord, GameConfig, Hand, HandId, HandRef, Player, PlayerId, SnapshotError,
};

use super::game::Game;

#[derive(Deserialize)]
pub struct GameSnapshot {
    config: GameConfig,
    players: Vec<PlayerSnapshot>,
    round: u64,
    history: Vector<ActionRecord>,
}

#[derive(Deserialize)]
struct PlayerSnapshot {
    id: PlayerId,
    hands: Vec<HandSnapshot>,
}

#[derive(Deserialize)]
struct HandSnapshot {
    player: PlayerId,
    id: HandId,
    fingers: u32,
    capacity: u32,
}

impl TryFrom<GameSnapshot> for Game {
    type Error = SnapshotError;

    fn try_from(snapshot: GameSnapshot) -> Result<Self, Self::Error> {
        let config = snapshot.config;
        config.validate()?;

        if snapshot.players.len() != config.player_count {
            return Err(SnapshotError::PlayerCount {
                expected: config.player_count,
                found: snapshot.players.len(),
            });
        }

        let players = snapshot
            .players
            .into_iter()
            .enumerate()
            .map(|(seat, player)| restore_player(&config, seat, player))
            .collect::<Result<Vec<_>, _>>()?;

        for (index, record) in snapshot.history.iter().enumerate() {
            if record.player.index() >= players.len() || record.round > snapshot.round {
                return Err(SnapshotError::History { index });
            }
        }

        Ok(Game::from_parts(config, players, snapshot.round, snapshot.history))
    }
}

fn restore_player(
    config: &GameConfig,
    seat: usize,
    player: PlayerSnapshot,
) -> Result<Player, SnapshotError> {
    if player.id.index() != seat {
        return Err(SnapshotError::PlayerOrder {
            seat,
            found: player.id,
        });
    }
    if player.hands.len() != config.hands_per_player {
        return Err(SnapshotError::HandCount {
            player: player.id,
            expected: config.hands_per_player,
            found: player.hands.len(),
        });
    }

    let hands = player
        .hands
        .iter()
        .zip(HandId::all(config.hands_per_player))
        .map(|(saved, slot)| {
            let at = HandRef::new(saved.player, saved.id);
            if saved.player != player.id || saved.id != slot || saved.capacity != config.capacity {
                return Err(SnapshotError::HandMismatch(at));
            }
            Hand::new(player.id, slot, config.capacity)
                .with_fingers(saved.fingers)
                .map_err(|_| SnapshotError::FingerCount {
                    hand: at,
                    fingers: saved.fingers,
                    capacity: config.capacity,
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Player::from_hands(player.id, hands))
}
