//! Plain-text rendering of a game for the terminal.

use crate::core::Hand;
use crate::rules::Game;

/// Render one hand as a row of raised fingers, e.g. `|||..` or `xxxxx`
/// when the hand is out of play.
#[must_use]
pub fn render_hand(hand: &Hand) -> String {
    let up = hand.fingers() as usize;
    let capacity = hand.capacity() as usize;
    if hand.is_active() {
        format!("{}{}", "|".repeat(up), ".".repeat(capacity - up))
    } else {
        "x".repeat(capacity)
    }
}

/// Render the whole table. Rounds are shown 1-based and the player on
/// turn is marked with `>`.
#[must_use]
pub fn render_board(game: &Game) -> String {
    let current = game.current_player().id();
    let mut out = format!("Round {}\n", game.round() + 1);

    for player in game.players() {
        let marker = if player.id() == current { '>' } else { ' ' };
        let status = if player.is_active() { "" } else { " (out)" };
        out.push_str(&format!("{} {}{}:", marker, player.id(), status));
        for hand in player.all_hands() {
            out.push_str(&format!("  {} [{}]", hand.fingers(), render_hand(hand)));
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameConfig, HandId, HandRef, PlayerId};

    #[test]
    fn test_render_hand() {
        let hand = Hand::new(PlayerId::new(0), HandId::new(0), 5);
        assert_eq!(render_hand(&hand), "|....");
        assert_eq!(render_hand(&hand.with_fingers(3).unwrap()), "|||..");
        assert_eq!(render_hand(&hand.with_fingers(0).unwrap()), "xxxxx");
    }

    #[test]
    fn test_render_board() {
        let mut game = Game::new(GameConfig::default()).unwrap();
        game.tap(
            HandRef::new(PlayerId::new(0), HandId::new(0)),
            HandRef::new(PlayerId::new(1), HandId::new(1)),
        )
        .unwrap();
        game.next_player();

        assert_eq!(
            render_board(&game),
            "Round 2\n  Player 1:  1 [|....]  1 [|....]\n> Player 2:  1 [|....]  2 [||...]\n"
        );
    }

    #[test]
    fn test_render_board_marks_eliminated() {
        let mut game = Game::new(GameConfig::new(2, 1, 2)).unwrap();
        game.tap(
            HandRef::new(PlayerId::new(0), HandId::new(0)),
            HandRef::new(PlayerId::new(1), HandId::new(0)),
        )
        .unwrap();

        assert_eq!(
            render_board(&game),
            "Round 1\n> Player 1:  1 [|.]\n  Player 2 (out):  0 [xx]\n"
        );
    }
}
