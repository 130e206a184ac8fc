//! Interactive terminal player.
//!
//! Prints the table each turn and asks for a move with `dialoguer`
//! prompts. Only moves with at least one legal option are offered, but the
//! hands themselves are checked by the engine, which may still refuse a
//! split that overflows.

use dialoguer::{Input, Select};

use crate::core::{Action, ActionKind, GameError, Hand};
use crate::driver::{render_board, ActionSource};
use crate::rules::Game;

/// Reads moves from the terminal.
#[derive(Clone, Copy, Debug, Default)]
pub struct TerminalSource;

impl TerminalSource {
    fn prompt(&self, game: &Game) -> Result<Option<Action>, dialoguer::Error> {
        let me = game.current_player();
        let kinds = game.legal_kinds();
        if kinds.is_empty() {
            return Ok(None);
        }
        let labels: Vec<String> = kinds.iter().map(ToString::to_string).collect();
        let choice = Select::new()
            .with_prompt(format!("{}, choose an action", me.id()))
            .items(labels.as_slice())
            .default(0)
            .interact()?;

        match kinds.get(choice) {
            Some(ActionKind::Tap) => {
                let Some(source) = pick("Tap with", &me.active_hands())? else {
                    return Ok(None);
                };
                let targets: Vec<Hand> = game
                    .players()
                    .iter()
                    .filter(|p| p.id() != me.id())
                    .flat_map(|p| p.active_hands())
                    .collect();
                let Some(target) = pick("Tap which hand", &targets)? else {
                    return Ok(None);
                };
                Ok(Some(Action::tap(source, target)))
            }
            Some(ActionKind::Split) => {
                let Some(source) = pick("Split from", &me.active_hands())? else {
                    return Ok(None);
                };
                let targets: Vec<Hand> = me
                    .all_hands()
                    .iter()
                    .filter(|h| h.id() != source.id())
                    .copied()
                    .collect();
                let Some(target) = pick("Split onto", &targets)? else {
                    return Ok(None);
                };
                let available = source.fingers();
                let amount = Input::<u32>::new()
                    .with_prompt(format!("Fingers to move (1-{})", available))
                    .validate_with(move |n: &u32| -> Result<(), String> {
                        if (1..=available).contains(n) {
                            Ok(())
                        } else {
                            Err(format!("Enter a number from 1 to {}", available))
                        }
                    })
                    .interact_text()?;
                Ok(Some(Action::split(source, target, amount)))
            }
            None => Ok(None),
        }
    }
}

impl ActionSource for TerminalSource {
    fn choose(&mut self, game: &Game) -> Option<Action> {
        println!("\n{}", render_board(game));
        match self.prompt(game) {
            Ok(action) => action,
            Err(e) => {
                log::error!("input error: {}", e);
                None
            }
        }
    }

    fn rejected(&mut self, _action: &Action, error: &GameError) {
        println!("Not allowed: {}. Try again.", error);
    }
}

fn pick(prompt: &str, hands: &[Hand]) -> Result<Option<Hand>, dialoguer::Error> {
    if hands.is_empty() {
        return Ok(None);
    }
    let labels: Vec<String> = hands
        .iter()
        .map(|h| format!("{} {} ({} up)", h.player(), h.id(), h.fingers()))
        .collect();
    let choice = Select::new()
        .with_prompt(prompt)
        .items(labels.as_slice())
        .default(0)
        .interact()?;
    Ok(hands.get(choice).copied())
}
