//! Play Chopsticks in the terminal.
//!
//! Usage: chopsticks <players> <hands> <fingers> [--verbose]

use chopsticks::core::GameConfig;
use chopsticks::driver::TurnDriver;
use chopsticks::rules::{Game, GameResult};
use chopsticks::terminal::TerminalSource;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "chopsticks", about = "Play Chopsticks with any number of players and hands")]
struct Args {
    /// Number of players
    players: usize,

    /// Hands per player
    hands: usize,

    /// Fingers per hand; a hand reaching this many is out
    fingers: u32,

    /// Log every move
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    log(args.verbose);

    let config = GameConfig::new(args.players, args.hands, args.fingers);
    let mut game = match Game::new(config) {
        Ok(game) => game,
        Err(e) => {
            eprintln!("cannot start game: {}", e);
            std::process::exit(2);
        }
    };

    let mut driver = TurnDriver::new(TerminalSource);
    match driver.run(&mut game, usize::MAX) {
        Some(GameResult::Winner(player)) => println!("\n{} wins!", player),
        Some(GameResult::Draw) => println!("\nDraw: nobody has a hand left."),
        None => println!("\nGame abandoned after {} rounds.", game.round()),
    }
}

fn log(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )
    .expect("initialize logger");
}
