//! Plays one four-player game with jokers and prints every turn.
//!
//! ```text
//! cargo run --example self_play -- [seed]
//! ```

use killer::{FirstOption, Game, GameOptions, GameState};

fn main() -> Result<(), Box<dyn core::error::Error>> {
    let seed = std::env::args()
        .nth(1)
        .map(|arg| arg.parse::<u64>())
        .transpose()?
        .unwrap_or(42);

    let mut game = Game::new(GameOptions::default().with_wilds(2), seed);
    for _ in 0..4 {
        game.join()?;
    }
    game.deal()?;

    for player in game.seating() {
        if let Some(hand) = game.hand(player) {
            println!("player {player}: {hand}");
        }
    }

    let mut policy = FirstOption;
    loop {
        match game.state() {
            GameState::RoundOpen | GameState::RoundActive => {
                let record = game.play_turn(&mut policy)?;
                println!(
                    "player {} ---- {} ({})",
                    record.player, record.action, record.cards_left
                );
            }
            GameState::RoundOver => {
                println!("----");
                game.next_round()?;
            }
            GameState::WaitingForPlayers | GameState::GameOver => break,
        }
    }

    if let Some(result) = game.result() {
        println!(
            "standings {:?} after {} rounds, {} turns",
            result.standings, result.rounds, result.turns
        );
    }
    Ok(())
}
