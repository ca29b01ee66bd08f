//! Command-line driver for the opponent core.
//!
//! Usage: `opponent_cli [difficulty] [fen]`
//!
//! Prints the selected move in coordinate notation, or `(none)` when the
//! position has no legal moves. Difficulty defaults to hard, the position
//! to the standard starting one.

use anyhow::{Context, Result};
use game_rules::{move_to_uci, CozyRules, Rules};
use minimax_engine::{Difficulty, Opponent};

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);

    let difficulty = match args.next() {
        Some(arg) => arg
            .parse::<Difficulty>()
            .map_err(anyhow::Error::msg)
            .context("expected easy, medium or hard")?,
        None => Difficulty::Hard,
    };

    let mut rules = match args.next() {
        Some(fen) => CozyRules::from_fen(&fen).context("could not load position")?,
        None => CozyRules::startpos(),
    };

    log::info!(
        "selecting for {:?} at {:?}",
        rules.side_to_move(),
        difficulty
    );

    let mut opponent = Opponent::new();
    match opponent.select_move(&mut rules, difficulty) {
        Some(mv) => println!("{}", move_to_uci(&mv)),
        None => println!("(none)"),
    }

    Ok(())
}
