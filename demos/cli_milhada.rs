//! CLI milhada example.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use milhada::{Game, GameOptions, MatchState, Phase, elimination_threshold};

fn main() {
    println!("Milhada CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let options = GameOptions::default();
    let game = Game::new(options, seed);

    let mut state = game.snapshot();

    loop {
        match state.phase {
            Phase::Betting => {
                print_table(&state);

                let Some(player) = state.human() else {
                    return;
                };
                if !player.active {
                    println!("You qualified out of the match. Spectating is not implemented; bye.");
                    return;
                }

                let min = state.min_bet.min(player.coins);
                let max = player.coins;
                let Some(bet) = prompt_i64(&format!("Hidden bet ({min}-{max}): ")) else {
                    return;
                };
                state = game.submit_bet(bet);
            }
            Phase::Guessing => {
                println!("Bets are in. Pot stays hidden until the reveal.");
                let Some(guess) = prompt_i64(&format!("Guess the pot (0-{}): ", state.max_guess))
                else {
                    return;
                };
                match game.submit_guess(guess) {
                    Ok(next) => state = next,
                    Err(err) => {
                        println!("Engine error: {err}");
                        return;
                    }
                }
            }
            Phase::Reveal => {
                print_reveal(&state);
                thread::sleep(Duration::from_millis(game.options.reveal_delay_ms));
                state = game.advance_round();
            }
            Phase::Ended => {
                print_reveal(&state);
                thread::sleep(Duration::from_millis(game.options.end_delay_ms));
                match state.winner_id {
                    Some(0) => println!("You win the match!"),
                    Some(id) => println!("Seat {id} wins the match."),
                    None => println!("The match ended without a winner."),
                }
                return;
            }
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn prompt_i64(prompt: &str) -> Option<i64> {
    loop {
        let input = prompt_line(prompt);
        if input == "q" || input == "quit" {
            return None;
        }
        match input.parse::<i64>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a number."),
        }
    }
}

fn print_table(state: &MatchState) {
    let threshold = elimination_threshold(state.active_count());

    println!("\n=== Round {} ===", state.round);
    if !state.message.is_empty() {
        println!("{}", state.message);
    }
    for player in &state.players {
        let marker = if player.is_human { "*" } else { " " };
        let status = if player.active { "in" } else { "out" };
        println!(
            "{} {} (seat {}): {} coins | hits {}/{} | {}",
            marker, player.name, player.id, player.coins, player.hits, threshold, status
        );
    }
}

fn print_reveal(state: &MatchState) {
    println!("\n{}", state.message);
    println!("Pot total: {}", state.pot_total);
    for player in state.active_players() {
        let bet = player.bet.map_or_else(|| "-".to_string(), |b| b.to_string());
        let guess = player
            .guess
            .map_or_else(|| "-".to_string(), |g| g.to_string());
        println!(
            "  {} (seat {}): bet {bet}, guessed {guess}",
            player.name, player.id
        );
    }
    if let Some(id) = state.winner_id {
        println!("Winner: seat {id}");
    }
}
