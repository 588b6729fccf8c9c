//! Game integration tests.

use milhada::{Game, GameOptions, GuessError, MatchState, Phase, elimination_threshold};

fn new_game(seed: u64) -> Game {
    Game::new(GameOptions::default(), seed)
}

fn human(state: &MatchState) -> &milhada::Player {
    state.human().expect("match always has a human seat")
}

#[test]
fn new_match_initial_state() {
    let game = new_game(42);
    let state = game.snapshot();

    assert_eq!(state.round, 1);
    assert_eq!(state.phase, Phase::Betting);
    assert_eq!(state.min_bet, 1);
    assert_eq!(state.pot_total, 0);
    assert_eq!(state.max_guess, 0);
    assert!(state.qualified_order.is_empty());
    assert_eq!(state.winner_id, None);

    assert_eq!(state.players.len(), 4);
    assert!(state.players[0].is_human);
    assert_eq!(state.players[0].id, 0);
    assert_eq!(state.players.iter().filter(|p| p.is_human).count(), 1);
    for player in &state.players {
        assert_eq!(player.coins, 3);
        assert_eq!(player.hits, 0);
        assert!(player.active);
        assert_eq!(player.bet, None);
        assert_eq!(player.guess, None);
    }
    assert!(state.message.contains("Ronda 1"));
}

#[test]
fn options_builder_sets_fields() {
    let options = GameOptions::default()
        .with_starting_coins(5)
        .with_ai_players(2)
        .with_guess_sample_attempts(50)
        .with_reveal_delay_ms(800)
        .with_end_delay_ms(0);

    assert_eq!(options.starting_coins, 5);
    assert_eq!(options.ai_players, 2);
    assert_eq!(options.guess_sample_attempts, 50);
    assert_eq!(options.reveal_delay_ms, 800);
    assert_eq!(options.end_delay_ms, 0);
}

#[test]
fn elimination_threshold_steps() {
    assert_eq!(elimination_threshold(4), 1);
    assert_eq!(elimination_threshold(3), 2);
    assert_eq!(elimination_threshold(2), 3);
}

#[test]
fn bet_clamped_to_available_coins() {
    let game = new_game(1);
    let state = game.submit_bet(99);

    let player = human(&state);
    assert_eq!(player.bet, Some(3));
    assert_eq!(player.coins, 0);
}

#[test]
fn bet_clamped_up_to_minimum() {
    let game = new_game(2);
    let state = game.submit_bet(-7);

    let player = human(&state);
    assert_eq!(player.bet, Some(1));
    assert_eq!(player.coins, 2);
}

#[test]
fn bets_deducted_and_pot_totals_fixed() {
    let game = new_game(3);
    let state = game.submit_bet(1);

    assert_eq!(state.phase, Phase::Guessing);
    assert!(state.message.contains("palpites"));

    let mut pot = 0;
    for player in state.active_players() {
        let bet = player.bet.expect("every active player has bet");
        assert!((1..=3).contains(&bet));
        assert_eq!(player.coins + bet, 3);
        pot += bet;
    }
    assert_eq!(state.pot_total, pot);
    // Everyone started with 3 coins, so the guess bound is the full table.
    assert_eq!(state.max_guess, 12);
}

#[test]
fn guess_clamped_negative_to_zero() {
    let game = new_game(4);
    game.submit_bet(1);
    let state = game.submit_guess(-5).unwrap();

    assert_eq!(human(&state).guess, Some(0));
}

#[test]
fn guess_clamped_to_max_guess() {
    let game = new_game(5);
    game.submit_bet(1);
    let state = game.submit_guess(9999).unwrap();

    assert_eq!(human(&state).guess, Some(12));
}

#[test]
fn guesses_distinct_and_in_range() {
    let game = new_game(6);
    game.submit_bet(2);
    let state = game.submit_guess(7).unwrap();

    let guesses: Vec<u32> = state
        .active_players()
        .map(|p| p.guess.expect("every active player has guessed"))
        .collect();

    for (index, guess) in guesses.iter().enumerate() {
        assert!(*guess <= state.max_guess);
        assert!(!guesses[index + 1..].contains(guess), "duplicate guess");
    }
    assert!(
        state
            .active_players()
            .filter(|p| p.guess == Some(state.pot_total))
            .count()
            <= 1
    );
}

#[test]
fn out_of_phase_submissions_ignored() {
    let game = new_game(7);

    // Guess during betting: no state change.
    let before = game.snapshot();
    let after = game.submit_guess(5).unwrap();
    assert_eq!(before, after);

    // Bet during guessing: no state change either.
    let before = game.submit_bet(1);
    assert_eq!(before.phase, Phase::Guessing);
    let after = game.submit_bet(1);
    assert_eq!(before, after);

    // Advancing is only legal from the reveal.
    let after = game.advance_round();
    assert_eq!(before, after);
}

#[test]
fn first_hit_with_four_active_eliminates_winner() {
    let game = new_game(8);
    let state = game.submit_bet(1);

    // The pot is visible in the snapshot, so the human can force a hit;
    // AI guesses are distinct from it by construction.
    let state = game.submit_guess(i64::from(state.pot_total)).unwrap();

    assert_eq!(state.phase, Phase::Reveal);
    let player = human(&state);
    assert_eq!(player.hits, 1);
    assert!(!player.active);
    assert_eq!(state.qualified_order, vec![0]);
    assert_eq!(state.winner_id, None);
    assert_eq!(state.active_count(), 3);
    assert!(state.message.contains("saiu do jogo"));
}

#[test]
fn second_round_opens_with_zero_minimum_and_cleared_fields() {
    let game = new_game(9);
    let state = game.submit_bet(1);
    game.submit_guess(i64::from(state.pot_total)).unwrap();

    let state = game.advance_round();
    assert_eq!(state.round, 2);
    assert_eq!(state.phase, Phase::Betting);
    assert_eq!(state.min_bet, 0);
    assert_eq!(state.pot_total, 0);
    assert_eq!(state.max_guess, 0);
    for player in &state.players {
        assert_eq!(player.bet, None);
        assert_eq!(player.guess, None);
    }
}

#[test]
fn inactive_human_submissions_ignored() {
    let game = new_game(10);
    let state = game.submit_bet(1);
    game.submit_guess(i64::from(state.pot_total)).unwrap();
    game.advance_round();

    // The human qualified out in round 1; the engine waits silently.
    let before = game.snapshot();
    assert_eq!(before.phase, Phase::Betting);
    let after = game.submit_bet(2);
    assert_eq!(before, after);
}

#[test]
fn hits_accumulate_without_elimination_below_threshold() {
    let options = GameOptions::default().with_ai_players(1);
    let game = Game::new(options, 11);

    let state = game.submit_bet(1);
    let state = game.submit_guess(i64::from(state.pot_total)).unwrap();

    // Two active players: threshold is 3, one hit keeps everyone seated.
    assert_eq!(state.phase, Phase::Reveal);
    let player = human(&state);
    assert_eq!(player.hits, 1);
    assert!(player.active);
    assert!(state.qualified_order.is_empty());
    assert!(state.message.contains("Acertos: 1/3"));
}

#[test]
fn two_player_match_runs_to_victory() {
    let options = GameOptions::default().with_ai_players(1);
    let game = Game::new(options, 12);

    // Round 1 requires a coin; afterwards the human sits on its coins and
    // keeps guessing the visible pot until the third hit wins the match.
    let mut state = game.submit_bet(1);
    for round in 1..=3_u32 {
        state = game.submit_guess(i64::from(state.pot_total)).unwrap();
        assert_eq!(human(&state).hits, round);
        if round < 3 {
            state = game.advance_round();
            assert_eq!(state.phase, Phase::Betting);
            state = game.submit_bet(0);
        }
    }

    assert_eq!(state.phase, Phase::Ended);
    assert_eq!(state.winner_id, Some(0));
    assert!(state.message.contains("Vitória"));
    assert_eq!(game.winner_id(), Some(0));

    // Terminal: nothing moves anymore.
    let before = game.snapshot();
    assert_eq!(game.submit_bet(1), before);
    assert_eq!(game.submit_guess(0).unwrap(), before);
    assert_eq!(game.advance_round(), before);
}

#[test]
fn no_match_reveal_keeps_totals_and_ends_solo_match() {
    let options = GameOptions::default().with_ai_players(0);
    let game = Game::new(options, 13);

    let state = game.submit_bet(2);
    assert_eq!(state.pot_total, 2);
    assert_eq!(state.max_guess, 3);

    let state = game.submit_guess(3).unwrap();
    assert_eq!(state.phase, Phase::Reveal);
    assert!(state.message.contains("Ninguém acertou"));
    let player = human(&state);
    assert_eq!(player.hits, 0);
    assert!(player.active);
    assert_eq!(player.coins, 1);

    // A single remaining player wins by default when the round advances.
    let state = game.advance_round();
    assert_eq!(state.phase, Phase::Ended);
    assert_eq!(state.winner_id, Some(0));
}

#[test]
fn exhausted_unique_guesses_fail_hard() {
    // With zero coins the whole table bets 0, the guess range collapses to
    // {0}, and the second guesser has no unique value left.
    let options = GameOptions::default().with_starting_coins(0);
    let game = Game::new(options, 14);

    let state = game.submit_bet(0);
    assert_eq!(state.pot_total, 0);
    assert_eq!(state.max_guess, 0);

    assert_eq!(
        game.submit_guess(0).unwrap_err(),
        GuessError::LogicInvariantViolation
    );
}

#[test]
fn snapshots_are_detached_copies() {
    let game = new_game(15);

    let mut copy = game.snapshot();
    copy.players[0].coins = 999;
    copy.round = 99;

    let fresh = game.snapshot();
    assert_eq!(fresh.players[0].coins, 3);
    assert_eq!(fresh.round, 1);
    assert_eq!(fresh, game.snapshot());
}
