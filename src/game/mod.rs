//! Game engine and state management.

use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::sync::Mutex;

use crate::options::GameOptions;
use crate::player::Player;

mod bet;
mod guess;
mod round;
pub mod state;

pub use state::{MatchState, Phase};

/// Correct guesses a player needs, at the given active-player count, to be
/// eliminated from the round (or to win outright in the 2-player endgame).
///
/// The 1/2/3 steps are fixed game-design constants.
#[must_use]
pub const fn elimination_threshold(active_count: usize) -> u32 {
    if active_count > 3 {
        1
    } else if active_count == 3 {
        2
    } else {
        3
    }
}

/// A milhada match engine that manages betting, guessing, and elimination.
///
/// The engine owns the match state and the AI randomness. It is driven by
/// the human player's submissions ([`submit_bet`](Self::submit_bet) and
/// [`submit_guess`](Self::submit_guess)) plus an external round-advance
/// trigger ([`advance_round`](Self::advance_round)); every operation returns
/// a fresh [`MatchState`] snapshot for rendering.
pub struct Game {
    /// Game options.
    pub options: GameOptions,
    /// Current match state.
    state: Mutex<MatchState>,
    /// Random number generator driving AI bets and guesses.
    rng: Mutex<ChaCha8Rng>,
}

impl Game {
    /// Creates a new match with the given seed.
    ///
    /// The match starts in round 1 with the betting phase open and every
    /// player holding [`GameOptions::starting_coins`].
    ///
    /// # Example
    ///
    /// ```
    /// use milhada::{Game, GameOptions, Phase};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.phase(), Phase::Betting);
    /// assert_eq!(game.round(), 1);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let rng = ChaCha8Rng::seed_from_u64(seed);

        let mut players = Vec::with_capacity(1 + options.ai_players as usize);
        players.push(Player::new(
            0,
            "Player".to_string(),
            true,
            options.starting_coins,
        ));
        for seat in 1..=options.ai_players {
            players.push(Player::new(
                seat,
                "Ai".to_string(),
                false,
                options.starting_coins,
            ));
        }

        let mut state = MatchState {
            round: 1,
            phase: Phase::Betting,
            min_bet: 1,
            pot_total: 0,
            max_guess: 0,
            message: String::new(),
            qualified_order: Vec::new(),
            winner_id: None,
            players,
        };
        Self::start_bet_phase(&mut state);

        Self {
            options,
            state: Mutex::new(state),
            rng: Mutex::new(rng),
        }
    }

    /// Opens the betting phase for the current round.
    ///
    /// Clears every player's bet and guess, zeroes the pot bounds, and sets
    /// the minimum bet (1 only on round 1).
    fn start_bet_phase(state: &mut MatchState) {
        for player in &mut state.players {
            player.bet = None;
            player.guess = None;
        }
        state.pot_total = 0;
        state.max_guess = 0;

        state.phase = Phase::Betting;
        state.min_bet = u32::from(state.round == 1);
        state.message = if state.round == 1 {
            "Ronda 1: cada jogador mete pelo menos 1 moeda.".to_string()
        } else {
            "Nova ronda: cada jogador pode meter 0 ou mais moedas.".to_string()
        };
    }

    /// Ends the match, recording the winner.
    fn end_game(state: &mut MatchState, winner_id: Option<u8>, message: Option<String>) {
        state.winner_id = winner_id;
        if let Some(message) = message {
            state.message = message;
        }
        state.phase = Phase::Ended;
    }

    /// Coerces a raw submission into `[min, max]`.
    fn clamp_amount(amount: i64, min: u32, max: u32) -> u32 {
        amount.clamp(i64::from(min), i64::from(max)) as u32
    }

    /// Re-emits the current match state (idempotent, no transition).
    #[must_use]
    pub fn snapshot(&self) -> MatchState {
        self.state.lock().clone()
    }

    /// Returns the current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.lock().phase
    }

    /// Returns the current round number.
    #[must_use]
    pub fn round(&self) -> u32 {
        self.state.lock().round
    }

    /// Returns the match winner, if the match has ended.
    #[must_use]
    pub fn winner_id(&self) -> Option<u8> {
        self.state.lock().winner_id
    }

    /// Formats the reveal message for a correct guess.
    fn hit_message(winner: &Player, pot_total: u32, threshold: u32, outcome: HitOutcome) -> String {
        let name = &winner.name;
        let hits = winner.hits;
        match outcome {
            HitOutcome::Victory => {
                format!("{name} acertou (total {pot_total}) e chegou a {hits}/{threshold}. Vitória!")
            }
            HitOutcome::Eliminated => {
                format!("{name} acertou (total {pot_total}) e saiu do jogo ({hits}/{threshold}).")
            }
            HitOutcome::Continue => {
                format!("{name} acertou (total {pot_total}). Acertos: {hits}/{threshold}.")
            }
        }
    }
}

/// How a correct guess resolved.
#[derive(Clone, Copy)]
enum HitOutcome {
    Victory,
    Eliminated,
    Continue,
}
