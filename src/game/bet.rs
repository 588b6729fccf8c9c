use alloc::string::ToString;
use rand::Rng;

use super::{Game, MatchState, Phase};

impl Game {
    /// Submits the human player's bet for the current round.
    ///
    /// Ignored (the current snapshot is returned unchanged) unless the match
    /// is in the betting phase and the human is still active. The amount is
    /// clamped into `[min_bet, coins]`; the engine then draws an independent
    /// uniform bet in the same per-player range for every active AI player,
    /// deducts all bets, and opens the guessing phase.
    pub fn submit_bet(&self, amount: i64) -> MatchState {
        let mut state = self.state.lock();
        if state.phase != Phase::Betting {
            return state.clone();
        }

        let min_bet = state.min_bet;
        let Some(human) = state.players.iter_mut().find(|p| p.is_human) else {
            return state.clone();
        };
        if !human.active {
            return state.clone();
        }

        // The lower bound is capped at the player's coins so a bet can
        // never push holdings negative.
        let min = min_bet.min(human.coins);
        let bet = Self::clamp_amount(amount, min, human.coins);
        human.bet = Some(bet);
        human.coins -= bet;

        // AI bets (hidden until the reveal).
        let mut rng = self.rng.lock();
        for ai in state.players.iter_mut().filter(|p| p.active && !p.is_human) {
            let min = min_bet.min(ai.coins);
            let bet = rng.random_range(min..=ai.coins);
            ai.bet = Some(bet);
            ai.coins -= bet;
        }
        drop(rng);

        Self::start_guess_phase(&mut state);
        state.clone()
    }

    /// Opens the guessing phase.
    ///
    /// Fixes the pot total (sum of active bets) and the guess bound (sum of
    /// active players' pre-bet coins) for the rest of the round.
    fn start_guess_phase(state: &mut MatchState) {
        state.phase = Phase::Guessing;
        state.pot_total = state.active_players().map(|p| p.bet.unwrap_or(0)).sum();
        state.max_guess = state.active_players().map(|p| p.coins_before_bet()).sum();
        state.message = "Fase de palpites: todos dizem um número diferente.".to_string();
    }
}
