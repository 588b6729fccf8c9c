use alloc::format;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::error::GuessError;

use super::{Game, HitOutcome, MatchState, Phase, elimination_threshold};

impl Game {
    /// Submits the human player's guess for the pot total.
    ///
    /// Ignored (the current snapshot is returned unchanged) unless the match
    /// is in the guessing phase and the human is still active. The amount is
    /// clamped into `[0, max_guess]`; the engine then assigns every active
    /// AI player a guess not yet used this round and resolves the reveal
    /// synchronously, returning the reveal (or ended) snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`GuessError::LogicInvariantViolation`] if no unused guess
    /// value remains for an AI player. This cannot occur in valid play.
    pub fn submit_guess(&self, amount: i64) -> Result<MatchState, GuessError> {
        let mut state = self.state.lock();
        if state.phase != Phase::Guessing {
            return Ok(state.clone());
        }

        let max_guess = state.max_guess;
        let Some(human) = state.players.iter_mut().find(|p| p.is_human) else {
            return Ok(state.clone());
        };
        if !human.active {
            return Ok(state.clone());
        }

        let guess = Self::clamp_amount(amount, 0, max_guess);
        human.guess = Some(guess);

        // AI guesses, pairwise distinct with everything chosen so far.
        let mut used = alloc::vec![guess];
        let attempts = self.options.guess_sample_attempts;
        let mut rng = self.rng.lock();
        for ai in state.players.iter_mut().filter(|p| p.active && !p.is_human) {
            let ai_guess = Self::pick_unique_guess(&mut rng, &used, max_guess, attempts)?;
            ai.guess = Some(ai_guess);
            used.push(ai_guess);
        }
        drop(rng);

        Self::resolve_reveal(&mut state);
        Ok(state.clone())
    }

    /// Picks a guess in `[0, max_guess]` that is not in `used`.
    ///
    /// Random sampling is bounded by `attempts`; the linear scan fallback is
    /// the correctness guarantee, not an optimization, and deterministically
    /// yields the lowest unused value.
    fn pick_unique_guess(
        rng: &mut ChaCha8Rng,
        used: &[u32],
        max_guess: u32,
        attempts: u32,
    ) -> Result<u32, GuessError> {
        for _ in 0..attempts {
            let candidate = rng.random_range(0..=max_guess);
            if !used.contains(&candidate) {
                return Ok(candidate);
            }
        }

        (0..=max_guess)
            .find(|candidate| !used.contains(candidate))
            .ok_or(GuessError::LogicInvariantViolation)
    }

    /// Reveals the pot and resolves the round.
    ///
    /// Guesses are pairwise distinct, so at most one active player can match
    /// the pot. The elimination threshold is evaluated against the active
    /// count *before* any removal.
    fn resolve_reveal(state: &mut MatchState) {
        state.phase = Phase::Reveal;

        let pot_total = state.pot_total;
        let active_count = state.active_count();

        let Some(winner_index) = state
            .players
            .iter()
            .position(|p| p.active && p.guess == Some(pot_total))
        else {
            state.message = format!("Ninguém acertou. Total em jogo: {pot_total}.");
            return;
        };

        state.players[winner_index].hits += 1;
        let threshold = elimination_threshold(active_count);

        let winner = &state.players[winner_index];
        let id = winner.id;
        let hits = winner.hits;

        if active_count == 2 && hits >= threshold {
            // Down to two players the threshold ends the match instead of
            // eliminating the winner.
            let message = Self::hit_message(winner, pot_total, threshold, HitOutcome::Victory);
            Self::end_game(state, Some(id), Some(message));
        } else if hits >= threshold {
            let message = Self::hit_message(winner, pot_total, threshold, HitOutcome::Eliminated);
            state.players[winner_index].active = false;
            state.qualified_order.push(id);
            state.message = message;
        } else {
            let message = Self::hit_message(winner, pot_total, threshold, HitOutcome::Continue);
            state.message = message;
        }
    }
}
