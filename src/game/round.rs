use super::{Game, MatchState, Phase};

impl Game {
    /// Advances the match past the reveal.
    ///
    /// The presentation layer calls this after letting the reveal message
    /// sit for [`reveal_delay_ms`](crate::GameOptions::reveal_delay_ms); the
    /// engine itself never sleeps. Ignored (the current snapshot is returned
    /// unchanged) unless the match is in the reveal phase.
    ///
    /// If at most one player is still active, the remaining player (if any)
    /// wins and the match ends; otherwise the round number increments and
    /// the next betting phase opens with a minimum bet of 0.
    pub fn advance_round(&self) -> MatchState {
        let mut state = self.state.lock();
        if state.phase != Phase::Reveal {
            return state.clone();
        }

        if state.active_count() <= 1 {
            // Unreachable under the standard rules (two active players end
            // the match through the victory threshold), handled gracefully.
            let winner_id = state.active_players().next().map(|p| p.id);
            Self::end_game(&mut state, winner_id, None);
            return state.clone();
        }

        state.round += 1;
        Self::start_bet_phase(&mut state);
        state.clone()
    }
}
