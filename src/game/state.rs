//! Match state types.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use crate::player::Player;

/// Phase of the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Collecting hidden coin bets from every active player.
    Betting,
    /// Collecting distinct pot guesses from every active player.
    Guessing,
    /// Bets are revealed and the round has been resolved; awaiting
    /// advancement to the next round.
    Reveal,
    /// The match is over and a winner is set. No further submissions are
    /// accepted.
    Ended,
}

/// Full state of a match, emitted as a snapshot after every transition.
///
/// The engine owns a single instance and hands out deep copies; mutating a
/// snapshot never affects the running match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchState {
    /// Current round number, starting at 1.
    pub round: u32,
    /// Current phase.
    pub phase: Phase,
    /// Minimum bet this round: 1 on round 1, 0 afterwards.
    pub min_bet: u32,
    /// Sum of active players' bets this round. Computed once when the
    /// guessing phase starts and left untouched until the next round.
    pub pot_total: u32,
    /// Upper bound for guesses: the sum of active players' pre-bet coins.
    /// Computed together with [`pot_total`](Self::pot_total).
    pub max_guess: u32,
    /// Human-readable status line for the presentation layer.
    pub message: String,
    /// Players eliminated by winning, in elimination order.
    pub qualified_order: Vec<u8>,
    /// The match winner, once the match has ended.
    pub winner_id: Option<u8>,
    /// All seats, human first. Inactive players keep their final totals.
    pub players: Vec<Player>,
}

impl MatchState {
    /// Returns the players still in contention.
    pub fn active_players(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(|p| p.active)
    }

    /// Returns the number of players still in contention.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.active_players().count()
    }

    /// Returns the human seat.
    #[must_use]
    pub fn human(&self) -> Option<&Player> {
        self.players.iter().find(|p| p.is_human)
    }
}
