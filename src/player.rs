//! Player representation.

extern crate alloc;

use alloc::string::String;

/// A seat at the table: the human player or one of the AI opponents.
///
/// This is plain snapshot data; the engine hands out clones and never
/// exposes its own copy. A player removed from active play keeps its final
/// `coins` and `hits` for end-of-match display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    /// Stable identifier (0 is always the human, AI seats follow).
    pub id: u8,
    /// Display name.
    pub name: String,
    /// Whether this seat is driven by external submissions.
    pub is_human: bool,
    /// Coins currently held. Never negative: bets are bounded by it.
    pub coins: u32,
    /// Times this player has guessed the pot total exactly.
    pub hits: u32,
    /// Whether the player is still in contention.
    pub active: bool,
    /// Hidden coin contribution for the current round.
    ///
    /// `None` outside the betting/guessing/reveal window; cleared at the
    /// start of every betting phase.
    pub bet: Option<u32>,
    /// Claimed pot total for the current round. Cleared like `bet`.
    pub guess: Option<u32>,
}

impl Player {
    /// Creates a new active player with the given starting coins.
    #[must_use]
    pub const fn new(id: u8, name: String, is_human: bool, coins: u32) -> Self {
        Self {
            id,
            name,
            is_human,
            coins,
            hits: 0,
            active: true,
            bet: None,
            guess: None,
        }
    }

    /// Returns the coins the player held before betting this round.
    ///
    /// While a bet is placed this reconstructs the pre-bet holdings
    /// (`coins + bet`); otherwise it is just the current coins.
    #[must_use]
    pub fn coins_before_bet(&self) -> u32 {
        self.coins + self.bet.unwrap_or(0)
    }
}
