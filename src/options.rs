//! Game configuration options.

/// Configuration options for a milhada match.
///
/// The defaults reproduce the classic four-player game (one human, three
/// AI opponents, three coins each). Use the builder pattern to customize:
///
/// ```
/// use milhada::GameOptions;
///
/// let options = GameOptions::default()
///     .with_starting_coins(5)
///     .with_ai_players(2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// Coins each player starts the match with.
    pub starting_coins: u32,
    /// Number of AI opponents seated after the human player.
    pub ai_players: u8,
    /// Random sampling attempts before falling back to a linear scan when
    /// assigning a unique AI guess.
    pub guess_sample_attempts: u32,
    /// Suggested pause (milliseconds) between the reveal and the next round,
    /// so the result message can be read. The engine never sleeps itself;
    /// this is a pacing hint for the presentation layer.
    pub reveal_delay_ms: u64,
    /// Suggested pause (milliseconds) before leaving an ended match.
    /// A pacing hint like [`reveal_delay_ms`](Self::reveal_delay_ms).
    pub end_delay_ms: u64,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            starting_coins: 3,
            ai_players: 3,
            guess_sample_attempts: 20,
            reveal_delay_ms: 1200,
            end_delay_ms: 400,
        }
    }
}

impl GameOptions {
    /// Sets the coins each player starts with.
    ///
    /// # Example
    ///
    /// ```
    /// use milhada::GameOptions;
    ///
    /// let options = GameOptions::default().with_starting_coins(5);
    /// assert_eq!(options.starting_coins, 5);
    /// ```
    #[must_use]
    pub const fn with_starting_coins(mut self, coins: u32) -> Self {
        self.starting_coins = coins;
        self
    }

    /// Sets the number of AI opponents.
    ///
    /// # Example
    ///
    /// ```
    /// use milhada::GameOptions;
    ///
    /// let options = GameOptions::default().with_ai_players(2);
    /// assert_eq!(options.ai_players, 2);
    /// ```
    #[must_use]
    pub const fn with_ai_players(mut self, count: u8) -> Self {
        self.ai_players = count;
        self
    }

    /// Sets the random sampling budget for unique AI guesses.
    ///
    /// # Example
    ///
    /// ```
    /// use milhada::GameOptions;
    ///
    /// let options = GameOptions::default().with_guess_sample_attempts(50);
    /// assert_eq!(options.guess_sample_attempts, 50);
    /// ```
    #[must_use]
    pub const fn with_guess_sample_attempts(mut self, attempts: u32) -> Self {
        self.guess_sample_attempts = attempts;
        self
    }

    /// Sets the suggested reveal-to-next-round pause in milliseconds.
    ///
    /// # Example
    ///
    /// ```
    /// use milhada::GameOptions;
    ///
    /// let options = GameOptions::default().with_reveal_delay_ms(800);
    /// assert_eq!(options.reveal_delay_ms, 800);
    /// ```
    #[must_use]
    pub const fn with_reveal_delay_ms(mut self, millis: u64) -> Self {
        self.reveal_delay_ms = millis;
        self
    }

    /// Sets the suggested end-of-match pause in milliseconds.
    ///
    /// # Example
    ///
    /// ```
    /// use milhada::GameOptions;
    ///
    /// let options = GameOptions::default().with_end_delay_ms(0);
    /// assert_eq!(options.end_delay_ms, 0);
    /// ```
    #[must_use]
    pub const fn with_end_delay_ms(mut self, millis: u64) -> Self {
        self.end_delay_ms = millis;
        self
    }
}
