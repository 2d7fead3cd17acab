//! Game configuration options.

/// Configuration options for a blackjack session.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjstate::GameOptions;
///
/// let options = GameOptions::default()
///     .with_decks(6)
///     .with_rounds(10)
///     .with_stand_on_soft_17(true);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameOptions {
    /// Number of standard decks combined into the shoe.
    pub decks: u8,
    /// Number of rounds played in a session.
    pub rounds: usize,
    /// Whether the dealer stands on soft 17.
    pub stand_on_soft_17: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            decks: 3,
            rounds: 5,
            stand_on_soft_17: false,
        }
    }
}

impl GameOptions {
    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use bjstate::GameOptions;
    ///
    /// let options = GameOptions::default().with_decks(6);
    /// assert_eq!(options.decks, 6);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the number of rounds per session.
    ///
    /// # Example
    ///
    /// ```
    /// use bjstate::GameOptions;
    ///
    /// let options = GameOptions::default().with_rounds(1);
    /// assert_eq!(options.rounds, 1);
    /// ```
    #[must_use]
    pub const fn with_rounds(mut self, rounds: usize) -> Self {
        self.rounds = rounds;
        self
    }

    /// Sets whether dealer stands on soft 17.
    ///
    /// # Example
    ///
    /// ```
    /// use bjstate::GameOptions;
    ///
    /// let options = GameOptions::default().with_stand_on_soft_17(true);
    /// assert_eq!(options.stand_on_soft_17, true);
    /// ```
    #[must_use]
    pub const fn with_stand_on_soft_17(mut self, stand: bool) -> Self {
        self.stand_on_soft_17 = stand;
        self
    }
}
