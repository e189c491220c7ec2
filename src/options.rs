//! Table configuration.
//!
//! Only session parameters live here. The rules themselves (dealer stands
//! on all 17s, blackjack pays 3:2, double on the first two cards only) are
//! fixed.

use crate::shoe::DEFAULT_RESHUFFLE_THRESHOLD;

/// Configuration options for a blackjack session.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjtable::GameOptions;
///
/// let options = GameOptions::default()
///     .with_decks(2)
///     .with_starting_balance(500);
/// assert_eq!(options.reshuffle_threshold, 10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Number of decks in the shoe.
    pub decks: u8,
    /// Chips the player sits down with.
    pub starting_balance: usize,
    /// A draw with fewer cards than this left rebuilds the shoe first.
    pub reshuffle_threshold: usize,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            decks: 6,
            starting_balance: 1000,
            reshuffle_threshold: DEFAULT_RESHUFFLE_THRESHOLD,
        }
    }
}

impl GameOptions {
    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::GameOptions;
    ///
    /// let options = GameOptions::default().with_decks(8);
    /// assert_eq!(options.decks, 8);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the starting balance.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::GameOptions;
    ///
    /// let options = GameOptions::default().with_starting_balance(250);
    /// assert_eq!(options.starting_balance, 250);
    /// ```
    #[must_use]
    pub const fn with_starting_balance(mut self, balance: usize) -> Self {
        self.starting_balance = balance;
        self
    }

    /// Sets the reshuffle threshold.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::GameOptions;
    ///
    /// let options = GameOptions::default().with_reshuffle_threshold(52);
    /// assert_eq!(options.reshuffle_threshold, 52);
    /// ```
    #[must_use]
    pub const fn with_reshuffle_threshold(mut self, threshold: usize) -> Self {
        self.reshuffle_threshold = threshold;
        self
    }
}
