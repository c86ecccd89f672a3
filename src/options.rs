//! Game configuration options.

use crate::card::MAX_WILDS;

/// Configuration options for a game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use killer::GameOptions;
///
/// let options = GameOptions::default()
///     .with_wilds(2)
///     .with_shuffle_seats(false);
/// assert_eq!(options.wilds, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameOptions {
    /// Number of jokers added to the 52 natural cards.
    pub wilds: u8,
    /// Whether seating order is shuffled at each deal.
    pub shuffle_seats: bool,
    /// Whether the holder of the Three of Clubs opens the game, restricted to
    /// plays starting at Three on the very first turn.
    pub three_of_clubs_leads: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            wilds: 0,
            shuffle_seats: true,
            three_of_clubs_leads: true,
        }
    }
}

impl GameOptions {
    /// Sets the number of jokers, clamped to [`MAX_WILDS`].
    ///
    /// # Example
    ///
    /// ```
    /// use killer::GameOptions;
    ///
    /// let options = GameOptions::default().with_wilds(20);
    /// assert_eq!(options.wilds, 12);
    /// ```
    #[must_use]
    pub const fn with_wilds(mut self, wilds: u8) -> Self {
        self.wilds = if wilds > MAX_WILDS { MAX_WILDS } else { wilds };
        self
    }

    /// Sets whether seating order is shuffled at each deal.
    ///
    /// # Example
    ///
    /// ```
    /// use killer::GameOptions;
    ///
    /// let options = GameOptions::default().with_shuffle_seats(false);
    /// assert!(!options.shuffle_seats);
    /// ```
    #[must_use]
    pub const fn with_shuffle_seats(mut self, shuffle: bool) -> Self {
        self.shuffle_seats = shuffle;
        self
    }

    /// Sets whether the Three of Clubs leads the first round.
    ///
    /// When disabled, the first seat opens with any play.
    ///
    /// # Example
    ///
    /// ```
    /// use killer::GameOptions;
    ///
    /// let options = GameOptions::default().with_three_of_clubs_leads(false);
    /// assert!(!options.three_of_clubs_leads);
    /// ```
    #[must_use]
    pub const fn with_three_of_clubs_leads(mut self, leads: bool) -> Self {
        self.three_of_clubs_leads = leads;
        self
    }
}
