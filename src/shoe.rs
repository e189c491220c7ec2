//! The shoe: every deck in play, shuffled together.

extern crate alloc;

use alloc::vec::Vec;

use log::{debug, trace};
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};

/// Remaining-card count below which a draw rebuilds the shoe first.
pub const DEFAULT_RESHUFFLE_THRESHOLD: usize = 10;

/// A multi-deck shoe. Cards are drawn from the top (the end of the vector).
///
/// The shoe never runs dry: when fewer than `reshuffle_threshold` cards are
/// left, [`Shoe::draw`] rebuilds and reshuffles all decks before drawing.
#[derive(Debug, Clone)]
pub struct Shoe {
    cards: Vec<Card>,
    num_decks: u8,
    reshuffle_threshold: usize,
    reshuffles: usize,
    rng: ChaCha8Rng,
}

impl Shoe {
    /// Creates a shuffled shoe of `num_decks` decks from the given seed.
    ///
    /// A zero deck count is raised to one so the shoe can always be refilled.
    #[must_use]
    pub fn new(num_decks: u8, seed: u64) -> Self {
        Self::with_threshold(num_decks, DEFAULT_RESHUFFLE_THRESHOLD, seed)
    }

    /// Creates a shuffled shoe with a custom reshuffle threshold.
    ///
    /// The threshold is clamped to `1..=shoe size`, so a fresh shoe is never
    /// below it and a draw never meets an empty shoe.
    #[must_use]
    pub fn with_threshold(num_decks: u8, reshuffle_threshold: usize, seed: u64) -> Self {
        let num_decks = num_decks.max(1);
        let mut shoe = Self {
            cards: Vec::with_capacity(num_decks as usize * DECK_SIZE),
            num_decks,
            reshuffle_threshold: reshuffle_threshold.clamp(1, num_decks as usize * DECK_SIZE),
            reshuffles: 0,
            rng: ChaCha8Rng::seed_from_u64(seed),
        };
        shoe.fill();
        shoe
    }

    fn fill(&mut self) {
        self.cards.clear();
        for _ in 0..self.num_decks {
            for suit in Suit::ALL {
                for rank in Rank::ALL {
                    self.cards.push(Card::new(suit, rank));
                }
            }
        }
        self.cards.shuffle(&mut self.rng);
    }

    /// Rebuilds every deck and shuffles them together.
    pub fn reset(&mut self) {
        self.fill();
        self.reshuffles += 1;
        debug!(
            "shoe rebuilt: {} decks, {} cards",
            self.num_decks,
            self.cards.len()
        );
    }

    /// Returns whether the next draw will rebuild the shoe first.
    #[must_use]
    pub fn needs_reshuffle(&self) -> bool {
        self.cards.len() < self.reshuffle_threshold
    }

    /// Draws the top card, rebuilding the shoe first if it is running low.
    ///
    /// The shoe holds exactly one card fewer afterwards than it did just
    /// before the draw (after any rebuild).
    #[expect(
        clippy::missing_panics_doc,
        reason = "the threshold is at least one, so the shoe is never empty here"
    )]
    pub fn draw(&mut self) -> Card {
        if self.needs_reshuffle() {
            self.reset();
        }
        let card = self
            .cards
            .pop()
            .expect("shoe holds at least the reshuffle threshold");
        trace!("drew {card}, {} left", self.cards.len());
        card
    }

    /// Places cards on top of the shoe so they are drawn in the given order.
    ///
    /// Mostly useful for replaying a known deal.
    ///
    /// ```
    /// use bjtable::{Card, Rank, Shoe, Suit};
    ///
    /// let mut shoe = Shoe::new(1, 7);
    /// let ace = Card::new(Suit::Hearts, Rank::Ace);
    /// let king = Card::new(Suit::Spades, Rank::King);
    /// shoe.stack(&[ace, king]);
    /// assert_eq!(shoe.draw(), ace);
    /// assert_eq!(shoe.draw(), king);
    /// ```
    pub fn stack(&mut self, draws: &[Card]) {
        self.cards.extend(draws.iter().rev());
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the shoe is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the number of decks the shoe is built from.
    #[must_use]
    pub const fn num_decks(&self) -> u8 {
        self.num_decks
    }

    /// Returns how many times the shoe has been rebuilt since creation.
    #[must_use]
    pub const fn reshuffles(&self) -> usize {
        self.reshuffles
    }
}
