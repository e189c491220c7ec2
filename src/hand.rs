//! Player and dealer hand representations.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

/// Largest total that does not bust.
pub const BLACKJACK: u8 = 21;

/// Sums the cards with every ace at 11, then drops aces to 1 one at a time
/// while the total is over 21. Returns the total and whether an ace is still
/// counted as 11.
fn evaluate_cards(cards: &[Card]) -> (u8, bool) {
    let mut value: u8 = 0;
    let mut soft_aces: u8 = 0;

    for card in cards {
        if card.is_ace() {
            soft_aces += 1;
        }
        value = value.saturating_add(card.value());
    }

    while value > BLACKJACK && soft_aces > 0 {
        value -= 10;
        soft_aces -= 1;
    }

    (value, soft_aces > 0)
}

/// An ordered run of cards held by one participant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Calculates the value of the hand.
    ///
    /// Aces are counted as 11 if possible without busting, otherwise as 1.
    #[must_use]
    pub fn value(&self) -> u8 {
        evaluate_cards(&self.cards).0
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        evaluate_cards(&self.cards).1
    }

    /// Returns whether the hand is a natural: exactly two cards totalling 21.
    ///
    /// A 21 reached with three or more cards is not a blackjack.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.value() == BLACKJACK
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > BLACKJACK
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

/// The dealer's hand: a [`Hand`] whose second card stays face down until
/// revealed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DealerHand {
    hand: Hand,
    hole_revealed: bool,
}

impl DealerHand {
    /// Creates a new empty dealer hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            hand: Hand::new(),
            hole_revealed: false,
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.hand.add_card(card);
    }

    /// Returns the underlying hand, hole card included.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Returns all cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        self.hand.cards()
    }

    /// Returns the cards a seated player can see.
    #[must_use]
    pub fn visible_cards(&self) -> &[Card] {
        if self.hole_revealed {
            self.hand.cards()
        } else {
            &self.hand.cards()[..self.hand.len().min(1)]
        }
    }

    /// Returns the visible card (first card).
    #[must_use]
    pub fn up_card(&self) -> Option<&Card> {
        self.hand.cards().first()
    }

    /// Returns whether the hole card is revealed.
    #[must_use]
    pub const fn is_hole_revealed(&self) -> bool {
        self.hole_revealed
    }

    /// Reveals the hole card.
    pub const fn reveal_hole(&mut self) {
        self.hole_revealed = true;
    }

    /// Calculates the visible value (only up card if hole not revealed).
    #[must_use]
    pub fn visible_value(&self) -> u8 {
        evaluate_cards(self.visible_cards()).0
    }

    /// Calculates the full value of the hand.
    #[must_use]
    pub fn value(&self) -> u8 {
        self.hand.value()
    }

    /// Returns whether the hand is a blackjack.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.hand.is_blackjack()
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.hand.is_bust()
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        self.hand.is_soft()
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.hand.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hand.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.hand.clear();
        self.hole_revealed = false;
    }
}
