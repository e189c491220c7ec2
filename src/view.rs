//! Snapshot handed to whatever renders the table.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

/// What the player can see at the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    /// The dealer's face-up cards.
    pub dealer_cards: Vec<Card>,
    /// Whether a face-down hole card sits behind `dealer_cards`.
    pub dealer_hole_hidden: bool,
    /// Value of the face-up dealer cards.
    pub dealer_value: u8,
    /// The player's cards.
    pub player_cards: Vec<Card>,
    /// Value of the player's hand.
    pub player_value: u8,
    /// Chips not on the table.
    pub balance: usize,
    /// Chips riding on this round.
    pub current_bet: usize,
    /// Cards left in the shoe.
    pub cards_remaining: usize,
}
