//! Card types and deck utilities.

use core::fmt;
use core::str::FromStr;

use crate::error::CardError;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
}

impl Suit {
    /// All four suits, in shoe-building order.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Diamonds, Self::Clubs, Self::Spades];

    /// Returns the suit symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Hearts => '♥',
            Self::Diamonds => '♦',
            Self::Clubs => '♣',
            Self::Spades => '♠',
        }
    }

    /// Returns whether the suit is printed in red.
    #[must_use]
    pub const fn is_red(self) -> bool {
        matches!(self, Self::Hearts | Self::Diamonds)
    }

    const fn from_char(c: char) -> Option<Self> {
        match c {
            '♥' | 'H' | 'h' => Some(Self::Hearts),
            '♦' | 'D' | 'd' => Some(Self::Diamonds),
            '♣' | 'C' | 'c' => Some(Self::Clubs),
            '♠' | 'S' | 's' => Some(Self::Spades),
            _ => None,
        }
    }
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rank {
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
    /// Ace.
    Ace,
}

impl Rank {
    /// All thirteen ranks, in shoe-building order.
    pub const ALL: [Self; 13] = [
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
    ];

    /// Returns the blackjack point value. Aces count 11 here; hand
    /// evaluation drops them to 1 as needed.
    #[must_use]
    pub const fn value(self) -> u8 {
        match self {
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
            Self::Five => 5,
            Self::Six => 6,
            Self::Seven => 7,
            Self::Eight => 8,
            Self::Nine => 9,
            Self::Ten | Self::Jack | Self::Queen | Self::King => 10,
            Self::Ace => 11,
        }
    }

    /// Returns the short label used when printing cards.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
            Self::Ace => "A",
        }
    }
}

/// Converts the conventional numbering (1 = Ace, 11 = Jack, 12 = Queen,
/// 13 = King) into a rank.
impl TryFrom<u8> for Rank {
    type Error = CardError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Ace),
            2..=13 => Ok(Self::ALL[value as usize - 2]),
            _ => Err(CardError::InvalidCardSpec),
        }
    }
}

impl FromStr for Rank {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|rank| rank.label().eq_ignore_ascii_case(s))
            .ok_or(CardError::InvalidCardSpec)
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card.
    pub rank: Rank,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// Returns the blackjack point value of the card (aces count 11).
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.rank.value()
    }

    /// Returns whether the card is an ace.
    #[must_use]
    pub const fn is_ace(&self) -> bool {
        matches!(self.rank, Rank::Ace)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.label(), self.suit.symbol())
    }
}

/// Parses cards written as rank followed by suit, e.g. `10♠`, `A♥` or `QD`.
///
/// ```
/// use bjtable::{Card, Rank, Suit};
///
/// let card: Card = "10♠".parse().unwrap();
/// assert_eq!(card, Card::new(Suit::Spades, Rank::Ten));
/// assert!("1X".parse::<Card>().is_err());
/// ```
impl FromStr for Card {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let suit_char = s.chars().next_back().ok_or(CardError::InvalidCardSpec)?;
        let suit = Suit::from_char(suit_char).ok_or(CardError::InvalidCardSpec)?;
        let rank = s[..s.len() - suit_char.len_utf8()].parse()?;
        Ok(Self::new(suit, rank))
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
