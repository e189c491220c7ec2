//! Round result types for showdown.

use core::fmt;

/// How a round ended, in the order the rules are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Player went over 21. Checked before anything about the dealer.
    PlayerBust,
    /// Dealer went over 21.
    DealerBust,
    /// Player has a natural and the dealer does not.
    PlayerBlackjack,
    /// Dealer has a natural and the player does not.
    DealerBlackjack,
    /// Both have naturals.
    BothBlackjack,
    /// Player total beats the dealer total.
    PlayerHigher,
    /// Dealer total beats the player total.
    DealerHigher,
    /// Equal totals.
    Push,
}

impl Outcome {
    /// Returns the payout multiplier for this outcome.
    #[must_use]
    pub const fn multiplier(self) -> Multiplier {
        match self {
            Self::PlayerBust | Self::DealerBlackjack | Self::DealerHigher => Multiplier::Lose,
            Self::BothBlackjack | Self::Push => Multiplier::Push,
            Self::DealerBust | Self::PlayerHigher => Multiplier::Win,
            Self::PlayerBlackjack => Multiplier::Blackjack,
        }
    }

    /// Returns the machine-readable tag, e.g. `player_bust`.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::PlayerBust => "player_bust",
            Self::DealerBust => "dealer_bust",
            Self::PlayerBlackjack => "player_blackjack",
            Self::DealerBlackjack => "dealer_blackjack",
            Self::BothBlackjack => "both_blackjack",
            Self::PlayerHigher => "player_higher",
            Self::DealerHigher => "dealer_higher",
            Self::Push => "push",
        }
    }

    /// Returns a sentence describing the outcome to the player.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::PlayerBust => "Player busted! Dealer wins.",
            Self::DealerBust => "Dealer busted! Player wins!",
            Self::PlayerBlackjack => "Blackjack! Player wins!",
            Self::DealerBlackjack => "Dealer has blackjack. Dealer wins.",
            Self::BothBlackjack => "Both have blackjack. Push!",
            Self::PlayerHigher => "Player wins!",
            Self::DealerHigher => "Dealer wins.",
            Self::Push => "Push! It's a tie.",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Payout multiplier applied to the final bet.
///
/// The stake is taken from the balance when the bet is placed, so a loss
/// pays nothing back and a push pays the stake back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Multiplier {
    /// −1: stake lost.
    Lose,
    /// 1: stake returned.
    Push,
    /// 2: stake returned plus even money.
    Win,
    /// 2.5: stake returned plus 3:2.
    Blackjack,
}

impl Multiplier {
    /// Returns the multiplier as a number: −1, 1, 2 or 2.5. Never 0.
    #[must_use]
    pub const fn as_f64(self) -> f64 {
        match self {
            Self::Lose => -1.0,
            Self::Push => 1.0,
            Self::Win => 2.0,
            Self::Blackjack => 2.5,
        }
    }

    /// Returns the amount credited back to the balance for `bet`.
    ///
    /// Fractional chips from a 3:2 payout on an odd bet are dropped.
    ///
    /// ```
    /// use bjtable::Multiplier;
    ///
    /// assert_eq!(Multiplier::Blackjack.payout(100), 250);
    /// assert_eq!(Multiplier::Blackjack.payout(5), 12);
    /// assert_eq!(Multiplier::Lose.payout(100), 0);
    /// ```
    #[must_use]
    pub const fn payout(self, bet: usize) -> usize {
        match self {
            Self::Lose => 0,
            Self::Push => bet,
            Self::Win => bet.saturating_mul(2),
            Self::Blackjack => bet.saturating_mul(2).saturating_add(bet / 2),
        }
    }

    /// Returns whether the player came out ahead.
    #[must_use]
    pub const fn is_win(self) -> bool {
        matches!(self, Self::Win | Self::Blackjack)
    }
}

/// Result of a resolved round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// How the round ended.
    pub outcome: Outcome,
    /// The final bet, doubled if the player doubled down.
    pub bet: usize,
    /// Amount credited back to the balance.
    pub payout: usize,
    /// Net change to the balance over the round.
    pub net: isize,
    /// The player's final hand value.
    pub player_value: u8,
    /// The dealer's final hand value.
    pub dealer_value: u8,
}

impl RoundResult {
    /// Returns the payout multiplier of the outcome.
    #[must_use]
    pub const fn multiplier(&self) -> Multiplier {
        self.outcome.multiplier()
    }
}
