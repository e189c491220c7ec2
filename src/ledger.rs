//! Session bookkeeping: balance, wagers and outcome counters.

use log::debug;

use crate::error::{ActionError, BetError};
use crate::result::{Multiplier, Outcome};

/// Hands needed before the effective house edge is reported.
pub const HOUSE_EDGE_MIN_HANDS: usize = 10;

#[expect(
    clippy::cast_precision_loss,
    reason = "f64 has sufficient precision for chip counts"
)]
fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

/// Running totals for one sitting at the table.
///
/// Only the round engine writes to the ledger. The stake is taken from
/// the balance when it is placed, and settlement credits the payout back.
///
/// Pushes return the stake to the balance but are not added to
/// `total_won`, which only sums payouts from winning rounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionLedger {
    balance: usize,
    starting_balance: usize,
    current_bet: usize,
    wins: usize,
    losses: usize,
    pushes: usize,
    blackjacks: usize,
    busts: usize,
    total_wagered: usize,
    total_won: usize,
}

impl SessionLedger {
    /// Creates a ledger holding `starting_balance` chips.
    #[must_use]
    pub const fn new(starting_balance: usize) -> Self {
        Self {
            balance: starting_balance,
            starting_balance,
            current_bet: 0,
            wins: 0,
            losses: 0,
            pushes: 0,
            blackjacks: 0,
            busts: 0,
            total_wagered: 0,
            total_won: 0,
        }
    }

    pub(crate) fn place_bet(&mut self, amount: usize) -> Result<(), BetError> {
        crate::game::check_bet(self.balance, amount)?;
        self.balance -= amount;
        self.current_bet = amount;
        self.total_wagered = self.total_wagered.saturating_add(amount);
        Ok(())
    }

    pub(crate) fn double_bet(&mut self) -> Result<(), ActionError> {
        let extra = self.current_bet;
        if extra > self.balance {
            return Err(ActionError::InsufficientFunds);
        }
        self.balance -= extra;
        self.current_bet += extra;
        self.total_wagered = self.total_wagered.saturating_add(extra);
        Ok(())
    }

    /// Credits the payout for `outcome` and bumps the counters. Returns the
    /// payout.
    pub(crate) fn settle(&mut self, outcome: Outcome) -> usize {
        let multiplier = outcome.multiplier();
        let payout = multiplier.payout(self.current_bet);
        self.balance = self.balance.saturating_add(payout);

        match multiplier {
            Multiplier::Win | Multiplier::Blackjack => {
                self.wins += 1;
                self.total_won = self.total_won.saturating_add(payout);
            }
            Multiplier::Push => self.pushes += 1,
            Multiplier::Lose => self.losses += 1,
        }
        match outcome {
            Outcome::PlayerBlackjack => self.blackjacks += 1,
            Outcome::PlayerBust => self.busts += 1,
            _ => {}
        }

        debug!(
            "settled {outcome}: bet {}, payout {payout}, balance {}",
            self.current_bet, self.balance
        );
        payout
    }

    pub(crate) const fn clear_bet(&mut self) {
        self.current_bet = 0;
    }

    /// Returns the current balance.
    #[must_use]
    pub const fn balance(&self) -> usize {
        self.balance
    }

    /// Returns the balance the session started with.
    #[must_use]
    pub const fn starting_balance(&self) -> usize {
        self.starting_balance
    }

    /// Returns the bet riding on the current round (0 between rounds).
    #[must_use]
    pub const fn current_bet(&self) -> usize {
        self.current_bet
    }

    /// Returns the total amount wagered, doubles included.
    #[must_use]
    pub const fn total_wagered(&self) -> usize {
        self.total_wagered
    }

    /// Returns the total paid back on winning rounds.
    #[must_use]
    pub const fn total_won(&self) -> usize {
        self.total_won
    }

    /// Returns a snapshot of the counters for reporting.
    #[must_use]
    pub const fn statistics(&self) -> Statistics {
        Statistics {
            starting_balance: self.starting_balance,
            balance: self.balance,
            total_wagered: self.total_wagered,
            total_won: self.total_won,
            wins: self.wins,
            losses: self.losses,
            pushes: self.pushes,
            blackjacks: self.blackjacks,
            busts: self.busts,
        }
    }
}

/// End-of-session figures, plus the ratios derived from them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Statistics {
    /// Balance at the start of the session.
    pub starting_balance: usize,
    /// Balance now.
    pub balance: usize,
    /// Total wagered, doubles included.
    pub total_wagered: usize,
    /// Total paid back on winning rounds.
    pub total_won: usize,
    /// Rounds won.
    pub wins: usize,
    /// Rounds lost.
    pub losses: usize,
    /// Rounds pushed.
    pub pushes: usize,
    /// Player naturals that paid 3:2.
    pub blackjacks: usize,
    /// Rounds lost to a player bust.
    pub busts: usize,
}

impl Statistics {
    /// Returns the number of rounds played.
    #[must_use]
    pub const fn hands(&self) -> usize {
        self.wins + self.losses + self.pushes
    }

    /// Returns `count` as a percentage of rounds played.
    #[must_use]
    pub fn percent_of_hands(&self, count: usize) -> f64 {
        ratio(count, self.hands()) * 100.0
    }

    /// Returns the win rate in percent.
    #[must_use]
    pub fn win_percentage(&self) -> f64 {
        self.percent_of_hands(self.wins)
    }

    /// Returns the balance change over the session.
    #[must_use]
    #[expect(clippy::cast_possible_wrap, reason = "chip counts fit in isize")]
    pub const fn net_profit(&self) -> isize {
        self.balance as isize - self.starting_balance as isize
    }

    /// Returns the net profit as a percentage of the starting balance.
    #[must_use]
    pub fn roi(&self) -> f64 {
        let magnitude = ratio(self.net_profit().unsigned_abs(), self.starting_balance) * 100.0;
        if self.net_profit() < 0 {
            -magnitude
        } else {
            magnitude
        }
    }

    /// Returns the average wager per round.
    #[must_use]
    pub fn average_bet(&self) -> f64 {
        ratio(self.total_wagered, self.hands())
    }

    /// Returns the average payout per winning round.
    #[must_use]
    pub fn average_win(&self) -> f64 {
        ratio(self.total_won, self.wins)
    }

    /// Returns the share of the money wagered that was lost (or won), in
    /// percent. `None` until [`HOUSE_EDGE_MIN_HANDS`] rounds are played.
    #[must_use]
    pub fn house_edge(&self) -> Option<f64> {
        (self.hands() >= HOUSE_EDGE_MIN_HANDS)
            .then(|| ratio(self.net_profit().unsigned_abs(), self.total_wagered) * 100.0)
    }

    /// Rates the session by win percentage. `None` if no rounds were played.
    #[must_use]
    pub fn rating(&self) -> Option<Rating> {
        if self.hands() == 0 {
            return None;
        }
        let win_percentage = self.win_percentage();
        Some(if win_percentage >= 60.0 {
            Rating::Exceptional
        } else if win_percentage >= 50.0 {
            Rating::Great
        } else if win_percentage >= 45.0 {
            Rating::Good
        } else {
            Rating::HouseWins
        })
    }
}

/// Overall grade for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rating {
    /// Won at least 60% of rounds.
    Exceptional,
    /// Won at least 50% of rounds.
    Great,
    /// Won at least 45% of rounds.
    Good,
    /// Won fewer than 45% of rounds.
    HouseWins,
}
