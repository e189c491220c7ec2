use log::debug;

use crate::error::{BetError, DealError};
use crate::result::{Outcome, RoundResult};

use super::{Game, GameState};

/// Returns whether `bet` may be placed from `balance`: `0 < bet <= balance`.
///
/// ```
/// use bjtable::valid_bet;
///
/// assert!(valid_bet(1000, 1000));
/// assert!(!valid_bet(1000, 0));
/// assert!(!valid_bet(1000, 1001));
/// ```
#[must_use]
pub const fn valid_bet(balance: usize, bet: usize) -> bool {
    bet > 0 && bet <= balance
}

/// Like [`valid_bet`], but says why a bet is rejected.
///
/// # Errors
///
/// Returns [`BetError::ZeroBet`] or [`BetError::InsufficientFunds`].
pub const fn check_bet(balance: usize, bet: usize) -> Result<(), BetError> {
    if bet == 0 {
        Err(BetError::ZeroBet)
    } else if bet > balance {
        Err(BetError::InsufficientFunds)
    } else {
        Ok(())
    }
}

impl Game {
    /// Places the bet for the next round and takes it from the balance.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in betting state, a bet is
    /// already down, the bet is zero, or the player lacks funds.
    pub fn place_bet(&mut self, amount: usize) -> Result<(), BetError> {
        if self.state != GameState::Betting || self.ledger.current_bet() > 0 {
            return Err(BetError::InvalidState);
        }

        self.ledger.place_bet(amount)?;
        debug!("bet {amount}, balance {}", self.ledger.balance());
        Ok(())
    }

    /// Clears both hands and deals two cards each: player, dealer, player,
    /// dealer.
    ///
    /// Call [`Game::peek`] next to check for naturals.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in betting state or no bet has
    /// been placed.
    pub fn start_round(&mut self) -> Result<(), DealError> {
        if self.state != GameState::Betting {
            return Err(DealError::InvalidState);
        }
        if self.ledger.current_bet() == 0 {
            return Err(DealError::NoBet);
        }

        self.player.clear();
        self.dealer.clear();
        self.doubled = false;
        self.result = None;

        for _ in 0..2 {
            let card = self.draw();
            self.player.add_card(card);
            let card = self.draw();
            self.dealer.add_card(card);
        }

        debug!(
            "dealt: player {} ({}), dealer shows {}",
            self.player.len(),
            self.player.value(),
            self.dealer.visible_value()
        );
        self.state = GameState::Dealt;
        Ok(())
    }

    /// Checks both hands for naturals before the player acts.
    ///
    /// A dealer natural ends the round at once: a push if the player also
    /// has one, otherwise a loss. A player natural alone ends the round as a
    /// 3:2 win without the dealer drawing. Otherwise the player's turn
    /// begins and `None` is returned.
    ///
    /// # Errors
    ///
    /// Returns an error if the cards have not just been dealt.
    pub fn peek(&mut self) -> Result<Option<RoundResult>, DealError> {
        if self.state != GameState::Dealt {
            return Err(DealError::InvalidState);
        }

        let outcome = match (self.player.is_blackjack(), self.dealer.is_blackjack()) {
            (true, true) => Some(Outcome::BothBlackjack),
            (false, true) => Some(Outcome::DealerBlackjack),
            (true, false) => Some(Outcome::PlayerBlackjack),
            (false, false) => None,
        };

        Ok(match outcome {
            Some(outcome) => Some(self.resolve(outcome)),
            None => {
                self.state = GameState::PlayerTurn;
                None
            }
        })
    }
}
