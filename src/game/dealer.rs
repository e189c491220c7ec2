use log::debug;

use crate::error::ShowdownError;
use crate::hand::{BLACKJACK, Hand};
use crate::result::{Outcome, RoundResult};

use super::{Game, GameState};

/// The dealer draws below this total and stands on it or above, soft 17
/// included.
pub const DEALER_STANDS_ON: u8 = 17;

/// Decides a round from the final hands.
///
/// Rules are checked in order and the first match wins:
/// 1. player over 21 loses, whatever the dealer holds;
/// 2. dealer over 21 loses;
/// 3. a lone player natural wins 3:2;
/// 4. a lone dealer natural wins;
/// 5. two naturals push;
/// 6. otherwise the higher total wins and equal totals push.
///
/// ```
/// use bjtable::{Card, Hand, Outcome, determine_winner};
///
/// let cards = |s: &[&str]| s.iter().map(|c| c.parse::<Card>().unwrap()).collect::<Hand>();
/// let player = cards(&["10♠", "5♥", "7♣"]);
/// let dealer = cards(&["10♦", "6♣", "10♥"]);
/// assert_eq!(determine_winner(&player, &dealer), Outcome::PlayerBust);
/// ```
#[must_use]
pub fn determine_winner(player: &Hand, dealer: &Hand) -> Outcome {
    let player_value = player.value();
    let dealer_value = dealer.value();

    if player_value > BLACKJACK {
        return Outcome::PlayerBust;
    }
    if dealer_value > BLACKJACK {
        return Outcome::DealerBust;
    }

    match (player.is_blackjack(), dealer.is_blackjack()) {
        (true, false) => Outcome::PlayerBlackjack,
        (false, true) => Outcome::DealerBlackjack,
        (true, true) => Outcome::BothBlackjack,
        (false, false) => match player_value.cmp(&dealer_value) {
            core::cmp::Ordering::Greater => Outcome::PlayerHigher,
            core::cmp::Ordering::Less => Outcome::DealerHigher,
            core::cmp::Ordering::Equal => Outcome::Push,
        },
    }
}

impl Game {
    /// Dealer reveals the hole card and draws until reaching 17 or more,
    /// then the round is settled.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in dealer turn state.
    pub fn dealer_play(&mut self) -> Result<RoundResult, ShowdownError> {
        if self.state != GameState::DealerTurn {
            return Err(ShowdownError::InvalidState);
        }

        self.dealer.reveal_hole();
        while self.dealer.value() < DEALER_STANDS_ON {
            let card = self.draw();
            self.dealer.add_card(card);
            debug!("dealer draws {card}, total {}", self.dealer.value());
        }

        let outcome = self.determine_winner();
        Ok(self.resolve(outcome))
    }

    /// Decides the round from the hands as they stand now.
    #[must_use]
    pub fn determine_winner(&self) -> Outcome {
        determine_winner(&self.player, self.dealer.hand())
    }
}
