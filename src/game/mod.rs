//! Game engine and state management.

use log::info;

use crate::card::Card;
use crate::error::ShowdownError;
use crate::hand::{DealerHand, Hand};
use crate::ledger::{SessionLedger, Statistics};
use crate::options::GameOptions;
use crate::result::{Outcome, RoundResult};
use crate::shoe::Shoe;
use crate::view::TableView;

mod actions;
mod bet;
mod dealer;
pub mod state;

pub use actions::Action;
pub use bet::{check_bet, valid_bet};
pub use dealer::{DEALER_STANDS_ON, determine_winner};
pub use state::GameState;

/// A single-player blackjack table.
///
/// The game owns the shoe, both hands, and the session ledger. One round at
/// a time runs through [`GameState`]; the ledger carries over between rounds.
#[derive(Debug, Clone)]
pub struct Game {
    shoe: Shoe,
    options: GameOptions,
    state: GameState,
    player: Hand,
    dealer: DealerHand,
    ledger: SessionLedger,
    doubled: bool,
    result: Option<RoundResult>,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::{Game, GameOptions, GameState};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.state(), GameState::Betting);
    /// assert_eq!(game.balance(), 1000);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let shoe = Shoe::with_threshold(options.decks, options.reshuffle_threshold, seed);
        let ledger = SessionLedger::new(options.starting_balance);

        Self {
            shoe,
            options,
            state: GameState::Betting,
            player: Hand::new(),
            dealer: DealerHand::new(),
            ledger,
            doubled: false,
            result: None,
        }
    }

    fn draw(&mut self) -> Card {
        self.shoe.draw()
    }

    /// Settles `outcome` against the ledger and ends the round.
    fn resolve(&mut self, outcome: Outcome) -> RoundResult {
        self.dealer.reveal_hole();
        let bet = self.ledger.current_bet();
        let payout = self.ledger.settle(outcome);

        #[expect(clippy::cast_possible_wrap, reason = "chip counts fit in isize")]
        let net = payout as isize - bet as isize;
        let result = RoundResult {
            outcome,
            bet,
            payout,
            net,
            player_value: self.player.value(),
            dealer_value: self.dealer.value(),
        };

        info!(
            "round over: {outcome} (player {}, dealer {}), net {net}",
            result.player_value, result.dealer_value
        );
        self.result = Some(result);
        self.state = GameState::Resolved;
        result
    }

    /// Returns the game options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &DealerHand {
        &self.dealer
    }

    /// Returns the shoe.
    #[must_use]
    pub const fn shoe(&self) -> &Shoe {
        &self.shoe
    }

    /// Returns the shoe mutably, e.g. to [`Shoe::stack`] a known deal.
    pub const fn shoe_mut(&mut self) -> &mut Shoe {
        &mut self.shoe
    }

    /// Returns the number of cards remaining in the shoe.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.shoe.len()
    }

    /// Returns the session ledger.
    #[must_use]
    pub const fn ledger(&self) -> &SessionLedger {
        &self.ledger
    }

    /// Returns the current balance.
    #[must_use]
    pub const fn balance(&self) -> usize {
        self.ledger.balance()
    }

    /// Returns the bet riding on this round.
    #[must_use]
    pub const fn current_bet(&self) -> usize {
        self.ledger.current_bet()
    }

    /// Returns whether the player has doubled down this round.
    #[must_use]
    pub const fn is_doubled(&self) -> bool {
        self.doubled
    }

    /// Returns the result of the round, once resolved.
    #[must_use]
    pub const fn result(&self) -> Option<&RoundResult> {
        self.result.as_ref()
    }

    /// Returns whether the player is out of chips.
    #[must_use]
    pub const fn is_bankrupt(&self) -> bool {
        self.ledger.balance() == 0
    }

    /// Returns the session statistics.
    #[must_use]
    pub const fn statistics(&self) -> Statistics {
        self.ledger.statistics()
    }

    /// Returns what the player can see at the table right now.
    ///
    /// The dealer's hole card stays hidden until the round resolves or the
    /// dealer starts drawing.
    #[must_use]
    pub fn view(&self) -> TableView {
        TableView {
            dealer_cards: self.dealer.visible_cards().to_vec(),
            dealer_hole_hidden: !self.dealer.is_hole_revealed() && self.dealer.len() > 1,
            dealer_value: self.dealer.visible_value(),
            player_cards: self.player.cards().to_vec(),
            player_value: self.player.value(),
            balance: self.ledger.balance(),
            current_bet: self.ledger.current_bet(),
            cards_remaining: self.shoe.len(),
        }
    }

    /// Clears the finished round and returns to betting.
    ///
    /// Does nothing while already betting.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is still in progress.
    pub fn clear_round(&mut self) -> Result<(), ShowdownError> {
        match self.state {
            GameState::Betting => Ok(()),
            GameState::Resolved => {
                self.player.clear();
                self.dealer.clear();
                self.ledger.clear_bet();
                self.doubled = false;
                self.result = None;
                self.state = GameState::Betting;
                Ok(())
            }
            GameState::Dealt | GameState::PlayerTurn | GameState::DealerTurn => {
                Err(ShowdownError::InvalidState)
            }
        }
    }
}
