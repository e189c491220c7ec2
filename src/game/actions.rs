use core::str::FromStr;

use log::debug;

use crate::error::{ActionError, ActionParseError};
use crate::result::Outcome;

use super::{Game, GameState};

/// A player decision during their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Take another card.
    Hit,
    /// Keep the hand and pass to the dealer.
    Stand,
    /// Double the bet, take exactly one card, and stand.
    Double,
}

/// Accepts `hit`, `stand`, `double` or their first letters, in any case.
impl FromStr for Action {
    type Err = ActionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        [
            ("hit", Self::Hit),
            ("stand", Self::Stand),
            ("double", Self::Double),
        ]
        .into_iter()
        .find(|(name, _)| {
            token.eq_ignore_ascii_case(name) || token.eq_ignore_ascii_case(&name[..1])
        })
        .map(|(_, action)| action)
        .ok_or(ActionParseError)
    }
}

impl Game {
    const fn ensure_player_turn(&self) -> Result<(), ActionError> {
        if matches!(self.state, GameState::PlayerTurn) {
            Ok(())
        } else {
            Err(ActionError::InvalidState)
        }
    }

    /// Draws one card for the player, resolving the round on a bust.
    ///
    /// Returns whether the hand is still at or under 21.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn hit(&mut self) -> Result<bool, ActionError> {
        self.ensure_player_turn()?;

        let card = self.draw();
        self.player.add_card(card);
        debug!("player hits {card}, total {}", self.player.value());

        if self.player.is_bust() {
            self.resolve(Outcome::PlayerBust);
            return Ok(false);
        }
        Ok(true)
    }

    /// Ends the player's turn.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn stand(&mut self) -> Result<(), ActionError> {
        self.ensure_player_turn()?;

        debug!("player stands on {}", self.player.value());
        self.state = GameState::DealerTurn;
        Ok(())
    }

    /// Checks whether a double down is allowed right now.
    ///
    /// # Errors
    ///
    /// Returns why doubling is not allowed: already doubled this round,
    /// wrong state, not exactly two cards, or not enough chips to match the
    /// bet.
    pub fn check_double(&self) -> Result<(), ActionError> {
        if self.doubled {
            return Err(ActionError::AlreadyDoubled);
        }
        self.ensure_player_turn()?;
        if self.player.len() != 2 {
            return Err(ActionError::CannotDouble);
        }
        if self.ledger.current_bet() > self.ledger.balance() {
            return Err(ActionError::InsufficientFunds);
        }
        Ok(())
    }

    /// Returns whether a double down is allowed right now.
    #[must_use]
    pub fn can_double(&self) -> bool {
        self.check_double().is_ok()
    }

    /// Doubles the bet, draws exactly one card, and ends the player's turn.
    ///
    /// Returns whether the hand is still at or under 21. A bust resolves the
    /// round at once; otherwise the dealer plays next.
    ///
    /// # Errors
    ///
    /// Returns an error, leaving the game untouched, if doubling is not
    /// allowed (see [`Game::check_double`]).
    pub fn double_down(&mut self) -> Result<bool, ActionError> {
        self.check_double()?;

        self.ledger.double_bet()?;
        self.doubled = true;

        let card = self.draw();
        self.player.add_card(card);
        debug!(
            "player doubles to {}, draws {card}, total {}",
            self.ledger.current_bet(),
            self.player.value()
        );

        if self.player.is_bust() {
            self.resolve(Outcome::PlayerBust);
            return Ok(false);
        }
        self.state = GameState::DealerTurn;
        Ok(true)
    }

    /// Applies a parsed player action.
    ///
    /// Returns whether the hand is still at or under 21.
    ///
    /// # Errors
    ///
    /// Returns the error of the underlying action.
    pub fn act(&mut self, action: Action) -> Result<bool, ActionError> {
        match action {
            Action::Hit => self.hit(),
            Action::Stand => self.stand().map(|()| true),
            Action::Double => self.double_down(),
        }
    }
}
