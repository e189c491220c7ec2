//! Game state types.

/// Round state.
///
/// A round moves `Betting → Dealt → PlayerTurn → DealerTurn → Resolved`.
/// Naturals and player busts skip straight to `Resolved`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameState {
    /// Accepting a bet for the next round.
    #[default]
    Betting,
    /// Initial cards are out; naturals have not been checked yet.
    Dealt,
    /// Waiting for player actions.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Round has been settled against the ledger.
    Resolved,
}
