//! Driver protocol violations.
//!
//! Every variant names an operation invoked against an invariant the
//! surrounding driver should have upheld. These are not recoverable game
//! states: a failing operation aborts without undoing moves that earlier
//! operations already completed.
//!
//! Absent IDs in bulk operations and drawing from an empty deck are *not*
//! errors; those degrade to no-ops by design.

use thiserror::Error;

use crate::cards::CardId;

/// A named driver protocol violation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// A selection named a card that is not in the player's hand.
    #[error("{0} is not in hand")]
    CardNotInHand(CardId),

    /// A selection arrived while another card is already selected.
    #[error("a card is already selected")]
    SelectionOccupied,

    /// The selected-card slot was empty when a discard was requested.
    #[error("no card is selected")]
    NoSelectedCard,

    /// A discovery was resolved with a card that is not a candidate.
    #[error("{0} is not among the discovery candidates")]
    InvalidDiscoveryChoice(CardId),

    /// Combat began before both players had a selected card.
    #[error("reached combat before both players were ready")]
    CombatUnready,

    /// A selection was submitted while the game was not awaiting any.
    #[error("game is not awaiting selections")]
    NotAwaitingSelections,

    /// A new round was started while one is still in progress.
    #[error("a round is already in progress")]
    RoundInProgress,
}
