//! Card instances - runtime card state.
//!
//! A `Card` is the unit the zones move around. Its identity and element
//! never change after creation; the `revealed` and `playable` flags mutate
//! in place as effects touch the card.
//!
//! Cards are owned values: whichever zone holds a card owns it outright,
//! and every move between zones transfers that ownership. A card is never
//! duplicated and never dropped by a move.

use serde::{Deserialize, Serialize};

use crate::core::Element;

/// Unique identifier for a card within one game.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "card {}", self.0)
    }
}

/// A card in play.
///
/// `id` and `element` are fixed at creation; `revealed` and `playable`
/// mutate in place.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Card {
    id: CardId,
    element: Element,
    revealed: bool,
    playable: bool,
}

impl Card {
    /// Create a new card. Cards start hidden and playable.
    #[must_use]
    pub fn new(id: CardId, element: Element) -> Self {
        Self {
            id,
            element,
            revealed: false,
            playable: true,
        }
    }

    /// The card's identifier.
    #[must_use]
    pub fn id(&self) -> CardId {
        self.id
    }

    /// The card's element.
    #[must_use]
    pub fn element(&self) -> Element {
        self.element
    }

    /// Has this card been revealed to the opponent?
    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Can this card currently be played?
    #[must_use]
    pub fn is_playable(&self) -> bool {
        self.playable
    }

    /// Set the revealed flag.
    pub fn set_revealed(&mut self, revealed: bool) {
        self.revealed = revealed;
    }

    /// Set the playable flag.
    pub fn set_playable(&mut self, playable: bool) {
        self.playable = playable;
    }

    /// The stateful projection sent to clients.
    #[must_use]
    pub fn state(&self) -> CardState {
        CardState {
            id: self.id,
            revealed: self.revealed,
            playable: self.playable,
        }
    }
}

/// The stateful data about a card that clients see.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardState {
    pub id: CardId,
    pub revealed: bool,
    pub playable: bool,
}
