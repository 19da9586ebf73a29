//! The discard pile zone.
//!
//! A `DiscardPile` is a plain `CardPile` with no special access pattern:
//! cards land on it face-up and leave only by ID.

use crate::cards::{Card, CardId};
use crate::core::GameRng;

use super::pile::{CardBatch, CardPile, Discovery};

/// A player's discard pile.
#[derive(Clone, Debug, Default)]
pub struct DiscardPile {
    pile: CardPile,
}

impl DiscardPile {
    /// Create a discard pile owning the given cards.
    #[must_use]
    pub fn new(cards: Vec<Card>) -> Self {
        Self {
            pile: CardPile::new(cards),
        }
    }

    /// Number of cards in the pile.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pile.len()
    }

    /// Is the pile empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pile.is_empty()
    }

    /// Append cards to the pile.
    pub fn add(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.pile.add(cards);
    }

    /// Shuffle the pile in place.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        self.pile.shuffle(rng);
    }

    /// IDs of all cards, in pile order.
    #[must_use]
    pub fn ids(&self) -> Vec<CardId> {
        self.pile.ids()
    }

    /// Does the pile hold a card with this ID?
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.pile.contains(id)
    }

    /// Remove and return the card with the given ID.
    pub fn remove_by_id(&mut self, id: CardId) -> Option<Card> {
        self.pile.remove_by_id(id)
    }

    /// Remove and return every card whose ID is in `ids`.
    pub fn remove_by_ids(&mut self, ids: &[CardId]) -> CardBatch {
        self.pile.remove_by_ids(ids)
    }

    /// Mark the cards with the given IDs as revealed.
    pub fn set_revealed_by_id(&mut self, ids: &[CardId]) {
        self.pile.set_revealed_by_id(ids);
    }

    /// Set the playable flag on the cards with the given IDs.
    pub fn set_playable_by_id(&mut self, playable: bool, ids: &[CardId]) {
        self.pile.set_playable_by_id(playable, ids);
    }

    /// Set the playable flag on every card.
    pub fn set_playability_all(&mut self, playable: bool) {
        self.pile.set_playability_all(playable);
    }

    /// Offer up to three candidate cards without removing them.
    #[must_use]
    pub fn discover(&self, rng: &mut GameRng) -> Discovery {
        self.pile.discover(rng)
    }
}
