//! The deck zone.
//!
//! A `Deck` is a `CardPile` with LIFO draw semantics: `draw_n` removes
//! cards from the same end `add` appends to, so the most recently added
//! card is drawn first.

use crate::cards::{Card, CardId};
use crate::core::GameRng;

use super::pile::{CardBatch, CardPile, Discovery};

/// A player's deck.
#[derive(Clone, Debug, Default)]
pub struct Deck {
    pile: CardPile,
}

impl Deck {
    /// Create a deck owning the given cards. The last card is the top.
    #[must_use]
    pub fn new(cards: Vec<Card>) -> Self {
        Self {
            pile: CardPile::new(cards),
        }
    }

    /// Remove up to `count` cards from the top, stopping early if the
    /// deck empties. Drawn cards are returned in removal order.
    pub fn draw_n(&mut self, count: usize) -> CardBatch {
        let mut drawn = CardBatch::new();
        for _ in 0..count {
            match self.pile.take_last() {
                Some(card) => drawn.push(card),
                None => break,
            }
        }
        drawn
    }

    /// Remove and return the top card, or `None` if the deck is empty.
    pub fn draw(&mut self) -> Option<Card> {
        self.pile.take_last()
    }

    // Shared pile contract

    /// Number of cards in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pile.len()
    }

    /// Is the deck empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pile.is_empty()
    }

    /// Append cards to the top of the deck.
    pub fn add(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.pile.add(cards);
    }

    /// Shuffle the deck in place.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        self.pile.shuffle(rng);
    }

    /// IDs of all cards, bottom to top.
    #[must_use]
    pub fn ids(&self) -> Vec<CardId> {
        self.pile.ids()
    }

    /// Does the deck hold a card with this ID?
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
