//! The shared base for every card zone.
//!
//! A `CardPile` is an ordered, owned collection of cards with no duplicate
//! IDs. `Deck`, `Hand`, and `DiscardPile` wrap it and expose only the
//! operations their zone allows.
//!
//! Bulk operations referencing absent IDs are benign no-ops: unmatched IDs
//! are silently skipped, never errors.

use smallvec::SmallVec;

use crate::cards::{Card, CardId};
use crate::core::GameRng;

/// Number of candidate slots a discovery offers.
pub const DISCOVERY_SLOTS: usize = 3;

/// Up to three candidate card IDs offered by a discovery.
///
/// Unused slots are `None`: a pile holding fewer than three cards fills
/// exactly as many slots as it has cards.
pub type Discovery = [Option<CardId>; DISCOVERY_SLOTS];

/// Small inline buffer for cards removed or drawn in one operation.
pub type CardBatch = SmallVec<[Card; 4]>;

/// Ordered, owned pile of cards.
///
/// Cards enter at the end (`add`) and keep their relative order through
/// every bulk operation. The pile owns its cards outright; removal
/// operations transfer that ownership to the caller.
#[derive(Clone, Debug, Default)]
pub struct CardPile {
    cards: Vec<Card>,
}

impl CardPile {
    /// Create a pile owning the given cards, preserving their order.
    #[must_use]
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Number of cards in the pile.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Is the pile empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Append cards to the end of the pile.
    pub fn add(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.cards.extend(cards);
    }

    /// Shuffle the pile in place.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.cards);
    }

    /// IDs of all cards, in pile order.
    #[must_use]
    pub fn ids(&self) -> Vec<CardId> {
        self.cards.iter().map(Card::id).collect()
    }

    /// Does the pile hold a card with this ID?
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.iter().any(|card| card.id() == id)
    }

    /// Borrow a card by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.iter().find(|card| card.id() == id)
    }

    /// Iterate over the cards in pile order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Remove and return the card with the given ID.
    ///
    /// Returns `None` if no card matches; the pile is unchanged.
    pub fn remove_by_id(&mut self, id: CardId) -> Option<Card> {
        let index = self.cards.iter().position(|card| card.id() == id)?;
        Some(self.cards.remove(index))
    }

    /// Remove and return every card whose ID is in `ids`.
    ///
    /// The returned cards keep their pile order, as does the remainder.
    /// Unmatched IDs are skipped; an empty `ids` list is a no-op.
    pub fn remove_by_ids(&mut self, ids: &[CardId]) -> CardBatch {
        if ids.is_empty() {
            return CardBatch::new();
        }

        let mut removed = CardBatch::new();
        let mut remaining = Vec::with_capacity(self.cards.len());

        for card in self.cards.drain(..) {
            if ids.contains(&card.id()) {
                removed.push(card);
            } else {
                remaining.push(card);
            }
        }

        self.cards = remaining;
        removed
    }

    /// Mark the cards with the given IDs as revealed.
    pub fn set_revealed_by_id(&mut self, ids: &[CardId]) {
        for card in &mut self.cards {
            if ids.contains(&card.id()) {
                card.set_revealed(true);
            }
        }
    }

    /// Set the playable flag on the cards with the given IDs.
    pub fn set_playable_by_id(&mut self, playable: bool, ids: &[CardId]) {
        for card in &mut self.cards {
            if ids.contains(&card.id()) {
                card.set_playable(playable);
            }
        }
    }

    /// Set the playable flag on every card in the pile.
    pub fn set_playability_all(&mut self, playable: bool) {
        for card in &mut self.cards {
            card.set_playable(playable);
        }
    }

    /// Offer up to three distinct candidate cards, chosen uniformly at
    /// random without replacement.
    ///
    /// Candidates are **not** removed; the result only names them. A pile
    /// with fewer than three cards fills fewer slots, and an empty pile
    /// yields all-`None`.
    #[must_use]
    pub fn discover(&self, rng: &mut GameRng) -> Discovery {
        let mut result: Discovery = [None; DISCOVERY_SLOTS];
        let sampled = rng.sample_distinct(self.cards.len(), DISCOVERY_SLOTS);

        for (slot, index) in result.iter_mut().zip(sampled) {
            *slot = Some(self.cards[index].id());
        }

        result
    }

    /// Remove and return the card at the draw end (the end `add` appends
    /// to), or `None` if the pile is empty.
    pub(crate) fn take_last(&mut self) -> Option<Card> {
        self.cards.pop()
    }
}
