//! The hand zone.
//!
//! A `Hand` is a `CardPile` with a non-removing random peek, used by
//! effects that look at a random card without taking it.

use crate::cards::{Card, CardId};
use crate::core::GameRng;

use super::pile::{CardBatch, CardPile, Discovery};

/// A player's hand.
#[derive(Clone, Debug, Default)]
pub struct Hand {
    pile: CardPile,
}

impl Hand {
    /// Create a hand owning the given cards.
    #[must_use]
    pub fn new(cards: Vec<Card>) -> Self {
        Self {
            pile: CardPile::new(cards),
        }
    }

    /// Borrow a uniformly random card without removing it, or `None` if
    /// the hand is empty.
    #[must_use]
    pub fn random_card(&self, rng: &mut GameRng) -> Option<&Card> {
        let index = rng.choose_index(self.pile.len())?;
        self.pile.iter().nth(index)
    }

    // Shared pile contract

    /// Number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pile.len()
    }

    /// Is the hand empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pile.is_empty()
    }

    /// Append cards to the hand.
    pub fn add(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.pile.add(cards);
    }

    /// Shuffle the hand in place.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        self.pile.shuffle(rng);
    }

    /// IDs of all cards, in hand order.
    #[must_use]
    pub fn ids(&self) -> Vec<CardId> {
        self.pile.ids()
    }

    /// Does the hand hold a card with this ID?
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.pile.contains(id)
    }

    /// Borrow a card by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.pile.get(id)
    }

    /// Iterate over the cards in hand order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.pile.iter()
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Element;

    fn hand_of(ids: &[u32]) -> Hand {
        Hand::new(
            ids.iter()
                .map(|&id| Card::new(CardId::new(id), Element::Paper))
                .collect(),
        )
    }

    #[test]
    fn test_random_card_does_not_remove() {
        let hand = hand_of(&[1, 2, 3]);
        let mut rng = GameRng::new(42);

        for _ in 0..20 {
            let card = hand.random_card(&mut rng).unwrap();
            assert!(hand.contains(card.id()));
        }

        assert_eq!(hand.len(), 3);
    }

    #[test]
    fn test_random_card_empty() {
        let hand = Hand::default();
        let mut rng = GameRng::new(42);

        assert!(hand.random_card(&mut rng).is_none());
    }

    #[test]
    fn test_random_card_covers_all_cards() {
        let hand = hand_of(&[1, 2, 3]);
        let mut rng = GameRng::new(42);

        let mut seen = std::collections::HashSet::new();
        for _ in 0..100 {
            seen.insert(hand.random_card(&mut rng).unwrap().id());
        }

        assert_eq!(seen.len(), 3);
    }
}
