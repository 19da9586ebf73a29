//! A player and all of their cards.
//!
//! `Player` is the sole owner of its three zones (deck, hand, discard
//! pile) and the at-most-one selected card. Every legal card movement is
//! a method here, and each one transfers card ownership atomically: the
//! multiset of card IDs across the four zones never changes except by the
//! documented operations (of which none create or destroy cards), so
//! `total_cards()` is constant for the life of a game.

use tracing::debug;

use crate::cards::{Card, CardId};
use crate::core::{GameRng, Seat};
use crate::error::GameError;
use crate::snapshot::PlayerSnapshot;
use crate::zones::{Deck, DiscardPile, Discovery, Hand};

/// Where a discovery samples its candidates from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DiscoverySource {
    Deck,
    Discard,
}

/// A pending discovery: the source it sampled and the candidates offered.
///
/// Exists only between a `discover` call and its resolution. The
/// candidates stay in their source until one of them is claimed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DiscoveryInfo {
    pub source: DiscoverySource,
    pub candidates: Discovery,
}

/// One side of the table: zones, points, selection, and discovery state.
#[derive(Clone, Debug)]
pub struct Player {
    seat: Seat,
    points: i64,
    can_gain_points: bool,
    selected: Option<Card>,
    hand: Hand,
    deck: Deck,
    discard: DiscardPile,
    discovery: Option<DiscoveryInfo>,
    initial_cards: Vec<Card>,
}

impl Player {
    /// Create a player whose deck owns the given cards.
    ///
    /// The card list is remembered so `reset` can restore it.
    #[must_use]
    pub fn new(seat: Seat, cards: Vec<Card>) -> Self {
        Self {
            seat,
            points: 0,
            can_gain_points: true,
            selected: None,
            hand: Hand::default(),
            deck: Deck::new(cards.clone()),
            discard: DiscardPile::default(),
            discovery: None,
            initial_cards: cards,
        }
    }

    // === Accessors ===

    /// This player's seat.
    #[must_use]
    pub fn seat(&self) -> Seat {
        self.seat
    }

    /// Current points. May be negative.
    #[must_use]
    pub fn points(&self) -> i64 {
        self.points
    }

    /// Can this player currently gain points?
    #[must_use]
    pub fn can_gain_points(&self) -> bool {
        self.can_gain_points
    }

    /// Freeze or unfreeze point gain. While frozen, `add_points` is a
    /// no-op; losses still apply.
    pub fn set_can_gain_points(&mut self, value: bool) {
        self.can_gain_points = value;
    }

    /// The card in the selected slot, if any.
    #[must_use]
    pub fn selected_card(&self) -> Option<&Card> {
        self.selected.as_ref()
    }

    /// The player's hand.
    #[must_use]
    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    /// The player's deck.
    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// The player's discard pile.
    #[must_use]
    pub fn discard_pile(&self) -> &DiscardPile {
        &self.discard
    }

    /// The pending discovery, if one is unresolved.
    #[must_use]
    pub fn discovery(&self) -> Option<&DiscoveryInfo> {
        self.discovery.as_ref()
    }

    /// True iff hand and deck are both empty. The discard pile and the
    /// selected slot do not count.
    #[must_use]
    pub fn out_of_cards(&self) -> bool {
        self.hand.is_empty() && self.deck.is_empty()
    }

    /// Total cards across all four zones. Constant for the life of a
    /// game; useful for checking the conservation invariant.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.hand.len()
            + self.deck.len()
            + self.discard.len()
            + usize::from(self.selected.is_some())
    }

    /// IDs of the cards this player's deck started with.
    #[must_use]
    pub fn initial_deck_ids(&self) -> Vec<CardId> {
        self.initial_cards.iter().map(Card::id).collect()
    }

    // === Card movement ===

    /// Move up to `count` cards from the deck to the hand. Fewer move if
    /// the deck runs out; never an error.
    pub fn draw(&mut self, count: usize) {
        let drawn = self.deck.draw_n(count);
        self.hand.add(drawn);
    }

    /// Move up to `count` cards from the deck to the discard pile.
    pub fn mill(&mut self, count: usize) {
        let milled = self.deck.draw_n(count);
        self.discard.add(milled);
    }

    /// Move the matching cards from the discard pile to the hand.
    /// Unmatched IDs are silently skipped.
    pub fn reload_by_ids(&mut self, ids: &[CardId]) {
        let reloaded = self.discard.remove_by_ids(ids);
        self.hand.add(reloaded);
    }

    /// Move the matching cards from the hand to the discard pile.
    pub fn discard_by_ids(&mut self, ids: &[CardId]) {
        let discarded = self.hand.remove_by_ids(ids);
        self.discard.add(discarded);
    }

    /// Move the matching cards from the hand into the deck, then shuffle
    /// the deck.
    pub fn shuffle_hand_into_deck_by_id(&mut self, ids: &[CardId], rng: &mut GameRng) {
        let removed = self.hand.remove_by_ids(ids);
        self.deck.add(removed);
        self.deck.shuffle(rng);
    }

    /// Move the matching cards from the discard pile into the deck, then
    /// shuffle the deck.
    pub fn shuffle_discard_into_deck_by_id(&mut self, ids: &[CardId], rng: &mut GameRng) {
        let refreshed = self.discard.remove_by_ids(ids);
        self.deck.add(refreshed);
        self.deck.shuffle(rng);
    }

    /// Move a card from the hand to the selected slot.
    ///
    /// Fails with `CardNotInHand` if no card in hand has the ID, and with
    /// `SelectionOccupied` if a selection already exists; the hand is
    /// unchanged in both cases.
    pub fn select_card_by_id(&mut self, id: CardId) -> Result<(), GameError> {
        if self.selected.is_some() {
            return Err(GameError::SelectionOccupied);
        }

        let card = self
            .hand
            .remove_by_id(id)
            .ok_or(GameError::CardNotInHand(id))?;
        debug!(seat = %self.seat, %id, "card selected");
        self.selected = Some(card);
        Ok(())
    }

    /// Move the selected card to the discard pile.
    ///
    /// Fails with `NoSelectedCard` if the slot is empty.
    pub fn discard_selected_card(&mut self) -> Result<(), GameError> {
        let card = self.selected.take().ok_or(GameError::NoSelectedCard)?;
        self.discard.add([card]);
        Ok(())
    }

    // === Discovery ===

    /// Sample up to three candidate cards from the named source.
    ///
    /// Overwrites any prior unresolved discovery. Candidates are not
    /// removed from the source.
    pub fn discover(&mut self, source: DiscoverySource, rng: &mut GameRng) {
        let candidates = match source {
            DiscoverySource::Deck => self.deck.discover(rng),
            DiscoverySource::Discard => self.discard.discover(rng),
        };
        debug!(seat = %self.seat, ?source, ?candidates, "discovery offered");
        self.discovery = Some(DiscoveryInfo { source, candidates });
    }

    /// Claim one discovery candidate into the hand and clear the
    /// discovery. The unchosen candidates stay in their source.
    ///
    /// No-op if no discovery is pending. Fails with
    /// `InvalidDiscoveryChoice` if `id` is not among the candidates (or
    /// has left the source since the offer); hand and source are
    /// unchanged on failure.
    pub fn resolve_discovery_choice(&mut self, id: CardId) -> Result<(), GameError> {
        let Some(discovery) = self.discovery else {
            return Ok(());
        };

        if !discovery.candidates.contains(&Some(id)) {
            return Err(GameError::InvalidDiscoveryChoice(id));
        }

        let card = match discovery.source {
            DiscoverySource::Deck => self.deck.remove_by_id(id),
            DiscoverySource::Discard => self.discard.remove_by_id(id),
        }
        .ok_or(GameError::InvalidDiscoveryChoice(id))?;

        self.hand.add([card]);
        self.discovery = None;
        Ok(())
    }

    // === Points ===

    /// Gain `amount` points, unless point gain is frozen.
    pub fn add_points(&mut self, amount: i64) {
        if self.can_gain_points {
            self.points += amount;
        }
    }

    /// Lose `amount` points unconditionally. Points may go negative.
    pub fn subtract_points(&mut self, amount: i64) {
        self.points -= amount;
    }

    /// Multiply points unconditionally.
    pub fn multiply_points(&mut self, multiplier: i64) {
        self.points *= multiplier;
    }

    /// Divide points unconditionally, rounding up.
    pub fn divide_points(&mut self, divisor: i64) {
        assert!(divisor > 0, "divisor must be positive");
        // Ceiling division that also rounds -5/2 up to -2
        self.points = self.points.div_euclid(divisor)
            + i64::from(self.points.rem_euclid(divisor) != 0);
    }

    /// Award one point per card left in hand and deck, then empty both
    /// (hand to discard, deck milled). Point gain stays gated by
    /// `can_gain_points`.
    pub fn convert_remaining_cards_to_points(&mut self) {
        let hand_ids = self.hand.ids();
        if !hand_ids.is_empty() {
            self.add_points(hand_ids.len() as i64);
            self.discard_by_ids(&hand_ids);
        }

        let deck_len = self.deck.len();
        if deck_len > 0 {
            self.add_points(deck_len as i64);
            self.mill(deck_len);
        }

        debug!(seat = %self.seat, points = self.points, "remaining cards converted");
    }

    // === Hand flag passthroughs ===

    /// Mark the matching hand cards as revealed.
    pub fn reveal_in_hand(&mut self, ids: &[CardId]) {
        self.hand.set_revealed_by_id(ids);
    }

    /// Set the playable flag on the matching hand cards.
    pub fn set_playable_in_hand(&mut self, playable: bool, ids: &[CardId]) {
        self.hand.set_playable_by_id(playable, ids);
    }

    /// Set the playable flag on the whole hand.
    pub fn set_hand_playability(&mut self, playable: bool) {
        self.hand.set_playability_all(playable);
    }

    // === Lifecycle ===

    /// Return every card to the deck as the pristine initial set and
    /// shuffle it. Hand, discard, selection, and discovery state are
    /// discarded; points and the point-gain gate persist.
    pub fn reset(&mut self, rng: &mut GameRng) {
        self.deck = Deck::new(self.initial_cards.clone());
        self.deck.shuffle(rng);
        self.hand = Hand::default();
        self.discard = DiscardPile::default();
        self.selected = None;
        self.discovery = None;
    }

    /// The per-round projection sent to clients.
    #[must_use]
    pub fn snapshot(&self) -> PlayerSnapshot {
        PlayerSnapshot {
            hand: self.hand.ids(),
            deck_count: self.deck.len(),
            discard_count: self.discard.len(),
            points: self.points,
            discovery: self.discovery.map(|d| d.candidates),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Element;

    fn player_with_deck(ids: &[u32]) -> Player {
        Player::new(
            Seat::One,
            ids.iter()
                .map(|&id| Card::new(CardId::new(id), Element::Rock))
                .collect(),
        )
    }

    fn ids(raw: &[u32]) -> Vec<CardId> {
        raw.iter().map(|&id| CardId::new(id)).collect()
    }

    #[test]
    fn test_draw_moves_deck_to_hand() {
        let mut player = player_with_deck(&[1, 2, 3, 4, 5]);

        player.draw(1);
        assert_eq!(player.hand().ids(), ids(&[5]));
        assert_eq!(player.deck().ids(), ids(&[1, 2, 3, 4]));
    }

    #[test]
    fn test_mill_moves_deck_to_discard() {
        let mut player = player_with_deck(&[1, 2, 3, 4]);

        player.mill(2);
        assert_eq!(player.discard_pile().ids(), ids(&[4, 3]));
        assert_eq!(player.deck().ids(), ids(&[1, 2]));
        assert!(player.hand().is_empty());
    }

    #[test]
    fn test_draw_underflow_is_not_an_error() {
        let mut player = player_with_deck(&[1, 2]);

        player.draw(5);
        assert_eq!(player.hand().len(), 2);
        assert!(player.deck().is_empty());
    }

    #[test]
    fn test_reload_and_discard_by_ids() {
        let mut player = player_with_deck(&[1, 2, 3]);
        player.draw(3); // hand [3, 2, 1]
        player.discard_by_ids(&ids(&[2, 3]));

        assert_eq!(player.hand().ids(), ids(&[1]));
        assert_eq!(player.discard_pile().ids(), ids(&[3, 2]));

        player.reload_by_ids(&ids(&[2, 99]));
        assert_eq!(player.hand().ids(), ids(&[1, 2]));
        assert_eq!(player.discard_pile().ids(), ids(&[3]));
    }

    #[test]
    fn test_shuffle_hand_into_deck() {
        let mut player = player_with_deck(&[1, 2, 3]);
        let mut rng = GameRng::new(42);

        player.draw(3);
        player.shuffle_hand_into_deck_by_id(&ids(&[1, 2]), &mut rng);

        assert_eq!(player.hand().ids(), ids(&[3]));
        assert_eq!(player.deck().len(), 2);
        assert!(player.deck().contains(CardId::new(1)));
        assert!(player.deck().contains(CardId::new(2)));
    }

    #[test]
    fn test_shuffle_discard_into_deck() {
        let mut player = player_with_deck(&[1, 2, 3]);
        let mut rng = GameRng::new(42);

        player.mill(3);
        player.shuffle_discard_into_deck_by_id(&ids(&[3]), &mut rng);

        assert_eq!(player.deck().ids(), ids(&[3]));
        assert_eq!(player.discard_pile().len(), 2);
    }

    #[test]
    fn test_select_card() {
        let mut player = player_with_deck(&[1, 2]);
        player.draw(2);

        player.select_card_by_id(CardId::new(2)).unwrap();
        assert_eq!(player.selected_card().unwrap().id(), CardId::new(2));
        assert_eq!(player.hand().ids(), ids(&[1]));
    }

    #[test]
    fn test_select_card_not_in_hand() {
        let mut player = player_with_deck(&[1, 2]);
        player.draw(1);

        let err = player.select_card_by_id(CardId::new(1)).unwrap_err();
        assert_eq!(err, GameError::CardNotInHand(CardId::new(1)));
        assert_eq!(player.hand().ids(), ids(&[2])); // hand unchanged
    }

    #[test]
    fn test_select_twice_is_guarded() {
        let mut player = player_with_deck(&[1, 2]);
        player.draw(2);

        player.select_card_by_id(CardId::new(1)).unwrap();
        let err = player.select_card_by_id(CardId::new(2)).unwrap_err();

        assert_eq!(err, GameError::SelectionOccupied);
        // The first selection and the hand are both intact
        assert_eq!(player.selected_card().unwrap().id(), CardId::new(1));
        assert_eq!(player.hand().ids(), ids(&[2]));
    }

    #[test]
    fn test_discard_selected_card() {
        let mut player = player_with_deck(&[1]);
        player.draw(1);
        player.select_card_by_id(CardId::new(1)).unwrap();

        player.discard_selected_card().unwrap();
        assert!(player.selected_card().is_none());
        assert_eq!(player.discard_pile().ids(), ids(&[1]));

        let err = player.discard_selected_card().unwrap_err();
        assert_eq!(err, GameError::NoSelectedCard);
    }

    #[test]
    fn test_discovery_from_deck() {
        let mut player = player_with_deck(&[1, 2, 3, 4, 5]);
        let mut rng = GameRng::new(42);

        player.discover(DiscoverySource::Deck, &mut rng);
        let info = *player.discovery().unwrap();
        assert_eq!(info.source, DiscoverySource::Deck);

        let chosen = info.candidates[0].unwrap();
        player.resolve_discovery_choice(chosen).unwrap();

        assert!(player.hand().contains(chosen));
        assert_eq!(player.deck().len(), 4);
        assert!(player.discovery().is_none());

        // Unchosen candidates stayed in the deck
        for candidate in info.candidates.iter().flatten() {
            if *candidate != chosen {
                assert!(player.deck().contains(*candidate));
            }
        }
    }

    #[test]
    fn test_discovery_invalid_choice() {
        let mut player = player_with_deck(&[1, 2, 3, 4, 5]);
        let mut rng = GameRng::new(42);

        player.discover(DiscoverySource::Deck, &mut rng);
        let info = *player.discovery().unwrap();

        // An id that cannot be among the candidates
        let err = player.resolve_discovery_choice(CardId::new(99)).unwrap_err();
        assert_eq!(err, GameError::InvalidDiscoveryChoice(CardId::new(99)));

        // Nothing moved and the discovery is still pending
        assert!(player.hand().is_empty());
        assert_eq!(player.deck().len(), 5);
        assert_eq!(*player.discovery().unwrap(), info);
    }

    #[test]
    fn test_discovery_resolution_without_pending_is_noop() {
        let mut player = player_with_deck(&[1, 2]);

        player.resolve_discovery_choice(CardId::new(1)).unwrap();
        assert!(player.hand().is_empty());
        assert_eq!(player.deck().len(), 2);
    }

    #[test]
    fn test_discovery_overwrites_prior() {
        let mut player = player_with_deck(&[1, 2, 3, 4, 5]);
        let mut rng = GameRng::new(42);

        player.discover(DiscoverySource::Deck, &mut rng);
        player.mill(5);
        player.discover(DiscoverySource::Discard, &mut rng);

        assert_eq!(player.discovery().unwrap().source, DiscoverySource::Discard);
    }

    #[test]
    fn test_points_gating() {
        let mut player = player_with_deck(&[]);

        player.add_points(3);
        assert_eq!(player.points(), 3);

        player.set_can_gain_points(false);
        player.add_points(5);
        assert_eq!(player.points(), 3); // frozen, not capped

        player.subtract_points(5);
        assert_eq!(player.points(), -2); // losses still apply
    }

    #[test]
    fn test_points_multiply_divide() {
        let mut player = player_with_deck(&[]);

        player.add_points(5);
        player.multiply_points(2);
        assert_eq!(player.points(), 10);

        player.divide_points(4);
        assert_eq!(player.points(), 3); // ceil(10 / 4)
    }

    #[test]
    fn test_divide_negative_rounds_up() {
        let mut player = player_with_deck(&[]);

        player.subtract_points(5);
        player.divide_points(2);
        assert_eq!(player.points(), -2); // ceil(-5 / 2) = -2
    }

    #[test]
    fn test_convert_remaining_cards_to_points() {
        let mut player = player_with_deck(&[1, 2, 3, 4, 5]);
        player.draw(2);

        player.convert_remaining_cards_to_points();

        assert_eq!(player.points(), 5);
        assert!(player.hand().is_empty());
        assert!(player.deck().is_empty());
        assert_eq!(player.discard_pile().len(), 5);
    }

    #[test]
    fn test_convert_when_empty_gains_nothing() {
        let mut player = player_with_deck(&[]);
        player.convert_remaining_cards_to_points();
        assert_eq!(player.points(), 0);
    }

    #[test]
    fn test_out_of_cards() {
        let mut player = player_with_deck(&[1, 2]);
        assert!(!player.out_of_cards());

        player.mill(2);
        assert!(player.out_of_cards()); // discard does not count

        player.reload_by_ids(&ids(&[1]));
        assert!(!player.out_of_cards());
    }

    #[test]
    fn test_conservation_through_operations() {
        let mut player = player_with_deck(&[1, 2, 3, 4, 5]);
        let mut rng = GameRng::new(42);

        assert_eq!(player.total_cards(), 5);

        player.draw(2);
        player.mill(1);
        player.select_card_by_id(player.hand().ids()[0]).unwrap();
        player.shuffle_discard_into_deck_by_id(&ids(&[3]), &mut rng);

        assert_eq!(player.total_cards(), 5);
    }

    #[test]
    fn test_reset_restores_initial_deck() {
        let mut player = player_with_deck(&[1, 2, 3, 4, 5]);
        let mut rng = GameRng::new(42);

        player.draw(2);
        player.mill(1);
        player.select_card_by_id(player.hand().ids()[0]).unwrap();
        player.add_points(4);

        player.reset(&mut rng);

        assert_eq!(player.deck().len(), 5);
        assert!(player.hand().is_empty());
        assert!(player.discard_pile().is_empty());
        assert!(player.selected_card().is_none());
        assert!(player.discovery().is_none());
        assert_eq!(player.points(), 4); // points persist

        let mut deck_ids = player.deck().ids();
        deck_ids.sort();
        assert_eq!(deck_ids, ids(&[1, 2, 3, 4, 5]));
    }

    #[test]
    fn test_snapshot() {
        let mut player = player_with_deck(&[1, 2, 3]);
        player.draw(1);
        player.add_points(2);

        let snapshot = player.snapshot();
        assert_eq!(snapshot.hand, ids(&[3]));
        assert_eq!(snapshot.deck_count, 2);
        assert_eq!(snapshot.discard_count, 0);
        assert_eq!(snapshot.points, 2);
        assert_eq!(snapshot.discovery, None);
    }
}
