//! Card catalog for static data lookup.
//!
//! The `CardCatalog` stores every `CardInfo` a game can use. It provides
//! fast lookup by `CardId` and spawns `Card` instances for deck building.
//! Loading the catalog from storage is the caller's concern; the engine
//! only consumes a populated catalog.

use rustc_hash::FxHashMap;

use super::card::{Card, CardId};
use super::info::CardInfo;

/// Registry of static card data.
///
/// ## Example
///
/// ```
/// use rps_duel::cards::{CardCatalog, CardInfo, CardId};
/// use rps_duel::core::Element;
///
/// let mut catalog = CardCatalog::new();
/// catalog.register(CardInfo::new(CardId::new(1), "Granite Fist", Element::Rock));
///
/// let card = catalog.spawn(CardId::new(1)).unwrap();
/// assert_eq!(card.element(), Element::Rock);
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    cards: FxHashMap<CardId, CardInfo>,
}

impl CardCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a card entry.
    ///
    /// Panics if an entry with the same ID already exists.
    pub fn register(&mut self, info: CardInfo) {
        if self.cards.contains_key(&info.id) {
            panic!("{} already registered in catalog", info.id);
        }
        self.cards.insert(info.id, info);
    }

    /// Get a card entry by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&CardInfo> {
        self.cards.get(&id)
    }

    /// Create a playable `Card` instance for a catalog entry.
    ///
    /// Returns `None` if the ID is not in the catalog.
    #[must_use]
    pub fn spawn(&self, id: CardId) -> Option<Card> {
        self.cards.get(&id).map(|info| Card::new(info.id, info.element))
    }

    /// Create `Card` instances for a list of IDs, skipping unknown ones.
    #[must_use]
    pub fn spawn_all(&self, ids: &[CardId]) -> Vec<Card> {
        ids.iter().filter_map(|&id| self.spawn(id)).collect()
    }

    /// Number of registered entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Is the catalog empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all entries.
    pub fn iter(&self) -> impl Iterator<Item = &CardInfo> {
        self.cards.values()
    }

    /// Clone the catalog contents into an id-keyed map.
    ///
    /// Used to build the initial payload sent to clients.
    #[must_use]
    pub fn to_map(&self) -> FxHashMap<CardId, CardInfo> {
        self.cards.clone()
    }
}
