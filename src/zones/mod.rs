//! Card zones: the deck / hand / discard pile family.
//!
//! All three zones share the `CardPile` base contract (append, shuffle,
//! removal by ID, flag mutation, discovery sampling) and differ in the
//! operations they add on top:
//!
//! - `Deck`: LIFO draw (`draw_n` / `draw`)
//! - `Hand`: non-removing random peek (`random_card`)
//! - `DiscardPile`: the base contract only
//!
//! An operation a zone does not allow simply does not exist on its type.

pub mod deck;
pub mod discard;
pub mod hand;
pub mod pile;

pub use deck::Deck;
pub use discard::DiscardPile;
pub use hand::Hand;
pub use pile::{CardBatch, CardPile, Discovery, DISCOVERY_SLOTS};
