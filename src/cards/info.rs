//! Static card data.
//!
//! `CardInfo` holds the unchanging properties of a card: its name,
//! element, effect text, and artwork URL. It is loaded once per game and
//! never mutates; the runtime state lives on `Card`.

use serde::{Deserialize, Serialize};

use super::card::CardId;
use crate::core::Element;

/// Static catalog entry for one card.
///
/// ## Example
///
/// ```
/// use rps_duel::cards::{CardInfo, CardId};
/// use rps_duel::core::Element;
///
/// let info = CardInfo::new(CardId::new(1), "Granite Fist", Element::Rock)
///     .with_effect_text("Reveal the top card of your deck.");
///
/// assert_eq!(info.element, Element::Rock);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardInfo {
    /// Unique identifier for this card.
    pub id: CardId,

    /// Card name (for display).
    pub name: String,

    /// The card's element.
    pub element: Element,

    /// Rules text shown to players.
    #[serde(default)]
    pub effect_text: String,

    /// Artwork location.
    #[serde(default)]
    pub img_url: String,
}

impl CardInfo {
    /// Create a new catalog entry with empty effect text and artwork.
    #[must_use]
    pub fn new(id: CardId, name: impl Into<String>, element: Element) -> Self {
        Self {
            id,
            name: name.into(),
            element,
            effect_text: String::new(),
            img_url: String::new(),
        }
    }

    /// Set the rules text (builder pattern).
    #[must_use]
    pub fn with_effect_text(mut self, text: impl Into<String>) -> Self {
        self.effect_text = text.into();
        self
    }

    /// Set the artwork URL (builder pattern).
    #[must_use]
    pub fn with_img_url(mut self, url: impl Into<String>) -> Self {
        self.img_url = url.into();
        self
    }
}
