//! Rock-paper-scissors elements.
//!
//! Every card carries exactly one element, fixed at creation. Combat
//! compares the two selected cards' elements; see `game::combat` for the
//! resolution table.

use serde::{Deserialize, Serialize};

/// The element tagged on a card.
///
/// Elements map to stable numeric values (`rock = 0`, `paper = 1`,
/// `scissors = 2`) used by combat resolution. On the wire they serialize
/// as lowercase words.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Rock,
    Paper,
    Scissors,
}

impl Element {
    /// All elements, in value order.
    pub const ALL: [Element; 3] = [Element::Rock, Element::Paper, Element::Scissors];

    /// Numeric value used by combat comparison.
    #[must_use]
    pub const fn value(self) -> u8 {
        match self {
            Element::Rock => 0,
            Element::Paper => 1,
            Element::Scissors => 2,
        }
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Element::Rock => "rock",
            Element::Paper => "paper",
            Element::Scissors => "scissors",
        };
        write!(f, "{}", name)
    }
}
