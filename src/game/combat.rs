//! Combat resolution.
//!
//! Combat compares the two selected cards' elements by numeric value:
//! equal elements draw, otherwise the higher value wins — except the
//! scissors-versus-rock pair, where rock (the lower value) wins. That one
//! wraparound yields the full cyclic dominance: rock beats scissors,
//! scissors beats paper, paper beats rock.

use crate::core::{Element, Seat};

/// Result of one combat comparison.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CombatOutcome {
    /// The given seat won.
    Winner(Seat),
    /// Equal elements.
    Draw,
}

impl CombatOutcome {
    /// Did the given seat win?
    #[must_use]
    pub fn is_winner(self, seat: Seat) -> bool {
        self == CombatOutcome::Winner(seat)
    }

    /// The winning seat, or `None` on a draw.
    #[must_use]
    pub fn winner(self) -> Option<Seat> {
        match self {
            CombatOutcome::Winner(seat) => Some(seat),
            CombatOutcome::Draw => None,
        }
    }
}

/// Resolve a combat between player 1's and player 2's elements.
#[must_use]
pub fn resolve_combat(p1: Element, p2: Element) -> CombatOutcome {
    if p1 == p2 {
        return CombatOutcome::Draw;
    }

    let p1_wins = match (p1.value(), p2.value()) {
        // Rock beats scissors despite the lower value
        (2, 0) => false,
        (0, 2) => true,
        (a, b) => a > b,
    };

    if p1_wins {
        CombatOutcome::Winner(Seat::One)
    } else {
        CombatOutcome::Winner(Seat::Two)
    }
}
