//! # rps-duel
//!
//! A round-based, two-player card game engine. Each player owns a deck,
//! hand, and discard pile of cards tagged with a rock-paper-scissors
//! element; every round walks a fixed phase cycle (upkeep, draw,
//! selection, preCombat, combat, postCombat) that culminates in a combat
//! comparison of the two selected cards.
//!
//! ## Design Principles
//!
//! 1. **Explicit suspension**: the cycle is synchronous except for the
//!    selection phase. [`Game::start_round`] parks at
//!    [`GameStatus::AwaitingSelections`]; [`Game::submit_selection`]
//!    feeds in each player's choice and resumes once both are in.
//!
//! 2. **One owner per card**: every card lives in exactly one zone
//!    (deck, hand, discard, or the selected slot). All movement goes
//!    through [`Player`] operations that transfer ownership atomically,
//!    so a player's total card count never changes.
//!
//! 3. **Effects before phase logic**: externally registered effects are
//!    FIFO-queued per phase and drained to a fixed snapshot before the
//!    phase's built-in logic runs. Cards contribute effects through a
//!    registry, not through card subclasses.
//!
//! Instances are fully independent: two games share no state and may run
//! on separate threads.
//!
//! ## Modules
//!
//! - `core`: elements, seats, deterministic RNG
//! - `cards`: card instances and the static catalog
//! - `zones`: the deck / hand / discard pile family
//! - `game`: players, phases, combat resolution, the round driver
//! - `snapshot`: wire projections for the presentation layer
//! - `error`: driver protocol violations

pub mod cards;
pub mod core;
pub mod error;
pub mod game;
pub mod snapshot;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{Element, GameRng, Seat};

pub use crate::cards::{Card, CardCatalog, CardId, CardInfo, CardState};

pub use crate::zones::{CardBatch, CardPile, Deck, DiscardPile, Discovery, Hand, DISCOVERY_SLOTS};

pub use crate::game::{
    resolve_combat, CombatOutcome, DiscoveryInfo, DiscoverySource, EffectRegistry, Game,
    GameStatus, Phase, PhaseEffect, PhaseQueues, Player,
};

pub use crate::error::GameError;

pub use crate::snapshot::{InitialPayload, PlayerSnapshot, RoundSnapshot};
