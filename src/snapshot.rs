//! Wire projections for the presentation layer.
//!
//! These types are the whole boundary contract with whatever transport
//! or UI sits on top of the engine: a `RoundSnapshot` after each round
//! boundary, and one `InitialPayload` when a game begins. Field names
//! serialize in camelCase.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::{CardId, CardInfo};
use crate::zones::Discovery;

/// What one player's side of the table looks like to clients.
///
/// The hand is sent as IDs; the opponent's client decides what to show.
/// Deck and discard are counts only.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSnapshot {
    pub hand: Vec<CardId>,
    pub deck_count: usize,
    pub discard_count: usize,
    pub points: i64,
    pub discovery: Option<Discovery>,
}

/// Info about the current round, sent after each round boundary.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundSnapshot {
    pub game_over: bool,
    pub round: u32,
    pub p1: PlayerSnapshot,
    pub p2: PlayerSnapshot,
}

/// Everything a client needs when a game starts: the static catalog,
/// both starting deck lists, and the opening state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitialPayload {
    pub all_cards: FxHashMap<CardId, CardInfo>,
    pub p1_deck: Vec<CardId>,
    pub p2_deck: Vec<CardId>,
    pub starting_state: RoundSnapshot,
}
