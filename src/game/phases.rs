//! The phase cycle and its pending-effect machinery.
//!
//! Every round walks the same six phases in order. Before a phase's
//! built-in logic runs, the engine drains that phase's FIFO queue of
//! pending effects — externally registered card behavior scheduled to run
//! "before this phase".
//!
//! ## Draining discipline
//!
//! A queue is drained to a fixed snapshot: effects enqueued *while* the
//! queue is draining (by a running effect) land in the queue for that
//! phase's next occurrence, never in the current pass.

use std::collections::VecDeque;
use std::sync::Arc;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::CardId;

use super::game::Game;

/// One phase of a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Phase {
    Upkeep,
    Draw,
    Selection,
    PreCombat,
    Combat,
    PostCombat,
}

impl Phase {
    /// All phases, in round order.
    pub const ALL: [Phase; 6] = [
        Phase::Upkeep,
        Phase::Draw,
        Phase::Selection,
        Phase::PreCombat,
        Phase::Combat,
        Phase::PostCombat,
    ];

    const fn index(self) -> usize {
        match self {
            Phase::Upkeep => 0,
            Phase::Draw => 1,
            Phase::Selection => 2,
            Phase::PreCombat => 3,
            Phase::Combat => 4,
            Phase::PostCombat => 5,
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::Upkeep => "upkeep",
            Phase::Draw => "draw",
            Phase::Selection => "selection",
            Phase::PreCombat => "preCombat",
            Phase::Combat => "combat",
            Phase::PostCombat => "postCombat",
        };
        write!(f, "{}", name)
    }
}

/// An effect scheduled to run before a phase's built-in logic.
///
/// Effects are shared so a registry entry can be enqueued round after
/// round without re-registration.
pub type PhaseEffect = Arc<dyn Fn(&mut Game) + Send + Sync>;

/// Per-phase FIFO queues of pending effects.
#[derive(Clone, Default)]
pub struct PhaseQueues {
    queues: [VecDeque<PhaseEffect>; 6],
}

impl PhaseQueues {
    /// Create empty queues for every phase.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an effect to a phase's queue.
    pub fn enqueue(&mut self, phase: Phase, effect: PhaseEffect) {
        self.queues[phase.index()].push_back(effect);
    }

    /// Take a fixed snapshot of a phase's queue, leaving it empty.
    ///
    /// Effects come out in FIFO order.
    pub fn drain(&mut self, phase: Phase) -> Vec<PhaseEffect> {
        self.queues[phase.index()].drain(..).collect()
    }

    /// Number of effects pending for a phase.
    #[must_use]
    pub fn pending(&self, phase: Phase) -> usize {
        self.queues[phase.index()].len()
    }

    /// Empty every queue.
    pub fn clear(&mut self) {
        for queue in &mut self.queues {
            queue.clear();
        }
    }
}

impl std::fmt::Debug for PhaseQueues {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut map = f.debug_map();
        for phase in Phase::ALL {
            map.entry(&phase, &self.queues[phase.index()].len());
        }
        map.finish()
    }
}

/// Capability registry: which effects a card contributes to which phases.
///
/// Cards have no behavior of their own; a card that does something in a
/// phase is given a `(phase, effect)` entry here. When both selections
/// for a round are in, the engine enqueues the selected cards' entries
/// into the matching phase queues.
#[derive(Clone, Default)]
pub struct EffectRegistry {
    entries: FxHashMap<CardId, Vec<(Phase, PhaseEffect)>>,
}

impl EffectRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an effect a card contributes to a phase.
    ///
    /// A card may carry any number of entries, including several for the
    /// same phase; they enqueue in registration order.
    pub fn register(&mut self, card: CardId, phase: Phase, effect: PhaseEffect) {
        self.entries.entry(card).or_default().push((phase, effect));
    }

    /// The entries registered for a card, in registration order.
    #[must_use]
    pub fn effects_for(&self, card: CardId) -> &[(Phase, PhaseEffect)] {
        self.entries.get(&card).map_or(&[], Vec::as_slice)
    }

    /// Number of cards with at least one entry.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Is the registry empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl std::fmt::Debug for EffectRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EffectRegistry")
            .field("cards", &self.entries.len())
            .finish()
    }
}
