//! The game driver: two players, a round counter, and the phase cycle.
//!
//! ## Driving a round
//!
//! The cycle is synchronous except for the selection phase, which waits
//! on input from both players. `Game` exposes that wait as an explicit
//! state machine:
//!
//! ```text
//! start_round()            upkeep -> draw -> selection setup
//!   -> AwaitingSelections  (or GameOver, decided during upkeep)
//! submit_selection(seat, card)   once per seat, either order
//!   -> AwaitingSelections  while one selection is missing
//!   -> RoundComplete       both in: preCombat -> combat -> postCombat ran
//! ```
//!
//! `reset` may be called from any state, including mid-wait; it discards
//! in-flight selection and discovery state.
//!
//! Before each phase's built-in logic, the phase's pending-effect queue is
//! drained (see `phases`). A game instance is single-writer: all mutation
//! happens through `&mut self`, and separate instances share nothing.

use std::sync::Arc;

use tracing::{debug, info, trace};

use crate::cards::{Card, CardCatalog, CardId};
use crate::core::{GameRng, Seat};
use crate::error::GameError;
use crate::snapshot::{InitialPayload, RoundSnapshot};

use super::combat::{resolve_combat, CombatOutcome};
use super::phases::{EffectRegistry, Phase, PhaseEffect, PhaseQueues};
use super::player::{DiscoverySource, Player};

/// Where the game currently stands in its round cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    /// Phase logic is executing. Only observable from inside a running
    /// phase effect.
    Running,
    /// The selection phase is waiting for one or both players.
    AwaitingSelections,
    /// Between rounds: ready for `start_round`. Also the initial state.
    RoundComplete,
    /// A player ran out of cards; the cycle has stopped.
    GameOver,
}

/// One game instance.
#[derive(Debug)]
pub struct Game {
    round: u32,
    game_over: bool,
    status: GameStatus,
    phases: PhaseQueues,
    effects: EffectRegistry,
    last_combat: Option<CombatOutcome>,
    rng: GameRng,
    player1: Player,
    player2: Player,
}

impl Game {
    /// Create a game from the two players' decks, seeded from entropy.
    #[must_use]
    pub fn new(player1_cards: Vec<Card>, player2_cards: Vec<Card>) -> Self {
        Self::with_rng(player1_cards, player2_cards, GameRng::from_entropy())
    }

    /// Create a game with a fixed seed, for deterministic replay.
    #[must_use]
    pub fn with_seed(player1_cards: Vec<Card>, player2_cards: Vec<Card>, seed: u64) -> Self {
        Self::with_rng(player1_cards, player2_cards, GameRng::new(seed))
    }

    fn with_rng(player1_cards: Vec<Card>, player2_cards: Vec<Card>, rng: GameRng) -> Self {
        Self {
            round: 1,
            game_over: false,
            status: GameStatus::RoundComplete,
            phases: PhaseQueues::new(),
            effects: EffectRegistry::new(),
            last_combat: None,
            rng,
            player1: Player::new(Seat::One, player1_cards),
            player2: Player::new(Seat::Two, player2_cards),
        }
    }

    // === Accessors ===

    /// Current round number, starting at 1.
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Has the game ended?
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Current driver-visible state.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// The most recent combat outcome, if any combat has resolved.
    ///
    /// Recorded for drivers and card effects to observe; the engine
    /// applies no point or zone consequence itself.
    #[must_use]
    pub fn last_combat(&self) -> Option<CombatOutcome> {
        self.last_combat
    }

    /// Borrow a player by seat.
    #[must_use]
    pub fn player(&self, seat: Seat) -> &Player {
        match seat {
            Seat::One => &self.player1,
            Seat::Two => &self.player2,
        }
    }

    /// Mutably borrow a player by seat.
    pub fn player_mut(&mut self, seat: Seat) -> &mut Player {
        match seat {
            Seat::One => &mut self.player1,
            Seat::Two => &mut self.player2,
        }
    }

    /// Number of effects pending for a phase.
    #[must_use]
    pub fn pending_effects(&self, phase: Phase) -> usize {
        self.phases.pending(phase)
    }

    // === Effect registration ===

    /// Register an effect a card contributes to a phase.
    ///
    /// When a card carrying entries is selected for a round, its effects
    /// are enqueued once both selections are in, and run before the
    /// matching phase's built-in logic.
    pub fn register_card_effect(&mut self, card: CardId, phase: Phase, effect: PhaseEffect) {
        self.effects.register(card, phase, effect);
    }

    /// Enqueue a one-shot effect to run before a phase's built-in logic
    /// at that phase's next occurrence.
    pub fn enqueue_phase_effect(&mut self, phase: Phase, effect: PhaseEffect) {
        self.phases.enqueue(phase, effect);
    }

    // === Randomized player operations ===
    //
    // These thread the game's RNG into player operations that need it.

    /// Offer `seat` a discovery from the named source.
    pub fn discover(&mut self, seat: Seat, source: DiscoverySource) {
        let (player, rng) = self.player_and_rng(seat);
        player.discover(source, rng);
    }

    /// Resolve `seat`'s pending discovery with the chosen card.
    pub fn resolve_discovery_choice(&mut self, seat: Seat, id: CardId) -> Result<(), GameError> {
        self.player_mut(seat).resolve_discovery_choice(id)
    }

    /// Shuffle the matching cards from `seat`'s hand into their deck.
    pub fn shuffle_hand_into_deck(&mut self, seat: Seat, ids: &[CardId]) {
        let (player, rng) = self.player_and_rng(seat);
        player.shuffle_hand_into_deck_by_id(ids, rng);
    }

    /// Shuffle the matching cards from `seat`'s discard pile into their
    /// deck.
    pub fn shuffle_discard_into_deck(&mut self, seat: Seat, ids: &[CardId]) {
        let (player, rng) = self.player_and_rng(seat);
        player.shuffle_discard_into_deck_by_id(ids, rng);
    }

    fn player_and_rng(&mut self, seat: Seat) -> (&mut Player, &mut GameRng) {
        let player = match seat {
            Seat::One => &mut self.player1,
            Seat::Two => &mut self.player2,
        };
        (player, &mut self.rng)
    }

    // === Round driving ===

    /// Run upkeep and draw, then park at the selection phase.
    ///
    /// Returns `GameOver` (without error) if the game already ended or
    /// upkeep ends it now. Fails with `RoundInProgress` if selections are
    /// still being awaited from an earlier call.
    pub fn start_round(&mut self) -> Result<GameStatus, GameError> {
        if self.game_over {
            return Ok(GameStatus::GameOver);
        }
        if self.status == GameStatus::AwaitingSelections {
            return Err(GameError::RoundInProgress);
        }

        debug!(round = self.round, "round started");
        self.status = GameStatus::Running;

        self.drain_phase(Phase::Upkeep);
        self.upkeep_phase();
        if self.game_over {
            self.status = GameStatus::GameOver;
            return Ok(GameStatus::GameOver);
        }

        self.drain_phase(Phase::Draw);
        self.draw_phase();

        // Selection's built-in logic is the suspension itself
        self.drain_phase(Phase::Selection);
        self.status = GameStatus::AwaitingSelections;
        Ok(GameStatus::AwaitingSelections)
    }

    /// Record one player's selection for the current round.
    ///
    /// While the other selection is missing, returns
    /// `AwaitingSelections`. Once both are in, enqueues the selected
    /// cards' registered effects and runs the round to completion
    /// (preCombat, combat, postCombat), returning `RoundComplete`.
    ///
    /// Fails with `NotAwaitingSelections` outside the suspension point,
    /// and with the selection errors of
    /// [`Player::select_card_by_id`] — in those cases the wait continues.
    pub fn submit_selection(&mut self, seat: Seat, card_id: CardId) -> Result<GameStatus, GameError> {
        if self.status != GameStatus::AwaitingSelections {
            return Err(GameError::NotAwaitingSelections);
        }

        self.player_mut(seat).select_card_by_id(card_id)?;

        if self.player1.selected_card().is_some() && self.player2.selected_card().is_some() {
            self.finish_round()
        } else {
            Ok(GameStatus::AwaitingSelections)
        }
    }

    /// Fully reset the game: round 1, empty phase queues, each deck
    /// restored to its original card set and shuffled.
    ///
    /// Safe to call from any state; in-flight selections and discoveries
    /// are discarded. Points persist, as does the effect registry.
    pub fn reset(&mut self) {
        self.round = 1;
        self.game_over = false;
        self.status = GameStatus::RoundComplete;
        self.last_combat = None;
        self.phases.clear();
        self.player1.reset(&mut self.rng);
        self.player2.reset(&mut self.rng);
        debug!("game reset");
    }

    // === Snapshots ===

    /// The per-round projection sent to clients.
    #[must_use]
    pub fn snapshot(&self) -> RoundSnapshot {
        RoundSnapshot {
            game_over: self.game_over,
            round: self.round,
            p1: self.player1.snapshot(),
            p2: self.player2.snapshot(),
        }
    }

    /// The payload sent to clients when a game begins.
    #[must_use]
    pub fn initial_payload(&self, catalog: &CardCatalog) -> InitialPayload {
        InitialPayload {
            all_cards: catalog.to_map(),
            p1_deck: self.player1.initial_deck_ids(),
            p2_deck: self.player2.initial_deck_ids(),
            starting_state: self.snapshot(),
        }
    }

    // === Phase internals ===

    fn drain_phase(&mut self, phase: Phase) {
        let pending = self.phases.drain(phase);
        if !pending.is_empty() {
            trace!(%phase, count = pending.len(), "running pending effects");
        }
        for effect in pending {
            (*effect)(self);
        }
    }

    fn upkeep_phase(&mut self) {
        let p1_out = self.player1.out_of_cards();
        let p2_out = self.player2.out_of_cards();
        if !p1_out && !p2_out {
            return;
        }

        if p1_out {
            self.player1.convert_remaining_cards_to_points();
        }
        if p2_out {
            self.player2.convert_remaining_cards_to_points();
        }

        self.game_over = true;
        info!(
            round = self.round,
            p1_points = self.player1.points(),
            p2_points = self.player2.points(),
            "game over"
        );
    }

    fn draw_phase(&mut self) {
        self.player1.draw(1);
        self.player2.draw(1);
    }

    fn enqueue_selected_card_effects(&mut self) {
        let Self {
            effects,
            phases,
            player1,
            player2,
            ..
        } = self;

        for player in [&*player1, &*player2] {
            if let Some(card) = player.selected_card() {
                for (phase, effect) in effects.effects_for(card.id()) {
                    phases.enqueue(*phase, Arc::clone(effect));
                }
            }
        }
    }

    fn finish_round(&mut self) -> Result<GameStatus, GameError> {
        self.status = GameStatus::Running;
        self.enqueue_selected_card_effects();

        // preCombat has no built-in logic
        self.drain_phase(Phase::PreCombat);

        self.drain_phase(Phase::Combat);
        self.combat_phase()?;

        self.drain_phase(Phase::PostCombat);
        self.post_combat_phase()?;

        self.round += 1;
        self.status = GameStatus::RoundComplete;
        Ok(GameStatus::RoundComplete)
    }

    fn combat_phase(&mut self) -> Result<(), GameError> {
        let (Some(p1_card), Some(p2_card)) =
            (self.player1.selected_card(), self.player2.selected_card())
        else {
            return Err(GameError::CombatUnready);
        };

        let outcome = resolve_combat(p1_card.element(), p2_card.element());
        info!(
            round = self.round,
            p1 = %p1_card.element(),
            p2 = %p2_card.element(),
            ?outcome,
            "combat resolved"
        );

        // Recording only; no point or zone consequence is applied here
        self.last_combat = Some(outcome);
        Ok(())
    }

    fn post_combat_phase(&mut self) -> Result<(), GameError> {
        self.player1.discard_selected_card()?;
        self.player2.discard_selected_card()?;
        Ok(())
    }
}
