//! Game state: zones, turn pointers and the pending-effect register.
//!
//! ## Two pointers
//!
//! `turn` is whose full turn it is. `current_action_player` is who must act
//! right now. They differ while a one-off's counter window is open, while an
//! opponent discards for a Four, and so on. Both are kept, and the acting
//! player is always derived from the pending effect.
//!
//! ## Snapshots
//!
//! `GameState` is `Serialize + Deserialize`. [`GameState::to_json`] gives the
//! structural snapshot, [`GameState::to_bytes`] a compact bincode form.
//! Restoring either one rejects duplicated cards.
//!
//! The rules (enumeration and transitions) are further `impl GameState`
//! blocks in `crate::rules`.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::ActionRecord;
use super::config::RulesConfig;
use super::error::{RulesError, RulesResult};
use super::player::{PlayerId, PlayerMap};
use crate::cards::{Card, CardKey, Deal, Purpose, Rank};
use crate::stack::{CardSource, PendingEffect};
use crate::zones::Zones;

/// Result of one transition.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TurnOutcome {
    /// The turn pointer should advance.
    pub turn_finished: bool,
    /// The game is over.
    pub should_stop: bool,
    /// The winner, if the game is over.
    pub winner: Option<PlayerId>,
}

impl TurnOutcome {
    /// Still inside the turn.
    #[must_use]
    pub const fn continuing() -> Self {
        Self {
            turn_finished: false,
            should_stop: false,
            winner: None,
        }
    }

    /// Turn over; `winner` ends the game.
    #[must_use]
    pub const fn finished(winner: Option<PlayerId>) -> Self {
        Self {
            turn_finished: true,
            should_stop: winner.is_some(),
            winner,
        }
    }
}

/// Complete game state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) zones: Zones,

    /// Whose full turn it is.
    pub(crate) turn: PlayerId,

    /// Who must act right now.
    pub(crate) current_action_player: PlayerId,

    pub(crate) last_action_played_by: Option<PlayerId>,

    pub(crate) pending: PendingEffect,

    pub(crate) config: RulesConfig,

    /// Turn number (starts at 1).
    pub(crate) turn_number: u32,

    pub(crate) history: Vector<ActionRecord>,
}

impl GameState {
    /// State with explicit zone contents, seat 0 to move.
    ///
    /// Used for scenarios; real games come from `GameBuilder`.
    #[must_use]
    pub fn new(
        hands: PlayerMap<Vec<Card>>,
        fields: PlayerMap<Vec<Card>>,
        deck: Vec<Card>,
        discard: Vec<Card>,
    ) -> Self {
        Self::from_zones(Zones::new(hands, fields, deck, discard))
    }

    /// State around existing zones, seat 0 to move.
    #[must_use]
    pub fn from_zones(zones: Zones) -> Self {
        Self {
            zones,
            turn: PlayerId::P0,
            current_action_player: PlayerId::P0,
            last_action_played_by: None,
            pending: PendingEffect::None,
            config: RulesConfig::default(),
            turn_number: 1,
            history: Vector::new(),
        }
    }

    /// State from a fresh deal.
    #[must_use]
    pub fn from_deal(deal: Deal, config: RulesConfig) -> Self {
        Self::new(deal.hands, PlayerMap::default(), deal.deck, Vec::new()).with_config(config)
    }

    /// Builder: replace the rules configuration.
    #[must_use]
    pub fn with_config(mut self, config: RulesConfig) -> Self {
        self.config = config;
        self
    }

    // === Pointers ===

    #[must_use]
    pub fn zones(&self) -> &Zones {
        &self.zones
    }

    #[must_use]
    pub fn turn(&self) -> PlayerId {
        self.turn
    }

    #[must_use]
    pub fn current_action_player(&self) -> PlayerId {
        self.current_action_player
    }

    #[must_use]
    pub fn last_action_played_by(&self) -> Option<PlayerId> {
        self.last_action_played_by
    }

    #[must_use]
    pub fn pending(&self) -> &PendingEffect {
        &self.pending
    }

    #[must_use]
    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// Every applied action, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    /// Advance to the opponent's turn.
    ///
    /// Fails while a pending effect still needs a decision.
    pub fn next_turn(&mut self) -> RulesResult<()> {
        if self.pending.is_active() {
            return Err(RulesError::PendingEffect);
        }
        self.turn = self.turn.opponent();
        self.current_action_player = self.turn;
        self.turn_number += 1;
        Ok(())
    }

    // === Pending-effect registers ===

    #[must_use]
    pub fn resolving_one_off(&self) -> bool {
        matches!(self.pending, PendingEffect::OneOff { .. })
    }

    /// The one-off waiting in the counter window.
    #[must_use]
    pub fn one_off_card_to_counter(&self) -> Option<CardKey> {
        match self.pending {
            PendingEffect::OneOff { card, .. } => Some(card),
            _ => None,
        }
    }

    /// The player whose Two countered the pending one-off.
    #[must_use]
    pub fn last_counter_player(&self) -> Option<PlayerId> {
        match self.pending {
            PendingEffect::OneOff {
                caster,
                counter: Some(_),
                ..
            } => Some(caster.opponent()),
            _ => None,
        }
    }

    #[must_use]
    pub fn resolving_three(&self) -> bool {
        matches!(self.pending, PendingEffect::Three { .. })
    }

    #[must_use]
    pub fn pending_three_player(&self) -> Option<PlayerId> {
        match self.pending {
            PendingEffect::Three { player, .. } => Some(player),
            _ => None,
        }
    }

    #[must_use]
    pub fn resolving_four(&self) -> bool {
        matches!(self.pending, PendingEffect::Four { .. })
    }

    #[must_use]
    pub fn pending_four_player(&self) -> Option<PlayerId> {
        match self.pending {
            PendingEffect::Four { player, .. } => Some(player),
            _ => None,
        }
    }

    /// Cards still to discard for a Four; zero when none is pending.
    #[must_use]
    pub fn pending_four_count(&self) -> usize {
        match self.pending {
            PendingEffect::Four { remaining, .. } => remaining,
            _ => 0,
        }
    }

    #[must_use]
    pub fn resolving_seven(&self) -> bool {
        matches!(self.pending, PendingEffect::Seven { .. })
    }

    #[must_use]
    pub fn pending_seven_player(&self) -> Option<PlayerId> {
        match self.pending {
            PendingEffect::Seven { player, .. } => Some(player),
            _ => None,
        }
    }

    /// Cards revealed by the Seven, top card first.
    #[must_use]
    pub fn pending_seven_cards(&self) -> &[Card] {
        self.zones.revealed()
    }

    #[must_use]
    pub fn pending_seven_requires_discard(&self) -> bool {
        matches!(
            self.pending,
            PendingEffect::Seven {
                requires_discard: true,
                ..
            }
        )
    }

    // === Score and target ===

    /// Sum of point cards in play as points that `player` controls, on
    /// either field.
    #[must_use]
    pub fn get_player_score(&self, player: PlayerId) -> u32 {
        self.zones
            .field_cards()
            .filter(|(_, card)| card.scores() && card.controller() == Some(player))
            .map(|(_, card)| card.point_value())
            .sum()
    }

    /// Points needed to win, lowered by Kings on the player's own field.
    #[must_use]
    pub fn get_player_target(&self, player: PlayerId) -> u32 {
        self.config.target_for_kings(self.king_count(player))
    }

    fn king_count(&self, player: PlayerId) -> usize {
        self.zones
            .field(player)
            .iter()
            .filter(|card| card.rank() == Rank::King && card.purpose == Some(Purpose::FaceCard))
            .count()
    }

    /// Whether `player` controls a Queen, shielding their point cards from
    /// Jacks.
    #[must_use]
    pub fn has_queen(&self, player: PlayerId) -> bool {
        self.zones
            .field(player)
            .iter()
            .any(|card| card.rank() == Rank::Queen && card.purpose == Some(Purpose::FaceCard))
    }

    /// Whether the opponent's Eight (glasses) exposes `player`'s hand.
    #[must_use]
    pub fn is_hand_revealed(&self, player: PlayerId) -> bool {
        self.zones
            .field(player.opponent())
            .iter()
            .any(|card| card.rank() == Rank::Eight && card.purpose == Some(Purpose::FaceCard))
    }

    #[must_use]
    pub fn get_player_field(&self, player: PlayerId) -> &[Card] {
        self.zones.field(player)
    }

    #[must_use]
    pub fn get_player_hand(&self, player: PlayerId) -> &[Card] {
        self.zones.hand(player)
    }

    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        self.get_player_score(player) >= self.get_player_target(player)
    }

    /// The winner, checking the turn owner first.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.winner_from(self.turn)
    }

    /// The winner, checking `first` before their opponent.
    #[must_use]
    pub(crate) fn winner_from(&self, first: PlayerId) -> Option<PlayerId> {
        [first, first.opponent()]
            .into_iter()
            .find(|&player| self.is_winner(player))
    }

    /// Deck exhausted with nobody at target.
    #[must_use]
    pub fn is_stalemate(&self) -> bool {
        self.zones.deck().is_empty() && self.winner().is_none()
    }

    // === Snapshots ===

    /// Structural snapshot.
    pub fn to_json(&self) -> RulesResult<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Restore a structural snapshot.
    pub fn from_json(value: serde_json::Value) -> RulesResult<Self> {
        let state: Self = serde_json::from_value(value)?;
        state.check_consistent()?;
        Ok(state)
    }

    /// Compact binary snapshot.
    pub fn to_bytes(&self) -> RulesResult<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Restore a binary snapshot.
    pub fn from_bytes(bytes: &[u8]) -> RulesResult<Self> {
        let state: Self = bincode::deserialize(bytes)?;
        state.check_consistent()?;
        Ok(state)
    }

    /// Check a state that did not come from `update_state`: unique cards, an
    /// acting player that matches the pending effect, and a pending effect
    /// whose cards sit where it says.
    ///
    /// Seats are range-checked when a `PlayerId` is deserialized.
    pub fn check_consistent(&self) -> RulesResult<()> {
        let fail = |reason| Err(RulesError::Inconsistent { reason });

        self.zones.check_unique()?;
        if self.current_action_player != self.pending.acting_player(self.turn) {
            return fail("acting player does not match the pending effect");
        }

        let in_discard = |key: CardKey| self.zones.discard().iter().any(|c| c.key == key);
        let mut revealed_expected = false;
        match self.pending {
            PendingEffect::None => {}
            PendingEffect::OneOff {
                card,
                caster,
                source,
                counter,
            } => {
                let waiting = match source {
                    CardSource::Hand => self.zones.hand_card(caster, card).is_some(),
                    CardSource::Revealed => {
                        revealed_expected = true;
                        self.zones.revealed_card(card).is_some()
                    }
                };
                if !waiting {
                    return fail("pending one-off is not in the zone it was played from");
                }
                if counter.is_some_and(|two| !in_discard(two)) {
                    return fail("countering Two is not in the discard pile");
                }
            }
            PendingEffect::Three { source, .. } => {
                if !in_discard(source) {
                    return fail("pending Three is not in the discard pile");
                }
            }
            PendingEffect::Four { player, remaining } => {
                if remaining == 0 || remaining > self.zones.hand(player).len() {
                    return fail("pending Four asks for more cards than the hand holds");
                }
            }
            PendingEffect::Seven { .. } => {
                revealed_expected = true;
                if self.zones.revealed().is_empty() {
                    return fail("pending Seven has no revealed cards");
                }
            }
        }
        if !revealed_expected && !self.zones.revealed().is_empty() {
            return fail("revealed cards without a pending Seven");
        }
        Ok(())
    }
}
