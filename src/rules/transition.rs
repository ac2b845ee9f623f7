//! The transition function.
//!
//! `update_state` is the single way a game moves forward. It validates
//! first, then dispatches on the action, then records history, re-derives
//! the acting player from the pending effect and runs the win check. A
//! rejected action leaves the state untouched.

use tracing::debug;

use crate::cards::{Card, CardKey, Purpose, Rank};
use crate::core::{Action, ActionRecord, GameState, PlayerId, RulesError, RulesResult, TurnOutcome};
use crate::stack::{CardSource, PendingEffect};

impl GameState {
    /// Apply one action.
    ///
    /// The action must be one `get_legal_actions` currently offers.
    ///
    /// # Errors
    ///
    /// - `HandFull` / `EmptyDeck` for a draw that cannot happen
    /// - `InvalidCounter` for a counter with anything but a Two
    /// - `IllegalAction` for anything else not currently legal
    pub fn update_state(&mut self, action: Action) -> RulesResult<TurnOutcome> {
        self.validate(&action)?;

        let turn_finished = match action {
            Action::Draw { player } => self.apply_draw(player)?,
            Action::Points { player, card } => self.apply_play(player, card, Purpose::Points)?,
            Action::FaceCard { player, card } => self.apply_play(player, card, Purpose::FaceCard)?,
            Action::Jack {
                player,
                card,
                target,
            } => self.apply_jack(player, card, target)?,
            Action::Scuttle {
                player,
                card,
                target,
            } => self.apply_scuttle(player, card, target)?,
            Action::OneOff { player, card } => self.open_one_off(player, card)?,
            Action::Counter { player, card, .. } => self.apply_counter(player, card)?,
            Action::Resolve { player } => self.resolve_one_off(player)?,
            Action::TakeFromDiscard { player, card } => self.take_from_discard(player, card)?,
            Action::DiscardFromHand { player, card } => self.discard_from_hand(player, card)?,
            Action::DiscardRevealed { card, .. } => self.discard_revealed(card)?,
        };

        let player = action.player();
        self.last_action_played_by = Some(player);
        let sequence = self.history.len() as u32;
        self.history
            .push_back(ActionRecord::new(action, self.turn_number, sequence));
        self.current_action_player = self.pending.acting_player(self.turn);

        let winner = self.winner_from(player);
        debug!(
            turn = self.turn_number,
            %player,
            %action,
            turn_finished,
            ?winner,
            "applied action"
        );

        Ok(TurnOutcome {
            turn_finished,
            should_stop: winner.is_some(),
            winner,
        })
    }

    fn validate(&self, action: &Action) -> RulesResult<()> {
        if action.player() != self.current_action_player {
            return Err(RulesError::IllegalAction { action: *action });
        }
        match *action {
            Action::Draw { player } => {
                if self.zones.hand(player).len() >= self.config.hand_limit {
                    return Err(RulesError::HandFull {
                        player,
                        limit: self.config.hand_limit,
                    });
                }
                if self.zones.deck().is_empty() {
                    return Err(RulesError::EmptyDeck);
                }
            }
            Action::Counter { card, .. } if card.rank != Rank::Two => {
                return Err(RulesError::InvalidCounter { card });
            }
            _ => {}
        }
        if self.is_legal(action) {
            Ok(())
        } else {
            Err(RulesError::IllegalAction { action: *action })
        }
    }

    // === Handlers ===
    //
    // Each returns whether the turn is finished.

    fn apply_draw(&mut self, player: PlayerId) -> RulesResult<bool> {
        self.zones.draw(player).ok_or(RulesError::EmptyDeck)?;
        Ok(true)
    }

    /// Take a card being played: from the hand, or from the revealed cards
    /// while a Seven waits (the rest go back on the deck).
    fn take_played_card(&mut self, player: PlayerId, key: CardKey) -> RulesResult<Card> {
        if self.resolving_seven() {
            let card = self.zones.take_revealed(key)?;
            self.zones.return_revealed();
            self.pending = PendingEffect::None;
            Ok(card)
        } else {
            self.zones.take_from_hand(player, key)
        }
    }

    fn apply_play(&mut self, player: PlayerId, key: CardKey, purpose: Purpose) -> RulesResult<bool> {
        let card = self.take_played_card(player, key)?;
        self.zones.push_to_field(player, card.played(player, purpose));
        Ok(true)
    }

    fn apply_jack(&mut self, player: PlayerId, key: CardKey, target: CardKey) -> RulesResult<bool> {
        let jack = self.take_played_card(player, key)?;
        self.zones
            .field_card_mut(target)?
            .attachments
            .push(jack.played(player, Purpose::FaceCard));
        Ok(true)
    }

    fn apply_scuttle(&mut self, player: PlayerId, key: CardKey, target: CardKey) -> RulesResult<bool> {
        let attacker = self.take_played_card(player, key)?;
        let (_, victim) = self.zones.take_from_field(target)?;
        self.zones.push_to_discard(attacker);
        self.zones.push_to_discard(victim);
        Ok(true)
    }

    /// Opening play: the card waits where it is while the opponent decides
    /// whether to counter.
    fn open_one_off(&mut self, player: PlayerId, key: CardKey) -> RulesResult<bool> {
        let source = if self.resolving_seven() {
            let card = self.take_played_card(player, key)?;
            self.zones.push_revealed(card);
            CardSource::Revealed
        } else {
            CardSource::Hand
        };
        self.pending = PendingEffect::OneOff {
            card: key,
            caster: player,
            source,
            counter: None,
        };
        Ok(false)
    }

    fn apply_counter(&mut self, player: PlayerId, key: CardKey) -> RulesResult<bool> {
        let two = self.zones.take_from_hand(player, key)?;
        self.zones.push_to_discard(two.played(player, Purpose::Counter));
        if let PendingEffect::OneOff { counter, .. } = &mut self.pending {
            *counter = Some(key);
        }
        Ok(false)
    }

    fn resolve_one_off(&mut self, player: PlayerId) -> RulesResult<bool> {
        let PendingEffect::OneOff {
            card,
            caster,
            source,
            counter,
        } = self.pending
        else {
            return Err(RulesError::IllegalAction {
                action: Action::Resolve { player },
            });
        };

        let one_off = match source {
            CardSource::Hand => self.zones.take_from_hand(caster, card)?,
            CardSource::Revealed => self.zones.take_revealed(card)?,
        };
        self.pending = PendingEffect::None;

        if let Some(two) = counter {
            debug!(card = %card, counter = %two, "one-off countered");
            self.zones.push_to_discard(one_off);
            return Ok(true);
        }

        self.apply_one_off(caster, one_off.played(caster, Purpose::OneOff));
        Ok(!self.pending.is_active())
    }

    fn take_from_discard(&mut self, player: PlayerId, key: CardKey) -> RulesResult<bool> {
        let card = self.zones.take_from_discard(key)?;
        self.zones.push_to_hand(player, card);
        self.pending = PendingEffect::None;
        Ok(true)
    }

    fn discard_from_hand(&mut self, player: PlayerId, key: CardKey) -> RulesResult<bool> {
        let card = self.zones.take_from_hand(player, key)?;
        self.zones.push_to_discard(card);

        if let PendingEffect::Four { remaining, .. } = &mut self.pending {
            *remaining = remaining.saturating_sub(1);
            if *remaining > 0 && !self.zones.hand(player).is_empty() {
                return Ok(false);
            }
        }
        self.pending = PendingEffect::None;
        Ok(true)
    }

    fn discard_revealed(&mut self, key: CardKey) -> RulesResult<bool> {
        let card = self.zones.take_revealed(key)?;
        self.zones.push_to_discard(card);
        self.zones.return_revealed();
        self.pending = PendingEffect::None;
        Ok(true)
    }
}
