//! One-off effects.
//!
//! Called once a one-off resolves uncountered. The card has already left its
//! zone; each effect ends by discarding it. Three, Four and Seven may leave a
//! pending decision behind.

use tracing::debug;

use crate::cards::{Card, Purpose, Rank};
use crate::core::{GameState, PlayerId};
use crate::stack::PendingEffect;

impl GameState {
    pub(crate) fn apply_one_off(&mut self, caster: PlayerId, card: Card) {
        let key = card.key;
        match key.rank {
            Rank::Ace => {
                let cleared = self.zones.discard_field_cards(Card::scores);
                debug!(%caster, cleared, "ace clears point cards");
                self.zones.push_to_discard(card);
            }
            Rank::Three => {
                // The Three cannot fetch itself, so an empty pile fizzles
                let fizzles = self.zones.discard().is_empty();
                self.zones.push_to_discard(card);
                if fizzles {
                    debug!(%caster, "three fizzles on an empty discard pile");
                } else {
                    self.pending = PendingEffect::Three {
                        player: caster,
                        source: key,
                    };
                }
            }
            Rank::Four => {
                let victim = caster.opponent();
                let count = self
                    .config
                    .four_discard_count
                    .min(self.zones.hand(victim).len());
                self.zones.push_to_discard(card);
                if count == 0 {
                    debug!(%caster, "four fizzles on an empty hand");
                } else {
                    self.pending = PendingEffect::Four {
                        player: victim,
                        remaining: count,
                    };
                }
            }
            Rank::Five => {
                self.zones.push_to_discard(card);
                let drawn = self.draw_up_to(caster, self.config.five_draw_count);
                debug!(%caster, drawn, "five draws");
            }
            Rank::Six => {
                let faces = self
                    .zones
                    .discard_field_cards(|c| c.purpose == Some(Purpose::FaceCard));
                let jacks = self.zones.discard_all_attachments();
                debug!(%caster, faces, jacks, "six clears face cards");
                self.zones.push_to_discard(card);
            }
            Rank::Seven => {
                self.zones.push_to_discard(card);
                self.reveal_for_seven(caster);
            }
            _ => {
                // No one-off effect for this rank
                self.zones.push_to_discard(card);
            }
        }
    }

    /// Draw up to `count` cards, stopping at the hand limit or an empty deck.
    fn draw_up_to(&mut self, player: PlayerId, count: usize) -> usize {
        let mut drawn = 0;
        while drawn < count && self.zones.hand(player).len() < self.config.hand_limit {
            if self.zones.draw(player).is_none() {
                break;
            }
            drawn += 1;
        }
        drawn
    }

    fn reveal_for_seven(&mut self, caster: PlayerId) {
        let revealed = self.zones.reveal_top(self.config.seven_reveal_count);
        if revealed == 0 {
            debug!(%caster, "seven fizzles on an empty deck");
            return;
        }

        let playable = self
            .zones
            .revealed()
            .iter()
            .any(|c| !self.plays_for_card(caster, c).is_empty());

        if playable {
            self.pending = PendingEffect::Seven {
                player: caster,
                requires_discard: false,
            };
        } else if revealed == 1 {
            debug!(%caster, "seven reveals a single unplayable card");
            self.zones.discard_revealed();
        } else {
            self.pending = PendingEffect::Seven {
                player: caster,
                requires_discard: true,
            };
        }
        debug!(%caster, revealed, playable, "seven reveals");
    }
}
