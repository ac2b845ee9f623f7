//! Zone storage and card movement.
//!
//! `Zones` owns every card in a game. Each card sits in exactly one place:
//! a hand, a field (possibly as an attachment), the deck, the discard pile,
//! or the revealed area a Seven draws into. Every move is a `take` from one
//! collection followed by a `push` into another, so a card can never be
//! duplicated or dropped.
//!
//! Card order is significant everywhere:
//! - deck: index 0 is the bottom, the last element is the top
//! - fields: play order
//! - discard: append order
//! - revealed: index 0 is the card that was on top of the deck

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{Card, CardKey, DECK_SIZE};
use crate::core::{PlayerId, PlayerMap, RulesError, RulesResult, ZoneName};

/// Cards revealed by a Seven, top card first.
pub type Revealed = SmallVec<[Card; 2]>;

/// All card locations for one game.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zones {
    hands: PlayerMap<Vec<Card>>,
    fields: PlayerMap<Vec<Card>>,
    deck: Vec<Card>,
    discard: Vec<Card>,
    #[serde(default)]
    revealed: Revealed,
}

impl Zones {
    /// Build zones from explicit contents.
    #[must_use]
    pub fn new(
        hands: PlayerMap<Vec<Card>>,
        fields: PlayerMap<Vec<Card>>,
        deck: Vec<Card>,
        discard: Vec<Card>,
    ) -> Self {
        Self {
            hands,
            fields,
            deck,
            discard,
            revealed: Revealed::new(),
        }
    }

    // === Read access ===

    #[must_use]
    pub fn hand(&self, player: PlayerId) -> &[Card] {
        &self.hands[player]
    }

    #[must_use]
    pub fn field(&self, player: PlayerId) -> &[Card] {
        &self.fields[player]
    }

    #[must_use]
    pub fn deck(&self) -> &[Card] {
        &self.deck
    }

    #[must_use]
    pub fn discard(&self) -> &[Card] {
        &self.discard
    }

    #[must_use]
    pub fn revealed(&self) -> &[Card] {
        &self.revealed
    }

    /// Top-level cards on both fields, seat 0 first.
    pub fn field_cards(&self) -> impl Iterator<Item = (PlayerId, &Card)> {
        self.fields
            .iter()
            .flat_map(|(player, field)| field.iter().map(move |card| (player, card)))
    }

    /// Whether `key` is in `player`'s hand.
    #[must_use]
    pub fn in_hand(&self, player: PlayerId, key: CardKey) -> bool {
        self.hands[player].iter().any(|c| c.key == key)
    }

    /// A top-level field card by key.
    #[must_use]
    pub fn field_card(&self, key: CardKey) -> Option<&Card> {
        self.field_cards().map(|(_, c)| c).find(|c| c.key == key)
    }

    /// A hand card by key.
    #[must_use]
    pub fn hand_card(&self, player: PlayerId, key: CardKey) -> Option<&Card> {
        self.hands[player].iter().find(|c| c.key == key)
    }

    /// A revealed card by key.
    #[must_use]
    pub fn revealed_card(&self, key: CardKey) -> Option<&Card> {
        self.revealed.iter().find(|c| c.key == key)
    }

    // === Removal ===

    /// Remove a card from a hand.
    pub fn take_from_hand(&mut self, player: PlayerId, key: CardKey) -> RulesResult<Card> {
        let hand = &mut self.hands[player];
        let pos = position(hand, key).ok_or(RulesError::CardNotFound {
            card: key,
            zone: ZoneName::Hand(player),
        })?;
        Ok(hand.remove(pos))
    }

    /// Remove a top-level card (with its attachments) from whichever field
    /// holds it. Returns the field's seat and the card.
    pub fn take_from_field(&mut self, key: CardKey) -> RulesResult<(PlayerId, Card)> {
        for (player, field) in self.fields.iter_mut() {
            if let Some(pos) = position(field, key) {
                return Ok((player, field.remove(pos)));
            }
        }
        Err(RulesError::CardNotFound {
            card: key,
            zone: ZoneName::Field,
        })
    }

    /// Mutable access to a top-level field card.
    pub fn field_card_mut(&mut self, key: CardKey) -> RulesResult<&mut Card> {
        self.fields
            .iter_mut()
            .flat_map(|(_, field)| field.iter_mut())
            .find(|c| c.key == key)
            .ok_or(RulesError::CardNotFound {
                card: key,
                zone: ZoneName::Field,
            })
    }

    /// Remove a card from the discard pile.
    pub fn take_from_discard(&mut self, key: CardKey) -> RulesResult<Card> {
        let pos = position(&self.discard, key).ok_or(RulesError::CardNotFound {
            card: key,
            zone: ZoneName::Discard,
        })?;
        Ok(self.discard.remove(pos))
    }

    /// Remove a card from the revealed area.
    pub fn take_revealed(&mut self, key: CardKey) -> RulesResult<Card> {
        let pos = position(&self.revealed, key).ok_or(RulesError::CardNotFound {
            card: key,
            zone: ZoneName::Revealed,
        })?;
        Ok(self.revealed.remove(pos))
    }

    // === Insertion ===

    /// Put a card into a hand.
    pub fn push_to_hand(&mut self, player: PlayerId, card: Card) {
        self.hands[player].push(card);
    }

    /// Put a card at the end of a field.
    pub fn push_to_field(&mut self, player: PlayerId, card: Card) {
        self.fields[player].push(card);
    }

    /// Put a card into the revealed area.
    pub fn push_revealed(&mut self, card: Card) {
        self.revealed.push(card);
    }

    /// Discard a card: clear it, then append it and its attachments.
    pub fn push_to_discard(&mut self, mut card: Card) {
        let attachments = card.take_attachments();
        card.clear_player_info();
        self.discard.push(card);
        self.discard.extend(attachments);
    }

    // === Deck ===

    /// Move the top deck card into a hand. Returns its key.
    ///
    /// The hand limit is the caller's concern.
    pub fn draw(&mut self, player: PlayerId) -> Option<CardKey> {
        let card = self.deck.pop()?;
        let key = card.key;
        self.hands[player].push(card);
        Some(key)
    }

    /// Move up to `count` cards from the top of the deck to the revealed
    /// area, top card first. Returns how many were revealed.
    pub fn reveal_top(&mut self, count: usize) -> usize {
        let n = count.min(self.deck.len());
        for _ in 0..n {
            if let Some(card) = self.deck.pop() {
                self.revealed.push(card);
            }
        }
        n
    }

    /// Put every revealed card back on the deck in its original order.
    pub fn return_revealed(&mut self) {
        while let Some(card) = self.revealed.pop() {
            self.deck.push(card);
        }
    }

    /// Discard every revealed card.
    pub fn discard_revealed(&mut self) {
        let cards: Vec<Card> = self.revealed.drain(..).collect();
        for card in cards {
            self.push_to_discard(card);
        }
    }

    // === Bulk effects ===

    /// Discard every top-level field card matching `pred`, with its
    /// attachments. Returns the number of field entries removed.
    pub fn discard_field_cards(&mut self, pred: impl Fn(&Card) -> bool) -> usize {
        let mut removed = Vec::new();
        for (_, field) in self.fields.iter_mut() {
            let (gone, kept): (Vec<Card>, Vec<Card>) = field.drain(..).partition(|c| pred(c));
            *field = kept;
            removed.extend(gone);
        }
        let count = removed.len();
        for card in removed {
            self.push_to_discard(card);
        }
        count
    }

    /// Discard every attachment on every field card. Returns how many.
    pub fn discard_all_attachments(&mut self) -> usize {
        let mut released = Vec::new();
        for (_, field) in self.fields.iter_mut() {
            for card in field.iter_mut() {
                released.extend(card.take_attachments());
            }
        }
        let count = released.len();
        self.discard.extend(released);
        count
    }

    // === Integrity ===

    /// Every card key in every zone, attachments included.
    pub fn all_keys(&self) -> impl Iterator<Item = CardKey> + '_ {
        let hands = self.hands.values().flatten();
        let fields = self.fields.values().flatten();
        hands
            .chain(fields)
            .chain(self.deck.iter())
            .chain(self.discard.iter())
            .chain(self.revealed.iter())
            .flat_map(|card| card.keys())
    }

    /// Total number of cards across all zones.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.all_keys().count()
    }

    /// Fail if any identity appears twice.
    pub fn check_unique(&self) -> RulesResult<()> {
        let mut seen = [false; DECK_SIZE];
        for key in self.all_keys() {
            if std::mem::replace(&mut seen[key.index()], true) {
                return Err(RulesError::DuplicateCard { card: key });
            }
        }
        Ok(())
    }
}

fn position(cards: &[Card], key: CardKey) -> Option<usize> {
    cards.iter().position(|c| c.key == key)
}
