//! Deck generation, shuffling and dealing.

use super::definition::{CardKey, DECK_SIZE};
use super::instance::Card;
use crate::core::{GameRng, PlayerId, PlayerMap, RulesConfig};

/// The 52 cards, once each, in index order.
#[must_use]
pub fn generate_deck() -> Vec<Card> {
    CardKey::all().map(Card::from_key).collect()
}

/// A freshly shuffled 52-card deck.
#[must_use]
pub fn shuffled_deck(rng: &mut GameRng) -> Vec<Card> {
    let mut deck = generate_deck();
    rng.shuffle(&mut deck);
    deck
}

/// Result of dealing: both hands and the remaining deck.
#[derive(Clone, Debug)]
pub struct Deal {
    pub hands: PlayerMap<Vec<Card>>,
    pub deck: Vec<Card>,
}

/// Deal from a shuffled sequence.
///
/// Deterministic slicing: the first `deal_size(P0)` cards go to seat 0, the
/// next `deal_size(P1)` to seat 1, the rest become the deck (top = last).
/// A short sequence deals what it can.
#[must_use]
pub fn deal(mut cards: Vec<Card>, config: &RulesConfig) -> Deal {
    let p0_len = config.deal_size(PlayerId::P0).min(cards.len());
    let rest = cards.split_off(p0_len);
    let p0 = cards;

    let mut rest = rest;
    let p1_len = config.deal_size(PlayerId::P1).min(rest.len());
    let deck = rest.split_off(p1_len);

    Deal {
        hands: PlayerMap::from_pair(p0, rest),
        deck,
    }
}

/// Whether `cards` holds each of the 52 identities exactly once.
#[must_use]
pub fn is_complete_deck<'a>(cards: impl IntoIterator<Item = &'a Card>) -> bool {
    let mut seen = [false; DECK_SIZE];
    let mut count = 0;
    for card in cards {
        for key in card.keys() {
            if std::mem::replace(&mut seen[key.index()], true) {
                return false;
            }
            count += 1;
        }
    }
    count == DECK_SIZE
}
