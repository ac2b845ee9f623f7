//! Fixed action space.
//!
//! Every action maps to a stable integer by card identity, independent of
//! the order `get_legal_actions` produces them in. Learning agents can use a
//! fixed-size policy output plus [`legal_action_mask`].
//!
//! ## Layout
//!
//! | Group               | Size    |
//! |---------------------|---------|
//! | draw                | 1       |
//! | resolve             | 1       |
//! | points              | 52      |
//! | face                | 52      |
//! | one_off             | 52      |
//! | counter             | 52      |
//! | take_from_discard   | 52      |
//! | discard_from_hand   | 52      |
//! | discard_revealed    | 52      |
//! | scuttle             | 52 x 52 |
//! | jack                | 52 x 52 |
//!
//! Pair groups index as `card * 52 + target`. The acting player is not part
//! of the index; decoding resolves it against the state's legal actions.

use rustc_hash::FxHashMap;

use super::action::{Action, ActionKind};
use super::state::GameState;
use crate::cards::{CardKey, DECK_SIZE};

const PAIR_SIZE: usize = DECK_SIZE * DECK_SIZE;

const DRAW: usize = 0;
const RESOLVE: usize = DRAW + 1;
const POINTS: usize = RESOLVE + 1;
const FACE: usize = POINTS + DECK_SIZE;
const ONE_OFF: usize = FACE + DECK_SIZE;
const COUNTER: usize = ONE_OFF + DECK_SIZE;
const TAKE_FROM_DISCARD: usize = COUNTER + DECK_SIZE;
const DISCARD_FROM_HAND: usize = TAKE_FROM_DISCARD + DECK_SIZE;
const DISCARD_REVEALED: usize = DISCARD_FROM_HAND + DECK_SIZE;
const SCUTTLE: usize = DISCARD_REVEALED + DECK_SIZE;
const JACK: usize = SCUTTLE + PAIR_SIZE;

/// Total number of action indices.
pub const ACTION_SPACE_SIZE: usize = JACK + PAIR_SIZE;

fn pair(card: CardKey, target: CardKey) -> usize {
    card.index() * DECK_SIZE + target.index()
}

/// Fixed index of an action.
#[must_use]
pub fn action_to_index(action: &Action) -> usize {
    match *action {
        Action::Draw { .. } => DRAW,
        Action::Resolve { .. } => RESOLVE,
        Action::Points { card, .. } => POINTS + card.index(),
        Action::FaceCard { card, .. } => FACE + card.index(),
        Action::OneOff { card, .. } => ONE_OFF + card.index(),
        // Counter always targets the single pending one-off
        Action::Counter { card, .. } => COUNTER + card.index(),
        Action::TakeFromDiscard { card, .. } => TAKE_FROM_DISCARD + card.index(),
        Action::DiscardFromHand { card, .. } => DISCARD_FROM_HAND + card.index(),
        Action::DiscardRevealed { card, .. } => DISCARD_REVEALED + card.index(),
        Action::Scuttle { card, target, .. } => SCUTTLE + pair(card, target),
        Action::Jack { card, target, .. } => JACK + pair(card, target),
    }
}

/// The legal action of `state` that owns `index`.
///
/// Returns `None` when nothing currently legal maps to the index.
#[must_use]
pub fn action_index_to_action(state: &GameState, index: usize) -> Option<Action> {
    build_action_map(&state.get_legal_actions()).get(&index).copied()
}

/// Map from index to action for a set of legal actions.
///
/// The first action seen for an index wins.
#[must_use]
pub fn build_action_map<'a>(actions: impl IntoIterator<Item = &'a Action>) -> FxHashMap<usize, Action> {
    let mut map = FxHashMap::default();
    for action in actions {
        map.entry(action_to_index(action)).or_insert(*action);
    }
    map
}

/// Boolean mask over the full action space for the legal actions of `state`.
#[must_use]
pub fn legal_action_mask(state: &GameState) -> Vec<bool> {
    let mut mask = vec![false; ACTION_SPACE_SIZE];
    for action in state.get_legal_actions() {
        mask[action_to_index(&action)] = true;
    }
    mask
}

/// Index range occupied by one action kind.
#[must_use]
pub fn kind_range(kind: ActionKind) -> std::ops::Range<usize> {
    match kind {
        ActionKind::Draw => DRAW..RESOLVE,
        ActionKind::Resolve => RESOLVE..POINTS,
        ActionKind::Points => POINTS..FACE,
        ActionKind::FaceCard => FACE..ONE_OFF,
        ActionKind::OneOff => ONE_OFF..COUNTER,
        ActionKind::Counter => COUNTER..TAKE_FROM_DISCARD,
        ActionKind::TakeFromDiscard => TAKE_FROM_DISCARD..DISCARD_FROM_HAND,
        ActionKind::DiscardFromHand => DISCARD_FROM_HAND..DISCARD_REVEALED,
        ActionKind::DiscardRevealed => DISCARD_REVEALED..SCUTTLE,
        ActionKind::Scuttle => SCUTTLE..JACK,
        ActionKind::Jack => JACK..ACTION_SPACE_SIZE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, Purpose, Rank, Suit};
    use crate::core::{PlayerId, PlayerMap};

    fn key(rank: Rank, suit: Suit) -> CardKey {
        CardKey::new(rank, suit)
    }

    #[test]
    fn test_space_size() {
        assert_eq!(ACTION_SPACE_SIZE, 2 + 7 * 52 + 2 * 52 * 52);
    }

    #[test]
    fn test_ranges_tile_the_space() {
        let kinds = [
            ActionKind::Draw,
            ActionKind::Resolve,
            ActionKind::Points,
            ActionKind::FaceCard,
            ActionKind::OneOff,
            ActionKind::Counter,
            ActionKind::TakeFromDiscard,
            ActionKind::DiscardFromHand,
            ActionKind::DiscardRevealed,
            ActionKind::Scuttle,
            ActionKind::Jack,
        ];
        let mut next = 0;
        for kind in kinds {
            let range = kind_range(kind);
            assert_eq!(range.start, next);
            next = range.end;
        }
        assert_eq!(next, ACTION_SPACE_SIZE);
    }

    #[test]
    fn test_index_lands_in_kind_range() {
        let scuttle = Action::Scuttle {
            player: PlayerId::P1,
            card: key(Rank::Ten, Suit::Spades),
            target: key(Rank::Nine, Suit::Clubs),
        };
        let idx = action_to_index(&scuttle);

        assert!(kind_range(ActionKind::Scuttle).contains(&idx));
        assert_eq!(idx, SCUTTLE + pair(key(Rank::Ten, Suit::Spades), key(Rank::Nine, Suit::Clubs)));
    }

    #[test]
    fn test_decode_uses_legal_actions() {
        let state = GameState::new(
            PlayerMap::from_pair(
                vec![Card::new(Rank::Ten, Suit::Spades)],
                vec![Card::new(Rank::Two, Suit::Hearts)],
            ),
            PlayerMap::from_pair(
                vec![],
                vec![Card::new(Rank::Nine, Suit::Clubs).played(PlayerId::P1, Purpose::Points)],
            ),
            vec![Card::new(Rank::Ace, Suit::Clubs)],
            vec![],
        );
        let scuttle = Action::Scuttle {
            player: PlayerId::P0,
            card: key(Rank::Ten, Suit::Spades),
            target: key(Rank::Nine, Suit::Clubs),
        };

        assert_eq!(action_index_to_action(&state, action_to_index(&scuttle)), Some(scuttle));
        assert_eq!(action_index_to_action(&state, DRAW), Some(Action::Draw { player: PlayerId::P0 }));
        // Not in hand, so not legal
        let jack = Action::Jack {
            player: PlayerId::P0,
            card: key(Rank::Jack, Suit::Hearts),
            target: key(Rank::Nine, Suit::Clubs),
        };
        assert_eq!(action_index_to_action(&state, action_to_index(&jack)), None);
        assert_eq!(action_index_to_action(&state, ACTION_SPACE_SIZE), None);
    }

    #[test]
    fn test_decode_counter_recovers_target() {
        let mut state = GameState::new(
            PlayerMap::from_pair(
                vec![Card::new(Rank::Six, Suit::Clubs)],
                vec![Card::new(Rank::Two, Suit::Hearts)],
            ),
            PlayerMap::default(),
            vec![Card::new(Rank::Ace, Suit::Clubs)],
            vec![],
        );
        state
            .update_state(Action::OneOff {
                player: PlayerId::P0,
                card: key(Rank::Six, Suit::Clubs),
            })
            .unwrap();
        let counter = Action::Counter {
            player: PlayerId::P1,
            card: key(Rank::Two, Suit::Hearts),
            target: key(Rank::Six, Suit::Clubs),
        };

        assert_eq!(action_index_to_action(&state, action_to_index(&counter)), Some(counter));
    }

    #[test]
    fn test_map_keeps_first() {
        let a = Action::Draw { player: PlayerId::P0 };
        let b = Action::Draw { player: PlayerId::P1 };

        let map = build_action_map(&[a, b]);

        assert_eq!(map.len(), 1);
        assert_eq!(map[&DRAW], a);
    }
}
