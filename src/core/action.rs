//! Action representation.
//!
//! An action is a sum type: each kind carries exactly the fields it needs.
//! A `Draw` has no card, a `Scuttle` always has a target, and so on, so
//! malformed actions cannot be constructed.
//!
//! Cards are referred to by `CardKey`, never by value. The state machine
//! looks the key up in the zone the action implies.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use crate::cards::CardKey;

/// Discriminant of an [`Action`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    Draw,
    Points,
    FaceCard,
    Jack,
    OneOff,
    Counter,
    Resolve,
    Scuttle,
    TakeFromDiscard,
    DiscardFromHand,
    DiscardRevealed,
}

/// A complete game action.
///
/// ```
/// use cuttle::cards::{CardKey, Rank, Suit};
/// use cuttle::core::{Action, ActionKind, PlayerId};
///
/// let ten = CardKey::new(Rank::Ten, Suit::Hearts);
/// let nine = CardKey::new(Rank::Nine, Suit::Clubs);
/// let scuttle = Action::Scuttle { player: PlayerId::P0, card: ten, target: nine };
///
/// assert_eq!(scuttle.kind(), ActionKind::Scuttle);
/// assert_eq!(scuttle.target(), Some(nine));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Take the top card of the deck.
    Draw { player: PlayerId },

    /// Play a point card to the field for points.
    Points { player: PlayerId, card: CardKey },

    /// Play a King, Queen or Eight to the field.
    FaceCard { player: PlayerId, card: CardKey },

    /// Play a Jack onto an opponent-controlled point card, stealing it.
    Jack {
        player: PlayerId,
        card: CardKey,
        target: CardKey,
    },

    /// Play a card for its one-off effect. Opens a counter window.
    OneOff { player: PlayerId, card: CardKey },

    /// Counter the pending one-off with a Two.
    Counter {
        player: PlayerId,
        card: CardKey,
        target: CardKey,
    },

    /// Close the counter window and let the chain resolve.
    Resolve { player: PlayerId },

    /// Destroy an opponent point card with a stronger point card.
    Scuttle {
        player: PlayerId,
        card: CardKey,
        target: CardKey,
    },

    /// Three: take a card from the discard pile.
    TakeFromDiscard { player: PlayerId, card: CardKey },

    /// Four: discard a card from hand.
    DiscardFromHand { player: PlayerId, card: CardKey },

    /// Seven: discard a revealed card that cannot be played.
    DiscardRevealed { player: PlayerId, card: CardKey },
}

/// Identity of an action for mapping purposes: kind, card, target.
pub type ActionIdentity = (ActionKind, Option<CardKey>, Option<CardKey>);

impl Action {
    /// The action's kind.
    #[must_use]
    pub fn kind(&self) -> ActionKind {
        match self {
            Action::Draw { .. } => ActionKind::Draw,
            Action::Points { .. } => ActionKind::Points,
            Action::FaceCard { .. } => ActionKind::FaceCard,
            Action::Jack { .. } => ActionKind::Jack,
            Action::OneOff { .. } => ActionKind::OneOff,
            Action::Counter { .. } => ActionKind::Counter,
            Action::Resolve { .. } => ActionKind::Resolve,
            Action::Scuttle { .. } => ActionKind::Scuttle,
            Action::TakeFromDiscard { .. } => ActionKind::TakeFromDiscard,
            Action::DiscardFromHand { .. } => ActionKind::DiscardFromHand,
            Action::DiscardRevealed { .. } => ActionKind::DiscardRevealed,
        }
    }

    /// The acting player.
    #[must_use]
    pub fn player(&self) -> PlayerId {
        match *self {
            Action::Draw { player }
            | Action::Points { player, .. }
            | Action::FaceCard { player, .. }
            | Action::Jack { player, .. }
            | Action::OneOff { player, .. }
            | Action::Counter { player, .. }
            | Action::Resolve { player }
            | Action::Scuttle { player, .. }
            | Action::TakeFromDiscard { player, .. }
            | Action::DiscardFromHand { player, .. }
            | Action::DiscardRevealed { player, .. } => player,
        }
    }

    /// The acting card, if the kind has one.
    #[must_use]
    pub fn card(&self) -> Option<CardKey> {
        match *self {
            Action::Draw { .. } | Action::Resolve { .. } => None,
            Action::Points { card, .. }
            | Action::FaceCard { card, .. }
            | Action::Jack { card, .. }
            | Action::OneOff { card, .. }
            | Action::Counter { card, .. }
            | Action::Scuttle { card, .. }
            | Action::TakeFromDiscard { card, .. }
            | Action::DiscardFromHand { card, .. }
            | Action::DiscardRevealed { card, .. } => Some(card),
        }
    }

    /// The target card, if the kind has one.
    #[must_use]
    pub fn target(&self) -> Option<CardKey> {
        match *self {
            Action::Jack { target, .. }
            | Action::Counter { target, .. }
            | Action::Scuttle { target, .. } => Some(target),
            _ => None,
        }
    }

    /// (kind, card, target), enough to tell any two legal actions apart.
    #[must_use]
    pub fn identity(&self) -> ActionIdentity {
        (self.kind(), self.card(), self.target())
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Draw { .. } => write!(f, "Draw a card from deck"),
            Action::Points { card, .. } => write!(f, "Play {card} as points"),
            Action::FaceCard { card, .. } => write!(f, "Play {card} as face card"),
            Action::Jack { card, target, .. } => write!(f, "Play {card} as jack on {target}"),
            Action::OneOff { card, .. } => write!(f, "Play {card} as one-off"),
            Action::Counter { card, target, .. } => write!(f, "Counter {target} with {card}"),
            Action::Resolve { .. } => write!(f, "Resolve"),
            Action::Scuttle { card, target, .. } => write!(f, "Scuttle {target} with {card}"),
            Action::TakeFromDiscard { card, .. } => write!(f, "Take {card} from discard pile"),
            Action::DiscardFromHand { card, .. } => write!(f, "Discard {card} from hand"),
            Action::DiscardRevealed { card, .. } => write!(f, "Discard revealed {card}"),
        }
    }
}

/// A recorded action with metadata for history tracking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who took this action.
    pub player: PlayerId,

    /// The action taken.
    pub action: Action,

    /// Turn number when action was taken.
    pub turn: u32,

    /// Sequence number within the game.
    pub sequence: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(action: Action, turn: u32, sequence: u32) -> Self {
        Self {
            player: action.player(),
            action,
            turn,
            sequence,
        }
    }
}

impl std::fmt::Display for ActionRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[turn {}] {}: {}", self.turn, self.player, self.action)
    }
}
