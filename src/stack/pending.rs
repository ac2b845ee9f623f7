//! The pending-effect register.
//!
//! Normal turn-taking is suspended whenever a card needs a follow-up
//! decision: the counter window after a one-off, the pick after a Three,
//! the forced discards after a Four, the choice after a Seven. Exactly one
//! such sub-state can be active, so it is modelled as one enum rather than a
//! set of flags that could disagree.
//!
//! Each variant maps to the action kinds it allows and to the player who
//! must act. The state machine consults this table before enumerating or
//! applying anything.

use serde::{Deserialize, Serialize};

use crate::cards::CardKey;
use crate::core::{ActionKind, PlayerId};

/// Where a one-off card waits while its counter window is open.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardSource {
    /// Played from the caster's hand.
    Hand,
    /// Played from the cards a Seven revealed.
    Revealed,
}

/// The single active pending effect, if any.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PendingEffect {
    /// Ordinary turn-taking.
    #[default]
    None,

    /// A one-off waiting to resolve.
    OneOff {
        card: CardKey,
        caster: PlayerId,
        source: CardSource,
        /// The Two that countered it, once played.
        counter: Option<CardKey>,
    },

    /// A Three: `player` takes one card from the discard pile.
    Three {
        player: PlayerId,
        /// The Three itself, which cannot be taken back.
        source: CardKey,
    },

    /// A Four: `player` must discard `remaining` more cards.
    Four { player: PlayerId, remaining: usize },

    /// A Seven: `player` chooses among the revealed cards.
    Seven {
        player: PlayerId,
        requires_discard: bool,
    },
}

const NORMAL_TURN: &[ActionKind] = &[
    ActionKind::Draw,
    ActionKind::Points,
    ActionKind::FaceCard,
    ActionKind::Jack,
    ActionKind::OneOff,
    ActionKind::Scuttle,
];
const COUNTER_WINDOW: &[ActionKind] = &[ActionKind::Counter, ActionKind::Resolve];
const COUNTERED: &[ActionKind] = &[ActionKind::Resolve];
const THREE: &[ActionKind] = &[ActionKind::TakeFromDiscard];
const FOUR: &[ActionKind] = &[ActionKind::DiscardFromHand];
const SEVEN_PLAY: &[ActionKind] = &[
    ActionKind::Points,
    ActionKind::FaceCard,
    ActionKind::Jack,
    ActionKind::OneOff,
    ActionKind::Scuttle,
];
const SEVEN_DISCARD: &[ActionKind] = &[ActionKind::DiscardRevealed];

impl PendingEffect {
    /// Whether normal turn-taking is suspended.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !matches!(self, PendingEffect::None)
    }

    /// Action kinds allowed in this state.
    ///
    /// A countered one-off only accepts `Resolve`: there is a single
    /// counter layer.
    #[must_use]
    pub fn allowed_kinds(&self) -> &'static [ActionKind] {
        match self {
            PendingEffect::None => NORMAL_TURN,
            PendingEffect::OneOff { counter: None, .. } => COUNTER_WINDOW,
            PendingEffect::OneOff { counter: Some(_), .. } => COUNTERED,
            PendingEffect::Three { .. } => THREE,
            PendingEffect::Four { .. } => FOUR,
            PendingEffect::Seven {
                requires_discard: false,
                ..
            } => SEVEN_PLAY,
            PendingEffect::Seven {
                requires_discard: true,
                ..
            } => SEVEN_DISCARD,
        }
    }

    /// Whether `kind` is allowed in this state.
    #[must_use]
    pub fn allows(&self, kind: ActionKind) -> bool {
        self.allowed_kinds().contains(&kind)
    }

    /// Who must act, given whose turn it is.
    #[must_use]
    pub fn acting_player(&self, turn: PlayerId) -> PlayerId {
        match *self {
            PendingEffect::None => turn,
            PendingEffect::OneOff {
                caster,
                counter: None,
                ..
            } => caster.opponent(),
            PendingEffect::OneOff { caster, .. } => caster,
            PendingEffect::Three { player, .. }
            | PendingEffect::Four { player, .. }
            | PendingEffect::Seven { player, .. } => player,
        }
    }
}
