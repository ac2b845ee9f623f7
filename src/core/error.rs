//! Error type for the rules engine.
//!
//! Every variant is an invariant violation: the caller offered an action the
//! state machine never produced, or handed it a corrupt snapshot. Winning and
//! stalemate are ordinary return values, never errors.

use thiserror::Error;

use super::action::Action;
use super::player::PlayerId;
use crate::cards::CardKey;

/// Where a card was expected to be.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZoneName {
    Hand(PlayerId),
    Field,
    Deck,
    Discard,
    Revealed,
}

impl std::fmt::Display for ZoneName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ZoneName::Hand(p) => write!(f, "{p}'s hand"),
            ZoneName::Field => f.write_str("the field"),
            ZoneName::Deck => f.write_str("the deck"),
            ZoneName::Discard => f.write_str("the discard pile"),
            ZoneName::Revealed => f.write_str("the revealed cards"),
        }
    }
}

/// Rules engine error.
#[derive(Debug, Error)]
pub enum RulesError {
    #[error("{player} cannot draw: hand already holds {limit} cards")]
    HandFull { player: PlayerId, limit: usize },

    #[error("cannot draw from an empty deck")]
    EmptyDeck,

    #[error("{card} cannot counter: only a Two can counter a one-off")]
    InvalidCounter { card: CardKey },

    #[error("action is not legal in the current state: {action}")]
    IllegalAction { action: Action },

    #[error("{card} is not in {zone}")]
    CardNotFound { card: CardKey, zone: ZoneName },

    #[error("cannot advance the turn while an effect is pending")]
    PendingEffect,

    #[error("card {card} appears more than once")]
    DuplicateCard { card: CardKey },

    #[error("inconsistent state: {reason}")]
    Inconsistent { reason: &'static str },

    #[error("binary snapshot error: {0}")]
    Encoding(#[from] bincode::Error),

    #[error("json snapshot error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias for rules operations.
pub type RulesResult<T> = Result<T, RulesError>;
