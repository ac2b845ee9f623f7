//! # cuttle
//!
//! A rules engine for Cuttle, the two-player combat card game.
//!
//! ## Design Principles
//!
//! 1. **One Pending Effect**: the counter window and the Three, Four and
//!    Seven follow-ups are variants of a single enum, so two can never be
//!    active at once.
//!
//! 2. **Turn vs. Priority**: whose turn it is and who must act right now are
//!    separate fields.
//!
//! 3. **Validate, Then Mutate**: `update_state` rejects anything that is not
//!    currently legal before touching the state.
//!
//! ## Architecture
//!
//! - **Zones Own Cards**: every card lives in exactly one zone. Jacks are
//!   attachments on the point card they steal, so control follows the top
//!   attachment.
//!
//! - **Persistent History**: the action log is an `im` vector, so cloning a
//!   state for search or analysis is cheap.
//!
//! - **Deterministic**: shuffles and random choosers run on seeded ChaCha
//!   streams.
//!
//! ## Modules
//!
//! - `core`: players, state, actions, action index, RNG, configuration, errors
//! - `cards`: card identities, instances and the deck
//! - `zones`: hands, fields, deck, discard pile and revealed cards
//! - `stack`: the pending-effect register
//! - `rules`: legal-action enumeration and the transition function
//! - `game`: setup, choosers and the match driver

pub mod cards;
pub mod core;
pub mod game;
pub mod rules;
pub mod stack;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionKind, ActionRecord, GameRng, GameState, PlayerId, PlayerMap, RulesConfig, RulesError,
    RulesResult, TurnOutcome,
};

pub use crate::cards::{Card, CardKey, Purpose, Rank, Suit};

pub use crate::zones::Zones;

pub use crate::stack::{CardSource, PendingEffect};

pub use crate::game::{ActionChooser, Choice, GameBuilder, Match, MatchConfig, MatchOutcome};
