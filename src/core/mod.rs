//! Core engine types: players, state, actions, RNG, configuration, errors.
//!
//! `GameState` is defined here; the rules that drive it (enumeration and
//! transitions) live in `crate::rules` as further `impl GameState` blocks.

pub mod action;
pub mod action_index;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{Action, ActionIdentity, ActionKind, ActionRecord};
pub use action_index::{
    action_index_to_action, action_to_index, build_action_map, kind_range, legal_action_mask,
    ACTION_SPACE_SIZE,
};
pub use config::{RulesConfig, MAX_KINGS};
pub use error::{RulesError, RulesResult, ZoneName};
pub use player::{PlayerId, PlayerMap, PLAYER_COUNT};
pub use rng::{GameRng, GameRngState};
pub use state::{GameState, TurnOutcome};
