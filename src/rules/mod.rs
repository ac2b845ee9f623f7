//! The Cuttle state machine.
//!
//! Everything here is an `impl GameState` block:
//! - `legal`: `get_legal_actions`, pure enumeration driven by the pending
//!   effect
//! - `transition`: `update_state`, the single entry point that changes a game
//! - `effects`: what each one-off does once it resolves
//!
//! ## Example
//!
//! ```
//! use cuttle::cards::{Card, CardKey, Rank, Suit};
//! use cuttle::core::{Action, GameState, PlayerId, PlayerMap};
//!
//! let mut state = GameState::new(
//!     PlayerMap::from_pair(vec![Card::new(Rank::Nine, Suit::Hearts)], vec![]),
//!     PlayerMap::default(),
//!     vec![Card::new(Rank::Ace, Suit::Spades)],
//!     vec![],
//! );
//!
//! let play = Action::Points {
//!     player: PlayerId::P0,
//!     card: CardKey::new(Rank::Nine, Suit::Hearts),
//! };
//! assert!(state.get_legal_actions().contains(&play));
//!
//! let outcome = state.update_state(play).unwrap();
//! assert!(outcome.turn_finished);
//! assert_eq!(state.get_player_score(PlayerId::P0), 9);
//! ```

mod effects;
mod legal;
mod transition;
