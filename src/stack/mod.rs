//! Effect resolution: the one-off chain and its follow-up decisions.
//!
//! Cuttle's "stack" is shallow. A one-off opens a counter window for the
//! opponent, a single Two may counter it, and the chain then resolves. Some
//! effects (Three, Four, Seven) leave a further decision behind. All of this
//! is captured by one [`PendingEffect`] value on the game state.
//!
//! ## Example
//!
//! ```
//! use cuttle::cards::{CardKey, Rank, Suit};
//! use cuttle::core::{ActionKind, PlayerId};
//! use cuttle::stack::{CardSource, PendingEffect};
//!
//! let window = PendingEffect::OneOff {
//!     card: CardKey::new(Rank::Ace, Suit::Clubs),
//!     caster: PlayerId::P0,
//!     source: CardSource::Hand,
//!     counter: None,
//! };
//!
//! // The opponent may counter or let it through
//! assert_eq!(window.acting_player(PlayerId::P0), PlayerId::P1);
//! assert!(window.allows(ActionKind::Counter));
//! ```

mod pending;

pub use pending::{CardSource, PendingEffect};
