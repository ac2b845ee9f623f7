//! Card system: identities, instances and the deck.
//!
//! ## Key Types
//!
//! - `Rank`, `Suit`: the two halves of a card's identity
//! - `CardKey`: immutable identity, used by actions to name cards
//! - `Card`: a card in a zone, with owner, purpose and attachments
//! - `Purpose`: why a card is in play
//!
//! Deck helpers generate the 52 identities, shuffle them with a `GameRng`
//! and deal the opening hands.

pub mod deck;
pub mod definition;
pub mod instance;

pub use deck::{deal, generate_deck, is_complete_deck, shuffled_deck, Deal};
pub use definition::{CardKey, Rank, Suit, DECK_SIZE};
pub use instance::{Card, Purpose};
