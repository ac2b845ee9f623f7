//! Zone system for card locations.
//!
//! Cuttle has a fixed set of zones: a hand and a field per player, a shared
//! deck and discard pile, and the transient revealed area used while a Seven
//! resolves. `Zones` owns all of them and is the only place cards move.

pub mod manager;

pub use manager::{Revealed, Zones};
