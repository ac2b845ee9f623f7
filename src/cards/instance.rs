//! Card instances - identity plus game-assigned state.
//!
//! A `Card` is the thing that moves between zones. Its `key` never changes;
//! `owner`, `purpose` and `attachments` are assigned when the card is played
//! and cleared when it leaves play.
//!
//! ## Attachments
//!
//! Jacks are not field entries of their own. A Jack is pushed onto the
//! `attachments` of the point card it steals, so several Jacks stack in play
//! order on one card. The card's controller is the owner of the topmost
//! attachment.

use serde::{Deserialize, Serialize};

use super::definition::{CardKey, Rank, Suit};
use crate::core::PlayerId;

/// Why a card is in play.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Purpose {
    Points,
    FaceCard,
    OneOff,
    Counter,
}

/// A physical card in a game.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Immutable identity.
    pub key: CardKey,

    /// Who played this card. `None` outside hand-to-table play.
    pub owner: Option<PlayerId>,

    /// Role the card was played for.
    pub purpose: Option<Purpose>,

    /// Cards stacked on this one, oldest first.
    #[serde(default)]
    pub attachments: Vec<Card>,
}

impl Card {
    /// A fresh, unplayed card.
    #[must_use]
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self::from_key(CardKey::new(rank, suit))
    }

    /// A fresh, unplayed card from its key.
    #[must_use]
    pub fn from_key(key: CardKey) -> Self {
        Self {
            key,
            owner: None,
            purpose: None,
            attachments: Vec::new(),
        }
    }

    /// Builder: mark the card as played by `owner` for `purpose`.
    #[must_use]
    pub fn played(mut self, owner: PlayerId, purpose: Purpose) -> Self {
        self.owner = Some(owner);
        self.purpose = Some(purpose);
        self
    }

    #[must_use]
    pub fn rank(&self) -> Rank {
        self.key.rank
    }

    #[must_use]
    pub fn suit(&self) -> Suit {
        self.key.suit
    }

    /// Point value: Ace = 1 .. Ten = 10, face ranks 0.
    #[must_use]
    pub fn point_value(&self) -> u32 {
        if self.is_point_card() {
            self.key.rank.value()
        } else {
            0
        }
    }

    /// Ace through Ten.
    #[must_use]
    pub fn is_point_card(&self) -> bool {
        self.key.rank.is_point_rank()
    }

    /// Eight, Jack, Queen, King.
    #[must_use]
    pub fn is_face_card(&self) -> bool {
        self.key.rank.is_face_rank()
    }

    /// Scuttle tie-break value.
    #[must_use]
    pub fn suit_value(&self) -> u32 {
        self.key.suit.value()
    }

    /// Reset owner and purpose (the card left play).
    pub fn clear_player_info(&mut self) {
        self.owner = None;
        self.purpose = None;
    }

    /// Whether this card is in play as points.
    #[must_use]
    pub fn scores(&self) -> bool {
        self.purpose == Some(Purpose::Points)
    }

    /// Current controller: the topmost attachment's owner, else the owner.
    #[must_use]
    pub fn controller(&self) -> Option<PlayerId> {
        match self.attachments.last() {
            Some(jack) => jack.owner,
            None => self.owner,
        }
    }

    /// Whether a Jack is stacked on this card.
    #[must_use]
    pub fn is_stolen(&self) -> bool {
        self.controller() != self.owner
    }

    /// Remove every attachment, clearing each one.
    pub fn take_attachments(&mut self) -> Vec<Card> {
        let mut released = std::mem::take(&mut self.attachments);
        for card in &mut released {
            card.clear_player_info();
        }
        released
    }

    /// Visit this card's key and every attached key.
    pub fn keys(&self) -> impl Iterator<Item = CardKey> + '_ {
        std::iter::once(self.key).chain(self.attachments.iter().map(|c| c.key))
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_stolen() {
            f.write_str("[Stolen from opponent] ")?;
        }
        for _ in &self.attachments {
            f.write_str("[Jack]")?;
        }
        if !self.attachments.is_empty() {
            f.write_str(" ")?;
        }
        write!(f, "{}", self.key)
    }
}
