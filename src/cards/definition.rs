//! Card identity: rank, suit and the 52 unique keys.
//!
//! `CardKey` is the immutable half of a card. It is `Copy`, hashable and
//! totally ordered, which makes it the natural thing for actions to refer to.
//! Mutable, game-assigned data lives on `Card` (see `instance`).

use serde::{Deserialize, Serialize};

/// Number of distinct cards in a deck.
pub const DECK_SIZE: usize = 52;

/// Card rank. Discriminants are the printed values (Ace = 1).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Ace = 1,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    /// All ranks, low to high.
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Printed value, 1..=13.
    #[must_use]
    pub const fn value(self) -> u32 {
        self as u32
    }

    /// Ace through Ten.
    #[must_use]
    pub const fn is_point_rank(self) -> bool {
        self.value() <= Rank::Ten.value()
    }

    /// Eight, Jack, Queen, King.
    #[must_use]
    pub const fn is_face_rank(self) -> bool {
        matches!(self, Rank::Eight | Rank::Jack | Rank::Queen | Rank::King)
    }

    /// Ranks with an untargeted one-off effect.
    #[must_use]
    pub const fn has_one_off(self) -> bool {
        matches!(
            self,
            Rank::Ace | Rank::Three | Rank::Four | Rank::Five | Rank::Six | Rank::Seven
        )
    }

    fn name(self) -> &'static str {
        match self {
            Rank::Ace => "Ace",
            Rank::Two => "Two",
            Rank::Three => "Three",
            Rank::Four => "Four",
            Rank::Five => "Five",
            Rank::Six => "Six",
            Rank::Seven => "Seven",
            Rank::Eight => "Eight",
            Rank::Nine => "Nine",
            Rank::Ten => "Ten",
            Rank::Jack => "Jack",
            Rank::Queen => "Queen",
            Rank::King => "King",
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Card suit. Declaration order is the scuttle tie-break order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    /// All suits, lowest to highest.
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    /// Tie-break value: Clubs 0 < Diamonds 1 < Hearts 2 < Spades 3.
    #[must_use]
    pub const fn value(self) -> u32 {
        self as u32
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Suit::Clubs => "Clubs",
            Suit::Diamonds => "Diamonds",
            Suit::Hearts => "Hearts",
            Suit::Spades => "Spades",
        })
    }
}

/// Immutable card identity.
///
/// Ordering is by rank, then suit, which is exactly the scuttle order.
///
/// ```
/// use cuttle::cards::{CardKey, Rank, Suit};
///
/// let nine = CardKey::new(Rank::Nine, Suit::Clubs);
/// let also_nine = CardKey::new(Rank::Nine, Suit::Spades);
/// assert!(also_nine > nine);
/// assert_eq!(nine.index(), 32);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardKey {
    pub rank: Rank,
    pub suit: Suit,
}

impl CardKey {
    /// Create a key.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Canonical index in `0..52`: `(rank - 1) * 4 + suit`.
    #[must_use]
    pub const fn index(self) -> usize {
        (self.rank.value() as usize - 1) * 4 + self.suit.value() as usize
    }

    /// All 52 keys in index order.
    pub fn all() -> impl Iterator<Item = CardKey> {
        Rank::ALL
            .into_iter()
            .flat_map(|rank| Suit::ALL.into_iter().map(move |suit| CardKey::new(rank, suit)))
    }

    /// Whether this card beats `target` in a scuttle.
    #[must_use]
    pub fn scuttles(self, target: CardKey) -> bool {
        self.rank.is_point_rank() && target.rank.is_point_rank() && self > target
    }
}

impl std::fmt::Display for CardKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} of {}", self.rank, self.suit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_classes() {
        assert!(Rank::Ace.is_point_rank());
        assert!(Rank::Ten.is_point_rank());
        assert!(!Rank::Jack.is_point_rank());

        assert!(Rank::Eight.is_face_rank());
        assert!(Rank::Eight.is_point_rank());
        assert!(!Rank::Nine.is_face_rank());

        assert!(!Rank::Two.has_one_off());
        assert!(Rank::Seven.has_one_off());
    }

    #[test]
    fn test_index_covers_deck() {
        let indices: Vec<_> = CardKey::all().map(CardKey::index).collect();
        assert_eq!(indices, (0..DECK_SIZE).collect::<Vec<_>>());
    }

    #[test]
    fn test_scuttle_order() {
        let ten_clubs = CardKey::new(Rank::Ten, Suit::Clubs);
        let nine_spades = CardKey::new(Rank::Nine, Suit::Spades);
        let ten_hearts = CardKey::new(Rank::Ten, Suit::Hearts);

        assert!(ten_clubs.scuttles(nine_spades));
        assert!(!nine_spades.scuttles(ten_clubs));
        assert!(ten_hearts.scuttles(ten_clubs));
        assert!(!ten_clubs.scuttles(ten_hearts));
        assert!(!ten_clubs.scuttles(ten_clubs));
    }

    #[test]
    fn test_face_cards_never_scuttle() {
        let king = CardKey::new(Rank::King, Suit::Spades);
        let two = CardKey::new(Rank::Two, Suit::Clubs);

        assert!(!king.scuttles(two));
        assert!(!two.scuttles(king));
    }

    #[test]
    fn test_display() {
        assert_eq!(CardKey::new(Rank::Eight, Suit::Clubs).to_string(), "Eight of Clubs");
    }
}
