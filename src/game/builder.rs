//! Game setup: shuffle, deal and initial state.

use crate::cards::{deal, shuffled_deck, Card, CardKey};
use crate::core::{GameRng, GameState, RulesConfig, RulesResult};

/// Builder for a new game.
///
/// ## Example
///
/// ```
/// use cuttle::core::PlayerId;
/// use cuttle::game::GameBuilder;
///
/// let state = GameBuilder::new().seed(7).build().unwrap();
///
/// assert_eq!(state.get_player_hand(PlayerId::P0).len(), 5);
/// assert_eq!(state.get_player_hand(PlayerId::P1).len(), 6);
/// assert_eq!(state.zones().deck().len(), 41);
/// ```
#[derive(Clone, Debug, Default)]
pub struct GameBuilder {
    rules: RulesConfig,
    seed: u64,
    deck: Option<Vec<CardKey>>,
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rules to play under.
    pub fn rules(mut self, rules: RulesConfig) -> Self {
        self.rules = rules;
        self
    }

    /// Shuffle seed. Ignored when a preset deck is given.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Deal from a fixed order instead of shuffling.
    ///
    /// Cards are dealt front to back: seat 0's hand first, then seat 1's,
    /// and the remainder becomes the deck with its last card on top. The
    /// order need not hold all 52 cards, but may not repeat one.
    pub fn deck(mut self, order: Vec<CardKey>) -> Self {
        self.deck = Some(order);
        self
    }

    /// Deal and build the initial state.
    pub fn build(self) -> RulesResult<GameState> {
        let cards = match self.deck {
            Some(order) => order.into_iter().map(Card::from_key).collect(),
            None => shuffled_deck(&mut GameRng::new(self.seed)),
        };
        let state = GameState::from_deal(deal(cards, &self.rules), self.rules);
        state.zones().check_unique()?;
        Ok(state)
    }
}
