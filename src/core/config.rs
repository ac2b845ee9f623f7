//! Rules configuration.
//!
//! The standard Cuttle numbers (hand limit, deal sizes, effect counts, the
//! King target table) live in `RulesConfig` instead of being scattered as
//! literals through the state machine. `RulesConfig::default()` is the
//! standard game; the `with_*` methods adjust individual values.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// Maximum number of Kings that can matter (there are four in a deck).
pub const MAX_KINGS: usize = 4;

/// Rules configuration for one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Maximum hand size. Draws are refused at this size.
    pub hand_limit: usize,

    /// Cards dealt to each seat. Seat 0 moves first and receives fewer.
    pub deal_sizes: [usize; 2],

    /// Cards the opponent must discard when a Four resolves.
    pub four_discard_count: usize,

    /// Cards drawn when a Five resolves.
    pub five_draw_count: usize,

    /// Cards revealed from the top of the deck when a Seven resolves.
    pub seven_reveal_count: usize,

    /// Win target indexed by the number of Kings on the player's field.
    pub king_targets: [u32; MAX_KINGS + 1],
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            hand_limit: 8,
            deal_sizes: [5, 6],
            four_discard_count: 2,
            five_draw_count: 2,
            seven_reveal_count: 2,
            king_targets: [21, 14, 10, 5, 0],
        }
    }
}

impl RulesConfig {
    /// Standard rules.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the hand limit.
    #[must_use]
    pub fn with_hand_limit(mut self, limit: usize) -> Self {
        self.hand_limit = limit;
        self
    }

    /// Set the number of cards dealt to each seat.
    #[must_use]
    pub fn with_deal_sizes(mut self, p0: usize, p1: usize) -> Self {
        self.deal_sizes = [p0, p1];
        self
    }

    /// Set how many cards a Four forces the opponent to discard.
    #[must_use]
    pub fn with_four_discard_count(mut self, count: usize) -> Self {
        self.four_discard_count = count;
        self
    }

    /// Set how many cards a Five draws.
    #[must_use]
    pub fn with_five_draw_count(mut self, count: usize) -> Self {
        self.five_draw_count = count;
        self
    }

    /// Set how many cards a Seven reveals.
    #[must_use]
    pub fn with_seven_reveal_count(mut self, count: usize) -> Self {
        self.seven_reveal_count = count.max(1);
        self
    }

    /// Replace the King target table.
    ///
    /// The table must be non-increasing: more Kings never raise a target.
    #[must_use]
    pub fn with_king_targets(mut self, targets: [u32; MAX_KINGS + 1]) -> Self {
        debug_assert!(targets.windows(2).all(|w| w[0] >= w[1]));
        self.king_targets = targets;
        self
    }

    /// Cards dealt to a seat.
    #[must_use]
    pub fn deal_size(&self, player: PlayerId) -> usize {
        self.deal_sizes[player.index()]
    }

    /// Target for a player with `kings` Kings on their field.
    #[must_use]
    pub fn target_for_kings(&self, kings: usize) -> u32 {
        self.king_targets[kings.min(MAX_KINGS)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rules() {
        let config = RulesConfig::default();

        assert_eq!(config.hand_limit, 8);
        assert_eq!(config.deal_size(PlayerId::P0), 5);
        assert_eq!(config.deal_size(PlayerId::P1), 6);
        assert_eq!(config.four_discard_count, 2);
    }

    #[test]
    fn test_target_step_function() {
        let config = RulesConfig::default();
        let targets: Vec<_> = (0..=5).map(|k| config.target_for_kings(k)).collect();

        assert_eq!(targets, vec![21, 14, 10, 5, 0, 0]);
    }

    #[test]
    fn test_builder_methods() {
        let config = RulesConfig::new()
            .with_hand_limit(6)
            .with_deal_sizes(4, 4)
            .with_four_discard_count(1)
            .with_five_draw_count(3)
            .with_seven_reveal_count(0);

        assert_eq!(config.hand_limit, 6);
        assert_eq!(config.deal_sizes, [4, 4]);
        assert_eq!(config.four_discard_count, 1);
        assert_eq!(config.five_draw_count, 3);
        // A Seven always reveals at least one card
        assert_eq!(config.seven_reveal_count, 1);
    }

    #[test]
    fn test_config_serde() {
        let config = RulesConfig::default().with_king_targets([25, 18, 12, 6, 0]);
        let json = serde_json::to_string(&config).unwrap();
        let back: RulesConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(config, back);
    }
}
