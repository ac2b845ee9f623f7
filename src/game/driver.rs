//! The match loop.
//!
//! `Match` owns a game state and one chooser per seat. Each step it asks the
//! acting seat for a decision, checks it against the legal actions, applies
//! it and advances the turn. Concessions and stalemate offers are handled
//! here; the state machine only knows about actions.

use tracing::{debug, info, warn};

use super::builder::GameBuilder;
use super::chooser::{ActionChooser, Choice, RandomChooser};
use crate::cards::CardKey;
use crate::core::{Action, GameRng, GameState, PlayerId, PlayerMap, RulesConfig, RulesResult};

/// Driver configuration.
#[derive(Clone, Debug)]
pub struct MatchConfig {
    /// Hard cap on decisions before the match is abandoned.
    pub max_actions: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self { max_actions: 2_000 }
    }
}

impl MatchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_actions(mut self, max: usize) -> Self {
        self.max_actions = max;
        self
    }
}

/// How a match ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchOutcome {
    /// A player reached their target.
    Winner(PlayerId),
    /// Deck ran out with nobody at target, or both seats agreed to stop.
    Stalemate,
    /// A player gave up.
    Conceded { by: PlayerId },
    /// The action cap was hit.
    ActionLimit,
}

impl MatchOutcome {
    /// Whether `player` won, by target or by the opponent's concession.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match *self {
            MatchOutcome::Winner(p) => p == player,
            MatchOutcome::Conceded { by } => by != player,
            MatchOutcome::Stalemate | MatchOutcome::ActionLimit => false,
        }
    }
}

/// A game between two choosers.
pub struct Match {
    state: GameState,
    choosers: PlayerMap<Box<dyn ActionChooser>>,
    config: MatchConfig,
    actions: usize,
    /// Four discards already picked, next pick last.
    queued_discards: Vec<CardKey>,
}

impl Match {
    pub fn new(state: GameState, p0: Box<dyn ActionChooser>, p1: Box<dyn ActionChooser>) -> Self {
        Self {
            state,
            choosers: PlayerMap::from_pair(p0, p1),
            config: MatchConfig::default(),
            actions: 0,
            queued_discards: Vec::new(),
        }
    }

    /// Random self-play from one seed: the shuffle and both seats' streams
    /// derive from it.
    pub fn self_play(seed: u64, rules: RulesConfig) -> RulesResult<Self> {
        let state = GameBuilder::new().rules(rules).seed(seed).build()?;
        let mut rng = GameRng::new(seed);
        let p0 = RandomChooser::from_rng(rng.fork());
        let p1 = RandomChooser::from_rng(rng.fork());
        Ok(Self::new(state, Box::new(p0), Box::new(p1)))
    }

    pub fn with_config(mut self, config: MatchConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn into_state(self) -> GameState {
        self.state
    }

    /// Decisions taken so far.
    #[must_use]
    pub fn actions_taken(&self) -> usize {
        self.actions
    }

    /// Play until the match ends.
    pub fn play(&mut self) -> RulesResult<MatchOutcome> {
        loop {
            if let Some(outcome) = self.step()? {
                info!(
                    ?outcome,
                    actions = self.actions,
                    turns = self.state.turn_number(),
                    p0_score = self.state.get_player_score(PlayerId::P0),
                    p1_score = self.state.get_player_score(PlayerId::P1),
                    "match over"
                );
                return Ok(outcome);
            }
        }
    }

    /// Take one decision. Returns the outcome once the match is over.
    pub fn step(&mut self) -> RulesResult<Option<MatchOutcome>> {
        if self.actions >= self.config.max_actions {
            return Ok(Some(MatchOutcome::ActionLimit));
        }

        let player = self.state.current_action_player();
        let legal = self.state.get_legal_actions();
        if legal.is_empty() {
            // Only reachable with an empty deck and nothing to play
            debug!(%player, "no legal actions");
            return Ok(Some(MatchOutcome::Stalemate));
        }

        let action = match self.decide(player, &legal) {
            Choice::Action(action) => action,
            Choice::Concede => {
                info!(%player, "conceded");
                return Ok(Some(MatchOutcome::Conceded { by: player }));
            }
            Choice::RequestStalemate => {
                self.actions += 1;
                if self.choosers[player.opponent()].accept_stalemate(&self.state) {
                    info!(%player, "stalemate agreed");
                    return Ok(Some(MatchOutcome::Stalemate));
                }
                debug!(%player, "stalemate offer rejected");
                return Ok(None);
            }
        };

        let action = if legal.contains(&action) {
            action
        } else {
            warn!(%player, %action, fallback = %legal[0], "chooser returned an illegal action");
            legal[0]
        };

        let outcome = self.state.update_state(action)?;
        self.actions += 1;
        if !self.state.resolving_four() {
            self.queued_discards.clear();
        }

        if let Some(winner) = outcome.winner {
            return Ok(Some(MatchOutcome::Winner(winner)));
        }
        if outcome.turn_finished {
            if self.state.is_stalemate() {
                return Ok(Some(MatchOutcome::Stalemate));
            }
            self.state.next_turn()?;
        }
        Ok(None)
    }

    /// Ask the acting seat, routing Three and Four decisions to their
    /// dedicated questions.
    fn decide(&mut self, player: PlayerId, legal: &[Action]) -> Choice {
        let chooser = &mut self.choosers[player];

        if self.state.resolving_three() {
            let candidates: Vec<CardKey> = legal.iter().filter_map(Action::card).collect();
            return match chooser.choose_from_discard(&self.state, &candidates) {
                Some(card) => Choice::Action(Action::TakeFromDiscard { player, card }),
                None => Choice::Action(legal[0]),
            };
        }

        if self.state.resolving_four() {
            if self.queued_discards.is_empty() {
                let candidates: Vec<CardKey> = legal.iter().filter_map(Action::card).collect();
                let count = self.state.pending_four_count();
                let mut picks = chooser.choose_hand_discards(&self.state, &candidates, count);
                picks.truncate(count);
                picks.reverse();
                self.queued_discards = picks;
            }
            return match self.queued_discards.pop() {
                Some(card) => Choice::Action(Action::DiscardFromHand { player, card }),
                None => Choice::Action(legal[0]),
            };
        }

        chooser.choose(&self.state, legal)
    }
}
