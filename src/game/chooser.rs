//! Decision makers.
//!
//! An `ActionChooser` sits on one seat and answers the driver's questions:
//! which legal action to take, which discard-pile card a Three fetches,
//! which hand cards a Four throws away, and whether to accept a stalemate
//! offer. Choosers never mutate the state; the driver validates every answer.
//!
//! Human interfaces and learned agents implement the trait outside this
//! crate. The stock choosers here cover testing and self-play.

use std::collections::VecDeque;

use crate::cards::CardKey;
use crate::core::{Action, GameRng, GameRngState, GameState};

/// What a chooser wants to do on its turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Choice {
    /// Take one of the offered actions.
    Action(Action),
    /// Give up; the opponent wins.
    Concede,
    /// Offer the opponent a stalemate.
    RequestStalemate,
}

/// One seat's decision maker.
pub trait ActionChooser {
    /// Pick one of `legal` (or concede / offer a stalemate).
    fn choose(&mut self, state: &GameState, legal: &[Action]) -> Choice;

    /// Pick the card a Three takes back from the discard pile.
    fn choose_from_discard(&mut self, _state: &GameState, candidates: &[CardKey]) -> Option<CardKey> {
        candidates.first().copied()
    }

    /// Pick up to `count` hand cards to discard for a Four.
    fn choose_hand_discards(
        &mut self,
        _state: &GameState,
        candidates: &[CardKey],
        count: usize,
    ) -> Vec<CardKey> {
        candidates.iter().take(count).copied().collect()
    }

    /// Answer the opponent's stalemate offer.
    fn accept_stalemate(&mut self, _state: &GameState) -> bool {
        false
    }
}

/// Always takes the first legal action.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstLegal;

impl ActionChooser for FirstLegal {
    fn choose(&mut self, _state: &GameState, legal: &[Action]) -> Choice {
        legal.first().map_or(Choice::Concede, |a| Choice::Action(*a))
    }
}

/// Uniformly random choices from a seeded stream.
#[derive(Clone, Debug)]
pub struct RandomChooser {
    rng: GameRng,
    stalemate_acceptance: f64,
}

impl RandomChooser {
    pub fn new(seed: u64) -> Self {
        Self::from_rng(GameRng::new(seed))
    }

    pub fn from_rng(rng: GameRng) -> Self {
        Self {
            rng,
            stalemate_acceptance: 0.5,
        }
    }

    /// Probability of accepting a stalemate offer.
    pub fn with_stalemate_acceptance(mut self, probability: f64) -> Self {
        self.stalemate_acceptance = probability.clamp(0.0, 1.0);
        self
    }

    /// Capture the RNG position.
    pub fn checkpoint(&self) -> GameRngState {
        self.rng.state()
    }

    /// Rewind to a captured RNG position.
    pub fn restore(&mut self, state: &GameRngState) {
        self.rng = GameRng::from_state(state);
    }
}

impl ActionChooser for RandomChooser {
    fn choose(&mut self, _state: &GameState, legal: &[Action]) -> Choice {
        self.rng
            .choose(legal)
            .map_or(Choice::Concede, |a| Choice::Action(*a))
    }

    fn choose_from_discard(&mut self, _state: &GameState, candidates: &[CardKey]) -> Option<CardKey> {
        self.rng.choose(candidates).copied()
    }

    fn choose_hand_discards(
        &mut self,
        _state: &GameState,
        candidates: &[CardKey],
        count: usize,
    ) -> Vec<CardKey> {
        let mut picks = candidates.to_vec();
        self.rng.shuffle(&mut picks);
        picks.truncate(count);
        picks
    }

    fn accept_stalemate(&mut self, _state: &GameState) -> bool {
        self.rng.gen_bool(self.stalemate_acceptance)
    }
}

/// Replays a fixed list of choices, then plays the first legal action.
#[derive(Clone, Debug, Default)]
pub struct ScriptedChooser {
    script: VecDeque<Choice>,
    accept_stalemate: bool,
}

impl ScriptedChooser {
    pub fn new(script: impl IntoIterator<Item = Choice>) -> Self {
        Self {
            script: script.into_iter().collect(),
            accept_stalemate: false,
        }
    }

    /// Script a sequence of actions.
    pub fn from_actions(actions: impl IntoIterator<Item = Action>) -> Self {
        Self::new(actions.into_iter().map(Choice::Action))
    }

    /// Builder: how to answer stalemate offers.
    pub fn accepting_stalemate(mut self, accept: bool) -> Self {
        self.accept_stalemate = accept;
        self
    }

    /// Choices not yet replayed.
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl ActionChooser for ScriptedChooser {
    fn choose(&mut self, state: &GameState, legal: &[Action]) -> Choice {
        match self.script.pop_front() {
            Some(choice) => choice,
            None => FirstLegal.choose(state, legal),
        }
    }

    fn accept_stalemate(&mut self, _state: &GameState) -> bool {
        self.accept_stalemate
    }
}
