//! Legal action enumeration.
//!
//! Enumeration is two-level: the pending effect names the action kinds that
//! are allowed, then each kind enumerates its concrete actions from the
//! relevant zone. During a Seven the revealed cards stand in for the hand.

use tracing::trace;

use crate::cards::{Card, CardKey, Purpose, Rank};
use crate::core::{Action, ActionKind, GameState, PlayerId};
use crate::stack::PendingEffect;

impl GameState {
    /// All actions the current action player may take. Pure.
    #[must_use]
    pub fn get_legal_actions(&self) -> Vec<Action> {
        let player = self.current_action_player;
        let mut actions = Vec::new();
        for &kind in self.pending.allowed_kinds() {
            self.actions_for_kind(kind, player, &mut actions);
        }
        trace!(
            player = %player,
            pending = ?self.pending,
            count = actions.len(),
            "enumerated legal actions"
        );
        actions
    }

    /// Whether `action` is currently legal.
    #[must_use]
    pub fn is_legal(&self, action: &Action) -> bool {
        action.player() == self.current_action_player
            && self.pending.allows(action.kind())
            && self.get_legal_actions().contains(action)
    }

    /// Cards a player can play from right now: the hand, or the revealed
    /// cards while a Seven waits.
    pub(crate) fn play_source(&self, player: PlayerId) -> &[Card] {
        match self.pending {
            PendingEffect::Seven { .. } => self.zones.revealed(),
            _ => self.zones.hand(player),
        }
    }

    fn actions_for_kind(&self, kind: ActionKind, player: PlayerId, out: &mut Vec<Action>) {
        match kind {
            ActionKind::Draw => {
                let hand = self.zones.hand(player);
                if hand.len() < self.config.hand_limit && !self.zones.deck().is_empty() {
                    out.push(Action::Draw { player });
                }
            }
            ActionKind::Points => {
                for card in self.play_source(player) {
                    push_points(player, card, out);
                }
            }
            ActionKind::FaceCard => {
                for card in self.play_source(player) {
                    push_face(player, card, out);
                }
            }
            ActionKind::Jack => {
                for card in self.play_source(player) {
                    self.push_jacks(player, card, out);
                }
            }
            ActionKind::OneOff => {
                for card in self.play_source(player) {
                    push_one_off(player, card, out);
                }
            }
            ActionKind::Scuttle => {
                for card in self.play_source(player) {
                    self.push_scuttles(player, card, out);
                }
            }
            ActionKind::Counter => {
                if let PendingEffect::OneOff { card: target, .. } = self.pending {
                    out.extend(
                        self.zones
                            .hand(player)
                            .iter()
                            .filter(|c| c.rank() == Rank::Two)
                            .map(|c| Action::Counter {
                                player,
                                card: c.key,
                                target,
                            }),
                    );
                }
            }
            ActionKind::Resolve => out.push(Action::Resolve { player }),
            ActionKind::TakeFromDiscard => {
                if let PendingEffect::Three { source, .. } = self.pending {
                    out.extend(
                        self.zones
                            .discard()
                            .iter()
                            .filter(|c| c.key != source)
                            .map(|c| Action::TakeFromDiscard { player, card: c.key }),
                    );
                }
            }
            ActionKind::DiscardFromHand => out.extend(
                self.zones
                    .hand(player)
                    .iter()
                    .map(|c| Action::DiscardFromHand { player, card: c.key }),
            ),
            ActionKind::DiscardRevealed => out.extend(
                self.zones
                    .revealed()
                    .iter()
                    .map(|c| Action::DiscardRevealed { player, card: c.key }),
            ),
        }
    }

    /// Every normal-turn play of one card, ignoring where it sits.
    pub(crate) fn plays_for_card(&self, player: PlayerId, card: &Card) -> Vec<Action> {
        let mut out = Vec::new();
        push_points(player, card, &mut out);
        push_face(player, card, &mut out);
        self.push_jacks(player, card, &mut out);
        push_one_off(player, card, &mut out);
        self.push_scuttles(player, card, &mut out);
        out
    }

    /// A Queen shields only the point cards on her own field; a card the
    /// opponent stole from `player`'s field stays open to a Jack.
    fn push_jacks(&self, player: PlayerId, card: &Card, out: &mut Vec<Action>) {
        if card.rank() != Rank::Jack {
            return;
        }
        let opponent = player.opponent();
        let shielded = self.has_queen(opponent);
        out.extend(
            self.opponent_points_by_seat(player)
                .filter(|&(seat, _)| !(shielded && seat == opponent))
                .map(|(_, target)| Action::Jack {
                    player,
                    card: card.key,
                    target,
                }),
        );
    }

    fn push_scuttles(&self, player: PlayerId, card: &Card, out: &mut Vec<Action>) {
        if !card.is_point_card() {
            return;
        }
        out.extend(
            self.opponent_points(player)
                .filter(|&target| card.key.scuttles(target))
                .map(|target| Action::Scuttle {
                    player,
                    card: card.key,
                    target,
                }),
        );
    }

    /// Point cards in play that the opponent of `player` controls.
    fn opponent_points(&self, player: PlayerId) -> impl Iterator<Item = CardKey> + '_ {
        self.opponent_points_by_seat(player).map(|(_, key)| key)
    }

    /// As `opponent_points`, with the seat whose field holds each card.
    fn opponent_points_by_seat(&self, player: PlayerId) -> impl Iterator<Item = (PlayerId, CardKey)> + '_ {
        let opponent = player.opponent();
        self.zones
            .field_cards()
            .filter(move |(_, c)| c.purpose == Some(Purpose::Points) && c.controller() == Some(opponent))
            .map(|(seat, c)| (seat, c.key))
    }
}

fn push_points(player: PlayerId, card: &Card, out: &mut Vec<Action>) {
    if card.is_point_card() {
        out.push(Action::Points {
            player,
            card: card.key,
        });
    }
}

fn push_face(player: PlayerId, card: &Card, out: &mut Vec<Action>) {
    if matches!(card.rank(), Rank::Eight | Rank::Queen | Rank::King) {
        out.push(Action::FaceCard {
            player,
            card: card.key,
        });
    }
}

fn push_one_off(player: PlayerId, card: &Card, out: &mut Vec<Action>) {
    if card.rank().has_one_off() {
        out.push(Action::OneOff {
            player,
            card: card.key,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Suit;
    use crate::core::PlayerMap;
    use crate::stack::CardSource;

    fn key(rank: Rank, suit: Suit) -> CardKey {
        CardKey::new(rank, suit)
    }

    fn state(hand: Vec<Card>, p1_field: Vec<Card>) -> GameState {
        GameState::new(
            PlayerMap::from_pair(hand, vec![Card::new(Rank::Two, Suit::Spades)]),
            PlayerMap::from_pair(vec![], p1_field),
            vec![Card::new(Rank::Nine, Suit::Hearts)],
            vec![],
        )
    }

    fn kinds(actions: &[Action]) -> Vec<ActionKind> {
        actions.iter().map(Action::kind).collect()
    }

    #[test]
    fn test_normal_turn_plays() {
        let state = state(vec![Card::new(Rank::Five, Suit::Clubs)], vec![]);

        let actions = state.get_legal_actions();

        assert_eq!(
            kinds(&actions),
            vec![ActionKind::Draw, ActionKind::Points, ActionKind::OneOff]
        );
    }

    #[test]
    fn test_draw_refused_at_hand_limit() {
        let hand = Suit::ALL
            .iter()
            .flat_map(|&s| [Card::new(Rank::King, s), Card::new(Rank::Queen, s)])
            .collect();
        let state = state(hand, vec![]);

        assert!(!kinds(&state.get_legal_actions()).contains(&ActionKind::Draw));
    }

    #[test]
    fn test_two_is_never_a_one_off() {
        let state = state(vec![Card::new(Rank::Two, Suit::Hearts)], vec![]);

        assert!(!kinds(&state.get_legal_actions()).contains(&ActionKind::OneOff));
    }

    #[test]
    fn test_scuttle_ordering() {
        let target = Card::new(Rank::Nine, Suit::Diamonds).played(PlayerId::P1, Purpose::Points);
        let state = state(
            vec![
                Card::new(Rank::Nine, Suit::Clubs),
                Card::new(Rank::Nine, Suit::Spades),
                Card::new(Rank::Ten, Suit::Clubs),
            ],
            vec![target],
        );

        let scuttlers: Vec<CardKey> = state
            .get_legal_actions()
            .iter()
            .filter(|a| a.kind() == ActionKind::Scuttle)
            .filter_map(Action::card)
            .collect();

        assert_eq!(
            scuttlers,
            vec![key(Rank::Nine, Suit::Spades), key(Rank::Ten, Suit::Clubs)]
        );
    }

    #[test]
    fn test_queen_blocks_jacks() {
        let seven = Card::new(Rank::Seven, Suit::Clubs).played(PlayerId::P1, Purpose::Points);
        let queen = Card::new(Rank::Queen, Suit::Clubs).played(PlayerId::P1, Purpose::FaceCard);
        let jack = Card::new(Rank::Jack, Suit::Hearts);

        let open = state(vec![jack.clone()], vec![seven.clone()]);
        assert!(kinds(&open.get_legal_actions()).contains(&ActionKind::Jack));

        let guarded = state(vec![jack], vec![seven, queen]);
        assert!(!kinds(&guarded.get_legal_actions()).contains(&ActionKind::Jack));
    }

    #[test]
    fn test_counter_window() {
        let mut state = state(vec![], vec![]);
        state.pending = PendingEffect::OneOff {
            card: key(Rank::Ace, Suit::Clubs),
            caster: PlayerId::P0,
            source: CardSource::Hand,
            counter: None,
        };
        state.current_action_player = PlayerId::P1;

        let actions = state.get_legal_actions();

        assert_eq!(
            actions,
            vec![
                Action::Counter {
                    player: PlayerId::P1,
                    card: key(Rank::Two, Suit::Spades),
                    target: key(Rank::Ace, Suit::Clubs),
                },
                Action::Resolve {
                    player: PlayerId::P1
                },
            ]
        );
    }

    #[test]
    fn test_three_excludes_itself() {
        let mut state = GameState::new(
            PlayerMap::default(),
            PlayerMap::default(),
            vec![],
            vec![Card::new(Rank::Five, Suit::Hearts), Card::new(Rank::Three, Suit::Clubs)],
        );
        state.pending = PendingEffect::Three {
            player: PlayerId::P0,
            source: key(Rank::Three, Suit::Clubs),
        };

        assert_eq!(
            state.get_legal_actions(),
            vec![Action::TakeFromDiscard {
                player: PlayerId::P0,
                card: key(Rank::Five, Suit::Hearts),
            }]
        );
    }

    #[test]
    fn test_is_legal_checks_player() {
        let state = state(vec![Card::new(Rank::Five, Suit::Clubs)], vec![]);

        assert!(state.is_legal(&Action::Draw { player: PlayerId::P0 }));
        assert!(!state.is_legal(&Action::Draw { player: PlayerId::P1 }));
    }
}
