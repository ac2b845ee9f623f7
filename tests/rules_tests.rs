//! Normal-turn rules integration tests.
//!
//! Draws, point plays, scuttles, face cards, Jack steals and the win check.

use cuttle::cards::{Card, CardKey, Purpose, Rank, Suit};
use cuttle::core::{Action, ActionKind, GameState, PlayerId, PlayerMap, RulesError, TurnOutcome};

const P0: PlayerId = PlayerId::P0;
const P1: PlayerId = PlayerId::P1;

fn key(rank: Rank, suit: Suit) -> CardKey {
    CardKey::new(rank, suit)
}

fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

fn points(rank: Rank, suit: Suit, owner: PlayerId) -> Card {
    card(rank, suit).played(owner, Purpose::Points)
}

fn face(rank: Rank, suit: Suit, owner: PlayerId) -> Card {
    card(rank, suit).played(owner, Purpose::FaceCard)
}

fn game(hands: [Vec<Card>; 2], fields: [Vec<Card>; 2], deck: Vec<Card>) -> GameState {
    let [h0, h1] = hands;
    let [f0, f1] = fields;
    GameState::new(PlayerMap::from_pair(h0, h1), PlayerMap::from_pair(f0, f1), deck, vec![])
}

fn small_deck() -> Vec<Card> {
    vec![card(Rank::Four, Suit::Clubs), card(Rank::Nine, Suit::Diamonds)]
}

// =============================================================================
// Draw
// =============================================================================

/// Test that drawing takes the top card and ends the turn.
#[test]
fn test_draw_takes_top_card() {
    let mut state = game([vec![], vec![]], [vec![], vec![]], small_deck());

    let outcome = state.update_state(Action::Draw { player: P0 }).unwrap();

    assert_eq!(outcome, TurnOutcome::finished(None));
    assert_eq!(state.get_player_hand(P0)[0].key, key(Rank::Nine, Suit::Diamonds));
    assert_eq!(state.zones().deck().len(), 1);
}

/// Test that Draw is not offered at the hand limit and is rejected if forced.
#[test]
fn test_draw_capped_at_eight() {
    let hand: Vec<Card> = Rank::ALL[4..12].iter().map(|&r| card(r, Suit::Spades)).collect();
    let mut state = game([hand, vec![]], [vec![], vec![]], small_deck());

    let kinds: Vec<ActionKind> = state.get_legal_actions().iter().map(Action::kind).collect();
    assert!(!kinds.contains(&ActionKind::Draw));

    let err = state.update_state(Action::Draw { player: P0 }).unwrap_err();
    assert!(matches!(err, RulesError::HandFull { player, limit: 8 } if player == P0));
}

/// Test that only the current action player may act.
#[test]
fn test_wrong_player_rejected() {
    let mut state = game([vec![], vec![]], [vec![], vec![]], small_deck());

    let err = state.update_state(Action::Draw { player: P1 }).unwrap_err();

    assert!(matches!(err, RulesError::IllegalAction { .. }));
    assert_eq!(state.zones().deck().len(), 2);
}

// =============================================================================
// Points and Scuttle
// =============================================================================

/// Test that a points play raises the score by exactly the card's value.
#[test]
fn test_points_raise_score() {
    let mut state = game(
        [vec![card(Rank::Six, Suit::Hearts)], vec![]],
        [vec![points(Rank::Three, Suit::Clubs, P0)], vec![]],
        small_deck(),
    );
    let before = state.get_player_score(P0);

    state
        .update_state(Action::Points {
            player: P0,
            card: key(Rank::Six, Suit::Hearts),
        })
        .unwrap();

    assert_eq!(state.get_player_score(P0), before + 6);
    let played = &state.get_player_field(P0)[1];
    assert_eq!(played.owner, Some(P0));
    assert_eq!(played.purpose, Some(Purpose::Points));
}

/// Test that a scuttle sends both cards to the discard pile, cleared.
#[test]
fn test_scuttle_discards_both() {
    let mut state = game(
        [vec![card(Rank::Nine, Suit::Spades)], vec![]],
        [vec![], vec![points(Rank::Nine, Suit::Hearts, P1)]],
        small_deck(),
    );

    let outcome = state
        .update_state(Action::Scuttle {
            player: P0,
            card: key(Rank::Nine, Suit::Spades),
            target: key(Rank::Nine, Suit::Hearts),
        })
        .unwrap();

    assert!(outcome.turn_finished);
    assert!(state.get_player_field(P1).is_empty());
    assert_eq!(state.get_player_score(P1), 0);
    let discard = state.zones().discard();
    assert_eq!(discard.len(), 2);
    assert!(discard.iter().all(|c| c.owner.is_none() && c.purpose.is_none()));
}

/// Test that a lower suit of the same rank cannot scuttle.
#[test]
fn test_scuttle_needs_higher_suit() {
    let mut state = game(
        [vec![card(Rank::Nine, Suit::Clubs)], vec![]],
        [vec![], vec![points(Rank::Nine, Suit::Hearts, P1)]],
        small_deck(),
    );

    let err = state
        .update_state(Action::Scuttle {
            player: P0,
            card: key(Rank::Nine, Suit::Clubs),
            target: key(Rank::Nine, Suit::Hearts),
        })
        .unwrap_err();

    assert!(matches!(err, RulesError::IllegalAction { .. }));
}

/// Test that scuttling a stolen card also discards its Jack.
#[test]
fn test_scuttle_stolen_card_releases_jack() {
    let mut stolen = points(Rank::Five, Suit::Hearts, P0);
    stolen.attachments.push(face(Rank::Jack, Suit::Spades, P1));
    let mut state = game(
        [vec![card(Rank::Six, Suit::Clubs)], vec![]],
        [vec![stolen], vec![]],
        small_deck(),
    );
    assert_eq!(state.get_player_score(P1), 5);

    state
        .update_state(Action::Scuttle {
            player: P0,
            card: key(Rank::Six, Suit::Clubs),
            target: key(Rank::Five, Suit::Hearts),
        })
        .unwrap();

    assert_eq!(state.get_player_score(P1), 0);
    assert!(state.get_player_field(P0).is_empty());
    assert_eq!(state.zones().discard().len(), 3);
}

// =============================================================================
// Face Cards
// =============================================================================

/// Test that the target follows the number of Kings.
#[test]
fn test_kings_lower_target() {
    let mut state = game(
        [vec![card(Rank::King, Suit::Hearts)], vec![]],
        [vec![face(Rank::King, Suit::Clubs, P0)], vec![]],
        small_deck(),
    );
    assert_eq!(state.get_player_target(P0), 14);

    state
        .update_state(Action::FaceCard {
            player: P0,
            card: key(Rank::King, Suit::Hearts),
        })
        .unwrap();

    assert_eq!(state.get_player_target(P0), 10);
    assert_eq!(state.get_player_target(P1), 21);
}

/// Test that two Kings and ten points win.
#[test]
fn test_two_kings_ten_points_wins() {
    let mut state = game(
        [vec![card(Rank::Ten, Suit::Diamonds)], vec![]],
        [
            vec![face(Rank::King, Suit::Clubs, P0), face(Rank::King, Suit::Spades, P0)],
            vec![],
        ],
        small_deck(),
    );

    let outcome = state
        .update_state(Action::Points {
            player: P0,
            card: key(Rank::Ten, Suit::Diamonds),
        })
        .unwrap();

    assert_eq!(outcome, TurnOutcome::finished(Some(P0)));
    assert_eq!(state.winner(), Some(P0));
}

/// Test that an Eight may be played either way and only scores as points.
#[test]
fn test_eight_dual_purpose() {
    let eight = key(Rank::Eight, Suit::Hearts);
    let state = game(
        [vec![card(Rank::Eight, Suit::Hearts)], vec![]],
        [vec![], vec![]],
        small_deck(),
    );

    let legal = state.get_legal_actions();
    assert!(legal.contains(&Action::Points { player: P0, card: eight }));
    assert!(legal.contains(&Action::FaceCard { player: P0, card: eight }));

    let mut glasses = state.clone();
    glasses
        .update_state(Action::FaceCard { player: P0, card: eight })
        .unwrap();
    assert_eq!(glasses.get_player_score(P0), 0);
    assert!(glasses.is_hand_revealed(P1));

    let mut scored = state;
    scored.update_state(Action::Points { player: P0, card: eight }).unwrap();
    assert_eq!(scored.get_player_score(P0), 8);
    assert!(!scored.is_hand_revealed(P1));
}

// =============================================================================
// Jacks
// =============================================================================

/// Test that a Jack steals a point card without moving it.
#[test]
fn test_jack_steals_in_place() {
    let seven = key(Rank::Seven, Suit::Clubs);
    let mut state = game(
        [vec![card(Rank::Jack, Suit::Diamonds)], vec![]],
        [vec![], vec![points(Rank::Seven, Suit::Clubs, P1)]],
        small_deck(),
    );

    state
        .update_state(Action::Jack {
            player: P0,
            card: key(Rank::Jack, Suit::Diamonds),
            target: seven,
        })
        .unwrap();

    assert_eq!(state.get_player_score(P0), 7);
    assert_eq!(state.get_player_score(P1), 0);
    let field = state.get_player_field(P1);
    assert_eq!(field.len(), 1);
    assert_eq!(field[0].key, seven);
    assert_eq!(field[0].attachments.len(), 1);
    assert_eq!(field[0].controller(), Some(P0));
    assert!(state.get_player_field(P0).is_empty());
}

/// Test that Jacks stack and control follows the topmost one.
#[test]
fn test_jacks_stack() {
    let seven = key(Rank::Seven, Suit::Clubs);
    let mut state = game(
        [
            vec![card(Rank::Jack, Suit::Diamonds)],
            vec![card(Rank::Jack, Suit::Hearts)],
        ],
        [vec![], vec![points(Rank::Seven, Suit::Clubs, P1)]],
        small_deck(),
    );

    state
        .update_state(Action::Jack {
            player: P0,
            card: key(Rank::Jack, Suit::Diamonds),
            target: seven,
        })
        .unwrap();
    state.next_turn().unwrap();

    // P1 now sees their own card as an opponent-controlled target
    let steal_back = Action::Jack {
        player: P1,
        card: key(Rank::Jack, Suit::Hearts),
        target: seven,
    };
    assert!(state.get_legal_actions().contains(&steal_back));
    state.update_state(steal_back).unwrap();

    assert_eq!(state.get_player_score(P1), 7);
    assert_eq!(state.get_player_field(P1)[0].attachments.len(), 2);
}

/// Test that a Queen shields her controller's point cards from Jacks.
#[test]
fn test_queen_blocks_jack() {
    let mut state = game(
        [vec![card(Rank::Jack, Suit::Diamonds)], vec![]],
        [
            vec![],
            vec![points(Rank::Seven, Suit::Clubs, P1), face(Rank::Queen, Suit::Spades, P1)],
        ],
        small_deck(),
    );

    let err = state
        .update_state(Action::Jack {
            player: P0,
            card: key(Rank::Jack, Suit::Diamonds),
            target: key(Rank::Seven, Suit::Clubs),
        })
        .unwrap_err();

    assert!(matches!(err, RulesError::IllegalAction { .. }));
    assert_eq!(state.get_player_score(P1), 7);
}

/// Test that a Queen does not shield a card stolen from the other field.
#[test]
fn test_queen_shields_only_her_field() {
    let nine = key(Rank::Nine, Suit::Clubs);
    let mut stolen = points(Rank::Nine, Suit::Clubs, P0);
    stolen.attachments.push(face(Rank::Jack, Suit::Diamonds, P1));
    let mut state = game(
        [vec![card(Rank::Jack, Suit::Spades)], vec![]],
        [
            vec![stolen],
            vec![points(Rank::Four, Suit::Hearts, P1), face(Rank::Queen, Suit::Hearts, P1)],
        ],
        small_deck(),
    );
    assert_eq!(state.get_player_score(P1), 13);

    let jacks: Vec<Action> = state
        .get_legal_actions()
        .into_iter()
        .filter(|a| a.kind() == ActionKind::Jack)
        .collect();
    let take_back = Action::Jack {
        player: P0,
        card: key(Rank::Jack, Suit::Spades),
        target: nine,
    };
    assert_eq!(jacks, vec![take_back]);

    state.update_state(take_back).unwrap();

    assert_eq!(state.get_player_score(P0), 9);
    assert_eq!(state.get_player_score(P1), 4);
}

// =============================================================================
// Turn Flow
// =============================================================================

/// Test that turns alternate and history records each action.
#[test]
fn test_turn_cycle_and_history() {
    let mut state = game([vec![], vec![]], [vec![], vec![]], small_deck());

    state.update_state(Action::Draw { player: P0 }).unwrap();
    state.next_turn().unwrap();
    state.update_state(Action::Draw { player: P1 }).unwrap();
    state.next_turn().unwrap();

    assert_eq!(state.turn(), P0);
    assert_eq!(state.turn_number(), 3);
    let history: Vec<_> = state.history().iter().map(|r| (r.player, r.turn, r.sequence)).collect();
    assert_eq!(history, vec![(P0, 1, 0), (P1, 2, 1)]);
    assert!(state.is_stalemate());
}
