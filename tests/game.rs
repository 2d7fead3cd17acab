//! Game state transition tests.

use bjstate::{
    ActionError, Card, DECK_SIZE, DealError, Deck, GameOptions, GameState, Outcome, Phase, Suit,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

fn state_from_draws(draws: &[Card]) -> GameState {
    GameState::with_deck(Deck::from_cards(draws.to_vec()))
}

#[test]
fn new_state_has_no_current_hand() {
    let state = GameState::new();
    assert_eq!(state.phase(), Phase::HandOver);
    assert_eq!(state.cards_remaining(), 0);
    assert_eq!(state.current_hand().unwrap_err(), ActionError::NoCurrentHand);
}

#[test]
fn shuffle_builds_three_deck_shoe() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let state = GameState::new().shuffle(3, &mut rng);
    assert_eq!(state.cards_remaining(), 3 * DECK_SIZE);

    let aces = state.deck().iter().filter(|c| c.is_ace()).count();
    assert_eq!(aces, 12);
}

#[test]
fn shuffle_keeps_hands_and_phase() {
    let state = state_from_draws(&[
        card(Suit::Hearts, 9),
        card(Suit::Clubs, 5),
        card(Suit::Diamonds, 7),
        card(Suit::Spades, 10),
    ])
    .deal()
    .unwrap();

    let mut rng = ChaCha8Rng::seed_from_u64(2);
    let shuffled = state.shuffle(1, &mut rng);
    assert_eq!(shuffled.phase(), Phase::PlayerTurn);
    assert_eq!(shuffled.player(), state.player());
    assert_eq!(shuffled.dealer(), state.dealer());
    assert_eq!(shuffled.cards_remaining(), DECK_SIZE);
}

#[test]
fn deal_alternates_player_and_dealer() {
    let state = state_from_draws(&[
        card(Suit::Hearts, 8),   // player
        card(Suit::Clubs, 6),    // dealer up
        card(Suit::Diamonds, 7), // player
        card(Suit::Spades, 10),  // dealer hole
        card(Suit::Hearts, 4),
    ])
    .deal()
    .unwrap();

    assert_eq!(state.phase(), Phase::PlayerTurn);
    assert_eq!(
        state.player().cards(),
        &[card(Suit::Hearts, 8), card(Suit::Diamonds, 7)]
    );
    assert_eq!(
        state.dealer().cards(),
        &[card(Suit::Clubs, 6), card(Suit::Spades, 10)]
    );
    assert_eq!(state.cards_remaining(), 1);
    assert_eq!(state.deck().peek(), Some(&card(Suit::Hearts, 4)));
}

#[test]
fn deal_resets_phase_and_hands_from_any_phase() {
    let state = state_from_draws(&[
        card(Suit::Hearts, 2),
        card(Suit::Clubs, 3),
        card(Suit::Diamonds, 4),
        card(Suit::Spades, 5),
        card(Suit::Hearts, 6),
        card(Suit::Clubs, 7),
        card(Suit::Diamonds, 8),
        card(Suit::Spades, 9),
        card(Suit::Hearts, 10),
    ])
    .deal()
    .unwrap();

    let dealer_turn = state.stand().unwrap();
    assert_eq!(dealer_turn.phase(), Phase::DealerTurn);

    let redealt = dealer_turn.deal().unwrap();
    assert_eq!(redealt.phase(), Phase::PlayerTurn);
    assert_eq!(redealt.player().len(), 2);
    assert_eq!(redealt.dealer().len(), 2);

    let after_hand = dealer_turn.stand().unwrap().hit().unwrap_err();
    assert_eq!(after_hand, ActionError::NoCurrentHand);

    let redealt = dealer_turn.stand().unwrap().deal().unwrap();
    assert_eq!(redealt.phase(), Phase::PlayerTurn);
    assert_eq!(redealt.player().cards()[0], card(Suit::Hearts, 6));
    assert_eq!(redealt.dealer().cards()[1], card(Suit::Spades, 9));
}

#[test]
fn deal_rejects_short_deck() {
    let state = state_from_draws(&[
        card(Suit::Hearts, 9),
        card(Suit::Clubs, 5),
        card(Suit::Diamonds, 7),
    ]);
    assert_eq!(state.deal().unwrap_err(), DealError::NotEnoughCards);
    assert_eq!(state.cards_remaining(), 3);
}

#[test]
fn hit_without_bust_keeps_phase() {
    let state = state_from_draws(&[
        card(Suit::Hearts, 5),
        card(Suit::Clubs, 9),
        card(Suit::Spades, 6),
        card(Suit::Diamonds, 7),
        card(Suit::Hearts, 4), // player hit
    ])
    .deal()
    .unwrap();

    let state = state.hit().unwrap();
    assert_eq!(state.phase(), Phase::PlayerTurn);
    assert_eq!(state.player().len(), 3);
    assert_eq!(state.player().score(), 15);
    assert_eq!(state.cards_remaining(), 0);
}

#[test]
fn hit_to_bust_ends_the_turn() {
    let state = state_from_draws(&[
        card(Suit::Hearts, 10),
        card(Suit::Clubs, 9),
        card(Suit::Spades, 13),
        card(Suit::Diamonds, 7),
        card(Suit::Hearts, 5), // player busts
        card(Suit::Clubs, 12), // dealer busts
    ])
    .deal()
    .unwrap();

    let state = state.hit().unwrap();
    assert_eq!(state.player().score(), 25);
    assert_eq!(state.phase(), Phase::DealerTurn);

    let state = state.hit().unwrap();
    assert_eq!(state.dealer().score(), 26);
    assert_eq!(state.phase(), Phase::HandOver);
}

#[test]
fn hit_goes_to_dealer_during_dealer_turn() {
    let state = state_from_draws(&[
        card(Suit::Hearts, 10),
        card(Suit::Clubs, 2),
        card(Suit::Spades, 8),
        card(Suit::Diamonds, 3),
        card(Suit::Hearts, 4),
    ])
    .deal()
    .unwrap()
    .stand()
    .unwrap();

    let state = state.hit().unwrap();
    assert_eq!(state.player().len(), 2);
    assert_eq!(state.dealer().len(), 3);
    assert_eq!(state.dealer().score(), 9);
    assert_eq!(state.phase(), Phase::DealerTurn);
}

#[test]
fn hit_with_empty_deck_returns_error() {
    let state = state_from_draws(&[
        card(Suit::Hearts, 5),
        card(Suit::Clubs, 9),
        card(Suit::Spades, 6),
        card(Suit::Diamonds, 7),
    ])
    .deal()
    .unwrap();

    assert_eq!(state.hit().unwrap_err(), ActionError::NoCards);
}

#[test]
fn stand_advances_one_step_then_rejects() {
    let state = state_from_draws(&[
        card(Suit::Hearts, 5),
        card(Suit::Clubs, 9),
        card(Suit::Spades, 6),
        card(Suit::Diamonds, 7),
    ])
    .deal()
    .unwrap();

    let state = state.stand().unwrap();
    assert_eq!(state.phase(), Phase::DealerTurn);
    let state = state.stand().unwrap();
    assert_eq!(state.phase(), Phase::HandOver);
    assert_eq!(state.stand().unwrap_err(), ActionError::NoCurrentHand);
    assert_eq!(state.hit().unwrap_err(), ActionError::NoCurrentHand);
}

#[test]
fn transitions_leave_input_untouched() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let empty = GameState::new();
    let shuffled = empty.shuffle(3, &mut rng);
    assert_eq!(empty, GameState::new());

    let before = shuffled.clone();
    let dealt = shuffled.deal().unwrap();
    assert_eq!(shuffled, before);

    let before = dealt.clone();
    let _ = dealt.hit().unwrap();
    let _ = dealt.stand().unwrap();
    let _ = dealt.end_game();
    assert_eq!(dealt, before);
    assert_eq!(dealt.player().len(), 2);
    assert_eq!(dealt.cards_remaining(), 3 * DECK_SIZE - 4);

    let dealer_turn = dealt.stand().unwrap();
    let before = dealer_turn.clone();
    let _ = dealer_turn.dealer_play(&GameOptions::default()).unwrap();
    assert_eq!(dealer_turn, before);
}

#[test]
fn dealer_hits_soft_17() {
    let state = state_from_draws(&[
        card(Suit::Hearts, 10),
        card(Suit::Clubs, 1),  // dealer up
        card(Suit::Spades, 9),
        card(Suit::Diamonds, 6), // dealer hole, soft 17
        card(Suit::Hearts, 2), // dealer draw
    ])
    .deal()
    .unwrap()
    .stand()
    .unwrap();

    let played = state.dealer_play(&GameOptions::default()).unwrap();
    assert_eq!(played.phase(), Phase::HandOver);
    assert_eq!(played.dealer().len(), 3);
    assert_eq!(played.dealer().score(), 19);
}

#[test]
fn dealer_stands_on_soft_17_when_configured() {
    let state = state_from_draws(&[
        card(Suit::Hearts, 10),
        card(Suit::Clubs, 1),
        card(Suit::Spades, 9),
        card(Suit::Diamonds, 6),
        card(Suit::Hearts, 2),
    ])
    .deal()
    .unwrap()
    .stand()
    .unwrap();

    let options = GameOptions::default().with_stand_on_soft_17(true);
    let played = state.dealer_play(&options).unwrap();
    assert_eq!(played.dealer().len(), 2);
    assert_eq!(played.dealer().score(), 17);
    assert_eq!(played.cards_remaining(), 1);
}

#[test]
fn dealer_draws_until_hard_17() {
    let state = state_from_draws(&[
        card(Suit::Hearts, 10),
        card(Suit::Clubs, 5),
        card(Suit::Spades, 9),
        card(Suit::Diamonds, 4),
        card(Suit::Hearts, 3),  // 12
        card(Suit::Clubs, 2),   // 14
        card(Suit::Spades, 3),  // 17
        card(Suit::Diamonds, 9),
    ])
    .deal()
    .unwrap()
    .stand()
    .unwrap();

    let played = state.dealer_play(&GameOptions::default()).unwrap();
    assert_eq!(played.dealer().score(), 17);
    assert_eq!(played.dealer().len(), 5);
    assert_eq!(played.cards_remaining(), 1);
}

#[test]
fn dealer_play_rejects_player_turn() {
    let state = state_from_draws(&[
        card(Suit::Hearts, 10),
        card(Suit::Clubs, 5),
        card(Suit::Spades, 9),
        card(Suit::Diamonds, 4),
    ])
    .deal()
    .unwrap();

    assert_eq!(
        state.dealer_play(&GameOptions::default()).unwrap_err(),
        ActionError::NotDealerTurn
    );
}

#[test]
fn dealer_play_reports_empty_deck() {
    let state = state_from_draws(&[
        card(Suit::Hearts, 10),
        card(Suit::Clubs, 5),
        card(Suit::Spades, 9),
        card(Suit::Diamonds, 4),
    ])
    .deal()
    .unwrap()
    .stand()
    .unwrap();

    assert_eq!(
        state.dealer_play(&GameOptions::default()).unwrap_err(),
        ActionError::NoCards
    );
}

#[test]
fn player_bust_loses_even_when_dealer_busts() {
    let state = state_from_draws(&[
        card(Suit::Hearts, 10),
        card(Suit::Clubs, 10),
        card(Suit::Spades, 6),
        card(Suit::Diamonds, 6),
        card(Suit::Hearts, 9),  // player 25
        card(Suit::Clubs, 13),  // dealer 26
    ])
    .deal()
    .unwrap()
    .hit()
    .unwrap();

    let played = state.dealer_play(&GameOptions::default()).unwrap();
    let (_, result) = played.end_game();
    assert_eq!(result.player_score, 25);
    assert_eq!(result.dealer_score, 26);
    assert_eq!(result.outcome, Outcome::PlayerBust);
}

#[test]
fn end_game_reports_and_clears_hands() {
    let state = state_from_draws(&[
        card(Suit::Hearts, 10),
        card(Suit::Clubs, 10),
        card(Suit::Spades, 1),
        card(Suit::Diamonds, 8),
        card(Suit::Hearts, 2),
    ])
    .deal()
    .unwrap()
    .stand()
    .unwrap()
    .dealer_play(&GameOptions::default())
    .unwrap();

    let (next, result) = state.end_game();
    assert_eq!(result.player_score, 21);
    assert_eq!(result.dealer_score, 18);
    assert_eq!(result.outcome, Outcome::PlayerWins);
    assert_eq!(result.player.len(), 2);
    assert_eq!(result.dealer.len(), 2);

    assert!(next.player().is_empty());
    assert!(next.dealer().is_empty());
    assert_eq!(next.phase(), Phase::HandOver);
    assert_eq!(next.cards_remaining(), 1);
}
