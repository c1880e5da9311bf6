//! Deck supply manager tests.

mod common;

use bjdeck::deck::{
    acquire_cards, create_discard_pile, create_new_deck, handle_empty_deck, handle_existing_deck,
    handle_insufficient_cards,
};
use bjdeck::{DeckHandle, GameError, GameState, Hand, Phase, Rank, Suit, SupplyError};
use common::{Call, DECK_ID, FakeSupply, card};

fn playing_state(deck_id: Option<&str>, remaining: usize) -> GameState {
    GameState::restore(
        Phase::Playing,
        Hand::from_cards(vec![card(Rank::Ten, Suit::Hearts), card(Rank::Five, Suit::Clubs)]),
        Hand::from_cards(vec![
            card(Rank::Eight, Suit::Diamonds),
            card(Rank::Seven, Suit::Spades),
        ]),
        DeckHandle {
            deck_id: deck_id.map(str::to_owned),
            remaining,
        },
    )
}

#[test]
fn discard_pile_excludes_held_cards() {
    let player = [card(Rank::Ace, Suit::Hearts), card(Rank::King, Suit::Spades)];
    let house = [card(Rank::Queen, Suit::Diamonds), card(Rank::Ten, Suit::Clubs)];

    let pile = create_discard_pile(&player, &house);

    assert_eq!(pile.len(), 48);
    for held in ["AH", "KS", "QD", "0C"] {
        assert!(!pile.iter().any(|code| code == held), "{held} in pile");
    }
}

#[test]
fn discard_pile_of_empty_hands_is_full_deck() {
    let pile = create_discard_pile(&[], &[]);
    assert_eq!(pile.len(), 52);
    assert_eq!(pile.first().map(String::as_str), Some("AH"));
}

#[tokio::test]
async fn no_deck_opens_new_deck() {
    let supply = FakeSupply::new(52);
    let state = GameState::new();

    let acquired = acquire_cards(&supply, &state, 4).await.unwrap();

    assert_eq!(acquired.cards.len(), 4);
    assert_eq!(acquired.deck_id, DECK_ID);
    assert_eq!(acquired.remaining, 48);
    assert_eq!(
        supply.calls(),
        [Call::Draw {
            deck_id: None,
            count: 4
        }]
    );
}

#[tokio::test]
async fn create_new_deck_draws_from_new_sentinel() {
    let supply = FakeSupply::new(52);

    let acquired = create_new_deck(&supply, 4).await.unwrap();

    assert_eq!(acquired.cards.len(), 4);
    assert_eq!(acquired.remaining, 48);
    assert_eq!(supply.draw_sizes(), [4]);
    assert_eq!(supply.shuffle_count(), 0);
}

#[tokio::test]
async fn sufficient_deck_draws_directly() {
    let supply = FakeSupply::new(48);
    let state = playing_state(Some(DECK_ID), 48);

    let acquired = acquire_cards(&supply, &state, 4).await.unwrap();

    assert_eq!(acquired.cards.len(), 4);
    assert_eq!(acquired.remaining, 44);
    assert_eq!(
        supply.calls(),
        [Call::Draw {
            deck_id: Some(DECK_ID.to_owned()),
            count: 4
        }]
    );
}

#[tokio::test]
async fn exactly_enough_cards_draws_directly() {
    let supply = FakeSupply::new(4);
    let state = playing_state(Some(DECK_ID), 4);

    let acquired = handle_existing_deck(&supply, &state, 4).await.unwrap();

    assert_eq!(acquired.cards.len(), 4);
    assert_eq!(acquired.remaining, 0);
    assert_eq!(supply.shuffle_count(), 0);
}

#[tokio::test]
async fn empty_deck_reshuffles_then_draws() {
    let supply = FakeSupply::new(0);
    let state = playing_state(Some(DECK_ID), 0);

    let acquired = acquire_cards(&supply, &state, 4).await.unwrap();

    assert_eq!(acquired.cards.len(), 4);
    assert_eq!(acquired.remaining, 48);
    assert_eq!(
        supply.calls(),
        [
            Call::Shuffle(DECK_ID.to_owned()),
            Call::Draw {
                deck_id: Some(DECK_ID.to_owned()),
                count: 4
            },
        ]
    );
}

#[tokio::test]
async fn handle_empty_deck_uses_given_deck() {
    let supply = FakeSupply::new(0);

    let acquired = handle_empty_deck(&supply, "other-deck", 1).await.unwrap();

    assert_eq!(acquired.cards.len(), 1);
    assert_eq!(acquired.deck_id, "other-deck");
    assert_eq!(supply.calls()[0], Call::Shuffle("other-deck".to_owned()));
}

#[tokio::test]
async fn insufficient_cards_recover_through_discard_pile() {
    let first = card(Rank::Nine, Suit::Hearts);
    let rest = vec![
        card(Rank::Five, Suit::Clubs),
        card(Rank::Eight, Suit::Diamonds),
        card(Rank::Seven, Suit::Spades),
    ];
    let mut queued = vec![first.clone()];
    queued.extend(rest.clone());
    let supply = FakeSupply::new(1)
        .with_cards(queued)
        .with_after_shuffle(51);
    let state = playing_state(Some(DECK_ID), 1);

    let acquired = acquire_cards(&supply, &state, 4).await.unwrap();

    assert_eq!(supply.draw_sizes(), [1, 3]);
    assert_eq!(supply.returned().len(), 1);
    assert_eq!(supply.shuffle_count(), 1);
    assert_eq!(acquired.cards.len(), 4);
    assert_eq!(acquired.cards[0], first);
    assert_eq!(acquired.cards[1..], rest[..]);
    assert_eq!(acquired.remaining, 48);
    assert_eq!(acquired.deck_id, DECK_ID);
}

#[tokio::test]
async fn insufficient_cards_return_before_shuffle() {
    let supply = FakeSupply::new(2);
    let state = playing_state(Some(DECK_ID), 2);

    handle_insufficient_cards(&supply, &state, 4).await.unwrap();

    let calls = supply.calls();
    assert_eq!(calls.len(), 4);
    assert!(matches!(calls[0], Call::Draw { count: 2, .. }));
    assert!(matches!(calls[1], Call::Return { .. }));
    assert_eq!(calls[2], Call::Shuffle(DECK_ID.to_owned()));
    assert!(matches!(calls[3], Call::Draw { count: 2, .. }));

    let returned = &supply.returned()[0];
    assert_eq!(returned.len(), 48);
    for held in ["0H", "5C", "8D", "7S"] {
        assert!(!returned.iter().any(|code| code == held));
    }
}

#[tokio::test]
async fn every_branch_returns_requested_count() {
    for (deck_id, remaining) in [
        (None, 52),
        (Some(DECK_ID), 0),
        (Some(DECK_ID), 1),
        (Some(DECK_ID), 3),
        (Some(DECK_ID), 30),
    ] {
        for count in 1..=4 {
            let supply = FakeSupply::new(remaining);
            let state = playing_state(deck_id, remaining);
            let acquired = acquire_cards(&supply, &state, count).await.unwrap();
            assert_eq!(
                acquired.cards.len(),
                count,
                "deck {deck_id:?}, remaining {remaining}, count {count}"
            );
        }
    }
}

#[tokio::test]
async fn existing_deck_paths_require_deck_id() {
    let supply = FakeSupply::new(52);
    let state = playing_state(None, 1);

    assert_eq!(
        handle_existing_deck(&supply, &state, 4).await.unwrap_err(),
        GameError::DeckUninitialized
    );
    assert_eq!(
        handle_insufficient_cards(&supply, &state, 4).await.unwrap_err(),
        GameError::DeckUninitialized
    );
    assert!(supply.calls().is_empty());
}

#[tokio::test]
async fn draw_failure_is_propagated() {
    let supply = FakeSupply::new(48).failing_draw(0);
    let state = playing_state(Some(DECK_ID), 48);

    let err = acquire_cards(&supply, &state, 1).await.unwrap_err();

    assert_eq!(
        err,
        GameError::Supply(SupplyError::Status {
            operation: "draw",
            status: 500
        })
    );
}

#[tokio::test]
async fn recovery_failure_after_first_draw_fails_whole_call() {
    let supply = FakeSupply::new(1).failing_draw(1);
    let state = playing_state(Some(DECK_ID), 1);

    let err = acquire_cards(&supply, &state, 4).await.unwrap_err();

    assert!(matches!(err, GameError::Supply(SupplyError::Status { .. })));
    assert_eq!(supply.draw_sizes(), [1, 3]);
}

#[tokio::test]
async fn return_and_shuffle_failures_are_propagated() {
    let state = playing_state(Some(DECK_ID), 1);

    let supply = FakeSupply::new(1).failing_return();
    let err = acquire_cards(&supply, &state, 4).await.unwrap_err();
    assert_eq!(
        err,
        GameError::Supply(SupplyError::Unsuccessful { operation: "return" })
    );
    assert_eq!(supply.shuffle_count(), 0);

    let supply = FakeSupply::new(0).failing_shuffle();
    let state = playing_state(Some(DECK_ID), 0);
    let err = acquire_cards(&supply, &state, 4).await.unwrap_err();
    assert_eq!(
        err,
        GameError::Supply(SupplyError::Unsuccessful {
            operation: "shuffle"
        })
    );
    assert!(supply.draw_sizes().is_empty());
}

#[tokio::test]
async fn short_draw_is_an_error() {
    let supply = FakeSupply::new(48).short_draws();
    let state = playing_state(Some(DECK_ID), 48);

    let err = acquire_cards(&supply, &state, 4).await.unwrap_err();

    assert_eq!(
        err,
        GameError::Supply(SupplyError::ShortDraw {
            requested: 4,
            received: 3
        })
    );
}
