//! Tests for the Memory Match state machine.

use std::collections::HashMap;

use senipy_games::{
    CardId, FlipError, FlipOutcome, MATCH_POINTS, MemoryEvent, MemoryMatch, MemoryPhase,
    PairResolution, RESOLVE_DELAY, SYMBOLS, Scheduled,
};

/// Groups card ids by symbol.
fn pairs(game: &MemoryMatch) -> HashMap<String, Vec<CardId>> {
    let mut by_symbol: HashMap<String, Vec<CardId>> = HashMap::new();
    for card in game.cards() {
        by_symbol
            .entry(card.symbol().to_string())
            .or_default()
            .push(card.id());
    }
    by_symbol
}

/// Finds two cards with different symbols.
fn mismatched_pair(game: &MemoryMatch) -> (CardId, CardId) {
    let first = &game.cards()[0];
    let second = game
        .cards()
        .iter()
        .find(|c| c.symbol() != first.symbol())
        .expect("Deck has more than one symbol");
    (first.id(), second.id())
}

#[test]
fn test_every_symbol_appears_exactly_twice() {
    for seed in 0..50 {
        let game = MemoryMatch::with_seed(seed);
        assert_eq!(game.cards().len(), 16);
        let by_symbol = pairs(&game);
        assert_eq!(by_symbol.len(), SYMBOLS.len());
        assert!(by_symbol.values().all(|ids| ids.len() == 2), "seed {seed}");
    }
}

#[test]
fn test_second_flip_requests_resolution() {
    let mut game = MemoryMatch::with_seed(1);
    let (a, b) = mismatched_pair(&game);

    assert_eq!(game.flip(a), Ok(FlipOutcome::Revealed));
    assert_eq!(game.phase(), MemoryPhase::OneFaceUp);

    let outcome = game.flip(b).expect("Second flip accepted");
    let FlipOutcome::PairPending(deferred) = outcome else {
        panic!("Expected a pending pair, got {outcome:?}");
    };
    assert_eq!(*deferred.event(), MemoryEvent::ResolvePair);
    assert_eq!(*deferred.delay(), RESOLVE_DELAY);
    assert_eq!(game.phase(), MemoryPhase::PairPending);
}

#[test]
fn test_mismatch_flips_both_cards_back() {
    let mut game = MemoryMatch::with_seed(2);
    let (a, b) = mismatched_pair(&game);
    game.flip(a).expect("Flip a");
    game.flip(b).expect("Flip b");

    assert_eq!(game.resolve(), Some(PairResolution::Mismatched));
    assert!(!game.card(a).expect("Card a").is_face_visible());
    assert!(!game.card(b).expect("Card b").is_face_visible());
    assert_eq!(game.moves(), 1);
    assert_eq!(game.score(), 0);
    assert_eq!(game.phase(), MemoryPhase::Idle);
}

#[test]
fn test_third_flip_rejected_while_pair_pending() {
    let mut game = MemoryMatch::with_seed(3);
    let ids: Vec<CardId> = game.cards().iter().map(|c| c.id()).collect();
    game.flip(ids[0]).expect("Flip first");
    game.flip(ids[1]).expect("Flip second");

    assert_eq!(game.flip(ids[2]), Err(FlipError::PairPending));
    assert_eq!(game.face_up().len(), 2);
}

#[test]
fn test_same_card_cannot_be_flipped_twice() {
    let mut game = MemoryMatch::with_seed(4);
    let id = game.cards()[5].id();
    game.flip(id).expect("First flip");
    assert_eq!(game.flip(id), Err(FlipError::AlreadyFaceUp(id)));
    assert_eq!(game.flip(999), Err(FlipError::UnknownCard(999)));
}

#[test]
fn test_moves_increment_once_per_resolution() {
    let mut game = MemoryMatch::with_seed(5);
    let (a, b) = mismatched_pair(&game);
    game.flip(a).expect("Flip a");

    // One card face-up: nothing to resolve.
    assert_eq!(game.resolve(), None);
    assert_eq!(game.moves(), 0);

    game.flip(b).expect("Flip b");
    game.resolve();
    assert_eq!(game.resolve(), None);
    assert_eq!(game.moves(), 1);
}

#[test]
fn test_full_game_reaches_completion() {
    let mut game = MemoryMatch::with_seed(6);
    let by_symbol = pairs(&game);

    for ids in by_symbol.values() {
        assert!(!game.is_complete());
        game.flip(ids[0]).expect("Flip first of pair");
        game.flip(ids[1]).expect("Flip second of pair");
        game.fire(MemoryEvent::ResolvePair);
        assert!(game.card(ids[0]).expect("Card").is_matched());
    }

    assert!(game.is_complete());
    assert_eq!(game.phase(), MemoryPhase::Complete);
    assert_eq!(game.score(), MATCH_POINTS * SYMBOLS.len() as u32);
    assert_eq!(game.moves(), SYMBOLS.len() as u32);

    let any = game.cards()[0].id();
    assert_eq!(game.flip(any), Err(FlipError::GameComplete));
}

#[test]
fn test_matched_card_rejected() {
    let mut game = MemoryMatch::with_seed(7);
    let by_symbol = pairs(&game);
    let ids = by_symbol.values().next().expect("At least one pair");
    game.flip(ids[0]).expect("Flip");
    game.flip(ids[1]).expect("Flip");
    assert_eq!(
        game.resolve(),
        Some(PairResolution::Matched {
            points: MATCH_POINTS
        })
    );
    assert_eq!(game.flip(ids[0]), Err(FlipError::AlreadyMatched(ids[0])));
}

#[test]
fn test_new_game_resets_progress() {
    let mut game = MemoryMatch::with_seed(8);
    let by_symbol = pairs(&game);
    let ids = by_symbol.values().next().expect("At least one pair");
    game.flip(ids[0]).expect("Flip");
    game.flip(ids[1]).expect("Flip");
    game.resolve();
    assert_eq!(game.score(), MATCH_POINTS);

    game.new_game();
    assert_eq!(game.score(), 0);
    assert_eq!(game.moves(), 0);
    assert!(game.cards().iter().all(|c| !c.is_face_visible()));
}
