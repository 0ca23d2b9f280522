//! Tests for the free-text games: Word Puzzle and Brain Teasers.

use senipy_games::{
    BrainTeasers, Feedback, HINT_BONUS, MAX_ATTEMPTS, MAX_HINTS, RoundStatus, WordPuzzle,
};

// ─────────────────────────────────────────────────────────────
//  Word Puzzle
// ─────────────────────────────────────────────────────────────

#[test]
fn test_exact_word_any_case_solves_first_try() {
    for seed in 0..8 {
        let mut game = WordPuzzle::with_seed(seed);
        let word = game.puzzle().word.to_lowercase();

        let feedback = game.submit_answer(&format!("  {word} ")).expect("Round open");
        assert_eq!(feedback, Feedback::Earned { points: 10 });
        assert_eq!(game.status(), RoundStatus::Solved);
        assert_eq!(game.attempts(), 1);
    }
}

#[test]
fn test_padded_answer_is_trimmed_before_length_cap() {
    let mut game = WordPuzzle::with_seed(0);
    let word = game.puzzle().word.to_string();

    game.set_input(&format!("    {word}   "));
    assert_eq!(game.input(), word);

    game.set_input(&format!("{word}xyz"));
    assert_eq!(game.input().chars().count(), word.chars().count());
}

#[test]
fn test_wrong_answers_reveal_after_three_attempts() {
    let mut game = WordPuzzle::with_seed(11);

    assert_eq!(
        game.submit_answer("zzz"),
        Some(Feedback::TryAgain { remaining: 2 })
    );
    assert_eq!(
        game.submit_answer("yyy"),
        Some(Feedback::TryAgain { remaining: 1 })
    );
    let word = game.puzzle().word.to_string();
    assert_eq!(
        game.submit_answer("xxx"),
        Some(Feedback::AnswerRevealed { answer: word })
    );
    assert_eq!(game.status(), RoundStatus::Revealed);
    assert_eq!(game.attempts(), MAX_ATTEMPTS);
    assert_eq!(game.submit_answer("anything"), None);
}

#[test]
fn test_blank_answer_costs_nothing() {
    let mut game = WordPuzzle::with_seed(12);
    assert_eq!(game.submit_answer("   "), Some(Feedback::EmptyAnswer));
    assert_eq!(game.attempts(), 0);
    assert_eq!(game.status(), RoundStatus::Open);
}

#[test]
fn test_hints_and_wrong_attempts_reduce_points() {
    let mut game = WordPuzzle::with_seed(13);
    let word = game.puzzle().word.to_string();

    let first = game.hint().expect("First hint");
    assert!(first.to_string().contains(&format!("{} letters", word.len())));
    let second = game.hint().expect("Second hint");
    assert!(second.to_string().contains("vowels"));
    assert_eq!(game.hint(), None);
    assert_eq!(game.hints_used(), MAX_HINTS);
    assert_eq!(game.hints_left(), 0);

    game.submit_answer("nope");
    // 10 - 1 earlier attempt - 2 hints
    assert_eq!(
        game.submit_answer(&word),
        Some(Feedback::Earned { points: 7 })
    );
    assert_eq!(game.score(), 7);
}

#[test]
fn test_input_capped_at_word_length() {
    let mut game = WordPuzzle::with_seed(14);
    let len = game.puzzle().word.len();
    for _ in 0..len + 5 {
        game.type_char('a');
    }
    assert_eq!(game.input().chars().count(), len);
    game.backspace();
    assert_eq!(game.input().chars().count(), len - 1);
}

#[test]
fn test_next_round_keeps_session_score() {
    let mut game = WordPuzzle::with_seed(15);
    let word = game.puzzle().word.to_string();
    game.submit_answer(&word);
    game.next_round();

    assert_eq!(game.score(), 10);
    assert_eq!(game.attempts(), 0);
    assert_eq!(game.hints_used(), 0);
    assert_eq!(game.status(), RoundStatus::Open);
    assert!(game.input().is_empty());
}

// ─────────────────────────────────────────────────────────────
//  Brain Teasers
// ─────────────────────────────────────────────────────────────

#[test]
fn test_teaser_accepts_containing_answer() {
    let mut game = BrainTeasers::with_seed(21);
    let teaser = *game.teaser();
    let guess = format!("Is it a {}?", teaser.answer.to_uppercase());

    let expected = teaser.difficulty.question_points() + HINT_BONUS;
    assert_eq!(
        game.submit_answer(&guess),
        Some(Feedback::Earned { points: expected })
    );
    assert_eq!(game.status(), RoundStatus::Solved);
}

#[test]
fn test_teaser_hint_forfeits_bonus() {
    let mut game = BrainTeasers::with_seed(22);
    let teaser = *game.teaser();

    assert_eq!(
        game.reveal_hint(),
        Some(Feedback::Hint(teaser.hint.to_string()))
    );
    assert_eq!(game.reveal_hint(), None);
    assert!(game.hint_shown());

    let expected = teaser.difficulty.question_points();
    assert_eq!(
        game.submit_answer(teaser.answer),
        Some(Feedback::Earned { points: expected })
    );
}

#[test]
fn test_teaser_attempt_penalty() {
    let mut game = BrainTeasers::with_seed(23);
    let teaser = *game.teaser();

    game.submit_answer("qqqqqqqq");
    game.submit_answer("wwwwwwww");
    let expected = teaser.difficulty.question_points() + HINT_BONUS - 4;
    assert_eq!(
        game.submit_answer(teaser.answer),
        Some(Feedback::Earned { points: expected })
    );
}

#[test]
fn test_teaser_reveals_after_three_misses() {
    let mut game = BrainTeasers::with_seed(24);
    let answer = game.teaser().answer.to_string();
    for _ in 0..MAX_ATTEMPTS - 1 {
        assert!(matches!(
            game.submit_answer("qqqqqqqq"),
            Some(Feedback::TryAgain { .. })
        ));
    }
    assert_eq!(
        game.submit_answer("qqqqqqqq"),
        Some(Feedback::AnswerRevealed { answer })
    );
    assert_eq!(game.status(), RoundStatus::Revealed);
    assert_eq!(game.score(), 0);
}
