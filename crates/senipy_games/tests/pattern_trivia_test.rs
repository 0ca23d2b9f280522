//! Tests for Pattern Recognition and the Trivia Quiz.

use std::collections::HashSet;

use rand::SeedableRng;
use rand::rngs::StdRng;
use senipy_games::{
    ADVANCE_DELAY, CORRECT_PATTERN_DELAY, Feedback, MASK, OPTION_COUNT, Pattern, PatternEvent,
    PatternFamily, PatternGame, QUESTIONS_PER_QUIZ, Scheduled, SummaryTier, TriviaEvent,
    TriviaQuiz, WRONG_PATTERN_DELAY,
};
use strum::IntoEnumIterator;

// ─────────────────────────────────────────────────────────────
//  Pattern Recognition
// ─────────────────────────────────────────────────────────────

#[test]
fn test_options_unique_and_contain_answer() {
    let mut rng = StdRng::seed_from_u64(100);
    for level in 1..6 {
        for family in PatternFamily::iter() {
            for _ in 0..50 {
                let pattern = Pattern::generate_family(family, level, &mut rng);
                let options: HashSet<&String> = pattern.options().iter().collect();
                assert_eq!(options.len(), OPTION_COUNT);
                let hits = pattern
                    .options()
                    .iter()
                    .filter(|o| o.as_str() == pattern.answer())
                    .count();
                assert_eq!(hits, 1);
            }
        }
    }
}

#[test]
fn test_exactly_one_masked_position() {
    let mut rng = StdRng::seed_from_u64(101);
    for _ in 0..100 {
        let pattern = Pattern::generate(2, &mut rng);
        let masked: Vec<usize> = pattern
            .sequence()
            .iter()
            .enumerate()
            .filter(|(_, token)| token.as_str() == MASK)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(masked, vec![pattern.missing()]);
    }
}

#[test]
fn test_family_lengths() {
    let mut rng = StdRng::seed_from_u64(102);
    let colors = Pattern::generate_family(PatternFamily::Colors, 1, &mut rng);
    let shapes = Pattern::generate_family(PatternFamily::Shapes, 1, &mut rng);
    let numbers = Pattern::generate_family(PatternFamily::Numbers, 1, &mut rng);
    assert_eq!(colors.sequence().len(), 6);
    assert_eq!(shapes.sequence().len(), 8);
    assert_eq!(numbers.sequence().len(), 7);
}

#[test]
fn test_correct_pattern_levels_up() {
    let mut game = PatternGame::with_seed(103);
    let answer = game.pattern().answer().to_string();
    let index = game
        .pattern()
        .options()
        .iter()
        .position(|o| *o == answer)
        .expect("Answer among options");

    let reaction = game.choose(index).expect("Checked");
    assert_eq!(*reaction.feedback(), Feedback::WellDone);
    assert_eq!(
        reaction.follow_up().map(|d| *d.delay()),
        Some(CORRECT_PATTERN_DELAY)
    );
    assert_eq!(game.score(), 5);
    assert_eq!(game.level(), 2);

    // Pending: further picks ignored.
    assert!(game.choose(0).is_none());
    game.fire(PatternEvent::NextPattern);
    assert!(!game.is_pending());
    assert_eq!(game.selected(), None);
}

#[test]
fn test_wrong_pattern_reveals_and_keeps_level() {
    let mut game = PatternGame::with_seed(104);
    let answer = game.pattern().answer().to_string();
    let index = game
        .pattern()
        .options()
        .iter()
        .position(|o| *o != answer)
        .expect("A decoy exists");

    let reaction = game.choose(index).expect("Checked");
    assert_eq!(*reaction.feedback(), Feedback::Wrong { answer });
    assert_eq!(
        reaction.follow_up().map(|d| *d.delay()),
        Some(WRONG_PATTERN_DELAY)
    );
    assert!(game.is_revealed());
    assert_eq!(game.level(), 1);
    assert_eq!(game.score(), 0);
}

#[test]
fn test_check_without_selection_does_nothing() {
    let mut game = PatternGame::with_seed(105);
    assert!(game.check().is_none());
    assert!(!game.is_pending());
}

// ─────────────────────────────────────────────────────────────
//  Trivia Quiz
// ─────────────────────────────────────────────────────────────

/// Answers the current question (correctly if `correct`) and advances.
fn play_question(quiz: &mut TriviaQuiz, correct: bool) {
    let question = *quiz.question().expect("Question available");
    let option = if correct {
        question.correct
    } else {
        (question.correct + 1) % 4
    };
    let reaction = quiz.answer(option).expect("Answer accepted");
    let deferred = reaction.follow_up().expect("Advance scheduled");
    assert_eq!(*deferred.delay(), ADVANCE_DELAY);
    quiz.fire(*deferred.event());
}

#[test]
fn test_no_consecutive_repeats() {
    for seed in 0..20 {
        let mut quiz = TriviaQuiz::with_seed(seed);
        while !quiz.is_complete() {
            play_question(&mut quiz, seed % 2 == 0);
        }
        let history = quiz.history();
        assert_eq!(history.len(), QUESTIONS_PER_QUIZ as usize);
        assert!(history.windows(2).all(|w| w[0] != w[1]), "seed {seed}");
    }
}

#[test]
fn test_quiz_completes_after_ten() {
    let mut quiz = TriviaQuiz::with_seed(200);
    for n in 1..=QUESTIONS_PER_QUIZ {
        assert_eq!(quiz.question_number(), n);
        play_question(&mut quiz, true);
    }
    assert!(quiz.is_complete());
    assert!(quiz.question().is_none());
    assert_eq!(quiz.correct_answers(), QUESTIONS_PER_QUIZ);
    assert!(quiz.score() >= 100);
    assert!(quiz.summary().is_some());

    // Stops generating questions.
    quiz.fire(TriviaEvent::Advance);
    assert_eq!(quiz.history().len(), QUESTIONS_PER_QUIZ as usize);
    assert!(quiz.answer(0).is_none());
}

#[test]
fn test_wrong_answers_score_nothing() {
    let mut quiz = TriviaQuiz::with_seed(201);
    while !quiz.is_complete() {
        play_question(&mut quiz, false);
    }
    assert_eq!(quiz.score(), 0);
    assert_eq!(quiz.correct_answers(), 0);
    assert_eq!(quiz.summary(), Some(SummaryTier::KeepPracticing));
}

#[test]
fn test_answer_locked_after_check() {
    let mut quiz = TriviaQuiz::with_seed(202);
    let correct = quiz.question().expect("Question").correct;
    quiz.answer(correct).expect("First answer");
    quiz.select((correct + 1) % 4);
    assert_eq!(quiz.selected(), Some(correct));
    assert!(quiz.check().is_none());
}

#[test]
fn test_summary_tiers() {
    assert_eq!(SummaryTier::from_score(200), SummaryTier::Excellent);
    assert_eq!(SummaryTier::from_score(150), SummaryTier::Excellent);
    assert_eq!(SummaryTier::from_score(149), SummaryTier::GreatJob);
    assert_eq!(SummaryTier::from_score(50), SummaryTier::GoodEffort);
    assert_eq!(SummaryTier::from_score(49), SummaryTier::KeepPracticing);
}

#[test]
fn test_restart_clears_session() {
    let mut quiz = TriviaQuiz::with_seed(203);
    play_question(&mut quiz, true);
    quiz.restart();
    assert_eq!(quiz.question_number(), 1);
    assert_eq!(quiz.score(), 0);
    assert_eq!(quiz.history().len(), 1);
}
