//! Tests for the Number Challenge generator and round logic.

use rand::SeedableRng;
use rand::rngs::StdRng;
use senipy_games::{
    CORRECT_ADVANCE_DELAY, ChallengeError, ChallengePhase, Difficulty, Expression, Feedback,
    NumberChallenge, NumberEvent, Operator, Problem, ROUND_SECONDS, Scheduled,
    WRONG_ADVANCE_DELAY,
};

#[test]
fn test_medium_division_is_exact() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut divisions = 0;
    for _ in 0..500 {
        let problem = Problem::generate(Difficulty::Medium, &mut rng);
        if let Expression::Binary {
            lhs,
            op: Operator::Divide,
            rhs,
        } = *problem.expression()
        {
            divisions += 1;
            assert!((1..=12).contains(&rhs));
            assert_eq!(rhs * problem.answer(), lhs, "{}", problem.question());
        }
    }
    assert!(divisions > 0, "Expected some division problems");
}

#[test]
fn test_easy_subtraction_never_negative() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..500 {
        let problem = Problem::generate(Difficulty::Easy, &mut rng);
        let Expression::Binary { lhs, op, rhs } = *problem.expression() else {
            panic!("Easy problems are binary");
        };
        assert!(matches!(op, Operator::Add | Operator::Subtract));
        assert!((1..=20).contains(&rhs));
        if op == Operator::Subtract {
            assert!(lhs >= rhs);
        }
    }
}

#[test]
fn test_hard_problems_are_chained() {
    let mut rng = StdRng::seed_from_u64(9);
    for _ in 0..200 {
        let problem = Problem::generate(Difficulty::Hard, &mut rng);
        let Expression::Chained { x, inner, y, .. } = *problem.expression() else {
            panic!("Hard problems are chained");
        };
        assert_ne!(inner, Operator::Divide);
        if inner == Operator::Subtract {
            assert!(x >= y);
        }
        assert!(problem.question().starts_with('('));
    }
}

#[test]
fn test_question_text_format() {
    let expression = Expression::Chained {
        x: 3,
        inner: Operator::Multiply,
        y: 4,
        outer: Operator::Subtract,
        z: 20,
    };
    assert_eq!(expression.to_string(), "(3 × 4) - 20");
    // Final subtraction clamps at zero.
    assert_eq!(expression.evaluate(), 0);
}

#[test]
fn test_correct_answers_build_streak() {
    let mut game = NumberChallenge::with_seed(1);
    game.set_difficulty(Difficulty::Medium).expect("Not active");
    game.start();

    for expected_points in [2, 3, 4] {
        let answer = game.problem().expect("Problem").answer().to_string();
        let reaction = game.submit_answer(&answer).expect("Accepted");
        assert_eq!(
            *reaction.feedback(),
            Feedback::Scored {
                points: expected_points
            }
        );
        let deferred = reaction.follow_up().expect("Advance scheduled");
        assert_eq!(*deferred.delay(), CORRECT_ADVANCE_DELAY);
        game.fire(*deferred.event());
    }
    assert_eq!(game.score(), 9);
    assert_eq!(game.streak(), 3);
}

#[test]
fn test_wrong_answer_resets_streak() {
    let mut game = NumberChallenge::with_seed(2);
    game.start();
    let answer = game.problem().expect("Problem").answer();
    game.submit_answer(&answer.to_string());
    game.fire(NumberEvent::NextProblem);

    let wrong = game.problem().expect("Problem").answer() + 1;
    let reaction = game.submit_answer(&wrong.to_string()).expect("Accepted");
    let (feedback, follow_up) = reaction.into_parts();
    assert!(matches!(feedback, Feedback::Wrong { .. }));
    assert_eq!(follow_up.map(|d| *d.delay()), Some(WRONG_ADVANCE_DELAY));
    assert_eq!(game.streak(), 0);
}

#[test]
fn test_invalid_number_changes_nothing() {
    let mut game = NumberChallenge::with_seed(3);
    game.start();
    let before = game.problem().copied();

    let reaction = game.submit_answer("twelve").expect("Feedback");
    assert_eq!(*reaction.feedback(), Feedback::InvalidNumber);
    assert!(reaction.follow_up().is_none());
    assert_eq!(game.problem().copied(), before);
    assert!(!game.is_awaiting_next());
}

#[test]
fn test_submissions_ignored_while_advance_pending() {
    let mut game = NumberChallenge::with_seed(4);
    game.start();
    let answer = game.problem().expect("Problem").answer().to_string();
    assert!(game.submit_answer(&answer).is_some());
    assert!(game.submit_answer(&answer).is_none());
    assert_eq!(game.streak(), 1);
}

#[test]
fn test_countdown_ends_round() {
    let mut game = NumberChallenge::with_seed(5);
    assert_eq!(game.tick(), None);
    game.start();

    for _ in 1..ROUND_SECONDS {
        assert_eq!(game.tick(), None);
    }
    assert_eq!(game.tick(), Some(Feedback::TimeUp { score: 0 }));
    assert_eq!(game.phase(), ChallengePhase::Finished);
    assert_eq!(game.time_left(), 0);
    assert!(game.submit_answer("1").is_none());
}

#[test]
fn test_time_up_drops_pending_advance() {
    let mut game = NumberChallenge::with_seed(6);
    game.start();
    let answer = game.problem().expect("Problem").answer().to_string();
    game.submit_answer(&answer);
    let shown = game.problem().copied();

    for _ in 0..ROUND_SECONDS {
        game.tick();
    }
    game.fire(NumberEvent::NextProblem);
    assert_eq!(game.problem().copied(), shown);
}

#[test]
fn test_difficulty_locked_while_active() {
    let mut game = NumberChallenge::with_seed(7);
    game.start();
    assert_eq!(
        game.set_difficulty(Difficulty::Hard),
        Err(ChallengeError::RoundActive)
    );
    assert_eq!(game.difficulty(), Difficulty::Easy);
}
