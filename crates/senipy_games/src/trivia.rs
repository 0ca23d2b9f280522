//! Trivia Quiz: ten multiple-choice questions per session.

use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::{Deferred, Difficulty, Feedback, Reaction, Scheduled, pick_excluding, pick_uniform};

/// Questions asked per session.
pub const QUESTIONS_PER_QUIZ: u32 = 10;

/// Pause after an answer before the next question.
pub const ADVANCE_DELAY: Duration = Duration::from_millis(3000);

/// A multiple-choice question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Question {
    /// Question text.
    pub text: &'static str,
    /// The four answer options.
    pub options: [&'static str; 4],
    /// Index of the correct option.
    pub correct: usize,
    /// Topic.
    pub category: &'static str,
    /// Scoring tier.
    pub difficulty: Difficulty,
}

/// The fixed question pool.
pub static QUESTIONS: [Question; 10] = [
    Question {
        text: "What is the capital of France?",
        options: ["London", "Berlin", "Paris", "Madrid"],
        correct: 2,
        category: "Geography",
        difficulty: Difficulty::Easy,
    },
    Question {
        text: "Which planet is known as the Red Planet?",
        options: ["Venus", "Mars", "Jupiter", "Saturn"],
        correct: 1,
        category: "Science",
        difficulty: Difficulty::Easy,
    },
    Question {
        text: "Who painted the Mona Lisa?",
        options: ["Vincent van Gogh", "Pablo Picasso", "Leonardo da Vinci", "Michelangelo"],
        correct: 2,
        category: "Art",
        difficulty: Difficulty::Medium,
    },
    Question {
        text: "What is the largest mammal in the world?",
        options: ["African Elephant", "Blue Whale", "Giraffe", "Hippopotamus"],
        correct: 1,
        category: "Nature",
        difficulty: Difficulty::Easy,
    },
    Question {
        text: "In which year did World War II end?",
        options: ["1944", "1945", "1946", "1947"],
        correct: 1,
        category: "History",
        difficulty: Difficulty::Medium,
    },
    Question {
        text: "What is the chemical symbol for gold?",
        options: ["Go", "Gd", "Au", "Ag"],
        correct: 2,
        category: "Science",
        difficulty: Difficulty::Hard,
    },
    Question {
        text: "Which Shakespeare play features the character Hamlet?",
        options: ["Romeo and Juliet", "Macbeth", "Hamlet", "Othello"],
        correct: 2,
        category: "Literature",
        difficulty: Difficulty::Easy,
    },
    Question {
        text: "What is the smallest country in the world?",
        options: ["Monaco", "Vatican City", "San Marino", "Liechtenstein"],
        correct: 1,
        category: "Geography",
        difficulty: Difficulty::Medium,
    },
    Question {
        text: "How many strings does a standard guitar have?",
        options: ["4", "5", "6", "7"],
        correct: 2,
        category: "Music",
        difficulty: Difficulty::Easy,
    },
    Question {
        text: "What is the hardest natural substance on Earth?",
        options: ["Gold", "Iron", "Diamond", "Platinum"],
        correct: 2,
        category: "Science",
        difficulty: Difficulty::Medium,
    },
];

/// End-of-quiz rating by cumulative score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum SummaryTier {
    /// 150 points or more.
    #[display("🏆 Excellent performance!")]
    Excellent,
    /// 100 to 149 points.
    #[display("👏 Great job!")]
    GreatJob,
    /// 50 to 99 points.
    #[display("👍 Good effort!")]
    GoodEffort,
    /// Under 50 points.
    #[display("💪 Keep practicing!")]
    KeepPracticing,
}

impl SummaryTier {
    /// Rates a final score.
    #[instrument]
    pub fn from_score(score: u32) -> Self {
        match score {
            150.. => SummaryTier::Excellent,
            100..=149 => SummaryTier::GreatJob,
            50..=99 => SummaryTier::GoodEffort,
            _ => SummaryTier::KeepPracticing,
        }
    }
}

/// Event delivered after the pause following an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TriviaEvent {
    /// Move to the next question or finish the quiz.
    Advance,
}

/// Trivia Quiz game state.
#[derive(Debug, Clone)]
pub struct TriviaQuiz {
    rng: StdRng,
    current: usize,
    question_number: u32,
    score: u32,
    correct_answers: u32,
    selected: Option<usize>,
    answered: bool,
    complete: bool,
    history: Vec<usize>,
    feedback: Option<Feedback>,
}

impl TriviaQuiz {
    /// Creates a quiz with an OS-seeded question picker.
    #[instrument]
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_os_rng())
    }

    /// Creates a quiz with a deterministic question picker.
    #[instrument]
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        let mut quiz = Self {
            rng,
            current: 0,
            question_number: 1,
            score: 0,
            correct_answers: 0,
            selected: None,
            answered: false,
            complete: false,
            history: Vec::new(),
            feedback: None,
        };
        quiz.restart();
        quiz
    }

    /// Starts a new session from question 1 with a zero score.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        self.current = pick_uniform(&mut self.rng, QUESTIONS.len());
        self.question_number = 1;
        self.score = 0;
        self.correct_answers = 0;
        self.selected = None;
        self.answered = false;
        self.complete = false;
        self.history = vec![self.current];
        self.feedback = None;
        debug!(question = self.current, "Trivia quiz started");
    }

    /// The question on screen, or `None` once the quiz is complete.
    pub fn question(&self) -> Option<&Question> {
        (!self.complete).then(|| &QUESTIONS[self.current])
    }

    /// 1-based number of the current question.
    pub fn question_number(&self) -> u32 {
        self.question_number
    }

    /// Cumulative score.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Exact count of correct answers this session.
    pub fn correct_answers(&self) -> u32 {
        self.correct_answers
    }

    /// Selected option index.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Whether the current question has been answered.
    pub fn is_answered(&self) -> bool {
        self.answered
    }

    /// Whether all ten questions have been answered.
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Pool indices of the questions asked so far, in order.
    pub fn history(&self) -> &[usize] {
        &self.history
    }

    /// Most recent feedback, if any.
    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    /// End-of-quiz rating, available once complete.
    pub fn summary(&self) -> Option<SummaryTier> {
        self.complete.then(|| SummaryTier::from_score(self.score))
    }

    /// Highlights an option. Ignored once the question is answered.
    pub fn select(&mut self, option: usize) {
        if !self.answered && !self.complete && option < 4 {
            self.selected = Some(option);
        }
    }

    /// Locks in the selected option.
    ///
    /// Returns `None` with nothing selected, after the question was already
    /// answered, or once the quiz is complete.
    #[instrument(skip(self), fields(question_number = self.question_number))]
    pub fn check(&mut self) -> Option<Reaction<TriviaEvent>> {
        if self.answered || self.complete {
            return None;
        }
        let choice = self.selected?;
        let question = QUESTIONS[self.current];
        self.answered = true;

        let feedback = if choice == question.correct {
            let points = question.difficulty.question_points();
            self.score += points;
            self.correct_answers += 1;
            debug!(points, score = self.score, "Correct trivia answer");
            Feedback::Scored { points }
        } else {
            Feedback::Wrong {
                answer: question.options[question.correct].to_string(),
            }
        };
        self.feedback = Some(feedback.clone());
        Some(Reaction::then(
            feedback,
            Deferred::new(TriviaEvent::Advance, ADVANCE_DELAY),
        ))
    }

    /// Convenience: selects and checks in one step.
    pub fn answer(&mut self, option: usize) -> Option<Reaction<TriviaEvent>> {
        self.select(option);
        self.check()
    }

    /// Moves past an answered question.
    ///
    /// After the tenth answer the quiz completes and no further question is
    /// drawn. Does nothing if the current question is unanswered.
    #[instrument(skip(self), fields(question_number = self.question_number))]
    pub fn advance(&mut self) {
        if !self.answered || self.complete {
            return;
        }
        if self.question_number >= QUESTIONS_PER_QUIZ {
            self.complete = true;
            info!(
                score = self.score,
                correct = self.correct_answers,
                tier = %SummaryTier::from_score(self.score),
                "Trivia quiz complete"
            );
            return;
        }

        self.question_number += 1;
        self.current = pick_excluding(&mut self.rng, QUESTIONS.len(), Some(self.current));
        self.history.push(self.current);
        self.selected = None;
        self.answered = false;
        self.feedback = None;
    }
}

impl Default for TriviaQuiz {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduled for TriviaQuiz {
    type Event = TriviaEvent;

    fn fire(&mut self, event: TriviaEvent) {
        match event {
            TriviaEvent::Advance => self.advance(),
        }
    }
}
