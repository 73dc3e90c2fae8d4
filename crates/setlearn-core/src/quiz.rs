//! Quiz session state machine.
//!
//! A session walks a shuffled permutation of the bank. Each question starts
//! `Unanswered`; submitting an answer moves it to `AnsweredCorrect` or
//! `AnsweredIncorrect` (which opens the explanation overlay); `advance` moves
//! to the next question and reshuffles the whole deck whenever the position
//! wraps back to zero.
//!
//! The session owns all state. Front ends render from [`QuizSession::view`]
//! after each transition.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::error::QuizError;
use crate::model::{Question, QuestionBank};

/// Feedback shown after a correct answer.
pub const CORRECT_FEEDBACK: &str = "Well done! Your answer is correct.";

/// Where the current question is in its answer cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerState {
    Unanswered,
    AnsweredCorrect,
    AnsweredIncorrect { overlay_open: bool },
}

/// Outcome of checking one answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "verdict", rename_all = "snake_case")]
pub enum Verdict {
    Correct,
    Incorrect { explanation: String },
}

impl Verdict {
    pub fn is_correct(&self) -> bool {
        matches!(self, Verdict::Correct)
    }
}

/// One submitted answer, kept for the session summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attempt {
    pub question_id: String,
    pub answer: String,
    pub correct: bool,
}

/// Everything a front end needs to draw the current question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizView<'a> {
    pub question_id: &'a str,
    pub prompt: &'a str,
    pub operands: Vec<&'a str>,
    /// 1-based position within the current pass.
    pub number: usize,
    pub total: usize,
    pub input_enabled: bool,
    pub check_visible: bool,
    pub next_visible: bool,
    pub feedback: Option<&'static str>,
    /// Explanation text while the overlay is open.
    pub overlay: Option<&'a str>,
}

/// A quiz over one question bank.
#[derive(Debug)]
pub struct QuizSession<R: Rng = StdRng> {
    bank: QuestionBank,
    order: Vec<usize>,
    position: usize,
    state: AnswerState,
    rng: R,
    attempts: Vec<Attempt>,
    completed_passes: u32,
}

impl QuizSession<StdRng> {
    /// Create a session with a seeded RNG, or an OS-seeded one.
    pub fn with_seed(bank: QuestionBank, seed: Option<u64>) -> Result<Self, QuizError> {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::new(bank, rng)
    }
}

impl<R: Rng> QuizSession<R> {
    /// Start a session on a freshly shuffled order.
    pub fn new(bank: QuestionBank, mut rng: R) -> Result<Self, QuizError> {
        if bank.is_empty() {
            return Err(QuizError::EmptyBank);
        }

        let order = shuffled_order(bank.len(), &mut rng);
        tracing::debug!(bank = %bank.id, ?order, "quiz session started");

        Ok(Self {
            bank,
            order,
            position: 0,
            state: AnswerState::Unanswered,
            rng,
            attempts: Vec::new(),
            completed_passes: 0,
        })
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    /// Current traversal order (indices into the bank).
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn state(&self) -> AnswerState {
        self.state
    }

    pub fn attempts(&self) -> &[Attempt] {
        &self.attempts
    }

    /// Number of times the traversal has wrapped back to the start.
    pub fn completed_passes(&self) -> u32 {
        self.completed_passes
    }

    pub fn correct_count(&self) -> usize {
        self.attempts.iter().filter(|a| a.correct).count()
    }

    pub fn incorrect_count(&self) -> usize {
        self.attempts.len() - self.correct_count()
    }

    /// The question at the current position.
    pub fn current(&self) -> &Question {
        &self.bank.questions[self.order[self.position]]
    }

    /// Render state for the current question.
    pub fn view(&self) -> QuizView<'_> {
        let question = self.current();
        let (input_enabled, check_visible, next_visible, feedback, overlay) = match self.state {
            AnswerState::Unanswered => (true, true, false, None, None),
            AnswerState::AnsweredCorrect => (false, false, true, Some(CORRECT_FEEDBACK), None),
            AnswerState::AnsweredIncorrect { overlay_open } => (
                false,
                false,
                false,
                None,
                overlay_open.then_some(question.explanation.as_str()),
            ),
        };

        QuizView {
            question_id: &question.id,
            prompt: &question.question,
            operands: question.operands(),
            number: self.position + 1,
            total: self.order.len(),
            input_enabled,
            check_visible,
            next_visible,
            feedback,
            overlay,
        }
    }

    /// Check an answer for the current question.
    ///
    /// Only valid while the question is unanswered. An incorrect answer opens
    /// the explanation overlay.
    pub fn submit_answer(&mut self, text: &str) -> Result<Verdict, QuizError> {
        if self.state != AnswerState::Unanswered {
            return Err(QuizError::AlreadyAnswered {
                question_id: self.current().id.clone(),
            });
        }

        let question = self.current();
        let question_id = question.id.clone();
        let correct = question.accepts(text);
        let verdict = if correct {
            Verdict::Correct
        } else {
            Verdict::Incorrect {
                explanation: question.explanation.clone(),
            }
        };

        tracing::debug!(question = %question_id, correct, "answer checked");
        self.attempts.push(Attempt {
            question_id,
            answer: text.to_string(),
            correct,
        });
        self.state = if correct {
            AnswerState::AnsweredCorrect
        } else {
            AnswerState::AnsweredIncorrect { overlay_open: true }
        };

        Ok(verdict)
    }

    /// Dismiss the explanation overlay without moving on.
    pub fn close_overlay(&mut self) {
        if let AnswerState::AnsweredIncorrect { overlay_open } = &mut self.state {
            *overlay_open = false;
        }
    }

    /// Move to the next question.
    ///
    /// Valid after a correct answer, or after an incorrect one (this is the
    /// overlay's own "next" action and also closes it). Returns `true` when
    /// the position wrapped to zero and the order was reshuffled.
    pub fn advance(&mut self) -> Result<bool, QuizError> {
        if self.state == AnswerState::Unanswered {
            return Err(QuizError::NotAnswered {
                question_id: self.current().id.clone(),
            });
        }

        self.position = (self.position + 1) % self.order.len();
        let reshuffled = self.position == 0;
        if reshuffled {
            self.order = shuffled_order(self.bank.len(), &mut self.rng);
            self.completed_passes += 1;
            tracing::debug!(order = ?self.order, pass = self.completed_passes, "deck reshuffled");
        }
        self.state = AnswerState::Unanswered;

        Ok(reshuffled)
    }
}

/// A uniformly random permutation of `0..n`.
fn shuffled_order<R: Rng>(n: usize, rng: &mut R) -> Vec<usize> {
    let mut order: Vec<usize> = (0..n).collect();
    order.shuffle(rng);
    order
}
