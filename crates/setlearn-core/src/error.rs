//! Domain error types.
//!
//! Parsing set notation never fails; these errors cover the few places where
//! the caller has to be told something went wrong: an unusable Venn input and
//! quiz actions taken in the wrong state.

use thiserror::Error;

/// Errors from the Venn diagram entry point.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotationError {
    /// Neither input produced any elements.
    #[error("please enter the sets in the correct format, for example: {{a, b, c}}")]
    EmptyInput,
}

/// Errors from driving a quiz session out of order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    /// A session needs at least one question.
    #[error("question bank is empty")]
    EmptyBank,

    /// The current question already has an answer.
    #[error("question {question_id} has already been answered")]
    AlreadyAnswered { question_id: String },

    /// `advance` was called before the current question was answered.
    #[error("question {question_id} has not been answered yet")]
    NotAnswered { question_id: String },
}
