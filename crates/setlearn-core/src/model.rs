//! Core data model types for setlearn.
//!
//! A question bank is a static list of question records. Banks are loaded
//! once and never mutated while a quiz runs.

use serde::{Deserialize, Serialize};

use crate::answer::answers_match;

/// A single quiz question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Unique identifier within its bank.
    pub id: String,
    /// The prompt shown to the learner.
    pub question: String,
    /// First operand as display text (e.g. `A = {1, 2, 3}`), may be empty.
    #[serde(default)]
    pub set_a: String,
    /// Second operand as display text, may be empty.
    #[serde(default)]
    pub set_b: String,
    /// Canonical answer in the notation learners are expected to type.
    pub answer: String,
    /// Shown only when the learner answers incorrectly.
    #[serde(default)]
    pub explanation: String,
}

impl Question {
    /// Check a typed answer against the canonical one.
    pub fn accepts(&self, typed: &str) -> bool {
        answers_match(typed, &self.answer)
    }

    /// Non-empty operand display strings, in order.
    pub fn operands(&self) -> Vec<&str> {
        [self.set_a.as_str(), self.set_b.as_str()]
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect()
    }
}

/// A named collection of questions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionBank {
    /// Unique identifier for this bank.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Description of this bank.
    #[serde(default)]
    pub description: String,
    /// The questions, in authoring order.
    #[serde(default)]
    pub questions: Vec<Question>,
}

impl QuestionBank {
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Look up a question by id.
    pub fn get(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }
}
