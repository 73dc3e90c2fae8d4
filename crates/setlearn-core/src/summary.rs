//! Quiz session summaries with JSON export.
//!
//! A summary is written at the end of a run when requested. It is an export
//! only; nothing reads it back to resume a quiz.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::quiz::{Attempt, QuizSession};

/// Record of one quiz run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSummary {
    /// Unique session identifier.
    pub id: Uuid,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    /// Bank the session ran on.
    pub bank: BankSummary,
    pub correct: usize,
    pub incorrect: usize,
    /// Times the deck wrapped around and was reshuffled.
    pub completed_passes: u32,
    /// Every submitted answer, in order.
    pub attempts: Vec<Attempt>,
}

/// Summary of a bank (without the questions themselves).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BankSummary {
    pub id: String,
    pub name: String,
    pub question_count: usize,
}

impl SessionSummary {
    /// Snapshot a session that started at `started_at`.
    pub fn from_session<R: Rng>(session: &QuizSession<R>, started_at: DateTime<Utc>) -> Self {
        let bank = session.bank();
        Self {
            id: Uuid::new_v4(),
            started_at,
            finished_at: Utc::now(),
            bank: BankSummary {
                id: bank.id.clone(),
                name: bank.name.clone(),
                question_count: bank.len(),
            },
            correct: session.correct_count(),
            incorrect: session.incorrect_count(),
            completed_passes: session.completed_passes(),
            attempts: session.attempts().to_vec(),
        }
    }

    /// Number of answers submitted.
    pub fn answered(&self) -> usize {
        self.attempts.len()
    }

    /// Fraction of answers that were correct (0.0 when nothing was answered).
    pub fn accuracy(&self) -> f64 {
        if self.attempts.is_empty() {
            0.0
        } else {
            self.correct as f64 / self.attempts.len() as f64
        }
    }

    /// Save the summary as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize summary")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write summary to {}", path.display()))?;
        Ok(())
    }

    /// Load a summary from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read summary from {}", path.display()))?;
        let summary: SessionSummary =
            serde_json::from_str(&content).context("failed to parse summary JSON")?;
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bank::builtin_bank;

    #[test]
    fn summary_counts_attempts() {
        let mut session = QuizSession::with_seed(builtin_bank().unwrap(), Some(11)).unwrap();
        let started = Utc::now();
        let answer = session.current().answer.clone();
        session.submit_answer(&answer).unwrap();
        session.advance().unwrap();
        session.submit_answer("not even close").unwrap();

        let summary = SessionSummary::from_session(&session, started);
        assert_eq!(summary.answered(), 2);
        assert_eq!(summary.correct, 1);
        assert_eq!(summary.incorrect, 1);
        assert_eq!(summary.bank.question_count, 12);
        assert!((summary.accuracy() - 0.5).abs() < f64::EPSILON);
        assert!(summary.finished_at >= summary.started_at);
    }

    #[test]
    fn accuracy_of_empty_session_is_zero() {
        let session = QuizSession::with_seed(builtin_bank().unwrap(), Some(0)).unwrap();
        let summary = SessionSummary::from_session(&session, Utc::now());
        assert_eq!(summary.accuracy(), 0.0);
    }

    #[test]
    fn save_and_load_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("summary.json");

        let mut session = QuizSession::with_seed(builtin_bank().unwrap(), Some(2)).unwrap();
        session.submit_answer("{}").unwrap();
        let summary = SessionSummary::from_session(&session, Utc::now());
        summary.save_json(&path).unwrap();

        let loaded = SessionSummary::load_json(&path).unwrap();
        assert_eq!(loaded.id, summary.id);
        assert_eq!(loaded.attempts, summary.attempts);
    }
}
