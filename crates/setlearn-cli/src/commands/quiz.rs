//! The `setlearn quiz` command.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;
use chrono::Utc;
use rand::Rng;

use setlearn_core::bank::load_bank;
use setlearn_core::config::load_config_from;
use setlearn_core::quiz::{QuizSession, QuizView};
use setlearn_core::summary::SessionSummary;

const QUIT: &str = ":q";

pub fn execute(
    bank_path: Option<PathBuf>,
    seed: Option<u64>,
    max_questions: Option<usize>,
    summary_path: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    if let Some(max) = max_questions {
        anyhow::ensure!(max >= 1, "max-questions must be at least 1");
    }

    let config = load_config_from(config_path.as_deref())?;
    let bank = load_bank(bank_path.or(config.question_bank).as_deref())?;
    let mut session = QuizSession::with_seed(bank, seed.or(config.seed))?;
    let started_at = Utc::now();

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run(&mut session, stdin.lock(), stdout.lock(), max_questions)?;

    let summary = SessionSummary::from_session(&session, started_at);
    println!(
        "\nScore: {}/{} correct ({:.0}%)",
        summary.correct,
        summary.answered(),
        summary.accuracy() * 100.0
    );

    if let Some(path) = summary_path {
        summary.save_json(&path)?;
        eprintln!("Summary written to {}", path.display());
    }

    Ok(())
}

/// Drive a session from line-based input until EOF, `:q`, or `max_questions` answers.
pub fn run<G, I, O>(
    session: &mut QuizSession<G>,
    mut input: I,
    mut out: O,
    max_questions: Option<usize>,
) -> Result<()>
where
    G: Rng,
    I: BufRead,
    O: Write,
{
    let mut line = String::new();

    loop {
        render_question(&mut out, &session.view())?;
        write!(out, "Your answer: ")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let answer = line.trim_end_matches(['\r', '\n']);
        if answer.trim() == QUIT {
            break;
        }

        session.submit_answer(answer)?;
        render_feedback(&mut out, &session.view())?;

        if max_questions.is_some_and(|max| session.attempts().len() >= max) {
            break;
        }

        writeln!(out, "Press Enter for the next question, or {QUIT} to quit.")?;
        line.clear();
        if input.read_line(&mut line)? == 0 || line.trim() == QUIT {
            break;
        }

        if session.advance()? {
            writeln!(out, "\nAll questions done. Reshuffling for another round.")?;
        }
    }

    Ok(())
}

fn render_question<O: Write>(out: &mut O, view: &QuizView<'_>) -> Result<()> {
    writeln!(out, "\nQuestion {}/{} [{}]", view.number, view.total, view.question_id)?;
    writeln!(out, "{}", view.prompt)?;
    for operand in &view.operands {
        writeln!(out, "  {operand}")?;
    }
    Ok(())
}

fn render_feedback<O: Write>(out: &mut O, view: &QuizView<'_>) -> Result<()> {
    if let Some(feedback) = view.feedback {
        writeln!(out, "{feedback}")?;
    }
    if let Some(explanation) = view.overlay {
        writeln!(out, "Incorrect.")?;
        writeln!(out, "----------------------------------------")?;
        writeln!(out, "{explanation}")?;
        writeln!(out, "----------------------------------------")?;
    }
    Ok(())
}
