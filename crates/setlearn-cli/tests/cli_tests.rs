//! CLI integration tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const BUILTIN_BANK: &str = "../../question-banks/set-theory.toml";

const SINGLE_QUESTION_BANK: &str = r#"
[bank]
id = "single"
name = "Single"

[[questions]]
id = "intersection"
question = "What is A ∩ B?"
set_a = "A = {1, 2, 3, 4, 5}"
set_b = "B = {4, 5, 6, 7}"
answer = "{4, 5}"
explanation = "Both sets contain 4 and 5, so the answer is {4, 5}."
"#;

fn setlearn() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("setlearn").unwrap()
}

/// A command that ignores the developer's own config and environment.
fn isolated(dir: &TempDir) -> Command {
    let mut cmd = setlearn();
    cmd.current_dir(dir.path())
        .env("HOME", dir.path())
        .env_remove("SETLEARN_BANK")
        .env_remove("SETLEARN_STATE_DIR");
    cmd
}

fn write_single_bank(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("single.toml");
    std::fs::write(&path, SINGLE_QUESTION_BANK).unwrap();
    path
}

#[test]
fn venn_prints_regions() {
    setlearn()
        .arg("venn")
        .arg("--a")
        .arg("{1, 2, 3, 4, 5}")
        .arg("--b")
        .arg("{4, 5, 6, 7}")
        .assert()
        .success()
        .stdout(predicate::str::contains("Only in A:    {1, 2, 3}"))
        .stdout(predicate::str::contains("Only in B:    {6, 7}"))
        .stdout(predicate::str::contains("A ∩ B:        {4, 5}"));
}

#[test]
fn venn_json_output() {
    let output = setlearn()
        .args(["venn", "--a", "{x، y}", "--b", "{y}", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["only_a"], serde_json::json!(["x"]));
    assert_eq!(json["intersection"], serde_json::json!(["y"]));
    assert_eq!(json["only_b"], serde_json::json!([]));
}

#[test]
fn venn_rejects_unparsable_sets() {
    setlearn()
        .args(["venn", "--a", "a, b", "--b", ""])
        .assert()
        .failure()
        .stderr(predicate::str::contains("correct format"));
}

#[test]
fn venn_writes_svg() {
    let dir = TempDir::new().unwrap();
    let svg = dir.path().join("venn.svg");

    setlearn()
        .args(["venn", "--a", "{a, b}", "--b", "{b, c}", "--svg"])
        .arg(&svg)
        .assert()
        .success();

    let content = std::fs::read_to_string(&svg).unwrap();
    assert!(content.contains("<svg"));
    assert!(content.contains(">b</text>"));
}

#[test]
fn quiz_correct_answer() {
    let dir = TempDir::new().unwrap();
    let bank = write_single_bank(&dir);

    isolated(&dir)
        .arg("quiz")
        .arg("--bank")
        .arg(&bank)
        .arg("--seed")
        .arg("1")
        .write_stdin("{5,4}\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Question 1/1 [intersection]"))
        .stdout(predicate::str::contains("Well done"))
        .stdout(predicate::str::contains("Score: 1/1 correct"));
}

#[test]
fn quiz_incorrect_answer_shows_explanation() {
    let dir = TempDir::new().unwrap();
    let bank = write_single_bank(&dir);

    isolated(&dir)
        .arg("quiz")
        .arg("--bank")
        .arg(&bank)
        .write_stdin("{4}\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Incorrect."))
        .stdout(predicate::str::contains(
            "Both sets contain 4 and 5, so the answer is {4, 5}.",
        ))
        .stdout(predicate::str::contains("Score: 0/1 correct"));
}

#[test]
fn quiz_wraps_and_writes_summary() {
    let dir = TempDir::new().unwrap();
    let bank = write_single_bank(&dir);
    let summary = dir.path().join("summary.json");

    isolated(&dir)
        .arg("quiz")
        .arg("--bank")
        .arg(&bank)
        .arg("--summary")
        .arg(&summary)
        .write_stdin("4 5\n\n{4}\n:q\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Reshuffling"))
        .stdout(predicate::str::contains("Score: 1/2 correct"));

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&summary).unwrap()).unwrap();
    assert_eq!(json["correct"], 1);
    assert_eq!(json["incorrect"], 1);
    assert_eq!(json["completed_passes"], 1);
    assert_eq!(json["bank"]["id"], "single");
}

#[test]
fn quiz_missing_bank_fails() {
    let dir = TempDir::new().unwrap();
    isolated(&dir)
        .arg("quiz")
        .arg("--bank")
        .arg("no_such_bank.toml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn normalize_prints_canonical_form() {
    setlearn()
        .args(["normalize", "{B, a}", "--against", "A b"])
        .assert()
        .success()
        .stdout(predicate::str::contains("a,b"))
        .stdout(predicate::str::contains("match"));

    setlearn()
        .args(["normalize", "{4}", "--against", "{4, 5}"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no match (expected 4,5)"));
}

#[test]
fn list_builtin_bank() {
    let dir = TempDir::new().unwrap();
    isolated(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("12 questions"))
        .stdout(predicate::str::contains("intersection-numbers"))
        .stdout(predicate::str::contains("union-shapes"));
}

#[test]
fn validate_builtin_bank() {
    setlearn()
        .arg("validate")
        .arg("--bank")
        .arg(BUILTIN_BANK)
        .assert()
        .success()
        .stdout(predicate::str::contains("12 questions"))
        .stdout(predicate::str::contains("All question banks valid"));
}

#[test]
fn validate_directory_reports_warnings() {
    let dir = TempDir::new().unwrap();
    write_single_bank(&dir);
    std::fs::write(
        dir.path().join("thin.toml"),
        "[bank]\nid = \"thin\"\nname = \"Thin\"\n\n[[questions]]\nid = \"q\"\nquestion = \"?\"\nanswer = \"1\"\n",
    )
    .unwrap();

    setlearn()
        .arg("validate")
        .arg("--bank")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Single"))
        .stdout(predicate::str::contains("[q] WARNING: no explanation"))
        .stdout(predicate::str::contains("1 warning(s) found"));
}

#[test]
fn validate_nonexistent_file() {
    setlearn()
        .arg("validate")
        .arg("--bank")
        .arg("nonexistent.toml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn like_counts_persist() {
    let dir = TempDir::new().unwrap();
    let state = dir.path().join("state");

    for expected in ["Likes: 1", "Likes: 2"] {
        isolated(&dir)
            .env("SETLEARN_STATE_DIR", &state)
            .arg("like")
            .assert()
            .success()
            .stdout(predicate::str::contains(expected));
    }

    isolated(&dir)
        .env("SETLEARN_STATE_DIR", &state)
        .args(["like", "--show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Likes: 2"));
}

#[test]
fn particles_renders_frame() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("frame.svg");

    isolated(&dir)
        .args(["particles", "--frames", "25", "--count", "8", "--seed", "3", "--output"])
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Rendered 8 particles"));

    let svg = std::fs::read_to_string(&output).unwrap();
    assert_eq!(svg.matches("<circle ").count(), 8);
}

#[test]
fn init_creates_files() {
    let dir = TempDir::new().unwrap();

    isolated(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created setlearn.toml"))
        .stdout(predicate::str::contains(
            "Created question-banks/set-theory.toml",
        ));

    assert!(dir.path().join("setlearn.toml").exists());
    assert!(dir.path().join("question-banks/set-theory.toml").exists());

    // The generated config is picked up from the working directory.
    isolated(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("12 questions"));
}

#[test]
fn config_paths_resolve_against_config_dir() {
    let dir = TempDir::new().unwrap();
    let project = dir.path().join("project");
    let elsewhere = dir.path().join("elsewhere");
    std::fs::create_dir_all(project.join("banks")).unwrap();
    std::fs::create_dir_all(&elsewhere).unwrap();
    std::fs::write(project.join("banks/single.toml"), SINGLE_QUESTION_BANK).unwrap();
    std::fs::write(
        project.join("setlearn.toml"),
        "question_bank = \"banks/single.toml\"\n",
    )
    .unwrap();

    isolated(&dir)
        .current_dir(&elsewhere)
        .arg("--config")
        .arg(project.join("setlearn.toml"))
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Single (1 questions)"));
}

#[test]
fn init_skips_existing() {
    let dir = TempDir::new().unwrap();

    isolated(&dir)
        .arg("init")
        .assert()
        .success();

    isolated(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn help_output() {
    setlearn()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Venn calculator and quiz"));
}

#[test]
fn version_output() {
    setlearn()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("setlearn"));
}
