//! The `setlearn init` command.

use anyhow::Result;

use setlearn_core::bank::BUILTIN_BANK_TOML;

pub fn execute() -> Result<()> {
    // Create setlearn.toml
    if std::path::Path::new("setlearn.toml").exists() {
        println!("setlearn.toml already exists, skipping.");
    } else {
        std::fs::write("setlearn.toml", SAMPLE_CONFIG)?;
        println!("Created setlearn.toml");
    }

    // Copy the built-in bank so it can be edited
    std::fs::create_dir_all("question-banks")?;
    let bank_path = std::path::Path::new("question-banks/set-theory.toml");
    if bank_path.exists() {
        println!("question-banks/set-theory.toml already exists, skipping.");
    } else {
        std::fs::write(bank_path, BUILTIN_BANK_TOML)?;
        println!("Created question-banks/set-theory.toml");
    }

    println!("\nNext steps:");
    println!("  1. Edit question-banks/set-theory.toml or add your own bank");
    println!("  2. Run: setlearn validate --bank question-banks");
    println!("  3. Run: setlearn quiz");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# setlearn configuration
# Relative paths are resolved against the directory of this file.

question_bank = "question-banks/set-theory.toml"
# seed = 42
state_dir = ".setlearn"

[particles]
count = 120
width = 800.0
height = 600.0
link_distance = 100.0
"#;
