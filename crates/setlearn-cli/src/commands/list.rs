//! The `setlearn list` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};

use setlearn_core::bank::load_banks;
use setlearn_core::config::load_config_from;

pub fn execute(bank_path: Option<PathBuf>, config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let bank_path = bank_path.or(config.question_bank);

    for bank in load_banks(bank_path.as_deref())? {
        println!("{} ({} questions)", bank.name, bank.len());
        if !bank.description.is_empty() {
            println!("{}", bank.description);
        }

        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec!["#", "ID", "Question", "Operands", "Answer"]);

        for (i, q) in bank.questions.iter().enumerate() {
            table.add_row(vec![
                (i + 1).to_string(),
                q.id.clone(),
                q.question.clone(),
                q.operands().join("\n"),
                q.answer.clone(),
            ]);
        }

        println!("{table}\n");
    }

    Ok(())
}
