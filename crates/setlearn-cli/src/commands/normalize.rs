//! The `setlearn normalize` command.

use anyhow::Result;

use setlearn_core::answer::normalize_answer;

pub fn execute(text: String, against: Option<String>) -> Result<()> {
    let normalized = normalize_answer(&text);
    println!("{normalized}");

    if let Some(canonical) = against {
        let expected = normalize_answer(&canonical);
        if normalized == expected {
            println!("match");
        } else {
            println!("no match (expected {expected})");
        }
    }

    Ok(())
}
