//! The `setlearn venn` command.

use std::path::PathBuf;

use anyhow::Result;

use setlearn_core::notation::calculate_diagram;
use setlearn_report::svg::write_venn_svg;

pub fn execute(a: String, b: String, svg: Option<PathBuf>, format: String) -> Result<()> {
    let regions = calculate_diagram(&a, &b)?;

    match format.as_str() {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&regions)?);
        }
        "text" => {
            println!("Only in A:    {}", display_group(&regions.only_a));
            println!("Only in B:    {}", display_group(&regions.only_b));
            println!("A ∩ B:        {}", display_group(&regions.intersection));
            println!("A ∪ B:        {}", display_group(&regions.union()));
        }
        other => anyhow::bail!("unknown format '{other}' (expected text or json)"),
    }

    if let Some(path) = svg {
        write_venn_svg(&regions, &path)?;
        eprintln!("Diagram written to {}", path.display());
    }

    Ok(())
}

fn display_group(elements: &[String]) -> String {
    format!("{{{}}}", elements.join(", "))
}
