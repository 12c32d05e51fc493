use anyhow::Result;
use std::fs;
use std::path::Path;

use compliance_bot::intake::template_yaml;

use crate::cli::ui;

/// Write a blank answer file, or print it
pub fn execute(output: Option<&Path>) -> Result<()> {
    let yaml = template_yaml()?;
    match output {
        Some(path) => {
            fs::write(path, yaml)?;
            ui::print_success(format!("Answer template written to {}", path.display()).as_str());
            ui::print_info("Fill in the answers and pass the file with `report --answers`.");
        }
        None => print!("{}", yaml),
    }
    Ok(())
}
