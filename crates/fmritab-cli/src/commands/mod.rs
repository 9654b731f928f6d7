//! CLI command implementations.

pub mod derive;
pub mod relabel;
pub mod replace;

use std::path::Path;

use fmritab::TransformReport;

use crate::CommandResult;

/// Fail early with a readable message when an input file is absent.
fn require_file(path: &Path) -> CommandResult {
    if !path.exists() {
        return Err(format!("File not found: {}", path.display()).into());
    }
    Ok(())
}

fn print_json(report: &TransformReport) -> CommandResult {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}
