//! Replace command - overwrite columns of one TSV from another.

use colored::Colorize;
use fmritab::TableTools;

use super::{print_json, require_file};
use crate::CommandResult;
use crate::cli::ReplaceArgs;

pub fn run(args: ReplaceArgs) -> CommandResult {
    require_file(&args.file1)?;
    require_file(&args.file2)?;

    let report = TableTools::new().replace_file(&args.file1, &args.file2, &args.output_file)?;

    if args.common.json {
        return print_json(&report);
    }

    if report.columns_replaced.is_empty() {
        println!(
            "{} No columns of {} appear in {}.",
            "Warning:".yellow().bold(),
            args.file2.display(),
            args.file1.display()
        );
    } else {
        println!(
            "{} {}",
            "Replaced".cyan().bold(),
            report.columns_replaced.join(", ").white().bold()
        );
    }

    if !report.skipped.is_empty() {
        println!(
            "{} {}",
            "Ignored (not in base):".dimmed(),
            report.skipped.join(", ").dimmed()
        );
    }

    println!(
        "{} {}",
        "Saved to".green().bold(),
        args.output_file.display().to_string().white()
    );

    Ok(())
}
