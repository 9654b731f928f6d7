//! Relabel command - atlas labels as timeseries column names.

use colored::Colorize;
use fmritab::TableTools;

use super::{print_json, require_file};
use crate::CommandResult;
use crate::cli::RelabelArgs;

pub fn run(args: RelabelArgs) -> CommandResult {
    require_file(&args.timeseries_file)?;
    require_file(&args.atlas_ids)?;

    let (output_path, report) = TableTools::new().relabel_file(
        &args.timeseries_file,
        &args.atlas_ids,
        args.output.as_deref(),
    )?;

    if args.common.json {
        return print_json(&report);
    }

    println!(
        "{} {} columns",
        "Labelled".cyan().bold(),
        report.columns_replaced.len().to_string().white().bold()
    );
    if args.common.verbose {
        for change in &report.changes {
            println!("  {}", change.description.dimmed());
        }
    }
    println!(
        "{} {}",
        "Saved to".green().bold(),
        output_path.display().to_string().white()
    );

    Ok(())
}
