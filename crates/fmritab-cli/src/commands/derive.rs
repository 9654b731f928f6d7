//! Derive command - first differences and squares of one column.

use colored::Colorize;
use fmritab::{NumericPolicy, TableTools, TableToolsConfig};

use super::{print_json, require_file};
use crate::CommandResult;
use crate::cli::DeriveArgs;

pub fn run(args: DeriveArgs) -> CommandResult {
    require_file(&args.input_file)?;

    let numeric = if args.strict {
        NumericPolicy::Strict
    } else {
        NumericPolicy::Permissive
    };
    let config = TableToolsConfig::default()
        .with_numeric(numeric)
        .with_decimals(args.decimals);

    let report = TableTools::with_config(config).derive_file(
        &args.input_file,
        &args.output_file,
        &args.label,
    )?;

    if args.common.json {
        return print_json(&report);
    }

    println!(
        "Calculations completed. Results saved to {}",
        args.output_file.display().to_string().cyan()
    );

    if args.common.verbose {
        for change in &report.changes {
            println!(
                "  {:40} {} missing",
                change.column.white().bold(),
                change.missing_values
            );
        }
    }

    Ok(())
}
