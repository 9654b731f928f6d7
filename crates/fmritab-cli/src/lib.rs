//! fmritab command-line tools: `derive`, `relabel` and `replace`.

pub mod cli;
pub mod commands;
pub mod logging;

/// Outcome of a command.
pub type CommandResult = Result<(), Box<dyn std::error::Error>>;

/// Report a failed command on stderr and exit with status 1.
pub fn finish(result: CommandResult) {
    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
