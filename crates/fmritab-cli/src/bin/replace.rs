//! `replace` binary.

use clap::Parser;
use fmritab_cli::cli::ReplaceArgs;
use fmritab_cli::{commands, finish, logging};

fn main() {
    let args = ReplaceArgs::parse();
    logging::init(args.common.verbose);
    finish(commands::replace::run(args));
}
