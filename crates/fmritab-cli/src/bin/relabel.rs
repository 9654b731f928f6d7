//! `relabel` binary.

use clap::Parser;
use fmritab_cli::cli::RelabelArgs;
use fmritab_cli::{commands, finish, logging};

fn main() {
    let args = RelabelArgs::parse();
    logging::init(args.common.verbose);
    finish(commands::relabel::run(args));
}
