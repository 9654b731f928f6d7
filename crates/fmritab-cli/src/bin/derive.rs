//! `derive` binary.

use clap::Parser;
use fmritab_cli::cli::DeriveArgs;
use fmritab_cli::{commands, finish, logging};

fn main() {
    let args = DeriveArgs::parse();
    logging::init(args.common.verbose);
    finish(commands::derive::run(args));
}
