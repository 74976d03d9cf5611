//! logotrim CLI entrypoint.
//!
//! Provides a thin wrapper over the `cli` module: parse args, run the
//! mask-and-trim pass, and report the outcome.
//! For programmatic use, prefer the library API (`logotrim::api`).

use clap::Parser;

mod cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = cli::CliArgs::parse();
    cli::run(args)
}
