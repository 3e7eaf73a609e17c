//! iconforge CLI entrypoint.
//!
//! Provides a thin wrapper over the `cli` module: parse args, generate the
//! icon set, and exit with appropriate status. Individual conversion
//! failures are logged, not fatal. For programmatic use, prefer the
//! library API (`iconforge::api`).

use clap::Parser;

mod cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = cli::CliArgs::parse();
    cli::run(args)
}
