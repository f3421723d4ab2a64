//! CLI entry point for the Apollonian gasket renderer

use apollonian::io::cli::{run, Cli};
use clap::Parser;

fn main() -> apollonian::Result<()> {
    let cli = Cli::parse();
    run(&cli)
}
