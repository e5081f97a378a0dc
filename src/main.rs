//! CLI entry point for seeded grid artwork generation

use blockweave::io::cli::{BatchRunner, Cli};
use clap::Parser;

fn main() -> blockweave::Result<()> {
    let cli = Cli::parse();
    let mut runner = BatchRunner::new(cli);
    runner.process()
}
