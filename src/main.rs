//! CLI entry point for symmetric kolam generation

use clap::Parser;
use kolamtile::io::cli::{BatchProcessor, Cli};

fn main() -> kolamtile::Result<()> {
    let cli = Cli::parse();
    let mut processor = BatchProcessor::new(cli);
    processor.process().map(drop)
}
