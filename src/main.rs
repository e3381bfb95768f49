//! CLI entry point for the stimulus image batch generator

use clap::Parser;
use stimgen::io::cli::{BatchProcessor, Cli};

fn main() -> stimgen::Result<()> {
    let cli = Cli::parse();
    let mut processor = BatchProcessor::new(cli);
    processor.process()
}
