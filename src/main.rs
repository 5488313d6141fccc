//! CLI entry point for tile mosaic reconstruction

use clap::Parser;
use tilemosaic::io::cli::{Cli, FileProcessor};

fn main() -> tilemosaic::Result<()> {
    let cli = Cli::parse();
    let mut processor = FileProcessor::new(cli);
    processor.process()
}
