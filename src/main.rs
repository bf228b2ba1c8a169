//! CLI entry point for the N-Queens trace recorder

use clap::Parser;
use queens_trace::io::cli::{Cli, Runner};
use queens_trace::io::logging::init_logging;

fn main() -> queens_trace::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.quiet);
    let runner = Runner::new(cli);
    runner.run().map(|_summary| ())
}
