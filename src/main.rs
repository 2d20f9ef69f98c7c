//! CLI entry point for maze generation and solving

use clap::Parser;
use mazewave::io::cli::{Cli, MazeRunner};

fn main() -> mazewave::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let runner = MazeRunner::new(cli);
    runner.run()
}
