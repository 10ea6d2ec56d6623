use clap::Parser;
use color_eyre::eyre::Result;
use puzzler::App;
use std::{io, path::PathBuf};

/// Play a 5x5 crossword from a CSV puzzle file.
#[derive(Parser)]
#[command(name = "puzzler", version, about)]
struct Cli {
    /// Puzzle file to open. If omitted or unreadable, you will be asked for one.
    puzzle: Option<PathBuf>,

    /// Show answers next to clues when listing them.
    #[arg(long)]
    reveal_answers: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let stdin = io::stdin();
    let mut app = App::new(stdin.lock(), io::stdout());
    app.show_answers = cli.reveal_answers;
    app.run(cli.puzzle.as_deref())
}
