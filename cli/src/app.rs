use crate::{
    command::Command,
    help::{
        ALREADY_CORRECT, ENTER_GUESS, HELP_MENU, INVALID_OPTION, OPTION_PROMPT, PUZZLE_FILE_ERROR,
        PUZZLE_PROMPT, SOLVED,
    },
};
use color_eyre::eyre::Result;
use log::{debug, info};
use puzzler_core::{ClueKey, Crossword, CrosswordError, Direction};
use puzzler_external::load_crossword;
use std::{
    io::{BufRead, Write},
    path::Path,
};

/// What the session loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Interactive crossword session over a line-based input and an output.
pub struct App<R, W> {
    input: R,
    output: W,
    /// List clues together with their answers.
    pub show_answers: bool,
}

impl<R: BufRead, W: Write> App<R, W> {
    /// Construct a new instance of [`App`].
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            show_answers: false,
        }
    }

    /// Run the session until the player quits, solves the puzzle, or input ends.
    ///
    /// If `initial` names a puzzle that loads, play starts with it; otherwise
    /// the player is asked for a filename until one loads.
    pub fn run(mut self, initial: Option<&Path>) -> Result<()> {
        let loaded = match initial {
            Some(path) => self.try_load(path)?,
            None => None,
        };
        let mut puzzle = match loaded {
            Some(puzzle) => puzzle,
            None => match self.prompt_for_puzzle()? {
                Some(puzzle) => puzzle,
                None => return Ok(()),
            },
        };
        self.show_puzzle(&puzzle)?;

        loop {
            let Some(line) = self.prompt(OPTION_PROMPT)? else {
                break;
            };

            let command = match line.parse::<Command>() {
                Ok(command) if command.clue_key().is_none_or(|key| puzzle.contains(key)) => {
                    command
                }
                Ok(command) => {
                    debug!("no clue for {command:?}");
                    writeln!(self.output, "{INVALID_OPTION}")?;
                    continue;
                }
                Err(err) => {
                    debug!("rejected `{line}`: {err}");
                    writeln!(self.output, "{INVALID_OPTION}")?;
                    continue;
                }
            };

            if self.execute(&mut puzzle, command)? == Flow::Quit {
                break;
            }

            if puzzle.is_solved() {
                info!("puzzle solved");
                writeln!(self.output, "{SOLVED}")?;
                break;
            }
        }

        self.output.flush()?;
        Ok(())
    }

    fn execute(&mut self, puzzle: &mut Crossword, command: Command) -> Result<Flow> {
        debug!("executing {command:?}");
        match command {
            Command::ListClues(count) => self.list_clues(puzzle, count.unwrap_or(0))?,
            Command::Guess(key) => return self.guess(puzzle, &key),
            Command::Reveal(key) => {
                puzzle.reveal(&key)?;
                self.show_grid(puzzle)?;
            }
            Command::Hint(key) => self.hint(puzzle, &key)?,
            Command::Help => writeln!(self.output, "{HELP_MENU}")?,
            Command::Restart => match self.prompt_for_puzzle()? {
                Some(new_puzzle) => {
                    *puzzle = new_puzzle;
                    self.show_puzzle(puzzle)?;
                }
                None => return Ok(Flow::Quit),
            },
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    /// Ask for a guess until one fits the clue.
    fn guess(&mut self, puzzle: &mut Crossword, key: &ClueKey) -> Result<Flow> {
        loop {
            let Some(text) = self.prompt(ENTER_GUESS)? else {
                return Ok(Flow::Quit);
            };

            match puzzle.guess(key, &text.to_uppercase()) {
                Ok(()) => {
                    self.show_grid(puzzle)?;
                    return Ok(Flow::Continue);
                }
                Err(err) => {
                    debug!("rejected guess `{text}` for {key}: {err}");
                    writeln!(self.output, "{err}.\n")?;
                }
            }
        }
    }

    fn hint(&mut self, puzzle: &Crossword, key: &ClueKey) -> Result<()> {
        let clue = puzzle
            .clue(key)
            .ok_or(CrosswordError::ClueNotFound(*key))?;
        match puzzle.find_first_error(key)? {
            Some(offset) => {
                let letter = clue.answer_letter(offset).unwrap_or('?');
                writeln!(
                    self.output,
                    "Letter {} is wrong, it should be {}",
                    offset + 1,
                    letter
                )?;
            }
            None => writeln!(self.output, "{ALREADY_CORRECT}")?,
        }
        Ok(())
    }

    /// Print up to `count` clues of each direction; `0` prints them all.
    fn list_clues(&mut self, puzzle: &Crossword, count: usize) -> Result<()> {
        for direction in Direction::ALL {
            let clues = puzzle.clues_by_direction(direction);
            let limit = if count == 0 { clues.len() } else { count };

            writeln!(self.output, "\n{direction}")?;
            for clue in clues.into_iter().take(limit) {
                if self.show_answers {
                    writeln!(self.output, "{}", clue.describe_with_answer())?;
                } else {
                    writeln!(self.output, "{clue}")?;
                }
            }
        }
        Ok(())
    }

    fn show_grid(&mut self, puzzle: &Crossword) -> Result<()> {
        writeln!(self.output, "{puzzle}")?;
        writeln!(self.output, "Filled: {}%", puzzle.completion_percentage())?;
        Ok(())
    }

    /// Everything shown when a puzzle is first opened.
    fn show_puzzle(&mut self, puzzle: &Crossword) -> Result<()> {
        self.list_clues(puzzle, 0)?;
        writeln!(self.output)?;
        self.show_grid(puzzle)?;
        writeln!(self.output, "{HELP_MENU}")?;
        Ok(())
    }

    /// Ask for puzzle filenames until one loads. `None` if input runs out first.
    fn prompt_for_puzzle(&mut self) -> Result<Option<Crossword>> {
        loop {
            let Some(filename) = self.prompt(PUZZLE_PROMPT)? else {
                return Ok(None);
            };
            if let Some(puzzle) = self.try_load(Path::new(&filename))? {
                return Ok(Some(puzzle));
            }
        }
    }

    fn try_load(&mut self, path: &Path) -> Result<Option<Crossword>> {
        match load_crossword(path) {
            Ok(puzzle) => {
                info!("loaded puzzle from {}", path.display());
                Ok(Some(puzzle))
            }
            Err(err) => {
                info!("could not load {}: {err}", path.display());
                writeln!(self.output, "{PUZZLE_FILE_ERROR}")?;
                Ok(None)
            }
        }
    }

    /// Print `prompt` and read one trimmed line. `None` once input is exhausted.
    fn prompt(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
