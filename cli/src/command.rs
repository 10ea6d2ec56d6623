//! Parsing of the one-line commands typed at the option prompt.

use puzzler_core::{ClueKey, Direction};
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `C [n]`: list up to `n` clues per direction, or all of them.
    ListClues(Option<usize>),
    /// `G i j A/D`
    Guess(ClueKey),
    /// `R i j A/D`
    Reveal(ClueKey),
    /// `T i j A/D`
    Hint(ClueKey),
    /// `H`
    Help,
    /// `S`
    Restart,
    /// `Q`
    Quit,
}

impl Command {
    /// The clue this command acts on, if any.
    pub fn clue_key(&self) -> Option<&ClueKey> {
        match self {
            Command::Guess(key) | Command::Reveal(key) | Command::Hint(key) => Some(key),
            _ => None,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command `{0}`")]
    Unknown(String),
    #[error("wrong number of arguments for `{0}`")]
    Arity(char),
    #[error("invalid argument `{0}`")]
    Argument(String),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = s.split_whitespace().collect();
        let (&name, args) = tokens.split_first().ok_or(CommandError::Empty)?;

        let mut chars = name.chars();
        let code = match (chars.next(), chars.next()) {
            (Some(c), None) => c,
            _ => return Err(CommandError::Unknown(name.to_string())),
        };

        match code {
            'H' | 'S' | 'Q' => {
                if !args.is_empty() {
                    return Err(CommandError::Arity(code));
                }
                Ok(match code {
                    'H' => Command::Help,
                    'S' => Command::Restart,
                    _ => Command::Quit,
                })
            }
            'C' => match args {
                [] => Ok(Command::ListClues(None)),
                [count] => count
                    .parse()
                    .map(|n| Command::ListClues(Some(n)))
                    .map_err(|_| CommandError::Argument(count.to_string())),
                _ => Err(CommandError::Arity(code)),
            },
            'G' | 'R' | 'T' => {
                let key = parse_key(code, args)?;
                Ok(match code {
                    'G' => Command::Guess(key),
                    'R' => Command::Reveal(key),
                    _ => Command::Hint(key),
                })
            }
            _ => Err(CommandError::Unknown(name.to_string())),
        }
    }
}

fn parse_key(code: char, args: &[&str]) -> Result<ClueKey, CommandError> {
    let &[row, col, dir] = args else {
        return Err(CommandError::Arity(code));
    };

    let index = |s: &str| {
        s.parse::<usize>()
            .map_err(|_| CommandError::Argument(s.to_string()))
    };
    let mut dir_chars = dir.chars();
    let direction = match (dir_chars.next(), dir_chars.next()) {
        (Some(c), None) => Direction::from_code(c),
        _ => None,
    }
    .ok_or_else(|| CommandError::Argument(dir.to_string()))?;

    Ok(ClueKey::new(index(row)?, index(col)?, direction))
}
