use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// A single per-step instruction for a vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Rotate 90° counter-clockwise (`L`).
    Left,
    /// Rotate 90° clockwise (`R`).
    Right,
    /// Move one cell along the current heading (`F`).
    Forward,
}

impl Command {
    pub fn as_char(self) -> char {
        match self {
            Command::Left => 'L',
            Command::Right => 'R',
            Command::Forward => 'F',
        }
    }

    /// Parse one token; `index` is only used to locate the token in errors.
    fn from_token(token: char, index: usize) -> Result<Self> {
        match token.to_ascii_uppercase() {
            'L' => Ok(Command::Left),
            'R' => Ok(Command::Right),
            'F' => Ok(Command::Forward),
            _ => Err(Error::UnknownCommand { token, index }),
        }
    }
}

impl TryFrom<char> for Command {
    type Error = Error;

    fn try_from(c: char) -> Result<Self> {
        Command::from_token(c, 0)
    }
}

/// Ordered, possibly empty list of commands owned by one vehicle.
///
/// The command at index `t` is executed at step `t`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandSequence {
    commands: Vec<Command>,
}

impl CommandSequence {
    /// Parse a token string such as `"FFRFFL"`. Surrounding whitespace is ignored.
    ///
    /// Errors:
    /// - `Error::UnknownCommand` on the first token outside {L, R, F}; nothing is skipped.
    pub fn parse(tokens: &str) -> Result<Self> {
        let commands = tokens
            .trim()
            .chars()
            .enumerate()
            .map(|(i, c)| Command::from_token(c, i))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { commands })
    }

    /// Command scheduled for `step`, or `None` once the sequence is exhausted.
    #[inline]
    pub fn get(&self, step: usize) -> Option<Command> {
        self.commands.get(step).copied()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Command> + '_ {
        self.commands.iter().copied()
    }
}

impl From<Vec<Command>> for CommandSequence {
    fn from(commands: Vec<Command>) -> Self {
        Self { commands }
    }
}

impl FromStr for CommandSequence {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        CommandSequence::parse(s)
    }
}

impl fmt::Display for CommandSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.commands {
            write!(f, "{}", c.as_char())?;
        }
        Ok(())
    }
}
