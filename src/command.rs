// Commands the host can invoke

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    PreviousSameWord,
    NextSameWord,
    PreviousWordInLine,
    NextWordInLine,
}

impl Command {
    pub const ALL: [Command; 4] = [
        Command::PreviousSameWord,
        Command::NextSameWord,
        Command::PreviousWordInLine,
        Command::NextWordInLine,
    ];

    /// Name the host binds the command under
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::PreviousSameWord => "word_navigate_previous",
            Command::NextSameWord => "word_navigate_next",
            Command::PreviousWordInLine => "word_navigate_previous_in_line",
            Command::NextWordInLine => "word_navigate_next_in_line",
        }
    }

    pub fn is_forward(&self) -> bool {
        matches!(self, Command::NextSameWord | Command::NextWordInLine)
    }

    pub fn is_in_line(&self) -> bool {
        matches!(self, Command::PreviousWordInLine | Command::NextWordInLine)
    }

    pub fn description(&self) -> &'static str {
        match self {
            Command::PreviousSameWord => "previous word",
            Command::NextSameWord => "next word",
            Command::PreviousWordInLine => "previous word on the same line",
            Command::NextWordInLine => "next word on the same line",
        }
    }
}

pub fn parse_command(input: &str) -> Result<Command> {
    let input = input.trim();

    if input.is_empty() {
        return Err(Error::ParseError("Empty command".to_string()));
    }

    // Accept the short forms used on the command line
    match input {
        "word_navigate_previous" | "previous" | "prev" => Ok(Command::PreviousSameWord),
        "word_navigate_next" | "next" => Ok(Command::NextSameWord),
        "word_navigate_previous_in_line" | "previous_in_line" | "prev_in_line" => {
            Ok(Command::PreviousWordInLine)
        }
        "word_navigate_next_in_line" | "next_in_line" => Ok(Command::NextWordInLine),
        _ => Err(Error::ParseError(format!("Unknown command: {}", input))),
    }
}
