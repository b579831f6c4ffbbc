// Custom error types for Word Navigate

use std::io;

use crate::buffer::BufferId;

#[derive(Debug)]
pub enum Error {
    Io(io::Error),
    ParseError(String),
    Regex(regex::Error),
    Watch(notify::Error),
    UnknownSetting(String),
    InvalidValue {
        name: String,
        value: String,
        allowed: String,
    },
    DuplicateListener {
        setting: String,
        tag: String,
    },
    UnknownListener {
        setting: String,
        tag: String,
    },
    MultipleSelections,
    NoIndex(BufferId),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::ParseError(msg) => write!(f, "Parse error: {}", msg),
            Error::Regex(err) => write!(f, "Invalid search pattern: {}", err),
            Error::Watch(err) => write!(f, "Settings watch error: {}", err),
            Error::UnknownSetting(name) => write!(f, "No such setting '{}'", name),
            Error::InvalidValue {
                name,
                value,
                allowed,
            } => write!(
                f,
                "Value '{}' for setting '{}' not supported. Allowed values are {}",
                value, name, allowed
            ),
            Error::DuplicateListener { setting, tag } => write!(
                f,
                "Tag '{}' already registered a callback for change of setting '{}'",
                tag, setting
            ),
            Error::UnknownListener { setting, tag } => write!(
                f,
                "Tag '{}' not registered a callback for change of setting '{}'",
                tag, setting
            ),
            Error::MultipleSelections => write!(f, "Multiple regions selected"),
            Error::NoIndex(id) => write!(f, "No index for buffer {}", id),
        }
    }
}

impl std::error::Error for Error {}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<regex::Error> for Error {
    fn from(err: regex::Error) -> Self {
        Error::Regex(err)
    }
}

impl From<notify::Error> for Error {
    fn from(err: notify::Error) -> Self {
        Error::Watch(err)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
