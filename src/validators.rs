// Validators turning raw setting values into typed ones

use std::fmt;
use std::str::FromStr;

use log::LevelFilter;

use crate::error::Error;

pub trait Validator {
    type Value: Clone + PartialEq + fmt::Display;

    /// The canonical value for `raw`, or `None` when it is not allowed.
    fn validate(&self, raw: &str) -> Option<Self::Value>;

    fn allowed_values(&self) -> String;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BooleanValidator;

impl Validator for BooleanValidator {
    type Value = bool;

    fn validate(&self, raw: &str) -> Option<bool> {
        match raw.trim().to_lowercase().as_str() {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        }
    }

    fn allowed_values(&self) -> String {
        "'true' or 'false'".to_string()
    }
}

#[derive(Debug, Clone)]
pub struct ListValidator {
    allowed: Vec<&'static str>,
}

impl ListValidator {
    pub fn new(allowed: &[&'static str]) -> Self {
        Self {
            allowed: allowed.to_vec(),
        }
    }
}

impl Validator for ListValidator {
    type Value = String;

    fn validate(&self, raw: &str) -> Option<String> {
        let raw = raw.trim();
        self.allowed
            .iter()
            .find(|allowed| allowed.eq_ignore_ascii_case(raw))
            .map(|allowed| allowed.to_string())
    }

    fn allowed_values(&self) -> String {
        format!("{:?}", self.allowed)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct IntegerRangeValidator {
    min: i64,
    max: i64,
}

impl IntegerRangeValidator {
    pub fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }
}

impl Validator for IntegerRangeValidator {
    type Value = i64;

    fn validate(&self, raw: &str) -> Option<i64> {
        raw.trim()
            .parse::<i64>()
            .ok()
            .filter(|value| (self.min..=self.max).contains(value))
    }

    fn allowed_values(&self) -> String {
        format!("{} to {}", self.min, self.max)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
}

impl LogLevel {
    pub const NAMES: [&'static str; 4] = ["debug", "info", "warning", "error"];

    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warning => "warning",
            LogLevel::Error => "error",
        }
    }

    pub fn to_level_filter(self) -> LevelFilter {
        match self {
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Warning => LevelFilter::Warn,
            LogLevel::Error => LevelFilter::Error,
        }
    }
}

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel::Warning
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warning" => Ok(LogLevel::Warning),
            "error" => Ok(LogLevel::Error),
            _ => Err(Error::ParseError(format!("Unknown log level: {}", s))),
        }
    }
}

/// Log levels, checked against the level names
#[derive(Debug, Clone)]
pub struct LogLevelValidator {
    names: ListValidator,
}

impl LogLevelValidator {
    pub fn new() -> Self {
        Self {
            names: ListValidator::new(&LogLevel::NAMES),
        }
    }
}

impl Default for LogLevelValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for LogLevelValidator {
    type Value = LogLevel;

    fn validate(&self, raw: &str) -> Option<LogLevel> {
        self.names.validate(raw).and_then(|name| name.parse().ok())
    }

    fn allowed_values(&self) -> String {
        self.names.allowed_values()
    }
}
