//! Parsing of presenter input lines into typed commands.

use crate::models::{Flag, TextField};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start,
    Set(TextField, String),
    Check(Flag, bool),
    Agree(bool),
    Submit,
    Retry,
    Close,
    Show,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    Unknown(String),
    UnknownField(String),
    UnknownFlag(String),
    MissingArgument(&'static str),
    ExpectedOnOff(String),
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::Unknown(word) => write!(f, "unknown command {:?}, try `help`", word),
            CommandError::UnknownField(name) => write!(f, "unknown field {:?}", name),
            CommandError::UnknownFlag(name) => write!(f, "unknown checkbox {:?}", name),
            CommandError::MissingArgument(what) => write!(f, "missing {}", what),
            CommandError::ExpectedOnOff(word) => write!(f, "expected on/off, got {:?}", word),
        }
    }
}

impl std::error::Error for CommandError {}

/// Parse one input line. An empty line means "start" on the landing view.
pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim_start()),
        None => (line, ""),
    };

    match word {
        "" | "start" => Ok(Command::Start),
        "set" => {
            let (name, value) = match rest.split_once(char::is_whitespace) {
                Some((name, value)) => (name, value.trim_start()),
                None => (rest, ""),
            };
            if name.is_empty() {
                return Err(CommandError::MissingArgument("field name"));
            }
            let field =
                TextField::parse(name).ok_or_else(|| CommandError::UnknownField(name.to_string()))?;
            Ok(Command::Set(field, value.to_string()))
        }
        "check" => {
            let (name, value) = rest
                .split_once(char::is_whitespace)
                .ok_or(CommandError::MissingArgument("checkbox name and on/off"))?;
            let flag = Flag::parse(name).ok_or_else(|| CommandError::UnknownFlag(name.to_string()))?;
            Ok(Command::Check(flag, parse_on_off(value.trim())?))
        }
        "agree" => {
            if rest.is_empty() {
                return Err(CommandError::MissingArgument("on/off"));
            }
            Ok(Command::Agree(parse_on_off(rest)?))
        }
        "submit" => Ok(Command::Submit),
        "retry" => Ok(Command::Retry),
        "close" => Ok(Command::Close),
        "show" => Ok(Command::Show),
        "help" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        other => Err(CommandError::Unknown(other.to_string())),
    }
}

fn parse_on_off(word: &str) -> Result<bool, CommandError> {
    match word {
        "on" | "yes" | "true" => Ok(true),
        "off" | "no" | "false" => Ok(false),
        other => Err(CommandError::ExpectedOnOff(other.to_string())),
    }
}
