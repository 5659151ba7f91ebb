use std::str::FromStr;

use log::debug;

use crate::browser_history::BrowserHistoryStack;
use crate::error::{Error, Result};

const NONE: &str = "none";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Push(String),
    Pop,
    Peek,
    Contains(String),
    Size,
    IsEmpty,
    Print,
}

impl Command {
    /// Run the command against `history`, returning the text to show for it.
    pub fn apply(&self, history: &mut BrowserHistoryStack<String>) -> String {
        match self {
            Command::Push(url) => {
                history.push(url.clone());
                String::new()
            }
            Command::Pop => history.pop().unwrap_or_else(|| NONE.to_owned()),
            Command::Peek => history
                .peek()
                .cloned()
                .unwrap_or_else(|| NONE.to_owned()),
            Command::Contains(url) => history.contains(url).to_string(),
            Command::Size => history.size().to_string(),
            Command::IsEmpty => history.is_empty().to_string(),
            Command::Print => {
                history.print_stack();
                history.stack_string()
            }
        }
    }
}

fn with_argument(command: &'static str, argument: &str) -> Result<String> {
    if argument.is_empty() {
        Err(Error::MissingArgument { command })
    } else {
        Ok(argument.to_owned())
    }
}

fn without_argument(command: &'static str, argument: &str, c: Command) -> Result<Command> {
    if argument.is_empty() {
        Ok(c)
    } else {
        Err(Error::UnexpectedArgument {
            command,
            argument: argument.to_owned(),
        })
    }
}

impl FromStr for Command {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let (keyword, argument) = match s.split_once(char::is_whitespace) {
            Some((keyword, argument)) => (keyword, argument.trim()),
            None => (s, ""),
        };

        match keyword {
            "push" => Ok(Command::Push(with_argument("push", argument)?)),
            "contains" => Ok(Command::Contains(with_argument("contains", argument)?)),
            "pop" => without_argument("pop", argument, Command::Pop),
            "peek" => without_argument("peek", argument, Command::Peek),
            "size" => without_argument("size", argument, Command::Size),
            "empty" => without_argument("empty", argument, Command::IsEmpty),
            "print" => without_argument("print", argument, Command::Print),
            _ => Err(Error::UnknownCommand(keyword.to_owned())),
        }
    }
}

/// Parse a whole script, skipping blank lines and `#` comments.
pub fn parse_script(script: &str) -> Result<Vec<Command>> {
    script
        .lines()
        .enumerate()
        .filter(|(_, line)| {
            let line = line.trim();
            !line.is_empty() && !line.starts_with('#')
        })
        .map(|(i, line)| {
            line.parse::<Command>().map_err(|e| Error::InvalidLine {
                line: i + 1,
                source: Box::new(e),
            })
        })
        .collect()
}

/// Apply every command of `script` in order. Nothing runs if any line is bad.
pub fn run_script(script: &str, history: &mut BrowserHistoryStack<String>) -> Result<Vec<String>> {
    let commands = parse_script(script)?;
    debug!("running {} commands", commands.len());
    Ok(commands.iter().map(|c| c.apply(history)).collect())
}
