//! Command grammar for the interactive shell
//!
//! Lines are split on whitespace; the first token picks the command
//! (case-insensitive) and the rest are its arguments.

use thiserror::Error;

/// A parsed shell command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add {
        name: String,
        phone1: String,
        phone2: Option<String>,
        birthday: Option<String>,
    },
    /// List contacts page by page; prompts for a size when none is given
    Show { page_size: Option<usize> },
    Find { name: String },
    Edit {
        name: String,
        old_phone: String,
        new_phone: String,
    },
    Delete { name: String },
    Help,
    Exit,
}

/// Errors in what the user typed, before any contact is touched
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command '{0}'. Type 'help' to see available commands.")]
    Unknown(String),

    #[error("Invalid arguments for '{command}'. Usage: {usage}")]
    Usage {
        command: &'static str,
        usage: &'static str,
    },

    #[error("Invalid number '{0}'. Please enter a valid number.")]
    InvalidNumber(String),
}

pub const ADD_USAGE: &str = "add <name> <phone1> [phone2] [birthday YYYY-MM-DD]";
pub const SHOW_USAGE: &str = "show [page size]";
pub const FIND_USAGE: &str = "find <name>";
pub const EDIT_USAGE: &str = "edit <name> <old phone> <new phone>";
pub const DELETE_USAGE: &str = "delete <name>";

/// Parse a page size typed by the user
pub fn parse_page_size(raw: &str) -> Result<usize, CommandError> {
    raw.trim()
        .parse::<usize>()
        .map_err(|_| CommandError::InvalidNumber(raw.trim().to_string()))
}

fn usage(command: &'static str, usage: &'static str) -> CommandError {
    CommandError::Usage { command, usage }
}

impl Command {
    /// Parse one input line; blank lines yield `None`
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let mut tokens = line.split_whitespace();
        let Some(verb) = tokens.next() else {
            return Ok(None);
        };
        let args: Vec<String> = tokens.map(str::to_string).collect();

        let command = match verb.to_lowercase().as_str() {
            "add" => match args.as_slice() {
                [name, phone1, rest @ ..] if rest.len() <= 2 => Self::Add {
                    name: name.clone(),
                    phone1: phone1.clone(),
                    phone2: rest.first().cloned(),
                    birthday: rest.get(1).cloned(),
                },
                _ => return Err(usage("add", ADD_USAGE)),
            },
            "show" | "2" => match args.as_slice() {
                [] => Self::Show { page_size: None },
                [size] => Self::Show {
                    page_size: Some(parse_page_size(size)?),
                },
                _ => return Err(usage("show", SHOW_USAGE)),
            },
            "find" => match args.as_slice() {
                [name] => Self::Find { name: name.clone() },
                _ => return Err(usage("find", FIND_USAGE)),
            },
            "edit" => match args.as_slice() {
                [name, old_phone, new_phone] => Self::Edit {
                    name: name.clone(),
                    old_phone: old_phone.clone(),
                    new_phone: new_phone.clone(),
                },
                _ => return Err(usage("edit", EDIT_USAGE)),
            },
            "delete" => match args.as_slice() {
                [name] => Self::Delete { name: name.clone() },
                _ => return Err(usage("delete", DELETE_USAGE)),
            },
            "help" => Self::Help,
            "exit" | "6" => Self::Exit,
            _ => return Err(CommandError::Unknown(verb.to_string())),
        };

        Ok(Some(command))
    }
}
