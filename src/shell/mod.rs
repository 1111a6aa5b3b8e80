//! Interactive command shell
//!
//! Reads one command per line, runs it against an in-memory
//! [`AddressBook`] and writes the result. User mistakes are reported and the
//! loop carries on; only I/O failures on the terminal end the session.

pub mod command;

use std::io::{BufRead, Write};

use chrono::{Local, NaiveDate};
use tracing::debug;

use crate::config::Settings;
use crate::display::{format_page, format_record, Palette};
use crate::error::ContactResult;
use crate::models::AddressBook;

pub use command::{parse_page_size, Command, CommandError};

const MAIN_PROMPT: &str = "Enter a command (add/show(2)/find/edit/delete/exit(6)): ";
const PAGE_SIZE_PROMPT: &str = "Enter the number of records to display: ";
const MORE_PROMPT: &str =
    "Show more? Press(2) to continue or press any key to return to the main menu: ";

const HELP_TEXT: &str = "\
Commands:
  add <name> <phone1> [phone2] [birthday]   Add a contact (birthday as YYYY-MM-DD)
  show [page size]   (2)                    List contacts page by page
  find <name>                               Show one contact
  edit <name> <old phone> <new phone>       Replace a phone number
  delete <name>                             Remove a contact
  help                                      Show this help
  exit               (6)                    Quit";

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// A shell session over any line source and output sink
pub struct Shell<R, W> {
    input: R,
    output: W,
    book: AddressBook,
    settings: Settings,
    palette: Palette,
    today: fn() -> NaiveDate,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Create a session with an empty address book
    pub fn new(input: R, output: W, settings: Settings) -> Self {
        let palette = Palette::new(settings.color);
        Self {
            input,
            output,
            book: AddressBook::new(),
            settings,
            palette,
            today: local_today,
        }
    }

    /// Use a fixed clock for birthday countdowns
    pub fn with_clock(mut self, today: fn() -> NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    /// Run until `exit` or end of input
    pub fn run(&mut self) -> ContactResult<()> {
        loop {
            let Some(line) = self.read_line(MAIN_PROMPT)? else {
                self.say_goodbye()?;
                return Ok(());
            };

            match Command::parse(&line) {
                Ok(None) => continue,
                Ok(Some(Command::Exit)) => {
                    self.say_goodbye()?;
                    return Ok(());
                }
                Ok(Some(command)) => self.execute(command)?,
                Err(e) => self.report(&e)?,
            }
        }
    }

    /// Run a single command
    pub fn execute(&mut self, command: Command) -> ContactResult<()> {
        debug!(?command, "executing");

        match command {
            Command::Add {
                name,
                phone1,
                phone2,
                birthday,
            } => {
                match self.book.add_contact(
                    &name,
                    &phone1,
                    phone2.as_deref(),
                    birthday.as_deref(),
                ) {
                    Ok(()) => {
                        let message = format!("Contact '{}' added.", name);
                        self.write_line(&self.palette.success(&message))?;
                    }
                    Err(e) => self.report(&e)?,
                }
            }

            Command::Show { page_size } => self.show(page_size)?,

            Command::Find { name } => match self.book.find(&name) {
                Some(record) => {
                    let line = format_record(
                        record,
                        (self.today)(),
                        &self.settings.date_format,
                        &self.palette,
                    );
                    self.write_line(&line)?;
                }
                None => self.contact_not_found(&name)?,
            },

            Command::Edit {
                name,
                old_phone,
                new_phone,
            } => match self.book.find_mut(&name) {
                Some(record) => match record.edit_phone(&old_phone, &new_phone) {
                    Ok(()) => {
                        let message = format!("Phone number for '{}' edited successfully.", name);
                        self.write_line(&self.palette.success(&message))?;
                    }
                    Err(e) => self.report(&e)?,
                },
                None => self.contact_not_found(&name)?,
            },

            Command::Delete { name } => match self.book.delete(&name) {
                Some(_) => {
                    let message = format!("Contact '{}' deleted.", name);
                    self.write_line(&self.palette.success(&message))?;
                }
                None => self.contact_not_found(&name)?,
            },

            Command::Help => self.write_line(HELP_TEXT)?,

            Command::Exit => self.say_goodbye()?,
        }

        Ok(())
    }

    fn show(&mut self, page_size: Option<usize>) -> ContactResult<()> {
        let page_size = match page_size {
            Some(size) => size,
            None => {
                let Some(answer) = self.read_line(PAGE_SIZE_PROMPT)? else {
                    return Ok(());
                };
                if answer.is_empty() {
                    self.settings.page_size
                } else {
                    match parse_page_size(&answer) {
                        Ok(size) => size,
                        Err(e) => return self.report(&e),
                    }
                }
            }
        };

        let pages = match self.book.iterate(page_size) {
            Ok(pages) => pages,
            Err(e) => return self.report(&e),
        };

        if self.book.is_empty() {
            return self.write_line("No contacts found.");
        }

        let total = pages.len();
        let today = (self.today)();
        for (number, page) in pages.enumerate() {
            let text = format_page(&page, today, &self.settings.date_format, &self.palette);
            self.write_line(&text)?;

            if number + 1 == total {
                break;
            }
            match self.read_line(MORE_PROMPT)? {
                Some(answer) if answer == "2" => continue,
                _ => break,
            }
        }

        Ok(())
    }

    /// Prompt and read one trimmed line; `None` at end of input
    fn read_line(&mut self, prompt: &str) -> ContactResult<Option<String>> {
        write!(self.output, "{}", self.palette.prompt(prompt))?;
        self.output.flush()?;

        let mut buffer = String::new();
        if self.input.read_line(&mut buffer)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(buffer.trim().to_string()))
    }

    fn write_line(&mut self, text: &str) -> ContactResult<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    fn report(&mut self, err: &dyn std::fmt::Display) -> ContactResult<()> {
        let message = format!("Error: {}", err);
        self.write_line(&self.palette.error(&message))
    }

    fn contact_not_found(&mut self, name: &str) -> ContactResult<()> {
        let message = format!("Contact '{}' not found.", name);
        self.write_line(&self.palette.error(&message))
    }

    fn say_goodbye(&mut self) -> ContactResult<()> {
        self.write_line(&self.palette.banner(" Goodbye! "))
    }
}
