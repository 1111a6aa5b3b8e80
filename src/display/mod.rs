//! Display formatting for terminal output
//!
//! The models carry no presentation; everything about how a record or a
//! message looks on screen lives here.

pub mod record;

use owo_colors::{OwoColorize, Style};

pub use record::{format_birthday, format_page, format_record};

/// Terminal color scheme, switchable off for pipes and tests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// A palette that never emits escape codes
    pub fn plain() -> Self {
        Self::new(false)
    }

    fn paint(&self, text: &str, style: Style) -> String {
        if self.enabled {
            text.style(style).to_string()
        } else {
            text.to_string()
        }
    }

    /// Field labels in record listings
    pub fn label(&self, text: &str) -> String {
        self.paint(text, Style::new().magenta())
    }

    /// Field values in record listings
    pub fn value(&self, text: &str) -> String {
        self.paint(text, Style::new().bright_cyan())
    }

    pub fn prompt(&self, text: &str) -> String {
        self.paint(text, Style::new().bright_blue())
    }

    pub fn success(&self, text: &str) -> String {
        self.paint(text, Style::new().bright_green())
    }

    pub fn error(&self, text: &str) -> String {
        self.paint(text, Style::new().bright_red())
    }

    pub fn banner(&self, text: &str) -> String {
        self.paint(text, Style::new().reversed())
    }
}
