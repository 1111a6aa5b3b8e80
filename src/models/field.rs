//! Validated contact fields
//!
//! Each field wraps the raw string the user typed and only exists if that
//! string passed the field's format rule. Updates go through [`Field::set`],
//! which parses first and assigns second, so a rejected value never replaces
//! the previous one.

use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

use crate::error::{ContactError, ContactResult};

static NAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z]+$").expect("Failed to compile name regex"));

/// Date format accepted for birthdays
pub const BIRTHDAY_FORMAT: &str = "%Y-%m-%d";

/// Number of digits in a phone number
pub const PHONE_DIGITS: usize = 10;

/// A scalar value guarded by a format rule
pub trait Field: fmt::Display + Sized {
    /// Field name used in error messages
    const FIELD: &'static str;

    /// Validate `raw` and build the field
    fn parse(raw: &str) -> ContactResult<Self>;

    /// The raw value as originally entered
    fn as_str(&self) -> &str;

    /// Replace the value, leaving it untouched if `raw` is rejected
    fn set(&mut self, raw: &str) -> ContactResult<()> {
        *self = Self::parse(raw)?;
        Ok(())
    }
}

fn invalid(field: &'static str, value: &str, rule: &'static str) -> ContactError {
    ContactError::Validation {
        field,
        value: value.to_string(),
        rule,
    }
}

/// A contact name: one or more ASCII letters
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name(String);

impl Field for Name {
    const FIELD: &'static str = "name";

    fn parse(raw: &str) -> ContactResult<Self> {
        if raw.is_empty() {
            return Err(invalid(Self::FIELD, raw, "name cannot be empty"));
        }
        if !NAME_REGEX.is_match(raw) {
            return Err(invalid(Self::FIELD, raw, "name should only contain letters"));
        }
        Ok(Self(raw.to_string()))
    }

    fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A phone number: exactly ten ASCII digits
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Field for Phone {
    const FIELD: &'static str = "phone";

    fn parse(raw: &str) -> ContactResult<Self> {
        if raw.len() != PHONE_DIGITS || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid(Self::FIELD, raw, "phone must be exactly 10 digits"));
        }
        Ok(Self(raw.to_string()))
    }

    fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A birthday in `YYYY-MM-DD` form, kept both as typed and as a date
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Birthday {
    raw: String,
    date: NaiveDate,
}

impl Birthday {
    /// The parsed calendar date
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// The birthday's month and day placed in `year`
    ///
    /// February 29 falls back to February 28 in non-leap years.
    pub fn anniversary_in(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.date.month(), self.date.day())
            .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
    }

    /// Whole days from `today` until the next anniversary (0 when it is today)
    pub fn days_until(&self, today: NaiveDate) -> Option<i64> {
        let this_year = self.anniversary_in(today.year())?;
        let next = if this_year < today {
            self.anniversary_in(today.year() + 1)?
        } else {
            this_year
        };
        Some((next - today).num_days())
    }
}

impl Field for Birthday {
    const FIELD: &'static str = "birthday";

    fn parse(raw: &str) -> ContactResult<Self> {
        let date = NaiveDate::parse_from_str(raw, BIRTHDAY_FORMAT)
            .map_err(|_| invalid(Self::FIELD, raw, "please use YYYY-MM-DD format"))?;
        Ok(Self {
            raw: raw.to_string(),
            date,
        })
    }

    fn as_str(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
