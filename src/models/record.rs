//! Contact record model
//!
//! A record is one person: a name, up to two phone numbers and an optional
//! birthday. The name is fixed once the record exists; phones are added,
//! edited and removed afterwards.

use chrono::{Local, NaiveDate};

use super::field::{Birthday, Field, Name, Phone};
use crate::error::{ContactError, ContactResult};

/// Maximum number of phones a record may hold
pub const MAX_PHONES: usize = 2;

/// A single contact
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    name: Name,
    phones: Vec<Phone>,
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a record, validating the name and the birthday if given
    pub fn new(name: &str, birthday: Option<&str>) -> ContactResult<Self> {
        let name = Name::parse(name)?;
        let birthday = birthday.map(Birthday::parse).transpose()?;
        Ok(Self::from_parts(name, birthday))
    }

    /// Create a record from already validated fields
    pub fn from_parts(name: Name, birthday: Option<Birthday>) -> Self {
        Self {
            name,
            phones: Vec::with_capacity(MAX_PHONES),
            birthday,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Phones in insertion order
    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate and append a phone
    ///
    /// Capacity is checked before format, so a full record reports that it
    /// is full whatever `raw` looks like.
    pub fn add_phone(&mut self, raw: &str) -> ContactResult<()> {
        self.ensure_capacity()?;
        let phone = Phone::parse(raw)?;
        self.push_phone(phone)
    }

    /// Append an already validated phone
    pub fn push_phone(&mut self, phone: Phone) -> ContactResult<()> {
        self.ensure_capacity()?;
        self.phones.push(phone);
        Ok(())
    }

    fn ensure_capacity(&self) -> ContactResult<()> {
        if self.phones.len() >= MAX_PHONES {
            return Err(ContactError::Capacity { max: MAX_PHONES });
        }
        Ok(())
    }

    /// Remove every phone equal to `raw`; does nothing when none match
    pub fn remove_phone(&mut self, raw: &str) {
        self.phones.retain(|p| p.as_str() != raw);
    }

    /// Replace every phone equal to `old` with `new`
    ///
    /// `new` is validated before searching, so an invalid replacement fails
    /// with a validation error even when `old` is absent.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> ContactResult<()> {
        let replacement = Phone::parse(new)?;

        let mut found = false;
        for phone in self.phones.iter_mut().filter(|p| p.as_str() == old) {
            *phone = replacement.clone();
            found = true;
        }

        if found {
            Ok(())
        } else {
            Err(ContactError::phone_not_found(old))
        }
    }

    /// First phone equal to `raw`
    pub fn find_phone(&self, raw: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == raw)
    }

    /// Days until the next birthday, counted from today's local date
    pub fn days_to_birthday(&self) -> Option<i64> {
        self.days_to_birthday_from(Local::now().date_naive())
    }

    /// Days until the next birthday, counted from `today`
    pub fn days_to_birthday_from(&self, today: NaiveDate) -> Option<i64> {
        self.birthday.as_ref()?.days_until(today)
    }
}
