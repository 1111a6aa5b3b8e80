//! Core data models for the contact book
//!
//! This module contains the validated fields, the contact record and the
//! address book that owns every record.

pub mod book;
pub mod field;
pub mod record;

pub use book::{AddressBook, Pages};
pub use field::{Birthday, Field, Name, Phone, BIRTHDAY_FORMAT, PHONE_DIGITS};
pub use record::{Record, MAX_PHONES};
