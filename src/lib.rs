//! Contact book - interactive terminal address book
//!
//! This library provides the core of the `contacts` command: validated
//! contact fields, contact records with up to two phone numbers and an
//! optional birthday, and an in-memory address book with paged listing.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Fields, records and the address book
//! - `display`: Terminal formatting for records and messages
//! - `shell`: The interactive command loop
//!
//! # Example
//!
//! ```rust
//! use contact_book::models::AddressBook;
//!
//! let mut book = AddressBook::new();
//! book.add_contact("Alice", "0123456789", None, Some("1990-05-01"))?;
//!
//! let record = book.find("Alice").expect("just added");
//! assert_eq!(record.phones().len(), 1);
//! # Ok::<(), contact_book::ContactError>(())
//! ```

pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod shell;

pub use error::{ContactError, ContactResult};
