//! Address book: the name-keyed collection of all records
//!
//! Records are kept in insertion order so listings are stable. Paging works
//! on a snapshot taken when [`AddressBook::iterate`] is called; changes made
//! to the book afterwards never show up in an iteration already in progress.

use std::collections::HashMap;
use std::num::NonZeroUsize;

use tracing::debug;

use super::field::{Field, Name, Phone};
use super::record::Record;
use crate::error::{ContactError, ContactResult};

/// All contacts, keyed by name
#[derive(Debug, Default, Clone)]
pub struct AddressBook {
    records: Vec<Record>,
    index: HashMap<String, usize>,
}

impl AddressBook {
    /// Create an empty address book
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Insert a record, replacing any record with the same name in place
    pub fn add_record(&mut self, record: Record) {
        let key = record.name().as_str().to_string();
        match self.index.get(&key) {
            Some(&position) => self.records[position] = record,
            None => {
                self.index.insert(key, self.records.len());
                self.records.push(record);
            }
        }
    }

    /// Validate and add a new contact
    ///
    /// Checks run in a fixed order and the first failure is returned without
    /// touching the book: empty name, existing name, name format, phone
    /// formats, birthday format.
    pub fn add_contact(
        &mut self,
        name: &str,
        phone1: &str,
        phone2: Option<&str>,
        birthday: Option<&str>,
    ) -> ContactResult<()> {
        if name.is_empty() {
            return Err(ContactError::Validation {
                field: Name::FIELD,
                value: String::new(),
                rule: "name cannot be empty",
            });
        }

        if self.contains(name) {
            return Err(ContactError::contact_exists(name));
        }

        let name = Name::parse(name)?;
        let phone1 = Phone::parse(phone1)?;
        let phone2 = phone2.map(Phone::parse).transpose()?;

        let mut record = Record::new(name.as_str(), birthday)?;
        record.push_phone(phone1)?;
        if let Some(phone2) = phone2 {
            record.push_phone(phone2)?;
        }

        debug!(name = %name, "contact added");
        self.add_record(record);
        Ok(())
    }

    /// Look up a contact by exact name
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.index
            .get(name)
            .and_then(|&position| self.records.get(position))
    }

    /// Look up a contact for editing
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        let position = *self.index.get(name)?;
        self.records.get_mut(position)
    }

    /// Remove a contact, returning it if it existed
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        let position = self.index.remove(name)?;
        let record = self.records.remove(position);

        for slot in self.index.values_mut() {
            if *slot > position {
                *slot -= 1;
            }
        }

        debug!(name, "contact deleted");
        Some(record)
    }

    /// Page through a snapshot of the current records
    ///
    /// Fails with [`ContactError::InvalidArgument`] when `page_size` is zero.
    pub fn iterate(&self, page_size: usize) -> ContactResult<Pages> {
        let page_size = NonZeroUsize::new(page_size).ok_or_else(|| {
            ContactError::InvalidArgument("page size must be at least 1".into())
        })?;

        Ok(Pages {
            remaining: self.records.clone().into_iter(),
            page_size,
        })
    }
}

/// Lazy sequence of record pages over a snapshot of the book
#[derive(Debug)]
pub struct Pages {
    remaining: std::vec::IntoIter<Record>,
    page_size: NonZeroUsize,
}

impl Iterator for Pages {
    type Item = Vec<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        let page: Vec<Record> = self.remaining.by_ref().take(self.page_size.get()).collect();
        if page.is_empty() {
            None
        } else {
            Some(page)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let pages = self.remaining.len().div_ceil(self.page_size.get());
        (pages, Some(pages))
    }
}

impl ExactSizeIterator for Pages {}

#[cfg(test)]
mod tests {
    use super::*;

    const NAMES: [&str; 5] = ["Alice", "Bob", "Carol", "Dave", "Eve"];

    fn book_with(names: &[&str]) -> AddressBook {
        let mut book = AddressBook::new();
        for name in names {
            book.add_contact(name, "0123456789", None, None).unwrap();
        }
        book
    }

    fn names_of(page: &[Record]) -> Vec<&str> {
        page.iter().map(|r| r.name().as_str()).collect()
    }

    #[test]
    fn test_add_contact_and_find() {
        let mut book = AddressBook::new();
        book.add_contact("Alice", "0123456789", Some("0987654321"), Some("1990-05-01"))
            .unwrap();

        let record = book.find("Alice").unwrap();
        assert_eq!(record.phones().len(), 2);
        assert_eq!(record.birthday().map(|b| b.as_str()), Some("1990-05-01"));
        assert!(book.find("alice").is_none());
    }

    #[test]
    fn test_add_contact_duplicate_name() {
        let mut book = AddressBook::new();
        book.add_contact("Alice", "0123456789", None, None).unwrap();

        let err = book
            .add_contact("Alice", "1111111111", Some("2222222222"), None)
            .unwrap_err();
        assert!(err.is_duplicate());

        let record = book.find("Alice").unwrap();
        assert_eq!(record.phones().len(), 1);
        assert_eq!(record.phones()[0].as_str(), "0123456789");
    }

    #[test]
    fn test_add_contact_check_order() {
        let mut book = book_with(&["Alice"]);

        let err = book.add_contact("", "bad", None, None).unwrap_err();
        assert!(err.to_string().contains("cannot be empty"));

        // Duplicate wins over bad phones
        let err = book.add_contact("Alice", "bad", None, None).unwrap_err();
        assert!(err.is_duplicate());

        let err = book.add_contact("Al1ce", "bad", None, None).unwrap_err();
        assert!(matches!(err, ContactError::Validation { field: "name", .. }));

        let err = book.add_contact("Bob", "bad", Some("worse"), Some("never")).unwrap_err();
        assert!(matches!(err, ContactError::Validation { ref value, .. } if value == "bad"));

        let err = book
            .add_contact("Bob", "0123456789", Some("worse"), Some("never"))
            .unwrap_err();
        assert!(matches!(err, ContactError::Validation { ref value, .. } if value == "worse"));

        let err = book
            .add_contact("Bob", "0123456789", None, Some("never"))
            .unwrap_err();
        assert!(matches!(err, ContactError::Validation { field: "birthday", .. }));

        assert_eq!(book.len(), 1);
        assert!(!book.contains("Bob"));
    }

    #[test]
    fn test_add_record_overwrites_in_place() {
        let mut book = book_with(&["Alice", "Bob"]);
        let mut replacement = Record::new("Alice", None).unwrap();
        replacement.add_phone("5555555555").unwrap();
        book.add_record(replacement);

        assert_eq!(book.len(), 2);
        let page = book.iterate(10).unwrap().next().unwrap();
        assert_eq!(names_of(&page), vec!["Alice", "Bob"]);
        assert_eq!(page[0].phones()[0].as_str(), "5555555555");
    }

    #[test]
    fn test_delete() {
        let mut book = book_with(&NAMES);
        let removed = book.delete("Bob").unwrap();
        assert_eq!(removed.name().as_str(), "Bob");
        assert!(book.find("Bob").is_none());

        // Remaining lookups still resolve after the shift
        assert_eq!(book.find("Eve").unwrap().name().as_str(), "Eve");
        assert_eq!(book.find("Carol").unwrap().name().as_str(), "Carol");
    }

    #[test]
    fn test_delete_missing_is_noop() {
        let mut book = book_with(&["Alice"]);
        assert!(book.delete("Zed").is_none());
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn test_find_mut_edits_in_book() {
        let mut book = book_with(&["Alice"]);
        book.find_mut("Alice")
            .unwrap()
            .edit_phone("0123456789", "1111111111")
            .unwrap();
        assert_eq!(
            book.find("Alice").unwrap().phones()[0].as_str(),
            "1111111111"
        );
    }

    #[test]
    fn test_iterate_page_sizes() {
        let book = book_with(&NAMES);
        let pages: Vec<Vec<Record>> = book.iterate(2).unwrap().collect();

        let sizes: Vec<usize> = pages.iter().map(Vec::len).collect();
        assert_eq!(sizes, vec![2, 2, 1]);
        assert_eq!(names_of(&pages[0]), vec!["Alice", "Bob"]);
        assert_eq!(names_of(&pages[2]), vec!["Eve"]);
    }

    #[test]
    fn test_iterate_snapshot_ignores_later_changes() {
        let mut book = book_with(&NAMES);
        let mut pages = book.iterate(2).unwrap();
        let first = pages.next().unwrap();

        book.add_contact("Frank", "0123456789", None, None).unwrap();
        book.delete("Eve");

        let rest: Vec<Record> = pages.flatten().collect();
        assert_eq!(names_of(&first), vec!["Alice", "Bob"]);
        assert_eq!(names_of(&rest), vec!["Carol", "Dave", "Eve"]);
    }

    #[test]
    fn test_iterate_zero_page_size() {
        let book = book_with(&NAMES);
        let err = book.iterate(0).unwrap_err();
        assert!(matches!(err, ContactError::InvalidArgument(_)));
    }

    #[test]
    fn test_iterate_empty_book() {
        let book = AddressBook::new();
        assert_eq!(book.iterate(3).unwrap().count(), 0);
    }

    #[test]
    fn test_pages_len() {
        let book = book_with(&NAMES);
        let mut pages = book.iterate(2).unwrap();
        assert_eq!(pages.len(), 3);
        pages.next();
        assert_eq!(pages.len(), 2);
    }
}
