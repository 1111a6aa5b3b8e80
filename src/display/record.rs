//! Record display formatting
//!
//! Formats contacts as single lines for `find` and paged `show` output.

use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDate;

use super::Palette;
use crate::models::{Birthday, Field, Record};

/// Format a birthday with a user-supplied strftime pattern
///
/// Falls back to the text as entered when the pattern is invalid.
pub fn format_birthday(birthday: &Birthday, date_format: &str) -> String {
    if StrftimeItems::new(date_format).any(|item| matches!(item, Item::Error)) {
        return birthday.as_str().to_string();
    }
    birthday.date().format(date_format).to_string()
}

/// Format one record as a single line
pub fn format_record(
    record: &Record,
    today: NaiveDate,
    date_format: &str,
    palette: &Palette,
) -> String {
    let phones = record
        .phones()
        .iter()
        .map(|p| p.as_str())
        .collect::<Vec<_>>()
        .join("; ");

    let mut output = format!(
        "{} {}, {} {}",
        palette.label("Contact name:"),
        palette.value(record.name().as_str()),
        palette.label("phones:"),
        palette.value(&phones),
    );

    if let Some(birthday) = record.birthday() {
        output.push_str(&format!(
            ", {} {}",
            palette.label("Birthday:"),
            palette.value(&format_birthday(birthday, date_format)),
        ));
    }

    if let Some(days) = record.days_to_birthday_from(today) {
        output.push_str(&format!(
            ", {} {}",
            palette.label("Days to birthday:"),
            palette.value(&days.to_string()),
        ));
    }

    output
}

/// Format a page of records, one per line
pub fn format_page(
    records: &[Record],
    today: NaiveDate,
    date_format: &str,
    palette: &Palette,
) -> String {
    records
        .iter()
        .map(|record| format_record(record, today, date_format, palette))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 4, 20).unwrap()
    }

    #[test]
    fn test_format_record_without_birthday() {
        let mut record = Record::new("Alice", None).unwrap();
        record.add_phone("0123456789").unwrap();
        record.add_phone("0987654321").unwrap();

        let line = format_record(&record, today(), "%Y-%m-%d", &Palette::plain());
        assert_eq!(
            line,
            "Contact name: Alice, phones: 0123456789; 0987654321"
        );
    }

    #[test]
    fn test_format_record_with_birthday() {
        let mut record = Record::new("Bob", Some("1990-04-25")).unwrap();
        record.add_phone("0123456789").unwrap();

        let line = format_record(&record, today(), "%Y-%m-%d", &Palette::plain());
        assert_eq!(
            line,
            "Contact name: Bob, phones: 0123456789, Birthday: 1990-04-25, Days to birthday: 5"
        );
    }

    #[test]
    fn test_format_birthday_custom_pattern() {
        let birthday = Birthday::parse("1990-04-25").unwrap();
        assert_eq!(format_birthday(&birthday, "%d.%m.%Y"), "25.04.1990");
        assert_eq!(format_birthday(&birthday, "%Q"), "1990-04-25");
    }

    #[test]
    fn test_format_page() {
        let alice = Record::new("Alice", None).unwrap();
        let bob = Record::new("Bob", None).unwrap();

        let text = format_page(&[alice, bob], today(), "%Y-%m-%d", &Palette::plain());
        assert_eq!(text.lines().count(), 2);
        assert!(text.lines().nth(1).unwrap().contains("Bob"));
    }
}
