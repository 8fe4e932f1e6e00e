//! Form-input validation.
//!
//! The backend validates these same rules server-side; checking them here
//! gives the user immediate feedback and keeps invalid payloads off the
//! wire entirely.

use chrono::NaiveDate;

use crate::error::{MemoriesError, Result};
use crate::types::{Name, NewMemory};

impl NewMemory {
    /// Validate raw form fields into a payload ready to POST.
    ///
    /// The note is deliberately unconstrained (an empty note is a valid
    /// memory); only the date is checked.
    ///
    /// # Errors
    /// [`MemoriesError::InvalidDate`] when `date` is not a calendar-valid
    /// `YYYY-MM-DD`.
    pub fn parse(date: &str, note: &str) -> Result<Self> {
        let raw = date.trim();
        let invalid = || MemoriesError::InvalidDate {
            input: date.to_owned(),
        };

        let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| invalid())?;
        // chrono accepts unpadded fields; the wire format does not.
        if date.format("%Y-%m-%d").to_string() != raw {
            return Err(invalid());
        }

        Ok(Self {
            date,
            note: note.to_owned(),
        })
    }
}

impl Name {
    /// Validate a name entered at the "add new person" prompt.
    ///
    /// # Errors
    /// [`MemoriesError::EmptyName`] when the input is blank.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(MemoriesError::EmptyName);
        }
        Ok(Self(trimmed.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_formed_fields_parse() {
        let memory = NewMemory::parse("2024-03-01", "First steps").expect("valid input");
        assert_eq!(memory.date.to_string(), "2024-03-01");
        assert_eq!(memory.note, "First steps");
    }

    #[test]
    fn notes_are_unconstrained() {
        let memory = NewMemory::parse("2024-03-01", "").expect("empty note is fine");
        assert_eq!(memory.note, "");

        let memory = NewMemory::parse("2024-03-01", "  as typed  ").expect("valid input");
        assert_eq!(memory.note, "  as typed  ");
    }

    #[test]
    fn malformed_dates_are_rejected() {
        for input in ["", "tomorrow", "2024-3-1", "01-03-2024", "2024-02-30"] {
            let err = NewMemory::parse(input, "note").expect_err("should reject");
            assert_eq!(
                err,
                MemoriesError::InvalidDate {
                    input: input.to_owned()
                }
            );
        }
    }

    #[test]
    fn blank_names_are_rejected() {
        assert_eq!(Name::parse("  "), Err(MemoriesError::EmptyName));
        assert_eq!(Name::parse(" Alice "), Ok(Name::from("Alice")));
    }
}
