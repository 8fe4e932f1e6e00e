//! Core type definitions for the memories app.
//!
//! These mirror the backend's wire format exactly; the client holds only
//! ephemeral read-only copies of what the API returns.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Identity Types
// ---------------------------------------------------------------------------

/// A person's name, the identifier memories are filed under.
///
/// Unique within the name list; the API's ordering is preserved for display.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Name(pub String);

impl Name {
    /// Borrow the underlying string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Name {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

/// Backend-assigned identifier for a memory. Opaque to the client except
/// for building and parsing detail-link fragments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemoryId(pub i64);

impl fmt::Display for MemoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for MemoryId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        s.parse::<i64>().map(Self)
    }
}

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// A single dated note about a person, as returned by the API.
///
/// The age fields give the person's age at `date`, precomputed by the
/// backend (the person's date of birth is the date of their first memory).
/// The client never recomputes or re-sorts these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Memory {
    /// Backend-assigned identifier.
    pub id: MemoryId,
    /// The day the memory happened.
    pub date: NaiveDate,
    /// Free-text note body.
    pub note: String,
    /// Whole years of age at `date`.
    pub years: u32,
    /// Whole months of age past `years`.
    pub months: u32,
    /// Days of age past `months`.
    pub days: u32,
}

impl Memory {
    /// The `(years, months)` bucket this memory falls into.
    #[must_use]
    pub fn age(&self) -> Age {
        Age {
            years: self.years,
            months: self.months,
        }
    }
}

/// An age quantised to whole years and months, the bucketing key for
/// grouped display.
///
/// `Display` renders the human-readable label: `"newborn"`, `"7 months"`,
/// `"1 year"`, `"2 years, 1 month"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Age {
    /// Whole years.
    pub years: u32,
    /// Whole months past `years`.
    pub months: u32,
}

/// A validated new-memory payload, form-encoded on POST.
///
/// Construct via [`NewMemory::parse`](crate::validate) so that only
/// calendar-valid dates and non-blank notes reach the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewMemory {
    /// The day the memory happened.
    pub date: NaiveDate,
    /// Free-text note body.
    pub note: String,
}
