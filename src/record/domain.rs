//! Core record domain types.

use serde::{Deserialize, Serialize};
use time::{
    OffsetDateTime, PrimitiveDateTime, format_description::BorrowedFormatItem,
    macros::format_description,
};

/// Database identifier for a record.
pub type RecordId = i64;

/// The text format of `created_at` timestamps, e.g. "2024-01-05T09:30:00".
///
/// Timestamps are always UTC, so no offset is written.
pub(crate) const CREATED_AT_FORMAT: &[BorrowedFormatItem] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");

/// One transportation expense: who travelled, when, how, where and for how much.
#[derive(Debug, Clone, PartialEq)]
pub struct TransportationRecord {
    /// Assigned by the database, strictly increasing and never reused.
    pub id: RecordId,
    /// The name of the person who travelled.
    pub user_name: String,
    /// The travel date as entered. The format is not checked.
    pub travel_date: String,
    /// How the user travelled, e.g. "bus" or "train".
    pub mode: String,
    /// Where the trip started.
    pub origin: String,
    /// Where the trip ended.
    pub destination: String,
    /// The distance travelled in kilometres.
    pub distance_km: f64,
    /// The amount paid for the trip.
    pub cost: f64,
    /// Free text, empty when the user left no notes.
    pub notes: String,
    /// When the record was stored, in UTC with whole seconds.
    pub created_at: OffsetDateTime,
}

impl TransportationRecord {
    /// The `created_at` timestamp in its storage and export format.
    pub fn created_at_text(&self) -> String {
        format_created_at(self.created_at)
    }
}

pub(crate) fn format_created_at(created_at: OffsetDateTime) -> String {
    // Every component in the format is always available, so formatting cannot fail.
    created_at
        .format(CREATED_AT_FORMAT)
        .unwrap_or_else(|_| created_at.to_string())
}

pub(crate) fn parse_created_at(text: &str) -> Result<OffsetDateTime, time::error::Parse> {
    PrimitiveDateTime::parse(text, CREATED_AT_FORMAT).map(PrimitiveDateTime::assume_utc)
}

/// A record that has passed validation and is ready to be stored.
///
/// The text fields are trimmed and every required field is non-empty.
/// Use [RecordForm::validate] to create one.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedRecord {
    pub(crate) user_name: String,
    pub(crate) travel_date: String,
    pub(crate) mode: String,
    pub(crate) origin: String,
    pub(crate) destination: String,
    pub(crate) distance_km: f64,
    pub(crate) cost: f64,
    pub(crate) notes: String,
}

impl ValidatedRecord {
    /// The name of the person who travelled.
    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    /// The travel date as entered.
    pub fn travel_date(&self) -> &str {
        &self.travel_date
    }

    /// How the user travelled.
    pub fn mode(&self) -> &str {
        &self.mode
    }

    /// Where the trip started.
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Where the trip ended.
    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// The distance travelled in kilometres.
    pub fn distance_km(&self) -> f64 {
        self.distance_km
    }

    /// The amount paid for the trip.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Free text notes, possibly empty.
    pub fn notes(&self) -> &str {
        &self.notes
    }
}

/// The raw form data for a new record.
///
/// Every field is optional here so that a missing field is reported by
/// validation instead of rejected by the extractor.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[allow(missing_docs)]
pub struct RecordForm {
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub travel_date: Option<String>,
    #[serde(default)]
    pub mode: Option<String>,
    #[serde(default)]
    pub origin: Option<String>,
    #[serde(default)]
    pub destination: Option<String>,
    #[serde(default)]
    pub distance_km: Option<String>,
    #[serde(default)]
    pub cost: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}
