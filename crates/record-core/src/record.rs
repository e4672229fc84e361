//! The `Record` type and its textual (CSV cell) representation.

use chrono::NaiveDate;
use thiserror::Error;

/// Column names, in the fixed order used by both the CSV file and the
/// database table.
pub const COLUMNS: [&str; 8] = [
    "name",
    "email",
    "address",
    "phone",
    "birth_date",
    "national_id",
    "registration_date",
    "payment_date",
];

/// Date rendering for CSV cells and SQL parameters (ISO 8601, date only).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Errors produced when reconstituting a record from its CSV cells.
#[derive(Error, Debug)]
pub enum RecordError {
    /// A row carried the wrong number of fields.
    #[error("Expected {expected} fields, found {found}")]
    FieldCount { expected: usize, found: usize },

    /// A date cell did not parse as ISO 8601.
    #[error("Invalid date '{value}' in column '{column}': {source}")]
    InvalidDate {
        column: &'static str,
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}

/// One synthetic personal record.
///
/// `phone` and `payment_date` are the only nullable fields. Field values are
/// fixed at synthesis time; the database assigns a surrogate id on insert and
/// neither the file nor this type is aware of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub name: String,
    pub email: String,
    /// Single-line postal address; see [`normalize_address`].
    pub address: String,
    pub phone: Option<String>,
    pub birth_date: NaiveDate,
    pub national_id: String,
    pub registration_date: NaiveDate,
    pub payment_date: Option<NaiveDate>,
}

impl Record {
    /// Render the record as CSV cells in [`COLUMNS`] order.
    ///
    /// Absent optional fields render as empty cells.
    pub fn to_csv_fields(&self) -> [String; 8] {
        [
            self.name.clone(),
            self.email.clone(),
            self.address.clone(),
            self.phone.clone().unwrap_or_default(),
            self.birth_date.format(DATE_FORMAT).to_string(),
            self.national_id.clone(),
            self.registration_date.format(DATE_FORMAT).to_string(),
            self.payment_date
                .map(|d| d.format(DATE_FORMAT).to_string())
                .unwrap_or_default(),
        ]
    }

    /// Reconstitute a record from CSV cells in [`COLUMNS`] order.
    ///
    /// Empty cells for the optional fields map back to `None`, never to an
    /// empty string.
    pub fn from_csv_fields(fields: &[&str]) -> Result<Self, RecordError> {
        let &[name, email, address, phone, birth_date, national_id, registration_date, payment_date] =
            fields
        else {
            return Err(RecordError::FieldCount {
                expected: COLUMNS.len(),
                found: fields.len(),
            });
        };

        Ok(Self {
            name: name.to_string(),
            email: email.to_string(),
            address: address.to_string(),
            phone: (!phone.is_empty()).then(|| phone.to_string()),
            birth_date: parse_date("birth_date", birth_date)?,
            national_id: national_id.to_string(),
            registration_date: parse_date("registration_date", registration_date)?,
            payment_date: parse_optional_date("payment_date", payment_date)?,
        })
    }
}

fn parse_date(column: &'static str, value: &str) -> Result<NaiveDate, RecordError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|source| RecordError::InvalidDate {
        column,
        value: value.to_string(),
        source,
    })
}

fn parse_optional_date(
    column: &'static str,
    value: &str,
) -> Result<Option<NaiveDate>, RecordError> {
    if value.is_empty() {
        Ok(None)
    } else {
        parse_date(column, value).map(Some)
    }
}

/// Collapse a multi-line postal address to a single line, joining the lines
/// with a comma-space separator.
pub fn normalize_address(address: &str) -> String {
    address.replace("\r\n", ", ").replace('\n', ", ")
}
