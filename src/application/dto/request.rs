//! Request DTOs
//!
//! Data structures for API request bodies and path parameters.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Deserializer};

use crate::domain::NewOrder;
use crate::shared::error::AppError;

/// Accepted layouts for naive walk times, tried in order.
const WALK_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Minutes-only layout with a UTC offset, which RFC 3339 parsing rejects.
const WALK_TIME_OFFSET_FORMAT: &str = "%Y-%m-%dT%H:%M%:z";

/// Path date layout for the order listing.
pub const WALK_DATE_FORMAT: &str = "%Y-%m-%d";

/// Create order request
#[derive(Debug, Clone, Deserialize)]
pub struct CreateOrderRequest {
    pub apartment_number: i64,
    pub dog_name: String,
    pub dog_breed: String,

    #[serde(deserialize_with = "deserialize_walk_time")]
    pub walk_time: NaiveDateTime,

    pub walker: String,
}

impl From<CreateOrderRequest> for NewOrder {
    fn from(req: CreateOrderRequest) -> Self {
        Self {
            apartment_number: req.apartment_number,
            dog_name: req.dog_name,
            dog_breed: req.dog_breed,
            walk_time: req.walk_time,
            walker: req.walker,
        }
    }
}

/// Parse an ISO-8601 walk time.
///
/// Offsets are accepted but dropped: the wall-clock time the client wrote
/// is the slot that gets booked.
pub fn parse_walk_time(raw: &str) -> Option<NaiveDateTime> {
    if !has_four_digit_year(raw) {
        return None;
    }

    let parsed = DateTime::parse_from_rfc3339(raw)
        .or_else(|_| DateTime::parse_from_str(raw, WALK_TIME_OFFSET_FORMAT))
        .map(|with_offset| with_offset.naive_local())
        .ok()
        .or_else(|| {
            WALK_TIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        })?;

    // chrono represents a leap second as nanosecond >= 1_000_000_000
    (parsed.nanosecond() < 1_000_000_000).then_some(parsed)
}

/// `%Y` alone accepts a sign, padding and any digit count.
fn has_four_digit_year(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    bytes.len() > 4 && bytes[..4].iter().all(u8::is_ascii_digit) && bytes[4] == b'-'
}

fn deserialize_walk_time<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_walk_time(&raw).ok_or_else(|| {
        serde::de::Error::custom(format!("invalid walk_time `{}`, expected ISO 8601 datetime", raw))
    })
}

/// Parse the `{date}` path segment of the order listing.
pub fn parse_walk_date(raw: &str) -> Result<NaiveDate, AppError> {
    let invalid = || AppError::BadRequest("Invalid date format. Use YYYY-MM-DD".into());

    if !has_four_digit_year(raw) {
        return Err(invalid());
    }
    NaiveDate::parse_from_str(raw, WALK_DATE_FORMAT).map_err(|_| invalid())
}
