use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A persisted appointment request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub date: String,
    pub time: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Fields a caller supplies when submitting a booking.
///
/// Anything else in the payload (including `status`) is ignored; new
/// bookings always start as [`BookingStatus::Pending`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewBooking {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub date: String,
    pub time: String,
}

/// Well-known booking labels. The stored column is free text, so any
/// other label is carried through as [`BookingStatus::Other`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
    Other(String),
}

impl BookingStatus {
    pub fn as_str(&self) -> &str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Cancelled => "cancelled",
            BookingStatus::Completed => "completed",
            BookingStatus::Other(label) => label,
        }
    }
}

impl From<&str> for BookingStatus {
    fn from(label: &str) -> Self {
        match label {
            "pending" => BookingStatus::Pending,
            "confirmed" => BookingStatus::Confirmed,
            "cancelled" => BookingStatus::Cancelled,
            "completed" => BookingStatus::Completed,
            other => BookingStatus::Other(other.to_string()),
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
