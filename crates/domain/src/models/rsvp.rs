//! RSVP response domain models.
//!
//! Responses arrive through the public RSVP form on the invitation page and
//! are read-only afterwards; the dashboard derives everything it shows from
//! the raw collection through [`crate::services::rsvp_stats`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Attendance answer on the RSVP form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attendance {
    Attending,
    NotAttending,
    #[default]
    Pending,
}

impl Attendance {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Attending => "attending",
            Self::NotAttending => "not_attending",
            Self::Pending => "pending",
        }
    }
}

/// Which side of the couple the respondent belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GuestSide {
    Groom,
    Bride,
}

impl GuestSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Groom => "groom",
            Self::Bride => "bride",
        }
    }
}

/// One submitted RSVP, as stored.
///
/// `guest_count` is the respondent's party size; `0` or absent means the
/// respondent did not specify one and counts as a party of one wherever
/// guests are summed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct RsvpResponse {
    pub id: Uuid,
    pub guest_name: String,
    pub guest_phone: Option<String>,
    pub attendance: Attendance,
    #[serde(default)]
    pub guest_count: i64,
    pub message: Option<String>,
    pub side: Option<GuestSide>,
    pub created_at: DateTime<Utc>,
}

impl RsvpResponse {
    /// Party size with the unspecified case normalized.
    pub fn effective_guest_count(&self) -> i64 {
        if self.guest_count > 0 {
            self.guest_count
        } else {
            1
        }
    }
}

/// Payload of the public RSVP form.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct SubmitRsvpRequest {
    #[validate(length(min = 1, max = 30, message = "Name must be 1-30 characters"))]
    pub guest_name: String,

    #[validate(custom(function = "shared::validation::validate_korean_mobile"))]
    pub guest_phone: Option<String>,

    pub attendance: Attendance,

    /// Party size including the respondent; 0 means unspecified.
    #[validate(range(min = 0, max = 20, message = "Party size must be between 0 and 20"))]
    pub guest_count: Option<i64>,

    #[validate(length(max = 500, message = "Message must be at most 500 characters"))]
    pub message: Option<String>,

    pub side: Option<GuestSide>,
}
