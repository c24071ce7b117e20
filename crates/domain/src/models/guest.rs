//! Guest domain models for per-guest personalized links.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Honorific appended to the salutation when the admin leaves it unset.
pub const DEFAULT_HONORIFIC: &str = "님께";

/// One guest entry managed from the invitation's admin console.
///
/// Resolution reads the record as an immutable snapshot; the open counters
/// are advanced by the storage layer via [`GuestRecord::record_open`] after
/// the personalized page has been served.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct GuestRecord {
    pub id: Uuid,
    pub invitation_id: Uuid,
    pub name: String,
    pub relation: Option<String>,
    #[serde(default = "default_honorific")]
    pub honorific: String,
    /// Verbatim salutation override; wins over the synthesized form.
    pub intro_greeting: Option<String>,
    /// Reference into the content document's greeting-template library.
    pub greeting_template_id: Option<String>,
    /// Free-text greeting body used when no template applies.
    pub custom_message: Option<String>,
    /// Shareable link code in XXXX-XXXX format.
    pub access_code: String,
    pub opened_count: i64,
    pub last_opened_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn default_honorific() -> String {
    DEFAULT_HONORIFIC.to_string()
}

impl GuestRecord {
    /// Advances the open counters after the guest's link was served.
    pub fn record_open(&mut self, opened_at: DateTime<Utc>) {
        self.opened_count += 1;
        self.last_opened_at = Some(opened_at);
    }
}

/// Request to add a guest from the admin console.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct CreateGuestRequest {
    #[validate(length(min = 1, max = 30, message = "Guest name must be 1-30 characters"))]
    pub name: String,

    #[validate(length(max = 20, message = "Relation must be at most 20 characters"))]
    pub relation: Option<String>,

    /// Defaults to "님께" when absent.
    #[validate(length(min = 1, max = 10, message = "Honorific must be 1-10 characters"))]
    pub honorific: Option<String>,

    #[validate(length(max = 100, message = "Salutation must be at most 100 characters"))]
    pub intro_greeting: Option<String>,

    #[validate(length(max = 50, message = "Template id must be at most 50 characters"))]
    pub greeting_template_id: Option<String>,

    #[validate(length(max = 500, message = "Message must be at most 500 characters"))]
    pub custom_message: Option<String>,
}

/// Request to edit a guest from the admin console.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct UpdateGuestRequest {
    #[validate(length(min = 1, max = 30, message = "Guest name must be 1-30 characters"))]
    pub name: Option<String>,

    #[validate(length(max = 20, message = "Relation must be at most 20 characters"))]
    pub relation: Option<String>,

    #[validate(length(min = 1, max = 10, message = "Honorific must be 1-10 characters"))]
    pub honorific: Option<String>,

    #[validate(length(max = 100, message = "Salutation must be at most 100 characters"))]
    pub intro_greeting: Option<String>,

    #[validate(length(max = 50, message = "Template id must be at most 50 characters"))]
    pub greeting_template_id: Option<String>,

    #[validate(length(max = 500, message = "Message must be at most 500 characters"))]
    pub custom_message: Option<String>,
}

/// Request to open a personalized link by its access code.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct OpenGuestLinkRequest {
    /// The access code in XXXX-XXXX format.
    #[validate(length(equal = 9, message = "Invalid access code format"))]
    #[validate(regex(
        path = *ACCESS_CODE_REGEX,
        message = "Invalid access code format. Expected XXXX-XXXX"
    ))]
    pub code: String,
}

lazy_static::lazy_static! {
    static ref ACCESS_CODE_REGEX: regex::Regex =
        regex::Regex::new(r"^[A-Z0-9]{4}-[A-Z0-9]{4}$").unwrap();
}

/// Guest entry projected for the admin console's listing.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct GuestSummary {
    pub id: Uuid,
    pub name: String,
    pub relation: Option<String>,
    pub access_code: String,
    pub opened_count: i64,
    pub last_opened_at: Option<DateTime<Utc>>,
}

impl From<GuestRecord> for GuestSummary {
    fn from(guest: GuestRecord) -> Self {
        Self {
            id: guest.id,
            name: guest.name,
            relation: guest.relation,
            access_code: guest.access_code,
            opened_count: guest.opened_count,
            last_opened_at: guest.last_opened_at,
        }
    }
}

/// Generate a random access code in XXXX-XXXX format.
pub fn generate_access_code() -> String {
    use rand::Rng;
    let mut rng = rand::thread_rng();
    let chars: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789"; // Avoiding confusing chars: 0, O, I, 1

    let mut generate_segment = || -> String {
        (0..4)
            .map(|_| {
                let idx = rng.gen_range(0..chars.len());
                chars[idx] as char
            })
            .collect()
    };

    format!("{}-{}", generate_segment(), generate_segment())
}
