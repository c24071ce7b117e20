//! Invitation domain model.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::content::ContentDocument;
use super::template::{TemplateBadge, TemplateVariant};

/// One invitation row, as stored.
///
/// `content` is the opaque JSON document edited by the couple; it is parsed
/// lazily through [`InvitationRecord::content_document`] and may be absent or
/// malformed without affecting the rest of the row.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct InvitationRecord {
    pub id: Uuid,
    pub slug: String,
    pub template_id: String,
    pub groom_name: String,
    pub bride_name: String,
    pub wedding_date: Option<NaiveDate>,
    pub wedding_time: Option<NaiveTime>,
    pub venue_name: Option<String>,
    pub is_published: bool,
    pub is_paid: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub content: Option<String>,
}

impl InvitationRecord {
    /// Parses the stored content, degrading to the empty document.
    ///
    /// Callers serving one request should parse once and pass the document to
    /// every resolver that needs it.
    pub fn content_document(&self) -> ContentDocument {
        ContentDocument::parse(self.content.as_deref())
    }

    /// Template variant for this invitation's stored id.
    pub fn variant(&self) -> TemplateVariant {
        TemplateVariant::classify(&self.template_id)
    }

    /// Public path the invitation is served under.
    pub fn public_path(&self) -> String {
        format!("{}/{}", self.variant().route_prefix(), self.slug)
    }
}

/// Request to create a new invitation from the editor.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct CreateInvitationRequest {
    #[validate(length(min = 1, max = 50, message = "Template id must be 1-50 characters"))]
    pub template_id: String,

    #[validate(length(min = 1, max = 30, message = "Groom name must be 1-30 characters"))]
    pub groom_name: String,

    #[validate(length(min = 1, max = 30, message = "Bride name must be 1-30 characters"))]
    pub bride_name: String,

    /// Share URL segment; generated from the couple's names when absent.
    #[validate(length(min = 3, max = 40, message = "Slug must be 3-40 characters"))]
    #[validate(custom(function = "shared::validation::validate_slug"))]
    pub slug: Option<String>,

    #[validate(custom(function = "shared::validation::validate_wedding_date"))]
    pub wedding_date: Option<NaiveDate>,

    pub wedding_time: Option<NaiveTime>,

    #[validate(length(max = 100, message = "Venue name must be at most 100 characters"))]
    pub venue_name: Option<String>,
}

/// Request to update invitation row fields from the editor.
///
/// Content saves travel separately as the raw document; this covers the row
/// metadata shown in listings.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct UpdateInvitationRequest {
    #[validate(length(min = 1, max = 30, message = "Groom name must be 1-30 characters"))]
    pub groom_name: Option<String>,

    #[validate(length(min = 1, max = 30, message = "Bride name must be 1-30 characters"))]
    pub bride_name: Option<String>,

    #[validate(custom(function = "shared::validation::validate_wedding_date"))]
    pub wedding_date: Option<NaiveDate>,

    pub wedding_time: Option<NaiveTime>,

    #[validate(length(max = 100, message = "Venue name must be at most 100 characters"))]
    pub venue_name: Option<String>,

    pub is_published: Option<bool>,
}

/// Invitation row projected for the editor's listing screen.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct InvitationSummary {
    pub id: Uuid,
    pub slug: String,
    pub badge: TemplateBadge,
    pub groom_name: String,
    pub bride_name: String,
    pub wedding_date: Option<NaiveDate>,
    pub is_published: bool,
    pub is_paid: bool,
    pub cover_image_url: String,
}

impl InvitationSummary {
    /// Projects a record using an already-parsed content document.
    pub fn from_record(record: &InvitationRecord, content: &ContentDocument) -> Self {
        Self {
            id: record.id,
            slug: record.slug.clone(),
            badge: TemplateBadge::for_template(&record.template_id, content.sender_side()),
            groom_name: record.groom_name.clone(),
            bride_name: record.bride_name.clone(),
            wedding_date: record.wedding_date,
            is_published: record.is_published,
            is_paid: record.is_paid,
            cover_image_url: crate::services::content_resolution::preview_cover_url(content),
        }
    }
}
