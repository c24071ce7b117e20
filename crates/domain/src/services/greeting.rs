//! Per-guest greeting resolution for personalized envelope links.
//!
//! This runs on the public, unauthenticated guest path: whatever state the
//! guest record and content document are in, resolution produces a renderable
//! triple and never fails. A broken greeting is less harmful than a broken
//! page.

use crate::models::content::ContentDocument;
use crate::models::guest::{GuestRecord, DEFAULT_HONORIFIC};
use crate::models::template::ColorTheme;

/// Placeholder replaced with the guest's name in greeting templates.
pub const NAME_TOKEN: &str = "{이름}";

/// Placeholder replaced with the guest's relation in greeting templates.
pub const RELATION_TOKEN: &str = "{관계}";

/// Relation used for token substitution when the guest record carries none.
const FALLBACK_RELATION: &str = "지인";

/// Salutation for links without a guest and without an authored default.
const FALLBACK_SALUTATION: &str = "소중한 분께";

/// Everything the envelope needs for one opened link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedGreeting {
    pub salutation: String,
    pub body: String,
    pub envelope_color: String,
}

/// Resolves the salutation, greeting body, and envelope color for a link.
///
/// `guest` is `None` for the shared non-personalized link. The envelope color
/// comes from the document's theme alone; guest identity never changes it.
pub fn resolve_greeting(content: &ContentDocument, guest: Option<&GuestRecord>) -> ResolvedGreeting {
    let envelope_color = ColorTheme::from_id(content.color_theme.as_deref())
        .primary()
        .to_string();

    let Some(guest) = guest else {
        return ResolvedGreeting {
            salutation: default_salutation(content),
            body: String::new(),
            envelope_color,
        };
    };

    ResolvedGreeting {
        salutation: resolve_salutation(guest),
        body: resolve_body(content, guest),
        envelope_color,
    }
}

fn default_salutation(content: &ContentDocument) -> String {
    content
        .envelope
        .as_ref()
        .and_then(|e| e.salutation.as_deref())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(FALLBACK_SALUTATION)
        .to_string()
}

/// Admin-authored override wins verbatim; otherwise the salutation is
/// synthesized from name, relation, and honorific.
fn resolve_salutation(guest: &GuestRecord) -> String {
    if let Some(intro) = guest.intro_greeting.as_deref() {
        if !intro.trim().is_empty() {
            return intro.to_string();
        }
    }

    let honorific = if guest.honorific.trim().is_empty() {
        DEFAULT_HONORIFIC
    } else {
        guest.honorific.as_str()
    };

    match guest.relation.as_deref().map(str::trim).filter(|r| !r.is_empty()) {
        Some(relation) => format!("{} {} {}", guest.name, relation, honorific),
        None => format!("{} {}", guest.name, honorific),
    }
}

/// Template body when the guest references one that exists, else the guest's
/// free-text message, else empty.
fn resolve_body(content: &ContentDocument, guest: &GuestRecord) -> String {
    let from_template = guest
        .greeting_template_id
        .as_deref()
        .and_then(|id| content.find_greeting_template(id))
        .map(|template| substitute_tokens(&template.content, guest));

    match from_template {
        Some(body) => body,
        None => guest.custom_message.clone().unwrap_or_default(),
    }
}

/// Replaces every occurrence of both placeholder tokens.
///
/// The vocabulary is closed, so two sequential passes are enough; replacement
/// order does not matter because neither token can produce the other.
fn substitute_tokens(template: &str, guest: &GuestRecord) -> String {
    let relation = guest
        .relation
        .as_deref()
        .map(str::trim)
        .filter(|r| !r.is_empty())
        .unwrap_or(FALLBACK_RELATION);

    template
        .replace(NAME_TOKEN, &guest.name)
        .replace(RELATION_TOKEN, relation)
}
