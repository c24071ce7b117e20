//! Template variant classification and derived display metadata.
//!
//! `template_id` is an opaque stored string that has accumulated aliases over
//! several releases. Everything the rest of the system derives from it (badge,
//! label, route prefix, rendering mode, envelope theme) is centralized here so
//! editor links, previews, and public share links can never disagree.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::content::SenderSide;

/// Visual template family of an invitation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateVariant {
    /// Standard couple-sent invitation; also the fallback for unknown ids.
    #[default]
    Our,
    Family,
    Parents,
    Film,
    Magazine,
}

impl TemplateVariant {
    /// Maps a stored `template_id` to its variant.
    ///
    /// Total over all strings: ids minted by newer releases classify as the
    /// standard variant rather than failing. Matching is case-insensitive and
    /// ignores surrounding whitespace.
    pub fn classify(template_id: &str) -> TemplateVariant {
        Self::from_id(template_id).unwrap_or_default()
    }

    /// Alias-table lookup, `None` for ids this version does not know.
    pub fn from_id(template_id: &str) -> Option<TemplateVariant> {
        match template_id.trim().to_lowercase().as_str() {
            "our" | "narrative-our" | "our-classic" => Some(TemplateVariant::Our),
            "family" | "narrative-family" | "family-garden" => Some(TemplateVariant::Family),
            "parents" | "narrative-parents" | "parents-formal" => Some(TemplateVariant::Parents),
            "film" | "narrative-film" | "film-noir" => Some(TemplateVariant::Film),
            "magazine" | "narrative-magazine" | "magazine-cover" => Some(TemplateVariant::Magazine),
            _ => None,
        }
    }

    /// Canonical id for this variant, the one new invitations are saved with.
    pub fn canonical_id(&self) -> &'static str {
        match self {
            TemplateVariant::Our => "our",
            TemplateVariant::Family => "family",
            TemplateVariant::Parents => "parents",
            TemplateVariant::Film => "film",
            TemplateVariant::Magazine => "magazine",
        }
    }

    /// Fixed display label for the variant.
    ///
    /// PARENTS invitations are labeled per sender side through
    /// [`display_label`], which callers with a raw id should prefer.
    pub fn label(&self) -> &'static str {
        match self {
            TemplateVariant::Our => "신랑신부용",
            TemplateVariant::Family => "가족용",
            TemplateVariant::Parents => "혼주용",
            TemplateVariant::Film => "필름형",
            TemplateVariant::Magazine => "매거진형",
        }
    }

    /// Badge color shown next to the label in editor listings.
    pub fn badge_color(&self) -> &'static str {
        match self {
            TemplateVariant::Our => "#4A6FA5",
            TemplateVariant::Family => "#5B8C5A",
            TemplateVariant::Parents => "#8A2B2B",
            TemplateVariant::Film => "#3D3A4B",
            TemplateVariant::Magazine => "#B5793A",
        }
    }

    /// Path segment the invitation is served under.
    ///
    /// PARENTS invitations live on their own segment because their public
    /// page renders an envelope flow; every link builder must go through
    /// this method.
    pub fn route_prefix(&self) -> &'static str {
        match self {
            TemplateVariant::Parents => "/parents",
            _ => "/invitation",
        }
    }

    /// True when the public page opens with an envelope instead of a cover.
    pub fn uses_envelope(&self) -> bool {
        matches!(self, TemplateVariant::Parents)
    }
}

impl FromStr for TemplateVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_id(s).ok_or_else(|| format!("Unknown template id: {}", s))
    }
}

impl fmt::Display for TemplateVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.canonical_id())
    }
}

/// Display label for a stored template id.
///
/// PARENTS branches on the sender side; recognized variants use their fixed
/// labels; unrecognized ids pass through as the label so listings never show
/// a blank badge.
pub fn display_label(template_id: &str, sender_side: Option<SenderSide>) -> String {
    match TemplateVariant::from_id(template_id) {
        Some(TemplateVariant::Parents) => match sender_side {
            Some(SenderSide::Groom) => "신랑 혼주용".to_string(),
            Some(SenderSide::Bride) => "신부 혼주용".to_string(),
            None => "혼주용".to_string(),
        },
        Some(variant) => variant.label().to_string(),
        None => template_id.to_string(),
    }
}

/// Badge metadata for editor listings.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct TemplateBadge {
    pub label: String,
    pub color: &'static str,
}

impl TemplateBadge {
    /// Builds the badge for a stored template id.
    pub fn for_template(template_id: &str, sender_side: Option<SenderSide>) -> TemplateBadge {
        TemplateBadge {
            label: display_label(template_id, sender_side),
            color: TemplateVariant::classify(template_id).badge_color(),
        }
    }
}

/// Envelope color theme for PARENTS invitations.
///
/// Closed table of the six authored themes. Unknown stored ids resolve to
/// burgundy so a newer document never renders without a theme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTheme {
    #[default]
    Burgundy,
    Navy,
    Forest,
    Rose,
    Gold,
    Charcoal,
}

impl ColorTheme {
    /// Resolves a stored theme id, falling back to the default theme.
    pub fn from_id(id: Option<&str>) -> ColorTheme {
        match id.map(|s| s.trim().to_lowercase()).as_deref() {
            Some("burgundy") => ColorTheme::Burgundy,
            Some("navy") => ColorTheme::Navy,
            Some("forest") => ColorTheme::Forest,
            Some("rose") => ColorTheme::Rose,
            Some("gold") => ColorTheme::Gold,
            Some("charcoal") => ColorTheme::Charcoal,
            _ => ColorTheme::default(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ColorTheme::Burgundy => "burgundy",
            ColorTheme::Navy => "navy",
            ColorTheme::Forest => "forest",
            ColorTheme::Rose => "rose",
            ColorTheme::Gold => "gold",
            ColorTheme::Charcoal => "charcoal",
        }
    }

    /// Primary envelope color.
    pub fn primary(&self) -> &'static str {
        match self {
            ColorTheme::Burgundy => "#8A2B2B",
            ColorTheme::Navy => "#1F3A5F",
            ColorTheme::Forest => "#2F5D46",
            ColorTheme::Rose => "#C2728A",
            ColorTheme::Gold => "#B08D3C",
            ColorTheme::Charcoal => "#3A3A3C",
        }
    }

    /// Accent color paired with the primary on the envelope seal and text.
    pub fn accent(&self) -> &'static str {
        match self {
            ColorTheme::Burgundy => "#E8D9C5",
            ColorTheme::Navy => "#D9E2EC",
            ColorTheme::Forest => "#E4EFE7",
            ColorTheme::Rose => "#F7E8ED",
            ColorTheme::Gold => "#F5EDD8",
            ColorTheme::Charcoal => "#E5E5EA",
        }
    }
}

impl fmt::Display for ColorTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
