//! Invitation content document model.
//!
//! The editor stores one JSON document per invitation. The schema has grown
//! across several template generations, so nearly every field is optional and
//! a few carry more than one legacy shape. Renderers and resolvers read the
//! document through the accessors here rather than walking raw JSON.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error type for strict content parsing.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("invalid content JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// A picture-like value in the content document.
///
/// Documents authored before the crop tool store a bare URL string; newer
/// documents store an object with crop metadata. `url()` is the single place
/// where the two shapes are normalized, so no other component re-implements
/// shape detection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ImageRef {
    /// Legacy shape: the URL itself.
    Url(String),
    /// Editor shape: URL plus optional crop metadata.
    Object {
        #[serde(default)]
        url: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        crop: Option<CropRect>,
    },
    /// Anything else the editor may have written; resolves to no URL.
    Other(serde_json::Value),
}

impl ImageRef {
    /// Returns the underlying URL, or `""` when the reference carries none.
    ///
    /// The value is returned as-is even when it is not a well-formed URL;
    /// validation is a rendering concern.
    pub fn url(&self) -> &str {
        match self {
            ImageRef::Url(url) => url,
            ImageRef::Object { url: Some(url), .. } => url,
            ImageRef::Object { url: None, .. } => "",
            ImageRef::Other(_) => "",
        }
    }

    /// True when the reference resolves to no URL.
    pub fn is_empty(&self) -> bool {
        self.url().is_empty()
    }
}

/// Crop metadata attached by the editor's image tool.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CropRect {
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default)]
    pub width: f64,
    #[serde(default)]
    pub height: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zoom: Option<f64>,
}

/// Gallery images, in either of the two shapes the schema has used.
///
/// Current documents nest the list under `images`; documents from the first
/// schema stored the gallery as a bare array.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GallerySection {
    Keyed {
        #[serde(default)]
        images: Vec<ImageRef>,
    },
    Flat(Vec<ImageRef>),
}

impl GallerySection {
    /// The gallery images regardless of stored shape.
    pub fn images(&self) -> &[ImageRef] {
        match self {
            GallerySection::Keyed { images } => images,
            GallerySection::Flat(images) => images,
        }
    }

    /// First gallery image, used as the last resort of the cover chains.
    pub fn first_image(&self) -> Option<&ImageRef> {
        self.images().first()
    }
}

impl Default for GallerySection {
    fn default() -> Self {
        GallerySection::Keyed { images: Vec::new() }
    }
}

/// Sharing metadata authored for social crawlers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShareMeta {
    pub kakao_thumbnail: Option<ImageRef>,
    pub og_image: Option<ImageRef>,
    pub og_title: Option<String>,
    pub og_description: Option<String>,
}

/// Cover media section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MediaSection {
    pub cover_image: Option<ImageRef>,
    pub cover_video: Option<String>,
}

/// Intro titles shown on the opening screen.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IntroSection {
    pub main_title: Option<String>,
    pub sub_title: Option<String>,
}

/// Design options carried over from the first schema generation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DesignSection {
    pub cover_title: Option<String>,
}

/// Which household a PARENTS-variant invitation is sent from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SenderSide {
    Groom,
    Bride,
}

impl SenderSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            SenderSide::Groom => "groom",
            SenderSide::Bride => "bride",
        }
    }
}

impl FromStr for SenderSide {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "groom" => Ok(SenderSide::Groom),
            "bride" => Ok(SenderSide::Bride),
            _ => Err(format!("Invalid sender side: {}", s)),
        }
    }
}

impl fmt::Display for SenderSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Sender block, only meaningful for the PARENTS variant.
///
/// `side` is kept as the raw stored string; documents authored against a
/// newer schema may carry values this version does not know.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SenderInfo {
    pub side: Option<String>,
}

/// Envelope defaults for links without a guest record attached.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EnvelopeSection {
    pub salutation: Option<String>,
}

/// A person shown in the profiles section (couple or parents).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonProfile {
    pub role: Option<String>,
    pub name: Option<String>,
    pub photo: Option<ImageRef>,
    pub phone: Option<String>,
    pub introduction: Option<String>,
}

/// One beat of the couple's story timeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StoryBeat {
    pub title: Option<String>,
    pub date: Option<String>,
    pub body: Option<String>,
    pub photo: Option<ImageRef>,
}

/// Question/answer pair for the interview section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InterviewItem {
    pub question: Option<String>,
    pub answer: Option<String>,
}

/// A titled information card (dress code, photo booth, and so on).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InfoItem {
    pub title: Option<String>,
    pub body: Option<String>,
    pub icon: Option<String>,
}

/// Transport guidance entry (subway, bus, parking).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GuidanceItem {
    pub title: Option<String>,
    pub body: Option<String>,
}

/// Guestbook configuration and its authored prompts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GuestbookSection {
    pub enabled: bool,
    pub questions: Vec<String>,
}

impl Default for GuestbookSection {
    fn default() -> Self {
        Self {
            enabled: true,
            questions: Vec::new(),
        }
    }
}

/// A reusable greeting body with placeholder tokens.
///
/// `content` may contain `{이름}` and `{관계}`, substituted per guest at
/// resolution time. `is_default` marks the template the admin console
/// preselects for new guests; resolution itself looks templates up by id only.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GreetingTemplate {
    pub id: String,
    pub name: String,
    pub content: String,
    pub is_default: bool,
}

/// The full parsed content document for one invitation.
///
/// Every consumer must tolerate any subset of these fields being absent;
/// `parse` guarantees a usable (possibly empty) document for any input.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContentDocument {
    pub meta: Option<ShareMeta>,
    pub media: Option<MediaSection>,
    pub main_image: Option<ImageRef>,
    pub gallery: Option<GallerySection>,
    pub color_theme: Option<String>,
    pub intro: Option<IntroSection>,
    pub design: Option<DesignSection>,
    pub sender: Option<SenderInfo>,
    pub envelope: Option<EnvelopeSection>,
    pub profiles: Vec<PersonProfile>,
    pub stories: Vec<StoryBeat>,
    pub interviews: Vec<InterviewItem>,
    pub info_items: Vec<InfoItem>,
    pub guidance: Vec<GuidanceItem>,
    pub guestbook: Option<GuestbookSection>,
    pub greeting_templates: Vec<GreetingTemplate>,
}

impl ContentDocument {
    /// Parses a stored content field, degrading to the empty document.
    ///
    /// Absent, blank, or malformed content yields `ContentDocument::default()`
    /// so every downstream resolver can run its fallback chains instead of
    /// surfacing an error on a guest-facing page. Malformed content is logged.
    pub fn parse(raw: Option<&str>) -> ContentDocument {
        let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
            return ContentDocument::default();
        };
        match Self::try_parse(raw) {
            Ok(doc) => doc,
            Err(err) => {
                tracing::warn!(error = %err, "content document failed to parse, using empty defaults");
                ContentDocument::default()
            }
        }
    }

    /// Strict parse for callers that need the failure cause (editor saves).
    pub fn try_parse(raw: &str) -> Result<ContentDocument, ContentError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Looks up a greeting template by id in the document's library.
    pub fn find_greeting_template(&self, id: &str) -> Option<&GreetingTemplate> {
        self.greeting_templates.iter().find(|t| t.id == id)
    }

    /// The template the admin console preselects for newly added guests.
    pub fn default_greeting_template(&self) -> Option<&GreetingTemplate> {
        self.greeting_templates.iter().find(|t| t.is_default)
    }

    /// The stored sender side, when recognized.
    pub fn sender_side(&self) -> Option<SenderSide> {
        self.sender
            .as_ref()
            .and_then(|s| s.side.as_deref())
            .and_then(|s| SenderSide::from_str(s).ok())
    }

    /// First gallery image across both stored gallery shapes.
    pub fn first_gallery_image(&self) -> Option<&ImageRef> {
        self.gallery.as_ref().and_then(|g| g.first_image())
    }
}
