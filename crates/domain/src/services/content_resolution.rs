//! Multi-source fallback resolution over the content document.
//!
//! Several places need "the" cover image or title for an invitation, but the
//! document rarely has every field filled in and older documents store the
//! same information in different places. Each resolver here walks one fixed
//! priority chain and returns the first value that actually carries content,
//! or `""` when the document has nothing usable.

use crate::models::content::{ContentDocument, ImageRef};

/// URL of an optional image reference, `""` when absent or carrying no URL.
///
/// Shape normalization itself lives on [`ImageRef::url`]; this only lifts it
/// over `Option` so chain builders can pass document fields directly.
pub fn image_url(value: Option<&ImageRef>) -> &str {
    value.map(ImageRef::url).unwrap_or("")
}

/// Returns the first candidate that resolves to a non-empty URL, else `""`.
///
/// Candidates are tried in the caller's order; absent references and
/// references without a URL are skipped silently.
pub fn resolve_first_image<'a, I>(candidates: I) -> String
where
    I: IntoIterator<Item = Option<&'a ImageRef>>,
{
    candidates
        .into_iter()
        .map(image_url)
        .find(|url| !url.is_empty())
        .unwrap_or_default()
        .to_string()
}

/// Returns the first candidate that is a non-empty string, else `""`.
pub fn resolve_first_text<'a, I>(candidates: I) -> String
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    candidates
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|s| !s.is_empty())
        .unwrap_or_default()
        .to_string()
}

/// Image used by share crawlers (Kakao, OG tags).
///
/// An explicitly authored share asset wins over the in-app cover chain,
/// since crawlers have no other hint which image represents the invitation.
pub fn share_thumbnail_url(content: &ContentDocument) -> String {
    let meta = content.meta.as_ref();
    resolve_first_image([
        meta.and_then(|m| m.kakao_thumbnail.as_ref()),
        meta.and_then(|m| m.og_image.as_ref()),
        content.media.as_ref().and_then(|m| m.cover_image.as_ref()),
        content.main_image.as_ref(),
        content.first_gallery_image(),
    ])
}

/// Cover image for in-app card previews and listings.
pub fn preview_cover_url(content: &ContentDocument) -> String {
    resolve_first_image([
        content.media.as_ref().and_then(|m| m.cover_image.as_ref()),
        content.main_image.as_ref(),
        content.first_gallery_image(),
    ])
}

/// Title shown on the cover, across both schema generations.
pub fn cover_title(content: &ContentDocument) -> String {
    resolve_first_text([
        content.intro.as_ref().and_then(|i| i.main_title.as_deref()),
        content.design.as_ref().and_then(|d| d.cover_title.as_deref()),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(raw: &str) -> ContentDocument {
        ContentDocument::parse(Some(raw))
    }

    #[test]
    fn test_image_url_lifts_option() {
        assert_eq!(image_url(None), "");
        let img = ImageRef::Url("a.jpg".to_string());
        assert_eq!(image_url(Some(&img)), "a.jpg");
    }

    #[test]
    fn test_resolve_first_image_skips_empty_candidates() {
        let empty = ImageRef::Url(String::new());
        let hit = ImageRef::Url("hit.jpg".to_string());
        let later = ImageRef::Url("later.jpg".to_string());
        assert_eq!(
            resolve_first_image([None, Some(&empty), Some(&hit), Some(&later)]),
            "hit.jpg"
        );
        assert_eq!(resolve_first_image([None, Some(&empty)]), "");
    }

    #[test]
    fn test_share_thumbnail_prefers_kakao_asset() {
        let content = doc(
            r#"{
                "meta": {"kakaoThumbnail": "kakao.jpg", "ogImage": "og.jpg"},
                "media": {"coverImage": "cover.jpg"}
            }"#,
        );
        assert_eq!(share_thumbnail_url(&content), "kakao.jpg");
    }

    #[test]
    fn test_share_thumbnail_walks_down_the_chain() {
        let content = doc(
            r#"{
                "meta": {"ogImage": {"url": "og.jpg"}},
                "media": {"coverImage": "cover.jpg"}
            }"#,
        );
        assert_eq!(share_thumbnail_url(&content), "og.jpg");

        let no_meta = doc(r#"{"media": {"coverImage": "cover.jpg"}}"#);
        assert_eq!(share_thumbnail_url(&no_meta), "cover.jpg");

        let main_only = doc(r#"{"mainImage": {"url": "main.jpg"}}"#);
        assert_eq!(share_thumbnail_url(&main_only), "main.jpg");
    }

    #[test]
    fn test_share_thumbnail_reaches_legacy_gallery() {
        let content = doc(r#"{"gallery": ["g1.jpg", "g2.jpg"]}"#);
        assert_eq!(share_thumbnail_url(&content), "g1.jpg");
    }

    #[test]
    fn test_preview_cover_ignores_share_assets() {
        let content = doc(
            r#"{
                "meta": {"kakaoThumbnail": "kakao.jpg"},
                "mainImage": "main.jpg"
            }"#,
        );
        assert_eq!(preview_cover_url(&content), "main.jpg");
    }

    #[test]
    fn test_preview_cover_prefers_cover_image() {
        let content = doc(
            r#"{
                "media": {"coverImage": {"url": "cover.jpg", "crop": {"x": 0, "y": 0, "width": 1, "height": 1}}},
                "mainImage": "main.jpg",
                "gallery": {"images": ["g1.jpg"]}
            }"#,
        );
        assert_eq!(preview_cover_url(&content), "cover.jpg");
    }

    #[test]
    fn test_empty_document_resolves_to_empty_strings() {
        let content = ContentDocument::default();
        assert_eq!(share_thumbnail_url(&content), "");
        assert_eq!(preview_cover_url(&content), "");
        assert_eq!(cover_title(&content), "");
    }

    #[test]
    fn test_object_without_url_is_skipped() {
        let content = doc(
            r#"{
                "media": {"coverImage": {"crop": {"x": 0, "y": 0, "width": 1, "height": 1}}},
                "mainImage": "main.jpg"
            }"#,
        );
        assert_eq!(preview_cover_url(&content), "main.jpg");
    }

    #[test]
    fn test_cover_title_falls_back_to_legacy_design() {
        let modern = doc(r#"{"intro": {"mainTitle": "우리 결혼합니다"}}"#);
        assert_eq!(cover_title(&modern), "우리 결혼합니다");

        let legacy = doc(r#"{"design": {"coverTitle": "Our Wedding"}}"#);
        assert_eq!(cover_title(&legacy), "Our Wedding");

        let both = doc(
            r#"{"intro": {"mainTitle": "우리 결혼합니다"}, "design": {"coverTitle": "Our Wedding"}}"#,
        );
        assert_eq!(cover_title(&both), "우리 결혼합니다");
    }

    #[test]
    fn test_cover_title_skips_blank_modern_title() {
        let content = doc(r#"{"intro": {"mainTitle": "   "}, "design": {"coverTitle": "Fallback"}}"#);
        assert_eq!(cover_title(&content), "Fallback");
    }
}
