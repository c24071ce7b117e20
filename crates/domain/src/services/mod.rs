//! Domain services for the invitation backend.
//!
//! Services contain the pure resolution and aggregation logic that operates
//! on domain models.

pub mod content_resolution;
pub mod greeting;
pub mod lifecycle;
pub mod rsvp_stats;

pub use content_resolution::{cover_title, preview_cover_url, share_thumbnail_url};

pub use greeting::{resolve_greeting, ResolvedGreeting};

pub use lifecycle::{deletion_notice, deletion_notice_at, DeletionBasis, DeletionNotice};

pub use rsvp_stats::{filter_sort_search, summarize, RsvpFilter, RsvpQuery, RsvpSort, RsvpSummary};
