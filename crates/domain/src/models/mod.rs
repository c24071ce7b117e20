//! Domain models for the invitation backend.

pub mod content;
pub mod guest;
pub mod invitation;
pub mod rsvp;
pub mod template;

pub use content::{ContentDocument, GreetingTemplate, ImageRef};
pub use guest::GuestRecord;
pub use invitation::InvitationRecord;
pub use rsvp::RsvpResponse;
pub use template::{ColorTheme, TemplateVariant};
