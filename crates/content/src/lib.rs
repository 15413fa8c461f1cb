//! Content resolution and submission flow for the Folio client.
//!
//! This crate sits between the API client and the renderers:
//!
//! - [`cache`] wraps the content GET in a staleness-windowed, request-collapsing
//!   query so every renderer reads the same document.
//! - [`resolve`] merges the remote document with literal fallback copy in a
//!   single pure pass, so no renderer has to default anything itself.
//! - [`icons`] maps operator-entered icon names onto a fixed registry.
//! - [`links`] derives WhatsApp/quick links and display-friendly hrefs.
//! - [`contact`] owns the Idle/Submitting state machine around the contact
//!   message POST.

pub mod cache;
pub mod contact;
pub mod icons;
pub mod links;
pub mod resolve;

pub use cache::{CONTENT_CACHE_KEY, ContentCache, ContentSource, DEFAULT_STALE_AFTER};
pub use contact::{ContactForm, MessageSink, Notice, SubmitAttempt, ValidationError};
pub use icons::{Icon, resolve_icon};
pub use resolve::ResolvedContent;
