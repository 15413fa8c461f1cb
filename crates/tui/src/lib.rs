//! Terminal user interface for the Folio portfolio client.
//!
//! Renders the resolved portfolio sections (hero, about, skills, projects,
//! testimonials) and hosts the interactive contact form. The UI follows a
//! simple component split: `app` owns state and key handling, `ui` draws,
//! and `runtime` owns the terminal lifecycle and event loop.
//!
//! All content shown here is a [`folio_content::resolve::ResolvedContent`];
//! the UI makes no defaulting decisions of its own. A failed content fetch
//! leaves the fallback copy on screen and is never surfaced as an error.

mod app;
mod runtime;
mod theme;
mod ui;

use anyhow::Result;
use folio_api::PortfolioClient;

/// Run the TUI until the user quits.
///
/// Content is fetched once in the background through the shared content
/// cache; the contact form POSTs through the same client.
pub async fn run(client: PortfolioClient) -> Result<()> {
    runtime::run_app(client).await
}
