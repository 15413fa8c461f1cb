//! Application state for the Folio TUI.
//!
//! `App` holds the resolved content, the active section, scroll state, the
//! contact form, and transient notices. It starts from the all-fallback
//! render and swaps in resolved remote content when the background fetch
//! delivers it; fetch failures keep the fallback in place and are never shown
//! to the user as errors.

use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use folio_api::ApiError;
use folio_content::contact::{ContactForm, Notice, SubmitAttempt};
use folio_content::resolve::ResolvedContent;
use folio_types::{ContactMessagePayload, PortfolioContent};
use tracing::warn;

/// How long a notice stays on screen.
const NOTICE_TTL: Duration = Duration::from_secs(4);

/// Page sections, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Hero,
    About,
    Skills,
    Projects,
    Testimonials,
    Contact,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Hero,
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Testimonials,
        Section::Contact,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Section::Hero => "Home",
            Section::About => "About",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
            Section::Testimonials => "Testimonials",
            Section::Contact => "Contact",
        }
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|section| *section == self).unwrap_or(0)
    }

    fn next(self) -> Section {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    fn prev(self) -> Section {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Editable fields of the contact form, in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Project,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 4] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Project,
        ContactField::Message,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ContactField::Name => "Your Name",
            ContactField::Email => "Your Email",
            ContactField::Project => "Subject",
            ContactField::Message => "Your Message",
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|field| *field == self).unwrap_or(0)
    }

    fn next(self) -> ContactField {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    fn prev(self) -> ContactField {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Results delivered to the event loop by background tasks.
#[derive(Debug)]
pub enum AppEvent {
    ContentLoaded(Arc<PortfolioContent>),
    ContentFailed(ApiError),
    SubmitFinished(Result<(), ApiError>),
}

/// Side effects the runtime must perform after a key press.
#[derive(Debug, PartialEq, Eq)]
pub enum Action {
    /// Send a validated contact payload in the background.
    Submit(ContactMessagePayload),
    /// Force a content refetch.
    Refresh,
}

/// Top-level TUI state.
pub struct App {
    pub content: ResolvedContent,
    /// True until the first fetch settles, one way or the other.
    pub loading: bool,
    /// True when the last fetch failed.
    pub offline: bool,
    /// True once remote content has been rendered at least once.
    pub has_remote: bool,
    pub section: Section,
    pub scroll: u16,
    pub form: ContactForm,
    pub focused_field: ContactField,
    notice: Option<(Notice, Instant)>,
    pub should_quit: bool,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            content: ResolvedContent::fallback(),
            loading: true,
            offline: false,
            has_remote: false,
            section: Section::Hero,
            scroll: 0,
            form: ContactForm::default(),
            focused_field: ContactField::Name,
            notice: None,
            should_quit: false,
        }
    }

    /// The current notice, if it has not expired yet.
    pub fn notice(&self) -> Option<&Notice> {
        self.notice
            .as_ref()
            .filter(|(_, shown_at)| shown_at.elapsed() < NOTICE_TTL)
            .map(|(notice, _)| notice)
    }

    pub fn show_notice(&mut self, notice: Notice) {
        self.notice = Some((notice, Instant::now()));
    }

    /// Drop an expired notice. Called from the tick branch of the loop.
    pub fn tick(&mut self) {
        if let Some((_, shown_at)) = &self.notice
            && shown_at.elapsed() >= NOTICE_TTL
        {
            self.notice = None;
        }
    }

    /// Apply a background-task result.
    pub fn on_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::ContentLoaded(content) => {
                self.content = ResolvedContent::from_remote(Some(&content));
                self.loading = false;
                self.offline = false;
                self.has_remote = true;
            }
            AppEvent::ContentFailed(error) => {
                // Content errors keep whatever is on screen, never a
                // user-facing error.
                warn!(error = %error, "content fetch failed; keeping current copy");
                self.loading = false;
                self.offline = true;
            }
            AppEvent::SubmitFinished(outcome) => {
                let notice = self.form.complete(outcome);
                self.show_notice(notice);
            }
        }
    }

    /// Handle a key press, returning any side effect for the runtime.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Action> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return None;
        }

        match key.code {
            KeyCode::Tab => self.switch_section(self.section.next()),
            KeyCode::BackTab => self.switch_section(self.section.prev()),
            KeyCode::Right if self.section != Section::Contact => self.switch_section(self.section.next()),
            KeyCode::Left if self.section != Section::Contact => self.switch_section(self.section.prev()),
            KeyCode::Char('r') if self.section != Section::Contact => {
                self.loading = true;
                return Some(Action::Refresh);
            }
            _ => {
                if self.section == Section::Contact {
                    return self.handle_contact_key(key);
                }
                self.handle_browse_key(key);
            }
        }
        None
    }

    fn switch_section(&mut self, section: Section) {
        self.section = section;
        self.scroll = 0;
    }

    fn handle_browse_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Up | KeyCode::Char('k') => self.scroll = self.scroll.saturating_sub(1),
            KeyCode::Down | KeyCode::Char('j') => self.scroll = self.scroll.saturating_add(1),
            KeyCode::PageUp => self.scroll = self.scroll.saturating_sub(10),
            KeyCode::PageDown => self.scroll = self.scroll.saturating_add(10),
            KeyCode::Home => self.scroll = 0,
            _ => {}
        }
    }

    fn handle_contact_key(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Esc => {
                self.should_quit = true;
                None
            }
            KeyCode::Up => {
                self.focused_field = self.focused_field.prev();
                None
            }
            KeyCode::Down => {
                self.focused_field = self.focused_field.next();
                None
            }
            KeyCode::Enter => match self.form.begin_submit() {
                SubmitAttempt::Ready(payload) => Some(Action::Submit(payload)),
                SubmitAttempt::Invalid(error) => {
                    self.show_notice(Notice::Error(error.to_string()));
                    None
                }
                SubmitAttempt::InFlight => None,
            },
            KeyCode::Backspace => {
                self.field_mut().pop();
                None
            }
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.field_mut().push(ch);
                None
            }
            _ => None,
        }
    }

    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.form.name,
            ContactField::Email => &self.form.email,
            ContactField::Project => &self.form.project,
            ContactField::Message => &self.form.message,
        }
    }

    fn field_mut(&mut self) -> &mut String {
        match self.focused_field {
            ContactField::Name => &mut self.form.name,
            ContactField::Email => &mut self.form.email,
            ContactField::Project => &mut self.form.project,
            ContactField::Message => &mut self.form.message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEvent;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(app: &mut App, text: &str) {
        for ch in text.chars() {
            app.handle_key(key(KeyCode::Char(ch)));
        }
    }

    #[test]
    fn tab_cycles_sections_and_resets_scroll() {
        let mut app = App::new();
        app.scroll = 7;
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.section, Section::About);
        assert_eq!(app.scroll, 0);
        app.handle_key(key(KeyCode::BackTab));
        assert_eq!(app.section, Section::Hero);
    }

    #[test]
    fn typing_in_contact_fills_the_focused_field() {
        let mut app = App::new();
        app.section = Section::Contact;
        type_text(&mut app, "Ada");
        assert_eq!(app.form.name, "Ada");
        app.handle_key(key(KeyCode::Down));
        type_text(&mut app, "a@b.c");
        assert_eq!(app.form.email, "a@b.c");
        app.handle_key(key(KeyCode::Backspace));
        assert_eq!(app.form.email, "a@b.");
    }

    #[test]
    fn enter_on_incomplete_form_shows_validation_notice_without_action() {
        let mut app = App::new();
        app.section = Section::Contact;
        type_text(&mut app, "Ada");
        let action = app.handle_key(key(KeyCode::Enter));
        assert_eq!(action, None);
        assert_eq!(
            app.notice().unwrap(),
            &Notice::Error("Please complete all fields before sending.".to_string())
        );
    }

    #[test]
    fn enter_on_complete_form_produces_a_single_submit_action() {
        let mut app = App::new();
        app.section = Section::Contact;
        app.form.name = "Ada".into();
        app.form.email = "a@b.c".into();
        app.form.project = "Engine".into();
        app.form.message = "Hi".into();

        let action = app.handle_key(key(KeyCode::Enter));
        assert!(matches!(action, Some(Action::Submit(_))));
        // Second Enter while in flight is ignored.
        assert_eq!(app.handle_key(key(KeyCode::Enter)), None);
    }

    #[test]
    fn failed_fetch_keeps_fallback_copy() {
        let mut app = App::new();
        app.on_event(AppEvent::ContentFailed(ApiError::Status { status: 502 }));
        assert!(!app.loading);
        assert!(app.offline);
        assert_eq!(app.content.hero.heading, "ANANTHU S KUMAR");
        assert!(app.notice().is_none());
    }

    #[test]
    fn loaded_content_replaces_the_fallback() {
        let mut app = App::new();
        let content: PortfolioContent = serde_json::from_value(serde_json::json!({
            "site": { "hero_heading": "Jane Doe" }
        }))
        .unwrap();
        app.on_event(AppEvent::ContentLoaded(Arc::new(content)));
        assert_eq!(app.content.hero.heading, "JANE DOE");
        assert!(!app.offline);
        assert!(app.has_remote);
    }

    #[test]
    fn failed_refresh_keeps_loaded_content_on_screen() {
        let mut app = App::new();
        let content: PortfolioContent = serde_json::from_value(serde_json::json!({
            "site": { "hero_heading": "Jane Doe" }
        }))
        .unwrap();
        app.on_event(AppEvent::ContentLoaded(Arc::new(content)));
        app.on_event(AppEvent::ContentFailed(ApiError::Status { status: 502 }));
        assert!(app.offline);
        assert!(app.has_remote);
        assert_eq!(app.content.hero.heading, "JANE DOE");
    }
}
