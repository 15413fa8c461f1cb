//! Shared content model for the Folio client.
//!
//! These types mirror the JSON returned by `GET /api/portfolio/`. The backend
//! is operator-edited, so decoding is deliberately tolerant: every list
//! defaults to empty, optional records decode as `None`, and enum-like string
//! fields fall back to a safe variant instead of failing the whole document.

use serde::{Deserialize, Serialize};

/// What a call-to-action button does when activated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CtaAction {
    /// Scroll to an in-page section named by `target`.
    Scroll,
    /// Open `target` as an external URL.
    Url,
    /// Open the hire/contact modal. Unknown values decode here as well.
    #[default]
    #[serde(other)]
    Modal,
}

/// Site-wide settings: branding, hero copy, CTAs, and contact channels.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SiteSettings {
    #[serde(default)]
    pub brand_name: String,
    #[serde(default)]
    pub brand_subtitle: String,
    #[serde(default)]
    pub hero_heading: String,
    /// Optional kicker line shown above the hero subheading.
    #[serde(default)]
    pub hero_highlight: String,
    #[serde(default)]
    pub hero_subheading: String,
    #[serde(default)]
    pub hero_description: String,
    #[serde(default)]
    pub primary_cta_label: String,
    #[serde(default)]
    pub primary_cta_action: CtaAction,
    #[serde(default)]
    pub primary_cta_target: String,
    #[serde(default)]
    pub secondary_cta_label: String,
    #[serde(default)]
    pub secondary_cta_action: CtaAction,
    #[serde(default)]
    pub secondary_cta_target: String,
    /// Full URL or raw phone-like string; see the link derivation helpers.
    #[serde(default)]
    pub whatsapp_link: String,
    #[serde(default)]
    pub calendly_link: String,
    #[serde(default)]
    pub contact_email: String,
    #[serde(default)]
    pub contact_phone: String,
}

/// One entry of the top navigation bar.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NavigationLink {
    pub label: String,
    /// In-page anchor id, or a URL when `is_external` is set.
    pub target: String,
    #[serde(default)]
    pub is_external: bool,
    #[serde(default)]
    pub order: i32,
}

/// A highlight card within the about section.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AboutHighlight {
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Free-text icon name entered by the operator; resolved against a fixed
    /// registry at render time.
    #[serde(default)]
    pub icon_name: String,
    #[serde(default)]
    pub order: i32,
}

/// The about section record.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AboutSection {
    #[serde(default)]
    pub heading: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub highlight_quote: String,
    #[serde(default)]
    pub highlight_caption: String,
    #[serde(default)]
    pub profile_image: Option<String>,
    #[serde(default)]
    pub highlights: Vec<AboutHighlight>,
}

/// A single skill within a category.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SkillItem {
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Uploaded logo asset path, when present.
    #[serde(default)]
    pub logo: Option<String>,
    /// External logo URL alternative to `logo`.
    #[serde(default)]
    pub logo_url: String,
    #[serde(default)]
    pub order: i32,
}

/// A titled group of skills.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SkillCategory {
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    /// Short "bullet • bullet • bullet" summary line.
    #[serde(default)]
    pub highlight: String,
    #[serde(default)]
    pub order: i32,
    #[serde(default)]
    pub skills: Vec<SkillItem>,
}

/// Technology tag attached to a project.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProjectTech {
    pub name: String,
    #[serde(default)]
    pub order: i32,
}

/// Gallery image attached to a project.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProjectImage {
    pub image: String,
    #[serde(default)]
    pub caption: String,
}

/// A portfolio project entry.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub gradient_start: String,
    #[serde(default)]
    pub gradient_end: String,
    #[serde(default)]
    pub live_url: String,
    #[serde(default)]
    pub code_url: String,
    #[serde(default)]
    pub order: i32,
    #[serde(default)]
    pub tech: Vec<ProjectTech>,
    #[serde(default)]
    pub gallery: Vec<ProjectImage>,
}

/// A quote from a collaborator or client.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Testimonial {
    pub author_name: String,
    #[serde(default)]
    pub author_role: String,
    pub quote: String,
    #[serde(default)]
    pub order: i32,
}

/// Social/contact link shown in the footer and contact section.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
    #[serde(default)]
    pub icon_name: String,
    #[serde(default)]
    pub order: i32,
}

/// Footer copy.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Footer {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub tagline: String,
}

/// Which audience a resume file targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResumeKind {
    /// Designed, human-readable resume.
    Professional,
    /// Plain layout for applicant-tracking systems.
    Ats,
    /// Forward-compatibility catch-all; never surfaced by lookups.
    #[serde(other)]
    Other,
}

/// An uploaded resume file.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Resume {
    pub resume_type: ResumeKind,
    pub file: String,
}

/// Root aggregate returned by the portfolio endpoint.
///
/// Pure remote read state: fetched once per cache window, shared read-only
/// across every section renderer, never mutated locally.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PortfolioContent {
    #[serde(default)]
    pub site: Option<SiteSettings>,
    #[serde(default)]
    pub navigation: Vec<NavigationLink>,
    #[serde(default)]
    pub about: Option<AboutSection>,
    #[serde(default)]
    pub skills: Vec<SkillCategory>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub testimonials: Vec<Testimonial>,
    #[serde(default)]
    pub social_links: Vec<SocialLink>,
    #[serde(default)]
    pub footer: Option<Footer>,
    #[serde(default)]
    pub resumes: Vec<Resume>,
}

impl PortfolioContent {
    /// First resume of the given kind, if any.
    ///
    /// The backend tolerates multiple uploads per kind; only the first one is
    /// ever surfaced.
    pub fn resume_of(&self, kind: ResumeKind) -> Option<&Resume> {
        self.resumes.iter().find(|resume| resume.resume_type == kind)
    }
}

/// Body of `POST /api/contact-messages/`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ContactMessagePayload {
    pub name: String,
    pub email: String,
    pub project: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_document_decodes_to_defaults() {
        let content: PortfolioContent = serde_json::from_str("{}").unwrap();
        assert!(content.site.is_none());
        assert!(content.about.is_none());
        assert!(content.footer.is_none());
        assert!(content.navigation.is_empty());
        assert!(content.skills.is_empty());
        assert!(content.projects.is_empty());
        assert!(content.testimonials.is_empty());
        assert!(content.social_links.is_empty());
        assert!(content.resumes.is_empty());
    }

    #[test]
    fn nullable_records_are_independent() {
        let content: PortfolioContent = serde_json::from_value(json!({
            "site": null,
            "footer": { "text": "Built with care", "tagline": "est. 2024" }
        }))
        .unwrap();
        assert!(content.site.is_none());
        assert_eq!(content.footer.unwrap().text, "Built with care");
    }

    #[test]
    fn unknown_cta_action_decodes_as_modal() {
        let site: SiteSettings = serde_json::from_value(json!({
            "primary_cta_action": "teleport",
            "secondary_cta_action": "scroll"
        }))
        .unwrap();
        assert_eq!(site.primary_cta_action, CtaAction::Modal);
        assert_eq!(site.secondary_cta_action, CtaAction::Scroll);
    }

    #[test]
    fn unknown_resume_kind_does_not_fail_the_document() {
        let content: PortfolioContent = serde_json::from_value(json!({
            "resumes": [
                { "resume_type": "video", "file": "v.mp4" },
                { "resume_type": "ats", "file": "cv.pdf" }
            ]
        }))
        .unwrap();
        assert_eq!(content.resumes[0].resume_type, ResumeKind::Other);
        assert_eq!(content.resume_of(ResumeKind::Ats).unwrap().file, "cv.pdf");
    }

    #[test]
    fn resume_lookup_returns_first_match() {
        let content: PortfolioContent = serde_json::from_value(json!({
            "resumes": [
                { "resume_type": "ats", "file": "a" },
                { "resume_type": "ats", "file": "b" },
                { "resume_type": "professional", "file": "c" }
            ]
        }))
        .unwrap();
        assert_eq!(content.resume_of(ResumeKind::Ats).unwrap().file, "a");
        assert_eq!(content.resume_of(ResumeKind::Professional).unwrap().file, "c");
    }

    #[test]
    fn contact_payload_serializes_all_four_fields() {
        let payload = ContactMessagePayload {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            project: "Engine".into(),
            message: "Hello".into(),
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            value,
            json!({
                "name": "Ada",
                "email": "ada@example.com",
                "project": "Engine",
                "message": "Hello"
            })
        );
    }
}
