//! Single-pass merge of remote content with literal fallback copy.
//!
//! Every renderer consumes a [`ResolvedContent`] and never touches the raw
//! document, so the defaulting contract lives here and nowhere else. The pass
//! is pure: remote value if present and non-empty, fixed literal otherwise,
//! with every `order`-bearing list sorted ascending (stable, so equal orders
//! keep arrival order).

use folio_types::{CtaAction, PortfolioContent, ResumeKind, SiteSettings};
use serde::Serialize;

use crate::icons::{Icon, resolve_icon};
use crate::links;

/// Brand identity shown in the navigation bar.
#[derive(Clone, Debug, Serialize)]
pub struct Brand {
    pub name: String,
    pub subtitle: String,
}

/// A resolved call-to-action descriptor.
#[derive(Clone, Debug, Serialize)]
pub struct Cta {
    pub label: String,
    pub action: CtaAction,
    pub target: String,
}

/// Hero section copy.
#[derive(Clone, Debug, Serialize)]
pub struct Hero {
    /// Always uppercased, as the original renders it.
    pub heading: String,
    /// Kicker line; omitted from rendering when absent.
    pub highlight: Option<String>,
    pub subheading: String,
    pub description: String,
    pub primary_cta: Cta,
    pub secondary_cta: Cta,
}

/// Navigation entry with ordering already applied.
#[derive(Clone, Debug, Serialize)]
pub struct NavItem {
    pub label: String,
    pub target: String,
    pub is_external: bool,
}

/// About highlight card with its icon resolved.
#[derive(Clone, Debug, Serialize)]
pub struct AboutCard {
    pub title: String,
    pub description: String,
    pub icon: Icon,
}

/// About section, always present after resolution.
#[derive(Clone, Debug, Serialize)]
pub struct About {
    pub heading: String,
    pub subtitle: String,
    pub description: String,
    pub quote: String,
    pub caption: String,
    pub highlights: Vec<AboutCard>,
}

#[derive(Clone, Debug, Serialize)]
pub struct Skill {
    pub name: String,
    pub description: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct SkillGroup {
    pub title: String,
    pub subtitle: String,
    pub highlight: String,
    pub skills: Vec<Skill>,
}

#[derive(Clone, Debug, Serialize)]
pub struct ProjectView {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub tech: Vec<String>,
    pub live_url: String,
    pub code_url: String,
    pub gallery_captions: Vec<String>,
}

#[derive(Clone, Debug, Serialize)]
pub struct TestimonialView {
    pub author_name: String,
    pub author_role: String,
    pub quote: String,
}

/// Social link with both the untouched href and its display form.
#[derive(Clone, Debug, Serialize)]
pub struct SocialLinkView {
    pub label: String,
    pub href: String,
    pub display: String,
    pub icon: Icon,
}

/// Quick contact affordance (WhatsApp, Calendly). Only derivable entries
/// exist; nothing is rendered disabled.
#[derive(Clone, Debug, Serialize)]
pub struct QuickLink {
    pub label: String,
    pub href: String,
    pub icon: Icon,
}

#[derive(Clone, Debug, Serialize)]
pub struct FooterView {
    pub text: String,
    pub tagline: String,
}

/// Resume files by kind, first upload of each kind winning.
#[derive(Clone, Debug, Default, Serialize)]
pub struct Resumes {
    pub professional: Option<String>,
    pub ats: Option<String>,
}

/// The fully-defaulted view of the portfolio, safe for any renderer.
#[derive(Clone, Debug, Serialize)]
pub struct ResolvedContent {
    pub brand: Brand,
    pub hero: Hero,
    pub navigation: Vec<NavItem>,
    pub about: About,
    pub skills: Vec<SkillGroup>,
    pub projects: Vec<ProjectView>,
    pub testimonials: Vec<TestimonialView>,
    pub social_links: Vec<SocialLinkView>,
    pub quick_links: Vec<QuickLink>,
    pub footer: FooterView,
    pub resumes: Resumes,
}

impl ResolvedContent {
    /// Resolve a remote document, or produce the all-fallback view when the
    /// fetch failed or returned nothing.
    pub fn from_remote(remote: Option<&PortfolioContent>) -> Self {
        let site = remote.and_then(|content| content.site.as_ref());

        Self {
            brand: resolve_brand(site),
            hero: resolve_hero(site),
            navigation: resolve_navigation(remote),
            about: resolve_about(remote),
            skills: resolve_skills(remote),
            projects: resolve_projects(remote),
            testimonials: resolve_testimonials(remote),
            social_links: resolve_social_links(remote),
            quick_links: resolve_quick_links(site),
            footer: resolve_footer(remote),
            resumes: resolve_resumes(remote),
        }
    }

    /// The view used before any content has arrived (and after failed
    /// fetches).
    pub fn fallback() -> Self {
        Self::from_remote(None)
    }
}

/// Remote value when non-empty after trimming, else the literal fallback.
fn text_or<'a>(remote: Option<&'a str>, fallback: &'a str) -> &'a str {
    match remote {
        Some(value) if !value.trim().is_empty() => value,
        _ => fallback,
    }
}

fn resolve_brand(site: Option<&SiteSettings>) -> Brand {
    Brand {
        name: text_or(site.map(|s| s.brand_name.as_str()), "ananthu.online").to_string(),
        subtitle: text_or(site.map(|s| s.brand_subtitle.as_str()), "Ananthu S Kumar").to_string(),
    }
}

fn resolve_hero(site: Option<&SiteSettings>) -> Hero {
    let highlight = site
        .map(|s| s.hero_highlight.trim())
        .filter(|value| !value.is_empty())
        .map(str::to_string);

    Hero {
        heading: text_or(site.map(|s| s.hero_heading.as_str()), "ANANTHU S KUMAR").to_uppercase(),
        highlight,
        subheading: text_or(
            site.map(|s| s.hero_subheading.as_str()),
            "Software Engineer & Full Stack Developer",
        )
        .to_string(),
        description: text_or(
            site.map(|s| s.hero_description.as_str()),
            "Crafting intelligent, scalable, and beautiful web solutions",
        )
        .to_string(),
        primary_cta: Cta {
            label: text_or(site.map(|s| s.primary_cta_label.as_str()), "Hire Me").to_string(),
            action: site.map(|s| s.primary_cta_action).unwrap_or(CtaAction::Modal),
            target: text_or(site.map(|s| s.primary_cta_target.as_str()), "contact").to_string(),
        },
        secondary_cta: Cta {
            label: text_or(site.map(|s| s.secondary_cta_label.as_str()), "View Work").to_string(),
            action: site.map(|s| s.secondary_cta_action).unwrap_or(CtaAction::Scroll),
            target: text_or(site.map(|s| s.secondary_cta_target.as_str()), "projects").to_string(),
        },
    }
}

fn resolve_navigation(remote: Option<&PortfolioContent>) -> Vec<NavItem> {
    let links = remote.map(|content| content.navigation.as_slice()).unwrap_or_default();
    if links.is_empty() {
        return ["About", "Skills", "Projects", "Testimonials", "Contact"]
            .iter()
            .map(|label| NavItem {
                label: (*label).to_string(),
                target: label.to_lowercase(),
                is_external: false,
            })
            .collect();
    }

    let mut sorted: Vec<_> = links.to_vec();
    sorted.sort_by_key(|link| link.order);
    sorted
        .into_iter()
        .map(|link| NavItem {
            label: link.label,
            target: link.target,
            is_external: link.is_external,
        })
        .collect()
}

fn resolve_about(remote: Option<&PortfolioContent>) -> About {
    let Some(section) = remote.and_then(|content| content.about.as_ref()) else {
        return About {
            heading: "About Me".to_string(),
            subtitle: "Professional Developer".to_string(),
            description: "I'm a software engineer who loves turning ideas into reality through code. \
                          With expertise in modern web technologies, I build scalable applications \
                          that make a difference."
                .to_string(),
            quote: "Passionate about creating elegant solutions to complex problems".to_string(),
            caption: String::new(),
            highlights: vec![
                AboutCard {
                    title: "Clean Code".to_string(),
                    description: "Maintainable & elegant solutions".to_string(),
                    icon: Icon::Sparkles,
                },
                AboutCard {
                    title: "Fast Delivery".to_string(),
                    description: "Efficient & reliable execution".to_string(),
                    icon: Icon::Rocket,
                },
            ],
        };
    };

    let mut highlights = section.highlights.clone();
    highlights.sort_by_key(|card| card.order);

    About {
        heading: text_or(Some(&section.heading), "About Me").to_string(),
        subtitle: section.subtitle.clone(),
        description: section.description.clone(),
        quote: section.highlight_quote.clone(),
        caption: section.highlight_caption.clone(),
        highlights: highlights
            .into_iter()
            .map(|card| AboutCard {
                icon: resolve_icon(&card.icon_name),
                title: card.title,
                description: card.description,
            })
            .collect(),
    }
}

/// Placeholder categories shown while the operator has not entered any
/// skills. Exactly three, each with an empty skill list.
fn placeholder_skills() -> Vec<SkillGroup> {
    [
        (
            "Frontend & Interfaces",
            "Designing human moments with high-polish UI engineering.",
            "Immersive UI • Motion Systems • Design Systems",
        ),
        (
            "Backends & Intelligence",
            "Architecting resilient, data-driven services with automation.",
            "API Design • Data Pipelines • AI Integrations",
        ),
        (
            "Cloud & Delivery",
            "Ensuring reliability, security, and speed from commit to prod.",
            "DevOps • Observability • Continuous Delivery",
        ),
    ]
    .iter()
    .map(|(title, subtitle, highlight)| SkillGroup {
        title: (*title).to_string(),
        subtitle: (*subtitle).to_string(),
        highlight: (*highlight).to_string(),
        skills: Vec::new(),
    })
    .collect()
}

fn resolve_skills(remote: Option<&PortfolioContent>) -> Vec<SkillGroup> {
    let categories = remote.map(|content| content.skills.as_slice()).unwrap_or_default();
    if categories.is_empty() {
        return placeholder_skills();
    }

    let mut sorted: Vec<_> = categories.to_vec();
    sorted.sort_by_key(|category| category.order);
    sorted
        .into_iter()
        .map(|category| {
            let mut skills = category.skills;
            skills.sort_by_key(|skill| skill.order);
            SkillGroup {
                title: category.title,
                subtitle: category.subtitle,
                highlight: category.highlight,
                skills: skills
                    .into_iter()
                    .map(|skill| Skill {
                        name: skill.name,
                        description: skill.description,
                    })
                    .collect(),
            }
        })
        .collect()
}

fn resolve_projects(remote: Option<&PortfolioContent>) -> Vec<ProjectView> {
    let mut projects = remote.map(|content| content.projects.clone()).unwrap_or_default();
    projects.sort_by_key(|project| project.order);
    projects
        .into_iter()
        .map(|project| {
            let mut tech = project.tech;
            tech.sort_by_key(|tag| tag.order);
            ProjectView {
                title: project.title,
                subtitle: project.subtitle,
                description: project.description,
                tech: tech.into_iter().map(|tag| tag.name).collect(),
                live_url: project.live_url,
                code_url: project.code_url,
                gallery_captions: project.gallery.into_iter().map(|image| image.caption).collect(),
            }
        })
        .collect()
}

fn resolve_testimonials(remote: Option<&PortfolioContent>) -> Vec<TestimonialView> {
    let mut testimonials = remote.map(|content| content.testimonials.clone()).unwrap_or_default();
    if testimonials.is_empty() {
        return vec![TestimonialView {
            author_name: "Client".to_string(),
            author_role: "Product Leader".to_string(),
            quote: "Creative, reliable, and detail-oriented. Highly recommend!".to_string(),
        }];
    }

    testimonials.sort_by_key(|entry| entry.order);
    testimonials
        .into_iter()
        .map(|entry| TestimonialView {
            author_name: entry.author_name,
            author_role: entry.author_role,
            quote: entry.quote,
        })
        .collect()
}

fn resolve_social_links(remote: Option<&PortfolioContent>) -> Vec<SocialLinkView> {
    let mut social = remote.map(|content| content.social_links.clone()).unwrap_or_default();
    social.sort_by_key(|link| link.order);
    social
        .into_iter()
        .map(|link| SocialLinkView {
            display: links::display_href(&link.url).to_string(),
            icon: resolve_icon(&link.icon_name),
            label: link.label,
            href: link.url,
        })
        .collect()
}

fn resolve_quick_links(site: Option<&SiteSettings>) -> Vec<QuickLink> {
    let mut quick = Vec::new();
    if let Some(site) = site {
        if let Some(href) = links::whatsapp_link(site) {
            quick.push(QuickLink {
                label: "WhatsApp Chat".to_string(),
                href,
                icon: Icon::MessageCircle,
            });
        }
        let calendly = site.calendly_link.trim();
        if !calendly.is_empty() {
            quick.push(QuickLink {
                label: "Book a Call".to_string(),
                href: calendly.to_string(),
                icon: Icon::Calendar,
            });
        }
    }
    quick
}

fn resolve_footer(remote: Option<&PortfolioContent>) -> FooterView {
    let footer = remote.and_then(|content| content.footer.as_ref());
    FooterView {
        text: text_or(
            footer.map(|f| f.text.as_str()),
            "© 2025 Portfolio. Crafted with passion and curiosity.",
        )
        .to_string(),
        tagline: text_or(footer.map(|f| f.tagline.as_str()), "Craft. Flow. Impact.").to_string(),
    }
}

fn resolve_resumes(remote: Option<&PortfolioContent>) -> Resumes {
    let Some(content) = remote else {
        return Resumes::default();
    };
    Resumes {
        professional: content
            .resume_of(ResumeKind::Professional)
            .map(|resume| resume.file.clone()),
        ats: content.resume_of(ResumeKind::Ats).map(|resume| resume.file.clone()),
    }
}
