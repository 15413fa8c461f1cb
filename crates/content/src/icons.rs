//! Fixed icon registry for operator-entered icon names.
//!
//! Remote content references icons by free-text name, decoupled from whatever
//! icon set the UI actually ships. Resolution is a static table lookup:
//! case-sensitive exact match first, then a retry with the first letter
//! capitalized, then [`Icon::DEFAULT`]. Resolution never fails.

use serde::Serialize;

/// The finite set of icons the renderers know how to draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Icon {
    Briefcase,
    Calendar,
    Cloud,
    Code2,
    Cpu,
    Database,
    ExternalLink,
    Github,
    Globe,
    Layers,
    Linkedin,
    Mail,
    MessageCircle,
    PenTool,
    Quote,
    Rocket,
    Sparkles,
    Star,
    Users,
    Zap,
}

impl Icon {
    /// Fallback used when a name resolves to nothing.
    pub const DEFAULT: Icon = Icon::Sparkles;

    /// Registry name of this icon.
    pub fn name(self) -> &'static str {
        REGISTRY
            .iter()
            .find(|(_, icon)| *icon == self)
            .map(|(name, _)| *name)
            .unwrap_or("Sparkles")
    }

    /// Single-character glyph used by the terminal renderers.
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Briefcase => "🧳",
            Icon::Calendar => "📅",
            Icon::Cloud => "☁",
            Icon::Code2 => "⌨",
            Icon::Cpu => "🖥",
            Icon::Database => "🗄",
            Icon::ExternalLink => "↗",
            Icon::Github => "🐙",
            Icon::Globe => "🌐",
            Icon::Layers => "▤",
            Icon::Linkedin => "💼",
            Icon::Mail => "✉",
            Icon::MessageCircle => "💬",
            Icon::PenTool => "✎",
            Icon::Quote => "❝",
            Icon::Rocket => "🚀",
            Icon::Sparkles => "✦",
            Icon::Star => "★",
            Icon::Users => "👥",
            Icon::Zap => "⚡",
        }
    }
}

/// Name-to-icon table. Names follow the upstream icon set's PascalCase.
const REGISTRY: &[(&str, Icon)] = &[
    ("Briefcase", Icon::Briefcase),
    ("Calendar", Icon::Calendar),
    ("Cloud", Icon::Cloud),
    ("Code2", Icon::Code2),
    ("Cpu", Icon::Cpu),
    ("Database", Icon::Database),
    ("ExternalLink", Icon::ExternalLink),
    ("Github", Icon::Github),
    ("Globe", Icon::Globe),
    ("Layers", Icon::Layers),
    ("Linkedin", Icon::Linkedin),
    ("Mail", Icon::Mail),
    ("MessageCircle", Icon::MessageCircle),
    ("PenTool", Icon::PenTool),
    ("Quote", Icon::Quote),
    ("Rocket", Icon::Rocket),
    ("Sparkles", Icon::Sparkles),
    ("Star", Icon::Star),
    ("Users", Icon::Users),
    ("Zap", Icon::Zap),
];

/// Resolve an operator-entered icon name.
///
/// Exact match, then capitalized-first-letter retry, then the default.
pub fn resolve_icon(name: &str) -> Icon {
    let trimmed = name.trim();
    if let Some(icon) = lookup(trimmed) {
        return icon;
    }
    if let Some(icon) = lookup(&capitalize_first(trimmed)) {
        return icon;
    }
    Icon::DEFAULT
}

fn lookup(name: &str) -> Option<Icon> {
    REGISTRY.iter().find(|(candidate, _)| *candidate == name).map(|(_, icon)| *icon)
}

fn capitalize_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
