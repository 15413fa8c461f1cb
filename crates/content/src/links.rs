//! Link derivation helpers for contact affordances.

use folio_types::SiteSettings;
use once_cell::sync::Lazy;
use regex::Regex;

static NON_DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\d]").expect("non-digit pattern"));

/// Derive a WhatsApp deep link from the site settings.
///
/// Prefers the configured `whatsapp_link`, falling back to `contact_phone`.
/// A value that already looks like a URL is used verbatim; otherwise all
/// non-digit characters are stripped and the remainder becomes a
/// `https://wa.me/<digits>` link. When nothing usable remains the affordance
/// is absent entirely (callers omit it rather than render it disabled).
pub fn whatsapp_link(site: &SiteSettings) -> Option<String> {
    let raw = [&site.whatsapp_link, &site.contact_phone]
        .into_iter()
        .map(|value| value.trim())
        .find(|value| !value.is_empty())?;

    if raw.starts_with("http://") || raw.starts_with("https://") {
        return Some(raw.to_string());
    }

    let digits = NON_DIGITS.replace_all(raw, "");
    if digits.is_empty() {
        return None;
    }
    Some(format!("https://wa.me/{digits}"))
}

/// Display form of a link href: `mailto:` and `http(s)://` prefixes are
/// stripped for presentation only. The navigation href stays unmodified.
pub fn display_href(url: &str) -> &str {
    url.strip_prefix("mailto:")
        .or_else(|| url.strip_prefix("https://"))
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site_with(whatsapp: &str, phone: &str) -> SiteSettings {
        SiteSettings {
            whatsapp_link: whatsapp.to_string(),
            contact_phone: phone.to_string(),
            ..SiteSettings::default()
        }
    }

    #[test]
    fn phone_like_values_become_wa_me_links() {
        let site = site_with("+1 (555) 123-4567", "");
        assert_eq!(whatsapp_link(&site).as_deref(), Some("https://wa.me/15551234567"));
    }

    #[test]
    fn url_values_pass_through_verbatim() {
        let site = site_with("https://wa.me/999", "");
        assert_eq!(whatsapp_link(&site).as_deref(), Some("https://wa.me/999"));
    }

    #[test]
    fn contact_phone_is_the_fallback_source() {
        let site = site_with("", "  +44 20 7946 0958 ");
        assert_eq!(whatsapp_link(&site).as_deref(), Some("https://wa.me/442079460958"));
    }

    #[test]
    fn empty_or_symbol_only_values_yield_no_link() {
        assert_eq!(whatsapp_link(&site_with("", "")), None);
        assert_eq!(whatsapp_link(&site_with("+-() ", "")), None);
    }

    #[test]
    fn display_href_strips_known_prefixes_only() {
        assert_eq!(display_href("mailto:hi@example.com"), "hi@example.com");
        assert_eq!(display_href("https://github.com/u"), "github.com/u");
        assert_eq!(display_href("http://example.com"), "example.com");
        assert_eq!(display_href("wa.me/123"), "wa.me/123");
    }
}
