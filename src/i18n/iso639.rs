// SPDX-License-Identifier: PMPL-1.0-or-later

//! ISO 639 language metadata: names, script direction, and code shape.
//!
//! Reference: <https://www.loc.gov/standards/iso639-2/php/code_list.php>

/// Language codes written right-to-left.
///
/// `fa` and `ar` are the two RTL languages the site ships; the rest are
/// flagged so a bundle dropped into the locales directory gets the right
/// direction without a code change.
pub const RTL_CODES: &[&str] = &["ar", "fa", "he", "ur", "ps", "dv", "yi", "ug", "ckb", "sd"];

/// Whether a language tag is written right-to-left.
///
/// Only the primary subtag is considered, case-insensitively, so `fa-IR`
/// and `AR` both count.
///
/// # Examples
/// ```
/// assert!(atlas_site::i18n::is_rtl("fa"));
/// assert!(atlas_site::i18n::is_rtl("ar-EG"));
/// assert!(!atlas_site::i18n::is_rtl("fr"));
/// ```
pub fn is_rtl(code: &str) -> bool {
    let primary = primary_subtag(code);
    RTL_CODES.iter().any(|rtl| rtl.eq_ignore_ascii_case(primary))
}

/// Whether a string has the shape of a language tag we accept for locale
/// bundle file names: a two or three letter lowercase primary subtag,
/// optionally followed by `-` and a region.
pub fn is_language_tag(code: &str) -> bool {
    let mut parts = code.splitn(2, '-');
    let primary = parts.next().unwrap_or("");
    let primary_ok = (2..=3).contains(&primary.len())
        && primary.chars().all(|c| c.is_ascii_lowercase());
    let region_ok = match parts.next() {
        Some(region) => {
            (2..=3).contains(&region.len()) && region.chars().all(|c| c.is_ascii_alphanumeric())
        }
        None => true,
    };
    primary_ok && region_ok
}

/// Returns the English name of a language code.
pub fn language_name(code: &str) -> Option<&'static str> {
    match primary_subtag(code) {
        "en" => Some("English"),
        "fr" => Some("French"),
        "fa" => Some("Persian"),
        "ar" => Some("Arabic"),
        "de" => Some("German"),
        "es" => Some("Spanish"),
        "tr" => Some("Turkish"),
        "ru" => Some("Russian"),
        "zh" => Some("Chinese"),
        "he" => Some("Hebrew"),
        "ur" => Some("Urdu"),
        "ps" => Some("Pashto"),
        "ckb" => Some("Central Kurdish"),
        _ => None,
    }
}

/// Returns the native name of a language code.
///
/// Used by the language switcher so users see their language written in its
/// own script.
pub fn native_name(code: &str) -> Option<&'static str> {
    match primary_subtag(code) {
        "en" => Some("English"),
        "fr" => Some("Français"),
        "fa" => Some("فارسی"),
        "ar" => Some("العربية"),
        "de" => Some("Deutsch"),
        "es" => Some("Español"),
        "tr" => Some("Türkçe"),
        "ru" => Some("Русский"),
        "zh" => Some("中文"),
        "he" => Some("עברית"),
        "ur" => Some("اردو"),
        "ps" => Some("پښتو"),
        "ckb" => Some("کوردی"),
        _ => None,
    }
}

fn primary_subtag(code: &str) -> &str {
    code.split(['-', '_']).next().unwrap_or("").trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rtl_codes_detected() {
        assert!(is_rtl("fa"));
        assert!(is_rtl("ar"));
        assert!(is_rtl("he"));
        assert!(is_rtl("ckb"));
        assert!(is_rtl("FA_ir"));
    }

    #[test]
    fn ltr_codes_detected() {
        assert!(!is_rtl("en"));
        assert!(!is_rtl("fr"));
        assert!(!is_rtl(""));
        assert!(!is_rtl("xx"));
    }

    #[test]
    fn language_tag_shape() {
        assert!(is_language_tag("en"));
        assert!(is_language_tag("ckb"));
        assert!(is_language_tag("fa-IR"));
        assert!(!is_language_tag("EN"));
        assert!(!is_language_tag("english"));
        assert!(!is_language_tag("e"));
    }

    #[test]
    fn names_resolve() {
        assert_eq!(language_name("fa"), Some("Persian"));
        assert_eq!(native_name("ar"), Some("العربية"));
        assert_eq!(native_name("fr-CA"), Some("Français"));
        assert_eq!(native_name("xx"), None);
    }
}
