// SPDX-License-Identifier: PMPL-1.0-or-later

//! Internationalisation for atlas-site.
//!
//! ## Supported languages
//!
//! | Code | Language | Native name | Direction |
//! |------|----------|-------------|-----------|
//! | en   | English  | English     | ltr       |
//! | fr   | French   | Français    | ltr       |
//! | fa   | Persian  | فارسی       | rtl       |
//! | ar   | Arabic   | العربية     | rtl       |
//!
//! ## Design
//!
//! Translation keys use dotted namespaces: `"nav.home"`, `"contact.error.email"`.
//! Lookups fall back to English when a key is missing in the requested
//! language. If the key is missing in English too, the key string itself is
//! returned, so a missing translation shows up on the page instead of a blank.
//!
//! Templates may contain `{{name}}` placeholders, filled by [`t_with`] or
//! [`Localizer::t_with`]. Placeholders without a value stay literal.

mod bundle;
mod catalog;
mod iso639;

pub use bundle::{coverage, discover, Bundle, LanguageCoverage, Localizer};
pub use catalog::{interpolate, known_keys, t, t_with, Direction, Lang};
pub use iso639::{is_language_tag, is_rtl, language_name, native_name, RTL_CODES};
