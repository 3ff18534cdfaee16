// SPDX-License-Identifier: PMPL-1.0-or-later

//! Active-language resolver with on-demand locale bundles.
//!
//! The built-in catalog is always available. A locales directory may hold
//! `<code>.json` / `<code>.yaml` files with flat `key: string` maps that
//! override individual entries; a bundle is read the first time its language
//! becomes active and kept for the life of the process.
//!
//! Resolution order for a key: active bundle, built-in active language,
//! English bundle, built-in English, and finally the key itself.

use super::catalog::{self, interpolate, Direction, Lang};
use super::iso639;
use anyhow::{bail, Context, Result};
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A locale bundle read from disk.
#[derive(Debug, Clone, Default)]
pub struct Bundle {
    strings: HashMap<String, String>,
}

impl Bundle {
    /// Blank values count as absent so the lookup falls through.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.strings
            .get(key)
            .map(String::as_str)
            .filter(|value| !value.trim().is_empty())
    }

    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    /// Read and parse one bundle file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read(path).with_context(|| format!("reading bundle {}", path.display()))?;
        let text = decode_text(&raw)
            .with_context(|| format!("decoding bundle {}", path.display()))?;
        let strings: HashMap<String, String> = match bundle_extension(path) {
            Some("json") => serde_json::from_str(&text)
                .with_context(|| format!("parsing JSON bundle {}", path.display()))?,
            Some("yaml") | Some("yml") => serde_yaml::from_str(&text)
                .with_context(|| format!("parsing YAML bundle {}", path.display()))?,
            _ => bail!("unsupported bundle format: {}", path.display()),
        };
        Ok(Self { strings })
    }
}

/// Resolves keys for the currently active language.
#[derive(Debug, Clone)]
pub struct Localizer {
    active: Lang,
    locales_dir: Option<PathBuf>,
    bundles: HashMap<Lang, Bundle>,
}

impl Localizer {
    /// Built-in catalog only.
    pub fn new(lang: Lang) -> Self {
        Self::with_locales_dir(lang, None)
    }

    /// Built-in catalog overlaid with bundles from `locales_dir`.
    pub fn with_locales_dir(lang: Lang, locales_dir: Option<PathBuf>) -> Self {
        let mut localizer = Self {
            active: Lang::En,
            locales_dir,
            bundles: HashMap::new(),
        };
        localizer.ensure_loaded(Lang::En);
        localizer.set_language(lang);
        localizer
    }

    pub fn language(&self) -> Lang {
        self.active
    }

    /// Reading direction of the active language.
    pub fn direction(&self) -> Direction {
        self.active.direction()
    }

    /// Switch the active language, loading its bundle on first use, and
    /// return the newly derived direction.
    pub fn set_language(&mut self, lang: Lang) -> Direction {
        self.ensure_loaded(lang);
        self.active = lang;
        self.direction()
    }

    pub fn t(&self, key: &str) -> String {
        self.resolve(self.active, key)
            .unwrap_or(key)
            .to_string()
    }

    pub fn t_with(&self, key: &str, vars: &[(&str, &dyn fmt::Display)]) -> String {
        interpolate(self.resolve(self.active, key).unwrap_or(key), vars)
    }

    /// Whether `key` resolves in `lang` without falling back to English.
    pub fn has_native(&self, lang: Lang, key: &str) -> bool {
        self.bundles
            .get(&lang)
            .and_then(|bundle| bundle.get(key))
            .is_some()
            || catalog::lookup_native(lang, key).is_some()
    }

    fn resolve(&self, lang: Lang, key: &str) -> Option<&str> {
        self.bundles
            .get(&lang)
            .and_then(|bundle| bundle.get(key))
            .or_else(|| catalog::lookup_native(lang, key))
            .or_else(|| self.bundles.get(&Lang::En).and_then(|bundle| bundle.get(key)))
            .or_else(|| catalog::lookup_native(Lang::En, key))
    }

    fn ensure_loaded(&mut self, lang: Lang) {
        if self.bundles.contains_key(&lang) {
            return;
        }
        let Some(dir) = &self.locales_dir else {
            return;
        };
        let Some(path) = bundle_path(dir, lang.code()) else {
            tracing::debug!(lang = %lang, dir = %dir.display(), "no locale bundle on disk");
            return;
        };
        match Bundle::load(&path) {
            Ok(bundle) => {
                tracing::debug!(lang = %lang, entries = bundle.len(), "loaded locale bundle");
                self.bundles.insert(lang, bundle);
            }
            Err(err) => {
                // The built-in table keeps the page readable.
                tracing::warn!(lang = %lang, error = %format!("{err:#}"), "ignoring locale bundle");
            }
        }
    }
}

/// Keys present in English but missing natively in one language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageCoverage {
    pub lang: Lang,
    pub total: usize,
    pub missing: Vec<&'static str>,
}

impl LanguageCoverage {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Coverage of every supported language against the English key set.
pub fn coverage(locales_dir: Option<&Path>) -> Vec<LanguageCoverage> {
    let mut localizer = Localizer::with_locales_dir(Lang::En, locales_dir.map(Path::to_path_buf));
    Lang::all()
        .iter()
        .map(|&lang| {
            localizer.set_language(lang);
            let missing: Vec<&'static str> = catalog::known_keys()
                .filter(|key| !localizer.has_native(lang, key))
                .collect();
            LanguageCoverage {
                lang,
                total: catalog::known_keys().count(),
                missing,
            }
        })
        .collect()
}

/// Locale bundle files in `dir`, as `(language tag, path)` pairs sorted by tag.
pub fn discover(dir: &Path) -> Result<Vec<(String, PathBuf)>> {
    if !dir.is_dir() {
        bail!("locales directory not found: {}", dir.display());
    }
    let mut found = Vec::new();
    for entry in WalkDir::new(dir)
        .max_depth(1)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
    {
        let path = entry.path();
        if bundle_extension(path).is_none() {
            continue;
        }
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        if iso639::is_language_tag(stem) {
            found.push((stem.to_string(), path.to_path_buf()));
        }
    }
    found.sort();
    Ok(found)
}

fn bundle_path(dir: &Path, code: &str) -> Option<PathBuf> {
    ["json", "yaml", "yml"]
        .iter()
        .map(|ext| dir.join(format!("{}.{}", code, ext)))
        .find(|path| path.is_file())
}

fn bundle_extension(path: &Path) -> Option<&'static str> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => Some("json"),
        Some(ext) if ext.eq_ignore_ascii_case("yaml") => Some("yaml"),
        Some(ext) if ext.eq_ignore_ascii_case("yml") => Some("yml"),
        _ => None,
    }
}

/// Decode bundle bytes: BOM-tagged UTF-8/UTF-16 first, then plain UTF-8,
/// then Latin-1.
fn decode_text(raw: &[u8]) -> Result<String> {
    if let Some((encoding, bom_len)) = encoding_rs::Encoding::for_bom(raw) {
        let (text, had_errors) = encoding.decode_without_bom_handling(&raw[bom_len..]);
        if had_errors {
            bail!("invalid {} data", encoding.name());
        }
        return Ok(text.into_owned());
    }
    match std::str::from_utf8(raw) {
        Ok(text) => Ok(text.to_string()),
        Err(_) => {
            let (text, _, had_errors) = encoding_rs::WINDOWS_1252.decode(raw);
            if had_errors {
                bail!("neither UTF-8 nor Latin-1");
            }
            Ok(text.into_owned())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn builtin_only_resolution() {
        let mut loc = Localizer::new(Lang::Fr);
        assert_eq!(loc.t("nav.home"), "Accueil");
        assert_eq!(loc.direction(), Direction::Ltr);
        assert_eq!(loc.set_language(Lang::Ar), Direction::Rtl);
        assert_eq!(loc.t("nav.home"), "الرئيسية");
        assert_eq!(loc.t("missing.key"), "missing.key");
    }

    #[test]
    fn bundle_overrides_builtin_and_falls_back() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("fr.json"),
            r#"{"nav.home": "Page d'accueil", "extra.key": "Bonjour {{name}}"}"#,
        )
        .unwrap();
        let loc = Localizer::with_locales_dir(Lang::Fr, Some(dir.path().to_path_buf()));
        assert_eq!(loc.t("nav.home"), "Page d'accueil");
        assert_eq!(loc.t("nav.news"), "Actualités");
        assert_eq!(loc.t_with("extra.key", &[("name", &"Léa")]), "Bonjour Léa");
    }

    #[test]
    fn blank_bundle_entries_fall_through() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("fr.json"),
            r#"{"nav.home": "", "nav.news": "   ", "promo.banner": ""}"#,
        )
        .unwrap();
        let loc = Localizer::with_locales_dir(Lang::Fr, Some(dir.path().to_path_buf()));
        assert_eq!(loc.t("nav.home"), "Accueil");
        assert_eq!(loc.t("nav.news"), "Actualités");
        assert_eq!(loc.t("promo.banner"), "promo.banner");
        assert!(loc.has_native(Lang::Fr, "nav.home"));

        let reports = coverage(Some(dir.path()));
        let fr = reports.iter().find(|r| r.lang == Lang::Fr).unwrap();
        assert!(fr.is_complete(), "{:?}", fr.missing);
    }

    #[test]
    fn english_bundle_feeds_fallback_for_new_keys() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("en.yaml"), "promo.banner: Spring offer\n").unwrap();
        let loc = Localizer::with_locales_dir(Lang::Fa, Some(dir.path().to_path_buf()));
        assert_eq!(loc.t("promo.banner"), "Spring offer");
    }

    #[test]
    fn malformed_bundle_is_ignored() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("ar.json"), "{ not json").unwrap();
        let loc = Localizer::with_locales_dir(Lang::Ar, Some(dir.path().to_path_buf()));
        assert_eq!(loc.t("nav.news"), "الأخبار");
    }

    #[test]
    fn utf16_bundle_with_bom_decodes() {
        let dir = TempDir::new().unwrap();
        let json = r#"{"nav.home": "Accueil principal"}"#;
        let mut bytes = vec![0xFF, 0xFE];
        for unit in json.encode_utf16() {
            bytes.extend_from_slice(&unit.to_le_bytes());
        }
        fs::write(dir.path().join("fr.json"), bytes).unwrap();
        let loc = Localizer::with_locales_dir(Lang::Fr, Some(dir.path().to_path_buf()));
        assert_eq!(loc.t("nav.home"), "Accueil principal");
    }

    #[test]
    fn discover_filters_non_bundles() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("fa.json"), "{}").unwrap();
        fs::write(dir.path().join("ar.yml"), "{}").unwrap();
        fs::write(dir.path().join("README.md"), "notes").unwrap();
        fs::write(dir.path().join("Persian.json"), "{}").unwrap();
        let found = discover(dir.path()).unwrap();
        let tags: Vec<&str> = found.iter().map(|(tag, _)| tag.as_str()).collect();
        assert_eq!(tags, vec!["ar", "fa"]);
    }

    #[test]
    fn builtin_coverage_is_complete() {
        for report in coverage(None) {
            assert!(report.is_complete(), "{} missing {:?}", report.lang, report.missing);
        }
    }
}
