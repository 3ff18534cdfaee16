// SPDX-License-Identifier: PMPL-1.0-or-later

//! Localization: key coverage, fallbacks, interpolation, on-disk bundles

use atlas_site::i18n::{self, coverage, known_keys, Direction, Lang, Localizer};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_every_key_resolves_in_every_language() {
    for &lang in Lang::all() {
        let localizer = Localizer::new(lang);
        for key in known_keys() {
            let text = localizer.t(key);
            assert!(!text.trim().is_empty(), "{} / {} is blank", lang, key);
            assert_ne!(text, key, "{} / {} fell through to the key", lang, key);
        }
    }
}

#[test]
fn test_unknown_key_is_returned_verbatim() {
    for &lang in Lang::all() {
        assert_eq!(i18n::t(lang, "nav.does_not_exist"), "nav.does_not_exist");
        assert_eq!(
            Localizer::new(lang).t("nav.does_not_exist"),
            "nav.does_not_exist"
        );
    }
}

#[test]
fn test_interpolation_replaces_all_and_keeps_unknown() {
    let out = i18n::interpolate(
        "{{name}} and {{ name }} met {{other}}",
        &[("name", &"Lina")],
    );
    assert_eq!(out, "Lina and Lina met {{other}}");

    let localizer = Localizer::new(Lang::Fr);
    let text = localizer.t_with("search.count", &[("count", &3)]);
    assert!(text.contains('3'));
    assert!(!text.contains("{{"));
}

#[test]
fn test_direction_is_pure_function_of_code() {
    assert_eq!(Direction::for_code("fa"), Direction::Rtl);
    assert_eq!(Direction::for_code("ar"), Direction::Rtl);
    assert_eq!(Direction::for_code("he"), Direction::Rtl);
    assert_eq!(Direction::for_code("fa-IR"), Direction::Rtl);
    assert_eq!(Direction::for_code("en"), Direction::Ltr);
    assert_eq!(Direction::for_code("fr"), Direction::Ltr);
    assert_eq!(Direction::for_code("xx"), Direction::Ltr);
}

#[test]
fn test_bundle_overrides_builtin_and_falls_back() {
    let dir = TempDir::new().expect("tempdir");
    fs::write(
        dir.path().join("fr.yaml"),
        "nav.home: \"Page d'accueil\"\ncustom.banner: \"Bienvenue {{name}}\"\n",
    )
    .expect("write bundle");

    let mut localizer = Localizer::with_locales_dir(Lang::En, Some(dir.path().to_path_buf()));
    assert_eq!(localizer.t("custom.banner"), "custom.banner");

    assert_eq!(localizer.set_language(Lang::Fr), Direction::Ltr);
    assert_eq!(localizer.t("nav.home"), "Page d'accueil");
    assert_eq!(
        localizer.t_with("custom.banner", &[("name", &"Nadia")]),
        "Bienvenue Nadia"
    );
    // Keys the bundle lacks come from the built-in French table.
    assert_eq!(localizer.t("nav.news"), i18n::t(Lang::Fr, "nav.news"));
}

#[test]
fn test_malformed_bundle_is_ignored() {
    let dir = TempDir::new().expect("tempdir");
    fs::write(dir.path().join("ar.json"), "{ broken").expect("write bundle");
    let mut localizer = Localizer::with_locales_dir(Lang::En, Some(dir.path().to_path_buf()));
    assert_eq!(localizer.set_language(Lang::Ar), Direction::Rtl);
    assert_eq!(localizer.t("nav.home"), i18n::t(Lang::Ar, "nav.home"));
}

#[test]
fn test_builtin_catalog_is_complete() {
    let reports = coverage(None);
    assert_eq!(reports.len(), Lang::all().len());
    for report in reports {
        assert!(
            report.is_complete(),
            "{} is missing {:?}",
            report.lang,
            report.missing
        );
    }
}
