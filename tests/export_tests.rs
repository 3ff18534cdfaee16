// SPDX-License-Identifier: PMPL-1.0-or-later

//! Static export across languages and formats

use atlas_site::export::{export_site, ExportManifest, MANIFEST_FILE};
use atlas_site::render::OutputFormat;
use atlas_site::widgets::ExtractiveGenerator;
use atlas_site::{ContentStore, Lang, SiteConfig};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_export_all_languages_html_and_json() {
    let dir = TempDir::new().expect("tempdir");
    let content = ContentStore::builtin();
    let manifest = export_site(
        &SiteConfig::default(),
        &content,
        &ExtractiveGenerator,
        dir.path(),
        &[OutputFormat::Html, OutputFormat::Json],
        &[],
    )
    .expect("export should succeed");

    for lang in Lang::all() {
        let index = dir.path().join(lang.code()).join("index.html");
        let html = fs::read_to_string(&index).expect("index page");
        assert!(html.contains(&format!("lang=\"{}\"", lang.code())));
        assert!(html.contains(&format!("dir=\"{}\"", lang.direction().as_str())));
    }

    let persian = fs::read_to_string(dir.path().join("fa/projects.html")).expect("projects page");
    assert!(persian.contains("dir=\"rtl\""));

    let raw = fs::read_to_string(dir.path().join(MANIFEST_FILE)).expect("manifest");
    let parsed: ExportManifest = serde_json::from_str(&raw).expect("manifest json");
    assert_eq!(parsed, manifest);
    assert_eq!(parsed.entries.len() % (Lang::all().len() * 2), 0);
    for entry in &parsed.entries {
        assert!(dir.path().join(&entry.path).is_file(), "{:?}", entry.path);
        assert!(entry.bytes > 0);
    }
}

#[test]
fn test_export_article_json_names_location() {
    let dir = TempDir::new().expect("tempdir");
    export_site(
        &SiteConfig::default(),
        &ContentStore::builtin(),
        &ExtractiveGenerator,
        dir.path(),
        &[OutputFormat::Json],
        &[Lang::En],
    )
    .expect("export should succeed");

    let raw = fs::read_to_string(dir.path().join("en/news/hydrogen-partnership.json"))
        .expect("article page");
    let value: serde_json::Value = serde_json::from_str(&raw).expect("page json");
    assert_eq!(value["location"], "#/news/hydrogen-partnership");
    assert_eq!(value["page"], "news");
    assert_eq!(value["dir"], "ltr");
}
