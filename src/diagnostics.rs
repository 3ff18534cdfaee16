// SPDX-License-Identifier: PMPL-1.0-or-later

//! `atlas-site doctor`: checks configuration, content and translations.

use crate::config::{SiteConfig, DEFAULT_CONFIG_FILE, ENV_MAPS_API_KEY};
use crate::content::ContentStore;
use crate::i18n::{coverage, discover, Lang};
use crate::widgets::{Prompt, ResponseFormat, TextGenerator};
use anyhow::{anyhow, Result};
use std::path::Path;

/// Runs every check. The config file is loaded here rather than by the
/// caller so that a broken one shows up as a failed check.
pub fn run_self_diagnostics(config_file: Option<&Path>, generator: &dyn TextGenerator) -> Result<()> {
    println!("atlas-site self-diagnostics");

    let checks = collect(config_file, generator);

    println!();
    for entry in &checks {
        entry.print();
    }

    if checks.iter().any(|entry| entry.level == Level::Error) {
        Err(anyhow!("self-diagnostics reported issues"))
    } else {
        Ok(())
    }
}

fn collect(config_file: Option<&Path>, generator: &dyn TextGenerator) -> Vec<Diagnostic> {
    let mut checks = vec![Diagnostic::ok(
        "version",
        format!("atlas-site {}", env!("CARGO_PKG_VERSION")),
    )];
    let (config_check, config) = check_config_file(config_file);
    checks.push(config_check);
    checks.push(check_content(config.content_file.as_deref()));
    checks.push(check_locales_dir(config.locales_dir.as_deref()));
    checks.extend(check_coverage(config.locales_dir.as_deref()));
    checks.push(check_map_key(config.map.api_key.as_deref()));
    checks.push(check_generator(generator));
    checks
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Level {
    Ok,
    Warn,
    Error,
}

#[derive(Debug)]
struct Diagnostic {
    label: String,
    level: Level,
    detail: String,
}

impl Diagnostic {
    fn new(label: impl Into<String>, level: Level, detail: String) -> Self {
        Self {
            label: label.into(),
            level,
            detail,
        }
    }

    fn ok(label: impl Into<String>, detail: String) -> Self {
        Self::new(label, Level::Ok, detail)
    }

    fn warning(label: impl Into<String>, detail: String) -> Self {
        Self::new(label, Level::Warn, detail)
    }

    fn error(label: impl Into<String>, detail: String) -> Self {
        Self::new(label, Level::Error, detail)
    }

    fn print(&self) {
        println!("  [{}] {:22} {}", self.level.tag(), self.label, self.detail);
    }
}

impl Level {
    fn tag(&self) -> &'static str {
        match self {
            Level::Ok => "OK",
            Level::Warn => "WARN",
            Level::Error => "ERR",
        }
    }
}

/// Loads `explicit` (or [`DEFAULT_CONFIG_FILE`] when present). The returned
/// config falls back to defaults when loading fails.
fn check_config_file(explicit: Option<&Path>) -> (Diagnostic, SiteConfig) {
    let path = explicit.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE));
    let mut config = SiteConfig::default();
    let diagnostic = if explicit.is_none() && !path.is_file() {
        Diagnostic::ok("config file", "none, using defaults".to_string())
    } else {
        match SiteConfig::load(path) {
            Ok(loaded) => {
                config = loaded;
                Diagnostic::ok("config file", format!("{} loaded", path.display()))
            }
            Err(err) => Diagnostic::error(
                "config file",
                format!("{err:#}; remaining checks use defaults"),
            ),
        }
    };
    config.apply_env(|name| std::env::var(name).ok());
    (diagnostic, config)
}

fn check_content(path: Option<&Path>) -> Diagnostic {
    let store = match path {
        None => ContentStore::builtin(),
        Some(path) => match ContentStore::load(path) {
            Ok(store) => store,
            Err(err) => return Diagnostic::error("content", format!("{err:#}")),
        },
    };
    let problems = store.id_problems();
    if problems.is_empty() {
        Diagnostic::ok(
            "content",
            format!(
                "{} technologies, {} projects, {} news, {} locations",
                store.technologies.len(),
                store.projects.len(),
                store.news.len(),
                store.locations.len()
            ),
        )
    } else {
        Diagnostic::error("content", problems.join("; "))
    }
}

fn check_locales_dir(dir: Option<&Path>) -> Diagnostic {
    let Some(dir) = dir else {
        return Diagnostic::ok("locales directory", "not set, built-in strings only".to_string());
    };
    if !dir.is_dir() {
        return Diagnostic::warning("locales directory", format!("{} missing", dir.display()));
    }
    match discover(dir) {
        Ok(found) => {
            let unsupported: Vec<&str> = found
                .iter()
                .map(|(code, _)| code.as_str())
                .filter(|code| Lang::from_code(code).is_none())
                .collect();
            if unsupported.is_empty() {
                Diagnostic::ok("locales directory", format!("{} bundles", found.len()))
            } else {
                Diagnostic::warning(
                    "locales directory",
                    format!("bundles for unsupported languages: {}", unsupported.join(", ")),
                )
            }
        }
        Err(err) => Diagnostic::warning("locales directory", format!("{err:#}")),
    }
}

fn check_coverage(dir: Option<&Path>) -> Vec<Diagnostic> {
    coverage(dir)
        .into_iter()
        .map(|report| {
            let label = format!("strings ({})", report.lang);
            if report.is_complete() {
                Diagnostic::ok(label, format!("{} keys", report.total))
            } else {
                let sample: Vec<&str> = report.missing.iter().take(3).copied().collect();
                Diagnostic::warning(
                    label,
                    format!(
                        "{} of {} keys fall back to English (e.g. {})",
                        report.missing.len(),
                        report.total,
                        sample.join(", ")
                    ),
                )
            }
        })
        .collect()
}

fn check_map_key(key: Option<&str>) -> Diagnostic {
    match key {
        Some(key) if !key.trim().is_empty() => {
            Diagnostic::ok("map credential", "configured".to_string())
        }
        _ => Diagnostic::warning(
            "map credential",
            format!("not configured (set {} or map.api_key)", ENV_MAPS_API_KEY),
        ),
    }
}

fn check_generator(generator: &dyn TextGenerator) -> Diagnostic {
    let probe = Prompt {
        instruction: "Summarize.".to_string(),
        source: "Atlas Group builds infrastructure. It operates in many countries.".to_string(),
        lang: Lang::En,
        format: ResponseFormat::Text,
        limit: 1,
    };
    match generator.generate(&probe) {
        Ok(text) if !text.trim().is_empty() => {
            Diagnostic::ok("text generator", format!("{} responded", generator.name()))
        }
        Ok(_) => Diagnostic::warning(
            "text generator",
            format!("{} returned nothing; summaries will use excerpts", generator.name()),
        ),
        Err(err) => Diagnostic::warning(
            "text generator",
            format!("{} failed ({err}); summaries will use excerpts", generator.name()),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::ExtractiveGenerator;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn defaults_pass_with_only_warnings() {
        let checks = collect(None, &ExtractiveGenerator);
        assert!(checks.iter().all(|c| c.level != Level::Error));
        let map = checks.iter().find(|c| c.label == "map credential").unwrap();
        assert_eq!(map.level, Level::Warn);
    }

    #[test]
    fn malformed_config_is_reported_and_checks_continue() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("site.yaml");
        fs::write(&path, "default_language: [fa\ntheme: dark\n").unwrap();

        let checks = collect(Some(path.as_path()), &ExtractiveGenerator);
        let config = checks.iter().find(|c| c.label == "config file").unwrap();
        assert_eq!(config.level, Level::Error);
        assert!(checks.iter().any(|c| c.label == "content" && c.level == Level::Ok));
        assert!(checks.iter().any(|c| c.label == "text generator"));
        assert!(run_self_diagnostics(Some(path.as_path()), &ExtractiveGenerator).is_err());
    }

    #[test]
    fn explicit_config_is_loaded() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("site.yaml");
        fs::write(&path, "content_file: missing-content.json\n").unwrap();

        let (check, config) = check_config_file(Some(path.as_path()));
        assert_eq!(check.level, Level::Ok);
        assert_eq!(config.content_file, Some(dir.path().join("missing-content.json")));

        let (check, _) = check_config_file(Some(dir.path().join("absent.yaml").as_path()));
        assert_eq!(check.level, Level::Error);
    }

    #[test]
    fn broken_content_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("content.json");
        fs::write(&path, "{ not json").unwrap();
        assert_eq!(check_content(Some(path.as_path())).level, Level::Error);
    }

    #[test]
    fn partial_bundle_keeps_builtin_coverage() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("fr.json"), r#"{"nav.home": "Accueil"}"#).unwrap();
        let checks = check_coverage(Some(dir.path()));
        assert_eq!(checks.len(), Lang::all().len());
        assert!(checks.iter().all(|c| c.level == Level::Ok));
    }
}
