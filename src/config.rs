// SPDX-License-Identifier: PMPL-1.0-or-later

//! Site configuration: defaults, optional YAML/JSON file, environment.

use crate::i18n::Lang;
use crate::types::Theme;
use crate::widgets::CachePolicy;
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "atlas-site.yaml";
pub const ENV_LANG: &str = "ATLAS_SITE_LANG";
pub const ENV_MAPS_API_KEY: &str = "ATLAS_MAPS_API_KEY";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub default_language: Lang,
    pub theme: Theme,
    /// Directory of `<code>.json` / `<code>.yaml` string bundles.
    pub locales_dir: Option<PathBuf>,
    /// Content file replacing the built-in records.
    pub content_file: Option<PathBuf>,
    pub cache: CachePolicy,
    pub contact: ContactConfig,
    pub map: MapConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            default_language: Lang::En,
            theme: Theme::Light,
            locales_dir: None,
            content_file: None,
            cache: CachePolicy::default(),
            contact: ContactConfig::default(),
            map: MapConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub submit_delay_ms: u64,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            submit_delay_ms: 800,
        }
    }
}

impl ContactConfig {
    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    pub api_key: Option<String>,
}

impl SiteConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading site config {}", path.display()))?;
        let mut config: SiteConfig = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => serde_json::from_str(&content)
                .with_context(|| format!("parsing json site config {}", path.display()))?,
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content)
                .with_context(|| format!("parsing yaml site config {}", path.display()))?,
            _ => {
                return Err(anyhow!(
                    "unsupported site config extension for {}",
                    path.display()
                ))
            }
        };
        // Relative paths in the file are relative to the file itself.
        if let Some(base) = path.parent() {
            config.locales_dir = config.locales_dir.map(|p| rebase(base, p));
            config.content_file = config.content_file.map(|p| rebase(base, p));
        }
        Ok(config)
    }

    /// `explicit` if given, else [`DEFAULT_CONFIG_FILE`] if it exists, else
    /// defaults; then environment overrides.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        let mut config = match explicit {
            Some(path) => Self::load(path)?,
            None => {
                let fallback = Path::new(DEFAULT_CONFIG_FILE);
                if fallback.is_file() {
                    tracing::debug!(path = DEFAULT_CONFIG_FILE, "using site config from working directory");
                    Self::load(fallback)?
                } else {
                    Self::default()
                }
            }
        };
        config.apply_env(|name| std::env::var(name).ok());
        Ok(config)
    }

    /// Apply `ATLAS_SITE_LANG` and `ATLAS_MAPS_API_KEY` from `lookup`.
    /// An unsupported language code is ignored with a warning.
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(code) = lookup(ENV_LANG).filter(|v| !v.trim().is_empty()) {
            match Lang::from_code(&code) {
                Some(lang) => self.default_language = lang,
                None => tracing::warn!(code = %code, "{} names an unsupported language", ENV_LANG),
            }
        }
        if let Some(key) = lookup(ENV_MAPS_API_KEY).filter(|v| !v.trim().is_empty()) {
            self.map.api_key = Some(key);
        }
    }
}

fn rebase(base: &Path, path: PathBuf) -> PathBuf {
    if path.is_relative() {
        base.join(path)
    } else {
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn partial_yaml_keeps_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("site.yaml");
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "default_language: fa\nlocales_dir: locales\ncache:\n  ttl: 300").unwrap();

        let config = SiteConfig::load(&path).unwrap();
        assert_eq!(config.default_language, Lang::Fa);
        assert_eq!(config.theme, Theme::Light);
        assert_eq!(config.locales_dir, Some(dir.path().join("locales")));
        assert_eq!(config.cache.max_entries, Some(128));
        assert_eq!(config.cache.ttl, Some(Duration::from_secs(300)));
        assert_eq!(config.contact.submit_delay(), Duration::from_millis(800));
    }

    #[test]
    fn json_config_is_accepted() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("site.json");
        fs::write(&path, r#"{"theme": "dark", "map": {"api_key": "abc"}}"#).unwrap();
        let config = SiteConfig::load(&path).unwrap();
        assert_eq!(config.theme, Theme::Dark);
        assert_eq!(config.map.api_key.as_deref(), Some("abc"));
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("site.toml");
        fs::write(&path, "theme = 'dark'").unwrap();
        assert!(SiteConfig::load(&path).is_err());
    }

    #[test]
    fn environment_overrides_file_values() {
        let mut config = SiteConfig::default();
        config.apply_env(|name| match name {
            ENV_LANG => Some("ar".to_string()),
            ENV_MAPS_API_KEY => Some("env-key".to_string()),
            _ => None,
        });
        assert_eq!(config.default_language, Lang::Ar);
        assert_eq!(config.map.api_key.as_deref(), Some("env-key"));

        config.apply_env(|name| (name == ENV_LANG).then(|| "klingon".to_string()));
        assert_eq!(config.default_language, Lang::Ar);
    }
}
