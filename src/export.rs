// SPDX-License-Identifier: PMPL-1.0-or-later

//! Static export: every page in every language, written to disk

use crate::config::SiteConfig;
use crate::content::ContentStore;
use crate::i18n::{Lang, Localizer};
use crate::render::{compose, OutputFormat, RenderContext};
use crate::router::{Page, Router};
use crate::types::ContentId;
use crate::widgets::{SessionCache, StaticMapProvider, TextGenerator};
use anyhow::{anyhow, Context, Result};
use chrono::{Datelike, Utc};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const MANIFEST_FILE: &str = "manifest.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportEntry {
    pub lang: Lang,
    /// Location hash of the exported state.
    pub location: String,
    pub format: OutputFormat,
    /// Path relative to the export directory.
    pub path: PathBuf,
    pub bytes: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportManifest {
    pub generated_at: String,
    pub version: String,
    pub entries: Vec<ExportEntry>,
}

/// One page state to render.
#[derive(Debug, Clone)]
enum Target {
    Page(Page),
    Article(ContentId),
}

impl Target {
    fn relative_path(&self, lang: Lang, format: OutputFormat) -> PathBuf {
        let base = PathBuf::from(lang.code());
        match self {
            Target::Page(Page::Home) => base.join(format!("index.{}", format.extension())),
            Target::Page(page) => base.join(format!("{}.{}", page.slug(), format.extension())),
            Target::Article(id) => base
                .join("news")
                .join(format!("{}.{}", id, format.extension())),
        }
    }

    fn router(&self) -> Router {
        let mut router = Router::new();
        match self {
            Target::Page(page) => {
                router.navigate(*page);
            }
            Target::Article(id) => {
                router.open_article(id.clone());
            }
        }
        router
    }
}

/// Render every static page and news article for each language in `langs`
/// (all languages if empty) in each format, plus a `manifest.json`.
pub fn export_site(
    config: &SiteConfig,
    content: &ContentStore,
    generator: &dyn TextGenerator,
    directory: &Path,
    formats: &[OutputFormat],
    langs: &[Lang],
) -> Result<ExportManifest> {
    if formats.is_empty() {
        return Err(anyhow!("no export formats selected"));
    }
    let langs = if langs.is_empty() { Lang::all() } else { langs };

    let mut targets: Vec<Target> = Page::all().filter(Page::is_static).map(Target::Page).collect();
    targets.extend(content.news.iter().map(|item| Target::Article(item.id.clone())));

    let jobs: Vec<(Lang, Target)> = langs
        .iter()
        .flat_map(|&lang| targets.iter().cloned().map(move |target| (lang, target)))
        .collect();

    fs::create_dir_all(directory)
        .with_context(|| format!("creating export directory {}", directory.display()))?;

    // Shared across workers so each summary is generated once per language.
    let cache = SessionCache::new(config.cache);
    let year = Utc::now().year();

    let written: Vec<Vec<ExportEntry>> = jobs
        .into_par_iter()
        .map(|(lang, target)| {
            let localizer = Localizer::with_locales_dir(lang, config.locales_dir.clone());
            let router = target.router();
            let ctx = RenderContext {
                content,
                localizer: &localizer,
                router: &router,
                theme: config.theme,
                cache: &cache,
                generator,
                map_provider: &StaticMapProvider,
                map_key: config.map.api_key.as_deref(),
                contact: None,
                year,
            };
            let view = compose(&ctx);
            formats
                .iter()
                .map(|&format| {
                    let relative = target.relative_path(lang, format);
                    let path = directory.join(&relative);
                    if let Some(parent) = path.parent() {
                        fs::create_dir_all(parent)
                            .with_context(|| format!("creating {}", parent.display()))?;
                    }
                    let body = format.serialize(&view)?;
                    fs::write(&path, &body).with_context(|| format!("writing {}", path.display()))?;
                    Ok(ExportEntry {
                        lang,
                        location: view.location.clone(),
                        format,
                        path: relative,
                        bytes: body.len(),
                    })
                })
                .collect::<Result<Vec<_>>>()
        })
        .collect::<Result<Vec<_>>>()?;

    let mut entries: Vec<ExportEntry> = written.into_iter().flatten().collect();
    entries.sort_by(|a, b| a.path.cmp(&b.path));

    let manifest = ExportManifest {
        generated_at: Utc::now().to_rfc3339(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        entries,
    };
    let manifest_path = directory.join(MANIFEST_FILE);
    fs::write(&manifest_path, serde_json::to_string_pretty(&manifest)?)
        .with_context(|| format!("writing {}", manifest_path.display()))?;
    tracing::info!(
        files = manifest.entries.len(),
        dir = %directory.display(),
        "export complete"
    );
    Ok(manifest)
}
