// SPDX-License-Identifier: PMPL-1.0-or-later

//! Generated summary for news items and projects.

use super::cache::{CacheKey, CacheOutcome, SessionCache};
use super::generator::{Prompt, ResponseFormat, TextGenerator};
use super::Mount;
use crate::i18n::Lang;
use crate::types::{ContentId, NewsItem, Project};
use serde::Serialize;

const SUMMARY_SENTENCES: usize = 2;

/// The text a summary is generated from, plus the authored fallback.
#[derive(Debug, Clone, Copy)]
pub struct SummaryTarget<'a> {
    pub id: &'a ContentId,
    pub title: &'a str,
    pub body: &'a str,
    pub excerpt: &'a str,
}

impl<'a> From<&'a NewsItem> for SummaryTarget<'a> {
    fn from(item: &'a NewsItem) -> Self {
        Self {
            id: &item.id,
            title: &item.title,
            body: &item.body,
            excerpt: &item.excerpt,
        }
    }
}

impl<'a> From<&'a Project> for SummaryTarget<'a> {
    fn from(project: &'a Project) -> Self {
        Self {
            id: &project.id,
            title: &project.name,
            body: &project.body,
            excerpt: &project.excerpt,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SummarySource {
    Generated,
    Cached,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryView {
    pub text: String,
    pub source: SummarySource,
}

pub struct SummaryWidget<'a> {
    cache: &'a SessionCache,
    generator: &'a dyn TextGenerator,
}

impl<'a> SummaryWidget<'a> {
    pub fn new(cache: &'a SessionCache, generator: &'a dyn TextGenerator) -> Self {
        Self { cache, generator }
    }

    /// Summary of `target` in `lang`, or its excerpt if generation fails.
    ///
    /// Returns `None` when the widget was unmounted while the request was in
    /// flight.
    pub fn load(&self, target: SummaryTarget<'_>, lang: Lang, mount: &Mount) -> Option<SummaryView> {
        let key = CacheKey::new(format!("summary:{}", lang.code()), target.id, target.body);
        let prompt = Prompt {
            instruction: format!("Summarize the following text titled \"{}\".", target.title),
            source: target.body.to_string(),
            lang,
            format: ResponseFormat::Text,
            limit: SUMMARY_SENTENCES,
        };

        let result = self.cache.get_or_fetch(&key, || {
            let text = self.generator.generate(&prompt)?;
            let text = text.trim().to_string();
            if text.is_empty() {
                anyhow::bail!("{} returned an empty summary", self.generator.name());
            }
            Ok(text)
        });

        let view = match result {
            Ok((text, CacheOutcome::Hit)) => SummaryView {
                text,
                source: SummarySource::Cached,
            },
            Ok((text, CacheOutcome::Fetched)) => SummaryView {
                text,
                source: SummarySource::Generated,
            },
            Err(err) => {
                tracing::warn!(
                    id = %target.id,
                    generator = self.generator.name(),
                    error = %format!("{err:#}"),
                    "summary generation failed, using excerpt"
                );
                SummaryView {
                    text: target.excerpt.to_string(),
                    source: SummarySource::Fallback,
                }
            }
        };

        if mount.is_mounted() {
            Some(view)
        } else {
            tracing::debug!(id = %target.id, "summary arrived after unmount, discarded");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentStore;
    use anyhow::{anyhow, Result};
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn failing_generator_falls_back_to_excerpt() {
        let store = ContentStore::builtin();
        let item = &store.news[0];
        let cache = SessionCache::default();
        let generator = |_: &Prompt| -> Result<String> { Err(anyhow!("quota exceeded")) };
        let widget = SummaryWidget::new(&cache, &generator);
        let view = widget.load(item.into(), Lang::En, &Mount::new()).unwrap();
        assert_eq!(view.source, SummarySource::Fallback);
        assert_eq!(view.text, item.excerpt);
        assert!(cache.is_empty());
    }

    #[test]
    fn second_load_is_cached() {
        let store = ContentStore::builtin();
        let project = &store.projects[1];
        let cache = SessionCache::default();
        let calls = AtomicUsize::new(0);
        let generator = |_: &Prompt| -> Result<String> {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok("  Short version.  ".to_string())
        };
        let widget = SummaryWidget::new(&cache, &generator);
        let first = widget.load(project.into(), Lang::Fr, &Mount::new()).unwrap();
        let second = widget.load(project.into(), Lang::Fr, &Mount::new()).unwrap();
        assert_eq!(first.source, SummarySource::Generated);
        assert_eq!(first.text, "Short version.");
        assert_eq!(second.source, SummarySource::Cached);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn summaries_are_cached_per_language() {
        let store = ContentStore::builtin();
        let item = &store.news[1];
        let cache = SessionCache::default();
        let generator = |p: &Prompt| -> Result<String> { Ok(format!("in {}", p.lang)) };
        let widget = SummaryWidget::new(&cache, &generator);
        let en = widget.load(item.into(), Lang::En, &Mount::new()).unwrap();
        let ar = widget.load(item.into(), Lang::Ar, &Mount::new()).unwrap();
        assert_eq!(en.text, "in en");
        assert_eq!(ar.text, "in ar");
    }

    #[test]
    fn unmounted_widget_discards_view_but_keeps_cache() {
        let store = ContentStore::builtin();
        let item = &store.news[2];
        let cache = SessionCache::default();
        let mount = Mount::new();
        let generator = |_: &Prompt| -> Result<String> {
            mount.unmount();
            Ok("late".to_string())
        };
        let widget = SummaryWidget::new(&cache, &generator);
        assert!(widget.load(item.into(), Lang::En, &mount).is_none());
        assert_eq!(cache.len(), 1);
    }
}
