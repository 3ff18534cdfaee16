// SPDX-License-Identifier: PMPL-1.0-or-later

//! Generated key highlights for a technology, shown as a short list.
//!
//! The generator is asked for a JSON array of strings. Replies wrapped in a
//! markdown code fence are accepted. Anything that does not parse to a
//! non-empty list becomes an inline error; the user can retry with
//! [`HighlightsWidget::refresh`].

use super::cache::{CacheKey, CacheOutcome, SessionCache};
use super::generator::{Prompt, ResponseFormat, TextGenerator};
use super::Mount;
use crate::i18n::Lang;
use crate::types::Technology;
use anyhow::{bail, Context, Result};
use serde::Serialize;

const HIGHLIGHT_ITEMS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum HighlightsView {
    Ready { items: Vec<String>, cached: bool },
    Error { message_key: &'static str },
}

pub struct HighlightsWidget<'a> {
    cache: &'a SessionCache,
    generator: &'a dyn TextGenerator,
}

impl<'a> HighlightsWidget<'a> {
    pub fn new(cache: &'a SessionCache, generator: &'a dyn TextGenerator) -> Self {
        Self { cache, generator }
    }

    pub fn load(&self, tech: &Technology, lang: Lang, mount: &Mount) -> Option<HighlightsView> {
        let key = key_for(tech, lang);
        let prompt = prompt_for(tech, lang);
        let result = self
            .cache
            .get_or_fetch(&key, || self.fetch(&prompt))
            .map(|(raw, outcome)| (raw, outcome == CacheOutcome::Hit));
        self.finish(tech, result, mount)
    }

    /// User-triggered retry: always calls the generator.
    pub fn refresh(&self, tech: &Technology, lang: Lang, mount: &Mount) -> Option<HighlightsView> {
        let key = key_for(tech, lang);
        let prompt = prompt_for(tech, lang);
        let result = self
            .cache
            .refresh(&key, || self.fetch(&prompt))
            .map(|raw| (raw, false));
        self.finish(tech, result, mount)
    }

    /// Generate and normalise to a compact JSON array before caching.
    fn fetch(&self, prompt: &Prompt) -> Result<String> {
        let raw = self.generator.generate(prompt)?;
        let items = parse_list(&raw)?;
        Ok(serde_json::to_string(&items)?)
    }

    fn finish(
        &self,
        tech: &Technology,
        result: Result<(String, bool)>,
        mount: &Mount,
    ) -> Option<HighlightsView> {
        let view = match result.and_then(|(raw, cached)| Ok((parse_list(&raw)?, cached))) {
            Ok((items, cached)) => HighlightsView::Ready { items, cached },
            Err(err) => {
                tracing::warn!(
                    id = %tech.id,
                    generator = self.generator.name(),
                    error = %format!("{err:#}"),
                    "highlights unavailable"
                );
                HighlightsView::Error {
                    message_key: "widget.highlights.error",
                }
            }
        };
        mount.is_mounted().then_some(view)
    }
}

/// Digests the same text the prompt carries.
fn key_for(tech: &Technology, lang: Lang) -> CacheKey {
    CacheKey::new(format!("highlights:{}", lang.code()), &tech.id, &source_text(tech))
}

fn source_text(tech: &Technology) -> String {
    format!("{}\n\n{}", tech.description, tech.details)
}

fn prompt_for(tech: &Technology, lang: Lang) -> Prompt {
    Prompt {
        instruction: format!("List the key benefits of the technology \"{}\".", tech.name),
        source: source_text(tech),
        lang,
        format: ResponseFormat::JsonList,
        limit: HIGHLIGHT_ITEMS,
    }
}

/// Parse a JSON array of strings, tolerating a surrounding code fence.
pub fn parse_list(raw: &str) -> Result<Vec<String>> {
    let body = strip_code_fence(raw.trim());
    let items: Vec<String> =
        serde_json::from_str(body).context("highlights reply is not a JSON string array")?;
    let items: Vec<String> = items
        .into_iter()
        .map(|item| item.trim().to_string())
        .filter(|item| !item.is_empty())
        .collect();
    if items.is_empty() {
        bail!("highlights reply is empty");
    }
    Ok(items)
}

fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    // Drop an optional language tag on the opening fence line.
    let rest = match rest.find('\n') {
        Some(newline) => &rest[newline + 1..],
        None => rest,
    };
    rest.trim_end().trim_end_matches("```").trim()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentStore;
    use anyhow::anyhow;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn fenced_json_is_accepted() {
        let items = parse_list("```json\n[\"Fast\", \" Clean \", \"\"]\n```").unwrap();
        assert_eq!(items, vec!["Fast", "Clean"]);
    }

    #[test]
    fn prose_is_rejected() {
        assert!(parse_list("Here are some highlights: fast, clean").is_err());
        assert!(parse_list("[]").is_err());
    }

    #[test]
    fn malformed_reply_shows_inline_error() {
        let store = ContentStore::builtin();
        let cache = SessionCache::default();
        let generator = |_: &Prompt| -> Result<String> { Ok("not json".to_string()) };
        let widget = HighlightsWidget::new(&cache, &generator);
        let view = widget
            .load(&store.technologies[0], Lang::En, &Mount::new())
            .unwrap();
        assert_eq!(
            view,
            HighlightsView::Error {
                message_key: "widget.highlights.error"
            }
        );
        assert!(cache.is_empty());
    }

    #[test]
    fn edited_description_is_fetched_again() {
        let store = ContentStore::builtin();
        let cache = SessionCache::default();
        let calls = AtomicUsize::new(0);
        let generator = |_: &Prompt| -> Result<String> {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok("[\"Point\"]".to_string())
        };
        let widget = HighlightsWidget::new(&cache, &generator);
        let mount = Mount::new();
        let mut tech = store.technologies[0].clone();

        widget.load(&tech, Lang::En, &mount).unwrap();
        tech.description.push_str(" Now rated for offshore sites.");
        let view = widget.load(&tech, Lang::En, &mount).unwrap();
        assert!(matches!(view, HighlightsView::Ready { cached: false, .. }));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn refresh_calls_generator_again() {
        let store = ContentStore::builtin();
        let cache = SessionCache::default();
        let calls = AtomicUsize::new(0);
        let generator = |_: &Prompt| -> Result<String> {
            let n = calls.fetch_add(1, Ordering::SeqCst);
            if n == 1 {
                return Err(anyhow!("timeout"));
            }
            Ok(format!("[\"item {}\"]", n))
        };
        let widget = HighlightsWidget::new(&cache, &generator);
        let tech = &store.technologies[1];
        let mount = Mount::new();

        let first = widget.load(tech, Lang::En, &mount).unwrap();
        assert_eq!(
            first,
            HighlightsView::Ready {
                items: vec!["item 0".into()],
                cached: false
            }
        );
        let cached = widget.load(tech, Lang::En, &mount).unwrap();
        assert!(matches!(cached, HighlightsView::Ready { cached: true, .. }));

        // A failed refresh shows the error but keeps the earlier value cached.
        let failed = widget.refresh(tech, Lang::En, &mount).unwrap();
        assert!(matches!(failed, HighlightsView::Error { .. }));
        let retried = widget.refresh(tech, Lang::En, &mount).unwrap();
        assert_eq!(
            retried,
            HighlightsView::Ready {
                items: vec!["item 2".into()],
                cached: false
            }
        );
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }
}
