// SPDX-License-Identifier: PMPL-1.0-or-later

//! Linear-scan site search over the content store.
//!
//! The content is small and fixed at build time, so every query scans all
//! records. Each record's searchable text (title, summary line and long-form
//! body) is lower-cased once when the index is built.

use crate::content::ContentStore;
use crate::router::{Page, Router, Transition};
use crate::types::{ContentId, ContentKind};
use serde::Serialize;

/// One hit: what to show and where activating it leads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    pub kind: ContentKind,
    pub id: ContentId,
    pub label: String,
    pub description: String,
}

impl SearchResult {
    /// Page that owns the record.
    pub fn target_page(&self) -> Page {
        match self.kind {
            ContentKind::Technology => Page::CoreTechnologies,
            ContentKind::Project => Page::Projects,
            ContentKind::News => Page::News,
        }
    }

    /// Navigate to the owning page; news results also select the article.
    pub fn activate(&self, router: &mut Router) -> Transition {
        match self.kind {
            ContentKind::News => router.open_article(self.id.clone()),
            _ => router.navigate(self.target_page()),
        }
    }
}

#[derive(Debug, Clone)]
struct Entry {
    result: SearchResult,
    haystack: String,
}

/// Pre-lowered searchable text for every record, in scan order:
/// technologies, then projects, then news.
#[derive(Debug, Clone, Default)]
pub struct SearchIndex {
    entries: Vec<Entry>,
}

impl SearchIndex {
    pub fn new(content: &ContentStore) -> Self {
        let mut entries = Vec::new();

        for tech in &content.technologies {
            entries.push(Entry::new(
                ContentKind::Technology,
                &tech.id,
                &tech.name,
                &tech.description,
                &tech.details,
            ));
        }
        for project in &content.projects {
            entries.push(Entry::new(
                ContentKind::Project,
                &project.id,
                &project.name,
                &project.excerpt,
                &project.body,
            ));
        }
        for item in &content.news {
            entries.push(Entry::new(
                ContentKind::News,
                &item.id,
                &item.title,
                &item.excerpt,
                &item.body,
            ));
        }

        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Case-insensitive substring search.
    ///
    /// Returns `None` for an empty or whitespace-only query, which callers
    /// treat as "do nothing". Otherwise every matching record in scan order,
    /// with no ranking and no deduplication.
    pub fn search(&self, query: &str) -> Option<Vec<SearchResult>> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return None;
        }
        let results: Vec<SearchResult> = self
            .entries
            .iter()
            .filter(|entry| entry.haystack.contains(&needle))
            .map(|entry| entry.result.clone())
            .collect();
        tracing::debug!(query = %needle, hits = results.len(), "search");
        Some(results)
    }
}

impl Entry {
    fn new(kind: ContentKind, id: &ContentId, label: &str, description: &str, body: &str) -> Self {
        let haystack = format!("{}\n{}\n{}", label, description, body).to_lowercase();
        Self {
            result: SearchResult {
                kind,
                id: id.clone(),
                label: label.to_string(),
                description: description.to_string(),
            },
            haystack,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Technology;

    fn index() -> SearchIndex {
        SearchIndex::new(&ContentStore::builtin())
    }

    #[test]
    fn blank_queries_are_rejected() {
        assert!(index().search("").is_none());
        assert!(index().search("   \t").is_none());
    }

    #[test]
    fn matching_is_case_insensitive() {
        let upper = index().search("HYDROGEN").unwrap();
        let lower = index().search("hydrogen").unwrap();
        assert!(!upper.is_empty());
        assert_eq!(upper, lower);
    }

    #[test]
    fn results_follow_collection_order() {
        let results = index().search("hydrogen").unwrap();
        let kinds: Vec<ContentKind> = results.iter().map(|r| r.kind).collect();
        let mut sorted = kinds.clone();
        sorted.sort_by_key(|kind| ContentKind::all().iter().position(|k| k == kind));
        assert_eq!(kinds, sorted);
        assert_eq!(kinds.first(), Some(&ContentKind::Technology));
        assert_eq!(kinds.last(), Some(&ContentKind::News));
    }

    #[test]
    fn non_ascii_text_matches() {
        let mut content = ContentStore::default();
        content.technologies.push(Technology {
            id: ContentId::from("fa-tech"),
            name: "انرژی خورشیدی".to_string(),
            description: "Énergie solaire".to_string(),
            details: String::new(),
        });
        let index = SearchIndex::new(&content);
        assert_eq!(index.search("خورشیدی").unwrap().len(), 1);
        assert_eq!(index.search("ÉNERGIE").unwrap().len(), 1);
    }

    #[test]
    fn news_activation_selects_article() {
        let results = index().search("scholarship").unwrap();
        let hit = results
            .iter()
            .find(|r| r.kind == ContentKind::News)
            .expect("news hit");
        let mut router = Router::new();
        hit.activate(&mut router);
        assert_eq!(router.page(), Page::News);
        assert_eq!(router.selected_article(), Some(&hit.id));
    }
}
