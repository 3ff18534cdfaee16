// SPDX-License-Identifier: PMPL-1.0-or-later

//! Content store: the static technologies, projects, news items and map
//! locations shown on the site.
//!
//! The store is built once (from the compiled-in tables or a JSON/YAML content
//! file) and never mutated afterwards. Loading validates that every record id
//! is a slug and unique within its collection.

mod data;

use crate::types::{ContentId, MapLocation, NewsItem, Project, Technology};
use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentStore {
    #[serde(default)]
    pub technologies: Vec<Technology>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub news: Vec<NewsItem>,
    #[serde(default)]
    pub locations: Vec<MapLocation>,
}

impl ContentStore {
    /// The content compiled into the binary.
    pub fn builtin() -> Self {
        let technologies = data::TECHNOLOGIES
            .iter()
            .map(|&(id, name, description, details)| Technology {
                id: ContentId::new(id),
                name: name.to_string(),
                description: description.to_string(),
                details: details.to_string(),
            })
            .collect();

        let projects = data::PROJECTS
            .iter()
            .map(|&(id, name, excerpt, body, sector, location)| Project {
                id: ContentId::new(id),
                name: name.to_string(),
                excerpt: excerpt.to_string(),
                body: body.to_string(),
                sector: sector.to_string(),
                location: location.map(ContentId::new),
            })
            .collect();

        let news = data::NEWS
            .iter()
            .filter_map(|&(id, title, date, excerpt, body)| {
                // The tables are authored by hand; a typo in a date drops the
                // record rather than the whole store.
                let date = match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
                    Ok(date) => date,
                    Err(err) => {
                        tracing::warn!(id, %err, "skipping news item with invalid date");
                        return None;
                    }
                };
                Some(NewsItem {
                    id: ContentId::new(id),
                    title: title.to_string(),
                    date,
                    excerpt: excerpt.to_string(),
                    body: body.to_string(),
                })
            })
            .collect();

        let locations = data::LOCATIONS
            .iter()
            .map(|&(id, name, description, lat, lng, category)| MapLocation {
                id: ContentId::new(id),
                name: name.to_string(),
                description: description.to_string(),
                coordinates: data::coordinates(lat, lng),
                category,
            })
            .collect();

        Self {
            technologies,
            projects,
            news,
            locations,
        }
    }

    /// Load a content bundle from a `.json`, `.yaml` or `.yml` file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading content file {}", path.display()))?;
        let store: ContentStore = match extension(path).as_deref() {
            Some("json") => serde_json::from_str(&raw)
                .with_context(|| format!("parsing JSON content {}", path.display()))?,
            Some("yaml") | Some("yml") => serde_yaml::from_str(&raw)
                .with_context(|| format!("parsing YAML content {}", path.display()))?,
            other => bail!(
                "unsupported content file extension {:?} for {}",
                other.unwrap_or(""),
                path.display()
            ),
        };
        store.validate()?;
        tracing::debug!(
            path = %path.display(),
            technologies = store.technologies.len(),
            projects = store.projects.len(),
            news = store.news.len(),
            "loaded content bundle"
        );
        Ok(store)
    }

    /// Check that ids are slugs and unique per collection.
    pub fn validate(&self) -> Result<()> {
        let problems = self.id_problems();
        if problems.is_empty() {
            Ok(())
        } else {
            bail!("invalid content ids: {}", problems.join("; "))
        }
    }

    /// Human-readable descriptions of every id problem in the store.
    pub fn id_problems(&self) -> Vec<String> {
        let mut problems = Vec::new();
        check_ids(
            "technology",
            self.technologies.iter().map(|t| &t.id),
            &mut problems,
        );
        check_ids("project", self.projects.iter().map(|p| &p.id), &mut problems);
        check_ids("news", self.news.iter().map(|n| &n.id), &mut problems);
        check_ids(
            "location",
            self.locations.iter().map(|l| &l.id),
            &mut problems,
        );
        for project in &self.projects {
            if let Some(location) = &project.location {
                if self.location(location).is_none() {
                    problems.push(format!(
                        "project '{}' references unknown location '{}'",
                        project.id, location
                    ));
                }
            }
        }
        problems
    }

    pub fn technology(&self, id: &ContentId) -> Option<&Technology> {
        self.technologies.iter().find(|t| &t.id == id)
    }

    pub fn project(&self, id: &ContentId) -> Option<&Project> {
        self.projects.iter().find(|p| &p.id == id)
    }

    pub fn news_item(&self, id: &ContentId) -> Option<&NewsItem> {
        self.news.iter().find(|n| &n.id == id)
    }

    pub fn location(&self, id: &ContentId) -> Option<&MapLocation> {
        self.locations.iter().find(|l| &l.id == id)
    }

    /// News items newest first, as the news page lists them.
    pub fn news_by_date(&self) -> Vec<&NewsItem> {
        let mut items: Vec<&NewsItem> = self.news.iter().collect();
        items.sort_by(|a, b| b.date.cmp(&a.date));
        items
    }
}

fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
}

fn check_ids<'a>(
    collection: &str,
    ids: impl Iterator<Item = &'a ContentId>,
    problems: &mut Vec<String>,
) {
    let mut seen = HashSet::new();
    for id in ids {
        if !id.is_valid_slug() {
            problems.push(format!("{} id '{}' is not a slug", collection, id));
        }
        if !seen.insert(id) {
            problems.push(format!("duplicate {} id '{}'", collection, id));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_store_is_valid() {
        let store = ContentStore::builtin();
        assert!(store.validate().is_ok(), "{:?}", store.id_problems());
        assert_eq!(store.technologies.len(), data::TECHNOLOGIES.len());
        assert_eq!(store.news.len(), data::NEWS.len());
    }

    #[test]
    fn duplicate_ids_are_reported() {
        let mut store = ContentStore::builtin();
        let copy = store.projects[0].clone();
        store.projects.push(copy);
        let problems = store.id_problems();
        assert_eq!(problems.len(), 1);
        assert!(problems[0].contains("duplicate project id"));
    }

    #[test]
    fn dangling_location_is_reported() {
        let mut store = ContentStore::builtin();
        store.projects[0].location = Some(ContentId::from("nowhere"));
        assert!(store.validate().is_err());
    }

    #[test]
    fn news_sorted_newest_first() {
        let store = ContentStore::builtin();
        let sorted = store.news_by_date();
        for pair in sorted.windows(2) {
            assert!(pair[0].date >= pair[1].date);
        }
    }
}
