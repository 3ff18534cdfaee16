// SPDX-License-Identifier: PMPL-1.0-or-later

//! Core type definitions for atlas-site
//!
//! Content records are static and created once at load. Every record carries
//! an explicit [`ContentId`]; titles are display text only and are never used
//! for identity.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier for a content record (a lowercase slug).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentId(String);

impl ContentId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the id is a usable slug: non-empty, lowercase ascii letters,
    /// digits and `-` only.
    pub fn is_valid_slug(&self) -> bool {
        !self.0.is_empty()
            && self
                .0
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    }
}

impl fmt::Display for ContentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ContentId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// The three searchable collections, in scan order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Technology,
    Project,
    News,
}

impl ContentKind {
    pub fn all() -> &'static [ContentKind] {
        &[ContentKind::Technology, ContentKind::Project, ContentKind::News]
    }

    /// Localization key for the collection label.
    pub fn label_key(&self) -> &'static str {
        match self {
            ContentKind::Technology => "search.kind.technology",
            ContentKind::Project => "search.kind.project",
            ContentKind::News => "search.kind.news",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Technology {
    pub id: ContentId,
    pub name: String,
    pub description: String,
    /// Long-form body shown on the technology detail panel.
    pub details: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: ContentId,
    pub name: String,
    pub excerpt: String,
    pub body: String,
    pub sector: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<ContentId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsItem {
    pub id: ContentId,
    pub title: String,
    pub date: NaiveDate,
    pub excerpt: String,
    pub body: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationCategory {
    Headquarters,
    Office,
    Project,
    Research,
}

impl LocationCategory {
    pub fn label_key(&self) -> &'static str {
        match self {
            LocationCategory::Headquarters => "map.category.headquarters",
            LocationCategory::Office => "map.category.office",
            LocationCategory::Project => "map.category.project",
            LocationCategory::Research => "map.category.research",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapLocation {
    pub id: ContentId,
    pub name: String,
    pub description: String,
    pub coordinates: Coordinates,
    pub category: LocationCategory,
}

/// Colour scheme held next to the active language in the site state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_validation() {
        assert!(ContentId::from("solar-grid-2").is_valid_slug());
        assert!(!ContentId::from("").is_valid_slug());
        assert!(!ContentId::from("Solar Grid").is_valid_slug());
    }

    #[test]
    fn theme_toggles() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::default().toggled().toggled(), Theme::Light);
    }
}
