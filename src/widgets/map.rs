// SPDX-License-Identifier: PMPL-1.0-or-later

//! Office and project location map.
//!
//! The tile/marker SDK is external; [`MapProvider`] stands for loading it with
//! a credential. Without a credential, or when the provider fails, the widget
//! renders an inline error instead of the map.

use crate::types::{Coordinates, LocationCategory, MapLocation};
use anyhow::{bail, Result};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Default cluster grid cell, in degrees.
pub const DEFAULT_CLUSTER_CELL: f64 = 5.0;

pub trait MapProvider {
    fn load(&self, credential: &str) -> Result<()>;

    fn name(&self) -> &str {
        "map provider"
    }
}

/// Offline provider: accepts any non-blank credential.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticMapProvider;

impl MapProvider for StaticMapProvider {
    fn load(&self, credential: &str) -> Result<()> {
        if credential.trim().is_empty() {
            bail!("map credential is blank");
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "static"
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub name: String,
    pub description: String,
    pub coordinates: Coordinates,
    pub category: LocationCategory,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cluster {
    /// Mean position of the members.
    pub center: Coordinates,
    pub names: Vec<String>,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum MapView {
    Ready {
        markers: Vec<Marker>,
        clusters: Vec<Cluster>,
        active: Option<String>,
    },
    Unavailable {
        message_key: &'static str,
    },
}

pub struct MapWidget<'a> {
    locations: &'a [MapLocation],
    active: Option<String>,
    on_select: Option<Box<dyn FnMut(&str) + 'a>>,
    cluster_cell: f64,
}

impl fmt::Debug for MapWidget<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapWidget")
            .field("locations", &self.locations.len())
            .field("active", &self.active)
            .field("cluster_cell", &self.cluster_cell)
            .finish()
    }
}

impl<'a> MapWidget<'a> {
    pub fn new(locations: &'a [MapLocation]) -> Self {
        Self {
            locations,
            active: None,
            on_select: None,
            cluster_cell: DEFAULT_CLUSTER_CELL,
        }
    }

    pub fn with_active(mut self, name: impl Into<String>) -> Self {
        self.active = Some(name.into());
        self
    }

    pub fn on_select(mut self, callback: impl FnMut(&str) + 'a) -> Self {
        self.on_select = Some(Box::new(callback));
        self
    }

    pub fn with_cluster_cell(mut self, degrees: f64) -> Self {
        self.cluster_cell = degrees;
        self
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Mark the named location active and notify the callback. Unknown
    /// names are ignored.
    pub fn select(&mut self, name: &str) -> bool {
        if !self.locations.iter().any(|loc| loc.name == name) {
            tracing::debug!(name, "map selection ignored, unknown location");
            return false;
        }
        self.active = Some(name.to_string());
        if let Some(callback) = self.on_select.as_mut() {
            callback(name);
        }
        true
    }

    pub fn load(&self, provider: &dyn MapProvider, credential: Option<&str>) -> MapView {
        let Some(credential) = credential.filter(|c| !c.trim().is_empty()) else {
            tracing::warn!("map credential missing");
            return MapView::Unavailable {
                message_key: "map.error",
            };
        };
        if let Err(err) = provider.load(credential) {
            tracing::warn!(provider = provider.name(), error = %format!("{err:#}"), "map provider failed to load");
            return MapView::Unavailable {
                message_key: "map.error",
            };
        }

        let markers = self
            .locations
            .iter()
            .map(|loc| Marker {
                name: loc.name.clone(),
                description: loc.description.clone(),
                coordinates: loc.coordinates,
                category: loc.category,
                active: self.active.as_deref() == Some(loc.name.as_str()),
            })
            .collect();
        MapView::Ready {
            markers,
            clusters: cluster(self.locations, self.cluster_cell),
            active: self.active.clone(),
        }
    }
}

/// Group locations that fall into the same `cell`-degree grid square.
/// Clusters come back in grid order; members keep input order.
pub fn cluster(locations: &[MapLocation], cell: f64) -> Vec<Cluster> {
    let cell = if cell.is_finite() && cell > 0.0 {
        cell
    } else {
        DEFAULT_CLUSTER_CELL
    };
    let mut grid: BTreeMap<(i64, i64), Vec<&MapLocation>> = BTreeMap::new();
    for loc in locations {
        let row = (loc.coordinates.lat / cell).floor() as i64;
        let col = (loc.coordinates.lng / cell).floor() as i64;
        grid.entry((row, col)).or_default().push(loc);
    }
    grid.into_values()
        .map(|members| {
            let count = members.len();
            let lat = members.iter().map(|m| m.coordinates.lat).sum::<f64>() / count as f64;
            let lng = members.iter().map(|m| m.coordinates.lng).sum::<f64>() / count as f64;
            Cluster {
                center: Coordinates { lat, lng },
                names: members.iter().map(|m| m.name.clone()).collect(),
                count,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentStore;

    struct BrokenProvider;

    impl MapProvider for BrokenProvider {
        fn load(&self, _credential: &str) -> Result<()> {
            bail!("script blocked")
        }
    }

    #[test]
    fn missing_credential_shows_inline_error() {
        let store = ContentStore::builtin();
        let widget = MapWidget::new(&store.locations);
        for credential in [None, Some("  ")] {
            assert_eq!(
                widget.load(&StaticMapProvider, credential),
                MapView::Unavailable {
                    message_key: "map.error"
                }
            );
        }
    }

    #[test]
    fn provider_failure_shows_inline_error() {
        let store = ContentStore::builtin();
        let widget = MapWidget::new(&store.locations);
        assert!(matches!(
            widget.load(&BrokenProvider, Some("key")),
            MapView::Unavailable { .. }
        ));
    }

    #[test]
    fn ready_view_marks_active_location() {
        let store = ContentStore::builtin();
        let widget = MapWidget::new(&store.locations).with_active("Regional Office Dubai");
        let MapView::Ready { markers, active, .. } = widget.load(&StaticMapProvider, Some("key")) else {
            panic!("map should load");
        };
        assert_eq!(markers.len(), store.locations.len());
        assert_eq!(active.as_deref(), Some("Regional Office Dubai"));
        let flagged: Vec<_> = markers.iter().filter(|m| m.active).map(|m| m.name.as_str()).collect();
        assert_eq!(flagged, vec!["Regional Office Dubai"]);
    }

    #[test]
    fn select_invokes_callback_with_name() {
        let store = ContentStore::builtin();
        let mut picked = Vec::new();
        {
            let mut widget = MapWidget::new(&store.locations).on_select(|name| picked.push(name.to_string()));
            assert!(widget.select("European Office Paris"));
            assert!(!widget.select("Atlantis"));
            assert_eq!(widget.active(), Some("European Office Paris"));
        }
        assert_eq!(picked, vec!["European Office Paris"]);
    }

    #[test]
    fn nearby_locations_share_a_cluster() {
        let store = ContentStore::builtin();
        let clusters = cluster(&store.locations, DEFAULT_CLUSTER_CELL);
        let total: usize = clusters.iter().map(|c| c.count).sum();
        assert_eq!(total, store.locations.len());
        let tehran = clusters
            .iter()
            .find(|c| c.names.contains(&"Group Headquarters".to_string()))
            .unwrap();
        assert_eq!(tehran.count, 2);
        assert!(tehran.names.contains(&"Innovation Hub Campus".to_string()));
        let paris = clusters
            .iter()
            .find(|c| c.names.contains(&"European Office Paris".to_string()))
            .unwrap();
        assert_eq!(paris.count, 1);
    }
}
