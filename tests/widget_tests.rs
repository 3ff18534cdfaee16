// SPDX-License-Identifier: PMPL-1.0-or-later

//! Widgets against the shared session cache and failing collaborators

use anyhow::{anyhow, Result};
use atlas_site::widgets::{
    CachePolicy, HighlightsView, HighlightsWidget, MapView, MapWidget, Mount, Prompt,
    SessionCache, StaticMapProvider, SummarySource, SummaryWidget,
};
use atlas_site::{ContentStore, Lang};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use std::time::Duration;

#[test]
fn test_two_cards_share_one_generation() {
    let store = ContentStore::builtin();
    let item = &store.news[0];
    let cache = SessionCache::default();
    let calls = AtomicUsize::new(0);
    let generator = |_: &Prompt| -> Result<String> {
        calls.fetch_add(1, Ordering::SeqCst);
        thread::sleep(Duration::from_millis(30));
        Ok("Shared summary.".to_string())
    };

    let views: Vec<_> = thread::scope(|scope| {
        let handles: Vec<_> = (0..2)
            .map(|_| {
                scope.spawn(|| {
                    SummaryWidget::new(&cache, &generator).load(item.into(), Lang::En, &Mount::new())
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().expect("widget thread"))
            .collect()
    });

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    for view in views {
        assert_eq!(view.expect("mounted").text, "Shared summary.");
    }
}

#[test]
fn test_summary_recovers_after_failure() {
    let store = ContentStore::builtin();
    let project = &store.projects[0];
    let cache = SessionCache::default();
    let calls = AtomicUsize::new(0);
    let generator = |_: &Prompt| -> Result<String> {
        if calls.fetch_add(1, Ordering::SeqCst) == 0 {
            Err(anyhow!("service unavailable"))
        } else {
            Ok("Recovered.".to_string())
        }
    };
    let widget = SummaryWidget::new(&cache, &generator);

    let first = widget
        .load(project.into(), Lang::En, &Mount::new())
        .expect("mounted");
    assert_eq!(first.source, SummarySource::Fallback);
    assert_eq!(first.text, project.excerpt);

    let second = widget
        .load(project.into(), Lang::En, &Mount::new())
        .expect("mounted");
    assert_eq!(second.source, SummarySource::Generated);
    assert_eq!(second.text, "Recovered.");
}

#[test]
fn test_bounded_cache_evicts_across_widgets() {
    let store = ContentStore::builtin();
    let cache = SessionCache::new(CachePolicy {
        max_entries: Some(2),
        ttl: None,
    });
    let generator = |p: &Prompt| -> Result<String> {
        match p.format {
            atlas_site::widgets::ResponseFormat::Text => Ok("Summary.".to_string()),
            atlas_site::widgets::ResponseFormat::JsonList => Ok("[\"Point\"]".to_string()),
        }
    };
    let summaries = SummaryWidget::new(&cache, &generator);
    let highlights = HighlightsWidget::new(&cache, &generator);
    let mount = Mount::new();

    for item in &store.news[..2] {
        summaries.load(item.into(), Lang::En, &mount);
        thread::sleep(Duration::from_millis(2));
    }
    let view = highlights
        .load(&store.technologies[0], Lang::En, &mount)
        .expect("mounted");
    assert_eq!(
        view,
        HighlightsView::Ready {
            items: vec!["Point".to_string()],
            cached: false
        }
    );
    assert_eq!(cache.len(), 2);
}

#[test]
fn test_map_with_credential_lists_every_location() {
    let store = ContentStore::builtin();
    let mut selected = Vec::new();
    let mut widget = MapWidget::new(&store.locations).on_select(|name| selected.push(name.to_string()));
    widget.select("Caspian Logistics Hub");
    match widget.load(&StaticMapProvider, Some("test-key")) {
        MapView::Ready {
            markers, active, ..
        } => {
            assert_eq!(markers.len(), store.locations.len());
            assert_eq!(active.as_deref(), Some("Caspian Logistics Hub"));
        }
        MapView::Unavailable { message_key } => panic!("map unavailable: {}", message_key),
    }
    drop(widget);
    assert_eq!(selected, vec!["Caspian Logistics Hub"]);
}
