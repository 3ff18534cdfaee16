// SPDX-License-Identifier: PMPL-1.0-or-later

//! Page widgets that talk to external collaborators.
//!
//! Failures never leave a widget: the summary falls back to the authored
//! excerpt, highlights and the map show an inline message, and the contact
//! form reports field-level errors.

pub mod cache;
pub mod contact;
pub mod generator;
pub mod highlights;
pub mod map;
pub mod summary;

pub use cache::{CacheKey, CacheOutcome, CachePolicy, SessionCache};
pub use contact::{
    ContactForm, ContactMessage, Field, FieldError, FormStatus, Receipt, SimulatedSubmitter, Submitter,
};
pub use generator::{ExtractiveGenerator, Prompt, ResponseFormat, TextGenerator};
pub use highlights::{HighlightsView, HighlightsWidget};
pub use map::{Cluster, MapProvider, MapView, MapWidget, Marker, StaticMapProvider};
pub use summary::{SummarySource, SummaryTarget, SummaryView, SummaryWidget};

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Mounted flag shared between a widget and its in-flight loads.
///
/// A load that completes after [`Mount::unmount`] drops its view; the cache
/// write still happens.
#[derive(Debug, Clone)]
pub struct Mount(Arc<AtomicBool>);

impl Mount {
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    pub fn unmount(&self) {
        self.0.store(false, Ordering::SeqCst);
    }

    pub fn is_mounted(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

impl Default for Mount {
    fn default() -> Self {
        Self::new()
    }
}
