// SPDX-License-Identifier: PMPL-1.0-or-later

//! Atlas-Site: corporate marketing site engine.
//!
//! Holds the site state and the logic behind every page: localized strings
//! with right-to-left support, an in-memory router with hash locations, a
//! linear-scan search over the content store, and page widgets that wrap
//! external collaborators (text generation, map provider, contact backend).
//!
//! SITE PILLARS:
//! 1. **i18n**: string catalog for en/fr/fa/ar, on-disk bundles, direction.
//! 2. **router** + **site**: page state machine and the side effects of
//!    each transition.
//! 3. **search**: substring scan over technologies, projects and news.
//! 4. **widgets**: summaries and highlights behind a shared session cache,
//!    the location map, and the contact form.
//! 5. **render**: composed page views as terminal text, JSON, YAML or HTML.

pub mod config;
pub mod content;
pub mod diagnostics;
pub mod export;
pub mod host;
pub mod i18n;
pub mod render;
pub mod router;
pub mod search;
pub mod site;
pub mod types;
pub mod widgets;

pub use config::SiteConfig;
pub use content::ContentStore;
pub use i18n::{Direction, Lang, Localizer};
pub use router::{Location, Page, Router, Transition};
pub use search::{SearchIndex, SearchResult};
pub use site::{Site, SiteEvent};
