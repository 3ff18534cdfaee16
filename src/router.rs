// SPDX-License-Identifier: PMPL-1.0-or-later

//! In-memory page router.
//!
//! The router is a small state machine: the current [`Page`], plus the
//! selected news article, the last search, and the coming-soon title. Every
//! transition returns a [`Transition`] describing the animated change; the
//! site applies the side effects (scroll to top, location hash) to its host.
//!
//! Each state also has a hash [`Location`] (`#/news/<id>`, `#/search?q=...`)
//! so a host with a real address bar can keep it in sync and restore from it.

use crate::search::SearchResult;
use crate::types::ContentId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Routing identifier for each section of the site.
///
/// Display text is not derived from the variant; see [`Page::title_key`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Page {
    Home,
    AboutUs,
    CoreTechnologies,
    Projects,
    InnovationHub,
    Sustainability,
    Careers,
    Investors,
    Leadership,
    Partners,
    News,
    Contact,
    Legal,
    Privacy,
    SearchResults,
    ComingSoon,
}

/// Page -> (location slug, localization key of the display title).
const PAGE_TABLE: &[(Page, &str, &str)] = &[
    (Page::Home, "", "nav.home"),
    (Page::AboutUs, "about", "nav.about"),
    (Page::CoreTechnologies, "technologies", "nav.technologies"),
    (Page::Projects, "projects", "nav.projects"),
    (Page::InnovationHub, "innovation", "nav.innovation"),
    (Page::Sustainability, "sustainability", "nav.sustainability"),
    (Page::Careers, "careers", "nav.careers"),
    (Page::Investors, "investors", "nav.investors"),
    (Page::Leadership, "leadership", "nav.leadership"),
    (Page::Partners, "partners", "nav.partners"),
    (Page::News, "news", "nav.news"),
    (Page::Contact, "contact", "nav.contact"),
    (Page::Legal, "legal", "nav.legal"),
    (Page::Privacy, "privacy", "nav.privacy"),
    (Page::SearchResults, "search", "nav.search_results"),
    (Page::ComingSoon, "coming-soon", "nav.coming_soon"),
];

impl Page {
    pub fn all() -> impl Iterator<Item = Page> {
        PAGE_TABLE.iter().map(|&(page, _, _)| page)
    }

    /// Header navigation, in display order.
    pub fn primary_nav() -> &'static [Page] {
        &[
            Page::Home,
            Page::AboutUs,
            Page::CoreTechnologies,
            Page::Projects,
            Page::InnovationHub,
            Page::News,
            Page::Contact,
        ]
    }

    /// Footer link set.
    pub fn footer_links() -> &'static [Page] {
        &[
            Page::Sustainability,
            Page::Careers,
            Page::Investors,
            Page::Leadership,
            Page::Partners,
            Page::Legal,
            Page::Privacy,
        ]
    }

    /// Pages whose content does not depend on router state.
    pub fn is_static(&self) -> bool {
        !matches!(self, Page::SearchResults | Page::ComingSoon)
    }

    pub fn slug(&self) -> &'static str {
        self.entry().1
    }

    pub fn title_key(&self) -> &'static str {
        self.entry().2
    }

    pub fn from_slug(slug: &str) -> Option<Page> {
        PAGE_TABLE
            .iter()
            .find(|&&(_, s, _)| s == slug)
            .map(|&(page, _, _)| page)
    }

    fn entry(&self) -> &'static (Page, &'static str, &'static str) {
        PAGE_TABLE
            .iter()
            .find(|(page, _, _)| page == self)
            .unwrap_or(&PAGE_TABLE[0])
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Page::Home => f.write_str("home"),
            other => f.write_str(other.slug()),
        }
    }
}

/// Addressable router state, serialisable to a hash location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    Page(Page),
    Article(ContentId),
    Search(String),
    ComingSoon(String),
}

impl Location {
    pub fn to_hash(&self) -> String {
        match self {
            Location::Page(page) => format!("#/{}", page.slug()),
            Location::Article(id) => format!("#/news/{}", urlencoding::encode(id.as_str())),
            Location::Search(query) => format!("#/search?q={}", urlencoding::encode(query)),
            Location::ComingSoon(title) => {
                format!("#/coming-soon/{}", urlencoding::encode(title))
            }
        }
    }

    /// Parse a hash location. Anything unrecognised resolves to Home.
    pub fn parse(hash: &str) -> Location {
        let path = hash.trim().trim_start_matches('#').trim_start_matches('/');
        let path = path.trim_end_matches('/');

        if let Some(query) = path.strip_prefix("search?q=") {
            return Location::Search(decode(query));
        }
        if let Some(id) = path.strip_prefix("news/") {
            if !id.is_empty() {
                return Location::Article(ContentId::new(decode(id)));
            }
        }
        if let Some(title) = path.strip_prefix("coming-soon/") {
            if !title.is_empty() {
                return Location::ComingSoon(decode(title));
            }
        }
        match Page::from_slug(path) {
            Some(page) => Location::Page(page),
            None => {
                tracing::debug!(hash, "unknown location, falling back to home");
                Location::Page(Page::Home)
            }
        }
    }
}

fn decode(value: &str) -> String {
    let spaced = value.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(|decoded| decoded.into_owned())
        .unwrap_or(spaced)
}

/// How the view animates between two states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Animation {
    CrossFade,
    SlideForward,
    SlideBack,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub from: Location,
    pub to: Location,
    pub animation: Animation,
}

/// Query and results shown on the search results page.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchState {
    pub query: String,
    pub results: Vec<SearchResult>,
}

#[derive(Debug, Clone)]
pub struct Router {
    page: Page,
    article: Option<ContentId>,
    search: Option<SearchState>,
    coming_soon: Option<String>,
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

impl Router {
    pub fn new() -> Self {
        Self {
            page: Page::Home,
            article: None,
            search: None,
            coming_soon: None,
        }
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn selected_article(&self) -> Option<&ContentId> {
        self.article.as_ref()
    }

    pub fn search(&self) -> Option<&SearchState> {
        self.search.as_ref()
    }

    /// Localization key of the feature announced on the coming-soon page.
    pub fn coming_soon_title(&self) -> Option<&str> {
        self.coming_soon.as_deref()
    }

    pub fn location(&self) -> Location {
        match self.page {
            Page::News => match &self.article {
                Some(id) => Location::Article(id.clone()),
                None => Location::Page(Page::News),
            },
            Page::SearchResults => match &self.search {
                Some(search) => Location::Search(search.query.clone()),
                None => Location::Page(Page::SearchResults),
            },
            Page::ComingSoon => match &self.coming_soon {
                Some(title) => Location::ComingSoon(title.clone()),
                None => Location::Page(Page::ComingSoon),
            },
            page => Location::Page(page),
        }
    }

    /// Nav or footer click. Always lands on the page's top-level view, so a
    /// selected article is cleared even when navigating to News itself.
    pub fn navigate(&mut self, page: Page) -> Transition {
        self.transition(Animation::CrossFade, |router| {
            router.page = page;
            router.article = None;
        })
    }

    /// Card "view" action on a news item.
    pub fn open_article(&mut self, id: ContentId) -> Transition {
        self.transition(Animation::SlideForward, |router| {
            router.page = Page::News;
            router.article = Some(id);
        })
    }

    /// Leave the article view. Stays on News.
    pub fn back_to_news(&mut self) -> Transition {
        self.transition(Animation::SlideBack, |router| {
            router.page = Page::News;
            router.article = None;
        })
    }

    pub fn show_search_results(&mut self, query: String, results: Vec<SearchResult>) -> Transition {
        self.transition(Animation::CrossFade, |router| {
            router.page = Page::SearchResults;
            router.article = None;
            router.search = Some(SearchState { query, results });
        })
    }

    pub fn coming_soon(&mut self, title_key: impl Into<String>) -> Transition {
        let title_key = title_key.into();
        self.transition(Animation::CrossFade, |router| {
            router.page = Page::ComingSoon;
            router.article = None;
            router.coming_soon = Some(title_key);
        })
    }

    fn transition(&mut self, animation: Animation, apply: impl FnOnce(&mut Self)) -> Transition {
        let from = self.location();
        apply(self);
        let to = self.location();
        tracing::debug!(from = %from.to_hash(), to = %to.to_hash(), "route transition");
        Transition {
            from,
            to,
            animation,
        }
    }
}
