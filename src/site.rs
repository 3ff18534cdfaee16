// SPDX-License-Identifier: PMPL-1.0-or-later

//! Application state: language, theme, route, search, and the shared
//! collaborators the page widgets use.
//!
//! Every state change goes through [`Site`], which applies the matching host
//! side effects and notifies subscribers so a view can re-render.

use crate::config::SiteConfig;
use crate::content::ContentStore;
use crate::host::{Host, NullHost};
use crate::i18n::{Direction, Lang, Localizer};
use crate::router::{Page, Router, Transition};
use crate::search::SearchIndex;
use crate::types::{ContentId, Theme};
use crate::widgets::{
    ContactForm, ExtractiveGenerator, MapProvider, SessionCache, StaticMapProvider, TextGenerator,
};
use anyhow::{bail, Result};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SiteEvent {
    LanguageChanged { lang: Lang, dir: Direction },
    ThemeChanged(Theme),
    Navigated(Transition),
}

type Subscriber = Box<dyn FnMut(&SiteEvent)>;

pub struct Site<H: Host = NullHost> {
    config: SiteConfig,
    content: ContentStore,
    localizer: Localizer,
    router: Router,
    index: SearchIndex,
    cache: Arc<SessionCache>,
    generator: Arc<dyn TextGenerator>,
    map_provider: Box<dyn MapProvider>,
    contact: ContactForm,
    theme: Theme,
    host: H,
    subscribers: Vec<Subscriber>,
}

impl Site<NullHost> {
    pub fn from_config(config: SiteConfig) -> Result<Self> {
        Self::new(config, NullHost)
    }
}

impl<H: Host> Site<H> {
    /// Build the site from configuration. Content comes from
    /// `config.content_file` when set, else the built-in records.
    pub fn new(config: SiteConfig, host: H) -> Result<Self> {
        let content = match &config.content_file {
            Some(path) => ContentStore::load(path)?,
            None => ContentStore::builtin(),
        };
        Ok(Self::with_content(config, content, host))
    }

    pub fn with_content(config: SiteConfig, content: ContentStore, mut host: H) -> Self {
        let lang = config.default_language;
        let localizer = Localizer::with_locales_dir(lang, config.locales_dir.clone());
        host.set_document_language(lang, localizer.direction());
        let index = SearchIndex::new(&content);
        tracing::debug!(records = index.len(), lang = %lang, "site ready");
        Self {
            cache: Arc::new(SessionCache::new(config.cache)),
            generator: Arc::new(ExtractiveGenerator),
            map_provider: Box::new(StaticMapProvider),
            contact: ContactForm::new(),
            theme: config.theme,
            router: Router::new(),
            config,
            content,
            localizer,
            index,
            host,
            subscribers: Vec::new(),
        }
    }

    pub fn with_generator(mut self, generator: Arc<dyn TextGenerator>) -> Self {
        self.generator = generator;
        self
    }

    pub fn with_map_provider(mut self, provider: Box<dyn MapProvider>) -> Self {
        self.map_provider = provider;
        self
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn content(&self) -> &ContentStore {
        &self.content
    }

    pub fn localizer(&self) -> &Localizer {
        &self.localizer
    }

    pub fn language(&self) -> Lang {
        self.localizer.language()
    }

    pub fn direction(&self) -> Direction {
        self.localizer.direction()
    }

    pub fn t(&self, key: &str) -> String {
        self.localizer.t(key)
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn search_index(&self) -> &SearchIndex {
        &self.index
    }

    pub fn cache(&self) -> &Arc<SessionCache> {
        &self.cache
    }

    pub fn generator(&self) -> &dyn TextGenerator {
        self.generator.as_ref()
    }

    pub fn map_provider(&self) -> &dyn MapProvider {
        self.map_provider.as_ref()
    }

    pub fn contact(&self) -> &ContactForm {
        &self.contact
    }

    pub fn contact_mut(&mut self) -> &mut ContactForm {
        &mut self.contact
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Register a callback run after every state change.
    pub fn subscribe(&mut self, subscriber: impl FnMut(&SiteEvent) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Switch language; the document language and direction follow.
    pub fn set_language(&mut self, lang: Lang) -> Direction {
        let dir = self.localizer.set_language(lang);
        self.host.set_document_language(lang, dir);
        self.emit(SiteEvent::LanguageChanged { lang, dir });
        dir
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.emit(SiteEvent::ThemeChanged(self.theme));
        self.theme
    }

    pub fn navigate(&mut self, page: Page) -> Transition {
        let transition = self.router.navigate(page);
        self.apply(transition)
    }

    pub fn open_article(&mut self, id: &ContentId) -> Result<Transition> {
        if self.content.news_item(id).is_none() {
            bail!("no news item with id '{}'", id);
        }
        let transition = self.router.open_article(id.clone());
        Ok(self.apply(transition))
    }

    pub fn back_to_news(&mut self) -> Transition {
        let transition = self.router.back_to_news();
        self.apply(transition)
    }

    /// Run a search and show the results page. A blank query does nothing.
    pub fn submit_search(&mut self, query: &str) -> Option<Transition> {
        let results = self.index.search(query)?;
        let transition = self.router.show_search_results(query.trim().to_string(), results);
        Some(self.apply(transition))
    }

    /// Activate the `position`-th result of the current search.
    pub fn activate_result(&mut self, position: usize) -> Option<Transition> {
        let result = self.router.search()?.results.get(position)?.clone();
        let transition = result.activate(&mut self.router);
        Some(self.apply(transition))
    }

    /// Show the coming-soon page for a feature named by `title_key`.
    pub fn coming_soon(&mut self, title_key: &str) -> Transition {
        let transition = self.router.coming_soon(title_key);
        self.apply(transition)
    }

    /// Restore state from a location hash (deep link, reload, back button).
    pub fn restore(&mut self, hash: &str) -> Transition {
        use crate::router::Location;
        match Location::parse(hash) {
            Location::Page(page) => self.navigate(page),
            Location::Article(id) => match self.open_article(&id) {
                Ok(transition) => transition,
                Err(err) => {
                    tracing::warn!(error = %err, "restoring unknown article, showing news");
                    self.navigate(Page::News)
                }
            },
            Location::Search(query) => match self.submit_search(&query) {
                Some(transition) => transition,
                None => self.navigate(Page::Home),
            },
            Location::ComingSoon(title) => self.coming_soon(&title),
        }
    }

    fn apply(&mut self, transition: Transition) -> Transition {
        self.host.scroll_to_top();
        self.host.set_location(&transition.to.to_hash());
        self.host.play_transition(&transition);
        self.emit(SiteEvent::Navigated(transition.clone()));
        transition
    }

    fn emit(&mut self, event: SiteEvent) {
        for subscriber in &mut self.subscribers {
            subscriber(&event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{HostEffect, RecordingHost};
    use crate::router::{Animation, Location};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn site() -> Site<RecordingHost> {
        Site::with_content(SiteConfig::default(), ContentStore::builtin(), RecordingHost::new())
    }

    #[test]
    fn document_direction_follows_language() {
        let mut site = site();
        assert_eq!(site.host().document_direction(), Some(Direction::Ltr));
        assert_eq!(site.set_language(Lang::Fa), Direction::Rtl);
        assert_eq!(site.host().document_direction(), Some(Direction::Rtl));
        site.set_language(Lang::Fr);
        assert_eq!(site.host().document_direction(), Some(Direction::Ltr));
    }

    #[test]
    fn every_transition_scrolls_to_top() {
        let mut site = site();
        site.navigate(Page::AboutUs);
        site.navigate(Page::News);
        site.submit_search("solar");
        assert_eq!(site.host().count(&HostEffect::ScrollToTop), 3);
        assert_eq!(site.host().location(), Some("#/search?q=solar"));
    }

    #[test]
    fn blank_search_is_ignored() {
        let mut site = site();
        assert!(site.submit_search("   ").is_none());
        assert_eq!(site.router().page(), Page::Home);
        assert!(site.host().effects.iter().all(|e| *e != HostEffect::ScrollToTop));
    }

    #[test]
    fn article_then_back_stays_on_news() {
        let mut site = site();
        let id = ContentId::from("hydrogen-partnership");
        let open = site.open_article(&id).unwrap();
        assert_eq!(open.animation, Animation::SlideForward);
        assert_eq!(site.router().selected_article(), Some(&id));
        site.back_to_news();
        assert_eq!(site.router().page(), Page::News);
        assert!(site.router().selected_article().is_none());
        assert!(site.open_article(&ContentId::from("missing")).is_err());
    }

    #[test]
    fn restore_rebuilds_state_from_hash() {
        let mut site = site();
        site.restore("#/news/annual-results-2024");
        assert_eq!(
            site.router().location(),
            Location::Article(ContentId::from("annual-results-2024"))
        );
        site.restore("#/search?q=green+steel");
        let search = site.router().search().unwrap();
        assert_eq!(search.query, "green steel");
        assert!(!search.results.is_empty());
        site.restore("#/news/unknown-story");
        assert_eq!(site.router().location(), Location::Page(Page::News));
        site.restore("#/nowhere");
        assert_eq!(site.router().page(), Page::Home);
    }

    #[test]
    fn subscribers_see_state_changes() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let mut site = site();
        site.subscribe(move |event| sink.borrow_mut().push(event.clone()));
        site.toggle_theme();
        site.set_language(Lang::Ar);
        site.navigate(Page::Contact);
        let seen = seen.borrow();
        assert_eq!(seen[0], SiteEvent::ThemeChanged(Theme::Dark));
        assert_eq!(
            seen[1],
            SiteEvent::LanguageChanged {
                lang: Lang::Ar,
                dir: Direction::Rtl
            }
        );
        assert!(matches!(seen[2], SiteEvent::Navigated(_)));
    }

    #[test]
    fn activating_a_result_follows_its_kind() {
        let mut site = site();
        site.submit_search("hydrogen");
        let results = site.router().search().unwrap().results.clone();
        let news = results
            .iter()
            .position(|r| r.kind == crate::types::ContentKind::News)
            .unwrap();
        site.activate_result(news).unwrap();
        assert_eq!(site.router().page(), Page::News);
        assert!(site.router().selected_article().is_some());
        assert!(site.activate_result(99).is_none());
    }
}
