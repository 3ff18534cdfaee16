// SPDX-License-Identifier: PMPL-1.0-or-later

//! Page composition and output.
//!
//! [`compose`] turns the router state into a [`PageView`]: localized chrome,
//! navigation and the page's sections, with widget output already resolved.
//! The view is then printed ([`formatter`]), serialized ([`output`]) or
//! browsed interactively ([`tui`]).

pub mod formatter;
pub mod output;
pub mod tui;

use crate::content::ContentStore;
use crate::host::Host;
use crate::i18n::{Direction, Lang, Localizer};
use crate::router::{Location, Page, Router};
use crate::site::Site;
use crate::types::{NewsItem, Theme};
use crate::widgets::{
    ContactForm, Field, FormStatus, HighlightsView, HighlightsWidget, MapProvider, MapView,
    MapWidget, Mount, SessionCache, SummarySource, SummaryWidget, TextGenerator,
};
use chrono::{Datelike, Utc};
use serde::Serialize;

pub use formatter::PageFormatter;
pub use output::OutputFormat;

/// Figures interpolated into marketing copy.
const COUNTRIES: u32 = 14;
const EMPLOYEES: &str = "5,200";
const FEATURED: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageView {
    pub page: Page,
    pub location: String,
    pub lang: Lang,
    pub dir: Direction,
    pub theme: Theme,
    pub site_name: String,
    pub title: String,
    pub nav: Vec<NavLink>,
    pub sections: Vec<Section>,
    pub footer: Vec<NavLink>,
    pub footer_note: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub page: Page,
    pub label: String,
    pub href: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Section {
    pub heading: Option<String>,
    pub blocks: Vec<Block>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Block {
    Paragraph {
        text: String,
    },
    Card {
        title: String,
        text: String,
        meta: Option<String>,
        href: Option<String>,
    },
    List {
        items: Vec<String>,
    },
    Link {
        label: String,
        href: String,
    },
    Notice {
        tone: Tone,
        text: String,
    },
    Field {
        label: String,
        value: String,
        required: bool,
        error: Option<String>,
    },
    Marker {
        name: String,
        category: String,
        description: String,
        active: bool,
    },
}

impl Block {
    fn paragraph(text: impl Into<String>) -> Self {
        Block::Paragraph { text: text.into() }
    }

    fn notice(tone: Tone, text: impl Into<String>) -> Self {
        Block::Notice {
            tone,
            text: text.into(),
        }
    }

    /// Target of a navigable block.
    pub fn href(&self) -> Option<&str> {
        match self {
            Block::Card { href, .. } => href.as_deref(),
            Block::Link { href, .. } => Some(href),
            _ => None,
        }
    }
}

impl Section {
    fn new(heading: Option<String>, blocks: Vec<Block>) -> Self {
        Self { heading, blocks }
    }
}

/// Everything a page needs, borrowed from wherever it lives.
pub struct RenderContext<'a> {
    pub content: &'a ContentStore,
    pub localizer: &'a Localizer,
    pub router: &'a Router,
    pub theme: Theme,
    pub cache: &'a SessionCache,
    pub generator: &'a dyn TextGenerator,
    pub map_provider: &'a dyn MapProvider,
    pub map_key: Option<&'a str>,
    pub contact: Option<&'a ContactForm>,
    pub year: i32,
}

impl<'a> RenderContext<'a> {
    pub fn for_site<H: Host>(site: &'a Site<H>) -> Self {
        Self {
            content: site.content(),
            localizer: site.localizer(),
            router: site.router(),
            theme: site.theme(),
            cache: site.cache(),
            generator: site.generator(),
            map_provider: site.map_provider(),
            map_key: site.config().map.api_key.as_deref(),
            contact: Some(site.contact()),
            year: Utc::now().year(),
        }
    }

    fn t(&self, key: &str) -> String {
        self.localizer.t(key)
    }

    fn lang(&self) -> Lang {
        self.localizer.language()
    }
}

/// Compose the current page of `site`.
pub fn compose_site<H: Host>(site: &Site<H>) -> PageView {
    compose(&RenderContext::for_site(site))
}

pub fn compose(ctx: &RenderContext<'_>) -> PageView {
    let page = ctx.router.page();
    let (title, sections) = match page {
        Page::Home => (ctx.t("nav.home"), home(ctx)),
        Page::AboutUs => (ctx.t("about.title"), about(ctx)),
        Page::CoreTechnologies => (ctx.t("tech.title"), technologies(ctx)),
        Page::Projects => (ctx.t("projects.title"), projects(ctx)),
        Page::News => news(ctx),
        Page::Contact => (ctx.t("contact.title"), contact(ctx)),
        Page::SearchResults => (ctx.t("nav.search_results"), search_results(ctx)),
        Page::ComingSoon => coming_soon(ctx),
        Page::InnovationHub => simple(ctx, "innovation", &[]),
        Page::Sustainability => simple(ctx, "sustainability", &[]),
        Page::Careers => simple(ctx, "careers", &[("employees", &EMPLOYEES)]),
        Page::Investors => simple(ctx, "investors", &[]),
        Page::Leadership => simple(ctx, "leadership", &[]),
        Page::Partners => simple(ctx, "partners", &[]),
        Page::Legal => simple(ctx, "legal", &[]),
        Page::Privacy => simple(ctx, "privacy", &[]),
    };

    PageView {
        page,
        location: ctx.router.location().to_hash(),
        lang: ctx.lang(),
        dir: ctx.localizer.direction(),
        theme: ctx.theme,
        site_name: ctx.t("site.name"),
        title,
        nav: links(ctx, Page::primary_nav(), page),
        sections,
        footer: links(ctx, Page::footer_links(), page),
        footer_note: ctx
            .localizer
            .t_with("site.footer.rights", &[("year", &ctx.year)]),
    }
}

fn links(ctx: &RenderContext<'_>, pages: &[Page], current: Page) -> Vec<NavLink> {
    pages
        .iter()
        .map(|&page| NavLink {
            page,
            label: ctx.t(page.title_key()),
            href: Location::Page(page).to_hash(),
            active: page == current,
        })
        .collect()
}

fn simple(
    ctx: &RenderContext<'_>,
    prefix: &str,
    vars: &[(&str, &dyn std::fmt::Display)],
) -> (String, Vec<Section>) {
    let title = ctx.t(&format!("{prefix}.title"));
    let body = ctx.localizer.t_with(&format!("{prefix}.body"), vars);
    (title, vec![Section::new(None, vec![Block::paragraph(body)])])
}

fn home(ctx: &RenderContext<'_>) -> Vec<Section> {
    let hero = Section::new(
        Some(ctx.t("home.hero.title")),
        vec![
            Block::paragraph(
                ctx.localizer
                    .t_with("home.hero.subtitle", &[("countries", &COUNTRIES)]),
            ),
            Block::Link {
                label: ctx.t("home.cta"),
                href: Location::Page(Page::Projects).to_hash(),
            },
        ],
    );
    let featured = ctx
        .content
        .projects
        .iter()
        .take(FEATURED)
        .map(|project| Block::Card {
            title: project.name.clone(),
            text: project.excerpt.clone(),
            meta: Some(sector(ctx, &project.sector)),
            href: Some(Location::Page(Page::Projects).to_hash()),
        })
        .collect();
    let latest = ctx
        .content
        .news_by_date()
        .into_iter()
        .take(FEATURED)
        .map(|item| news_card(ctx, item))
        .collect();
    vec![
        hero,
        Section::new(Some(ctx.t("home.featured_projects")), featured),
        Section::new(Some(ctx.t("home.latest_news")), latest),
    ]
}

fn about(ctx: &RenderContext<'_>) -> Vec<Section> {
    vec![Section::new(
        None,
        ["about.body", "about.mission", "about.values"]
            .iter()
            .map(|key| Block::paragraph(ctx.t(key)))
            .collect(),
    )]
}

fn technologies(ctx: &RenderContext<'_>) -> Vec<Section> {
    let widget = HighlightsWidget::new(ctx.cache, ctx.generator);
    let mount = Mount::new();
    let mut sections = vec![Section::new(None, vec![Block::paragraph(ctx.t("tech.intro"))])];
    for tech in &ctx.content.technologies {
        let mut blocks = vec![
            Block::paragraph(tech.description.clone()),
            Block::paragraph(tech.details.clone()),
        ];
        match widget.load(tech, ctx.lang(), &mount) {
            Some(HighlightsView::Ready { items, .. }) => {
                blocks.push(Block::paragraph(ctx.t("widget.highlights.title")));
                blocks.push(Block::List { items });
            }
            Some(HighlightsView::Error { message_key }) => {
                blocks.push(Block::notice(Tone::Error, ctx.t(message_key)));
            }
            None => {}
        }
        sections.push(Section::new(Some(tech.name.clone()), blocks));
    }
    sections
}

fn projects(ctx: &RenderContext<'_>) -> Vec<Section> {
    let widget = SummaryWidget::new(ctx.cache, ctx.generator);
    let mount = Mount::new();
    let cards = ctx
        .content
        .projects
        .iter()
        .map(|project| {
            let text = widget
                .load(project.into(), ctx.lang(), &mount)
                .map(|view| view.text)
                .unwrap_or_else(|| project.excerpt.clone());
            Block::Card {
                title: project.name.clone(),
                text,
                meta: Some(sector(ctx, &project.sector)),
                href: None,
            }
        })
        .collect();
    vec![
        Section::new(None, vec![Block::paragraph(ctx.t("projects.intro"))]),
        Section::new(None, cards),
    ]
}

fn news(ctx: &RenderContext<'_>) -> (String, Vec<Section>) {
    let selected = ctx
        .router
        .selected_article()
        .and_then(|id| ctx.content.news_item(id));
    let Some(item) = selected else {
        let cards = ctx
            .content
            .news_by_date()
            .into_iter()
            .map(|item| news_card(ctx, item))
            .collect();
        return (
            ctx.t("news.title"),
            vec![
                Section::new(None, vec![Block::paragraph(ctx.t("news.intro"))]),
                Section::new(None, cards),
            ],
        );
    };

    let mut summary = Vec::new();
    if let Some(view) = SummaryWidget::new(ctx.cache, ctx.generator).load(item.into(), ctx.lang(), &Mount::new()) {
        if view.source == SummarySource::Fallback {
            summary.push(Block::notice(Tone::Info, ctx.t("widget.summary.fallback")));
        }
        summary.push(Block::paragraph(view.text));
    }
    (
        item.title.clone(),
        vec![
            Section::new(
                None,
                vec![Block::paragraph(published(ctx, item))],
            ),
            Section::new(Some(ctx.t("widget.summary.title")), summary),
            Section::new(None, vec![Block::paragraph(item.body.clone())]),
            Section::new(
                None,
                vec![Block::Link {
                    label: ctx.t("news.back"),
                    href: Location::Page(Page::News).to_hash(),
                }],
            ),
        ],
    )
}

fn contact(ctx: &RenderContext<'_>) -> Vec<Section> {
    let empty = ContactForm::new();
    let form = ctx.contact.unwrap_or(&empty);

    let mut blocks = vec![Block::paragraph(ctx.t("contact.intro"))];
    match form.status() {
        FormStatus::Sent { receipt } => blocks.push(Block::notice(
            Tone::Success,
            ctx.localizer.t_with(
                "contact.success",
                &[("name", &receipt.name), ("reference", &receipt.reference)],
            ),
        )),
        FormStatus::Failed => blocks.push(Block::notice(Tone::Error, ctx.t("contact.failure"))),
        FormStatus::Idle | FormStatus::Invalid { .. } => {}
    }
    for &field in Field::all() {
        blocks.push(Block::Field {
            label: ctx.t(field.label_key()),
            value: form.value(field).to_string(),
            required: field.is_required(),
            error: form.error_for(field).map(|err| ctx.t(err.message_key)),
        });
    }

    vec![Section::new(None, blocks), map_section(ctx)]
}

fn map_section(ctx: &RenderContext<'_>) -> Section {
    let blocks = match MapWidget::new(&ctx.content.locations).load(ctx.map_provider, ctx.map_key) {
        MapView::Ready {
            markers, clusters, ..
        } => {
            let mut blocks: Vec<Block> = markers
                .into_iter()
                .map(|marker| Block::Marker {
                    name: marker.name,
                    category: ctx.t(marker.category.label_key()),
                    description: marker.description,
                    active: marker.active,
                })
                .collect();
            let grouped: Vec<String> = clusters
                .into_iter()
                .filter(|cluster| cluster.count > 1)
                .map(|cluster| {
                    format!(
                        "{}: {}",
                        ctx.localizer
                            .t_with("map.cluster", &[("count", &cluster.count)]),
                        cluster.names.join(", ")
                    )
                })
                .collect();
            if !grouped.is_empty() {
                blocks.push(Block::List { items: grouped });
            }
            blocks
        }
        MapView::Unavailable { message_key } => vec![Block::notice(Tone::Error, ctx.t(message_key))],
    };
    Section::new(Some(ctx.t("map.title")), blocks)
}

fn search_results(ctx: &RenderContext<'_>) -> Vec<Section> {
    let (query, results) = match ctx.router.search() {
        Some(state) => (state.query.as_str(), state.results.as_slice()),
        None => ("", &[][..]),
    };
    let heading = ctx
        .localizer
        .t_with("search.results_for", &[("query", &query)]);
    let blocks = if results.is_empty() {
        vec![Block::notice(Tone::Info, ctx.t("search.no_results"))]
    } else {
        let mut blocks = vec![Block::paragraph(
            ctx.localizer
                .t_with("search.count", &[("count", &results.len())]),
        )];
        blocks.extend(results.iter().map(|result| {
            let href = match result.target_page() {
                Page::News => Location::Article(result.id.clone()),
                page => Location::Page(page),
            };
            Block::Card {
                title: result.label.clone(),
                text: result.description.clone(),
                meta: Some(ctx.t(result.kind.label_key())),
                href: Some(href.to_hash()),
            }
        }));
        blocks
    };
    vec![Section::new(Some(heading), blocks)]
}

fn coming_soon(ctx: &RenderContext<'_>) -> (String, Vec<Section>) {
    let feature = ctx
        .router
        .coming_soon_title()
        .map(|key| ctx.t(key))
        .unwrap_or_else(|| ctx.t("nav.coming_soon"));
    let body = ctx
        .localizer
        .t_with("coming_soon.body", &[("title", &feature)]);
    (feature, vec![Section::new(None, vec![Block::paragraph(body)])])
}

fn news_card(ctx: &RenderContext<'_>, item: &NewsItem) -> Block {
    Block::Card {
        title: item.title.clone(),
        text: item.excerpt.clone(),
        meta: Some(published(ctx, item)),
        href: Some(Location::Article(item.id.clone()).to_hash()),
    }
}

fn published(ctx: &RenderContext<'_>, item: &NewsItem) -> String {
    let date = item.date.format("%Y-%m-%d").to_string();
    ctx.localizer.t_with("news.published", &[("date", &date)])
}

fn sector(ctx: &RenderContext<'_>, sector: &str) -> String {
    ctx.localizer.t_with("projects.sector", &[("sector", &sector)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::types::ContentId;

    fn site() -> Site {
        Site::with_content(SiteConfig::default(), ContentStore::builtin(), crate::host::NullHost)
    }

    fn texts(view: &PageView) -> Vec<String> {
        view.sections
            .iter()
            .flat_map(|s| s.blocks.iter())
            .filter_map(|b| match b {
                Block::Paragraph { text } | Block::Notice { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn home_has_nav_with_active_entry() {
        let view = compose_site(&site());
        assert_eq!(view.page, Page::Home);
        assert_eq!(view.location, "#/");
        let active: Vec<_> = view.nav.iter().filter(|l| l.active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].label, "Home");
        assert!(texts(&view).iter().any(|t| t.contains("14 countries")));
    }

    #[test]
    fn empty_search_renders_no_results_notice() {
        let mut site = site();
        site.submit_search("zzzz-no-such-thing").unwrap();
        let view = compose_site(&site);
        assert_eq!(view.page, Page::SearchResults);
        assert_eq!(view.sections.len(), 1);
        assert_eq!(
            view.sections[0].blocks,
            vec![Block::notice(
                Tone::Info,
                "No results found. Try a different search term."
            )]
        );
    }

    #[test]
    fn rtl_page_carries_direction() {
        let mut site = site();
        site.set_language(Lang::Ar);
        let view = compose_site(&site);
        assert_eq!(view.dir, Direction::Rtl);
        assert_eq!(view.lang, Lang::Ar);
    }

    #[test]
    fn article_view_has_summary_and_back_link() {
        let mut site = site();
        site.open_article(&ContentId::from("annual-results-2024")).unwrap();
        let view = compose_site(&site);
        assert_eq!(view.location, "#/news/annual-results-2024");
        let links: Vec<_> = view
            .sections
            .iter()
            .flat_map(|s| s.blocks.iter())
            .filter_map(Block::href)
            .collect();
        assert_eq!(links, vec!["#/news"]);
        assert_eq!(view.sections[1].heading.as_deref(), Some("Summary"));
        assert!(!view.sections[1].blocks.is_empty());
    }

    #[test]
    fn contact_without_map_key_shows_inline_error() {
        let mut site = site();
        site.navigate(Page::Contact);
        let view = compose_site(&site);
        assert!(texts(&view).contains(&"The map could not be loaded.".to_string()));
    }

    #[test]
    fn coming_soon_names_the_feature() {
        let mut site = site();
        site.coming_soon("nav.careers");
        let view = compose_site(&site);
        assert_eq!(view.title, "Careers");
        assert!(texts(&view)[0].starts_with("Careers is coming soon"));
    }
}
