// SPDX-License-Identifier: PMPL-1.0-or-later

//! Lightweight terminal browser over the site router

use crate::host::Host;
use crate::i18n::Lang;
use crate::render::formatter::PageFormatter;
use crate::render::{compose_site, PageView};
use crate::router::Page;
use crate::site::Site;
use anyhow::Result;
use colored::*;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent},
    execute,
    terminal::{self, ClearType},
};
use std::io::{stdout, Write};
use std::time::Duration;

pub struct SiteTui;

/// Keyboard state between frames.
#[derive(Debug, Default)]
struct BrowseState {
    selected: usize,
    query: Option<String>,
}

impl SiteTui {
    pub fn run<H: Host>(site: &mut Site<H>) -> Result<()> {
        terminal::enable_raw_mode()?;
        let result = Self::run_inner(site);
        terminal::disable_raw_mode()?;
        result
    }

    fn run_inner<H: Host>(site: &mut Site<H>) -> Result<()> {
        let mut stdout = stdout();
        execute!(stdout, terminal::Clear(ClearType::All), cursor::MoveTo(0, 0))?;
        let mut state = BrowseState::default();

        loop {
            let view = compose_site(site);
            let targets = link_targets(&view);
            state.selected = state.selected.min(targets.len().saturating_sub(1));
            Self::render(&mut stdout, &view, &targets, &state)?;

            if !event::poll(Duration::from_millis(200))? {
                continue;
            }
            let Event::Key(KeyEvent { code, .. }) = event::read()? else {
                continue;
            };

            // Search entry captures every key until Enter or Esc.
            if let Some(query) = state.query.as_mut() {
                match code {
                    KeyCode::Enter => {
                        let query = state.query.take().unwrap_or_default();
                        site.submit_search(&query);
                        state.selected = 0;
                    }
                    KeyCode::Esc => state.query = None,
                    KeyCode::Backspace => {
                        query.pop();
                    }
                    KeyCode::Char(c) => query.push(c),
                    _ => {}
                }
                continue;
            }

            match code {
                KeyCode::Char('q') | KeyCode::Esc => break,
                KeyCode::Tab | KeyCode::Char('j') | KeyCode::Down if !targets.is_empty() => {
                    state.selected = (state.selected + 1) % targets.len();
                }
                KeyCode::BackTab | KeyCode::Char('k') | KeyCode::Up if !targets.is_empty() => {
                    state.selected = (state.selected + targets.len() - 1) % targets.len();
                }
                KeyCode::Enter => {
                    if let Some((_, href)) = targets.get(state.selected) {
                        site.restore(href);
                        state.selected = 0;
                    }
                }
                KeyCode::Char('/') => state.query = Some(String::new()),
                KeyCode::Char('b') if site.router().page() == Page::News => {
                    site.back_to_news();
                }
                KeyCode::Char('h') => {
                    site.navigate(Page::Home);
                    state.selected = 0;
                }
                KeyCode::Char('l') => {
                    site.set_language(next_language(site.language()));
                }
                KeyCode::Char('t') => {
                    site.toggle_theme();
                }
                _ => {}
            }
        }

        Ok(())
    }

    fn render(
        stdout: &mut impl Write,
        view: &PageView,
        targets: &[(String, String)],
        state: &BrowseState,
    ) -> Result<()> {
        execute!(stdout, terminal::Clear(ClearType::All), cursor::MoveTo(0, 0))?;
        // Raw mode needs explicit carriage returns.
        for line in PageFormatter::new().lines(view, true) {
            write!(stdout, "{}\r\n", line)?;
        }
        write!(stdout, "\r\n")?;

        for (idx, (label, href)) in targets.iter().enumerate() {
            let indicator = if idx == state.selected {
                "➤".green()
            } else {
                " ".normal()
            };
            write!(stdout, "{} {} {}\r\n", indicator, label.bold(), href.dimmed())?;
        }
        write!(stdout, "\r\n")?;

        match &state.query {
            Some(query) => write!(stdout, "{} {}_\r\n", "Search:".bold(), query)?,
            None => write!(
                stdout,
                "{}\r\n",
                "Controls: [Tab/j] Next, [Shift+Tab/k] Prev, [Enter] Open, [/] Search, [b] Back, [h] Home, [l] Language, [t] Theme, [q] Quit"
                    .dimmed()
            )?,
        }
        stdout.flush()?;
        Ok(())
    }
}

/// Navigable entries: primary nav, then links inside the page, then footer.
fn link_targets(view: &PageView) -> Vec<(String, String)> {
    let nav = view
        .nav
        .iter()
        .map(|link| (link.label.clone(), link.href.clone()));
    let inline = view.sections.iter().flat_map(|section| {
        section.blocks.iter().filter_map(|block| {
            let href = block.href()?;
            let label = match block {
                crate::render::Block::Card { title, .. } => title.clone(),
                crate::render::Block::Link { label, .. } => label.clone(),
                _ => href.to_string(),
            };
            Some((label, href.to_string()))
        })
    });
    let footer = view
        .footer
        .iter()
        .map(|link| (link.label.clone(), link.href.clone()));
    nav.chain(inline).chain(footer).collect()
}

fn next_language(current: Lang) -> Lang {
    let all = Lang::all();
    let idx = all.iter().position(|&l| l == current).unwrap_or(0);
    all[(idx + 1) % all.len()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;

    #[test]
    fn language_cycle_wraps() {
        assert_eq!(next_language(Lang::En), Lang::Fr);
        assert_eq!(next_language(Lang::Ar), Lang::En);
    }

    #[test]
    fn targets_include_article_links_on_news_page() {
        let mut site = Site::from_config(SiteConfig::default()).unwrap();
        site.navigate(Page::News);
        let view = compose_site(&site);
        let targets = link_targets(&view);
        assert!(targets
            .iter()
            .any(|(_, href)| href == "#/news/hydrogen-partnership"));
        assert_eq!(targets.first().map(|t| t.1.as_str()), Some("#/"));
    }
}
