// SPDX-License-Identifier: PMPL-1.0-or-later

//! Terminal formatting of composed pages

use crate::i18n::Direction;
use crate::render::{Block, PageView, Tone};
use colored::*;
use unicode_width::UnicodeWidthStr;

const MIN_WIDTH: usize = 40;
const MAX_WIDTH: usize = 100;

pub struct PageFormatter {
    width: usize,
}

impl PageFormatter {
    /// Formatter wrapping at the terminal width (80 columns if unknown).
    pub fn new() -> Self {
        let width = crossterm::terminal::size()
            .map(|(cols, _)| cols as usize)
            .unwrap_or(80);
        Self::with_width(width)
    }

    pub fn with_width(width: usize) -> Self {
        Self {
            width: width.clamp(MIN_WIDTH, MAX_WIDTH),
        }
    }

    pub fn print(&self, view: &PageView) {
        for line in self.lines(view, true) {
            println!("{}", line);
        }
    }

    /// Uncoloured rendering, used for text output files.
    pub fn plain(&self, view: &PageView) -> String {
        let mut text = self.lines(view, false).join("\n");
        text.push('\n');
        text
    }

    pub fn lines(&self, view: &PageView, styled: bool) -> Vec<String> {
        let paint = |text: &str, style: fn(ColoredString) -> ColoredString| -> String {
            if styled {
                style(text.normal()).to_string()
            } else {
                text.to_string()
            }
        };

        let mut lines = Vec::new();
        let mut header = format!(
            "{} · {} [{}]",
            view.site_name,
            view.lang.native_name(),
            view.dir.as_str()
        );
        if view.dir == Direction::Rtl {
            // Terminals render bidi text themselves; mark the page so it is obvious.
            header.push_str(" ⇐");
        }
        lines.push(paint(&header, |s| s.bold().cyan()));

        let nav: Vec<String> = view
            .nav
            .iter()
            .map(|link| {
                if link.active {
                    paint(&format!("[{}]", link.label), |s| s.bold().green())
                } else {
                    link.label.clone()
                }
            })
            .collect();
        lines.push(nav.join("  "));
        lines.push(String::new());

        lines.push(paint(&format!("=== {} ===", view.title.to_uppercase()), |s| s.bold().yellow()));
        lines.push(String::new());

        for section in &view.sections {
            if let Some(heading) = &section.heading {
                lines.push(paint(heading, |s| s.bold()));
            }
            for block in &section.blocks {
                self.block_lines(block, styled, &mut lines);
            }
            lines.push(String::new());
        }

        let footer: Vec<&str> = view.footer.iter().map(|l| l.label.as_str()).collect();
        lines.push(paint(&footer.join(" · "), |s| s.dimmed()));
        lines.push(paint(&view.footer_note, |s| s.dimmed()));
        lines
    }

    fn block_lines(&self, block: &Block, styled: bool, out: &mut Vec<String>) {
        let paint = |text: &str, style: fn(ColoredString) -> ColoredString| -> String {
            if styled {
                style(text.normal()).to_string()
            } else {
                text.to_string()
            }
        };
        match block {
            Block::Paragraph { text } => out.extend(wrap(text, self.width, "  ")),
            Block::Card {
                title,
                text,
                meta,
                href,
            } => {
                let mut heading = format!("  ▸ {}", title);
                if let Some(href) = href {
                    heading.push_str(&format!(" ({})", href));
                }
                out.push(paint(&heading, |s| s.bold()));
                if let Some(meta) = meta {
                    out.push(paint(&format!("    {}", meta), |s| s.dimmed()));
                }
                out.extend(wrap(text, self.width, "    "));
            }
            Block::List { items } => {
                for item in items {
                    out.extend(wrap(&format!("- {}", item), self.width, "    "));
                }
            }
            Block::Link { label, href } => {
                out.push(paint(&format!("  → {} ({})", label, href), |s| s.blue()));
            }
            Block::Notice { tone, text } => {
                let line = format!("  ! {}", text);
                out.push(match tone {
                    Tone::Info => paint(&line, |s| s.cyan()),
                    Tone::Success => paint(&line, |s| s.green()),
                    Tone::Error => paint(&line, |s| s.red()),
                });
            }
            Block::Field {
                label,
                value,
                required,
                error,
            } => {
                let marker = if *required { "*" } else { "" };
                out.push(format!("  {}{}: {}", label, marker, value));
                if let Some(error) = error {
                    out.push(paint(&format!("    {}", error), |s| s.red()));
                }
            }
            Block::Marker {
                name,
                category,
                description,
                active,
            } => {
                let line = format!("  ◆ {} [{}] {}", name, category, description);
                out.push(if *active {
                    paint(&line, |s| s.bold().green())
                } else {
                    line
                });
            }
        }
    }
}

impl Default for PageFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Greedy word wrap measured in terminal columns; words longer than the
/// line are kept whole.
fn wrap(text: &str, width: usize, indent: &str) -> Vec<String> {
    let limit = width.saturating_sub(indent.width()).max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut used = 0;
    for word in text.split_whitespace() {
        let word_width = word.width();
        let needed = used + word_width + usize::from(!current.is_empty());
        if !current.is_empty() && needed > limit {
            lines.push(format!("{}{}", indent, current));
            current.clear();
            used = 0;
        }
        if !current.is_empty() {
            current.push(' ');
            used += 1;
        }
        current.push_str(word);
        used += word_width;
    }
    if !current.is_empty() {
        lines.push(format!("{}{}", indent, current));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_respects_width() {
        let lines = wrap("one two three four five six", 12, "  ");
        assert_eq!(lines, vec!["  one two", "  three four", "  five six"]);
        assert!(wrap("   ", 40, "").is_empty());
    }

    #[test]
    fn wrap_counts_wide_characters_as_two_columns() {
        let lines = wrap("中文中文中文 中文中文中文 中文中文中文", 20, "  ");
        assert_eq!(lines.len(), 3);
        for line in &lines {
            assert!(line.width() <= 20, "{:?} is {} columns", line, line.width());
        }

        // Combining marks take no column of their own.
        let lines = wrap("cafe\u{301} cafe\u{301} cafe\u{301}", 10, "");
        assert_eq!(lines, vec!["cafe\u{301} cafe\u{301}", "cafe\u{301}"]);
    }

    #[test]
    fn width_is_clamped() {
        assert_eq!(PageFormatter::with_width(10).width, MIN_WIDTH);
        assert_eq!(PageFormatter::with_width(500).width, MAX_WIDTH);
    }
}
