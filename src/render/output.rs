// SPDX-License-Identifier: PMPL-1.0-or-later

//! Serialization of composed pages for printing and export

use crate::render::formatter::PageFormatter;
use crate::render::{Block, PageView, Tone};
use anyhow::Result;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
    Yaml,
    Html,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "text" | "txt" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            "yaml" | "yml" => Some(OutputFormat::Yaml),
            "html" | "htm" => Some(OutputFormat::Html),
            _ => None,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Text => "txt",
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
            OutputFormat::Html => "html",
        }
    }

    pub fn serialize(&self, view: &PageView) -> Result<String> {
        match self {
            OutputFormat::Text => Ok(PageFormatter::new().plain(view)),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(view)?),
            OutputFormat::Yaml => Ok(serde_yaml::to_string(view)?),
            OutputFormat::Html => Ok(format_page_as_html(view)),
        }
    }
}

/// Escape text for HTML element content and double-quoted attributes.
pub fn html_escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

fn format_page_as_html(view: &PageView) -> String {
    let mut lines = Vec::new();
    lines.push("<!DOCTYPE html>".to_string());
    lines.push(format!(
        "<html lang=\"{}\" dir=\"{}\" data-theme=\"{}\">",
        view.lang.code(),
        view.dir.as_str(),
        view.theme.as_str()
    ));
    lines.push("<head>".to_string());
    lines.push("<meta charset=\"utf-8\">".to_string());
    lines.push(format!(
        "<title>{} | {}</title>",
        html_escape(&view.title),
        html_escape(&view.site_name)
    ));
    lines.push("</head>".to_string());
    lines.push("<body>".to_string());

    lines.push("<header><nav>".to_string());
    for link in &view.nav {
        lines.push(format!(
            "  <a href=\"{}\"{}>{}</a>",
            html_escape(&link.href),
            if link.active { " aria-current=\"page\"" } else { "" },
            html_escape(&link.label)
        ));
    }
    lines.push("</nav></header>".to_string());

    lines.push("<main>".to_string());
    lines.push(format!("<h1>{}</h1>", html_escape(&view.title)));
    for section in &view.sections {
        lines.push("<section>".to_string());
        if let Some(heading) = &section.heading {
            lines.push(format!("  <h2>{}</h2>", html_escape(heading)));
        }
        for block in &section.blocks {
            lines.push(format!("  {}", block_html(block)));
        }
        lines.push("</section>".to_string());
    }
    lines.push("</main>".to_string());

    lines.push("<footer><nav>".to_string());
    for link in &view.footer {
        lines.push(format!(
            "  <a href=\"{}\">{}</a>",
            html_escape(&link.href),
            html_escape(&link.label)
        ));
    }
    lines.push("</nav>".to_string());
    lines.push(format!("<p>{}</p>", html_escape(&view.footer_note)));
    lines.push("</footer>".to_string());
    lines.push("</body>".to_string());
    lines.push("</html>".to_string());
    lines.join("\n")
}

fn block_html(block: &Block) -> String {
    match block {
        Block::Paragraph { text } => format!("<p>{}</p>", html_escape(text)),
        Block::Card {
            title,
            text,
            meta,
            href,
        } => {
            let heading = match href {
                Some(href) => format!(
                    "<a href=\"{}\">{}</a>",
                    html_escape(href),
                    html_escape(title)
                ),
                None => html_escape(title),
            };
            let meta = meta
                .as_deref()
                .map(|m| format!("<small>{}</small>", html_escape(m)))
                .unwrap_or_default();
            format!(
                "<article><h3>{}</h3>{}<p>{}</p></article>",
                heading,
                meta,
                html_escape(text)
            )
        }
        Block::List { items } => {
            let items: Vec<String> = items
                .iter()
                .map(|item| format!("<li>{}</li>", html_escape(item)))
                .collect();
            format!("<ul>{}</ul>", items.join(""))
        }
        Block::Link { label, href } => format!(
            "<a href=\"{}\">{}</a>",
            html_escape(href),
            html_escape(label)
        ),
        Block::Notice { tone, text } => {
            let (class, role) = match tone {
                Tone::Info => ("notice", "status"),
                Tone::Success => ("notice success", "status"),
                Tone::Error => ("notice error", "alert"),
            };
            format!(
                "<p class=\"{}\" role=\"{}\">{}</p>",
                class,
                role,
                html_escape(text)
            )
        }
        Block::Field {
            label,
            value,
            required,
            error,
        } => {
            let error = error
                .as_deref()
                .map(|e| format!("<span role=\"alert\">{}</span>", html_escape(e)))
                .unwrap_or_default();
            format!(
                "<label>{}<input value=\"{}\"{}></label>{}",
                html_escape(label),
                html_escape(value),
                if *required { " required" } else { "" },
                error
            )
        }
        Block::Marker {
            name,
            category,
            description,
            active,
        } => format!(
            "<div class=\"marker{}\" data-category=\"{}\"><strong>{}</strong> {}</div>",
            if *active { " active" } else { "" },
            html_escape(category),
            html_escape(name),
            html_escape(description)
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_aliases() {
        assert_eq!(OutputFormat::parse("YML"), Some(OutputFormat::Yaml));
        assert_eq!(OutputFormat::parse("htm"), Some(OutputFormat::Html));
        assert_eq!(OutputFormat::parse("pdf"), None);
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(
            html_escape("<a href=\"x\">R&D's</a>"),
            "&lt;a href=&quot;x&quot;&gt;R&amp;D&#39;s&lt;/a&gt;"
        );
    }
}
