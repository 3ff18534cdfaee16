// SPDX-License-Identifier: PMPL-1.0-or-later

//! atlas-site: render, search and browse the Atlas Group corporate site
//!
//! Every page is composed from the same state the interactive site uses, in
//! any of the four site languages, and can be printed, written to a file or
//! exported as a static tree.

use anyhow::{anyhow, bail, Context, Result};
use atlas_site::render::tui::SiteTui;
use atlas_site::render::{compose_site, OutputFormat, PageFormatter};
use atlas_site::types::ContentId;
use atlas_site::widgets::{
    ContactForm, ExtractiveGenerator, Field, FormStatus, HighlightsView, HighlightsWidget, Mount,
    SimulatedSubmitter, SummaryWidget,
};
use atlas_site::{diagnostics, export, i18n, Lang, Site, SiteConfig};
use clap::{Parser, Subcommand};
use colored::*;
use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "atlas-site")]
#[command(version)]
#[command(about = "Render, search and browse the Atlas Group corporate site")]
#[command(long_about = None)]
struct Cli {
    /// Site configuration file (YAML or JSON); defaults to ./atlas-site.yaml
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Errors only
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compose one page and print or save it
    Render {
        /// Page slug or location hash (home, projects, news/<id>, #/search?q=...)
        #[arg(value_name = "PAGE", default_value = "home")]
        page: String,

        /// News article to open
        #[arg(long)]
        article: Option<String>,

        /// Site language (en, fr, fa, ar)
        #[arg(short, long, value_parser = parse_lang)]
        lang: Option<Lang>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,

        /// Write to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Search technologies, projects and news
    Search {
        #[arg(value_name = "QUERY")]
        query: String,

        #[arg(short, long, value_parser = parse_lang)]
        lang: Option<Lang>,

        /// Activate result N (1-based) and render the page it leads to
        #[arg(long, value_name = "N")]
        open: Option<usize>,
    },

    /// Resolve a string key
    Translate {
        #[arg(value_name = "KEY")]
        key: String,

        #[arg(short, long, value_parser = parse_lang)]
        lang: Option<Lang>,

        /// Placeholder value, as name=value (repeatable)
        #[arg(long = "var", value_name = "NAME=VALUE")]
        vars: Vec<String>,
    },

    /// List supported languages
    Languages,

    /// Generate the summary (news, projects) or highlights (technologies) for a record
    Summarize {
        #[arg(value_name = "ID")]
        id: String,

        #[arg(short, long, value_parser = parse_lang)]
        lang: Option<Lang>,
    },

    /// Validate and submit the contact form
    Contact {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        message: String,

        #[arg(long)]
        company: Option<String>,

        #[arg(short, long, value_parser = parse_lang)]
        lang: Option<Lang>,
    },

    /// Write every page in every language to a directory
    Export {
        #[arg(short, long, default_value = "site-export")]
        dir: PathBuf,

        /// Output formats
        #[arg(short, long, value_enum, value_delimiter = ',', default_value = "html")]
        format: Vec<OutputFormat>,

        /// Languages (default: all)
        #[arg(short, long, value_delimiter = ',', value_parser = parse_lang)]
        lang: Vec<Lang>,
    },

    /// Interactive terminal browser
    Browse {
        #[arg(short, long, value_parser = parse_lang)]
        lang: Option<Lang>,
    },

    /// Check configuration, content and translations
    Doctor,
}

fn parse_lang(value: &str) -> std::result::Result<Lang, String> {
    Lang::from_code(value).ok_or_else(|| {
        let known: Vec<&str> = Lang::all().iter().map(|l| l.code()).collect();
        format!("unsupported language '{}' (expected one of {})", value, known.join(", "))
    })
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let config_file = cli.config.as_deref();

    match cli.command {
        Commands::Render {
            page,
            article,
            lang,
            format,
            output,
        } => {
            let mut site = open_site(config_file, lang)?;
            let hash = if page.starts_with('#') {
                page
            } else if page == "home" {
                "#/".to_string()
            } else {
                format!("#/{}", page)
            };
            site.restore(&hash);
            if let Some(id) = article {
                site.open_article(&ContentId::new(id))?;
            }
            emit(&site, format, output)?;
        }

        Commands::Search { query, lang, open } => {
            let mut site = open_site(config_file, lang)?;
            if site.submit_search(&query).is_none() {
                println!("{}", site.t("search.placeholder").dimmed());
                return Ok(());
            }
            let results = site
                .router()
                .search()
                .map(|state| state.results.clone())
                .unwrap_or_default();
            println!(
                "{}",
                site.localizer()
                    .t_with("search.results_for", &[("query", &query.trim())])
                    .bold()
            );
            if results.is_empty() {
                println!("  {}", site.t("search.no_results"));
            }
            for (idx, result) in results.iter().enumerate() {
                println!(
                    "  {}. [{}] {} - {}",
                    idx + 1,
                    site.t(result.kind.label_key()).cyan(),
                    result.label.bold(),
                    result.description
                );
            }
            if let Some(n) = open {
                if n == 0 || site.activate_result(n - 1).is_none() {
                    bail!("no search result {} (have {})", n, results.len());
                }
                println!();
                PageFormatter::new().print(&compose_site(&site));
            }
        }

        Commands::Translate { key, lang, vars } => {
            let site = open_site(config_file, lang)?;
            let pairs = parse_vars(&vars)?;
            let values: Vec<(&str, &dyn fmt::Display)> = pairs
                .iter()
                .map(|(name, value)| (name.as_str(), value as &dyn fmt::Display))
                .collect();
            println!("{}", site.localizer().t_with(&key, &values));
        }

        Commands::Languages => {
            for &lang in Lang::all() {
                println!(
                    "  {:4} {:24} {:10} {}",
                    lang.code(),
                    i18n::language_name(lang.code()).unwrap_or(""),
                    lang.native_name(),
                    lang.direction().as_str()
                );
            }
        }

        Commands::Summarize { id, lang } => {
            let site = open_site(config_file, lang)?;
            summarize(&site, &ContentId::new(id))?;
        }

        Commands::Contact {
            name,
            email,
            message,
            company,
            lang,
        } => {
            let site = open_site(config_file, lang)?;
            let mut form = ContactForm::new();
            form.set(Field::Name, name);
            form.set(Field::Email, email);
            form.set(Field::Message, message);
            if let Some(company) = company {
                form.set(Field::Company, company);
            }
            println!("{}", site.t("contact.sending").dimmed());
            let submitter = SimulatedSubmitter::new(site.config().contact.submit_delay());
            match form.submit(&submitter) {
                FormStatus::Sent { receipt } => println!(
                    "{}",
                    site.localizer()
                        .t_with(
                            "contact.success",
                            &[("name", &receipt.name), ("reference", &receipt.reference)]
                        )
                        .green()
                ),
                FormStatus::Invalid { errors } => {
                    for error in errors {
                        println!(
                            "  {}: {}",
                            site.t(error.field.label_key()).bold(),
                            site.t(error.message_key).red()
                        );
                    }
                    bail!("contact form has {} invalid field(s)", errors.len());
                }
                FormStatus::Failed => bail!("{}", site.t("contact.failure")),
                FormStatus::Idle => {}
            }
        }

        Commands::Export { dir, format, lang } => {
            let site = open_site(config_file, None)?;
            let manifest = export::export_site(
                site.config(),
                site.content(),
                site.generator(),
                &dir,
                &format,
                &lang,
            )?;
            println!(
                "Exported {} files to: {}",
                manifest.entries.len(),
                dir.display()
            );
        }

        Commands::Browse { lang } => {
            let mut site = open_site(config_file, lang)?;
            SiteTui::run(&mut site)?;
        }

        Commands::Doctor => {
            // Loads config and content itself so broken files are reported, not fatal.
            diagnostics::run_self_diagnostics(config_file, &ExtractiveGenerator)?;
        }
    }

    Ok(())
}

fn open_site(config_file: Option<&Path>, lang: Option<Lang>) -> Result<Site> {
    let mut config = SiteConfig::resolve(config_file)?;
    if let Some(lang) = lang {
        config.default_language = lang;
    }
    Site::from_config(config)
}

fn emit(site: &Site, format: OutputFormat, output: Option<PathBuf>) -> Result<()> {
    let view = compose_site(site);
    match output {
        Some(path) => {
            std::fs::write(&path, format.serialize(&view)?)
                .with_context(|| format!("writing {}", path.display()))?;
            println!("Page saved to: {}", path.display());
        }
        None if format == OutputFormat::Text => PageFormatter::new().print(&view),
        None => println!("{}", format.serialize(&view)?),
    }
    Ok(())
}

fn summarize(site: &Site, id: &ContentId) -> Result<()> {
    let content = site.content();
    let lang = site.language();
    let mount = Mount::new();

    if let Some(tech) = content.technology(id) {
        let widget = HighlightsWidget::new(site.cache(), site.generator());
        println!("{}", tech.name.bold());
        match widget.load(tech, lang, &mount) {
            Some(HighlightsView::Ready { items, .. }) => {
                println!("{}", site.t("widget.highlights.title").cyan());
                for item in items {
                    println!("  - {}", item);
                }
            }
            Some(HighlightsView::Error { message_key }) => println!("{}", site.t(message_key).red()),
            None => {}
        }
        return Ok(());
    }

    let widget = SummaryWidget::new(site.cache(), site.generator());
    let view = if let Some(item) = content.news_item(id) {
        println!("{}", item.title.bold());
        widget.load(item.into(), lang, &mount)
    } else if let Some(project) = content.project(id) {
        println!("{}", project.name.bold());
        widget.load(project.into(), lang, &mount)
    } else {
        return Err(anyhow!("no technology, project or news item with id '{}'", id));
    };
    if let Some(view) = view {
        println!("{}", site.t("widget.summary.title").cyan());
        println!("  {}", view.text);
    }
    Ok(())
}

fn parse_vars(vars: &[String]) -> Result<Vec<(String, String)>> {
    vars.iter()
        .map(|pair| {
            let (name, value) = pair
                .split_once('=')
                .ok_or_else(|| anyhow!("--var expects NAME=VALUE, got '{}'", pair))?;
            Ok((name.trim().to_string(), value.to_string()))
        })
        .collect()
}

fn init_tracing(quiet: bool, verbose: bool) -> Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("ATLAS_SITE_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
