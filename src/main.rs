// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Lanedex-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Lanedex and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Lanedex CLI entrypoint.
//!
//! Loads the champion catalog (file, URL, or the built-in set) and runs the interactive TUI.
//!
//! Use `--print` to render cards and a matchup as plain text instead (intended for scripts).

use std::error::Error;
use std::time::Duration;

use lanedex::model::Catalog;
use lanedex::slug::LinkTemplates;
use lanedex::store::{CatalogSource, LoadOptions, DEFAULT_CATALOG_PATH};
use lanedex::ui::{Slot, UiEvent, ViewCoordinator};
use tracing_subscriber::EnvFilter;

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [<catalog>] [--locale <code>] [--image-host <host>] [--doc-host <host>] [--timeout-secs <n>]\n  {program} [--catalog <path|url>] [...]\n  {program} --demo [...]\n  {program} [<catalog>] --print <primary> [<secondary>]\n\n<catalog> is a JSON file path or an http(s) URL (default `{DEFAULT_CATALOG_PATH}`).\nA catalog that cannot be loaded falls back to the built-in champions.\n--demo skips loading and uses the built-in champions; it cannot be combined with <catalog>.\n\n--print renders the cards (and the matchup when two names are given) to stdout without the TUI.\nRUST_LOG controls diagnostics on stderr (default `warn`)."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    demo: bool,
    catalog: Option<String>,
    locale: Option<String>,
    image_host: Option<String>,
    doc_host: Option<String>,
    timeout_secs: Option<u64>,
    print: Option<PrintRequest>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct PrintRequest {
    primary: String,
    secondary: Option<String>,
}

fn parse_options(args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();
    let mut args = args.peekable();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--demo" => {
                if options.demo {
                    return Err(());
                }
                options.demo = true;
            }
            "--catalog" => {
                if options.catalog.is_some() {
                    return Err(());
                }
                options.catalog = Some(args.next().ok_or(())?);
            }
            "--locale" => set_once(&mut options.locale, args.next())?,
            "--image-host" => set_once(&mut options.image_host, args.next())?,
            "--doc-host" => set_once(&mut options.doc_host, args.next())?,
            "--timeout-secs" => {
                if options.timeout_secs.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                let secs: u64 = raw.parse().map_err(|_| ())?;
                if secs == 0 {
                    return Err(());
                }
                options.timeout_secs = Some(secs);
            }
            "--print" => {
                if options.print.is_some() {
                    return Err(());
                }
                let primary = args.next().filter(|name| !name.starts_with('-')).ok_or(())?;
                let secondary = args.next_if(|next| !next.starts_with('-'));
                options.print = Some(PrintRequest { primary, secondary });
            }
            _ if arg.starts_with('-') => return Err(()),
            _ => {
                if options.catalog.is_some() {
                    return Err(());
                }
                options.catalog = Some(arg);
            }
        }
    }

    if options.demo && options.catalog.is_some() {
        return Err(());
    }

    Ok(options)
}

fn set_once(slot: &mut Option<String>, value: Option<String>) -> Result<(), ()> {
    if slot.is_some() {
        return Err(());
    }
    let value = value.filter(|value| !value.is_empty()).ok_or(())?;
    *slot = Some(value);
    Ok(())
}

impl CliOptions {
    fn source(&self) -> CatalogSource {
        if self.demo {
            return CatalogSource::Builtin;
        }
        self.catalog.as_deref().map(CatalogSource::parse).unwrap_or_default()
    }

    fn load_options(&self) -> LoadOptions {
        match self.timeout_secs {
            Some(secs) => LoadOptions { timeout: Duration::from_secs(secs) },
            None => LoadOptions::default(),
        }
    }

    fn links(&self) -> LinkTemplates {
        let mut links = LinkTemplates::default();
        if let Some(locale) = &self.locale {
            links.locale = locale.clone();
        }
        if let Some(host) = &self.image_host {
            links.image_host = host.clone();
        }
        if let Some(host) = &self.doc_host {
            links.doc_host = host.clone();
        }
        links
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .try_init();
}

/// Renders the requested selection through the coordinator and returns the plain-text output.
fn render_print(
    catalog: Catalog,
    links: LinkTemplates,
    request: &PrintRequest,
) -> Result<String, Box<dyn Error>> {
    let mut coordinator = ViewCoordinator::new(catalog, links);
    let picks =
        [(Slot::Primary, Some(&request.primary)), (Slot::Secondary, request.secondary.as_ref())];
    for (slot, name) in picks {
        let Some(name) = name else {
            continue;
        };
        if coordinator.catalog().find_by_name(name).is_none() {
            return Err(format!("unknown champion: {name}").into());
        }
        coordinator.handle(UiEvent::SelectionChanged { slot, name: Some(name.clone()) })?;
    }
    if request.secondary.is_some() {
        coordinator.handle(UiEvent::AnalyzeRequested)?;
    }

    let output = coordinator.output();
    let mut blocks = output.cards.iter().map(ToString::to_string).collect::<Vec<_>>();
    if let Some(matchup) = &output.matchup {
        blocks.push(matchup.to_string());
    }
    Ok(blocks.join("\n\n"))
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "lanedex".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        init_tracing();

        let source = options.source();
        let load_options = options.load_options();
        let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build()?;
        let catalog = runtime.block_on(lanedex::store::load_catalog(&source, &load_options));
        drop(runtime);

        let links = options.links();
        if let Some(request) = &options.print {
            println!("{}", render_print(catalog, links, request)?);
            return Ok(());
        }

        lanedex::tui::run(catalog, links, source, load_options)
    })();

    if let Err(err) = result {
        eprintln!("lanedex: {err}");
        std::process::exit(1);
    }
}
