//! Subcommand implementations.

use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Serialize;
use tokio::sync::mpsc;

use artic_client::PageSource;
use artic_model::{ArtworkRecord, PageNumber, PageSize};
use artic_state::{AppState, SearchMessage, Store, TableView};

use artic_cli::input::{HELP, Input, parse_line};
use artic_cli::render::{frame, render};
use artic_cli::runtime::Runtime;
use artic_cli::settings::Settings;

use crate::cli::{BrowseArgs, ConfigArgs, OutputFormatArg, PageArgs, SelectFirstArgs};

pub async fn run_browse<S: PageSource>(
    source: S,
    settings: &Settings,
    args: BrowseArgs,
) -> Result<()> {
    let start = PageNumber::new(args.page).context("--page must be at least 1")?;
    let width = settings.display.table_width;
    let (state, command) = AppState::init(start, settings.display.page_size);

    let mut store = Store::new(state);
    let mut last_frame = String::new();
    store.subscribe(move |state| {
        let current = frame(state, width);
        if current != last_frame {
            println!("{current}");
            last_frame = current;
        }
    });

    let mut runtime = Runtime::new(source, store);
    runtime.execute(command);
    if let Some(term) = args.search {
        runtime.dispatch(SearchMessage::Changed(term).into());
    }
    println!("Type `help` for commands.");

    let mut lines = spawn_stdin_reader();
    loop {
        tokio::select! {
            line = lines.recv() => {
                let Some(line) = line else {
                    break;
                };
                match parse_line(&line, runtime.state()) {
                    Ok(Input::Messages(messages)) => {
                        for message in messages {
                            runtime.dispatch(message);
                        }
                    }
                    Ok(Input::Help) => println!("{HELP}"),
                    Ok(Input::Quit) => break,
                    Ok(Input::Empty) => {}
                    Err(e) => eprintln!("{e:#}"),
                }
            }
            Some(message) = runtime.recv() => runtime.dispatch(message),
        }
    }

    tracing::info!(
        selected = runtime.state().selection.len(),
        "Leaving browser"
    );
    Ok(())
}

pub async fn run_page<S: PageSource>(
    source: S,
    settings: &Settings,
    args: &PageArgs,
) -> Result<()> {
    let page = PageNumber::new(args.page).context("page must be at least 1")?;
    let mut runtime = open(source, page, settings.display.page_size).await?;
    if let Some(term) = &args.search {
        runtime.dispatch(SearchMessage::Changed(term.clone()).into());
    }

    let view = TableView::from_state(runtime.state());
    match args.format {
        OutputFormatArg::Table => println!("{}", render(&view, settings.display.table_width)),
        OutputFormatArg::Json => {
            let output = PageOutput::from_view(&view);
            println!(
                "{}",
                serde_json::to_string_pretty(&output).context("serialize page")?
            );
        }
    }
    Ok(())
}

pub async fn run_select_first<S: PageSource>(
    source: S,
    settings: &Settings,
    args: &SelectFirstArgs,
) -> Result<()> {
    let size = settings.display.page_size;
    let mut runtime = open(source, PageNumber::FIRST, size).await?;

    let ids = runtime.select_first(args.count).await?;

    let state = runtime.state();
    match args.format {
        OutputFormatArg::Table => {
            println!("Selected {} of {} artworks", ids.len(), state.total_records);
            for id in &ids {
                println!("{id}");
            }
        }
        OutputFormatArg::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&ids).context("serialize selection")?
            );
        }
    }
    Ok(())
}

pub fn run_config(settings: &Settings, path: &Path, args: &ConfigArgs) -> Result<()> {
    println!("# {}", path.display());
    print!("{}", settings.to_toml()?);
    if args.write {
        settings.save_to(path)?;
        println!("Wrote {}", path.display());
    }
    Ok(())
}

/// Load the first page and wait for it.
async fn open<S: PageSource>(source: S, page: PageNumber, size: PageSize) -> Result<Runtime<S>> {
    let (state, command) = AppState::init(page, size);
    let mut runtime = Runtime::new(source, Store::new(state));
    runtime.execute(command);
    runtime.settle().await;
    if let Some(error) = &runtime.state().last_error {
        bail!("fetch page {page}: {error}");
    }
    Ok(runtime)
}

/// Reads stdin on a plain thread; a blocked read must not keep the async
/// runtime from shutting down.
fn spawn_stdin_reader() -> mpsc::UnboundedReceiver<String> {
    let (tx, rx) = mpsc::unbounded_channel();
    std::thread::spawn(move || {
        for line in std::io::stdin().lines() {
            let Ok(line) = line else {
                break;
            };
            if tx.send(line).is_err() {
                break;
            }
        }
    });
    rx
}

#[derive(Serialize)]
struct PageOutput<'a> {
    page: u32,
    page_size: u32,
    total_pages: u32,
    total_records: u64,
    search: &'a str,
    records: Vec<&'a ArtworkRecord>,
}

impl<'a> PageOutput<'a> {
    fn from_view(view: &TableView<'a>) -> Self {
        Self {
            page: view.page.get(),
            page_size: view.page_size.rows(),
            total_pages: view.total_pages,
            total_records: view.total_records,
            search: view.search,
            records: view.rows.iter().map(|row| row.record).collect(),
        }
    }
}
