//! CLI argument definitions for the artwork browser.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use artic_model::PageSize;

#[derive(Parser)]
#[command(
    name = "artic-browser",
    version,
    about = "Browse the Art Institute of Chicago collection page by page",
    long_about = "Browse the Art Institute of Chicago artworks collection in the terminal.\n\n\
                  Pages are fetched on demand; selections persist across pages and can be\n\
                  extended to the first N artworks of the collection."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Settings file (default: settings.toml in the user config directory).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Collection endpoint URL (overrides the settings file).
    #[arg(long = "endpoint", value_name = "URL", global = true)]
    pub endpoint: Option<String>,

    /// Rows per page: 6, 12 or 24 (overrides the settings file).
    #[arg(
        long = "page-size",
        value_name = "ROWS",
        value_parser = parse_page_size,
        global = true
    )]
    pub page_size: Option<PageSize>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Browse interactively (default).
    Browse(BrowseArgs),

    /// Print one page and exit.
    Page(PageArgs),

    /// Select the first N artworks across pages and print their ids.
    SelectFirst(SelectFirstArgs),

    /// Show the effective settings.
    Config(ConfigArgs),
}

#[derive(Parser)]
pub struct BrowseArgs {
    /// Page to open first.
    #[arg(long = "page", default_value_t = 1)]
    pub page: u32,

    /// Initial filter text.
    #[arg(long = "search")]
    pub search: Option<String>,
}

impl Default for BrowseArgs {
    fn default() -> Self {
        Self {
            page: 1,
            search: None,
        }
    }
}

#[derive(Parser)]
pub struct PageArgs {
    /// Page number (1-based).
    #[arg(value_name = "PAGE", default_value_t = 1)]
    pub page: u32,

    /// Filter the page before printing.
    #[arg(long = "search")]
    pub search: Option<String>,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,
}

#[derive(Parser)]
pub struct SelectFirstArgs {
    /// Number of artworks to select.
    #[arg(value_name = "COUNT", allow_negative_numbers = true)]
    pub count: i64,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,
}

#[derive(Parser)]
pub struct ConfigArgs {
    /// Write the effective settings to the settings file.
    #[arg(long = "write")]
    pub write: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

fn parse_page_size(value: &str) -> Result<PageSize, String> {
    let rows: u32 = value
        .parse()
        .map_err(|_| format!("`{value}` is not a number"))?;
    PageSize::try_from(rows).map_err(|e| e.to_string())
}
