//! Art Institute of Chicago collection browser.

use std::io::{self, IsTerminal};

use anyhow::{Context, Result};
use clap::{ColorChoice, Parser};
use tracing::level_filters::LevelFilter;

use artic_cli::logging::{LogConfig, LogFormat, init_logging};
use artic_cli::settings::Settings;
use artic_client::ArticClient;

mod cli;
mod commands;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::{run_browse, run_config, run_page, run_select_first};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(cli) {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: Cli) -> Result<()> {
    let config_path = cli.config.clone().unwrap_or_else(Settings::config_path);
    let mut settings = Settings::load_from(&config_path);
    if let Some(endpoint) = cli.endpoint {
        settings.client.endpoint = endpoint;
    }
    if let Some(size) = cli.page_size {
        settings.display.page_size = size;
    }

    let command = cli.command.unwrap_or_else(|| Command::Browse(Default::default()));
    if let Command::Config(args) = &command {
        return run_config(&settings, &config_path, args);
    }

    let client = ArticClient::new(settings.client.clone()).context("create collection API client")?;
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("start async runtime")?;

    runtime.block_on(async {
        match command {
            Command::Browse(args) => run_browse(client, &settings, args).await,
            Command::Page(args) => run_page(client, &settings, &args).await,
            Command::SelectFirst(args) => run_select_first(client, &settings, &args).await,
            Command::Config(_) => Ok(()),
        }
    })
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
