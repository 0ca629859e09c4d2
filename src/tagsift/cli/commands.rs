//! # CLI Layer
//!
//! One client of the tagsift library. This is the only place that knows about
//! stdout/stderr, exit codes, logging setup, and where the config lives on disk.
//!
//! - `run()`: parse arguments, set up logging, dispatch
//! - `handle_*()`: per-command handlers that call the library and print

use super::print::{print_results, print_success, print_tags, render_json};
use super::setup::{Cli, Commands, FormatArg};
use clap::Parser;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use tagsift::config::{OutputFormat, SiftConfig};
use tagsift::error::{Result, SiftError};
use tagsift::filter::FilterEngine;
use tagsift::markup::{AnsiMarker, HtmlMarker, Marker, PlainMarker};
use tagsift::model::ContentItem;
use tagsift::source::{read_stdin_items, FileSource, ItemSource};
use tagsift::tags::TagStore;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const CONFIG_KEYS: [&str; 3] = ["highlight-class", "format", "separators"];

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config_dir = resolve_config_dir(cli.config_dir)?;
    let config = SiftConfig::load(&config_dir)?;
    tracing::debug!(dir = %config_dir.display(), "config loaded");

    match cli.command {
        Commands::Filter {
            file,
            tags,
            format,
            all,
        } => handle_filter(&config, file, &tags, format, all),
        Commands::Tags { input } => handle_tags(&config, &input),
        Commands::Config { key, value } => handle_config(config, &config_dir, key, value),
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("tagsift=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn resolve_config_dir(explicit: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(dir);
    }
    ProjectDirs::from("com", "tagsift", "tagsift")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| SiftError::Config("Could not determine config dir".to_string()))
}

fn handle_filter(
    config: &SiftConfig,
    file: Option<PathBuf>,
    raw_tags: &[String],
    format: Option<FormatArg>,
    show_hidden: bool,
) -> Result<()> {
    let format = format.map(OutputFormat::from).unwrap_or(config.default_format);

    let mut store = TagStore::new();
    for raw in raw_tags {
        store.add_from_input(raw, &config.separators);
    }

    let items = match file {
        Some(path) => FileSource::new(path).items()?,
        None => read_stdin_items()?.items()?,
    };
    tracing::debug!(items = items.len(), tags = store.len(), %format, "filtering");

    match format {
        OutputFormat::Html => emit(
            HtmlMarker::new(config.highlight_class.as_str()),
            &store,
            &items,
            false,
            show_hidden,
        ),
        OutputFormat::Json => emit(
            HtmlMarker::new(config.highlight_class.as_str()),
            &store,
            &items,
            true,
            show_hidden,
        ),
        OutputFormat::Ansi => emit(AnsiMarker::default(), &store, &items, false, show_hidden),
        OutputFormat::Plain => emit(PlainMarker::default(), &store, &items, false, show_hidden),
    }
}

fn emit<M: Marker>(
    marker: M,
    store: &TagStore,
    items: &[ContentItem],
    as_json: bool,
    show_hidden: bool,
) -> Result<()> {
    let engine = FilterEngine::new(marker);
    let results = engine.apply(store.list(), items);

    if as_json {
        println!("{}", render_json(store.list(), &results, show_hidden)?);
    } else {
        print_results(&results, store.list(), show_hidden);
    }
    Ok(())
}

fn handle_tags(config: &SiftConfig, input: &str) -> Result<()> {
    let mut store = TagStore::new();
    store.add_from_input(input, &config.separators);
    print_tags(store.list());
    Ok(())
}

fn handle_config(
    mut config: SiftConfig,
    config_dir: &Path,
    key: Option<String>,
    value: Option<String>,
) -> Result<()> {
    match (key, value) {
        (None, _) => {
            for key in CONFIG_KEYS {
                println!("{} = {}", key, config.get(key)?);
            }
        }
        (Some(key), None) => println!("{}", config.get(&key)?),
        (Some(key), Some(value)) => {
            config.set(&key, &value)?;
            config.save(config_dir)?;
            print_success(&format!("{} set to {}", key, config.get(&key)?));
        }
    }
    Ok(())
}
