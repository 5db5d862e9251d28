//! Quotekeeper - keep, filter and sync a local quote collection.
//!
//! Quotes live in a local SQLite-backed key-value store and are reconciled
//! with a placeholder HTTP server using an append-only merge: remote quotes
//! that don't already exist locally are appended, nothing is ever updated
//! or removed.
//!
//! QUICK START:
//!   quotekeeper show                    # Random quote from the current filter
//!   quotekeeper add "text" "category"   # Add and push a quote
//!   quotekeeper filter Learning         # Persist a category filter
//!   quotekeeper sync --watch            # Poll the server until Ctrl-C
//!   quotekeeper export -o quotes.json   # Save the collection

mod application;
mod cli;
mod domain;
mod infrastructure;

use std::path::Path;
use std::time::{Duration, Instant};

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use application::{
    categories_of, export_string, export_to_file, filter_by_category, format_categories,
    format_empty_category, format_notice, format_quote, format_quotes_json, format_quotes_table,
    format_stats, import_from_file, spawn_sync_loop, Notifier, OutputFormat, QuoteStore,
    SyncService,
};
use cli::{Cli, Commands};
use domain::{AppConfig, PushOutcome, Quote, Severity};
use infrastructure::{ensure_config_exists, load_config};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

/// Main application logic.
async fn run(cli: Cli) -> domain::Result<()> {
    let format = cli
        .output_format()
        .map_err(|e| domain::AppError::Config { message: e })?;

    ensure_config_exists()?;
    let config = load_config()?;

    match cli.command {
        Commands::Show { category } => {
            cmd_show(&config, category.as_deref())?;
        }
        Commands::Add { text, category } => {
            cmd_add(&config, &text, &category).await?;
        }
        Commands::Filter { category } => {
            cmd_filter(&config, &category)?;
        }
        Commands::Categories => {
            cmd_categories(&config)?;
        }
        Commands::List { category } => {
            cmd_list(&config, category.as_deref(), format)?;
        }
        Commands::Import { file } => {
            cmd_import(&config, &file)?;
        }
        Commands::Export { output } => {
            cmd_export(&config, output.as_deref())?;
        }
        Commands::Sync { watch } => {
            cmd_sync(&config, watch).await?;
        }
        Commands::Stats => {
            cmd_stats(&config)?;
        }
        Commands::Paths => {
            cmd_paths(&config);
        }
    }

    Ok(())
}

/// Show a random quote from the active category pool.
fn cmd_show(config: &AppConfig, category: Option<&str>) -> domain::Result<()> {
    let mut store = QuoteStore::open(config)?;
    let category = category
        .map_or_else(|| store.selected_category().to_string(), String::from);

    match store.random_quote(&category) {
        Some(quote) => println!("{}", format_quote(&quote)),
        None => println!("{}", format_empty_category(&category)),
    }

    Ok(())
}

/// Add a quote, persist it, and push it to the server best-effort.
async fn cmd_add(config: &AppConfig, text: &str, category: &str) -> domain::Result<()> {
    let mut notifier = Notifier::new();

    let quote = match Quote::validated(text, category) {
        Ok(quote) => quote,
        Err(e) => {
            // Rejected input leaves the collection untouched.
            notifier.notify(e.to_string(), Severity::Error);
            print_notice(&mut notifier);
            return Ok(());
        }
    };

    let mut store = QuoteStore::open(config)?;
    store.append(quote.clone())?;

    let service = SyncService::new(&config.sync)?;
    match service.push_one(&quote).await {
        PushOutcome::Delivered => {
            notifier.notify("Quote added & synced!", Severity::Success);
        }
        PushOutcome::Failed { .. } => {
            notifier.notify("Quote added (working offline).", Severity::Success);
        }
    }

    print_notice(&mut notifier);
    Ok(())
}

/// Persist the category filter.
fn cmd_filter(config: &AppConfig, category: &str) -> domain::Result<()> {
    let mut store = QuoteStore::open(config)?;
    store.set_selected_category(category)?;

    let mut notifier = Notifier::new();
    notifier.notify(format!("Filter set to '{category}'."), Severity::Success);
    print_notice(&mut notifier);
    Ok(())
}

/// List the distinct categories, `all` sentinel first.
fn cmd_categories(config: &AppConfig) -> domain::Result<()> {
    let store = QuoteStore::open(config)?;
    println!("{}", format_categories(&categories_of(store.quotes())));
    Ok(())
}

/// List quotes in the requested format.
fn cmd_list(
    config: &AppConfig,
    category: Option<&str>,
    format: OutputFormat,
) -> domain::Result<()> {
    let store = QuoteStore::open(config)?;

    let pool: Vec<Quote> = match category {
        Some(category) => filter_by_category(store.quotes(), category)
            .into_iter()
            .cloned()
            .collect(),
        None => store.quotes().to_vec(),
    };

    match format {
        OutputFormat::Json => println!("{}", format_quotes_json(&pool)?),
        OutputFormat::Text | OutputFormat::Table => {
            println!("{}", format_quotes_table(&pool));
        }
    }

    Ok(())
}

/// Import quotes from a JSON file, all-or-nothing.
fn cmd_import(config: &AppConfig, file: &str) -> domain::Result<()> {
    // Parse first so a bad file never touches the collection.
    let quotes = import_from_file(Path::new(file))?;
    let count = quotes.len();

    let mut store = QuoteStore::open(config)?;
    store.append_many(quotes)?;

    let mut notifier = Notifier::new();
    notifier.notify(format!("Imported {count} quote(s)."), Severity::Success);
    print_notice(&mut notifier);
    Ok(())
}

/// Export the full collection as pretty-printed JSON.
fn cmd_export(config: &AppConfig, output: Option<&str>) -> domain::Result<()> {
    let store = QuoteStore::open(config)?;

    match output {
        Some(path) => {
            export_to_file(store.quotes(), Path::new(path))?;

            let mut notifier = Notifier::new();
            notifier.notify(
                format!("Exported {} quote(s) to {path}.", store.len()),
                Severity::Success,
            );
            print_notice(&mut notifier);
        }
        None => println!("{}", export_string(store.quotes())?),
    }

    Ok(())
}

/// Run one sync cycle, or keep polling with `--watch`.
async fn cmd_sync(config: &AppConfig, watch: bool) -> domain::Result<()> {
    let service = SyncService::new(&config.sync)?;

    if watch {
        if !config.sync.enabled {
            println!("Sync is disabled in the configuration.");
            return Ok(());
        }

        let store = QuoteStore::open(config)?;
        let handle = spawn_sync_loop(
            service,
            store,
            Notifier::new(),
            Duration::from_secs(config.sync.interval_secs),
        );

        println!(
            "Syncing every {}s against {} (Ctrl-C to stop)...",
            config.sync.interval_secs, config.sync.server_url
        );

        tokio::signal::ctrl_c()
            .await
            .map_err(|e| domain::AppError::io("Failed to wait for Ctrl-C", e))?;

        handle.stop().await;
        println!("Sync stopped.");
    } else {
        let mut store = QuoteStore::open(config)?;
        let mut notifier = Notifier::new();
        let report = service.run_cycle(&mut store, &mut notifier).await?;

        print_notice(&mut notifier);
        tracing::debug!(completed_at = %report.completed_at, "Cycle report");
    }

    Ok(())
}

/// Show collection statistics.
fn cmd_stats(config: &AppConfig) -> domain::Result<()> {
    let store = QuoteStore::open(config)?;
    print!("{}", format_stats(store.quotes()));
    Ok(())
}

/// Show the paths in use.
fn cmd_paths(config: &AppConfig) {
    println!("Data directory:  {}", config.data_dir().display());
    println!("Config file:     {}", config.config_file_path().display());
    println!("Quote database:  {}", config.store_db_path().display());
    println!("Server URL:      {}", config.sync.server_url);
}

/// Print the active notice, if it hasn't expired.
fn print_notice(notifier: &mut Notifier) {
    if let Some(notice) = notifier.current(Instant::now()) {
        println!("{}", format_notice(notice));
    }
}

/// Setup tracing/logging based on verbosity level.
fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).without_time())
        .with(filter)
        .init();
}
