//! Loyers Paris - command-line entry point.

use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;
use loyers_paris::config::PipelineConfig;
use loyers_paris::logger::setup_logger;
use loyers_paris::pipeline;
use std::path::PathBuf;

/// Clean the Paris rent-control spreadsheet, store it in MongoDB and map it.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Source spreadsheet (.xlsx, .xls, .ods or .csv)
    source: Option<PathBuf>,

    /// MongoDB connection string
    #[arg(long)]
    mongo_uri: Option<String>,

    /// Target database
    #[arg(long)]
    database: Option<String>,

    /// Target collection, replaced on every run
    #[arg(long)]
    collection: Option<String>,

    /// Output HTML map
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// TOML file with any of the above; flags take precedence
    #[arg(long)]
    config: Option<PathBuf>,

    /// Do not connect to the document store
    #[arg(long)]
    skip_store: bool,

    /// Do not open the map once written
    #[arg(long)]
    no_open: bool,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn into_config(self) -> Result<PipelineConfig> {
        let mut config = match &self.config {
            Some(path) => PipelineConfig::from_toml_file(path)?,
            None => PipelineConfig::default(),
        };

        if let Some(source) = self.source {
            config.source = Some(source);
        }
        if let Some(uri) = self.mongo_uri {
            config.mongo_uri = uri;
        }
        if let Some(database) = self.database {
            config.database = database;
        }
        if let Some(collection) = self.collection {
            config.collection = collection;
        }
        if let Some(output) = self.output {
            config.output = output;
        }
        config.skip_store |= self.skip_store;
        if self.no_open {
            config.open_map = false;
        }
        Ok(config)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    setup_logger(level).context("failed to initialise logging")?;

    let config = args.into_config()?;
    let summary = pipeline::run(&config).context("pipeline failed")?;

    if config.open_map {
        if let Err(e) = open::that(&summary.map_path) {
            log::warn!("Could not open {}: {}", summary.map_path.display(), e);
        }
    }

    Ok(())
}
