//! Pipeline Module
//! Extract → load → render, in sequence, over one in-memory dataset.

use crate::config::{ConfigError, PipelineConfig};
use crate::data::{extract_transform_with_report, ExtractError, ExtractReport};
use crate::map::{render_map, RenderError};
use crate::store::{load_into, CollectionStore, MongoStore, StoreError};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Extract(#[from] ExtractError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Outcome of one run.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineSummary {
    pub report: ExtractReport,
    /// `None` when the store step was skipped.
    pub inserted: Option<usize>,
    pub map_path: PathBuf,
}

/// Run every step against the MongoDB endpoint named in `config`.
pub fn run(config: &PipelineConfig) -> Result<PipelineSummary, PipelineError> {
    if config.skip_store {
        return run_steps(config, None::<&mut MongoStore>);
    }
    // Validate the source before opening a connection
    config.source()?;
    let mut store = MongoStore::connect(&config.mongo_uri)?;
    run_steps(config, Some(&mut store))
}

/// Run every step with a caller-provided store.
pub fn run_with_store<S: CollectionStore>(
    config: &PipelineConfig,
    store: &mut S,
) -> Result<PipelineSummary, PipelineError> {
    run_steps(config, Some(store))
}

fn run_steps<S: CollectionStore>(
    config: &PipelineConfig,
    store: Option<&mut S>,
) -> Result<PipelineSummary, PipelineError> {
    let source = config.source()?;
    log::info!("Extracting {}", source.display());
    let (dataset, report) = extract_transform_with_report(source)?;
    if report.rows_dropped() > 0 {
        log::info!(
            "Kept {} of {} rows ({} dropped)",
            report.rows_kept,
            report.rows_read,
            report.rows_dropped()
        );
    }

    let inserted = match store {
        Some(store) => Some(load_into(
            store,
            &dataset,
            &config.database,
            &config.collection,
        )?),
        None => {
            log::info!("Skipping document store");
            None
        }
    };

    let map_path = render_map(&dataset, &config.output)?;

    Ok(PipelineSummary {
        report,
        inserted,
        map_path,
    })
}
