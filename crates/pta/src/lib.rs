//! # Paper Topic Atlas - Facade
//!
//! Ties the layers together behind the `pta` binary: load configuration,
//! initialize logging, read a record batch, run the clustering pipeline,
//! and emit the cluster map as JSON.

// Force-link pta-providers to ensure linkme registrations are included
extern crate pta_providers;

use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use tracing::info;

use pta_application::ports::ClusterPipelineInterface;
use pta_application::use_cases::ClusterPipeline;
use pta_infrastructure::config::ConfigLoader;
use pta_infrastructure::logging::init_logging;
use pta_infrastructure::shared_embedding_provider;

/// Record batch input
pub mod input;

/// Run the pipeline end to end.
///
/// Reads records from `input` (stdin when absent), writes the cluster map
/// as JSON to `output` (stdout when absent). Every failure (unreadable
/// input, unresolvable provider, model load) aborts the run; the pipeline
/// never emits a partial result.
pub async fn run(
    config_path: Option<&Path>,
    input_path: Option<&Path>,
    output_path: Option<&Path>,
    pretty: bool,
) -> anyhow::Result<()> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = config_path {
        loader = loader.with_config_path(path);
    }
    let config = loader.load().context("Configuration failed to load")?;

    init_logging(&config.logging).context("Logging failed to initialize")?;

    let papers = input::read_records(input_path).context("Record batch failed to load")?;
    info!(records = papers.len(), "record batch loaded");

    let provider = shared_embedding_provider(&config.embedding)
        .context("Embedding provider failed to initialize")?;

    let pipeline = ClusterPipeline::new(Arc::clone(&provider), config.pipeline.clone());
    let map = pipeline.cluster(&papers).await.context("Pipeline failed")?;
    info!(
        points = map.points.len(),
        groups = map.groups.len(),
        noise = map.noise_count(),
        "cluster map assembled"
    );

    let json = if pretty {
        serde_json::to_string_pretty(&map)?
    } else {
        serde_json::to_string(&map)?
    };

    match output_path {
        Some(path) => std::fs::write(path, json)
            .with_context(|| format!("Failed to write cluster map to {}", path.display()))?,
        None => println!("{json}"),
    }

    Ok(())
}
