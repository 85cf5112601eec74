//! `talentmatch <run.json>`: scores a candidate pool against one job.
//!
//! Reads a `MatchRun` document, evaluates it with the `TALENTMATCH_*` environment
//! configuration and prints `{ results, diagnostics }` as pretty JSON on stdout.
//! Logs go to stderr (filter with `RUST_LOG`).

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use mimalloc::MiMalloc;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use talentmatch::batch::BatchController;
use talentmatch::cache::MatchCaches;
use talentmatch::config::Config;
use talentmatch::diagnostics::{Diagnostics, DiagnosticsSnapshot};
use talentmatch::engine::{MatchEngine, MatchEngineHandle};
use talentmatch::model::MatchResult;
use talentmatch::records::{CachedRecords, InMemoryRecords, MatchRun};
use talentmatch::similarity::{
    DisabledSimilarity, HttpSimilarityClient, SimilarityService, Throttled,
};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Debug, Serialize)]
struct RunOutput {
    results: Vec<MatchResult>,
    diagnostics: DiagnosticsSnapshot,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .context("usage: talentmatch <run.json>")?;

    let config = Config::from_env()?;
    config.validate()?;

    let raw = tokio::fs::read_to_string(&path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))?;
    let run: MatchRun = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse {}", path.display()))?;

    let caches = Arc::new(MatchCaches::new(&config.cache_config()));
    let diagnostics = Arc::new(Diagnostics::new());

    let output = match config.similarity_url.as_deref() {
        Some(url) => {
            let client = HttpSimilarityClient::new(url, config.similarity_timeout)?;
            tracing::info!(
                endpoint = client.endpoint(),
                max_in_flight = config.similarity_max_in_flight,
                "external similarity enabled"
            );
            let service = Throttled::new(client, config.similarity_max_in_flight);
            evaluate(service, &config, caches, diagnostics, run).await?
        }
        None => {
            tracing::warn!("TALENTMATCH_SIMILARITY_URL not set, external similarity disabled");
            evaluate(DisabledSimilarity, &config, caches, diagnostics, run).await?
        }
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

async fn evaluate<S: SimilarityService>(
    service: S,
    config: &Config,
    caches: Arc<MatchCaches>,
    diagnostics: Arc<Diagnostics>,
    run: MatchRun,
) -> anyhow::Result<RunOutput> {
    let engine = MatchEngineHandle::new(MatchEngine::new(service, Arc::clone(&caches), diagnostics));
    let controller = BatchController::new(engine, config.batch_config());

    let job_id = run.job.id.clone();
    let records = CachedRecords::new(InMemoryRecords::new(run), caches);
    let results = controller.match_job(&job_id, &records).await?;

    Ok(RunOutput {
        results,
        diagnostics: controller.engine().snapshot(),
    })
}
