//! One full scrape run: seed fetch, provider discovery, concurrent provider
//! fetches, extraction, reconciliation, ranking, CSV write.
//!
//! The run is all-or-nothing. Any failed fetch or the final write failing
//! aborts it; nothing partial is persisted. Malformed documents are not
//! errors, they just extract to nothing.

use futures::future::try_join_all;
use thiserror::Error;
use tracing::info;

use crate::config::Config;
use crate::extractor::{self, RawEntry};
use crate::fetcher::{self, FetchError};
use crate::ranking;
use crate::sink::{self, RankingRecord, WriteError};

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),

    #[error("write failed: {0}")]
    Write(#[from] WriteError),
}

pub async fn run(config: &Config) -> Result<(), PipelineError> {
    let seed_url = format!("{}{}", config.base_url(), config.seed_path());
    let seed = fetcher::fetch(&seed_url).await?;

    let source_urls = extractor::discover_sources(&seed.body_utf8, config);
    info!(count = source_urls.len(), "discovered provider pages");

    // Fan out one fetch per provider and wait for all of them. This is a
    // full barrier: one failure fails the run before anything is merged.
    let pages = try_join_all(source_urls.iter().map(|url| fetcher::fetch(url))).await?;

    let mut raw: Vec<RawEntry> = Vec::new();
    for page in &pages {
        let source_id = extractor::source_id_from_url(page.url_requested.as_str(), config);
        let entries =
            extractor::extract_entries(&page.body_utf8, &source_id, config.top_n_per_source());
        info!(source = %source_id, count = entries.len(), "extracted entries");
        raw.extend(entries);
    }

    let normalized = raw.into_iter().filter_map(RawEntry::normalize);
    let ranked = ranking::rank(ranking::reconcile(normalized));

    let records: Vec<RankingRecord> = ranked.into_iter().map(RankingRecord::from).collect();
    let rows = records.len();
    sink::write_rankings(config.output_path(), &records)?;
    info!(rows, path = %config.output_path().display(), "ranking written");

    Ok(())
}
