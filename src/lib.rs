use log::*;

pub mod cli;
pub mod error;
pub mod github;
pub mod repo_scoring;
pub mod repo_url;
pub mod stats;

use error::Result;
use github::RepositoryFetcher;
use repo_scoring::ScoredRepositoryStats;
use repo_url::RepositoryReference;

/// Validates `url`, fetches the repository behind it and scores it.
///
/// Stops at the first failing stage; nothing after it runs.
pub async fn run<F>(fetcher: &F, url: &str) -> Result<ScoredRepositoryStats>
where
  F: RepositoryFetcher + Sync + ?Sized,
{
  let reference = RepositoryReference::from_url(url)?;
  debug!("Analyzing {}", reference);

  let body = fetcher.fetch(&reference).await?;
  let stats = stats::parse_response_body(&body)?;
  debug!("Parsed stats: {:?}", stats);

  let scored = repo_scoring::compute_score(stats);
  debug!("Score for {}: {}", reference, scored.score);

  Ok(scored)
}
