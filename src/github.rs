use std::time::Duration;

use async_trait::async_trait;
use http_body_util::BodyExt;
use log::*;
use octocrab::service::middleware::retry::RetryConfig;
use octocrab::Octocrab;

use crate::error::{AnalyzeError, Result};
use crate::repo_url::RepositoryReference;

/// Upper bound on a whole metadata fetch, body included.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// This function returns an unauthenticated Octocrab instance rooted at `api_url`.
///
/// Retries are switched off: a failed request is reported, never repeated.
pub fn octocrab_handle(api_url: &str) -> Result<Octocrab> {
  let mut builder = Octocrab::builder()
    .base_uri(api_url)
    .map_err(AnalyzeError::Client)?;
  builder.add_retry_config(RetryConfig::None);
  builder.build().map_err(AnalyzeError::Client)
}

/// Something that can hand back the raw metadata document of a repository.
#[async_trait]
pub trait RepositoryFetcher {
  async fn fetch(&self, reference: &RepositoryReference) -> Result<Vec<u8>>;
}

/// Fetches repository metadata from the GitHub REST API.
pub struct GitHubFetcher {
  gh: Octocrab,
  timeout: Duration,
}

impl GitHubFetcher {
  pub fn new(gh: Octocrab) -> GitHubFetcher {
    GitHubFetcher {
      gh,
      timeout: FETCH_TIMEOUT,
    }
  }

  pub fn with_timeout(mut self, timeout: Duration) -> GitHubFetcher {
    self.timeout = timeout;
    self
  }

  async fn get_single_repo(&self, reference: &RepositoryReference) -> Result<Vec<u8>> {
    let path = reference.api_path();
    debug!("GET {}", path);

    let response = self
      .gh
      ._get(path.as_str())
      .await
      .map_err(AnalyzeError::Request)?;

    let status = response.status();
    debug!("GitHub answered {} for {}", status, reference);
    if status.as_u16() != 200 {
      return Err(AnalyzeError::Status(status.as_u16()));
    }

    // Raw bytes; whether they are valid JSON (or UTF-8) is the parser's call.
    let body = response
      .into_body()
      .collect()
      .await
      .map_err(AnalyzeError::Body)?
      .to_bytes();

    Ok(body.to_vec())
  }
}

#[async_trait]
impl RepositoryFetcher for GitHubFetcher {
  async fn fetch(&self, reference: &RepositoryReference) -> Result<Vec<u8>> {
    match tokio::time::timeout(self.timeout, self.get_single_repo(reference)).await {
      Ok(result) => result,
      Err(_) => Err(AnalyzeError::Timeout(self.timeout)),
    }
  }
}
