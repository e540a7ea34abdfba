use std::time::Duration;

use thiserror::Error;

pub const USAGE: &str = "Usage: analyze https://github.com/<owner>/<repo>";

/// Everything that can stop an analysis run. Every variant is terminal.
#[derive(Debug, Error)]
pub enum AnalyzeError {
  #[error("{reason}\n{}", USAGE)]
  Usage { reason: String },

  #[error("could not match url «{input}»\n{}", USAGE)]
  InvalidUrl { input: String },

  #[error("could not build GitHub client: {0}")]
  Client(#[source] octocrab::Error),

  #[error("could not fetch repo: {0}")]
  Request(#[source] octocrab::Error),

  #[error("request timed out after {} seconds", .0.as_secs())]
  Timeout(Duration),

  #[error("GitHub API returned status {0}")]
  Status(u16),

  #[error("could not read from body: {0}")]
  Body(#[source] octocrab::Error),

  #[error("could not parse response body: {0}")]
  Parse(#[from] serde_json::Error),
}

impl AnalyzeError {
  pub fn exit_code(&self) -> i32 {
    1
  }
}

pub type Result<T> = std::result::Result<T, AnalyzeError>;
