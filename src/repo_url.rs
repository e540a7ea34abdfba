use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{AnalyzeError, Result};

lazy_static! {
  // The repository segment is lazy so a trailing ".git" stays out of the name.
  static ref GITHUB_REPO_URL: Regex =
    Regex::new(r"^https?://github\.com/([^/]+)/([^/]+?)(?:\.git)?/?$")
      .expect("GitHub repository URL pattern must compile");
}

/// The owner and name of a repository, as found in its web URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryReference {
  pub owner: String,
  pub name: String,
}

impl RepositoryReference {
  /// Accepts `http(s)://github.com/<owner>/<repo>`, with an optional `.git` suffix
  /// and an optional trailing slash.
  pub fn from_url(input: &str) -> Result<RepositoryReference> {
    let captures = GITHUB_REPO_URL
      .captures(input)
      .ok_or_else(|| AnalyzeError::InvalidUrl {
        input: input.to_string(),
      })?;

    Ok(RepositoryReference {
      owner: captures[1].to_string(),
      name: captures[2].to_string(),
    })
  }

  /// Path of the metadata endpoint, relative to the API base.
  pub fn api_path(&self) -> String {
    format!("/repos/{}/{}", self.owner, self.name)
  }
}

impl fmt::Display for RepositoryReference {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}/{}", self.owner, self.name)
  }
}
