use serde::Deserialize;

use crate::error::Result;

/// Stands in for the language when GitHub reports none.
pub const UNDEFINED_LANGUAGE: &str = "Undefined Language";

/// The subset of the repository document the analysis looks at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryStats {
  pub name: String,
  pub stars: u64,
  pub forks: u64,
  pub language: String,
}

// Wire shape; GitHub sends `"language": null` for repositories without code.
#[derive(Deserialize)]
struct RepositoryDocument {
  name: String,
  stargazers_count: u64,
  forks_count: u64,
  #[serde(default)]
  language: Option<String>,
}

impl From<RepositoryDocument> for RepositoryStats {
  fn from(doc: RepositoryDocument) -> Self {
    let language = match doc.language {
      Some(language) if !language.is_empty() => language,
      _ => UNDEFINED_LANGUAGE.to_string(),
    };

    RepositoryStats {
      name: doc.name,
      stars: doc.stargazers_count,
      forks: doc.forks_count,
      language,
    }
  }
}

pub fn parse_response_body(body: &[u8]) -> Result<RepositoryStats> {
  let doc: RepositoryDocument = serde_json::from_slice(body)?;
  Ok(doc.into())
}
