use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use repository_analyze::error::{AnalyzeError, Result};
use repository_analyze::github::{octocrab_handle, GitHubFetcher, RepositoryFetcher};
use repository_analyze::repo_url::RepositoryReference;
use repository_analyze::run;

/// Answers every fetch with the same canned outcome and counts the calls.
struct CannedFetcher {
  body: Option<&'static str>,
  status: u16,
  calls: AtomicUsize,
}

impl CannedFetcher {
  fn ok(body: &'static str) -> CannedFetcher {
    CannedFetcher {
      body: Some(body),
      status: 200,
      calls: AtomicUsize::new(0),
    }
  }

  fn failing(status: u16) -> CannedFetcher {
    CannedFetcher {
      body: None,
      status,
      calls: AtomicUsize::new(0),
    }
  }
}

#[async_trait]
impl RepositoryFetcher for CannedFetcher {
  async fn fetch(&self, _reference: &RepositoryReference) -> Result<Vec<u8>> {
    self.calls.fetch_add(1, Ordering::SeqCst);
    match self.body {
      Some(body) => Ok(body.as_bytes().to_vec()),
      None => Err(AnalyzeError::Status(self.status)),
    }
  }
}

#[tokio::test]
async fn test_run_scores_repository() {
  let fetcher =
    CannedFetcher::ok(r#"{"name":"bar","stargazers_count":5,"forks_count":3,"language":""}"#);

  let scored = run(&fetcher, "https://github.com/foo/bar.git").await.unwrap();

  assert_eq!(scored.score, 8);
  assert_eq!(
    scored.to_string(),
    "Repository: bar\nStars: 5\nForks: 3\nLanguage: Undefined Language\nScore: 8\n"
  );
}

#[tokio::test]
async fn test_invalid_url_never_fetches() {
  let fetcher = CannedFetcher::ok("{}");

  let err = run(&fetcher, "https://gitlab.com/foo/bar").await.unwrap_err();

  assert!(matches!(err, AnalyzeError::InvalidUrl { .. }));
  assert_eq!(fetcher.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_fetch_failure_stops_pipeline() {
  let fetcher = CannedFetcher::failing(500);

  let err = run(&fetcher, "https://github.com/foo/bar").await.unwrap_err();

  assert!(matches!(err, AnalyzeError::Status(500)));
  assert_eq!(fetcher.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_malformed_body_is_a_parse_error() {
  let fetcher = CannedFetcher::ok("<html>rate limited</html>");

  let err = run(&fetcher, "https://github.com/foo/bar").await.unwrap_err();

  assert!(matches!(err, AnalyzeError::Parse(_)));
  assert!(err.to_string().starts_with("could not parse response body"));
}

#[tokio::test]
async fn test_run_against_mock_api() {
  let mut server = mockito::Server::new_async().await;
  let mock = server
    .mock("GET", "/repos/octocat/Hello-World")
    .with_status(200)
    .with_header("content-type", "application/json")
    .with_body(
      r#"{"name":"Hello-World","stargazers_count":80,"forks_count":9,"language":"C","private":false}"#,
    )
    .create_async()
    .await;

  let fetcher = GitHubFetcher::new(octocrab_handle(&server.url()).unwrap());
  let scored = run(&fetcher, "https://github.com/octocat/Hello-World/").await.unwrap();

  assert_eq!(scored.stats.name, "Hello-World");
  assert_eq!(scored.stats.language, "C");
  assert_eq!(scored.score, 89);
  mock.assert_async().await;
}

#[tokio::test]
async fn test_non_utf8_body_is_a_parse_error() {
  let mut server = mockito::Server::new_async().await;
  let mock = server
    .mock("GET", "/repos/foo/bar")
    .with_status(200)
    .with_header("content-type", "application/json")
    .with_body([0xff, 0xfe, b'{'])
    .create_async()
    .await;

  let fetcher = GitHubFetcher::new(octocrab_handle(&server.url()).unwrap());
  let err = run(&fetcher, "https://github.com/foo/bar").await.unwrap_err();

  assert!(matches!(err, AnalyzeError::Parse(_)), "{:?}", err);
  mock.assert_async().await;
}
