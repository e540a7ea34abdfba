use std::fmt;

use crate::stats::RepositoryStats;

pub type RepoScoreValue = u64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredRepositoryStats {
  pub stats: RepositoryStats,
  pub score: RepoScoreValue,
}

/// Popularity is simply stars plus forks.
pub fn compute_score(stats: RepositoryStats) -> ScoredRepositoryStats {
  let score = stats.stars.saturating_add(stats.forks);
  ScoredRepositoryStats { stats, score }
}

impl fmt::Display for ScoredRepositoryStats {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f, "Repository: {}", self.stats.name)?;
    writeln!(f, "Stars: {}", self.stats.stars)?;
    writeln!(f, "Forks: {}", self.stats.forks)?;
    writeln!(f, "Language: {}", self.stats.language)?;
    writeln!(f, "Score: {}", self.score)
  }
}

/// Writes the report to standard output.
pub fn print_result(scored: &ScoredRepositoryStats) {
  print!("{}", scored);
}
