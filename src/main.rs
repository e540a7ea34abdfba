use std::process;

use log::*;
use simplelog::*;

use repository_analyze::{
  cli::{Invocation, Opts},
  error::AnalyzeError,
  github::{octocrab_handle, GitHubFetcher},
  repo_scoring::{print_result, ScoredRepositoryStats},
  run,
};

fn init_logging(opts: &Opts) {
  let log_level = if opts.debug {
    LevelFilter::Debug
  } else {
    LevelFilter::Warn
  };

  // Stdout is reserved for the report.
  if let Err(e) = TermLogger::init(
    log_level,
    Config::default(),
    TerminalMode::Stderr,
    ColorChoice::Auto,
  ) {
    eprintln!("Failed to initialize logger: {:?}", e);
  }
}

async fn analyze(opts: &Opts) -> Result<ScoredRepositoryStats, AnalyzeError> {
  let gh = octocrab_handle(&opts.api_url)?;
  let fetcher = GitHubFetcher::new(gh);
  run(&fetcher, &opts.url).await
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
  let opts = match Opts::read(std::env::args_os()) {
    Ok(Invocation::Analyze(opts)) => opts,
    Ok(Invocation::Info(message)) => message.exit(),
    Err(err) => {
      eprintln!("Error: {}", err);
      process::exit(err.exit_code());
    }
  };

  init_logging(&opts);
  debug!("DEBUG ENABLED");

  match analyze(&opts).await {
    Ok(scored) => print_result(&scored),
    Err(err) => {
      debug!("Analysis of {} failed: {:?}", opts.url, err);
      eprintln!("Error: {}", err);
      process::exit(err.exit_code());
    }
  }
}
