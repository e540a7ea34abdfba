use std::ffi::OsString;

use clap::{
  error::{ContextKind, ContextValue, ErrorKind},
  Parser,
};

use crate::error::{AnalyzeError, Result};

pub const DEFAULT_API_URL: &str = "https://api.github.com";

#[derive(Parser, Debug)]
#[command(name = "analyze", author, version, about)]
pub struct Opts {
  /// Would you like to enable debug information?
  #[arg(short = 'd', long, default_value_t = false)]
  pub debug: bool,

  /// Base URL of the GitHub REST API.
  #[arg(long, env = "GITHUB_API_URL", default_value = DEFAULT_API_URL)]
  pub api_url: String,

  /// The repository to analyze, e.g. https://github.com/<owner>/<repo>
  #[arg(value_name = "GITHUB_REPO_URL")]
  pub url: String,
}

/// What the command line asked for.
#[derive(Debug)]
pub enum Invocation {
  Analyze(Opts),
  /// `--help` or `--version`; print the message and exit successfully.
  Info(clap::Error),
}

impl Opts {
  /// Reads the options from an argument list, the first item being the program name.
  pub fn read<I, T>(args: I) -> Result<Invocation>
  where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
  {
    let err = match Opts::try_parse_from(args) {
      Ok(opts) => return Ok(Invocation::Analyze(opts)),
      Err(err) => err,
    };

    let reason = match err.kind() {
      ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => return Ok(Invocation::Info(err)),
      ErrorKind::MissingRequiredArgument | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
        "GitHub URL missing".to_string()
      }
      // An unknown flag is not an extra URL.
      ErrorKind::UnknownArgument => match err.get(ContextKind::InvalidArg) {
        Some(ContextValue::String(arg)) if arg.starts_with('-') => {
          format!("unexpected argument '{}' found", arg)
        }
        _ => "Too many arguments".to_string(),
      },
      ErrorKind::TooManyValues => "Too many arguments".to_string(),
      kind => kind.as_str().unwrap_or("invalid arguments").to_string(),
    };

    Err(AnalyzeError::Usage { reason })
  }
}
