use std::{future::Future, process::Stdio};

use strum::Display;
use tokio::{io::AsyncWriteExt, process::Command};

pub const DEFAULT_FORMATTER: &str = "prettier";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum SourceSyntax {
  Typescript,
  Json,
}

#[derive(Debug, thiserror::Error)]
pub enum FormatError {
  #[error("could not run `{command}`: {source}")]
  Unavailable {
    command: String,
    #[source]
    source: std::io::Error,
  },
  #[error("`{command}` rejected the input: {stderr}")]
  Rejected { command: String, stderr: String },
}

/// Post-processes rendered text. Failures are never fatal: the emitter keeps
/// the unformatted text when a formatter returns an error.
pub trait Formatter {
  fn format(&self, text: &str, syntax: SourceSyntax) -> impl Future<Output = Result<String, FormatError>>;
}

/// Leaves text untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct Passthrough;

impl Formatter for Passthrough {
  async fn format(&self, text: &str, _syntax: SourceSyntax) -> Result<String, FormatError> {
    Ok(text.to_string())
  }
}

/// Pipes text through a prettier-compatible command over stdin.
///
/// The command may carry leading arguments (`npx prettier`); the parser and
/// tab width flags are appended after them.
#[derive(Debug, Clone)]
pub struct PrettierFormatter {
  command: String,
}

impl Default for PrettierFormatter {
  fn default() -> Self {
    Self::new(DEFAULT_FORMATTER)
  }
}

impl PrettierFormatter {
  pub fn new(command: impl Into<String>) -> Self {
    Self { command: command.into() }
  }

  fn unavailable(&self, source: std::io::Error) -> FormatError {
    FormatError::Unavailable {
      command: self.command.clone(),
      source,
    }
  }
}

impl Formatter for PrettierFormatter {
  async fn format(&self, text: &str, syntax: SourceSyntax) -> Result<String, FormatError> {
    let mut words = self.command.split_whitespace();
    let program = words.next().unwrap_or(DEFAULT_FORMATTER);

    let mut child = Command::new(program)
      .args(words)
      .args(["--parser", &syntax.to_string()])
      .args(["--tab-width", "4"])
      .stdin(Stdio::piped())
      .stdout(Stdio::piped())
      .stderr(Stdio::piped())
      .spawn()
      .map_err(|source| self.unavailable(source))?;

    // Feed stdin while stdout drains. Dropping stdin closes the input.
    let stdin = child.stdin.take();
    let feed = async move {
      match stdin {
        Some(mut stdin) => stdin.write_all(text.as_bytes()).await,
        None => Ok(()),
      }
    };
    let (fed, output) = tokio::join!(feed, child.wait_with_output());

    let output = output.map_err(|source| self.unavailable(source))?;
    if !output.status.success() {
      return Err(FormatError::Rejected {
        command: self.command.clone(),
        stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
      });
    }
    fed.map_err(|source| self.unavailable(source))?;

    String::from_utf8(output.stdout).map_err(|error| FormatError::Rejected {
      command: self.command.clone(),
      stderr: error.to_string(),
    })
  }
}
