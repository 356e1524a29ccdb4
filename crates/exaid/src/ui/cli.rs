use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use super::colors::{ColorMode, Colors, ThemeMode};

#[derive(Parser, Debug)]
#[command(name = "exaid")]
#[command(author, version, about = "Swagger 2.0 to typed TypeScript client generator")]
#[command(styles = Colors::clap_styles())]
pub struct Cli {
  #[command(subcommand)]
  pub command: Commands,

  /// Control color output
  #[arg(long, value_enum, default_value = "auto", global = true)]
  pub color: ColorMode,

  /// Terminal theme (dark or light background)
  #[arg(long, value_enum, default_value = "auto", global = true)]
  pub theme: ThemeMode,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
  /// List information from a Swagger document
  List {
    #[command(subcommand)]
    list_command: ListCommands,
  },
  /// Generate a TypeScript client from a Swagger document
  Generate(GenerateCommand),
}

#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
  /// URL or path of the Swagger JSON document (defaults to the config file's `url`)
  #[arg(value_name = "URL")]
  pub url: Option<String>,

  /// Configuration file (defaults to exaid.config.json, then package.json)
  #[arg(short, long, value_name = "FILE")]
  pub config: Option<PathBuf>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct GenerateCommand {
  #[command(flatten)]
  pub source: SourceArgs,

  /// Directory the generated files are written to [default: .exaid]
  #[arg(short, long, value_name = "DIR")]
  pub dir: Option<PathBuf>,

  /// Write generated files without running the formatter
  #[arg(long, default_value_t = false)]
  pub no_format: bool,

  /// Enable verbose output with detailed progress information
  #[arg(short, long, default_value_t = false)]
  pub verbose: bool,

  /// Suppress non-essential output (errors only)
  #[arg(short, long, default_value_t = false, conflicts_with = "verbose")]
  pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum ListCommands {
  /// List every operation, grouped by tag
  Operations(SourceArgs),
  /// List every model and its properties
  Models(SourceArgs),
}

#[cfg(test)]
mod tests {
  use clap::CommandFactory;

  use super::*;

  #[test]
  fn test_cli_definition_is_valid() {
    Cli::command().debug_assert();
  }

  #[test]
  fn test_parse_generate() {
    let cli = Cli::parse_from(["exaid", "generate", "swagger.json", "-d", "out", "--no-format", "-v"]);
    let Commands::Generate(command) = cli.command else {
      panic!("expected generate command");
    };
    assert_eq!(command.source.url.as_deref(), Some("swagger.json"));
    assert_eq!(command.dir, Some(PathBuf::from("out")));
    assert!(command.no_format);
    assert!(command.verbose);
    assert!(!command.quiet);
  }

  #[test]
  fn test_parse_generate_without_url() {
    let cli = Cli::parse_from(["exaid", "generate", "--config", "api.json"]);
    let Commands::Generate(command) = cli.command else {
      panic!("expected generate command");
    };
    assert!(command.source.url.is_none());
    assert_eq!(command.source.config, Some(PathBuf::from("api.json")));
  }

  #[test]
  fn test_quiet_conflicts_with_verbose() {
    assert!(Cli::try_parse_from(["exaid", "generate", "-q", "-v"]).is_err());
  }

  #[test]
  fn test_parse_list_models() {
    let cli = Cli::parse_from(["exaid", "--color", "never", "list", "models", "https://example.com/v2/swagger.json"]);
    assert!(matches!(cli.color, ColorMode::Never));
    let Commands::List {
      list_command: ListCommands::Models(source),
    } = cli.command
    else {
      panic!("expected list models command");
    };
    assert_eq!(source.url.as_deref(), Some("https://example.com/v2/swagger.json"));
  }
}
