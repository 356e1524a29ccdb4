use std::path::Path;

use chrono::{Local, Timelike};
use crossterm::style::Stylize;
use exaid_core::{
  ExaidConfig,
  emit::{EmitReport, Emitter, Formatter, Passthrough, PrettierFormatter},
  generator::{
    metrics::{GenerationStats, GenerationWarning},
    orchestrator::{CompiledApi, Orchestrator},
  },
  render::TemplateRenderer,
  source::{SourceDocument, SpecLoader},
};

use super::build_config;
use crate::{
  config_file::FileConfig,
  ui::{Colors, GenerateCommand},
};

fn format_timestamp() -> String {
  let now = Local::now();
  format!("[{:02}:{:02}:{:02}]", now.hour(), now.minute(), now.second())
}

#[derive(Debug, Clone)]
pub struct GenerateConfig {
  pub exaid: ExaidConfig,
  pub format: bool,
  pub verbose: bool,
  pub quiet: bool,
}

impl GenerateConfig {
  /// Reads the config file the command points at (or discovers one in the
  /// working directory) and overlays the command-line values.
  pub async fn from_command(command: GenerateCommand) -> anyhow::Result<Self> {
    let cwd = std::env::current_dir()?;
    let file = FileConfig::discover(command.source.config.as_deref(), &cwd).await?;
    Self::merge(command, file)
  }

  fn merge(command: GenerateCommand, file: FileConfig) -> anyhow::Result<Self> {
    let GenerateCommand {
      source,
      dir,
      no_format,
      verbose,
      quiet,
    } = command;

    Ok(Self {
      exaid: build_config(source.url, dir, file)?,
      format: !no_format,
      verbose,
      quiet,
    })
  }

  async fn load_document(&self) -> anyhow::Result<SourceDocument> {
    Ok(SpecLoader::from_url(&self.exaid.url).load().await?)
  }

  fn compile(&self, document: &SourceDocument) -> CompiledApi {
    Orchestrator::new(document, self.exaid.type_table()).compile()
  }

  async fn emit(&self, compiled: &CompiledApi, document: &SourceDocument) -> anyhow::Result<EmitReport> {
    let renderer = TemplateRenderer::from_config(&self.exaid);
    if !self.format {
      return emit_with(&self.exaid.dir, Passthrough, compiled, document, &renderer).await;
    }

    let formatter = self
      .exaid
      .formatter
      .as_deref()
      .map_or_else(PrettierFormatter::default, PrettierFormatter::new);
    emit_with(&self.exaid.dir, formatter, compiled, document, &renderer).await
  }
}

async fn emit_with<F: Formatter>(
  dir: &Path,
  formatter: F,
  compiled: &CompiledApi,
  document: &SourceDocument,
  renderer: &TemplateRenderer,
) -> anyhow::Result<EmitReport> {
  let report = Emitter::new(dir, formatter)
    .emit(compiled, &document.raw, renderer)
    .await?;
  Ok(report)
}

struct GenerateLogger<'a> {
  config: &'a GenerateConfig,
  colors: &'a Colors,
}

impl<'a> GenerateLogger<'a> {
  fn new(config: &'a GenerateConfig, colors: &'a Colors) -> Self {
    Self { config, colors }
  }

  fn info(&self, message: &str) {
    if !self.config.quiet {
      println!("{} {message}", format_timestamp().with(self.colors.timestamp()));
    }
  }

  fn stat(&self, label: &str, value: String) {
    if !self.config.quiet {
      println!(
        "            {:<25} {}",
        label.with(self.colors.label()),
        value.with(self.colors.value())
      );
    }
  }

  fn log_loading(&self) {
    self.info(
      &format!("Loading Swagger document from: {}", self.config.exaid.url)
        .with(self.colors.primary())
        .to_string(),
    );
  }

  fn log_compiling(&self) {
    self.info(&"Compiling models and modules...".with(self.colors.primary()).to_string());
  }

  fn print_statistics(&self, stats: &GenerationStats) {
    if self.config.quiet {
      return;
    }

    self.stat("Models generated:", stats.models_generated.to_string());
    if stats.duplicate_definitions > 0 {
      self.stat("", format!("{} duplicate definitions skipped", stats.duplicate_definitions));
    }
    if self.config.verbose {
      self.stat(
        "References bound:",
        format!("{} of {} deferred", stats.bindings_resolved, stats.bindings_deferred),
      );
    }
    self.stat("Operations converted:", stats.operations_converted.to_string());
    self.stat("Modules generated:", stats.modules_generated.to_string());
    if !stats.warnings.is_empty() {
      self.stat("Warnings:", stats.warnings.len().to_string());
    }

    self.print_warnings(&stats.warnings);
  }

  /// Skipped items and broken references always print; other warnings only
  /// with `--verbose`.
  fn shows_warning(&self, warning: &GenerationWarning) -> bool {
    !self.config.quiet && (self.config.verbose || warning.is_skipped_item() || warning.is_broken_reference())
  }

  fn print_warnings(&self, warnings: &[GenerationWarning]) {
    let mut printed_header = false;
    for warning in warnings.iter().filter(|warning| self.shows_warning(warning)) {
      if !printed_header {
        println!();
        printed_header = true;
      }

      let prefix = if warning.is_skipped_item() { "Skipped:" } else { "Warning:" };
      eprintln!(
        "{} {}",
        prefix.with(self.colors.accent()),
        warning.to_string().with(self.colors.primary())
      );
    }
  }

  fn log_writing(&self) {
    self.info(
      &format!("Writing to: {}", self.config.exaid.dir.display())
        .with(self.colors.primary())
        .to_string(),
    );
  }

  fn print_report(&self, report: &EmitReport) {
    if self.config.verbose {
      for path in &report.written {
        self.info(&format!("{} was generated.", path.display()));
      }
    }

    // Formatter fallbacks print without --verbose.
    if !self.config.quiet {
      for warning in &report.warnings {
        eprintln!(
          "{} {}",
          "Warning:".with(self.colors.accent()),
          warning.to_string().with(self.colors.primary())
        );
      }
    }
  }

  fn log_success(&self, report: &EmitReport) {
    if !self.config.quiet {
      println!();
      println!(
        "{} {}",
        format_timestamp().with(self.colors.timestamp()),
        format!("Successfully generated {} files", report.written.len()).with(self.colors.success())
      );
    }
  }
}

pub async fn generate_code(config: GenerateConfig, colors: &Colors) -> anyhow::Result<()> {
  let logger = GenerateLogger::new(&config, colors);

  logger.log_loading();
  let document = config.load_document().await?;

  logger.log_compiling();
  let compiled = config.compile(&document);
  logger.print_statistics(&compiled.stats);

  logger.log_writing();
  let report = config.emit(&compiled, &document).await?;
  logger.print_report(&report);

  logger.log_success(&report);
  Ok(())
}
