use std::{
  collections::HashSet,
  path::{Path, PathBuf},
};

use super::formatter::{Formatter, SourceSyntax};
use crate::{
  error::EmitError,
  generator::{metrics::GenerationWarning, orchestrator::CompiledApi},
  render::TemplateRenderer,
};

/// File names of the artifacts, relative to the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLayout {
  pub types_file: PathBuf,
  pub modules_dir: PathBuf,
  pub module_extension: String,
  pub manifest_file: PathBuf,
  pub docs_file: PathBuf,
}

impl Default for OutputLayout {
  fn default() -> Self {
    Self {
      types_file: PathBuf::from("types.ts"),
      modules_dir: PathBuf::from("modules"),
      module_extension: "ts".to_string(),
      manifest_file: PathBuf::from("manifest.json"),
      docs_file: PathBuf::from("docs.json"),
    }
  }
}

impl OutputLayout {
  pub fn module_file(&self, module_name: &str) -> PathBuf {
    let file_stem = module_name.replace(['/', '\\'], "-");
    self
      .modules_dir
      .join(format!("{file_stem}.{}", self.module_extension))
  }
}

/// What an emission wrote, in write order, and what it had to degrade.
#[derive(Debug, Default)]
pub struct EmitReport {
  pub written: Vec<PathBuf>,
  pub warnings: Vec<GenerationWarning>,
}

/// Writes every artifact of a compilation under one directory.
pub struct Emitter<F> {
  dir: PathBuf,
  layout: OutputLayout,
  formatter: F,
}

impl<F: Formatter> Emitter<F> {
  pub fn new(dir: impl AsRef<Path>, formatter: F) -> Self {
    Self {
      dir: dir.as_ref().to_path_buf(),
      layout: OutputLayout::default(),
      formatter,
    }
  }

  #[must_use]
  pub fn with_layout(mut self, layout: OutputLayout) -> Self {
    self.layout = layout;
    self
  }

  /// Writes, in order: the types artifact, one artifact per module, the
  /// manifest and the verbatim source document.
  pub async fn emit(
    &self,
    compiled: &CompiledApi,
    source: &serde_json::Value,
    renderer: &TemplateRenderer,
  ) -> Result<EmitReport, EmitError> {
    let mut report = EmitReport::default();

    self.create_dir(&self.dir).await?;
    let types = renderer.render_types(&compiled.models)?;
    self
      .write(&self.layout.types_file, &types, SourceSyntax::Typescript, &mut report)
      .await?;

    self.create_dir(&self.dir.join(&self.layout.modules_dir)).await?;
    let mut taken = HashSet::new();
    for module in &compiled.modules {
      let code = renderer.render_module(module)?;
      let file = self.unique_module_file(&module.name, &mut taken, &mut report);
      self.write(&file, &code, SourceSyntax::Typescript, &mut report).await?;
    }

    let manifest = to_json("manifest", &compiled.manifest())?;
    self
      .write(&self.layout.manifest_file, &manifest, SourceSyntax::Json, &mut report)
      .await?;

    let docs = to_json("docs", source)?;
    self
      .write(&self.layout.docs_file, &docs, SourceSyntax::Json, &mut report)
      .await?;

    Ok(report)
  }

  /// Tags that sanitize to the same file name get a numeric suffix
  /// (`admin-tools.ts`, `admin-tools-2.ts`) in module order.
  fn unique_module_file(&self, module_name: &str, taken: &mut HashSet<PathBuf>, report: &mut EmitReport) -> PathBuf {
    let mut file = self.layout.module_file(module_name);
    let mut suffix = 1;
    while taken.contains(&file) {
      suffix += 1;
      file = self.layout.module_file(&format!("{module_name}-{suffix}"));
    }

    if suffix > 1 {
      report.warnings.push(GenerationWarning::ModuleFileRenamed {
        module: module_name.to_string(),
        path: self.dir.join(&file).display().to_string(),
      });
    }
    taken.insert(file.clone());
    file
  }

  async fn create_dir(&self, dir: &Path) -> Result<(), EmitError> {
    tokio::fs::create_dir_all(dir).await.map_err(|source| EmitError::Write {
      path: dir.to_path_buf(),
      source,
    })
  }

  async fn write(
    &self,
    relative: &Path,
    text: &str,
    syntax: SourceSyntax,
    report: &mut EmitReport,
  ) -> Result<(), EmitError> {
    let path = self.dir.join(relative);

    let contents = match self.formatter.format(text, syntax).await {
      Ok(formatted) => formatted,
      Err(error) => {
        report.warnings.push(GenerationWarning::FormatRejected {
          path: path.display().to_string(),
          reason: error.to_string(),
        });
        text.to_string()
      }
    };

    tokio::fs::write(&path, contents).await.map_err(|source| EmitError::Write {
      path: path.clone(),
      source,
    })?;
    report.written.push(path);
    Ok(())
  }
}

fn to_json(document: &'static str, value: &impl serde::Serialize) -> Result<String, EmitError> {
  serde_json::to_string_pretty(value).map_err(|source| EmitError::Serialize { document, source })
}
