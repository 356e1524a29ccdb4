//! Orchestration for the Swagger to client compilation pipeline.
//!
//! The orchestrator owns a single compilation: it runs model extraction
//! (including the deferred binding pass), operation extraction and module
//! assembly, and collects statistics and warnings along the way. Rendering
//! and persistence are left to [`crate::render`] and [`crate::emit`].
//!
//! ## Usage
//!
//! ```no_run
//! use exaid_core::{generator::{orchestrator::Orchestrator, type_notation::TypeTable}, source::SourceDocument};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let json = std::fs::read("swagger.json")?;
//! let document = SourceDocument::from_slice("swagger.json", &json)?;
//! let compiled = Orchestrator::new(&document, TypeTable::default()).compile();
//!
//! println!("{} models, {} modules", compiled.models.len(), compiled.modules.len());
//! # Ok(())
//! # }
//! ```

use super::{
  ast::{ApiManifest, Module, ModelDefinition},
  metrics::GenerationStats,
  model_extractor::ModelExtractor,
  module_assembler::assemble_modules,
  operation_extractor::OperationExtractor,
  type_notation::TypeTable,
  type_resolver::TypeResolver,
};
use crate::source::SourceDocument;

/// Runs one compilation over an acquired document.
pub struct Orchestrator<'a> {
  document: &'a SourceDocument,
  table: TypeTable,
}

/// The frozen result of a compilation.
#[derive(Debug)]
pub struct CompiledApi {
  pub models: Vec<ModelDefinition>,
  pub modules: Vec<Module>,
  pub stats: GenerationStats,
}

impl CompiledApi {
  pub fn manifest(&self) -> ApiManifest<'_> {
    ApiManifest {
      models: &self.models,
      modules: &self.modules,
    }
  }
}

impl<'a> Orchestrator<'a> {
  /// `table` belongs to this compilation alone; build a fresh one per document.
  pub fn new(document: &'a SourceDocument, table: TypeTable) -> Self {
    Self { document, table }
  }

  /// Compiles the document into models and modules.
  ///
  /// 1. Registers every definition and drains the deferred bindings
  /// 2. Extracts operations per tag against the finished registry
  /// 3. Groups them into modules with deduplicated imports
  ///
  /// Structural gaps never fail the compilation; they surface as warnings in
  /// [`CompiledApi::stats`].
  pub fn compile(&self) -> CompiledApi {
    let spec = &self.document.spec;
    let mut stats = GenerationStats::default();

    let registry = ModelExtractor::new(&self.table).extract(&spec.definitions, &mut stats);

    let groups = OperationExtractor::new(TypeResolver::new(&self.table), &registry).extract(spec, &mut stats);
    let modules = assemble_modules(groups);
    stats.record_modules(modules.len());

    CompiledApi {
      models: registry.into_models(),
      modules,
      stats,
    }
  }
}
