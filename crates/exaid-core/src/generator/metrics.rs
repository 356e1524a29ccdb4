use strum::Display;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GenerationStats {
  pub definitions_seen: usize,
  pub models_generated: usize,
  pub duplicate_definitions: usize,
  pub bindings_deferred: usize,
  pub bindings_resolved: usize,
  pub operations_converted: usize,
  pub modules_generated: usize,
  pub warnings: Vec<GenerationWarning>,
}

impl GenerationStats {
  pub fn record_definition(&mut self, registered: bool) {
    self.definitions_seen += 1;
    if registered {
      self.models_generated += 1;
    } else {
      self.duplicate_definitions += 1;
    }
  }

  pub fn record_deferred_binding(&mut self) {
    self.bindings_deferred += 1;
  }

  pub fn record_resolved_binding(&mut self) {
    self.bindings_resolved += 1;
  }

  pub fn record_operation(&mut self) {
    self.operations_converted += 1;
  }

  pub fn record_modules(&mut self, count: usize) {
    self.modules_generated += count;
  }

  /// Records a warning once. An operation listed under several tags is visited
  /// once per tag and would otherwise report the same gap repeatedly.
  pub fn record_warning(&mut self, warning: GenerationWarning) {
    if !self.warnings.contains(&warning) {
      self.warnings.push(warning);
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum GenerationWarning {
  #[strum(to_string = "{owner} references unknown model '{reference}'")]
  UnresolvedReference { owner: String, reference: String },
  #[strum(to_string = "{owner} uses unsupported reference '{reference}'")]
  UnsupportedReference { owner: String, reference: String },
  #[strum(to_string = "Operation '{method} {path}' has no tags")]
  UntaggedOperation { method: String, path: String },
  #[strum(to_string = "Operation '{method} {path}' could not be read: {error}")]
  MalformedOperation {
    method: String,
    path: String,
    error: String,
  },
  #[strum(to_string = "[{operation}] parameter '{parameter}' has unknown location '{location}'")]
  UnknownParameterLocation {
    operation: String,
    parameter: String,
    location: String,
  },
  #[strum(to_string = "Formatting {path} failed, wrote unformatted output: {reason}")]
  FormatRejected { path: String, reason: String },
  #[strum(to_string = "Module '{module}' shares a file name with an earlier module, wrote {path}")]
  ModuleFileRenamed { module: String, path: String },
}

impl GenerationWarning {
  pub fn is_skipped_item(&self) -> bool {
    matches!(
      self,
      Self::UntaggedOperation { .. } | Self::MalformedOperation { .. } | Self::UnknownParameterLocation { .. }
    )
  }

  /// A `$ref` that could not be bound; the referring type fell back to `any`.
  pub fn is_broken_reference(&self) -> bool {
    matches!(
      self,
      Self::UnresolvedReference { .. } | Self::UnsupportedReference { .. }
    )
  }
}
