use std::path::PathBuf;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::generator::type_notation::TypeTable;

pub const DEFAULT_OUTPUT_DIR: &str = ".exaid";

/// Overrides for the four module template slots. Any slot left empty falls
/// back to its default, so one slot can change without touching the others.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, bon::Builder)]
#[serde(default)]
pub struct ModuleTemplate {
  #[builder(into)]
  pub header: Option<String>,
  #[builder(into)]
  pub body: Option<String>,
  #[builder(into)]
  pub footer: Option<String>,
  #[builder(into)]
  pub wrapper: Option<String>,
}

/// Everything a run needs. Assembled by the caller; the core never reads
/// process arguments or the environment.
#[derive(Debug, Clone, bon::Builder)]
pub struct ExaidConfig {
  /// URL or filesystem path of the Swagger document.
  #[builder(into)]
  pub url: String,
  #[builder(into, default = PathBuf::from(DEFAULT_OUTPUT_DIR))]
  pub dir: PathBuf,
  #[builder(default)]
  pub module_template: ModuleTemplate,
  #[builder(into)]
  pub types_template: Option<String>,
  /// Extra canonicalization entries, applied over the defaults.
  #[builder(default)]
  pub type_map: IndexMap<String, String>,
  /// Formatter command; `prettier` when unset.
  #[builder(into)]
  pub formatter: Option<String>,
}

impl ExaidConfig {
  pub fn type_table(&self) -> TypeTable {
    TypeTable::default().with_aliases(self.type_map.clone())
  }
}
