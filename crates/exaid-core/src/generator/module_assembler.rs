use indexmap::IndexSet;

use super::{ast::Module, operation_extractor::TagOperations};

/// Builds one [`Module`] per tag. Imports are deduplicated keeping the first
/// occurrence, so the order follows the operations rather than the alphabet.
pub(crate) fn assemble_modules(groups: Vec<TagOperations>) -> Vec<Module> {
  groups
    .into_iter()
    .map(|group| Module {
      name: group.tag,
      description: group.description,
      operations: group.operations,
      imports: group.imports.into_iter().collect::<IndexSet<_>>().into_iter().collect(),
    })
    .collect()
}
