//! `$ref` handling and the deferred-binding queue.
//!
//! Model properties may point at definitions that appear later in the
//! document, or at the model that contains them. Instead of resolving those
//! eagerly, the model extractor queues a [`DeferredBinding`] per property and
//! drains the queue once every definition is registered.

use std::borrow::Cow;

use percent_encoding::percent_decode_str;

use super::{
  metrics::{GenerationStats, GenerationWarning},
  model_registry::{ModelRegistry, PropertySlot},
  type_notation::TypeNode,
};

pub const DEFINITIONS_PREFIX: &str = "#/definitions/";

/// Extracts the definition name from a `#/definitions/<Name>` pointer.
///
/// Returns `None` for any other pointer. Percent-encoding and JSON pointer
/// escapes (`~1`, `~0`) in the name are decoded.
pub fn parse_definition_ref(ref_path: &str) -> Option<Cow<'_, str>> {
  let encoded = ref_path.strip_prefix(DEFINITIONS_PREFIX)?;
  if encoded.is_empty() {
    return None;
  }

  let decoded = percent_decode_str(encoded).decode_utf8_lossy();
  if decoded.contains('~') {
    return Some(Cow::Owned(decoded.replace("~1", "/").replace("~0", "~")));
  }
  Some(decoded)
}

/// The type computed for one schema before its references are checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldType {
  pub node: TypeNode,
  /// Canonical names of the models this type points at, in encounter order.
  pub references: Vec<String>,
  /// `$ref` pointers that do not target `#/definitions/`.
  pub unsupported: Vec<String>,
}

impl FieldType {
  pub fn is_deferred(&self) -> bool {
    !self.references.is_empty()
  }
}

/// A property whose final type depends on models that may not be registered yet.
#[derive(Debug, Clone)]
pub struct DeferredBinding {
  pub slot: PropertySlot,
  pub pending: FieldType,
}

#[derive(Debug, Default)]
pub struct BindingQueue {
  bindings: Vec<DeferredBinding>,
}

impl BindingQueue {
  pub fn push(&mut self, slot: PropertySlot, pending: FieldType) {
    self.bindings.push(DeferredBinding { slot, pending });
  }

  /// Executes every queued binding against the complete registry.
  ///
  /// Consumes the queue so no binding can run twice. A binding whose target
  /// model is missing keeps the property's placeholder type and records an
  /// [`GenerationWarning::UnresolvedReference`].
  pub fn drain(self, registry: &mut ModelRegistry, stats: &mut GenerationStats) {
    for DeferredBinding { slot, pending } in self.bindings {
      let missing: Vec<String> = pending
        .references
        .iter()
        .filter(|name| !registry.contains(name))
        .cloned()
        .collect();

      if missing.is_empty() {
        if let Some(property) = registry.property_mut(slot) {
          property.type_name = pending.node.to_string();
          stats.record_resolved_binding();
        }
        continue;
      }

      let owner = registry.describe_slot(slot);
      for reference in missing {
        stats.record_warning(GenerationWarning::UnresolvedReference {
          owner: owner.clone(),
          reference,
        });
      }
    }
  }
}
