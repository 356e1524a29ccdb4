use indexmap::IndexMap;

use super::{
  ast::{ModelDefinition, ModelProperty},
  metrics::{GenerationStats, GenerationWarning},
  model_registry::{ModelRegistry, PropertySlot},
  references::BindingQueue,
  type_notation::{ANY, TypeTable},
  type_resolver::TypeResolver,
};
use crate::swagger::{Definition, FieldSchema};

/// Turns the document's `definitions` into deduplicated models.
///
/// Runs in two phases. The first registers every definition and queues a
/// binding for each property that points at another model; the second drains
/// the queue against the complete registry, so declaration order never
/// matters and self references cannot recurse.
pub(crate) struct ModelExtractor<'a> {
  resolver: TypeResolver<'a>,
}

impl<'a> ModelExtractor<'a> {
  pub(crate) fn new(table: &'a TypeTable) -> Self {
    Self {
      resolver: TypeResolver::new(table),
    }
  }

  pub(crate) fn extract(&self, definitions: &IndexMap<String, Definition>, stats: &mut GenerationStats) -> ModelRegistry {
    let mut registry = ModelRegistry::default();
    let mut queue = BindingQueue::default();

    for (raw_name, definition) in definitions {
      let canonical = self.resolver.table().parse(raw_name);
      if registry.contains(&canonical.name) {
        stats.record_definition(false);
        continue;
      }

      let model_index = registry.next_index();
      let properties = definition
        .properties
        .iter()
        .enumerate()
        .map(|(position, (name, schema))| {
          let slot = PropertySlot {
            model: model_index,
            property: position,
          };
          self.convert_property(&canonical.name, definition, name, schema, slot, &mut queue, stats)
        })
        .collect();

      let registered = registry.register(ModelDefinition {
        name: canonical.name,
        title: definition.title.clone(),
        generics: canonical.generic_args.into_iter().map(|arg| arg.name).collect(),
        properties,
      });
      stats.record_definition(registered);
    }

    queue.drain(&mut registry, stats);
    registry
  }

  #[allow(clippy::too_many_arguments)]
  fn convert_property(
    &self,
    model_name: &str,
    definition: &Definition,
    name: &str,
    schema: &FieldSchema,
    slot: PropertySlot,
    queue: &mut BindingQueue,
    stats: &mut GenerationStats,
  ) -> ModelProperty {
    let field = self.resolver.resolve(schema);

    for reference in &field.unsupported {
      stats.record_warning(GenerationWarning::UnsupportedReference {
        owner: format!("{model_name}.{name}"),
        reference: reference.clone(),
      });
    }

    let type_name = if field.is_deferred() {
      queue.push(slot, field);
      stats.record_deferred_binding();
      ANY.to_string()
    } else {
      field.node.to_string()
    };

    ModelProperty {
      name: name.to_string(),
      type_name,
      required: definition.required.iter().any(|required| required == name),
      description: schema.description.clone(),
    }
  }
}
