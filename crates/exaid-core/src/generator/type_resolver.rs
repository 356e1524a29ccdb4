use super::{
  references::{FieldType, parse_definition_ref},
  type_notation::{ARRAY, TypeNode, TypeTable},
};
use crate::swagger::{AdditionalProperties, FieldSchema};

/// Computes the type of a value schema (property, items, parameter, response).
///
/// Shared by the model and operation extractors so both follow one set of
/// rules: `$ref` wins over a sibling `type`, arrays recurse into `items`, and
/// `additionalProperties` schemas become `Record<string,V>`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TypeResolver<'a> {
  table: &'a TypeTable,
}

impl<'a> TypeResolver<'a> {
  pub(crate) fn new(table: &'a TypeTable) -> Self {
    Self { table }
  }

  pub(crate) fn table(&self) -> &'a TypeTable {
    self.table
  }

  pub(crate) fn resolve(&self, schema: &FieldSchema) -> FieldType {
    let mut references = vec![];
    let mut unsupported = vec![];
    let node = self.resolve_node(schema, &mut references, &mut unsupported);
    FieldType {
      node,
      references,
      unsupported,
    }
  }

  fn resolve_node(&self, schema: &FieldSchema, references: &mut Vec<String>, unsupported: &mut Vec<String>) -> TypeNode {
    if let Some(ref_path) = schema.reference.as_deref() {
      let Some(name) = parse_definition_ref(ref_path) else {
        unsupported.push(ref_path.to_string());
        return TypeNode::any();
      };
      let node = self.table.parse(&name);
      references.push(node.name.clone());
      return node;
    }

    let node = schema.type_name.as_deref().map(|type_name| self.table.parse(type_name));
    if node.as_ref().is_some_and(|node| node.name == ARRAY && node.generic_args.is_empty()) {
      let element = match &schema.items {
        Some(items) => self.resolve_node(items, references, unsupported),
        None => TypeNode::any(),
      };
      return TypeNode::array_of(element);
    }

    // `type` is optional next to `additionalProperties`.
    if let Some(AdditionalProperties::Schema(value)) = &schema.additional_properties {
      return TypeNode::record_of(self.resolve_node(value, references, unsupported));
    }

    node.unwrap_or_else(TypeNode::any)
  }
}
