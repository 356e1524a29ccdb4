use std::sync::LazyLock;

use indexmap::IndexMap;
use inflections::Inflect;
use regex::Regex;

use super::{
  ast::{HttpMethod, Operation, Parameter, ParameterLocation},
  metrics::{GenerationStats, GenerationWarning},
  model_registry::ModelRegistry,
  type_notation::ANY,
  type_resolver::TypeResolver,
};
use crate::swagger::{FieldSchema, PathItem, RawOperation, RawParameter, SwaggerSpec};

pub(crate) const SUCCESS_STATUS: &str = "200";

static PATH_PARAM_RE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"\{([^}]+)\}").expect("path parameter pattern is valid"));

/// Rewrites `{param}` segments into `${param}` interpolation segments.
pub fn interpolate_path(path: &str) -> String {
  PATH_PARAM_RE.replace_all(path, "$${${1}}").into_owned()
}

/// Name for an operation without `operationId`: `get /pets/{id}` becomes `getPetsById`.
pub fn derive_operation_name(method: HttpMethod, path: &str) -> String {
  let parts: Vec<String> = path
    .split('/')
    .filter(|segment| !segment.is_empty())
    .map(|segment| match segment.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
      Some(param) => format!("by_{param}"),
      None => segment.to_string(),
    })
    .collect();

  if parts.is_empty() {
    return method.to_string();
  }
  format!("{method}_{}", parts.join("_")).to_snake_case().to_camel_case()
}

/// A tag with the operations filed under it, before import deduplication.
#[derive(Debug, Clone)]
pub struct TagOperations {
  pub tag: String,
  pub description: Option<String>,
  pub operations: Vec<Operation>,
  pub imports: Vec<String>,
}

/// Converts `paths` into per-tag operation lists.
///
/// References are checked against the finished model registry, so this runs
/// after model extraction has drained its binding queue.
pub(crate) struct OperationExtractor<'a> {
  resolver: TypeResolver<'a>,
  registry: &'a ModelRegistry,
}

impl<'a> OperationExtractor<'a> {
  pub(crate) fn new(resolver: TypeResolver<'a>, registry: &'a ModelRegistry) -> Self {
    Self { resolver, registry }
  }

  pub(crate) fn extract(&self, spec: &SwaggerSpec, stats: &mut GenerationStats) -> Vec<TagOperations> {
    collect_tags(spec, stats)
      .into_iter()
      .map(|(tag, description)| self.extract_tag(tag, description, &spec.paths, stats))
      .collect()
  }

  fn extract_tag(
    &self,
    tag: String,
    description: Option<String>,
    paths: &IndexMap<String, PathItem>,
    stats: &mut GenerationStats,
  ) -> TagOperations {
    let mut operations = vec![];
    let mut imports = vec![];

    for (raw_path, item) in paths {
      let path = interpolate_path(raw_path);
      for (method, raw) in &item.operations {
        if !raw.tags.contains(&tag) {
          continue;
        }
        operations.push(self.convert_operation(*method, raw_path, path.clone(), item, raw, &mut imports, stats));
        stats.record_operation();
      }
    }

    TagOperations {
      tag,
      description,
      operations,
      imports,
    }
  }

  #[allow(clippy::too_many_arguments)]
  fn convert_operation(
    &self,
    method: HttpMethod,
    raw_path: &str,
    path: String,
    item: &PathItem,
    raw: &RawOperation,
    imports: &mut Vec<String>,
    stats: &mut GenerationStats,
  ) -> Operation {
    let name = raw
      .operation_id
      .clone()
      .unwrap_or_else(|| derive_operation_name(method, raw_path));

    let return_type = raw
      .responses
      .get(SUCCESS_STATUS)
      .and_then(|response| response.schema.as_ref())
      .map(|schema| self.resolve_type(schema, &format!("{name} response"), imports, stats))
      .unwrap_or_default();

    let parameters = merge_parameters(&item.parameters, &raw.parameters)
      .into_iter()
      .filter_map(|parameter| self.convert_parameter(&name, parameter, imports, stats))
      .collect();

    Operation {
      name,
      method,
      path,
      summary: raw.summary.clone(),
      description: raw.description.clone(),
      return_type,
      parameters,
    }
  }

  fn convert_parameter(
    &self,
    operation: &str,
    parameter: &RawParameter,
    imports: &mut Vec<String>,
    stats: &mut GenerationStats,
  ) -> Option<Parameter> {
    let Ok(location) = parameter.location.parse::<ParameterLocation>() else {
      stats.record_warning(GenerationWarning::UnknownParameterLocation {
        operation: operation.to_string(),
        parameter: parameter.name.clone(),
        location: parameter.location.clone(),
      });
      return None;
    };

    let owner = format!("{operation} parameter '{}'", parameter.name);
    Some(Parameter {
      name: parameter.name.clone(),
      location,
      type_name: self.resolve_type(&parameter.field_schema(), &owner, imports, stats),
      required: parameter.required,
      description: parameter.description.clone(),
    })
  }

  /// Resolves a schema to its canonical type string and records its imports.
  /// Unknown models degrade the whole type to `any` and import nothing.
  fn resolve_type(
    &self,
    schema: &FieldSchema,
    owner: &str,
    imports: &mut Vec<String>,
    stats: &mut GenerationStats,
  ) -> String {
    let field = self.resolver.resolve(schema);

    for reference in &field.unsupported {
      stats.record_warning(GenerationWarning::UnsupportedReference {
        owner: owner.to_string(),
        reference: reference.clone(),
      });
    }

    let mut resolved = true;
    for reference in &field.references {
      if !self.registry.contains(reference) {
        resolved = false;
        stats.record_warning(GenerationWarning::UnresolvedReference {
          owner: owner.to_string(),
          reference: reference.clone(),
        });
      }
    }

    if !resolved {
      return ANY.to_string();
    }

    self.resolver.table().collect_imports(&field.node, imports);
    field.node.to_string()
  }
}

/// Declared tags first, in declaration order, then tags only operations
/// mention, in first-use order. Reports untagged and unreadable operations.
fn collect_tags(spec: &SwaggerSpec, stats: &mut GenerationStats) -> Vec<(String, Option<String>)> {
  let mut tags: IndexMap<String, Option<String>> = spec
    .tags
    .iter()
    .map(|tag| (tag.name.clone(), tag.description.clone()))
    .collect();

  for (path, item) in &spec.paths {
    for (method, error) in &item.malformed {
      stats.record_warning(GenerationWarning::MalformedOperation {
        method: method.clone(),
        path: path.clone(),
        error: error.clone(),
      });
    }

    for (method, operation) in &item.operations {
      if operation.tags.is_empty() {
        stats.record_warning(GenerationWarning::UntaggedOperation {
          method: method.to_string(),
          path: path.clone(),
        });
      }
      for tag in &operation.tags {
        tags.entry(tag.clone()).or_insert(None);
      }
    }
  }

  tags.into_iter().collect()
}

/// Path-level parameters followed by the operation's own. An operation
/// parameter replaces an inherited one with the same name and location.
fn merge_parameters<'p>(inherited: &'p [RawParameter], declared: &'p [RawParameter]) -> Vec<&'p RawParameter> {
  let mut merged: Vec<&RawParameter> = inherited
    .iter()
    .filter(|parameter| {
      !declared
        .iter()
        .any(|own| own.name == parameter.name && own.location == parameter.location)
    })
    .collect();
  merged.extend(declared);
  merged
}
