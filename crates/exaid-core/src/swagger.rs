//! Serde model of the parts of a Swagger 2.0 document the compiler reads.
//!
//! Every field is optional or defaulted: the compiler degrades gracefully on
//! incomplete documents instead of rejecting them. Maps are [`IndexMap`]s so the
//! document's own key order survives deserialization.

use indexmap::IndexMap;
use serde::Deserialize;

use crate::generator::ast::HttpMethod;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SwaggerSpec {
  pub tags: Vec<Tag>,
  pub paths: IndexMap<String, PathItem>,
  pub definitions: IndexMap<String, Definition>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Tag {
  pub name: String,
  pub description: Option<String>,
}

/// One entry of `paths`.
///
/// Only keys naming an HTTP method become operations. Method entries that fail
/// to deserialize are kept in `malformed` so the extractor can report them.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(from = "RawPathItem")]
pub struct PathItem {
  pub parameters: Vec<RawParameter>,
  pub operations: IndexMap<HttpMethod, RawOperation>,
  pub malformed: Vec<(String, String)>,
}

#[derive(Deserialize)]
struct RawPathItem {
  #[serde(default)]
  parameters: Vec<RawParameter>,
  #[serde(flatten)]
  entries: IndexMap<String, serde_json::Value>,
}

impl From<RawPathItem> for PathItem {
  fn from(raw: RawPathItem) -> Self {
    let mut operations = IndexMap::new();
    let mut malformed = vec![];

    for (key, value) in raw.entries {
      let Ok(method) = key.parse::<HttpMethod>() else {
        continue;
      };
      match serde_json::from_value::<RawOperation>(value) {
        Ok(operation) => {
          operations.insert(method, operation);
        }
        Err(error) => malformed.push((key, error.to_string())),
      }
    }

    Self {
      parameters: raw.parameters,
      operations,
      malformed,
    }
  }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawOperation {
  pub tags: Vec<String>,
  pub summary: Option<String>,
  pub description: Option<String>,
  pub operation_id: Option<String>,
  pub parameters: Vec<RawParameter>,
  pub responses: IndexMap<String, RawResponse>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawResponse {
  pub description: Option<String>,
  pub schema: Option<FieldSchema>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawParameter {
  pub name: String,
  #[serde(rename = "in")]
  pub location: String,
  pub required: bool,
  pub description: Option<String>,
  #[serde(rename = "type")]
  pub type_name: Option<String>,
  pub format: Option<String>,
  pub items: Option<Box<FieldSchema>>,
  pub schema: Option<FieldSchema>,
}

impl RawParameter {
  /// The parameter's effective schema: its inline `type`/`items` overlaid by
  /// whatever its nested `schema` declares.
  pub fn field_schema(&self) -> FieldSchema {
    let mut merged = FieldSchema {
      type_name: self.type_name.clone(),
      format: self.format.clone(),
      items: self.items.clone(),
      ..FieldSchema::default()
    };

    if let Some(schema) = &self.schema {
      merged.reference.clone_from(&schema.reference);
      if schema.type_name.is_some() {
        merged.type_name.clone_from(&schema.type_name);
      }
      if schema.format.is_some() {
        merged.format.clone_from(&schema.format);
      }
      if schema.items.is_some() {
        merged.items.clone_from(&schema.items);
      }
      if schema.additional_properties.is_some() {
        merged.additional_properties.clone_from(&schema.additional_properties);
      }
    }

    merged
  }
}

/// A schema that describes the type of a single value: a property, an array's
/// items, a parameter or a response body.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FieldSchema {
  #[serde(rename = "$ref")]
  pub reference: Option<String>,
  #[serde(rename = "type")]
  pub type_name: Option<String>,
  pub format: Option<String>,
  pub items: Option<Box<FieldSchema>>,
  pub additional_properties: Option<AdditionalProperties>,
  pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum AdditionalProperties {
  Allowed(bool),
  Schema(Box<FieldSchema>),
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Definition {
  #[serde(rename = "type")]
  pub type_name: Option<String>,
  pub title: Option<String>,
  pub description: Option<String>,
  pub required: Vec<String>,
  pub properties: IndexMap<String, FieldSchema>,
}
