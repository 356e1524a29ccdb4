//! Intermediate representation produced by the compiler and consumed by the
//! templates. Field names serialize in camelCase because templates and the
//! manifest address them by those names (`returnType`, `in`, ...).

use serde::Serialize;
use strum::{Display, EnumString};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelDefinition {
  pub name: String,
  pub title: Option<String>,
  pub generics: Vec<String>,
  pub properties: Vec<ModelProperty>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelProperty {
  pub name: String,
  #[serde(rename = "type")]
  pub type_name: String,
  pub required: bool,
  pub description: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum HttpMethod {
  Get,
  Put,
  Post,
  Delete,
  Options,
  Head,
  Patch,
  Trace,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize)]
#[strum(serialize_all = "camelCase")]
#[serde(rename_all = "camelCase")]
pub enum ParameterLocation {
  Query,
  Header,
  Path,
  Cookie,
  FormData,
  Body,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
  pub name: String,
  #[serde(rename = "in")]
  pub location: ParameterLocation,
  #[serde(rename = "type")]
  pub type_name: String,
  pub required: bool,
  pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
  pub name: String,
  pub method: HttpMethod,
  pub path: String,
  pub summary: Option<String>,
  pub description: Option<String>,
  /// Empty when the operation declares no `200` response schema.
  pub return_type: String,
  pub parameters: Vec<Parameter>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Module {
  pub name: String,
  pub description: Option<String>,
  pub operations: Vec<Operation>,
  pub imports: Vec<String>,
}

/// The aggregate document written next to the generated code.
#[derive(Debug, Serialize)]
pub struct ApiManifest<'a> {
  pub models: &'a [ModelDefinition],
  pub modules: &'a [Module],
}
