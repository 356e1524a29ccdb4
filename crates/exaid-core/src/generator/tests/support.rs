use crate::{
  generator::{
    ast::{ModelDefinition, Module, Operation},
    orchestrator::{CompiledApi, Orchestrator},
    type_notation::TypeTable,
  },
  source::SourceDocument,
};

pub(super) const PETSTORE: &str = include_str!("../../../fixtures/petstore.json");

pub(super) fn document(value: serde_json::Value) -> SourceDocument {
  SourceDocument::from_value("test", value).expect("test document has a Swagger shape")
}

pub(super) fn compile(value: serde_json::Value) -> CompiledApi {
  Orchestrator::new(&document(value), TypeTable::default()).compile()
}

pub(super) fn compile_petstore() -> CompiledApi {
  let document = SourceDocument::from_slice("petstore.json", PETSTORE.as_bytes()).expect("fixture is valid");
  Orchestrator::new(&document, TypeTable::default()).compile()
}

pub(super) fn model<'a>(compiled: &'a CompiledApi, name: &str) -> &'a ModelDefinition {
  compiled
    .models
    .iter()
    .find(|model| model.name == name)
    .unwrap_or_else(|| panic!("model '{name}' not generated"))
}

pub(super) fn property_type<'a>(model: &'a ModelDefinition, name: &str) -> &'a str {
  model
    .properties
    .iter()
    .find(|property| property.name == name)
    .map(|property| property.type_name.as_str())
    .unwrap_or_else(|| panic!("property '{}.{name}' not generated", model.name))
}

pub(super) fn module<'a>(compiled: &'a CompiledApi, name: &str) -> &'a Module {
  compiled
    .modules
    .iter()
    .find(|module| module.name == name)
    .unwrap_or_else(|| panic!("module '{name}' not generated"))
}

pub(super) fn operation<'a>(module: &'a Module, name: &str) -> &'a Operation {
  module
    .operations
    .iter()
    .find(|operation| operation.name == name)
    .unwrap_or_else(|| panic!("operation '{name}' not in module '{}'", module.name))
}
