use std::collections::HashMap;

use super::ast::{ModelDefinition, ModelProperty};

/// Addresses one property of one registered model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertySlot {
  pub model: usize,
  pub property: usize,
}

/// Registered models in registration order, indexed by canonical name.
#[derive(Debug, Default)]
pub struct ModelRegistry {
  models: Vec<ModelDefinition>,
  index: HashMap<String, usize>,
}

impl ModelRegistry {
  pub fn contains(&self, name: &str) -> bool {
    self.index.contains_key(name)
  }

  /// Index the next registered model will receive.
  pub fn next_index(&self) -> usize {
    self.models.len()
  }

  /// Registers `model` unless one with the same name exists. The first
  /// registration wins; returns whether `model` was kept.
  pub fn register(&mut self, model: ModelDefinition) -> bool {
    if self.contains(&model.name) {
      return false;
    }
    self.index.insert(model.name.clone(), self.models.len());
    self.models.push(model);
    true
  }

  pub fn get(&self, name: &str) -> Option<&ModelDefinition> {
    self.index.get(name).map(|&position| &self.models[position])
  }

  pub fn property_mut(&mut self, slot: PropertySlot) -> Option<&mut ModelProperty> {
    self.models.get_mut(slot.model)?.properties.get_mut(slot.property)
  }

  /// `Model.property`, for diagnostics.
  pub fn describe_slot(&self, slot: PropertySlot) -> String {
    let Some(model) = self.models.get(slot.model) else {
      return format!("model #{}", slot.model);
    };
    match model.properties.get(slot.property) {
      Some(property) => format!("{}.{}", model.name, property.name),
      None => model.name.clone(),
    }
  }

  pub fn into_models(self) -> Vec<ModelDefinition> {
    self.models
  }
}
