pub mod ast;
pub mod metrics;
pub mod model_extractor;
pub mod model_registry;
pub mod module_assembler;
pub mod operation_extractor;
pub mod orchestrator;
pub mod references;
pub mod type_notation;
pub(crate) mod type_resolver;

#[cfg(test)]
mod tests;
