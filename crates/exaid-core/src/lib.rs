#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_errors_doc)]
//! Compiler core for `exaid`.
//!
//! Turns a Swagger 2.0 document into a normalized set of models and per-tag
//! modules, renders them through a four-slot template contract and writes the
//! results to disk.
//!
//! ```no_run
//! use exaid_core::{
//!   ExaidConfig,
//!   emit::{Emitter, Passthrough},
//!   generator::orchestrator::Orchestrator,
//!   render::TemplateRenderer,
//!   source::SpecLoader,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ExaidConfig::builder().url("https://petstore.swagger.io/v2/swagger.json").build();
//! let document = SpecLoader::from_url(&config.url).load().await?;
//! let compiled = Orchestrator::new(&document, config.type_table()).compile();
//! let renderer = TemplateRenderer::from_config(&config);
//! Emitter::new(&config.dir, Passthrough).emit(&compiled, &document.raw, &renderer).await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod emit;
pub mod error;
pub mod generator;
pub mod render;
pub mod source;
pub mod swagger;

pub use config::{ExaidConfig, ModuleTemplate};
pub use error::{EmitError, RetrievalError};
