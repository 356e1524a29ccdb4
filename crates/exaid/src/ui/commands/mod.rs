pub mod generate;
pub mod list;

use std::path::PathBuf;

use exaid_core::ExaidConfig;
pub use generate::{GenerateConfig, generate_code};
pub use list::{list_models, list_operations};

use crate::config_file::FileConfig;

/// Builds the core configuration. Command-line values win over file values;
/// the URL must come from one of them.
fn build_config(url: Option<String>, dir: Option<PathBuf>, file: FileConfig) -> anyhow::Result<ExaidConfig> {
  let FileConfig {
    url: file_url,
    dir: file_dir,
    module_template,
    types_template,
    type_map,
    formatter,
  } = file;

  let Some(url) = url.or(file_url) else {
    anyhow::bail!("missing required argument 'url'");
  };

  Ok(
    ExaidConfig::builder()
      .url(url)
      .maybe_dir(dir.or(file_dir))
      .module_template(module_template)
      .maybe_types_template(types_template)
      .type_map(type_map)
      .maybe_formatter(formatter)
      .build(),
  )
}
