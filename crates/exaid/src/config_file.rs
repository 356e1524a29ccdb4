//! Discovery and loading of the on-disk configuration.
//!
//! Lookup order: an explicit `--config` file, `exaid.config.json` in the
//! working directory, then the `exaid` key of `package.json`. Every field is
//! optional here; the command line fills or overrides them before the core
//! configuration is built.

use std::path::{Path, PathBuf};

use anyhow::Context;
use exaid_core::ModuleTemplate;
use indexmap::IndexMap;
use serde::Deserialize;

pub const CONFIG_FILE_NAME: &str = "exaid.config.json";
pub const PACKAGE_FILE_NAME: &str = "package.json";
pub const PACKAGE_KEY: &str = "exaid";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FileConfig {
  pub url: Option<String>,
  pub dir: Option<PathBuf>,
  pub module_template: ModuleTemplate,
  pub types_template: Option<String>,
  pub type_map: IndexMap<String, String>,
  pub formatter: Option<String>,
}

impl FileConfig {
  /// Loads the configuration for a run rooted at `cwd`. A missing default file
  /// is not an error; a missing explicit file is.
  pub async fn discover(explicit: Option<&Path>, cwd: &Path) -> anyhow::Result<Self> {
    if let Some(path) = explicit {
      return Self::read(path).await;
    }

    let config_file = cwd.join(CONFIG_FILE_NAME);
    if tokio::fs::try_exists(&config_file).await.unwrap_or(false) {
      return Self::read(&config_file).await;
    }

    let package_file = cwd.join(PACKAGE_FILE_NAME);
    if tokio::fs::try_exists(&package_file).await.unwrap_or(false) {
      return Self::read_package(&package_file).await;
    }

    Ok(Self::default())
  }

  async fn read(path: &Path) -> anyhow::Result<Self> {
    let text = tokio::fs::read_to_string(path)
      .await
      .with_context(|| format!("failed to read config file {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("invalid config file {}", path.display()))
  }

  async fn read_package(path: &Path) -> anyhow::Result<Self> {
    let text = tokio::fs::read_to_string(path)
      .await
      .with_context(|| format!("failed to read {}", path.display()))?;
    let mut package: serde_json::Value =
      serde_json::from_str(&text).with_context(|| format!("invalid JSON in {}", path.display()))?;

    match package.get_mut(PACKAGE_KEY).map(serde_json::Value::take) {
      Some(section) => serde_json::from_value(section)
        .with_context(|| format!("invalid \"{PACKAGE_KEY}\" section in {}", path.display())),
      None => Ok(Self::default()),
    }
  }
}
