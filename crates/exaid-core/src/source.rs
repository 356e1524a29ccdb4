use std::{fmt, path::PathBuf};

use fmmap::tokio::{AsyncMmapFile, AsyncMmapFileExt};
use serde::Deserialize;

use crate::{error::RetrievalError, swagger::SwaggerSpec};

/// Where the document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceLocation {
  Remote(String),
  Local(PathBuf),
}

impl SourceLocation {
  /// `http://` and `https://` inputs are fetched, anything else is a path.
  pub fn parse(input: &str) -> Self {
    if input.starts_with("http://") || input.starts_with("https://") {
      Self::Remote(input.to_string())
    } else {
      Self::Local(PathBuf::from(input))
    }
  }
}

impl fmt::Display for SourceLocation {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Remote(url) => f.write_str(url),
      Self::Local(path) => write!(f, "{}", path.display()),
    }
  }
}

/// The acquired document, both verbatim and typed.
#[derive(Debug, Clone)]
pub struct SourceDocument {
  /// Written back out unchanged as the `docs` artifact.
  pub raw: serde_json::Value,
  pub spec: SwaggerSpec,
}

impl SourceDocument {
  pub fn from_slice(location: &str, bytes: &[u8]) -> Result<Self, RetrievalError> {
    let raw = serde_json::from_slice(bytes).map_err(|source| RetrievalError::Parse {
      location: location.to_string(),
      source,
    })?;
    Self::from_value(location, raw)
  }

  pub fn from_value(location: &str, raw: serde_json::Value) -> Result<Self, RetrievalError> {
    let spec = SwaggerSpec::deserialize(&raw).map_err(|source| RetrievalError::Shape {
      location: location.to_string(),
      source,
    })?;
    Ok(Self { raw, spec })
  }
}

/// Acquires the source document. This is the only I/O before emission and the
/// only failure that aborts a run.
pub struct SpecLoader {
  location: SourceLocation,
}

impl SpecLoader {
  pub fn new(location: SourceLocation) -> Self {
    Self { location }
  }

  pub fn from_url(input: &str) -> Self {
    Self::new(SourceLocation::parse(input))
  }

  pub async fn load(&self) -> Result<SourceDocument, RetrievalError> {
    let label = self.location.to_string();
    match &self.location {
      SourceLocation::Remote(url) => {
        let bytes = fetch(url).await?;
        SourceDocument::from_slice(&label, &bytes)
      }
      SourceLocation::Local(path) => {
        let file = AsyncMmapFile::open(path).await.map_err(|source| RetrievalError::Read {
          path: path.clone(),
          source,
        })?;
        SourceDocument::from_slice(&label, file.as_slice())
      }
    }
  }
}

async fn fetch(url: &str) -> Result<Vec<u8>, RetrievalError> {
  let fetch_error = |source| RetrievalError::Fetch {
    url: url.to_string(),
    source,
  };

  let response = reqwest::get(url)
    .await
    .and_then(reqwest::Response::error_for_status)
    .map_err(fetch_error)?;
  let body = response.bytes().await.map_err(fetch_error)?;
  Ok(body.to_vec())
}

#[cfg(test)]
mod tests {
  use std::io::Write;

  use super::*;

  #[test]
  fn test_source_location_detects_urls() {
    assert_eq!(
      SourceLocation::parse("https://petstore.swagger.io/v2/swagger.json"),
      SourceLocation::Remote("https://petstore.swagger.io/v2/swagger.json".to_string())
    );
    assert_eq!(
      SourceLocation::parse("./swagger.json"),
      SourceLocation::Local(PathBuf::from("./swagger.json"))
    );
  }

  #[tokio::test]
  async fn test_load_local_document() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
      file,
      r#"{{"swagger":"2.0","host":"example.com","tags":[{{"name":"pet"}}],"paths":{{}}}}"#
    )
    .unwrap();

    let document = SpecLoader::from_url(file.path().to_str().unwrap()).load().await.unwrap();
    assert_eq!(document.spec.tags[0].name, "pet");
    assert_eq!(document.raw["host"], "example.com");
    assert_eq!(document.raw["swagger"], "2.0");
  }

  #[tokio::test]
  async fn test_load_missing_file_is_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.json");

    let error = SpecLoader::new(SourceLocation::Local(missing)).load().await.unwrap_err();
    assert!(matches!(error, RetrievalError::Read { .. }));
  }

  #[test]
  fn test_invalid_json_is_parse_error() {
    let error = SourceDocument::from_slice("inline", b"{ not json").unwrap_err();
    assert!(matches!(error, RetrievalError::Parse { .. }));
    assert!(error.to_string().starts_with("inline is not valid JSON"));
  }

  #[test]
  fn test_wrong_shape_is_shape_error() {
    let error = SourceDocument::from_slice("inline", br#"{"tags": "pet"}"#).unwrap_err();
    assert!(matches!(error, RetrievalError::Shape { .. }));
  }
}
