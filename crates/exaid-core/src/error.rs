use std::path::PathBuf;

/// The source document could not be acquired. Always fatal.
#[derive(Debug, thiserror::Error)]
pub enum RetrievalError {
  #[error("failed to fetch {url}: {source}")]
  Fetch {
    url: String,
    #[source]
    source: reqwest::Error,
  },
  #[error("failed to read {}: {source}", path.display())]
  Read {
    path: PathBuf,
    #[source]
    source: fmmap::error::Error,
  },
  #[error("{location} is not valid JSON: {source}")]
  Parse {
    location: String,
    #[source]
    source: serde_json::Error,
  },
  #[error("{location} does not have the shape of a Swagger 2.0 document: {source}")]
  Shape {
    location: String,
    #[source]
    source: serde_json::Error,
  },
}

/// Rendering or persisting an artifact failed.
///
/// Formatter rejections are not errors; the emitter records them as warnings and
/// writes the unformatted text instead.
#[derive(Debug, thiserror::Error)]
pub enum EmitError {
  #[error("template '{template}' failed to render: {source}")]
  Template {
    template: &'static str,
    #[source]
    source: tera::Error,
  },
  #[error("failed to write {}: {source}", path.display())]
  Write {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },
  #[error("failed to serialize {document}: {source}")]
  Serialize {
    document: &'static str,
    #[source]
    source: serde_json::Error,
  },
}
