use std::path::Path;

use serde_json::json;

use crate::{
  emit::{Emitter, FormatError, Formatter, OutputLayout, Passthrough, PrettierFormatter, SourceSyntax},
  generator::{metrics::GenerationWarning, orchestrator::Orchestrator, type_notation::TypeTable},
  render::TemplateRenderer,
  source::SourceDocument,
};

/// Rejects TypeScript, passes JSON through.
struct RejectTypescript;

impl Formatter for RejectTypescript {
  async fn format(&self, text: &str, syntax: SourceSyntax) -> Result<String, FormatError> {
    match syntax {
      SourceSyntax::Typescript => Err(FormatError::Rejected {
        command: "reject-ts".to_string(),
        stderr: "SyntaxError: unexpected token".to_string(),
      }),
      SourceSyntax::Json => Ok(text.to_string()),
    }
  }
}

fn sample_document() -> SourceDocument {
  SourceDocument::from_value(
    "sample",
    json!({
      "swagger": "2.0",
      "tags": [{ "name": "pet" }, { "name": "admin/tools" }],
      "paths": {
        "/pets/{id}": {
          "get": {
            "tags": ["pet"],
            "operationId": "getPetById",
            "parameters": [{ "name": "id", "in": "path", "required": true, "type": "integer" }],
            "responses": { "200": { "schema": { "$ref": "#/definitions/Pet" } } }
          }
        },
        "/tools": {
          "post": { "tags": ["admin/tools"], "operationId": "runTool" }
        }
      },
      "definitions": {
        "Pet": { "properties": { "name": { "type": "string" } } }
      }
    }),
  )
  .unwrap()
}

async fn read(path: impl AsRef<Path>) -> String {
  tokio::fs::read_to_string(path).await.unwrap()
}

#[test]
fn test_layout_sanitizes_module_names() {
  let layout = OutputLayout::default();
  assert_eq!(layout.module_file("pet"), Path::new("modules/pet.ts"));
  assert_eq!(layout.module_file("admin/tools"), Path::new("modules/admin-tools.ts"));
  assert_eq!(layout.module_file("a\\b"), Path::new("modules/a-b.ts"));
}

#[tokio::test]
async fn test_emit_writes_every_artifact_in_order() {
  let dir = tempfile::tempdir().unwrap();
  let out = dir.path().join("nested/out");
  let document = sample_document();
  let compiled = Orchestrator::new(&document, TypeTable::default()).compile();

  let report = Emitter::new(&out, Passthrough)
    .emit(&compiled, &document.raw, &TemplateRenderer::default())
    .await
    .unwrap();

  assert_eq!(
    report.written,
    vec![
      out.join("types.ts"),
      out.join("modules/pet.ts"),
      out.join("modules/admin-tools.ts"),
      out.join("manifest.json"),
      out.join("docs.json"),
    ]
  );
  assert!(report.warnings.is_empty());

  assert!(read(out.join("types.ts")).await.contains("export interface Pet {"));
  assert!(read(out.join("modules/pet.ts")).await.contains("import { Pet } from \"../types\";"));
  assert!(read(out.join("modules/admin-tools.ts")).await.contains("runTool() {"));

  let docs: serde_json::Value = serde_json::from_str(&read(out.join("docs.json")).await).unwrap();
  assert_eq!(docs, document.raw);

  let manifest: serde_json::Value = serde_json::from_str(&read(out.join("manifest.json")).await).unwrap();
  assert_eq!(manifest["modules"][1]["name"], "admin/tools");
}

#[tokio::test]
async fn test_rejected_formatting_writes_unformatted_text() {
  let dir = tempfile::tempdir().unwrap();
  let document = sample_document();
  let compiled = Orchestrator::new(&document, TypeTable::default()).compile();
  let renderer = TemplateRenderer::default();

  let report = Emitter::new(dir.path(), RejectTypescript)
    .emit(&compiled, &document.raw, &renderer)
    .await
    .unwrap();

  assert_eq!(report.written.len(), 5);
  assert_eq!(report.warnings.len(), 3);
  assert!(matches!(
    &report.warnings[0],
    GenerationWarning::FormatRejected { path, reason }
      if path.ends_with("types.ts") && reason.contains("SyntaxError")
  ));

  let expected = renderer.render_types(&compiled.models).unwrap();
  assert_eq!(read(dir.path().join("types.ts")).await, expected);
}

#[tokio::test]
async fn test_missing_formatter_counts_as_rejection() {
  let formatter = PrettierFormatter::new("exaid-formatter-that-does-not-exist");
  let error = formatter.format("const a = 1", SourceSyntax::Typescript).await.unwrap_err();
  assert!(matches!(error, FormatError::Unavailable { .. }));

  let dir = tempfile::tempdir().unwrap();
  let document = sample_document();
  let compiled = Orchestrator::new(&document, TypeTable::default()).compile();
  let report = Emitter::new(dir.path(), formatter)
    .emit(&compiled, &document.raw, &TemplateRenderer::default())
    .await
    .unwrap();

  assert_eq!(report.written.len(), 5);
  assert_eq!(report.warnings.len(), 5);
}

#[tokio::test]
async fn test_custom_layout() {
  let dir = tempfile::tempdir().unwrap();
  let document = sample_document();
  let compiled = Orchestrator::new(&document, TypeTable::default()).compile();
  let layout = OutputLayout {
    types_file: "models.ts".into(),
    modules_dir: "api".into(),
    module_extension: "js".to_string(),
    ..OutputLayout::default()
  };

  Emitter::new(dir.path(), Passthrough)
    .with_layout(layout)
    .emit(&compiled, &document.raw, &TemplateRenderer::default())
    .await
    .unwrap();

  assert!(dir.path().join("models.ts").exists());
  assert!(dir.path().join("api/pet.js").exists());
  assert!(dir.path().join("manifest.json").exists());
}

#[tokio::test]
async fn test_colliding_module_file_names_get_suffix() {
  let dir = tempfile::tempdir().unwrap();
  let document = SourceDocument::from_value(
    "colliding",
    json!({
      "tags": [{ "name": "admin/tools" }, { "name": "admin-tools" }],
      "paths": {
        "/tools": {
          "get": { "tags": ["admin/tools"], "operationId": "listTools" },
          "post": { "tags": ["admin-tools"], "operationId": "runTool" }
        }
      }
    }),
  )
  .unwrap();
  let compiled = Orchestrator::new(&document, TypeTable::default()).compile();

  let report = Emitter::new(dir.path(), Passthrough)
    .emit(&compiled, &document.raw, &TemplateRenderer::default())
    .await
    .unwrap();

  let first = dir.path().join("modules/admin-tools.ts");
  let second = dir.path().join("modules/admin-tools-2.ts");
  assert_eq!(report.written[1..3], [first.clone(), second.clone()]);
  assert!(read(&first).await.contains("listTools() {"));
  assert!(read(&second).await.contains("runTool() {"));
  assert_eq!(
    report.warnings,
    vec![GenerationWarning::ModuleFileRenamed {
      module: "admin-tools".to_string(),
      path: second.display().to_string(),
    }]
  );
}

#[cfg(unix)]
#[tokio::test]
async fn test_streaming_formatter_does_not_block() {
  let dir = tempfile::tempdir().unwrap();
  let script = dir.path().join("echo-formatter.sh");
  std::fs::write(&script, "#!/bin/sh\ncat\n").unwrap();

  let formatter = PrettierFormatter::new(format!("sh {}", script.display()));
  let input = "export const value = 1;\n".repeat(48 * 1024);

  let formatted = tokio::time::timeout(
    std::time::Duration::from_secs(30),
    formatter.format(&input, SourceSyntax::Typescript),
  )
  .await
  .expect("formatter finished")
  .unwrap();
  assert_eq!(formatted, input);
}

#[cfg(unix)]
#[tokio::test]
async fn test_failing_formatter_is_rejection() {
  let dir = tempfile::tempdir().unwrap();
  let script = dir.path().join("failing-formatter.sh");
  std::fs::write(&script, "#!/bin/sh\necho 'SyntaxError: nope' >&2\nexit 2\n").unwrap();

  let error = PrettierFormatter::new(format!("sh {}", script.display()))
    .format("const", SourceSyntax::Typescript)
    .await
    .unwrap_err();
  assert!(matches!(error, FormatError::Rejected { stderr, .. } if stderr == "SyntaxError: nope"));
}
