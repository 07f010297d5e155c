use std::path::PathBuf;

use serde_json::json;

use crate::{
  generator::{codegen::GeneratedFiles, tests::support::STORE_API},
  openapi::Document,
  ui::{
    Colors, GenerateCommand,
    colors::Theme,
    commands::{
      GenerateConfig, generate_code,
      list::{OperationRow, operation_rows},
    },
  },
};

fn command(input: PathBuf, output: PathBuf) -> GenerateCommand {
  GenerateCommand {
    input,
    output,
    class_name: "StoreSDK".to_string(),
    base_url: None,
    sdk_version: "1.0.0".to_string(),
    verbose: false,
    quiet: true,
  }
}

fn plain_colors() -> Colors {
  Colors::new(false, Theme::Dark)
}

#[test]
fn test_config_rejects_invalid_class_name() {
  let mut cmd = command(PathBuf::from("api.yaml"), PathBuf::from("out"));
  cmd.class_name = "store-sdk".to_string();

  let err = GenerateConfig::from_command(cmd).unwrap_err();
  assert_eq!(err.to_string(), "Class name 'store-sdk' is not a valid TypeScript identifier");
}

#[test]
fn test_config_ignores_blank_base_url() {
  let mut cmd = command(PathBuf::from("api.yaml"), PathBuf::from("out"));
  cmd.base_url = Some("  ".to_string());
  assert!(GenerateConfig::from_command(cmd).unwrap().base_url.is_none());

  let mut cmd = command(PathBuf::from("api.yaml"), PathBuf::from("out"));
  cmd.base_url = Some("https://api.example.com".to_string());
  assert_eq!(
    GenerateConfig::from_command(cmd).unwrap().base_url.as_deref(),
    Some("https://api.example.com")
  );
}

#[tokio::test]
async fn test_generate_writes_all_files() {
  let dir = tempfile::tempdir().unwrap();
  let input = dir.path().join("store_api.json");
  let output = dir.path().join("generated/src");
  tokio::fs::write(&input, STORE_API).await.unwrap();

  let config = GenerateConfig::from_command(command(input, output.clone())).unwrap();
  let generated = generate_code(config, &plain_colors()).await.unwrap();

  for (name, code) in generated.files.entries() {
    let written = tokio::fs::read_to_string(output.join(name)).await.unwrap();
    assert_eq!(written, code, "{name} differs from the generated source");
  }
  let sdk = tokio::fs::read_to_string(output.join(GeneratedFiles::SDK_FILE)).await.unwrap();
  assert!(sdk.contains("export class StoreSDK {"));
  assert!(sdk.contains("const SDK_VERSION = '1.0.0';"));
}

#[tokio::test]
async fn test_failed_generation_writes_nothing() {
  let dir = tempfile::tempdir().unwrap();
  let input = dir.path().join("broken.json");
  let output = dir.path().join("out");
  let document = json!({
    "openapi": "3.0.0",
    "paths": { "/items": { "get": { "responses": {} } } }
  });
  tokio::fs::write(&input, document.to_string()).await.unwrap();

  let config = GenerateConfig::from_command(command(input, output.clone())).unwrap();
  let err = generate_code(config, &plain_colors()).await.unwrap_err();

  assert!(err.to_string().contains("GET /items"), "{err}");
  assert!(!output.exists());
}

#[test]
fn test_operation_rows_sorted_with_missing_ids_last() {
  let document: Document = serde_json::from_value(json!({
    "openapi": "3.0.0",
    "paths": {
      "/b": { "get": { "operationId": "zeta", "responses": {} } },
      "/a": {
        "get": { "responses": {} },
        "post": { "operationId": "create-item", "responses": {} }
      }
    }
  }))
  .unwrap();

  assert_eq!(
    operation_rows(&document),
    vec![
      OperationRow {
        method_name: Some("createItem".to_string()),
        method: "POST".to_string(),
        path: "/a".to_string(),
      },
      OperationRow {
        method_name: Some("zeta".to_string()),
        method: "GET".to_string(),
        path: "/b".to_string(),
      },
      OperationRow {
        method_name: None,
        method: "GET".to_string(),
        path: "/a".to_string(),
      },
    ]
  );
}
