use std::{
  collections::{BTreeSet, VecDeque},
  ffi::OsStr,
  path::{Path, PathBuf},
};

use fmmap::tokio::{AsyncMmapFile, AsyncMmapFileExt};
use serde::{Deserialize, de::DeserializeOwned};
use serde_json::Value;
use tokio::io::AsyncReadExt;

use crate::openapi::{Components, Document};

/// Path argument that selects standard input.
pub const STDIN_ARG: &str = "-";

#[derive(Debug, thiserror::Error)]
pub enum SpecLoadError {
  #[error("failed to read {origin}: {source}")]
  Read {
    origin: String,
    #[source]
    source: std::io::Error,
  },
  #[error("failed to map {origin}: {message}")]
  Map { origin: String, message: String },
  #[error("{origin} is not valid UTF-8: {source}")]
  Utf8 {
    origin: String,
    #[source]
    source: std::str::Utf8Error,
  },
  #[error("invalid {format} in {origin} at '{path}': {message}")]
  Syntax {
    origin: String,
    format: SpecFormat,
    path: String,
    message: String,
  },
  #[error("{origin} is a Swagger 2.0 document; only OpenAPI 3.x is supported")]
  UnsupportedVersion { origin: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum::Display)]
pub enum SpecFormat {
  #[default]
  #[strum(to_string = "JSON")]
  Json,
  #[strum(to_string = "YAML")]
  Yaml,
}

impl SpecFormat {
  #[must_use]
  pub fn from_extension(ext: &str) -> Option<Self> {
    match ext.to_ascii_lowercase().as_str() {
      "yaml" | "yml" => Some(Self::Yaml),
      "json" => Some(Self::Json),
      _ => None,
    }
  }

  /// JSON documents start with `{`; anything else is read as YAML.
  #[must_use]
  pub fn sniff(bytes: &[u8]) -> Self {
    match bytes.iter().find(|b| !b.is_ascii_whitespace()) {
      Some(b'{') => Self::Json,
      _ => Self::Yaml,
    }
  }

  fn detect(path: Option<&Path>, bytes: &[u8]) -> Self {
    path
      .and_then(Path::extension)
      .and_then(OsStr::to_str)
      .and_then(Self::from_extension)
      .unwrap_or_else(|| Self::sniff(bytes))
  }
}

/// Referenced files only contribute their component schemas and need not be complete documents.
#[derive(Debug, Default, Deserialize)]
struct ComponentsFragment {
  #[serde(default)]
  components: Option<Components>,
}

enum SpecContent {
  Mapped(AsyncMmapFile),
  Buffered(Vec<u8>),
}

impl SpecContent {
  fn as_slice(&self) -> &[u8] {
    match self {
      Self::Mapped(file) => file.as_slice(),
      Self::Buffered(bytes) => bytes,
    }
  }
}

/// Reads an OpenAPI document from a file or standard input.
pub struct SpecLoader {
  content: SpecContent,
  format: SpecFormat,
  origin: String,
  base_dir: PathBuf,
}

impl SpecLoader {
  /// Opens `path`, or standard input when `path` is `-`.
  pub async fn open(path: &Path) -> Result<Self, SpecLoadError> {
    if path.as_os_str() == STDIN_ARG {
      return Self::stdin().await;
    }

    let origin = path.display().to_string();
    let file = open_mapped(path, &origin).await?;
    let format = SpecFormat::detect(Some(path), file.as_slice());

    Ok(Self {
      content: SpecContent::Mapped(file),
      format,
      origin,
      base_dir: path.parent().map(Path::to_path_buf).unwrap_or_default(),
    })
  }

  pub async fn stdin() -> Result<Self, SpecLoadError> {
    let origin = "<stdin>".to_string();
    let mut bytes = vec![];
    tokio::io::stdin()
      .read_to_end(&mut bytes)
      .await
      .map_err(|source| SpecLoadError::Read {
        origin: origin.clone(),
        source,
      })?;

    Ok(Self::from_bytes(bytes, origin))
  }

  /// Wraps an in-memory document. The format is sniffed from the content.
  pub fn from_bytes(bytes: Vec<u8>, origin: impl Into<String>) -> Self {
    let format = SpecFormat::sniff(&bytes);
    Self {
      content: SpecContent::Buffered(bytes),
      format,
      origin: origin.into(),
      base_dir: PathBuf::new(),
    }
  }

  /// Parses this document alone, leaving references to other files unresolved.
  pub fn parse(&self) -> Result<Document, SpecLoadError> {
    parse_document(self.content.as_slice(), self.format, &self.origin)
  }

  /// Parses the document and merges the component schemas of every file it references
  /// (transitively) into it. Schemas already defined keep their first definition.
  pub async fn load(&self) -> Result<Document, SpecLoadError> {
    let mut document = self.parse()?;
    let mut pending: VecDeque<PathBuf> = external_files(self.content.as_slice(), self.format, &self.origin)?
      .into_iter()
      .map(|file| self.base_dir.join(file))
      .collect();
    let mut visited = BTreeSet::new();

    while let Some(path) = pending.pop_front() {
      if !visited.insert(path.clone()) {
        continue;
      }

      let origin = path.display().to_string();
      let file = open_mapped(&path, &origin).await?;
      let format = SpecFormat::detect(Some(&path), file.as_slice());
      let referenced: ComponentsFragment = parse_as(file.as_slice(), format, &origin)?;

      let base = path.parent().map(Path::to_path_buf).unwrap_or_default();
      pending.extend(
        external_files(file.as_slice(), format, &origin)?
          .into_iter()
          .map(|nested| base.join(nested)),
      );

      if let Some(external) = referenced.components {
        let components = document.components.get_or_insert_with(Default::default);
        for (name, schema) in external.schemas {
          components.schemas.entry(name).or_insert(schema);
        }
      }
    }

    Ok(document)
  }
}

async fn open_mapped(path: &Path, origin: &str) -> Result<AsyncMmapFile, SpecLoadError> {
  AsyncMmapFile::open(path).await.map_err(|err| SpecLoadError::Map {
    origin: origin.to_string(),
    message: err.to_string(),
  })
}

fn parse_document(bytes: &[u8], format: SpecFormat, origin: &str) -> Result<Document, SpecLoadError> {
  let raw: Value = parse_as(bytes, format, origin)?;
  if raw.get("swagger").is_some() && raw.get("openapi").is_none() {
    return Err(SpecLoadError::UnsupportedVersion {
      origin: origin.to_string(),
    });
  }
  parse_as(bytes, format, origin)
}

fn parse_as<T: DeserializeOwned>(bytes: &[u8], format: SpecFormat, origin: &str) -> Result<T, SpecLoadError> {
  match format {
    SpecFormat::Json => {
      let mut deserializer = serde_json::Deserializer::from_slice(bytes);
      serde_path_to_error::deserialize(&mut deserializer).map_err(|err| syntax_error(&err, format, origin))
    }
    SpecFormat::Yaml => {
      let text = std::str::from_utf8(bytes).map_err(|source| SpecLoadError::Utf8 {
        origin: origin.to_string(),
        source,
      })?;
      serde_path_to_error::deserialize(serde_yaml::Deserializer::from_str(text))
        .map_err(|err| syntax_error(&err, format, origin))
    }
  }
}

fn syntax_error<E: std::fmt::Display>(
  err: &serde_path_to_error::Error<E>,
  format: SpecFormat,
  origin: &str,
) -> SpecLoadError {
  SpecLoadError::Syntax {
    origin: origin.to_string(),
    format,
    path: err.path().to_string(),
    message: err.inner().to_string(),
  }
}

/// File parts of every `$ref` that points outside the document, e.g. `common.yaml` in
/// `common.yaml#/components/schemas/Money`.
fn external_files(bytes: &[u8], format: SpecFormat, origin: &str) -> Result<BTreeSet<String>, SpecLoadError> {
  let raw: Value = parse_as(bytes, format, origin)?;
  let mut files = BTreeSet::new();
  collect_external_refs(&raw, &mut files);
  Ok(files)
}

fn collect_external_refs(value: &Value, files: &mut BTreeSet<String>) {
  match value {
    Value::Object(map) => {
      if let Some(Value::String(reference)) = map.get("$ref")
        && let Some((file, _)) = reference.split_once('#')
        && !file.is_empty()
        && !file.contains("://")
      {
        files.insert(file.to_string());
      }
      for child in map.values() {
        collect_external_refs(child, files);
      }
    }
    Value::Array(items) => {
      for item in items {
        collect_external_refs(item, files);
      }
    }
    _ => {}
  }
}
