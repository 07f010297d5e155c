//! Serde model of the subset of OpenAPI 3.x consumed by the generator.
//!
//! Unknown keywords are ignored. `$ref` nodes are kept as [`ObjectOrReference::Ref`]
//! and resolved by name later in the schema graph.

mod document;
mod schema;

pub use document::{Components, Document, Parameter, ParameterLocation, RequestBody, Response};
pub use schema::{Schema, SchemaType};

use serde::{
  Deserialize, Deserializer,
  de::{DeserializeOwned, Error as _},
};
use serde_json::Value;

/// Either an inline object or a `$ref` pointer to a named one.
#[derive(Debug, Clone, PartialEq)]
pub enum ObjectOrReference<T> {
  Ref { ref_path: String },
  Object(T),
}

/// Buffers the node as a JSON value, which reads mapping keys as strings. Untagged buffering
/// would keep unquoted YAML keys such as `200` as integers and reject them as property names.
impl<'de, T: DeserializeOwned> Deserialize<'de> for ObjectOrReference<T> {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    let value = Value::deserialize(deserializer)?;
    if let Some(Value::String(ref_path)) = value.get("$ref") {
      return Ok(Self::Ref {
        ref_path: ref_path.clone(),
      });
    }
    T::deserialize(value).map(Self::Object).map_err(D::Error::custom)
  }
}

impl<T> ObjectOrReference<T> {
  pub fn ref_path(&self) -> Option<&str> {
    match self {
      Self::Ref { ref_path } => Some(ref_path),
      Self::Object(_) => None,
    }
  }
}

impl<T> From<T> for ObjectOrReference<T> {
  fn from(object: T) -> Self {
    Self::Object(object)
  }
}
