use std::collections::BTreeMap;

use http::Method;
use indexmap::IndexMap;
use serde::Deserialize;
use strum::Display;

use super::{ObjectOrReference, Schema};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Document {
  pub openapi: String,
  #[serde(default)]
  pub servers: Vec<Server>,
  #[serde(default)]
  pub paths: BTreeMap<String, PathItem>,
  #[serde(default)]
  pub components: Option<Components>,
}

impl Document {
  /// Major version declared by the `openapi` field, if it parses.
  pub fn major_version(&self) -> Option<u32> {
    self.openapi.split('.').next()?.trim().parse().ok()
  }

  /// Every `(path, verb, operation)` triple, paths sorted and verbs in a fixed order.
  pub fn operations(&self) -> impl Iterator<Item = (&str, Method, &PathItem, &Operation)> {
    self.paths.iter().flat_map(|(path, item)| {
      item
        .operations()
        .map(move |(method, operation)| (path.as_str(), method, item, operation))
    })
  }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Server {
  pub url: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Components {
  #[serde(default)]
  pub schemas: BTreeMap<String, ObjectOrReference<Schema>>,
  #[serde(default)]
  pub parameters: BTreeMap<String, ObjectOrReference<Parameter>>,
  #[serde(default)]
  pub request_bodies: BTreeMap<String, ObjectOrReference<RequestBody>>,
  #[serde(default)]
  pub responses: BTreeMap<String, ObjectOrReference<Response>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PathItem {
  #[serde(default)]
  pub get: Option<Operation>,
  #[serde(default)]
  pub post: Option<Operation>,
  #[serde(default)]
  pub put: Option<Operation>,
  #[serde(default)]
  pub patch: Option<Operation>,
  #[serde(default)]
  pub delete: Option<Operation>,
  /// Shared by every operation under this path unless overridden.
  #[serde(default)]
  pub parameters: Vec<ObjectOrReference<Parameter>>,
}

impl PathItem {
  pub fn operations(&self) -> impl Iterator<Item = (Method, &Operation)> {
    [
      (Method::GET, self.get.as_ref()),
      (Method::POST, self.post.as_ref()),
      (Method::PUT, self.put.as_ref()),
      (Method::PATCH, self.patch.as_ref()),
      (Method::DELETE, self.delete.as_ref()),
    ]
    .into_iter()
    .filter_map(|(method, operation)| operation.map(|op| (method, op)))
  }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
  #[serde(default)]
  pub operation_id: Option<String>,
  #[serde(default)]
  pub summary: Option<String>,
  #[serde(default)]
  pub parameters: Vec<ObjectOrReference<Parameter>>,
  #[serde(default)]
  pub request_body: Option<ObjectOrReference<RequestBody>>,
  #[serde(default)]
  pub responses: BTreeMap<String, ObjectOrReference<Response>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Deserialize)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ParameterLocation {
  Path,
  Query,
  Header,
  Cookie,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Parameter {
  pub name: String,
  #[serde(rename = "in")]
  pub location: ParameterLocation,
  #[serde(default)]
  pub description: Option<String>,
  #[serde(default)]
  pub required: bool,
  #[serde(default)]
  pub schema: Option<ObjectOrReference<Schema>>,
  /// Declared client-side type overriding schema inference.
  #[serde(default, rename = "x-gocart-sdk-type")]
  pub sdk_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RequestBody {
  #[serde(default)]
  pub content: IndexMap<String, MediaTypeObject>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Response {
  #[serde(default)]
  pub content: IndexMap<String, MediaTypeObject>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MediaTypeObject {
  #[serde(default)]
  pub schema: Option<ObjectOrReference<Schema>>,
}
