use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

use super::ObjectOrReference;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaType {
  String,
  Number,
  Integer,
  Boolean,
  Object,
  Array,
  Null,
  #[serde(other)]
  Unknown,
}

/// `type` is either a single keyword (3.0) or a list of keywords (3.1).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum SchemaTypeSet {
  Single(SchemaType),
  Multiple(Vec<SchemaType>),
}

impl SchemaTypeSet {
  pub fn types(&self) -> &[SchemaType] {
    match self {
      Self::Single(ty) => std::slice::from_ref(ty),
      Self::Multiple(types) => types,
    }
  }

  pub fn contains(&self, ty: SchemaType) -> bool {
    self.types().contains(&ty)
  }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
  #[serde(default, rename = "type")]
  pub schema_type: Option<SchemaTypeSet>,
  #[serde(default)]
  pub format: Option<String>,
  #[serde(default, rename = "enum")]
  pub enum_values: Vec<Value>,
  #[serde(default)]
  pub nullable: Option<bool>,
  #[serde(default)]
  pub properties: BTreeMap<String, ObjectOrReference<Schema>>,
  #[serde(default)]
  pub required: Vec<String>,
  #[serde(default)]
  pub items: Option<Box<ObjectOrReference<Schema>>>,
  #[serde(default)]
  pub one_of: Vec<ObjectOrReference<Schema>>,
  #[serde(default)]
  pub any_of: Vec<ObjectOrReference<Schema>>,
  #[serde(default)]
  pub all_of: Vec<ObjectOrReference<Schema>>,
  #[serde(default)]
  pub description: Option<String>,
}

impl Schema {
  pub fn has_type(&self, ty: SchemaType) -> bool {
    self.schema_type.as_ref().is_some_and(|set| set.contains(ty))
  }

  /// True for the 3.0 `nullable: true` keyword and for a 3.1 type list containing `null`.
  pub fn is_nullable(&self) -> bool {
    self.nullable.unwrap_or(false)
      || matches!(
        &self.schema_type,
        Some(SchemaTypeSet::Multiple(types)) if types.contains(&SchemaType::Null)
      )
  }

  pub fn is_object(&self) -> bool {
    self.has_type(SchemaType::Object) || !self.properties.is_empty()
  }

  pub fn is_array(&self) -> bool {
    self.has_type(SchemaType::Array)
  }

  pub fn is_required(&self, property: &str) -> bool {
    self.required.iter().any(|name| name == property)
  }

  pub fn is_binary(&self) -> bool {
    self.has_type(SchemaType::String) && self.format.as_deref() == Some("binary")
  }

  /// Enum values declared on the schema itself, or on its array items.
  pub fn enum_values_or_items(&self) -> &[Value] {
    if !self.enum_values.is_empty() {
      return &self.enum_values;
    }
    match self.items.as_deref() {
      Some(ObjectOrReference::Object(items)) => &items.enum_values,
      _ => &[],
    }
  }
}
