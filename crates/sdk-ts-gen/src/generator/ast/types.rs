use std::{collections::BTreeSet, fmt};

use serde_json::Value;

/// A TypeScript type expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TsType {
  /// Permissive fallback for shapes that cannot be typed more precisely.
  Any,
  Void,
  Null,
  String,
  Number,
  Boolean,
  Blob,
  Date,
  /// A named type declared elsewhere (models, parameter helpers or runtime library).
  Named(String),
  Literal(TsLiteral),
  Array(Box<TsType>),
  Union(Vec<TsType>),
  Intersection(Vec<TsType>),
  Object(Vec<TsProperty>),
}

impl TsType {
  pub fn named(name: impl Into<String>) -> Self {
    Self::Named(name.into())
  }

  pub fn array(element: TsType) -> Self {
    Self::Array(Box::new(element))
  }

  /// Builds a union, flattening nested unions and dropping repeated members.
  /// The first occurrence of a member keeps its position.
  pub fn union(members: impl IntoIterator<Item = TsType>) -> Self {
    let mut flat: Vec<TsType> = vec![];
    for member in members {
      let parts = match member {
        Self::Union(inner) => inner,
        other => vec![other],
      };
      for part in parts {
        if !flat.contains(&part) {
          flat.push(part);
        }
      }
    }

    match flat.len() {
      0 => Self::Any,
      1 => flat.remove(0),
      _ => Self::Union(flat),
    }
  }

  pub fn intersection(members: Vec<TsType>) -> Self {
    match members.len() {
      0 => Self::Any,
      1 => members.into_iter().next().unwrap_or(Self::Any),
      _ => Self::Intersection(members),
    }
  }

  #[must_use]
  pub fn nullable(self) -> Self {
    Self::union([self, Self::Null])
  }

  /// Adds every `Named` type mentioned anywhere in this expression.
  pub fn collect_named(&self, out: &mut BTreeSet<String>) {
    match self {
      Self::Named(name) => {
        out.insert(name.clone());
      }
      Self::Array(element) => element.collect_named(out),
      Self::Union(members) | Self::Intersection(members) => {
        for member in members {
          member.collect_named(out);
        }
      }
      Self::Object(properties) => {
        for property in properties {
          property.ty.collect_named(out);
        }
      }
      _ => {}
    }
  }

  fn needs_parens_in_array(&self) -> bool {
    matches!(self, Self::Union(_) | Self::Intersection(_))
  }
}

impl fmt::Display for TsType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Any => f.write_str("any"),
      Self::Void => f.write_str("void"),
      Self::Null => f.write_str("null"),
      Self::String => f.write_str("string"),
      Self::Number => f.write_str("number"),
      Self::Boolean => f.write_str("boolean"),
      Self::Blob => f.write_str("Blob"),
      Self::Date => f.write_str("Date"),
      Self::Named(name) => f.write_str(name),
      Self::Literal(literal) => write!(f, "{literal}"),
      Self::Array(element) if element.needs_parens_in_array() => write!(f, "({element})[]"),
      Self::Array(element) => write!(f, "{element}[]"),
      Self::Union(members) => {
        for (index, member) in members.iter().enumerate() {
          if index > 0 {
            f.write_str(" | ")?;
          }
          write!(f, "{member}")?;
        }
        Ok(())
      }
      Self::Intersection(members) => {
        for (index, member) in members.iter().enumerate() {
          if index > 0 {
            f.write_str(" & ")?;
          }
          if matches!(member, Self::Union(_)) {
            write!(f, "({member})")?;
          } else {
            write!(f, "{member}")?;
          }
        }
        Ok(())
      }
      Self::Object(properties) if properties.is_empty() => f.write_str("{}"),
      Self::Object(properties) => {
        f.write_str("{ ")?;
        for property in properties {
          write!(f, "{property}; ")?;
        }
        f.write_str("}")
      }
    }
  }
}

/// A literal type from an enum value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TsLiteral {
  Str(String),
  Number(String),
  Bool(bool),
  Null,
  /// Arrays and objects, printed as their JSON text.
  Other(String),
}

impl From<&Value> for TsLiteral {
  fn from(value: &Value) -> Self {
    match value {
      Value::String(s) => Self::Str(s.clone()),
      Value::Number(n) => Self::Number(n.to_string()),
      Value::Bool(b) => Self::Bool(*b),
      Value::Null => Self::Null,
      other => Self::Other(other.to_string()),
    }
  }
}

impl fmt::Display for TsLiteral {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Str(s) => write!(f, "'{}'", escape_single_quoted(s)),
      Self::Number(n) => f.write_str(n),
      Self::Bool(b) => write!(f, "{b}"),
      Self::Null => f.write_str("null"),
      Self::Other(text) => f.write_str(text),
    }
  }
}

pub fn escape_single_quoted(value: &str) -> String {
  value.replace('\\', "\\\\").replace('\'', "\\'")
}

/// One member of an interface or inline object type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TsProperty {
  pub name: String,
  pub ty: TsType,
  pub optional: bool,
}

impl TsProperty {
  pub fn new(name: impl Into<String>, ty: TsType, optional: bool) -> Self {
    Self {
      name: name.into(),
      ty,
      optional,
    }
  }
}

impl fmt::Display for TsProperty {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let marker = if self.optional { "?" } else { "" };
    write!(f, "{}{marker}: {}", self.name, self.ty)
  }
}
