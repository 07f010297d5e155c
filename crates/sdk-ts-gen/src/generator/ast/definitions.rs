use http::Method;

use super::{PathTemplate, RequestBodyKind, ResponseKind, SdkTypeHint, TsType};
use crate::{
  naming::identifiers::to_camel_case,
  openapi::{ObjectOrReference, Schema},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind {
  Interface,
  Alias,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeSource {
  Component(String),
  RequestBody { operation_id: String },
}

/// A named model type rendered into the models file.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeDefinition {
  pub name: String,
  pub source: TypeSource,
  pub schema: Schema,
  pub kind: TypeKind,
}

impl TypeDefinition {
  pub fn new(name: String, source: TypeSource, schema: Schema) -> Self {
    let kind = if schema.enum_values.is_empty() && schema.is_object() {
      TypeKind::Interface
    } else {
      TypeKind::Alias
    };
    Self {
      name,
      source,
      schema,
      kind,
    }
  }
}

/// A query parameter of an operation, with its wire name untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryParameter {
  pub name: String,
  pub description: Option<String>,
  pub required: bool,
  pub schema: Option<ObjectOrReference<Schema>>,
  /// Raw value of the `x-gocart-sdk-type` annotation.
  pub sdk_type: Option<String>,
}

impl QueryParameter {
  pub fn hint(&self) -> Option<SdkTypeHint> {
    self.sdk_type.as_deref().map(SdkTypeHint::parse)
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupKind {
  Include,
  Sort,
  Page,
  Filter,
  /// Any other `base[key]` family.
  Nested,
  /// A plain parameter rendered as a top-level property.
  Flat,
}

/// One leaf of a parameter group: `key` is the bracket content, or the parameter name for flat groups.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupField {
  pub key: String,
  pub parameter: QueryParameter,
}

impl GroupField {
  pub fn property_name(&self) -> String {
    to_camel_case(&self.key)
  }
}

/// String-literal union backing an `include` or `sort` group, e.g. `ListUsersParamsIncludeOption`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionType {
  pub name: String,
  pub values: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParameterGroup {
  pub name: String,
  pub kind: GroupKind,
  pub fields: Vec<GroupField>,
  /// Allowed values of an `include` or `sort` group. `None` renders as `string[]`.
  pub options: Option<OptionType>,
}

impl ParameterGroup {
  pub fn property_name(&self) -> String {
    to_camel_case(&self.name)
  }
}

/// Query-parameter interface of one GET operation.
#[derive(Debug, Clone, PartialEq)]
pub struct ParamDefinition {
  pub interface_name: String,
  pub is_list: bool,
  pub groups: Vec<ParameterGroup>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgumentKind {
  Path,
  Payload,
  Params,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MethodArgument {
  pub name: String,
  pub ty: TsType,
  pub kind: ArgumentKind,
}

impl MethodArgument {
  pub fn path(name: String) -> Self {
    Self {
      name,
      ty: TsType::String,
      kind: ArgumentKind::Path,
    }
  }

  pub fn signature(&self) -> String {
    match self.kind {
      ArgumentKind::Params => format!("{}: {} = {{}}", self.name, self.ty),
      ArgumentKind::Path | ArgumentKind::Payload => format!("{}: {}", self.name, self.ty),
    }
  }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RequestBodyDefinition {
  pub kind: RequestBodyKind,
  pub type_name: String,
  /// The payload schema with any top-level `$ref` followed.
  pub schema: Schema,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResponseDefinition {
  pub kind: ResponseKind,
  pub ty: TsType,
  pub schema: Option<Schema>,
}

impl ResponseDefinition {
  pub fn empty() -> Self {
    Self {
      kind: ResponseKind::Empty,
      ty: TsType::Void,
      schema: None,
    }
  }
}

/// Everything needed to synthesize one client method.
#[derive(Debug, Clone, PartialEq, bon::Builder)]
pub struct MethodDefinition {
  #[builder(into)]
  pub name: String,
  pub method: Method,
  pub path: PathTemplate,
  #[builder(default)]
  pub arguments: Vec<MethodArgument>,
  pub response: ResponseDefinition,
  pub request_body: Option<RequestBodyDefinition>,
  #[builder(default)]
  pub param_groups: Vec<ParameterGroup>,
  /// Keys of `_embedded` objects passed to `toApiType`.
  #[builder(default)]
  pub embedded_objects: Vec<String>,
  pub summary: Option<String>,
}

impl MethodDefinition {
  pub fn is_list(&self) -> bool {
    self.name.starts_with("list")
  }

  pub fn payload(&self) -> Option<&MethodArgument> {
    self.arguments.iter().find(|arg| arg.kind == ArgumentKind::Payload)
  }

  pub fn params(&self) -> Option<&MethodArgument> {
    self.arguments.iter().find(|arg| arg.kind == ArgumentKind::Params)
  }
}
