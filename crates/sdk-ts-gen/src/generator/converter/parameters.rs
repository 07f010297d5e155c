use std::sync::LazyLock;

use http::Method;
use indexmap::IndexMap;
use itertools::Itertools;
use regex::Regex;

use crate::{
  generator::{
    ast::{GroupField, GroupKind, OptionType, ParamDefinition, ParameterGroup, QueryParameter},
    metrics::GenerationWarning,
    schema_graph::{OperationEntry, SchemaGraph},
  },
  naming::identifiers::{params_interface_name, to_camel_case, to_pascal_case, to_snake_case},
  openapi::Parameter,
};

static BRACKET_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^([^\[\]]+)\[([^\[\]]+)\]$").unwrap());

/// Relationship names offered when an `include` parameter declares no enum.
pub(crate) const DEFAULT_INCLUDE_OPTIONS: [&str; 4] = ["parent", "parents", "children", "attributes"];

/// Splits `base[key]` into its parts. Anything else yields `None`.
pub(crate) fn bracket_key(name: &str) -> Option<(&str, &str)> {
  let captures = BRACKET_RE.captures(name)?;
  let base = captures.get(1)?.as_str();
  let key = captures.get(2)?.as_str();
  Some((base, key))
}

/// Rebuilds the wire name of a grouped field.
pub(crate) fn wire_name(base: &str, key: &str) -> String {
  format!("{base}[{key}]")
}

impl From<&Parameter> for QueryParameter {
  fn from(param: &Parameter) -> Self {
    Self {
      name: param.name.clone(),
      description: param.description.clone(),
      required: param.required,
      schema: param.schema.clone(),
      sdk_type: param.sdk_type.clone(),
    }
  }
}

pub(crate) fn query_parameters(entry: &OperationEntry) -> Vec<QueryParameter> {
  entry.query_parameters().map(QueryParameter::from).collect()
}

/// Groups query parameters by their bracket base, in lexical group order.
///
/// Fields keep declaration order. Option unions are only computed when `interface_name`
/// is given, since they are named after the owning params interface.
pub(crate) fn group_parameters(
  graph: &SchemaGraph,
  params: &[QueryParameter],
  interface_name: Option<&str>,
  warnings: &mut Vec<GenerationWarning>,
) -> Vec<ParameterGroup> {
  let mut grouped: IndexMap<String, (bool, Vec<GroupField>)> = IndexMap::new();

  for param in params {
    let (base, key, bracketed) = match bracket_key(&param.name) {
      Some((base, key)) => (base.to_string(), key.to_string(), true),
      None => (param.name.clone(), param.name.clone(), false),
    };

    let entry = grouped.entry(base).or_insert_with(|| (false, vec![]));
    entry.0 |= bracketed;
    entry.1.push(GroupField {
      key,
      parameter: param.clone(),
    });
  }

  grouped
    .into_iter()
    .sorted_by(|(a, _), (b, _)| a.cmp(b))
    .map(|(name, (bracketed, fields))| {
      let kind = group_kind(&name, bracketed);
      let options = interface_name.and_then(|interface| option_type(graph, interface, &name, kind, &fields, warnings));
      ParameterGroup {
        name,
        kind,
        fields,
        options,
      }
    })
    .collect()
}

fn group_kind(name: &str, bracketed: bool) -> GroupKind {
  match (name, bracketed) {
    ("include", _) => GroupKind::Include,
    ("sort", _) => GroupKind::Sort,
    ("page", true) => GroupKind::Page,
    ("filter", true) => GroupKind::Filter,
    (_, true) => GroupKind::Nested,
    (_, false) => GroupKind::Flat,
  }
}

/// Collects camelCased string enum values across a group's fields.
///
/// A field without an enum in an `include` group contributes the default relationship list.
fn option_type(
  graph: &SchemaGraph,
  interface_name: &str,
  group_name: &str,
  kind: GroupKind,
  fields: &[GroupField],
  warnings: &mut Vec<GenerationWarning>,
) -> Option<OptionType> {
  if !matches!(kind, GroupKind::Include | GroupKind::Sort) {
    return None;
  }

  let mut values: Vec<String> = vec![];
  let mut used_fallback = false;

  for field in fields {
    let raw_values: Vec<&str> = field
      .parameter
      .schema
      .as_ref()
      .and_then(|schema| graph.resolve(schema))
      .map(|schema| {
        schema
          .enum_values_or_items()
          .iter()
          .filter_map(|value| value.as_str())
          .collect()
      })
      .unwrap_or_default();

    let mut declared = Vec::with_capacity(raw_values.len());
    for raw in raw_values {
      let value = option_value(raw);
      if !round_trips(raw, &value) {
        warnings.push(GenerationWarning::OptionRoundTrip {
          interface: interface_name.to_string(),
          value: raw.to_string(),
        });
      }
      declared.push(value);
    }

    if !declared.is_empty() {
      values.extend(declared);
    } else if kind == GroupKind::Include {
      values = DEFAULT_INCLUDE_OPTIONS.iter().map(ToString::to_string).collect();
      used_fallback = true;
    }
  }

  if used_fallback {
    warnings.push(GenerationWarning::IncludeFallback {
      interface: interface_name.to_string(),
    });
  }

  let values: Vec<String> = values.into_iter().unique().collect();
  if values.is_empty() {
    return None;
  }

  Some(OptionType {
    name: format!("{interface_name}{}Option", to_pascal_case(group_name)),
    values,
  })
}

/// Client spelling of an `include`/`sort` value: each dot segment camelCased, a leading
/// `-` (descending sort) kept.
pub(crate) fn option_value(raw: &str) -> String {
  let (prefix, rest) = match raw.strip_prefix('-') {
    Some(rest) => ("-", rest),
    None => ("", raw),
  };
  let segments = rest.split('.').map(to_camel_case).join(".");
  format!("{prefix}{segments}")
}

/// The runtime snake_cases each segment before sending, so the value must survive that.
fn round_trips(raw: &str, value: &str) -> bool {
  let raw = raw.trim_start_matches('-');
  let value = value.trim_start_matches('-');
  raw.split('.').eq(value.split('.').map(to_snake_case))
}

/// Builds the params interface of every GET operation, in operation order.
pub(crate) fn param_definitions(graph: &SchemaGraph, warnings: &mut Vec<GenerationWarning>) -> Vec<ParamDefinition> {
  graph
    .operations()
    .iter()
    .filter(|entry| entry.method == Method::GET)
    .map(|entry| param_definition(graph, entry, warnings))
    .collect()
}

pub(crate) fn param_definition(
  graph: &SchemaGraph,
  entry: &OperationEntry,
  warnings: &mut Vec<GenerationWarning>,
) -> ParamDefinition {
  let operation_id = entry.operation_id.as_deref().filter(|id| !id.is_empty());
  let interface_name = params_interface_name(entry.method.as_str(), &entry.path, operation_id);
  let groups = group_parameters(graph, &query_parameters(entry), Some(&interface_name), warnings);

  ParamDefinition {
    is_list: operation_id.is_some_and(|id| id.starts_with("list")),
    interface_name,
    groups,
  }
}
