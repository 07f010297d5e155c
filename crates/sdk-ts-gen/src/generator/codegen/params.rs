use std::collections::BTreeSet;

use inflections::case::to_title_case;
use itertools::Itertools;

use super::{CodeWriter, ImportAccumulator};
use crate::generator::{
  ast::{GroupKind, OptionType, ParamDefinition, ParameterGroup, QueryParameter, TsLiteral, TsType},
  converter::{ResolveContext, TypeResolver},
};

pub(crate) const PARAMS_HEADER: &str = "// Auto-generated TypeScript types\n\n";

/// Shared helper types referenced by range filters and client options.
pub(crate) const PARAMS_PREAMBLE: &str = r"/**
 * ISO 4217 currency code, e.g. 'EUR'.
 */
export type CurrencyCode = string;

/**
 * Bounds of a date filter. Each bound is sent as an operator-prefixed ISO timestamp.
 */
export interface DateRange {
  eq?: Date;
  gte?: Date;
  lte?: Date;
  gt?: Date;
  lt?: Date;
}

/**
 * Bounds of a numeric filter. `min`/`max` are sent together as `min..max`.
 */
export interface NumberRange {
  eq?: number;
  gte?: number;
  lte?: number;
  gt?: number;
  lt?: number;
  min?: number;
  max?: number;
}

/**
 * Bounds of a monetary filter, sent as `CUR:<bound>`.
 */
export interface CurrencyRange {
  currency: CurrencyCode;
  eq?: number;
  gte?: number;
  lte?: number;
  gt?: number;
  lt?: number;
  min?: number;
  max?: number;
}

/**
 * Retry policy for transient failures.
 */
export interface RetryOptions {
  /** Maximum number of attempts, including the first request. */
  maxAttempts?: number;
  /** Delay before the first retry, in milliseconds. */
  initialDelayMs?: number;
  /** Multiplier applied to the delay after each failed attempt. */
  backoffFactor?: number;
  /** HTTP status codes that trigger a retry. */
  retryOn?: number[];
}

";

const TOTAL_COUNT_DOC: &str = "Include the count of total items in the collection.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RenderedParams {
  pub source: String,
  pub option_types: usize,
}

/// Renders `params.ts`: helper types, one interface per GET operation, then every
/// option union sorted by name. Models from `types.ts` used by a field are imported.
pub(crate) fn render_params(
  resolver: &TypeResolver<'_>,
  definitions: &[ParamDefinition],
  model_names: &BTreeSet<String>,
) -> RenderedParams {
  let mut body = CodeWriter::new();
  let mut used = BTreeSet::new();

  for definition in definitions {
    render_interface(&mut body, resolver, definition, &mut used);
    body.blank();
  }

  let mut imports = ImportAccumulator::default();
  for name in used.into_iter().filter(|name| model_names.contains(name)) {
    imports.add_type(name);
  }

  let mut writer = CodeWriter::new();
  writer.raw(PARAMS_HEADER);
  if !imports.is_empty() {
    writer.raw(&imports.finish()).blank();
  }
  writer.raw(PARAMS_PREAMBLE).raw(&body.finish());

  let options: Vec<&OptionType> = definitions
    .iter()
    .flat_map(|def| &def.groups)
    .filter_map(|group| group.options.as_ref())
    .sorted_by(|a, b| a.name.cmp(&b.name))
    .dedup_by(|a, b| a.name == b.name)
    .collect();

  for option in &options {
    let union = TsType::union(option.values.iter().map(|value| TsType::Literal(TsLiteral::Str(value.clone()))));
    writer.line(format!("export type {} = {union};", option.name));
    writer.blank();
  }

  RenderedParams {
    source: writer.finish(),
    option_types: options.len(),
  }
}

fn render_interface(
  writer: &mut CodeWriter,
  resolver: &TypeResolver<'_>,
  definition: &ParamDefinition,
  used: &mut BTreeSet<String>,
) {
  writer.open(format!("export interface {} {{", definition.interface_name));

  let mut first = true;
  for group in &definition.groups {
    if !first {
      writer.blank();
    }
    first = false;
    render_group(writer, resolver, group, used);
  }

  if definition.is_list {
    if !first {
      writer.blank();
    }
    doc_block(writer, TOTAL_COUNT_DOC);
    writer.line("totalCount?: boolean;");
  }

  writer.close("}");
}

fn render_group(
  writer: &mut CodeWriter,
  resolver: &TypeResolver<'_>,
  group: &ParameterGroup,
  used: &mut BTreeSet<String>,
) {
  let property = group.property_name();

  match group.kind {
    GroupKind::Include | GroupKind::Sort => {
      doc_block(writer, &group_doc(&group.name));
      let element = group.options.as_ref().map_or("string", |option| option.name.as_str());
      writer.line(format!("{property}?: {element}[];"));
    }
    GroupKind::Flat => {
      let Some(field) = group.fields.first() else {
        return;
      };
      let description = field.parameter.description.as_deref().map(str::trim).filter(|d| !d.is_empty());
      doc_block(writer, &description.map_or_else(|| group_doc(&group.name), ToString::to_string));
      let marker = if field.parameter.required { "" } else { "?" };
      let ty = field_type(resolver, &field.parameter);
      ty.collect_named(used);
      writer.line(format!("{property}{marker}: {ty};"));
    }
    GroupKind::Page | GroupKind::Filter | GroupKind::Nested => {
      doc_block(writer, &group_doc(&group.name));
      writer.open(format!("{property}?: {{"));
      for field in &group.fields {
        if let Some(description) = field.parameter.description.as_deref().map(str::trim)
          && !description.is_empty()
        {
          doc_block(writer, description);
        }
        let marker = if field.parameter.required { "" } else { "?" };
        let ty = field_type(resolver, &field.parameter);
        ty.collect_named(used);
        writer.line(format!("{}{marker}: {ty};", field.property_name()));
      }
      writer.close("};");
    }
  }
}

fn group_doc(name: &str) -> String {
  format!("{} for the API.", to_title_case(name))
}

fn doc_block(writer: &mut CodeWriter, text: &str) {
  writer.line("/**");
  for line in text.lines() {
    writer.line(format!(" * {}", line.trim_end()).trim_end());
  }
  writer.line(" */");
}

/// Declared type of one parameter: the SDK-type hint when present, else the schema type.
pub(crate) fn field_type(resolver: &TypeResolver<'_>, parameter: &QueryParameter) -> TsType {
  if let Some(hint) = parameter.hint() {
    return hint.ts_type();
  }

  let Some(schema_ref) = parameter.schema.as_ref() else {
    return TsType::Any;
  };

  let ty = resolver.resolve(schema_ref, ResolveContext::Parameter).ty;
  let nullable = resolver
    .graph()
    .resolve(schema_ref)
    .is_some_and(|schema| schema.is_nullable());
  if nullable { ty.nullable() } else { ty }
}
