use super::CodeWriter;
use crate::{
  generator::{
    ast::{GroupField, GroupKind, ParameterGroup, SdkTypeHint, escape_single_quoted},
    converter::parameters::wire_name,
  },
  naming::identifiers::is_valid_identifier,
};

/// Range bounds and the operator prefix each one is sent with.
pub(crate) const RANGE_OPERATORS: [(&str, &str); 5] = [("eq", "="), ("gte", ">="), ("lte", "<="), ("gt", ">"), ("lt", "<")];

const PARAMS: &str = "params";

/// Emits the `URLSearchParams` construction for a method's `params` argument and
/// declares `finalUrl`.
pub(crate) fn render_query(writer: &mut CodeWriter, groups: &[ParameterGroup]) {
  if groups.is_empty() {
    writer.line("let finalUrl = url;");
    return;
  }

  writer.line("const queryString = new URLSearchParams();");
  for group in groups {
    match group.kind {
      GroupKind::Filter => render_filters(writer, group),
      GroupKind::Sort => render_sort(writer, group),
      GroupKind::Include => render_include(writer, group),
      GroupKind::Page | GroupKind::Nested => render_nested(writer, group),
      GroupKind::Flat => render_flat(writer, group),
    }
  }
  writer.line("let finalUrl = queryString.toString() ? `${url}?${queryString.toString()}` : url;");
}

fn member(object: &str, property: &str) -> String {
  if is_valid_identifier(property) {
    format!("{object}.{property}")
  } else {
    format!("{object}[\"{property}\"]")
  }
}

fn quoted(value: &str) -> String {
  format!("'{}'", escape_single_quoted(value))
}

fn render_filters(writer: &mut CodeWriter, group: &ParameterGroup) {
  let container = member(PARAMS, &group.property_name());
  writer.open(format!("if ({container}) {{"));
  for field in &group.fields {
    let access = format!("{container}[\"{}\"]", field.property_name());
    let wire = quoted(&field_wire_name(group, field));
    if !render_range(writer, field, &access, &wire) {
      writer.open(format!("if ({access} !== undefined && {access} !== null) {{"));
      writer.line(format!("const value = {access};"));
      writer.line(format!("queryString.append({wire}, this.formatFilterValue(value));"));
      writer.close("}");
    }
  }
  writer.close("}");
}

/// A bracketed field is sent as `base[key]`. A plain parameter sharing the base keeps its own name.
fn field_wire_name(group: &ParameterGroup, field: &GroupField) -> String {
  if field.parameter.name == field.key {
    field.key.clone()
  } else {
    wire_name(&group.name, &field.key)
  }
}

/// Emits one entry per bound for range-hinted fields. Returns false for any other field.
fn render_range(writer: &mut CodeWriter, field: &GroupField, access: &str, wire: &str) -> bool {
  match field.parameter.hint() {
    Some(SdkTypeHint::DateRange) => render_date_range(writer, access, wire),
    Some(hint @ (SdkTypeHint::NumberRange | SdkTypeHint::CurrencyRange)) => {
      render_number_range(writer, access, wire, hint == SdkTypeHint::CurrencyRange);
    }
    _ => return false,
  }
  true
}

fn render_date_range(writer: &mut CodeWriter, access: &str, wire: &str) {
  writer.open(format!("if ({access}) {{"));
  writer.line(format!("const dateRange = {access};"));
  for (bound, operator) in RANGE_OPERATORS {
    writer.line(format!(
      "if (dateRange.{bound}) {{ queryString.append({wire}, `{operator}${{dateRange.{bound}.toISOString()}}`); }}"
    ));
  }
  writer.close("}");
}

fn render_number_range(writer: &mut CodeWriter, access: &str, wire: &str, with_currency: bool) {
  let (binding, value) = if with_currency {
    ("currencyRange", "`${range.currency}:${valueStr}`")
  } else {
    ("numberRange", "valueStr")
  };

  writer.open(format!("if ({access}) {{"));
  writer.line(format!("const {binding} = {access};"));
  writer.line(format!("const range = {binding};"));
  for (bound, operator) in RANGE_OPERATORS {
    writer.open(format!("if (range.{bound} !== undefined && range.{bound} !== null) {{"));
    writer.line(format!("const valueStr = `{operator}${{range.{bound}}}`;"));
    writer.line(format!("queryString.append({wire}, {value});"));
    writer.close("}");
  }
  writer.open("if (range.min !== undefined || range.max !== undefined) {");
  writer.line("const valueStr = `${range.min ?? ''}..${range.max ?? ''}`;");
  writer.line(format!("queryString.append({wire}, {value});"));
  writer.close("}");
  writer.close("}");
}

/// Sort keys are camelCase on the client and snake_case on the wire.
fn render_sort(writer: &mut CodeWriter, group: &ParameterGroup) {
  let access = member(PARAMS, &group.property_name());
  writer.open(format!("if ({access} !== undefined && {access} !== null) {{"));
  writer.line(format!(
    "queryString.append({}, {access}.map((v)=> v.replace(/([A-Z])/g, '_$1').toLowerCase()).join(','));",
    quoted(&group.name)
  ));
  writer.close("}");
}

/// Include paths keep their dots; each segment is converted back to snake_case.
fn render_include(writer: &mut CodeWriter, group: &ParameterGroup) {
  let access = member(PARAMS, &group.property_name());
  writer.open(format!("if ({access}) {{"));
  writer.open(format!("queryString.append({}, {access}.map((v) => {{", quoted(&group.name)));
  writer.open("return v.split('.').map(segment => {");
  writer.line("return segment.replace(/([a-z])([A-Z])/g, '$1_$2').toLowerCase();");
  writer.close("}).join('.');");
  writer.close("}).join(','));");
  writer.close("}");
}

fn render_nested(writer: &mut CodeWriter, group: &ParameterGroup) {
  let container = member(PARAMS, &group.property_name());
  writer.open(format!("if ({container}) {{"));
  for field in &group.fields {
    render_field(writer, field, &member(&container, &field.property_name()), &field_wire_name(group, field));
  }
  writer.close("}");
}

fn render_flat(writer: &mut CodeWriter, group: &ParameterGroup) {
  for field in &group.fields {
    render_field(writer, field, &member(PARAMS, &group.property_name()), &field.parameter.name);
  }
}

fn render_field(writer: &mut CodeWriter, field: &GroupField, access: &str, wire: &str) {
  if render_range(writer, field, access, &quoted(wire)) {
    return;
  }
  writer.open(format!("if ({access} !== undefined && {access} !== null) {{"));
  writer.line(format!("queryString.append({}, String({access}));", quoted(wire)));
  writer.close("}");
}
