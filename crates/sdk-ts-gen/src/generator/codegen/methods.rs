use super::{CodeWriter, query::render_query};
use crate::{
  generator::{
    ast::{MethodDefinition, RequestBodyDefinition, RequestBodyKind, ResponseKind, escape_single_quoted},
    schema_graph::SchemaGraph,
  },
  naming::identifiers::to_camel_case,
  openapi::SchemaType,
};

pub(crate) const VERSION_HEADER: &str = "x-gocart-sdk-version";
pub(crate) const TOTAL_COUNT_HEADER: &str = "Collection-Total";

/// Renders one async client method at class-member depth.
pub(crate) fn render_method(graph: &SchemaGraph, method: &MethodDefinition, error_type: &str) -> String {
  let mut writer = CodeWriter::with_depth(1);

  render_doc(&mut writer, method);

  let signature = method
    .arguments
    .iter()
    .map(|argument| argument.signature())
    .collect::<Vec<_>>()
    .join(", ");
  writer.open(format!(
    "public async {}({signature}): Promise<{}> {{",
    method.name, method.response.ty
  ));
  writer.line(format!("const url = `${{this.baseUrl}}{}`;", method.path.to_template_literal()));

  match &method.request_body {
    Some(body) if body.kind == RequestBodyKind::Multipart => render_multipart_body(&mut writer, graph, method, body),
    Some(_) => render_json_body(&mut writer, method),
    None => render_options(&mut writer, method, None),
  }

  if method.params().is_some() {
    if method.is_list() {
      writer.open("if (params.totalCount) {");
      writer.open("options.headers = {");
      writer.line("...options.headers,");
      writer.line(format!("'{TOTAL_COUNT_HEADER}': 'include'"));
      writer.close("}");
      writer.close("}");
    }
    render_query(&mut writer, &method.param_groups);
  } else {
    writer.line("let finalUrl = url;");
  }

  render_dispatch(&mut writer, error_type);
  render_decode(&mut writer, method.response.kind);

  writer.close("}");
  writer.finish()
}

fn render_doc(writer: &mut CodeWriter, method: &MethodDefinition) {
  writer.line("/**");
  writer.line(format!(" * {}", method.name));
  if let Some(summary) = method.summary.as_deref().map(str::trim)
    && !summary.is_empty()
  {
    writer.line(format!(" * {summary}"));
  }
  for argument in &method.arguments {
    writer.line(format!(" * @param {} {}", argument.name, argument.ty));
  }
  writer.line(format!(" * @returns Promise<{}>", method.response.ty));
  writer.line(" */");
}

fn payload_name(method: &MethodDefinition) -> &str {
  method.payload().map_or("req", |argument| argument.name.as_str())
}

fn render_json_body(writer: &mut CodeWriter, method: &MethodDefinition) {
  let keys = method
    .embedded_objects
    .iter()
    .map(|key| format!("'{}'", escape_single_quoted(key)))
    .collect::<Vec<_>>()
    .join(", ");
  writer.line(format!("const embeddedObjects: string[] = [{keys}];"));
  writer.line(format!("const body = toApiType({}, embeddedObjects);", payload_name(method)));
  render_options(writer, method, Some(RequestBodyKind::Json));
}

/// Appends every schema property in name order. Objects are JSON-encoded and binary
/// parts are passed through as-is.
fn render_multipart_body(
  writer: &mut CodeWriter,
  graph: &SchemaGraph,
  method: &MethodDefinition,
  body: &RequestBodyDefinition,
) {
  let payload = payload_name(method);
  writer.line("let formData = new FormData();");

  for (name, property) in &body.schema.properties {
    let access = format!("{payload}.{}", to_camel_case(name));
    let wire = escape_single_quoted(name);
    let resolved = graph.resolve(property);

    if resolved.is_some_and(|schema| schema.has_type(SchemaType::Object)) {
      writer.open(format!("if ({access}) {{"));
      writer.line(format!("formData.append('{wire}', JSON.stringify({access}));"));
      writer.close("}");
    } else if resolved.is_some_and(|schema| schema.is_binary()) {
      writer.open(format!("if ({access} !== undefined && {access} !== null) {{"));
      writer.line(format!("formData.append('{wire}', {access});"));
      writer.close("}");
    } else {
      writer.open(format!("if ({access} !== undefined && {access} !== null) {{"));
      writer.line(format!("formData.append('{wire}', String({access}));"));
      writer.close("}");
    }
  }

  render_options(writer, method, Some(RequestBodyKind::Multipart));
}

fn render_options(writer: &mut CodeWriter, method: &MethodDefinition, body: Option<RequestBodyKind>) {
  writer.open("let options: RequestInit = {");
  writer.line(format!("method: '{}',", method.method.as_str()));
  writer.open("headers: {");
  match body {
    Some(RequestBodyKind::Multipart) => writer.line("'Accept': 'application/json',"),
    Some(RequestBodyKind::Json) | None => writer.line("'Content-Type': 'application/json',"),
  };
  writer.line(format!("'{VERSION_HEADER}': SDK_VERSION,"));
  writer.close("},");
  match body {
    Some(RequestBodyKind::Json) => {
      writer.line("body: JSON.stringify(body),");
    }
    Some(RequestBodyKind::Multipart) => {
      writer.line("body: formData,");
    }
    None => {}
  }
  writer.close("};");
}

fn render_dispatch(writer: &mut CodeWriter, error_type: &str) {
  writer.line("options = this.context.setHttpRequestHeaders(options);");
  writer.open("for (const interceptor of this.interceptors.request.interceptors) {");
  writer.line("const result = await interceptor(options, finalUrl);");
  writer.open("if (result) {");
  writer.line("if (result.options) options = result.options;");
  writer.line("if (result.url) finalUrl = result.url;");
  writer.close("}");
  writer.close("}");
  writer.blank();

  writer.line("let response = await fetch(finalUrl, options);");
  writer.open("for (const interceptor of this.interceptors.response.interceptors) {");
  writer.line("const result = await interceptor(response, options, finalUrl);");
  writer.open("if (result) {");
  writer.line("response = result;");
  writer.close("}");
  writer.close("}");
  writer.blank();

  writer.open("if (!response.ok) {");
  writer.line(format!("const errMessage: {error_type} = await response.json();"));
  writer.line("throw new ApiError(errMessage.code, errMessage.message, errMessage.fieldErrors);");
  writer.close("}");
}

fn render_decode(writer: &mut CodeWriter, kind: ResponseKind) {
  match kind {
    ResponseKind::Json => {
      writer.line("const data = await response.json();");
      writer.line("return toClientType(data);");
    }
    ResponseKind::Html => {
      writer.line("// Handle HTML response");
      writer.line("const html = await response.text();");
      writer.line("return html;");
    }
    ResponseKind::Binary => {
      writer.line("const blob = await response.blob();");
      writer.line("return blob;");
    }
    ResponseKind::Text => {
      writer.line("const text = await response.text();");
      writer.line("return text;");
    }
    ResponseKind::Empty => {
      writer.line("return;");
    }
  }
}
