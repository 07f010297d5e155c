use std::collections::BTreeSet;

use super::{CodeWriter, ImportAccumulator, methods::render_method};
use crate::generator::{ast::{MethodDefinition, escape_single_quoted}, schema_graph::SchemaGraph};

pub(crate) const SDK_HEADER: &str = "// Auto-generated TypeScript SDK\n// Do not modify manually.\n\n";

/// Error body type a document may declare itself. Otherwise the runtime library's is used.
pub(crate) const DOCUMENT_ERROR_TYPE: &str = "APIError";
pub(crate) const RUNTIME_ERROR_TYPE: &str = "ApiErrorResponse";

const RUNTIME_IMPORTS: &str = "import { InMemoryContext } from './context';
import { toApiType, toClientType } from './utils';
import { RequestInterceptor, ResponseInterceptor, InterceptorManager } from './interceptors';
";

const FORMAT_FILTER_VALUE: [&str; 9] = [
  "private formatFilterValue(value: unknown): string {",
  "  if (value instanceof Date) {",
  "    return value.toISOString();",
  "  }",
  "  if (Array.isArray(value)) {",
  "    return value.map((item) => (item instanceof Date ? item.toISOString() : String(item))).join(',');",
  "  }",
  "  return String(value);",
  "}",
];

#[derive(Debug, Clone, Copy)]
pub(crate) struct ClientOptions<'a> {
  pub class_name: &'a str,
  pub base_url: &'a str,
  pub sdk_version: &'a str,
}

/// Renders `sdk.ts`: imports, the version constant and the client class with one
/// method per definition.
pub(crate) fn render_client(
  graph: &SchemaGraph,
  methods: &[MethodDefinition],
  model_names: &BTreeSet<String>,
  param_names: &BTreeSet<String>,
  options: ClientOptions<'_>,
) -> String {
  let document_error = model_names.contains(DOCUMENT_ERROR_TYPE);
  let error_type = if document_error {
    DOCUMENT_ERROR_TYPE
  } else {
    RUNTIME_ERROR_TYPE
  };

  let mut imports = ImportAccumulator::default();
  let mut used = BTreeSet::new();
  for method in methods {
    method.response.ty.collect_named(&mut used);
    for argument in &method.arguments {
      argument.ty.collect_named(&mut used);
    }
  }
  for name in used {
    if model_names.contains(&name) {
      imports.add_type(name);
    } else if param_names.contains(&name) {
      imports.add_param(name);
    }
  }
  if document_error {
    imports.add_type(DOCUMENT_ERROR_TYPE);
  }

  let mut writer = CodeWriter::new();
  writer.raw(SDK_HEADER);
  if !imports.is_empty() {
    writer.raw(&imports.finish()).blank();
  }
  writer.raw(RUNTIME_IMPORTS);
  if document_error {
    writer.line("import { ApiError } from './error';");
  } else {
    writer.line(format!("import {{ ApiError, {RUNTIME_ERROR_TYPE} }} from './error';"));
  }
  writer.blank();
  writer.line(format!("const SDK_VERSION = '{}';", escape_single_quoted(options.sdk_version)));
  writer.blank();

  writer.open(format!("export class {} {{", options.class_name));
  writer.line("private baseUrl: string;");
  writer.blank();
  writer.line("public context: InMemoryContext;");
  writer.open("public interceptors: {");
  writer.line("request: InterceptorManager<RequestInterceptor>;");
  writer.line("response: InterceptorManager<ResponseInterceptor>;");
  writer.close("};");
  writer.blank();

  writer.open(format!(
    "constructor(baseUrl: string = '{}') {{",
    escape_single_quoted(options.base_url)
  ));
  writer.line("this.baseUrl = baseUrl;");
  writer.line("this.context = new InMemoryContext();");
  writer.open("this.interceptors = {");
  writer.line("request: new InterceptorManager<RequestInterceptor>(),");
  writer.line("response: new InterceptorManager<ResponseInterceptor>()");
  writer.close("};");
  writer.close("}");

  for method in methods {
    writer.blank();
    writer.raw(&render_method(graph, method, error_type));
  }

  writer.blank();
  for line in FORMAT_FILTER_VALUE {
    writer.line(line);
  }
  writer.close("}");

  writer.finish()
}
