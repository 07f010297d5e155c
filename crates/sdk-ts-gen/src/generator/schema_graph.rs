use std::collections::{BTreeMap, BTreeSet};

use http::Method;
use petgraph::{algo::kosaraju_scc, graphmap::DiGraphMap};

use super::{
  errors::{GenerationError, GenerationResult},
  metrics::GenerationWarning,
};
use crate::{
  naming::identifiers::ref_name,
  openapi::{
    Components, Document, ObjectOrReference, Parameter, ParameterLocation, RequestBody, Response, Schema,
  },
};

/// Guards reference chains such as `A -> B -> A` between components.
const MAX_REF_DEPTH: usize = 32;

/// One operation with every parameter, request body and response reference resolved.
#[derive(Debug, Clone)]
pub(crate) struct OperationEntry {
  pub path: String,
  pub method: Method,
  pub operation_id: Option<String>,
  pub summary: Option<String>,
  pub parameters: Vec<Parameter>,
  pub request_body: Option<RequestBody>,
  pub responses: BTreeMap<String, Response>,
}

impl OperationEntry {
  pub(crate) fn query_parameters(&self) -> impl Iterator<Item = &Parameter> {
    self
      .parameters
      .iter()
      .filter(|param| param.location == ParameterLocation::Query)
  }

  pub(crate) fn operation_id(&self) -> GenerationResult<&str> {
    self
      .operation_id
      .as_deref()
      .filter(|id| !id.is_empty())
      .ok_or_else(|| GenerationError::MissingOperationId {
        method: self.method.to_string(),
        path: self.path.clone(),
      })
  }

  pub(crate) fn label(&self) -> String {
    format!("{} {}", self.method, self.path)
  }
}

/// Read-only view of a document: named schemas in an arena keyed by name, and
/// normalized operations. Schemas refer to each other only through names, so
/// cycles between components never become ownership cycles.
#[derive(Debug)]
pub(crate) struct SchemaGraph {
  schemas: BTreeMap<String, Schema>,
  operations: Vec<OperationEntry>,
  dependencies: BTreeMap<String, BTreeSet<String>>,
  servers: Vec<String>,
  warnings: Vec<GenerationWarning>,
}

impl SchemaGraph {
  pub(crate) fn new(document: Document) -> GenerationResult<Self> {
    if document.major_version() != Some(3) {
      return Err(GenerationError::UnsupportedVersion {
        version: document.openapi.clone(),
      });
    }

    let components = document.components.clone().unwrap_or_default();
    let mut graph = Self {
      schemas: BTreeMap::new(),
      operations: vec![],
      dependencies: BTreeMap::new(),
      servers: document.servers.iter().map(|server| server.url.clone()).collect(),
      warnings: vec![],
    };

    for (name, schema_ref) in &components.schemas {
      match resolve_named(&components.schemas, schema_ref, 0) {
        Some(schema) => {
          graph.schemas.insert(name.clone(), schema.clone());
        }
        None => graph.warnings.push(GenerationWarning::DanglingReference {
          context: format!("components.schemas.{name}"),
          reference: schema_ref.ref_path().unwrap_or_default().to_string(),
        }),
      }
    }

    graph.operations = collect_operations(&document, &components)?;
    graph.build_dependencies();

    Ok(graph)
  }

  /// Component schemas in lexical name order.
  pub(crate) fn schemas(&self) -> impl Iterator<Item = (&String, &Schema)> {
    self.schemas.iter()
  }

  pub(crate) fn operations(&self) -> &[OperationEntry] {
    &self.operations
  }

  pub(crate) fn default_server(&self) -> Option<&str> {
    self.servers.first().map(String::as_str)
  }

  pub(crate) fn warnings(&self) -> &[GenerationWarning] {
    &self.warnings
  }

  /// Follows a schema reference by name. Inline schemas resolve to themselves.
  pub(crate) fn resolve<'a>(&'a self, schema_ref: &'a ObjectOrReference<Schema>) -> Option<&'a Schema> {
    match schema_ref {
      ObjectOrReference::Ref { ref_path } => self.schemas.get(ref_name(ref_path)),
      ObjectOrReference::Object(schema) => Some(schema),
    }
  }

  fn build_dependencies(&mut self) {
    for (name, schema) in &self.schemas {
      let mut deps = BTreeSet::new();
      collect_schema_refs(schema, &mut deps);
      self.dependencies.insert(name.clone(), deps);
    }
  }

  /// Strongly connected groups of components that reference each other.
  pub(crate) fn detect_cycles(&self) -> Vec<Vec<String>> {
    let mut graph = DiGraphMap::<&str, ()>::new();
    for (node, deps) in &self.dependencies {
      graph.add_node(node.as_str());
      for dep in deps {
        if self.schemas.contains_key(dep) {
          graph.add_edge(node.as_str(), dep.as_str(), ());
        }
      }
    }

    let mut cycles: Vec<Vec<String>> = kosaraju_scc(&graph)
      .into_iter()
      .filter(|scc| scc.len() > 1 || graph.contains_edge(scc[0], scc[0]))
      .map(|scc| {
        let mut names: Vec<String> = scc.into_iter().map(String::from).collect();
        names.sort();
        names
      })
      .collect();
    cycles.sort();
    cycles
  }
}

fn resolve_named<'a>(
  schemas: &'a BTreeMap<String, ObjectOrReference<Schema>>,
  schema_ref: &'a ObjectOrReference<Schema>,
  depth: usize,
) -> Option<&'a Schema> {
  match schema_ref {
    ObjectOrReference::Object(schema) => Some(schema),
    ObjectOrReference::Ref { .. } if depth >= MAX_REF_DEPTH => None,
    ObjectOrReference::Ref { ref_path } => resolve_named(schemas, schemas.get(ref_name(ref_path))?, depth + 1),
  }
}

fn resolve_component<'a, T>(
  components: &'a BTreeMap<String, ObjectOrReference<T>>,
  item: &'a ObjectOrReference<T>,
  context: &str,
) -> GenerationResult<&'a T> {
  let mut current = item;
  for _ in 0..MAX_REF_DEPTH {
    match current {
      ObjectOrReference::Object(object) => return Ok(object),
      ObjectOrReference::Ref { ref_path } => match components.get(ref_name(ref_path)) {
        Some(next) => current = next,
        None => break,
      },
    }
  }

  Err(GenerationError::UnresolvedReference {
    context: context.to_string(),
    reference: item.ref_path().unwrap_or_default().to_string(),
  })
}

fn collect_operations(document: &Document, components: &Components) -> GenerationResult<Vec<OperationEntry>> {
  let mut entries = vec![];

  for (path, method, item, operation) in document.operations() {
    let context = format!("{method} {path}");

    let mut parameters: Vec<Parameter> = vec![];
    for param_ref in &operation.parameters {
      parameters.push(resolve_component(&components.parameters, param_ref, &context)?.clone());
    }

    let mut shared: Vec<Parameter> = vec![];
    for param_ref in &item.parameters {
      let param = resolve_component(&components.parameters, param_ref, &context)?;
      let overridden = parameters
        .iter()
        .any(|p| p.name == param.name && p.location == param.location);
      if !overridden {
        shared.push(param.clone());
      }
    }
    shared.extend(parameters);

    let request_body = operation
      .request_body
      .as_ref()
      .map(|body| resolve_component(&components.request_bodies, body, &context).cloned())
      .transpose()?;

    let mut responses = BTreeMap::new();
    for (status, response_ref) in &operation.responses {
      let response = resolve_component(&components.responses, response_ref, &context)?;
      responses.insert(status.clone(), response.clone());
    }

    entries.push(OperationEntry {
      path: path.to_string(),
      method,
      operation_id: operation.operation_id.clone(),
      summary: operation.summary.clone(),
      parameters: shared,
      request_body,
      responses,
    });
  }

  Ok(entries)
}

/// Collects every component name a schema points at, descending into inline schemas.
fn collect_schema_refs(schema: &Schema, deps: &mut BTreeSet<String>) {
  let children = schema
    .properties
    .values()
    .chain(schema.items.as_deref())
    .chain(&schema.one_of)
    .chain(&schema.any_of)
    .chain(&schema.all_of);

  for child in children {
    match child {
      ObjectOrReference::Ref { ref_path } => {
        deps.insert(ref_name(ref_path).to_string());
      }
      ObjectOrReference::Object(inline) => collect_schema_refs(inline, deps),
    }
  }
}
