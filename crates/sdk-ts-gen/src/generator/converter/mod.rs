pub(crate) mod methods;
pub(crate) mod parameters;
pub(crate) mod requests;
pub(crate) mod responses;
pub(crate) mod type_resolver;
mod types;

#[cfg(test)]
mod tests;

pub(crate) use type_resolver::{ResolveContext, TypeResolver};

use super::{
  ast::{MethodDefinition, ParamDefinition, TypeDefinition},
  errors::GenerationResult,
  metrics::GenerationWarning,
  schema_graph::SchemaGraph,
};

/// Intermediate model of the whole client: models, params interfaces and methods.
#[derive(Debug, Clone)]
pub(crate) struct ConvertedApi {
  pub types: Vec<TypeDefinition>,
  pub params: Vec<ParamDefinition>,
  pub methods: Vec<MethodDefinition>,
  pub warnings: Vec<GenerationWarning>,
}

pub(crate) fn convert(graph: &SchemaGraph) -> GenerationResult<ConvertedApi> {
  let resolver = TypeResolver::new(graph);
  let mut warnings = graph.warnings().to_vec();

  let types = types::type_definitions(graph, &mut warnings);
  let params = parameters::param_definitions(graph, &mut warnings);
  let methods = methods::method_definitions(&resolver, &mut warnings)?;

  Ok(ConvertedApi {
    types,
    params,
    methods,
    warnings,
  })
}
