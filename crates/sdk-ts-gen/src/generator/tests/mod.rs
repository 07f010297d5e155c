mod filters;
mod schema_graph;
pub(crate) mod support;
