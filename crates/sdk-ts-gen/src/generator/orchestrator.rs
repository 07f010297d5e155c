//! Entry point of the generation pipeline.
//!
//! ```no_run
//! # async fn example() -> anyhow::Result<()> {
//! let document = SpecLoader::open(Path::new("openapi.yaml")).await?.parse()?;
//! let config = GeneratorConfig::builder().class_name("StoreSDK").build();
//! let output = Orchestrator::new(document, config).generate()?;
//! println!("{} methods", output.stats.methods_generated);
//! # Ok(())
//! # }
//! ```

use std::collections::BTreeSet;

use super::{
  codegen::{
    GeneratedFiles,
    client::{ClientOptions, render_client},
    models::render_types,
    params::render_params,
  },
  converter::{self, TypeResolver},
  errors::GenerationResult,
  metrics::GenerationStats,
  schema_graph::SchemaGraph,
};
use crate::openapi::Document;

pub const DEFAULT_CLASS_NAME: &str = "GoCartSDK";
pub const DEFAULT_SDK_VERSION: &str = "unset";

#[derive(Debug, Clone, bon::Builder)]
pub struct GeneratorConfig {
  #[builder(into, default = DEFAULT_CLASS_NAME.to_string())]
  pub class_name: String,
  /// Constructor default for `baseUrl`. Falls back to the first server of the document.
  #[builder(into)]
  pub base_url: Option<String>,
  /// Value sent in the `x-gocart-sdk-version` header.
  #[builder(into, default = DEFAULT_SDK_VERSION.to_string())]
  pub sdk_version: String,
}

impl Default for GeneratorConfig {
  fn default() -> Self {
    Self::builder().build()
  }
}

#[derive(Debug, Clone)]
pub struct GeneratedOutput {
  pub files: GeneratedFiles,
  pub stats: GenerationStats,
}

pub struct Orchestrator {
  document: Document,
  config: GeneratorConfig,
}

impl Orchestrator {
  pub fn new(document: Document, config: GeneratorConfig) -> Self {
    Self { document, config }
  }

  /// Runs the whole pipeline and renders `types.ts`, `params.ts` and `sdk.ts`.
  ///
  /// Nothing is returned on a fatal error, so callers never see partial output.
  pub fn generate(self) -> GenerationResult<GeneratedOutput> {
    let Self { document, config } = self;
    let mut stats = GenerationStats::default();

    let graph = SchemaGraph::new(document)?;
    stats.record_cycles(graph.detect_cycles());

    let api = converter::convert(&graph)?;
    let resolver = TypeResolver::new(&graph);
    let mut warnings = api.warnings;

    let types = render_types(&resolver, &api.types, &mut warnings)?;
    stats.record_types(&api.types);

    let model_names: BTreeSet<String> = api.types.iter().map(|def| def.name.clone()).collect();
    let param_names: BTreeSet<String> = api.params.iter().map(|def| def.interface_name.clone()).collect();

    let params = render_params(&resolver, &api.params, &model_names);
    stats.record_params(&api.params);
    stats.record_option_types(params.option_types);

    let base_url = config
      .base_url
      .as_deref()
      .or_else(|| graph.default_server())
      .unwrap_or_default();

    let sdk = render_client(
      &graph,
      &api.methods,
      &model_names,
      &param_names,
      ClientOptions {
        class_name: &config.class_name,
        base_url,
        sdk_version: &config.sdk_version,
      },
    );
    stats.record_methods(&api.methods);
    stats.record_warnings(warnings);

    Ok(GeneratedOutput {
      files: GeneratedFiles {
        sdk,
        types,
        params: params.source,
      },
      stats,
    })
  }
}
