use strum::Display;

use super::ast::{MethodDefinition, ParamDefinition, TypeDefinition, TypeKind};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GenerationStats {
  pub types_generated: usize,
  pub interfaces_generated: usize,
  pub type_aliases_generated: usize,
  pub param_interfaces_generated: usize,
  pub option_types_generated: usize,
  pub methods_generated: usize,
  pub cycles_detected: usize,
  pub cycle_details: Vec<Vec<String>>,
  pub warnings: Vec<GenerationWarning>,
}

impl GenerationStats {
  pub fn record_type(&mut self, definition: &TypeDefinition) {
    self.types_generated += 1;
    match definition.kind {
      TypeKind::Interface => self.interfaces_generated += 1,
      TypeKind::Alias => self.type_aliases_generated += 1,
    }
  }

  pub fn record_types(&mut self, definitions: &[TypeDefinition]) {
    for definition in definitions {
      self.record_type(definition);
    }
  }

  pub fn record_params(&mut self, definitions: &[ParamDefinition]) {
    self.param_interfaces_generated += definitions.len();
  }

  pub fn record_option_types(&mut self, count: usize) {
    self.option_types_generated += count;
  }

  pub fn record_methods(&mut self, methods: &[MethodDefinition]) {
    self.methods_generated += methods.len();
  }

  pub fn record_cycle(&mut self, cycle: Vec<String>) {
    self.cycles_detected += 1;
    self.cycle_details.push(cycle);
  }

  pub fn record_cycles(&mut self, cycles: Vec<Vec<String>>) {
    for cycle in cycles {
      self.record_cycle(cycle);
    }
  }

  pub fn record_warnings(&mut self, warnings: impl IntoIterator<Item = GenerationWarning>) {
    self.warnings.extend(warnings);
  }
}

/// Non-fatal findings. Generation continues with a permissive fallback.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum GenerationWarning {
  #[strum(to_string = "Type '{name}' from {dropped} collides with an earlier definition from {kept}; it was skipped")]
  TypeNameCollision { name: String, kept: String, dropped: String },
  #[strum(to_string = "[{interface}] 'include' has no enum; using the default relationship list")]
  IncludeFallback { interface: String },
  #[strum(to_string = "[{interface}] option '{value}' does not map back to its wire name")]
  OptionRoundTrip { interface: String, value: String },
  #[strum(to_string = "{context}: reference '{reference}' does not name a known schema")]
  DanglingReference { context: String, reference: String },
  #[strum(to_string = "[{operation_id}] {message}")]
  OperationSpecific { operation_id: String, message: String },
}

impl GenerationWarning {
  pub fn is_skipped_item(&self) -> bool {
    matches!(self, Self::TypeNameCollision { .. })
  }
}
