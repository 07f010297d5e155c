use std::collections::{BTreeMap, BTreeSet};

use super::CodeWriter;
use crate::generator::{
  ast::{TypeDefinition, TypeKind},
  converter::{ResolveContext, TypeResolver},
  errors::GenerationResult,
  metrics::GenerationWarning,
};

pub(crate) const TYPES_HEADER: &str = "// Auto-generated TypeScript types\n\n";

/// Renders `types.ts`: one exported declaration per definition, in definition order.
///
/// References to names that no definition provides are reported once per declaring type.
pub(crate) fn render_types(
  resolver: &TypeResolver<'_>,
  definitions: &[TypeDefinition],
  warnings: &mut Vec<GenerationWarning>,
) -> GenerationResult<String> {
  let mut writer = CodeWriter::new();
  writer.raw(TYPES_HEADER);

  let defined: BTreeSet<&str> = definitions.iter().map(|def| def.name.as_str()).collect();
  let mut references: BTreeMap<&str, BTreeSet<String>> = BTreeMap::new();

  for definition in definitions {
    let refs = references.entry(definition.name.as_str()).or_default();
    render_definition(&mut writer, resolver, definition, refs)?;
    writer.blank();
  }

  for (owner, refs) in references {
    for reference in refs.into_iter().filter(|name| !defined.contains(name.as_str())) {
      warnings.push(GenerationWarning::DanglingReference {
        context: owner.to_string(),
        reference,
      });
    }
  }

  Ok(writer.finish())
}

fn render_definition(
  writer: &mut CodeWriter,
  resolver: &TypeResolver<'_>,
  definition: &TypeDefinition,
  references: &mut BTreeSet<String>,
) -> GenerationResult<()> {
  if let Some(description) = definition.schema.description.as_deref().map(str::trim)
    && !description.is_empty()
  {
    writer.line("/**");
    for line in description.lines() {
      writer.line(format!(" * {}", line.trim_end()).trim_end());
    }
    writer.line(" */");
  }

  match definition.kind {
    TypeKind::Interface => {
      let properties = resolver.interface_properties(&definition.name, &definition.schema, references)?;
      writer.open(format!("export interface {} {{", definition.name));
      for property in properties {
        writer.line(format!("{property};"));
      }
      writer.close("}");
    }
    TypeKind::Alias => {
      let resolved = resolver.resolve_schema(&definition.schema, ResolveContext::Model);
      references.extend(resolved.references);
      writer.line(format!("export type {} = {};", definition.name, resolved.ty));
    }
  }

  Ok(())
}
