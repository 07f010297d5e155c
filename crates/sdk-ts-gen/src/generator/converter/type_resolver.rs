use std::collections::BTreeSet;

use crate::{
  generator::{
    ast::{TsLiteral, TsProperty, TsType},
    errors::{GenerationError, GenerationResult},
    schema_graph::SchemaGraph,
  },
  naming::identifiers::{ref_name, to_camel_case, to_pascal_case},
  openapi::{ObjectOrReference, Schema, SchemaType},
};

pub(crate) const EMBEDDED_PROPERTY: &str = "_embedded";

/// Call site of a resolution. Only response typing turns `date`/`date-time` strings into `Date`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ResolveContext {
  Model,
  Parameter,
  Response,
}

/// A resolved type plus every named model it mentions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ResolvedType {
  pub ty: TsType,
  pub references: BTreeSet<String>,
}

pub(crate) struct TypeResolver<'a> {
  graph: &'a SchemaGraph,
}

impl<'a> TypeResolver<'a> {
  pub(crate) fn new(graph: &'a SchemaGraph) -> Self {
    Self { graph }
  }

  pub(crate) fn graph(&self) -> &'a SchemaGraph {
    self.graph
  }

  pub(crate) fn resolve(&self, schema_ref: &ObjectOrReference<Schema>, context: ResolveContext) -> ResolvedType {
    let mut references = BTreeSet::new();
    let ty = self.type_of(schema_ref, context, &mut references);
    ResolvedType { ty, references }
  }

  pub(crate) fn resolve_schema(&self, schema: &Schema, context: ResolveContext) -> ResolvedType {
    let mut references = BTreeSet::new();
    let ty = self.schema_type(schema, context, &mut references);
    ResolvedType { ty, references }
  }

  /// Properties of a named object type, `_embedded` children promoted to the top level.
  /// An `_embedded` that cannot be resolved aborts generation for the type.
  pub(crate) fn interface_properties(
    &self,
    type_name: &str,
    schema: &Schema,
    references: &mut BTreeSet<String>,
  ) -> GenerationResult<Vec<TsProperty>> {
    self
      .object_properties(schema, ResolveContext::Model, references)
      .map_err(|reference| GenerationError::UnresolvedReference {
        context: format!("embedded properties of '{type_name}'"),
        reference,
      })
  }

  fn type_of(
    &self,
    schema_ref: &ObjectOrReference<Schema>,
    context: ResolveContext,
    references: &mut BTreeSet<String>,
  ) -> TsType {
    match schema_ref {
      ObjectOrReference::Ref { ref_path } => {
        let name = to_pascal_case(ref_name(ref_path));
        references.insert(name.clone());
        TsType::Named(name)
      }
      ObjectOrReference::Object(schema) => self.schema_type(schema, context, references),
    }
  }

  fn schema_type(&self, schema: &Schema, context: ResolveContext, references: &mut BTreeSet<String>) -> TsType {
    if !schema.enum_values.is_empty() {
      return TsType::union(
        schema
          .enum_values
          .iter()
          .map(|value| TsType::Literal(TsLiteral::from(value))),
      );
    }

    if !schema.one_of.is_empty() || !schema.any_of.is_empty() {
      let variants = schema.one_of.iter().chain(&schema.any_of);
      return TsType::union(variants.map(|variant| self.type_of(variant, context, references)));
    }

    if !schema.all_of.is_empty() {
      let parts = schema
        .all_of
        .iter()
        .map(|part| self.type_of(part, context, references))
        .collect();
      return TsType::intersection(parts);
    }

    match schema.schema_type.as_ref().map(|set| set.types()) {
      Some([single]) => self.scalar_type(*single, schema, context, references),
      Some(types) if !types.is_empty() => TsType::union(
        types
          .iter()
          .map(|ty| self.scalar_type(*ty, schema, context, references))
          .collect::<Vec<_>>(),
      ),
      _ if !schema.properties.is_empty() => self.inline_object(schema, context, references),
      _ => TsType::Any,
    }
  }

  fn scalar_type(
    &self,
    ty: SchemaType,
    schema: &Schema,
    context: ResolveContext,
    references: &mut BTreeSet<String>,
  ) -> TsType {
    match ty {
      SchemaType::Integer | SchemaType::Number => TsType::Number,
      SchemaType::String => match schema.format.as_deref() {
        Some("binary") => TsType::Blob,
        Some("date" | "date-time") if context == ResolveContext::Response => TsType::Date,
        _ => TsType::String,
      },
      SchemaType::Boolean => TsType::Boolean,
      SchemaType::Null => TsType::Null,
      SchemaType::Array => match schema.items.as_deref() {
        Some(items) => TsType::array(self.type_of(items, context, references)),
        None => TsType::array(TsType::Any),
      },
      SchemaType::Object if !schema.properties.is_empty() => self.inline_object(schema, context, references),
      SchemaType::Object | SchemaType::Unknown => TsType::Any,
    }
  }

  /// Inline objects use the same property rules as named interfaces. An unresolvable
  /// `_embedded` here only drops the promoted members.
  fn inline_object(&self, schema: &Schema, context: ResolveContext, references: &mut BTreeSet<String>) -> TsType {
    match self.object_properties(schema, context, references) {
      Ok(properties) => TsType::Object(properties),
      Err(_) => TsType::Object(self.own_properties(schema, context, references)),
    }
  }

  fn object_properties(
    &self,
    schema: &Schema,
    context: ResolveContext,
    references: &mut BTreeSet<String>,
  ) -> Result<Vec<TsProperty>, String> {
    let mut properties = self.own_properties(schema, context, references);

    if let Some(embedded_ref) = schema.properties.get(EMBEDDED_PROPERTY) {
      let embedded = self
        .graph
        .resolve(embedded_ref)
        .ok_or_else(|| embedded_ref.ref_path().unwrap_or(EMBEDDED_PROPERTY).to_string())?;

      for (name, property) in &embedded.properties {
        let camel = to_camel_case(name);
        if properties.iter().any(|existing| existing.name == camel) {
          continue;
        }

        let optional = !embedded.is_required(name);
        let nullable = self.graph.resolve(property).is_some_and(Schema::is_nullable);
        let ty = self.type_of(property, context, references);
        let ty = if optional && nullable { ty.nullable() } else { ty };
        properties.push(TsProperty::new(camel, ty, optional));
      }
    }

    Ok(properties)
  }

  /// Declared properties in name order. Optional members take `| null` from the owning schema.
  fn own_properties(
    &self,
    schema: &Schema,
    context: ResolveContext,
    references: &mut BTreeSet<String>,
  ) -> Vec<TsProperty> {
    let owner_nullable = schema.is_nullable();

    schema
      .properties
      .iter()
      .filter(|(name, _)| name.as_str() != EMBEDDED_PROPERTY)
      .map(|(name, property)| {
        let optional = !schema.is_required(name);
        let ty = self.type_of(property, context, references);
        let ty = if optional && owner_nullable { ty.nullable() } else { ty };
        TsProperty::new(to_camel_case(name), ty, optional)
      })
      .collect()
  }
}
