use std::path::Path;

use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Row, Table};

use crate::{
  naming::identifiers::to_method_name,
  openapi::Document,
  ui::{Colors, colors::IntoComfyColor, term_width},
  utils::spec::SpecLoader,
};

const MISSING_OPERATION_ID: &str = "<missing operationId>";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct OperationRow {
  /// Client method name, or `None` when the operation cannot be generated.
  pub method_name: Option<String>,
  pub method: String,
  pub path: String,
}

/// One row per operation, sorted by method name. Operations without an id sort last.
pub(crate) fn operation_rows(document: &Document) -> Vec<OperationRow> {
  let mut rows: Vec<OperationRow> = document
    .operations()
    .map(|(path, method, _, operation)| OperationRow {
      method_name: operation
        .operation_id
        .as_deref()
        .filter(|id| !id.is_empty())
        .map(to_method_name),
      method: method.to_string(),
      path: path.to_string(),
    })
    .collect();

  rows.sort_by(|a, b| {
    a.method_name
      .is_none()
      .cmp(&b.method_name.is_none())
      .then_with(|| a.method_name.cmp(&b.method_name))
      .then_with(|| a.path.cmp(&b.path))
  });
  rows
}

pub async fn list_operations(input: &Path, colors: &Colors) -> anyhow::Result<()> {
  let document = SpecLoader::open(input).await?.parse()?;

  let mut table = Table::new();
  table
    .load_preset("  ── ──            ")
    .set_content_arrangement(ContentArrangement::Dynamic)
    .set_width(term_width());

  let mut row = Row::new();
  row.add_cell(Cell::new("METHOD NAME").fg(IntoComfyColor::into(colors.label())));
  row.add_cell(Cell::new("VERB").fg(IntoComfyColor::into(colors.label())));
  row.add_cell(Cell::new("PATH").fg(IntoComfyColor::into(colors.label())));
  table.set_header(row);

  for operation in operation_rows(&document) {
    let name_cell = match operation.method_name {
      Some(name) => Cell::new(name)
        .fg(IntoComfyColor::into(colors.value()))
        .add_attribute(Attribute::Bold),
      None => Cell::new(MISSING_OPERATION_ID).fg(IntoComfyColor::into(colors.accent())),
    };

    let mut row = Row::new();
    row.add_cell(name_cell);
    row.add_cell(
      Cell::new(operation.method)
        .fg(IntoComfyColor::into(colors.accent()))
        .set_alignment(CellAlignment::Right),
    );
    row.add_cell(Cell::new(operation.path).fg(IntoComfyColor::into(colors.primary())));
    table.add_row(row);
  }

  println!("{table}");

  Ok(())
}
