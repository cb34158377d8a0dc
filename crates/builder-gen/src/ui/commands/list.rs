use std::{collections::HashSet, path::Path};

use comfy_table::{Attribute, Cell, ContentArrangement, Row, Table};

use crate::{
  generator::{CodeModel, FieldDescriptor, GenerationWarning, NamingPolicy, naming_warnings},
  ui::{Colors, colors::IntoComfyColor, term_width},
  utils::ManifestLoader,
};

/// Names generated for one field. `conflict` is set when the base name collides with another field's or
/// with a Java keyword.
#[derive(Debug, Clone, PartialEq, Eq)]
struct FieldRow {
  name: String,
  type_name: String,
  base_name: String,
  getter: String,
  setter: String,
  conflict: bool,
}

fn field_rows(fields: &[FieldDescriptor], naming: &dyn NamingPolicy) -> Vec<FieldRow> {
  let warnings = naming_warnings(fields, naming);
  let conflicting = warnings
    .iter()
    .filter_map(GenerationWarning::conflicting_base_name)
    .collect::<HashSet<_>>();

  fields
    .iter()
    .map(|field| {
      let base_name = naming.base_name(&field.name);
      FieldRow {
        name: field.name.clone(),
        type_name: field.type_name.clone(),
        conflict: conflicting.contains(base_name.as_str()),
        getter: naming.getter_name(&field.name, field.is_boolean()),
        setter: naming.setter_name(&field.name, field.is_boolean()),
        base_name,
      }
    })
    .collect()
}

pub async fn list_fields(manifest_path: &Path, naming: &dyn NamingPolicy, colors: &Colors) -> anyhow::Result<()> {
  let manifest = ManifestLoader::open(manifest_path).await?.parse()?;
  let type_name = manifest.enclosing_type_name()?;
  let rows = field_rows(&manifest.fields()?, naming);

  let mut table = Table::new();
  table
    .load_preset("  ── ──            ")
    .set_content_arrangement(ContentArrangement::Dynamic)
    .set_width(term_width());

  let mut header = Row::new();
  for title in ["FIELD", "TYPE", "BASE NAME", "GETTER", "SETTER", "MUTATOR"] {
    header.add_cell(Cell::new(title).fg(IntoComfyColor::into(colors.label())));
  }
  table.set_header(header);

  for row in rows {
    let base_color = if row.conflict { colors.accent() } else { colors.value() };
    let mut table_row = Row::new();
    table_row.add_cell(
      Cell::new(&row.name)
        .fg(IntoComfyColor::into(colors.value()))
        .add_attribute(Attribute::Bold),
    );
    table_row.add_cell(Cell::new(&row.type_name).fg(IntoComfyColor::into(colors.primary())));
    table_row.add_cell(Cell::new(&row.base_name).fg(IntoComfyColor::into(base_color)));
    table_row.add_cell(Cell::new(&row.getter).fg(IntoComfyColor::into(colors.primary())));
    table_row.add_cell(Cell::new(&row.setter).fg(IntoComfyColor::into(colors.primary())));
    table_row.add_cell(Cell::new(format!("Builder.{}", row.base_name)).fg(IntoComfyColor::into(colors.primary())));
    table.add_row(table_row);
  }

  println!("{type_name}");
  println!("{table}");

  Ok(())
}
